//! Line-mode front end: prints the grid, reads 1-based column numbers, and
//! announces the result. Works over any reader/writer pair so games can be
//! scripted.

use std::io::{BufRead, Write};

use log::debug;

use crate::error::PromptError;
use crate::game::{Connect4, GameState, Glyphs, Player, COLS};

const WELCOME: &str = r"
 +--------------------------------------+
 |            CONNECT FOUR              |
 |   line up four tokens to win         |
 +--------------------------------------+
";

pub struct Prompt<R, W> {
    input: R,
    output: W,
    glyphs: Glyphs,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W, glyphs: Glyphs) -> Self {
        Prompt {
            input,
            output,
            glyphs,
        }
    }

    /// Give back the writer, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask `player` for a column until a legal one is entered. Returns the
    /// 0-based column.
    ///
    /// Asking on a full board is a sequencing bug in the caller and fails
    /// with [`PromptError::EmptyMoveSet`].
    pub fn human_choice(&mut self, engine: &Connect4, player: Player) -> Result<usize, PromptError> {
        let available = engine.available_moves();
        if available.is_empty() {
            return Err(PromptError::EmptyMoveSet);
        }

        let mut line = String::new();
        loop {
            write!(
                self.output,
                "{} player: choose a column (1-{COLS}): ",
                player.name()
            )?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PromptError::InputClosed);
            }

            let choice = line
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .filter(|col| available.contains(col));
            match choice {
                Some(col) => return Ok(col),
                None => {
                    debug!("rejected column input {:?}", line.trim());
                    writeln!(self.output, "Please enter a valid column")?;
                }
            }
        }
    }

    /// Run a whole game, alternating players from `first`, and return the
    /// final state.
    pub fn play(&mut self, engine: &mut Connect4, first: Player) -> Result<GameState, PromptError> {
        writeln!(self.output, "{WELCOME}")?;

        let mut player = first;
        while !engine.state().is_terminal() {
            write!(self.output, "{}", engine.display_grid(&self.glyphs))?;
            let column = self.human_choice(engine, player)?;
            engine.put_token(player, column)?;
            if !engine.state().is_terminal() {
                player = player.other();
            }
        }

        write!(self.output, "{}", engine.display_grid(&self.glyphs))?;
        writeln!(self.output, "{}", result_banner(engine))?;
        writeln!(self.output, "Game over! Thanks for playing.")?;
        Ok(engine.state())
    }
}

/// End-of-game announcement for a finished engine.
pub fn result_banner(engine: &Connect4) -> String {
    match (engine.state(), engine.winner()) {
        (GameState::Win, Some(player)) => {
            format!(">>>> {} IS VICTORIOUS <<<<", player.name().to_uppercase())
        }
        (GameState::Draw, _) => "--- THE BOARD IS FULL: DRAW ---".to_string(),
        _ => String::new(),
    }
}
