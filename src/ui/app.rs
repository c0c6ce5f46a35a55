use crate::game::{Connect4, GameState, Glyphs, Player, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Terminal front end. Tracks whose turn it is and which column is selected;
/// all rules live in the engine.
pub struct App {
    engine: Connect4,
    glyphs: Glyphs,
    first_player: Player,
    turn: Player,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(first_player: Player, glyphs: Glyphs) -> Self {
        App {
            engine: Connect4::new(),
            glyphs,
            first_player,
            turn: first_player,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    pub fn engine(&self) -> &Connect4 {
        &self.engine
    }

    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    /// Player to move next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(std::time::Duration::from_millis(100))? {
            return Ok(());
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            _ => {}
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_token();
            }
            KeyCode::Char('r') => {
                self.restart();
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char(c) => {
                if let Some(column) = column_key(c) {
                    self.selected_column = column;
                    self.drop_token();
                }
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        debug!("restarting game");
        self.engine = Connect4::new();
        self.turn = self.first_player;
        self.selected_column = COLS / 2;
    }

    /// Drop the current player's token in the selected column
    fn drop_token(&mut self) {
        if self.engine.state().is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.engine.put_token(self.turn, self.selected_column) {
            Ok(_) => match self.engine.state() {
                GameState::Continue => self.turn = self.turn.other(),
                GameState::Win => {
                    self.message = Some(format!("{} wins!", self.turn.name()));
                }
                GameState::Draw => {
                    self.message = Some("It's a draw!".to_string());
                }
            },
            Err(e) => {
                self.message = Some(format!("{}!", capitalize(&e.to_string())));
            }
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}

/// 0-based column for a digit key `1..=COLS`.
fn column_key(c: char) -> Option<usize> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).filter(|&column| column < COLS)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Player::Red, Glyphs::default())
    }
}
