use log::{debug, info};

use super::grid::{Grid, COLS};
use super::render::{render_grid, Glyphs};
use super::token::Player;
use crate::error::MoveError;

/// Outcome of the most recent move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    Continue,
    Win,
    Draw,
}

impl GameState {
    /// Check if game is over
    pub fn is_terminal(self) -> bool {
        self != GameState::Continue
    }
}

/// The Connect Four engine: owns the grid, the last mover and the derived
/// game state.
///
/// The engine does not alternate turns on its own; whichever player is passed
/// to [`Connect4::put_token`] is the one evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connect4 {
    grid: Grid,
    current_token: Player,
    state: GameState,
}

impl Connect4 {
    /// Empty grid, Red as the current token.
    pub fn new() -> Self {
        Self::with_grid(Grid::new(), Player::Red)
    }

    /// Start from an existing position. The grid is taken as-is, floating
    /// tokens included.
    pub fn with_grid(grid: Grid, current_token: Player) -> Self {
        if !grid.is_settled() {
            debug!("engine created on a grid with floating tokens");
        }
        Connect4 {
            grid,
            current_token,
            state: GameState::Continue,
        }
    }

    /// Get reference to grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_token(&self) -> Player {
        self.current_token
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The player whose move ended the game with a line, if any.
    pub fn winner(&self) -> Option<Player> {
        match self.state {
            GameState::Win => Some(self.current_token),
            _ => None,
        }
    }

    /// Legal columns, ascending. Recomputed on every call.
    pub fn available_moves(&self) -> Vec<usize> {
        self.grid.available_columns()
    }

    /// A column is playable while its top row is empty. Columns outside the
    /// board are never playable.
    pub fn check_legal_move(&self, column: usize) -> bool {
        column < COLS && !self.grid.is_column_full(column)
    }

    /// Drop `player`'s token in `column` and re-evaluate the game from the
    /// landing cell. Returns the row the token landed in.
    pub fn put_token(&mut self, player: Player, column: usize) -> Result<usize, MoveError> {
        if column >= COLS {
            return Err(MoveError::ColumnOutOfRange { column });
        }
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.check_legal_move(column) {
            return Err(MoveError::IllegalMove { column });
        }

        let row = self.grid.drop_token(column, player.token())?;
        self.current_token = player;
        self.state = self.check_state(column, row);
        debug!(
            "{} played column {} row {} -> {:?}",
            player.name(),
            column + 1,
            row,
            self.state
        );

        match self.state {
            GameState::Win => {
                let cells = self.grid.winning_cells(column, row, player);
                self.grid.mark_win(&cells);
                info!("{} wins with {} cells in line", player.name(), cells.len());
            }
            GameState::Draw => info!("board full, game drawn"),
            GameState::Continue => {}
        }

        Ok(row)
    }

    /// Evaluate the position as if the current token had just played at
    /// `(column, row)`.
    ///
    /// A full board is a draw even if the last move also completed a line:
    /// the draw check runs first.
    pub fn check_state(&self, column: usize, row: usize) -> GameState {
        if self.available_moves().is_empty() {
            return GameState::Draw;
        }
        if self.check_victory(column, row) {
            return GameState::Win;
        }
        GameState::Continue
    }

    /// Whether the current token has four in a row through `(column, row)`.
    /// Coordinates off the board never win.
    pub fn check_victory(&self, column: usize, row: usize) -> bool {
        !self
            .grid
            .winning_axes(column, row, self.current_token)
            .is_empty()
    }

    /// Render the grid as text.
    pub fn display_grid(&self, glyphs: &Glyphs) -> String {
        render_grid(&self.grid, glyphs)
    }
}

impl Default for Connect4 {
    fn default() -> Self {
        Self::new()
    }
}
