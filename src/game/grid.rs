use std::fmt;

use super::render::{render_grid, Glyphs};
use super::token::{Player, Token};
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// A cell is either empty or holds a token.
pub type Cell = Option<Token>;

/// Column/row offset a ray advances by on each step. Row grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub dc: isize,
    pub dr: isize,
}

impl Step {
    pub const LEFT: Step = Step { dc: -1, dr: 0 };
    pub const RIGHT: Step = Step { dc: 1, dr: 0 };
    pub const DOWN: Step = Step { dc: 0, dr: -1 };
    pub const LEFT_DOWN: Step = Step { dc: -1, dr: -1 };
    pub const RIGHT_UP: Step = Step { dc: 1, dr: 1 };
    pub const LEFT_UP: Step = Step { dc: -1, dr: 1 };
    pub const RIGHT_DOWN: Step = Step { dc: 1, dr: -1 };
}

/// The four line orientations evaluated around a freshly played cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Bottom-left to top-right, `/`
    Rising,
    /// Top-left to bottom-right, `\`
    Falling,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Horizontal, Axis::Vertical, Axis::Rising, Axis::Falling];

    /// Rays that make up this axis. Vertical only looks down: nothing can sit
    /// above a token at the moment it is dropped.
    pub fn rays(self) -> &'static [Step] {
        match self {
            Axis::Horizontal => &[Step::LEFT, Step::RIGHT],
            Axis::Vertical => &[Step::DOWN],
            Axis::Rising => &[Step::LEFT_DOWN, Step::RIGHT_UP],
            Axis::Falling => &[Step::LEFT_UP, Step::RIGHT_DOWN],
        }
    }
}

/// Same-token cells needed on an axis, besides the played one, to win.
pub const WIN_EXTENSION: usize = 3;

/// The 7x6 board, addressed by `(column, row)` with row 0 at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [[Cell; ROWS]; COLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Grid {
            cells: [[None; ROWS]; COLS],
        }
    }

    /// Build a grid from explicit column contents, `cells[column][row]`.
    ///
    /// No gravity check is applied, so hand-written positions may contain
    /// floating tokens; see [`Grid::is_settled`].
    pub fn from_columns(cells: [[Cell; ROWS]; COLS]) -> Self {
        Grid { cells }
    }

    /// Get the cell at a specific position
    pub fn get(&self, column: usize, row: usize) -> Cell {
        self.cells[column][row]
    }

    /// A column is full once its top row is occupied. Out-of-range columns
    /// count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLS {
            return true;
        }
        self.cells[column][ROWS - 1].is_some()
    }

    /// Columns that can still take a token, ascending.
    pub fn available_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Check if the grid is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of occupied cells in a column.
    pub fn height(&self, column: usize) -> usize {
        self.cells[column].iter().filter(|cell| cell.is_some()).count()
    }

    /// True when every column is a contiguous stack resting on row 0.
    pub fn is_settled(&self) -> bool {
        self.cells.iter().all(|column| {
            let height = column.iter().take_while(|cell| cell.is_some()).count();
            column[height..].iter().all(|cell| cell.is_none())
        })
    }

    /// Drop a token in a column, returns the row where it landed
    pub fn drop_token(&mut self, column: usize, token: Token) -> Result<usize, MoveError> {
        if column >= COLS {
            return Err(MoveError::ColumnOutOfRange { column });
        }
        if self.is_column_full(column) {
            return Err(MoveError::IllegalMove { column });
        }

        let row = self.cells[column]
            .iter()
            .position(|cell| cell.is_none())
            .ok_or(MoveError::IllegalMove { column })?;
        self.cells[column][row] = Some(token);
        Ok(row)
    }

    /// The cell `distance` steps away from `(column, row)`, if it is on the board.
    fn offset(column: usize, row: usize, step: Step, distance: usize) -> Option<(usize, usize)> {
        let c = column as isize + step.dc * distance as isize;
        let r = row as isize + step.dr * distance as isize;
        if c < 0 || r < 0 || c >= COLS as isize || r >= ROWS as isize {
            return None;
        }
        Some((c as usize, r as usize))
    }

    /// Count consecutive cells holding `token`, starting one step away from
    /// `(column, row)` and walking along `step`. The origin is not counted, and
    /// an origin off the board has no rays.
    pub fn ray_len(&self, column: usize, row: usize, step: Step, token: Token) -> usize {
        if column >= COLS || row >= ROWS {
            return 0;
        }
        let mut len = 0;
        while let Some((c, r)) = Self::offset(column, row, step, len + 1) {
            if self.cells[c][r] != Some(token) {
                break;
            }
            len += 1;
        }
        len
    }

    /// Sum of the ray lengths making up `axis` around `(column, row)`.
    pub fn axis_len(&self, column: usize, row: usize, axis: Axis, token: Token) -> usize {
        axis.rays()
            .iter()
            .map(|&step| self.ray_len(column, row, step, token))
            .sum()
    }

    /// Every axis through `(column, row)` on which `player` has at least four
    /// in a row, assuming `player` just played there. All axes are checked.
    pub fn winning_axes(&self, column: usize, row: usize, player: Player) -> Vec<Axis> {
        let token = player.token();
        Axis::ALL
            .into_iter()
            .filter(|&axis| self.axis_len(column, row, axis, token) >= WIN_EXTENSION)
            .collect()
    }

    /// Cells forming the winning lines through `(column, row)`, origin first.
    /// Empty when `player` has no line there.
    pub fn winning_cells(&self, column: usize, row: usize, player: Player) -> Vec<(usize, usize)> {
        let axes = self.winning_axes(column, row, player);
        if axes.is_empty() {
            return Vec::new();
        }

        let token = player.token();
        let mut cells = vec![(column, row)];
        for axis in axes {
            for &step in axis.rays() {
                let len = self.ray_len(column, row, step, token);
                cells.extend((1..=len).filter_map(|d| Self::offset(column, row, step, d)));
            }
        }
        cells
    }

    /// Overwrite the given cells with `Token::Win`. Occupancy is unchanged, so
    /// gravity still holds.
    pub(crate) fn mark_win(&mut self, cells: &[(usize, usize)]) {
        for &(column, row) in cells {
            if self.cells[column][row].is_some() {
                self.cells[column][row] = Some(Token::Win);
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_grid(self, &Glyphs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: Cell = Some(Token::Red);
    const Y: Cell = Some(Token::Yellow);
    const E: Cell = None;

    fn empty_columns() -> [[Cell; ROWS]; COLS] {
        [[E; ROWS]; COLS]
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        for col in 0..COLS {
            for row in 0..ROWS {
                assert_eq!(grid.get(col, row), None);
            }
        }
        assert_eq!(grid.available_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert!(grid.is_settled());
    }

    #[test]
    fn test_drop_token_lands_on_bottom() {
        let mut grid = Grid::new();

        let row = grid.drop_token(3, Token::Red).unwrap();
        assert_eq!(row, 0);
        assert_eq!(grid.get(3, 0), R);

        let row = grid.drop_token(3, Token::Yellow).unwrap();
        assert_eq!(row, 1);
        assert_eq!(grid.get(3, 1), Y);
        assert_eq!(grid.height(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut grid = Grid::new();
        for _ in 0..ROWS {
            grid.drop_token(0, Token::Red).unwrap();
        }

        assert!(grid.is_column_full(0));
        assert_eq!(
            grid.drop_token(0, Token::Yellow),
            Err(MoveError::IllegalMove { column: 0 })
        );
        assert_eq!(grid.available_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut grid = Grid::new();
        assert!(grid.is_column_full(COLS));
        assert_eq!(
            grid.drop_token(COLS, Token::Red),
            Err(MoveError::ColumnOutOfRange { column: COLS })
        );
    }

    #[test]
    fn test_full_grid() {
        let mut grid = Grid::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                grid.drop_token(col, Token::Red).unwrap();
            }
        }
        assert!(grid.is_full());
        assert!(grid.available_columns().is_empty());
    }

    #[test]
    fn test_floating_token_is_not_settled() {
        let mut columns = empty_columns();
        columns[2][0] = R;
        columns[2][3] = Y;
        assert!(!Grid::from_columns(columns).is_settled());
    }

    #[test]
    fn test_ray_stops_at_mismatch_and_edge() {
        let mut columns = empty_columns();
        columns[0][0] = R;
        columns[1][0] = R;
        columns[2][0] = Y;
        let grid = Grid::from_columns(columns);

        assert_eq!(grid.ray_len(2, 0, Step::LEFT, Token::Red), 2);
        assert_eq!(grid.ray_len(0, 0, Step::LEFT, Token::Red), 0);
        assert_eq!(grid.ray_len(3, 0, Step::LEFT, Token::Red), 0);
    }

    #[test]
    fn test_vertical_axis_ignores_cells_above() {
        let mut columns = empty_columns();
        columns[4] = [Y, Y, E, Y, Y, Y];
        let grid = Grid::from_columns(columns);

        assert_eq!(grid.axis_len(4, 2, Axis::Vertical, Token::Yellow), 2);
        assert!(grid.winning_axes(4, 2, Player::Yellow).is_empty());
    }

    #[test]
    fn test_horizontal_win_from_middle() {
        let mut grid = Grid::new();
        for col in [0, 1, 3] {
            grid.drop_token(col, Token::Red).unwrap();
        }
        let row = grid.drop_token(2, Token::Red).unwrap();

        assert_eq!(grid.winning_axes(2, row, Player::Red), vec![Axis::Horizontal]);
        let mut cells = grid.winning_cells(2, row, Player::Red);
        cells.sort();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn test_five_in_a_row_is_still_a_win() {
        let mut grid = Grid::new();
        for col in [0, 1, 3, 4] {
            grid.drop_token(col, Token::Yellow).unwrap();
        }
        let row = grid.drop_token(2, Token::Yellow).unwrap();
        assert_eq!(grid.axis_len(2, row, Axis::Horizontal, Token::Yellow), 4);
        assert_eq!(grid.winning_cells(2, row, Player::Yellow).len(), 5);
    }

    #[test]
    fn test_no_win_with_three() {
        let mut grid = Grid::new();
        for col in 0..3 {
            grid.drop_token(col, Token::Red).unwrap();
        }
        assert!(grid.winning_axes(1, 0, Player::Red).is_empty());
        assert!(grid.winning_cells(1, 0, Player::Red).is_empty());
    }

    #[test]
    fn test_other_players_line_does_not_count() {
        let mut grid = Grid::new();
        for col in 0..3 {
            grid.drop_token(col, Token::Yellow).unwrap();
        }
        let row = grid.drop_token(3, Token::Red).unwrap();
        assert!(grid.winning_axes(3, row, Player::Red).is_empty());
    }

    #[test]
    fn test_origin_off_the_board_has_no_line() {
        let mut grid = Grid::new();
        for col in 1..=3 {
            grid.drop_token(col, Token::Red).unwrap();
        }

        assert_eq!(grid.ray_len(usize::MAX, 0, Step::RIGHT, Token::Red), 0);
        assert_eq!(grid.ray_len(4, ROWS, Step::DOWN, Token::Red), 0);
        assert!(grid.winning_axes(usize::MAX, 0, Player::Red).is_empty());
        assert!(grid.winning_cells(COLS, 0, Player::Red).is_empty());
    }

    #[test]
    fn test_mark_win_skips_empty_cells() {
        let mut grid = Grid::new();
        grid.drop_token(0, Token::Red).unwrap();
        grid.mark_win(&[(0, 0), (1, 0)]);
        assert_eq!(grid.get(0, 0), Some(Token::Win));
        assert_eq!(grid.get(1, 0), None);
        assert!(grid.is_settled());
    }
}
