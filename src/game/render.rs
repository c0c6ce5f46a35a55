//! Plain-text rendering of a grid, one glyph per cell.

use serde::{Deserialize, Serialize};

use super::grid::{Grid, COLS, ROWS};
use super::token::Token;

/// Symbols used to draw the board. Deserialized from the `[display]` table of
/// the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    pub red: String,
    pub yellow: String,
    pub empty: String,
    pub win: String,
    pub border: String,
}

impl Glyphs {
    /// Single-character glyphs for terminals without emoji support.
    pub fn ascii() -> Self {
        Glyphs {
            red: "R".into(),
            yellow: "Y".into(),
            empty: ".".into(),
            win: "*".into(),
            border: "=".into(),
        }
    }

    /// Glyph for a cell, empty or occupied.
    pub fn cell(&self, cell: Option<Token>) -> &str {
        match cell {
            None => &self.empty,
            Some(Token::Red) => &self.red,
            Some(Token::Yellow) => &self.yellow,
            Some(Token::Win) => &self.win,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs {
            red: "🔴".into(),
            yellow: "🟡".into(),
            empty: "⚪".into(),
            win: "⭐".into(),
            border: "🟦".into(),
        }
    }
}

/// Render the grid top row first: a header of 1-based column numbers, one line
/// per row, then a bottom border.
pub fn render_grid(grid: &Grid, glyphs: &Glyphs) -> String {
    let mut out = String::new();

    for col in 0..COLS {
        out.push_str(&format!("  {}", col + 1));
    }
    out.push_str("  \n");

    for row in (0..ROWS).rev() {
        for col in 0..COLS {
            out.push(' ');
            out.push_str(glyphs.cell(grid.get(col, row)));
        }
        out.push('\n');
    }

    out.push_str(&glyphs.border.repeat(COLS + 4));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_ascii() {
        let out = render_grid(&Grid::new(), &Glyphs::ascii());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), ROWS + 2);
        assert_eq!(lines[0], "  1  2  3  4  5  6  7  ");
        for line in &lines[1..=ROWS] {
            assert_eq!(*line, " . . . . . . .");
        }
        assert_eq!(lines[ROWS + 1], "=".repeat(COLS + 4));
    }

    #[test]
    fn test_render_puts_row_zero_at_bottom() {
        let mut grid = Grid::new();
        grid.drop_token(0, Token::Red).unwrap();
        grid.drop_token(0, Token::Yellow).unwrap();
        grid.mark_win(&[(0, 1)]);

        let out = render_grid(&grid, &Glyphs::ascii());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[ROWS], " R . . . . . .");
        assert_eq!(lines[ROWS - 1], " * . . . . . .");
    }

    #[test]
    fn test_display_uses_default_glyphs() {
        let mut grid = Grid::new();
        grid.drop_token(6, Token::Yellow).unwrap();
        let out = grid.to_string();
        assert!(out.contains("🟡"));
        assert!(out.ends_with(&format!("{}\n", "🟦".repeat(COLS + 4))));
    }
}
