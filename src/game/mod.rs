//! Core Connect Four game logic: grid, tokens, and the engine that applies
//! moves and decides wins and draws.

mod engine;
mod grid;
mod render;
mod token;

pub use engine::{Connect4, GameState};
pub use grid::{Axis, Cell, Grid, Step, COLS, ROWS, WIN_EXTENSION};
pub use render::{render_grid, Glyphs};
pub use token::{Player, Token};
