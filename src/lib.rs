//! # Connect Four
//!
//! A Connect Four rules engine with two front ends: a terminal UI built with
//! Ratatui and a line-mode prompt.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: grid, tokens, move application, win/draw detection
//! - [`ui`] — Terminal UI: board view with column selector
//! - [`prompt`] — Line-mode adapter over any reader/writer
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod prompt;
pub mod ui;
