//! Terminal UI for playing Connect Four with two humans at one keyboard.

mod app;
mod game_view;

pub use app::App;
