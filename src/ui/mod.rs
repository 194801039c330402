//! Terminal UI: renders the board with Ratatui and turns key presses into
//! column selections.

mod app;
mod board_widget;
mod game_view;

pub use app::App;
