//! Widget collection for the terminal UI.
pub mod footer;
pub mod header;
pub mod messages;
pub mod scoreboard;
pub mod setup_screen;
pub mod target_grid;
pub mod winner;
