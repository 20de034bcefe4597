//! Rendering: terminal lifecycle, layout routing, and widgets.
pub mod terminal;
pub mod ui;
pub mod widgets;
