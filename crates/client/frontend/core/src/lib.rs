//! Cross-frontend primitives for presenting the tracker.
//!
//! Houses the view model derived from the game state, message logging, and
//! frontend configuration that both the CLI and future graphical clients
//! can reuse.
pub mod config;
pub mod format;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{PhaseView, PlayerView, TargetView, TurnView, ViewModel};
