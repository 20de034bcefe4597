//! Cross-frontend configuration.

/// Configuration shared by any frontend implementation.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
}

/// Message log tuning.
#[derive(Clone, Debug)]
pub struct MessageConfig {
    /// Maximum number of retained entries.
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}
