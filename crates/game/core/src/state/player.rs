use crate::targets::TargetSet;

/// A registered player and the targets they have knocked down so far.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
    hits: TargetSet,
}

impl Player {
    /// Creates a player with an empty hit set. The name is stored as given;
    /// trimming and uniqueness checks happen in the add-player command.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hits: TargetSet::EMPTY,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Targets this player has hit across all their turns.
    pub fn hits(&self) -> TargetSet {
        self.hits
    }

    /// Current score. Derived from the hit set rather than stored, so the
    /// two can never drift apart.
    pub fn score(&self) -> usize {
        self.hits.len()
    }

    /// True once the player has hit every target.
    pub fn has_won(&self) -> bool {
        self.hits.is_full()
    }

    /// Merges a turn's confirmed selection into the hit set.
    pub(crate) fn record_hits(&mut self, targets: TargetSet) {
        self.hits = self.hits.union(targets);
    }
}
