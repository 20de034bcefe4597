//! Small formatting helpers shared by frontends.

use game_core::{Animal, GameConfig};

/// "3/8"-style score fraction.
pub fn score_fraction(score: usize) -> String {
    format!("{score}/{}", GameConfig::TARGET_COUNT)
}

/// Emoji-plus-name label for a target, e.g. "🐧 Penguin".
pub fn target_label(animal: Animal) -> String {
    format!("{} {animal}", animal.emoji())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_scores_over_the_target_count() {
        assert_eq!(score_fraction(0), "0/8");
        assert_eq!(score_fraction(8), "8/8");
    }

    #[test]
    fn labels_combine_emoji_and_name() {
        assert_eq!(target_label(Animal::Lion), "\u{1F981} Lion");
    }
}
