use crate::dto::{player_dto::PlayerRecord, roster_dto::ResolvedPick};

/// Strategy for turning a free-text roster line into a player.
pub trait NameMatcher: Send + Sync {
    fn resolve(&self, text: &str, players: &[PlayerRecord]) -> ResolvedPick;
}

/// Case-insensitive containment of the input inside `"{first} {second}"`.
///
/// Deliberately permissive: "son" matches every player whose full name
/// contains those letters, and the first one in dataset order wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubstringMatcher;

impl NameMatcher for SubstringMatcher {
    fn resolve(&self, text: &str, players: &[PlayerRecord]) -> ResolvedPick {
        let needle = text.to_lowercase();

        match players
            .iter()
            .find(|p| p.full_name().to_lowercase().contains(&needle))
        {
            Some(player) => ResolvedPick::Found {
                input: text.to_string(),
                player: player.clone(),
            },
            None => ResolvedPick::NotFound { input: text.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::player;

    #[test]
    fn matching_ignores_case() {
        let players = vec![player(1, "Mohamed", "Salah", "7.0", "a")];
        let pick = SubstringMatcher.resolve("salah", &players);
        assert_eq!(pick.player().map(|p| p.id), Some(1));

        let pick = SubstringMatcher.resolve("MOHAMED SAL", &players);
        assert_eq!(pick.player().map(|p| p.id), Some(1));
    }

    #[test]
    fn first_match_in_dataset_order_wins() {
        let players = vec![
            player(1, "Heung-Min", "Son", "5.0", "a"),
            player(2, "Jason", "Steele", "2.0", "a"),
        ];
        let pick = SubstringMatcher.resolve("son", &players);
        assert_eq!(pick.player().map(|p| p.id), Some(1));
    }

    #[test]
    fn unmatched_input_is_preserved() {
        let players = vec![player(1, "Mohamed", "Salah", "7.0", "a")];
        let pick = SubstringMatcher.resolve("Messi", &players);
        assert!(pick.player().is_none());
        assert_eq!(pick.input(), "Messi");
    }
}
