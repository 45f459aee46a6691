//! Resolved decklist data - the unit every rule evaluates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{ColorIdentity, ResolvedCard};

/// Commanders of a deck. Legal decks have one or two, so they stay inline.
pub type Commanders = SmallVec<[ResolvedCard; 2]>;

/// A fully resolved deck: commanders plus the rest of the list.
///
/// More than two commanders can be present when the user submitted them;
/// the commander rule reports that case rather than the type forbidding it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DecklistData {
    pub commanders: Commanders,
    pub decklist: Vec<ResolvedCard>,
}

impl DecklistData {
    #[must_use]
    pub fn new(
        commanders: impl IntoIterator<Item = ResolvedCard>,
        decklist: Vec<ResolvedCard>,
    ) -> Self {
        Self {
            commanders: commanders.into_iter().collect(),
            decklist,
        }
    }

    /// Sum of decklist quantities, commanders excluded.
    ///
    /// Counted in `u64`: each quantity is a `u32`, so the sum cannot overflow.
    #[must_use]
    pub fn decklist_card_count(&self) -> u64 {
        self.decklist.iter().map(|card| u64::from(card.quantity)).sum()
    }

    /// Total deck size: decklist quantities plus one per commander entry.
    #[must_use]
    pub fn total_card_count(&self) -> u64 {
        let commanders = u64::try_from(self.commanders.len()).unwrap_or(u64::MAX);
        self.decklist_card_count().saturating_add(commanders)
    }

    /// Union of all commanders' color identities, sorted and deduplicated.
    #[must_use]
    pub fn commander_color_identity(&self) -> ColorIdentity {
        let mut colors: ColorIdentity = self
            .commanders
            .iter()
            .flat_map(|commander| commander.card.color_identity.iter().copied())
            .collect();
        colors.sort_unstable();
        colors.dedup();
        colors
    }

    /// Commanders first, then the decklist.
    pub fn all_cards(&self) -> impl Iterator<Item = &ResolvedCard> {
        self.commanders.iter().chain(self.decklist.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardAttributes, Color};

    fn card(name: &str, quantity: u32, colors: &[Color]) -> ResolvedCard {
        ResolvedCard::new(
            CardAttributes::new(name, "Creature").with_colors(colors.iter().copied()),
            quantity,
        )
    }

    #[test]
    fn test_counts() {
        let deck = DecklistData::new(
            [card("Tymna", 1, &[Color::White, Color::Black])],
            vec![card("Swamp", 30, &[]), card("Plains", 20, &[])],
        );

        assert_eq!(deck.decklist_card_count(), 50);
        assert_eq!(deck.total_card_count(), 51);
    }

    #[test]
    fn test_commander_quantity_is_ignored() {
        let deck = DecklistData::new([card("Odd", 3, &[])], Vec::new());
        assert_eq!(deck.total_card_count(), 1);
    }

    #[test]
    fn test_counts_past_u32_max() {
        let deck = DecklistData::new(
            [card("Cmdr", 1, &[])],
            vec![card("Forest", u32::MAX, &[]), card("Island", u32::MAX, &[])],
        );

        assert_eq!(deck.decklist_card_count(), 2 * u64::from(u32::MAX));
        assert_eq!(deck.total_card_count(), 2 * u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_color_identity_union() {
        let deck = DecklistData::new(
            [
                card("Tymna", 1, &[Color::White, Color::Black]),
                card("Thrasios", 1, &[Color::Green, Color::Blue]),
                card("Other", 1, &[Color::Black]),
            ],
            Vec::new(),
        );

        assert_eq!(
            deck.commander_color_identity().as_slice(),
            &[Color::White, Color::Blue, Color::Black, Color::Green]
        );
    }

    #[test]
    fn test_all_cards_order() {
        let deck = DecklistData::new(
            [card("Cmdr", 1, &[])],
            vec![card("A", 1, &[]), card("B", 1, &[])],
        );
        let names: Vec<_> = deck.all_cards().map(ResolvedCard::name).collect();
        assert_eq!(names, vec!["Cmdr", "A", "B"]);
    }
}
