//! Deck construction rules: deck size, singleton, color identity.

use crate::decklist::DecklistData;

/// The deck must contain exactly `required` cards, one per commander entry
/// plus the decklist quantities.
#[must_use]
pub fn is_decklist_at_required_size(required: u32, deck: &DecklistData) -> Vec<String> {
    let total = deck.total_card_count();
    if total == u64::from(required) {
        return Vec::new();
    }

    vec![format!(
        "Your decklist contains {total} cards instead of {required}. Please modify your decklist to meet this requirement and resubmit."
    )]
}

/// At most one copy of each decklist card, basic lands excepted.
#[must_use]
pub fn is_decklist_singleton(deck: &DecklistData) -> Vec<String> {
    deck.decklist
        .iter()
        .filter(|entry| entry.quantity > 1 && !entry.card.is_basic_land())
        .map(|entry| {
            format!(
                "You have {} copies of \"{}\" when only one is allowed. Please modify your decklist to only contain 1 copy of this card and resubmit.",
                entry.quantity,
                entry.name()
            )
        })
        .collect()
}

/// Decklist cards must stay within the commanders' combined color identity.
///
/// A deck without commanders has no identity to check against.
#[must_use]
pub fn is_in_commander_color_identity(deck: &DecklistData) -> Vec<String> {
    if deck.commanders.is_empty() {
        return Vec::new();
    }

    let identity = deck.commander_color_identity();

    deck.decklist
        .iter()
        .filter(|entry| {
            entry
                .card
                .color_identity
                .iter()
                .any(|color| !identity.contains(color))
        })
        .map(|entry| {
            format!(
                "The card \"{}\" does not match your commander's color identity. Please remove this card and resubmit.",
                entry.name()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardAttributes, Color, ResolvedCard};

    fn card(name: &str, type_line: &str, quantity: u32) -> ResolvedCard {
        ResolvedCard::new(CardAttributes::new(name, type_line), quantity)
    }

    fn colored(name: &str, colors: &[Color]) -> ResolvedCard {
        ResolvedCard::new(
            CardAttributes::new(name, "Creature").with_colors(colors.iter().copied()),
            1,
        )
    }

    #[test]
    fn test_size_mismatch() {
        let deck = DecklistData::new(
            [card("Cmdr", "Legendary Creature", 1)],
            vec![card("Forest", "Basic Land — Forest", 98)],
        );

        assert_eq!(
            is_decklist_at_required_size(100, &deck),
            vec![
                "Your decklist contains 99 cards instead of 100. Please modify your decklist to meet this requirement and resubmit."
            ]
        );
    }

    #[test]
    fn test_size_exact() {
        let deck = DecklistData::new(
            [card("Tymna", "Legendary Creature", 1), card("Kraum", "Legendary Creature", 1)],
            vec![card("Island", "Basic Land — Island", 90), card("Sol Ring", "Artifact", 8)],
        );
        assert!(is_decklist_at_required_size(100, &deck).is_empty());
    }

    #[test]
    fn test_size_without_commander() {
        let deck = DecklistData::new([], vec![card("Island", "Basic Land — Island", 60)]);
        assert!(is_decklist_at_required_size(60, &deck).is_empty());
        assert_eq!(is_decklist_at_required_size(100, &deck).len(), 1);
    }

    #[test]
    fn test_singleton() {
        let deck = DecklistData::new(
            [],
            vec![
                card("Sol Ring", "Artifact", 2),
                card("Arcane Signet", "Artifact", 1),
                card("Island", "Basic Land — Island", 30),
            ],
        );

        assert_eq!(
            is_decklist_singleton(&deck),
            vec![
                "You have 2 copies of \"Sol Ring\" when only one is allowed. Please modify your decklist to only contain 1 copy of this card and resubmit."
            ]
        );
    }

    #[test]
    fn test_singleton_ignores_commanders() {
        let deck = DecklistData::new([card("Cmdr", "Legendary Creature", 2)], Vec::new());
        assert!(is_decklist_singleton(&deck).is_empty());
    }

    #[test]
    fn test_color_identity() {
        let deck = DecklistData::new(
            [colored("Cmdr", &[Color::Blue, Color::White])],
            vec![
                colored("Counterspell", &[Color::Blue]),
                colored("Dark Ritual", &[Color::Blue, Color::Black]),
                colored("Sol Ring", &[]),
            ],
        );

        assert_eq!(
            is_in_commander_color_identity(&deck),
            vec![
                "The card \"Dark Ritual\" does not match your commander's color identity. Please remove this card and resubmit."
            ]
        );
    }

    #[test]
    fn test_color_identity_union_of_partners() {
        let deck = DecklistData::new(
            [
                colored("Tymna", &[Color::White, Color::Black]),
                colored("Thrasios", &[Color::Green, Color::Blue]),
            ],
            vec![colored("Deathrite Shaman", &[Color::Black, Color::Green])],
        );
        assert!(is_in_commander_color_identity(&deck).is_empty());
    }

    #[test]
    fn test_color_identity_without_commander() {
        let deck = DecklistData::new([], vec![colored("Lightning Bolt", &[Color::Red])]);
        assert!(is_in_commander_color_identity(&deck).is_empty());
    }
}
