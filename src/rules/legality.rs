//! Format legality.

use crate::cards::{FormatId, Legality};
use crate::decklist::DecklistData;

/// Every commander and decklist card must be `legal` in `format`.
#[must_use]
pub fn is_format_legal(format: &FormatId, deck: &DecklistData) -> Vec<String> {
    let commanders = deck
        .commanders
        .iter()
        .filter(|commander| !commander.card.is_legal_in(format))
        .map(|commander| {
            format!(
                "Your commander \"{}\" is not legal in this format. Please select a different commander and resubmit.",
                commander.name()
            )
        });

    let decklist = deck
        .decklist
        .iter()
        .filter(|entry| !entry.card.is_legal_in(format))
        .map(|entry| match entry.card.legality(format) {
            Legality::Banned => format!(
                "The card \"{}\" is a banned card. Please replace this card and resubmit.",
                entry.name()
            ),
            _ => format!(
                "The card \"{}\" is not legal in this format. Please replace this card and resubmit.",
                entry.name()
            ),
        });

    commanders.chain(decklist).collect()
}
