//! Commander validity.
//!
//! A deck has one legendary creature as commander, or two commanders whose
//! abilities allow pairing: Partner, Friends forever, a "choose a
//! Background" commander with a Background, or a commander whose text names
//! its partner.

use crate::cards::{CardAttributes, FormatId};
use crate::decklist::DecklistData;

const PARTNER: &str = "Partner";
const PARTNER_WITH: &str = "Partner with";
const FRIENDS_FOREVER: &str = "Friends forever";

/// Check the commander slot. Only the Commander format is checked.
#[must_use]
pub fn is_commander_valid(format: &FormatId, deck: &DecklistData) -> Vec<String> {
    if !format.is_commander() {
        return Vec::new();
    }

    match deck.commanders.as_slice() {
        [] => vec![
            "Your deck does not have a commander. Please update your decklist and resubmit.".to_string(),
        ],
        [commander] => {
            let card = &commander.card;
            if card.has_type("legendary") && card.has_type("creature") {
                Vec::new()
            } else {
                vec![format!(
                    "Your commander \"{}\" is not a valid commander because it is not a legendary creature. Please select a different card as your commander and resubmit.",
                    card.name
                )]
            }
        }
        [first, second] => {
            if can_pair(&first.card, &second.card) {
                Vec::new()
            } else {
                vec![
                    "The commanders you have selected do not allow for multiple commanders. Please modify your commander selection and resubmit.".to_string(),
                ]
            }
        }
        commanders => vec![format!(
            "Your deck contains {} commanders. Please resubmit with one or two if an effect allows for it.",
            commanders.len()
        )],
    }
}

fn can_pair(first: &CardAttributes, second: &CardAttributes) -> bool {
    let pair = [first, second];

    let partners = pair
        .iter()
        .all(|c| c.has_keyword(PARTNER) && !c.has_keyword(PARTNER_WITH));
    let friends_forever = pair.iter().all(|c| c.has_keyword(FRIENDS_FOREVER));
    let background = pair
        .iter()
        .any(|c| c.oracle_text.to_lowercase().contains("choose a background"))
        && pair.iter().any(|c| c.has_type("background"));
    // "Partner with <name>" and similar pairings name the other card.
    let named_partner = first.oracle_text.contains(&second.name);

    partners || friends_forever || background || named_partner
}
