//! Resolving parsed entries against the card-data lookup.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::cards::{CardEntry, ResolvedCard};
use crate::decklist::DecklistData;
use crate::lookup::CardLookup;

/// Resolved deck plus one error per entry the lookup did not find.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedDecklist {
    pub deck: DecklistData,
    /// Commander errors first, then decklist errors, in submission order.
    pub errors: Vec<String>,
}

/// Resolve commander and decklist entries.
///
/// All lookups run concurrently. Entries that are not found are dropped
/// from the deck and reported; the rest of the deck is still resolved.
pub async fn resolve_decklist(
    commanders: &[CardEntry],
    decklist: &[CardEntry],
    lookup: &dyn CardLookup,
) -> ResolvedDecklist {
    let (commander_cards, decklist_cards) = futures::join!(
        resolve_entries(commanders, lookup),
        resolve_entries(decklist, lookup),
    );

    let mut resolved = ResolvedDecklist::default();

    for (entry, card) in commanders.iter().zip(commander_cards) {
        match card {
            Some(card) => resolved.deck.commanders.push(card),
            None => resolved.errors.push(format!(
                "The commander \"{}\" does not exist. Please check your spelling and resubmit.",
                entry.name
            )),
        }
    }

    for (entry, card) in decklist.iter().zip(decklist_cards) {
        match card {
            Some(card) => resolved.deck.decklist.push(card),
            None => resolved.errors.push(format!(
                "The card \"{}\" does not exist. Please check your spelling and resubmit.",
                entry.name
            )),
        }
    }

    debug!(
        commanders = resolved.deck.commanders.len(),
        cards = resolved.deck.decklist.len(),
        missing = resolved.errors.len(),
        "resolved decklist"
    );
    resolved
}

/// Look up every entry; results line up with `entries`.
async fn resolve_entries(
    entries: &[CardEntry],
    lookup: &dyn CardLookup,
) -> Vec<Option<ResolvedCard>> {
    join_all(entries.iter().map(|entry| async move {
        let card = lookup.lookup_card(&entry.name).await;
        if card.is_none() {
            warn!(card = %entry.name, "card not found");
        }
        card.map(|card| ResolvedCard::new(card, entry.quantity))
    }))
    .await
}
