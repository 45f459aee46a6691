//! In-memory card lookup.
//!
//! Stores card attributes keyed by lowercase name. When several printings
//! share a name, the cheapest one is kept, matching what a live lookup
//! returns.

use std::cmp::Ordering;

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::cards::{resolve_price, CardAttributes};
use crate::error::Result;

use super::CardLookup;

/// Card lookup backed by a map.
///
/// ## Example
///
/// ```
/// use servo_validator::cards::CardAttributes;
/// use servo_validator::lookup::InMemoryLookup;
///
/// let mut lookup = InMemoryLookup::new();
/// lookup.insert(CardAttributes::new("Sol Ring", "Artifact"));
///
/// assert!(lookup.get("sol ring").is_some());
/// assert!(lookup.get("Sol Rnig").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryLookup {
    cards: FxHashMap<String, CardAttributes>,
}

/// Card data file: a bare array of cards or a search result list.
#[derive(Deserialize)]
#[serde(untagged)]
enum CardFile {
    Cards(Vec<CardAttributes>),
    List { data: Vec<CardAttributes> },
}

impl InMemoryLookup {
    /// Create an empty lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load card data from JSON.
    ///
    /// Accepts either an array of card objects or a list object with a
    /// `data` array.
    pub fn from_json(json: &str) -> Result<Self> {
        let cards = match serde_json::from_str::<CardFile>(json)? {
            CardFile::Cards(cards) | CardFile::List { data: cards } => cards,
        };
        Ok(cards.into_iter().collect())
    }

    /// Add a printing. An existing printing with the same name is replaced
    /// only if the new one is cheaper.
    pub fn insert(&mut self, card: CardAttributes) {
        let key = card.name.to_lowercase();
        match self.cards.get(&key) {
            Some(existing) if !is_cheaper(&card, existing) => {}
            _ => {
                self.cards.insert(key, card);
            }
        }
    }

    /// Look up a card by name, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardAttributes> {
        self.cards.get(&name.to_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Priced printings beat unpriced ones; otherwise the lower price wins.
fn is_cheaper(candidate: &CardAttributes, existing: &CardAttributes) -> bool {
    match (resolve_price(&candidate.prices), resolve_price(&existing.prices)) {
        (Some(new), Some(old)) => new.partial_cmp(&old) == Some(Ordering::Less),
        (Some(_), None) => true,
        _ => false,
    }
}

impl FromIterator<CardAttributes> for InMemoryLookup {
    fn from_iter<I: IntoIterator<Item = CardAttributes>>(iter: I) -> Self {
        let mut lookup = Self::new();
        for card in iter {
            lookup.insert(card);
        }
        lookup
    }
}

#[async_trait]
impl CardLookup for InMemoryLookup {
    async fn lookup_card(&self, name: &str) -> Option<CardAttributes> {
        self.get(name).cloned()
    }
}
