//! Card entries and resolved cards.
//!
//! `CardEntry` is a reference as the user typed it: a name and a quantity.
//! `ResolvedCard` pairs the lookup's `CardAttributes` with that quantity and
//! is what rules evaluate.

use serde::{Deserialize, Serialize};

use super::definition::CardAttributes;
use super::price::resolve_price;

/// An unresolved decklist entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardEntry {
    pub name: String,
    pub quantity: u32,
}

impl CardEntry {
    /// Create an entry. Quantity must be positive.
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        debug_assert!(quantity > 0, "card entries carry a positive quantity");
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Canonical `"<quantity> <name>"` form, which the parser accepts back.
impl std::fmt::Display for CardEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.quantity, self.name)
    }
}

/// A card resolved against the lookup, tagged with the submitted quantity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedCard {
    pub quantity: u32,
    pub card: CardAttributes,
}

impl ResolvedCard {
    #[must_use]
    pub fn new(card: CardAttributes, quantity: u32) -> Self {
        Self { quantity, card }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.card.name
    }

    /// Canonical unit price, `None` when the card has no pricing data.
    #[must_use]
    pub fn unit_price(&self) -> Option<f64> {
        resolve_price(&self.card.prices)
    }
}
