//! Card-data lookup.
//!
//! The validator never fetches card data itself. Callers provide a
//! `CardLookup` that answers one name at a time; `InMemoryLookup` serves
//! preloaded card data.

pub mod memory;

use async_trait::async_trait;

use crate::cards::CardAttributes;

pub use memory::InMemoryLookup;

/// Source of authoritative card data.
///
/// Implementations look up a card by exact name and return its cheapest
/// printing. A name that is not found is `None`, not an error. Retries and
/// timeouts belong to the implementation.
#[async_trait]
pub trait CardLookup: Send + Sync {
    async fn lookup_card(&self, name: &str) -> Option<CardAttributes>;
}
