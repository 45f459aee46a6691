//! Card data: attributes, entries, resolved cards, and pricing.
//!
//! ## Key Types
//!
//! - `CardEntry`: A name and quantity as submitted by the user
//! - `CardAttributes`: Authoritative card data from the lookup
//! - `ResolvedCard`: Attributes tagged with the submitted quantity
//! - `resolve_price`: Canonical (cheapest) price across finishes

pub mod attributes;
pub mod definition;
pub mod instance;
pub mod price;

pub use attributes::{Color, ColorIdentity, FormatId, Legality, Prices};
pub use definition::CardAttributes;
pub use instance::{CardEntry, ResolvedCard};
pub use price::resolve_price;
