//! Validation orchestration.
//!
//! Key types:
//! - `Validator`: resolved formats, a card lookup, and configuration
//! - `ValidationOutcome`: either the error list or a `DeckReport`
//! - `ResolvedDecklist`: deck resolution result with not-found errors

pub mod resolver;
pub mod validator;

pub use resolver::{resolve_decklist, ResolvedDecklist};
pub use validator::{validate, ValidationOutcome, Validator};
