//! Validation rules.
//!
//! Each rule is a pure function of `DecklistData` returning violation
//! messages. `Rule` binds a rule to its parameters so formats can hold an
//! ordered list of them.
//!
//! - `legality`: format legality per card
//! - `commander`: commander count, type, and pairing
//! - `construction`: deck size, singleton, color identity
//! - `budget`: deck and commander value caps

pub mod budget;
pub mod commander;
pub mod construction;
pub mod engine;
pub mod legality;

pub use budget::{tally_deck_value, DeckValue};
pub use engine::Rule;
