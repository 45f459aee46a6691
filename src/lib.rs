//! # servo-validator
//!
//! Validates Magic: The Gathering decklists against configurable rules
//! formats, such as Commander and budget variants of it.
//!
//! ## Design Principles
//!
//! 1. **Collect, Don't Stop**: Every error source (parsing, card lookup,
//!    rules) is gathered and reported together in a stable order.
//!
//! 2. **Formats Are Data**: A format is a list of rule identifiers with
//!    parameters, layered over an optional base. Rules are bound through a
//!    registry, so formats never reference code directly.
//!
//! 3. **Lookup Is Pluggable**: Card data comes from a caller-supplied
//!    `CardLookup`. The validator performs no I/O of its own.
//!
//! ## Modules
//!
//! - `cards`: Card attributes, entries, resolved cards, pricing
//! - `decklist`: Decklist parsing and resolved deck data
//! - `rules`: Rule evaluators and the `Rule` enum
//! - `formats`: Format configuration, composition, and rule binding
//! - `lookup`: The `CardLookup` trait and an in-memory implementation
//! - `validation`: Resolution and the validation pipeline
//! - `report`: Success report and chunked error messages
//! - `config`, `logging`, `error`: Ambient configuration, tracing, errors

pub mod cards;
pub mod config;
pub mod decklist;
pub mod error;
pub mod formats;
pub mod logging;
pub mod lookup;
pub mod report;
pub mod rules;
pub mod validation;

// Re-export commonly used types
pub use crate::cards::{
    resolve_price, CardAttributes, CardEntry, Color, ColorIdentity, FormatId, Legality, Prices,
    ResolvedCard,
};

pub use crate::config::ValidatorConfig;

pub use crate::decklist::{parse_commander_input, parse_decklist, DecklistData, ParsedDecklist};

pub use crate::error::{Result, ValidatorError};

pub use crate::formats::{
    compose_rules, resolve_format, FormatCatalog, FormatConfiguration, ResolvedFormat, RuleParam,
    RuleRegistry, RuleSpec,
};

pub use crate::lookup::{CardLookup, InMemoryLookup};

pub use crate::report::{chunk_error_messages, DeckReport};

pub use crate::rules::{tally_deck_value, DeckValue, Rule};

pub use crate::validation::{
    resolve_decklist, validate, ResolvedDecklist, ValidationOutcome, Validator,
};
