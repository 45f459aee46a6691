//! Decklist parsing and resolved decklist data.
//!
//! - `parse_decklist` / `parse_commander_input`: text to `CardEntry` lists
//! - `DecklistData`: resolved commanders and decklist, the input to rules

pub mod data;
pub mod parser;

pub use data::{Commanders, DecklistData};
pub use parser::{parse_commander_input, parse_decklist, ParsedDecklist};
