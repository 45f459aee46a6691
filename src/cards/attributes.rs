//! Card attribute types supplied by the card-data lookup.
//!
//! ## Types
//!
//! - `FormatId`: Scryfall format key (`commander`, `pauper`, ...)
//! - `Legality`: Per-format legality status
//! - `Color`: One of the five mana colors
//! - `Prices`: USD prices for each finish, any of which may be missing

use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

/// Format identifier, used as the key of a card's legality map.
///
/// The validator only interprets `commander`; every other key is opaque.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatId(pub String);

impl FormatId {
    /// Key of the Commander format.
    pub const COMMANDER: &'static str = "commander";

    /// Create a new format ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The Commander format.
    #[must_use]
    pub fn commander() -> Self {
        Self::new(Self::COMMANDER)
    }

    /// Check if this is the Commander format.
    #[must_use]
    pub fn is_commander(&self) -> bool {
        self.0 == Self::COMMANDER
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FormatId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for FormatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Legality of a card in one format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Legality {
    Legal,
    NotLegal,
    Banned,
    Restricted,
}

/// A mana color, serialized with its single-letter symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

impl Color {
    /// Single-letter symbol (W, U, B, R, G).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }
}

/// Color identity of a card. At most five colors, so it stays inline.
pub type ColorIdentity = SmallVec<[Color; 5]>;

/// USD prices for each finish of a card.
///
/// The lookup reports prices as decimal strings (`"0.25"`); numbers are
/// accepted too. `None` means the finish has no price.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    #[serde(default, deserialize_with = "deserialize_price")]
    pub usd: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_price")]
    pub usd_foil: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_price")]
    pub usd_etched: Option<f64>,
}

impl Prices {
    /// Prices with only the non-foil finish set.
    #[must_use]
    pub fn usd(price: f64) -> Self {
        Self {
            usd: Some(price),
            ..Self::default()
        }
    }

    /// Set the foil price (builder pattern).
    #[must_use]
    pub fn with_foil(mut self, price: f64) -> Self {
        self.usd_foil = Some(price);
        self
    }

    /// Set the etched price (builder pattern).
    #[must_use]
    pub fn with_etched(mut self, price: f64) -> Self {
        self.usd_etched = Some(price);
        self
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match Option::<RawPrice>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawPrice::Number(value)) => Ok(Some(value)),
        Some(RawPrice::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
