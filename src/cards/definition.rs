//! Card attributes - authoritative card data.
//!
//! `CardAttributes` is what the card-data lookup returns for a name. It is
//! shaped like a Scryfall card object so lookup responses deserialize
//! directly; fields the validator does not use are ignored.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::attributes::{Color, ColorIdentity, FormatId, Legality, Prices};

/// Authoritative attributes of a card.
///
/// ## Example
///
/// ```
/// use servo_validator::cards::{CardAttributes, Color, Legality, Prices};
///
/// let sol_ring = CardAttributes::new("Sol Ring", "Artifact")
///     .with_legality("commander", Legality::Legal)
///     .with_prices(Prices::usd(1.25));
///
/// assert!(sol_ring.is_legal_in(&"commander".into()));
/// assert!(!sol_ring.is_basic_land());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardAttributes {
    /// Canonical card name.
    pub name: String,

    /// Full type line, e.g. "Legendary Creature — Elf Druid".
    pub type_line: String,

    /// Legality per format. Formats missing from the map count as not legal.
    #[serde(default)]
    pub legalities: FxHashMap<FormatId, Legality>,

    #[serde(default)]
    pub prices: Prices,

    #[serde(default)]
    pub color_identity: ColorIdentity,

    #[serde(default)]
    pub oracle_text: String,

    #[serde(default)]
    pub keywords: Vec<String>,

    /// Link to the card's reference page.
    #[serde(rename = "scryfall_uri", default)]
    pub reference_uri: String,
}

impl CardAttributes {
    /// Create attributes with a name and type line.
    #[must_use]
    pub fn new(name: impl Into<String>, type_line: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_line: type_line.into(),
            legalities: FxHashMap::default(),
            prices: Prices::default(),
            color_identity: ColorIdentity::new(),
            oracle_text: String::new(),
            keywords: Vec::new(),
            reference_uri: String::new(),
        }
    }

    /// Set legality in one format (builder pattern).
    #[must_use]
    pub fn with_legality(mut self, format: impl Into<FormatId>, legality: Legality) -> Self {
        self.legalities.insert(format.into(), legality);
        self
    }

    /// Set prices (builder pattern).
    #[must_use]
    pub fn with_prices(mut self, prices: Prices) -> Self {
        self.prices = prices;
        self
    }

    /// Set color identity (builder pattern).
    #[must_use]
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.color_identity = colors.into_iter().collect();
        self
    }

    /// Set oracle text (builder pattern).
    #[must_use]
    pub fn with_oracle_text(mut self, text: impl Into<String>) -> Self {
        self.oracle_text = text.into();
        self
    }

    /// Add a keyword (builder pattern).
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Set the reference URI (builder pattern).
    #[must_use]
    pub fn with_reference_uri(mut self, uri: impl Into<String>) -> Self {
        self.reference_uri = uri.into();
        self
    }

    /// Legality in a format; absent entries are `NotLegal`.
    #[must_use]
    pub fn legality(&self, format: &FormatId) -> Legality {
        self.legalities
            .get(format)
            .copied()
            .unwrap_or(Legality::NotLegal)
    }

    #[must_use]
    pub fn is_legal_in(&self, format: &FormatId) -> bool {
        self.legality(format) == Legality::Legal
    }

    /// Basic lands are exempt from singleton and per-card budget checks.
    #[must_use]
    pub fn is_basic_land(&self) -> bool {
        self.type_line.to_lowercase().contains("basic")
    }

    /// Case-insensitive type line check.
    #[must_use]
    pub fn has_type(&self, type_name: &str) -> bool {
        self.type_line
            .to_lowercase()
            .contains(&type_name.to_lowercase())
    }

    /// Exact keyword check (keywords are case-sensitive in lookup data).
    #[must_use]
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let card = CardAttributes::new("Llanowar Elves", "Creature — Elf Druid")
            .with_colors([Color::Green])
            .with_oracle_text("{T}: Add {G}.")
            .with_prices(Prices::usd(0.2));

        assert_eq!(card.name, "Llanowar Elves");
        assert_eq!(card.color_identity.as_slice(), &[Color::Green]);
        assert_eq!(card.prices.usd, Some(0.2));
        assert!(card.has_type("creature"));
        assert!(!card.has_type("legendary"));
    }

    #[test]
    fn test_missing_legality_is_not_legal() {
        let card = CardAttributes::new("Black Lotus", "Artifact")
            .with_legality("vintage", Legality::Restricted);

        assert_eq!(card.legality(&"vintage".into()), Legality::Restricted);
        assert_eq!(card.legality(&FormatId::commander()), Legality::NotLegal);
        assert!(!card.is_legal_in(&"vintage".into()));
    }

    #[test]
    fn test_basic_land() {
        assert!(CardAttributes::new("Island", "Basic Land — Island").is_basic_land());
        assert!(CardAttributes::new("Snow-Covered Forest", "Basic Snow Land — Forest")
            .is_basic_land());
        assert!(!CardAttributes::new("Command Tower", "Land").is_basic_land());
    }

    #[test]
    fn test_keywords_are_exact() {
        let card = CardAttributes::new("Pir, Imaginative Rascal", "Legendary Creature — Human")
            .with_keyword("Partner with");

        assert!(card.has_keyword("Partner with"));
        assert!(!card.has_keyword("Partner"));
    }

    #[test]
    fn test_deserialize_scryfall_card() {
        let json = r#"{
            "object": "card",
            "name": "Sol Ring",
            "type_line": "Artifact",
            "oracle_text": "{T}: Add {C}{C}.",
            "color_identity": [],
            "keywords": [],
            "legalities": {"commander": "legal", "vintage": "restricted", "legacy": "banned"},
            "prices": {"usd": "1.50", "usd_foil": "3.00", "usd_etched": null, "eur": "1.00"},
            "scryfall_uri": "https://scryfall.com/card/cmm/1/sol-ring"
        }"#;

        let card: CardAttributes = serde_json::from_str(json).unwrap();
        assert_eq!(card.name, "Sol Ring");
        assert!(card.is_legal_in(&FormatId::commander()));
        assert_eq!(card.legality(&"legacy".into()), Legality::Banned);
        assert_eq!(card.prices.usd_foil, Some(3.0));
        assert_eq!(card.reference_uri, "https://scryfall.com/card/cmm/1/sol-ring");
    }
}
