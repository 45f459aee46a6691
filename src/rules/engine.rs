//! Rule evaluation.
//!
//! `Rule` is the closed set of checks a format can run. Each variant
//! carries its typed parameters; evaluating a rule is a pure function of
//! the resolved deck that returns violation messages in card order.

use serde::{Deserialize, Serialize};

use crate::cards::FormatId;
use crate::decklist::DecklistData;

use super::budget::{is_commander_budget_exceeded, is_total_budget_exceeded};
use super::commander::is_commander_valid;
use super::construction::{
    is_decklist_at_required_size, is_decklist_singleton, is_in_commander_color_identity,
};
use super::legality::is_format_legal;

/// A configured validation rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Rule {
    /// Every card is legal in the format.
    FormatLegal { format: FormatId },
    /// The commander slot is valid for the format.
    HasLegalCommander { format: FormatId },
    /// Exact deck size, commanders included.
    DeckSize { required: u32 },
    /// One copy per non-basic card.
    Singleton,
    /// Total deck value cap.
    Budget { budget: f64 },
    /// Commander value cap.
    CommanderBudget { budget: f64 },
    /// Cards within the commanders' color identity.
    ColorIdentity,
    /// A configured rule that could not be bound; never reports anything.
    Skipped { identifier: String },
}

impl Rule {
    /// Identifier used for this rule in format configurations.
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Rule::FormatLegal { .. } => "format-legal",
            Rule::HasLegalCommander { .. } => "has-legal-commander",
            Rule::DeckSize { .. } => "decksize",
            Rule::Singleton => "singleton",
            Rule::Budget { .. } => "budget",
            Rule::CommanderBudget { .. } => "commander-budget",
            Rule::ColorIdentity => "color-identity",
            Rule::Skipped { identifier } => identifier,
        }
    }

    /// Check if this rule was skipped during format resolution.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Rule::Skipped { .. })
    }

    /// Evaluate against a resolved deck.
    #[must_use]
    pub fn evaluate(&self, deck: &DecklistData) -> Vec<String> {
        match self {
            Rule::FormatLegal { format } => is_format_legal(format, deck),
            Rule::HasLegalCommander { format } => is_commander_valid(format, deck),
            Rule::DeckSize { required } => is_decklist_at_required_size(*required, deck),
            Rule::Singleton => is_decklist_singleton(deck),
            Rule::Budget { budget } => is_total_budget_exceeded(*budget, deck),
            Rule::CommanderBudget { budget } => is_commander_budget_exceeded(*budget, deck),
            Rule::ColorIdentity => is_in_commander_color_identity(deck),
            Rule::Skipped { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardAttributes, ResolvedCard};

    #[test]
    fn test_identifiers() {
        assert_eq!(Rule::Singleton.identifier(), "singleton");
        assert_eq!(Rule::DeckSize { required: 100 }.identifier(), "decksize");
        assert_eq!(
            Rule::Skipped { identifier: "singelton".into() }.identifier(),
            "singelton"
        );
    }

    #[test]
    fn test_skipped_rule_is_silent() {
        let rule = Rule::Skipped { identifier: "highlander".into() };
        let deck = DecklistData::new(
            [],
            vec![ResolvedCard::new(CardAttributes::new("Sol Ring", "Artifact"), 4)],
        );

        assert!(rule.is_skipped());
        assert!(rule.evaluate(&deck).is_empty());
        assert_eq!(Rule::Singleton.evaluate(&deck).len(), 1);
    }

    #[test]
    fn test_dispatch_passes_parameters() {
        let deck = DecklistData::new(
            [],
            vec![ResolvedCard::new(CardAttributes::new("Island", "Basic Land — Island"), 40)],
        );

        assert!(Rule::DeckSize { required: 40 }.evaluate(&deck).is_empty());
        assert_eq!(Rule::DeckSize { required: 60 }.evaluate(&deck).len(), 1);
    }

    #[test]
    fn test_serialization() {
        let rule = Rule::Budget { budget: 25.0 };
        let json = serde_json::to_string(&rule).unwrap();
        let deserialized: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(rule, deserialized);
    }
}
