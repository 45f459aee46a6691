//! Validation pipeline.
//!
//! Parse commanders and decklist, resolve both, run the format's rules,
//! and merge every error source in a fixed order:
//! parse errors, then resolution errors, then rule violations.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ValidatorConfig;
use crate::decklist::{parse_commander_input, parse_decklist};
use crate::error::{Result, ValidatorError};
use crate::formats::{resolve_format, FormatCatalog, ResolvedFormat, RuleRegistry};
use crate::lookup::CardLookup;
use crate::report::{chunk_error_messages, DeckReport};

use super::resolver::resolve_decklist;

/// Result of validating a deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// At least one error; no report is produced.
    Failed { errors: Vec<String> },
    /// No errors.
    Passed { report: DeckReport },
}

impl ValidationOutcome {
    #[must_use]
    pub fn is_passed(&self) -> bool {
        matches!(self, ValidationOutcome::Passed { .. })
    }

    /// Errors in reporting order; empty when passed.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        match self {
            ValidationOutcome::Failed { errors } => errors,
            ValidationOutcome::Passed { .. } => &[],
        }
    }

    #[must_use]
    pub fn report(&self) -> Option<&DeckReport> {
        match self {
            ValidationOutcome::Passed { report } => Some(report),
            ValidationOutcome::Failed { .. } => None,
        }
    }

    /// Errors packed into messages under `limit` characters.
    #[must_use]
    pub fn error_messages(&self, limit: usize) -> Vec<String> {
        chunk_error_messages(self.errors(), limit)
    }
}

/// Validate a deck against a resolved format.
///
/// Every error source is collected before deciding the outcome; a single
/// error of any kind fails the run.
pub async fn validate(
    commander_text: &str,
    decklist_text: &str,
    format: &ResolvedFormat,
    lookup: &dyn CardLookup,
) -> ValidationOutcome {
    let commanders = parse_commander_input(commander_text);
    let parsed = parse_decklist(decklist_text);
    let resolved = resolve_decklist(&commanders, &parsed.entries, lookup).await;
    let violations = format.evaluate(&resolved.deck);

    debug!(
        format = %format.name,
        parse_errors = parsed.errors.len(),
        resolution_errors = resolved.errors.len(),
        violations = violations.len(),
        "validated deck"
    );

    let errors: Vec<String> = parsed
        .errors
        .into_iter()
        .chain(resolved.errors)
        .chain(violations)
        .collect();

    if errors.is_empty() {
        ValidationOutcome::Passed {
            report: DeckReport::new(&resolved.deck),
        }
    } else {
        ValidationOutcome::Failed { errors }
    }
}

/// Validator bound to a format catalog and a card lookup.
///
/// Formats are resolved once at construction and reused for every run.
pub struct Validator<L> {
    formats: FxHashMap<String, ResolvedFormat>,
    lookup: L,
    config: ValidatorConfig,
}

impl<L: CardLookup> Validator<L> {
    /// Create a validator using the standard rule registry.
    pub fn new(catalog: &FormatCatalog, lookup: L, config: ValidatorConfig) -> Self {
        Self::with_registry(catalog, RuleRegistry::global(), lookup, config)
    }

    /// Create a validator with a custom rule registry.
    pub fn with_registry(
        catalog: &FormatCatalog,
        registry: &RuleRegistry,
        lookup: L,
        config: ValidatorConfig,
    ) -> Self {
        let formats: FxHashMap<_, _> = catalog
            .iter()
            .map(|config| (config.name.clone(), resolve_format(config, registry)))
            .collect();

        info!(formats = formats.len(), "validator ready");
        Self {
            formats,
            lookup,
            config,
        }
    }

    /// Look up a resolved format by name.
    pub fn format(&self, name: &str) -> Result<&ResolvedFormat> {
        self.formats
            .get(name)
            .ok_or_else(|| ValidatorError::UnknownFormat(name.to_string()))
    }

    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a deck in the named format.
    ///
    /// Only an unknown format name is an `Err`; everything wrong with the
    /// deck is reported in the outcome.
    pub async fn validate(
        &self,
        format_name: &str,
        commander_text: &str,
        decklist_text: &str,
    ) -> Result<ValidationOutcome> {
        let format = self.format(format_name)?;
        Ok(validate(commander_text, decklist_text, format, &self.lookup).await)
    }

    /// Validate a deck in the configured default format.
    pub async fn validate_default(
        &self,
        commander_text: &str,
        decklist_text: &str,
    ) -> Result<ValidationOutcome> {
        self.validate(&self.config.default_format, commander_text, decklist_text)
            .await
    }

    /// Chunk an outcome's errors with the configured message limit.
    #[must_use]
    pub fn error_messages(&self, outcome: &ValidationOutcome) -> Vec<String> {
        outcome.error_messages(self.config.message_char_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardAttributes, Legality, Prices};
    use crate::formats::{FormatConfiguration, RuleSpec};
    use crate::lookup::InMemoryLookup;

    fn lookup() -> InMemoryLookup {
        [
            CardAttributes::new("Sol Ring", "Artifact")
                .with_legality("commander", Legality::Legal)
                .with_prices(Prices::usd(1.0)),
            CardAttributes::new("Island", "Basic Land — Island")
                .with_legality("commander", Legality::Legal)
                .with_prices(Prices::usd(0.1)),
        ]
        .into_iter()
        .collect()
    }

    fn sixty_card_format() -> ResolvedFormat {
        let config = FormatConfiguration::new("sixty", "Sixty")
            .with_rule(RuleSpec::with_params("decksize", [60.into()]))
            .with_rule(RuleSpec::bare("singleton"));
        resolve_format(&config, &RuleRegistry::standard())
    }

    #[tokio::test]
    async fn test_passing_deck() {
        let outcome =
            validate("", "1 Sol Ring\n59 Island", &sixty_card_format(), &lookup()).await;

        assert!(outcome.is_passed());
        assert!(outcome.errors().is_empty());
        let report = outcome.report().unwrap();
        assert_eq!(report.total_count, 60);
        assert!((report.total_value - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_error_order() {
        let outcome = validate(
            "",
            "2 Sol Ring\nIsland\n1 Sol Rnig\n50 Island",
            &sixty_card_format(),
            &lookup(),
        )
        .await;

        let errors = outcome.errors();
        assert_eq!(errors.len(), 4);
        assert!(errors[0].starts_with("The decklist entry \"Island\""));
        assert!(errors[1].starts_with("The card \"Sol Rnig\" does not exist"));
        assert!(errors[2].starts_with("Your decklist contains 52 cards instead of 60"));
        assert!(errors[3].starts_with("You have 2 copies of \"Sol Ring\""));
        assert!(outcome.report().is_none());
    }

    #[tokio::test]
    async fn test_validator_unknown_format() {
        let validator =
            Validator::new(&FormatCatalog::builtin(), lookup(), ValidatorConfig::default());
        let result = validator.validate("two-headed-giant", "", "").await;

        assert!(matches!(result, Err(ValidatorError::UnknownFormat(_))));
    }

    #[tokio::test]
    async fn test_validator_default_format() {
        let validator = Validator::new(
            &FormatCatalog::builtin(),
            lookup(),
            ValidatorConfig::default().with_message_char_limit(40),
        );
        let outcome = validator.validate_default("", "1 Sol Ring").await.unwrap();

        // No commander and 1 card instead of 100.
        assert_eq!(outcome.errors().len(), 2);
        assert_eq!(validator.error_messages(&outcome).len(), 2);
        assert_eq!(validator.format("budget-commander").unwrap().rules.len(), 7);
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = ValidationOutcome::Failed {
            errors: vec!["bad".to_string()],
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"failed":{"errors":["bad"]}}"#);
    }
}
