//! Rule registry for binding rule specs to rules.
//!
//! The registry maps each known rule identifier to a factory that checks
//! the configured parameters and builds the matching `Rule`. Binding never
//! fails: an unknown identifier or unusable parameters are logged and the
//! rule is replaced by `Rule::Skipped`.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cards::FormatId;
use crate::decklist::DecklistData;
use crate::error::{Result, ValidatorError};
use crate::rules::Rule;

use super::config::FormatConfiguration;
use super::spec::{compose_rules, RuleParam, RuleSpec};

/// Builds a rule from its configured parameters.
pub type RuleFactory = fn(&[RuleParam]) -> Result<Rule>;

/// Registry of rule factories keyed by identifier.
///
/// ## Example
///
/// ```
/// use servo_validator::formats::{RuleRegistry, RuleSpec};
/// use servo_validator::rules::Rule;
///
/// let registry = RuleRegistry::standard();
///
/// let rule = registry.bind(&RuleSpec::with_params("decksize", [100.into()]));
/// assert_eq!(rule, Rule::DeckSize { required: 100 });
///
/// let typo = registry.bind(&RuleSpec::bare("singelton"));
/// assert!(typo.is_skipped());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuleRegistry {
    factories: FxHashMap<&'static str, RuleFactory>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in rule.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("format-legal", format_legal);
        registry.register("has-legal-commander", has_legal_commander);
        registry.register("decksize", deck_size);
        registry.register("singleton", |_| Ok(Rule::Singleton));
        registry.register("budget", budget);
        registry.register("commander-budget", commander_budget);
        registry.register("color-identity", |_| Ok(Rule::ColorIdentity));
        registry
    }

    /// Process-wide standard registry, built on first use.
    #[must_use]
    pub fn global() -> &'static RuleRegistry {
        static REGISTRY: OnceLock<RuleRegistry> = OnceLock::new();
        REGISTRY.get_or_init(RuleRegistry::standard)
    }

    /// Register a rule factory.
    ///
    /// Panics if the identifier is already registered.
    pub fn register(&mut self, identifier: &'static str, factory: RuleFactory) {
        if self.factories.contains_key(identifier) {
            panic!("Rule \"{identifier}\" already registered");
        }
        self.factories.insert(identifier, factory);
    }

    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.factories.contains_key(identifier)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Registered identifiers, sorted.
    #[must_use]
    pub fn identifiers(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.factories.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Bind a spec to a rule, degrading to `Rule::Skipped` on failure.
    #[must_use]
    pub fn bind(&self, spec: &RuleSpec) -> Rule {
        let identifier = spec.identifier();

        let Some(factory) = self.factories.get(identifier) else {
            warn!(rule = identifier, "the rule does not exist and has been skipped");
            return Rule::Skipped {
                identifier: identifier.to_string(),
            };
        };

        factory(spec.params()).unwrap_or_else(|err| {
            warn!(
                rule = identifier,
                error = %err,
                "the rule is misconfigured and has been skipped"
            );
            Rule::Skipped {
                identifier: identifier.to_string(),
            }
        })
    }
}

fn format_param(rule: &'static str, params: &[RuleParam]) -> Result<FormatId> {
    params
        .first()
        .and_then(RuleParam::as_text)
        .map(FormatId::from)
        .ok_or(ValidatorError::InvalidRuleParameters {
            rule,
            expected: "a format id",
        })
}

fn budget_param(rule: &'static str, params: &[RuleParam]) -> Result<f64> {
    params
        .first()
        .and_then(RuleParam::as_f64)
        .filter(|budget| budget.is_finite() && *budget >= 0.0)
        .ok_or(ValidatorError::InvalidRuleParameters {
            rule,
            expected: "a non-negative budget",
        })
}

fn format_legal(params: &[RuleParam]) -> Result<Rule> {
    Ok(Rule::FormatLegal {
        format: format_param("format-legal", params)?,
    })
}

fn has_legal_commander(params: &[RuleParam]) -> Result<Rule> {
    Ok(Rule::HasLegalCommander {
        format: format_param("has-legal-commander", params)?,
    })
}

fn deck_size(params: &[RuleParam]) -> Result<Rule> {
    let required = params
        .first()
        .and_then(RuleParam::as_u32)
        .filter(|size| *size > 0)
        .ok_or(ValidatorError::InvalidRuleParameters {
            rule: "decksize",
            expected: "a positive deck size",
        })?;
    Ok(Rule::DeckSize { required })
}

fn budget(params: &[RuleParam]) -> Result<Rule> {
    Ok(Rule::Budget {
        budget: budget_param("budget", params)?,
    })
}

fn commander_budget(params: &[RuleParam]) -> Result<Rule> {
    Ok(Rule::CommanderBudget {
        budget: budget_param("commander-budget", params)?,
    })
}

/// A format with its rules bound and ready to evaluate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedFormat {
    pub name: String,
    pub display_name: String,
    pub rules: Vec<Rule>,
}

impl ResolvedFormat {
    /// Run every rule in order and concatenate their messages.
    #[must_use]
    pub fn evaluate(&self, deck: &DecklistData) -> Vec<String> {
        self.rules.iter().flat_map(|rule| rule.evaluate(deck)).collect()
    }
}

/// Compose a configuration's layers and bind each rule.
#[must_use]
pub fn resolve_format(config: &FormatConfiguration, registry: &RuleRegistry) -> ResolvedFormat {
    let rules = compose_rules(config.base.as_deref(), &config.rules)
        .iter()
        .map(|spec| registry.bind(spec))
        .collect();

    ResolvedFormat {
        name: config.name.clone(),
        display_name: config.display_name.clone(),
        rules,
    }
}
