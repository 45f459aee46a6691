//! Format configurations and the format catalog.
//!
//! A `FormatConfiguration` is the data a user selects by name: an optional
//! base rule layer and the format's own rules layered on top. The
//! `FormatCatalog` holds every selectable format.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::FormatId;
use crate::error::{Result, ValidatorError};

use super::spec::RuleSpec;

/// Name of the built-in Commander format.
pub const COMMANDER: &str = "commander";

/// Name of the built-in $25 budget Commander format.
pub const BUDGET_COMMANDER: &str = "budget-commander";

/// A named, user-selectable rules format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormatConfiguration {
    /// Selection key.
    pub name: String,

    /// Human-readable name.
    #[serde(alias = "displayName")]
    pub display_name: String,

    /// Base layer; `rules` override it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Vec<RuleSpec>>,

    /// The format's own rules.
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

impl FormatConfiguration {
    /// Create a configuration with no rules.
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            base: None,
            rules: Vec::new(),
        }
    }

    /// Set the base layer (builder pattern).
    #[must_use]
    pub fn with_base(mut self, base: Vec<RuleSpec>) -> Self {
        self.base = Some(base);
        self
    }

    /// Add an override rule (builder pattern).
    #[must_use]
    pub fn with_rule(mut self, rule: RuleSpec) -> Self {
        self.rules.push(rule);
        self
    }
}

/// Base rules shared by Commander variants.
#[must_use]
pub fn commander_base_rules() -> Vec<RuleSpec> {
    vec![
        RuleSpec::with_params("format-legal", [FormatId::COMMANDER.into()]),
        RuleSpec::with_params("has-legal-commander", [FormatId::COMMANDER.into()]),
        RuleSpec::with_params("decksize", [100.into()]),
        RuleSpec::bare("singleton"),
        RuleSpec::bare("color-identity"),
    ]
}

/// Catalog of selectable formats, in registration order.
///
/// ## Example
///
/// ```
/// use servo_validator::formats::FormatCatalog;
///
/// let catalog = FormatCatalog::builtin();
/// let format = catalog.get("budget-commander").unwrap();
/// assert_eq!(format.display_name, "$25 Budget Commander");
///
/// assert!(catalog.get("vintage-cube").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct FormatCatalog {
    formats: Vec<FormatConfiguration>,
    by_name: FxHashMap<String, usize>,
}

impl FormatCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the built-in formats.
    #[must_use]
    pub fn builtin() -> Self {
        let formats = vec![
            FormatConfiguration::new(COMMANDER, "Commander").with_base(commander_base_rules()),
            FormatConfiguration::new(BUDGET_COMMANDER, "$25 Budget Commander")
                .with_base(commander_base_rules())
                .with_rule(RuleSpec::with_params("budget", [25.into()]))
                .with_rule(RuleSpec::with_params("commander-budget", [5.into()])),
        ];
        let by_name: FxHashMap<String, usize> = formats
            .iter()
            .enumerate()
            .map(|(index, format)| (format.name.clone(), index))
            .collect();
        debug_assert_eq!(by_name.len(), formats.len(), "built-in format names must be unique");

        Self { formats, by_name }
    }

    /// Load a catalog from a JSON array of configurations.
    pub fn from_json(json: &str) -> Result<Self> {
        let formats: Vec<FormatConfiguration> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for format in formats {
            catalog.register(format)?;
        }
        Ok(catalog)
    }

    /// Add a format. Names must be unique.
    pub fn register(&mut self, format: FormatConfiguration) -> Result<()> {
        if self.by_name.contains_key(&format.name) {
            return Err(ValidatorError::DuplicateFormat(format.name));
        }
        self.by_name.insert(format.name.clone(), self.formats.len());
        self.formats.push(format);
        Ok(())
    }

    /// Look up a format by name.
    pub fn get(&self, name: &str) -> Result<&FormatConfiguration> {
        self.by_name
            .get(name)
            .map(|&index| &self.formats[index])
            .ok_or_else(|| ValidatorError::UnknownFormat(name.to_string()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Iterate over formats in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FormatConfiguration> {
        self.formats.iter()
    }
}
