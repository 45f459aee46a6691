//! Rule specifications and layer composition.
//!
//! A format lists its rules as data: either a bare identifier
//! (`"singleton"`) or an identifier with parameters (`["budget", [25]]`).
//! Formats can build on a base layer; `compose_rules` merges the two.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A single rule parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleParam {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl RuleParam {
    /// Numeric value, for integer or decimal parameters.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RuleParam::Integer(v) => Some(*v as f64),
            RuleParam::Number(v) => Some(*v),
            RuleParam::Text(_) => None,
        }
    }

    /// Non-negative integer value that fits in a `u32`.
    #[must_use]
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            RuleParam::Integer(v) => u32::try_from(*v).ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RuleParam::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for RuleParam {
    fn from(v: i64) -> Self {
        RuleParam::Integer(v)
    }
}

impl From<i32> for RuleParam {
    fn from(v: i32) -> Self {
        RuleParam::Integer(i64::from(v))
    }
}

impl From<f64> for RuleParam {
    fn from(v: f64) -> Self {
        RuleParam::Number(v)
    }
}

impl From<&str> for RuleParam {
    fn from(v: &str) -> Self {
        RuleParam::Text(v.to_string())
    }
}

/// A rule as written in a format configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSpec {
    /// Identifier with no parameters.
    Bare(String),
    /// Identifier with a parameter list.
    WithParams(String, Vec<RuleParam>),
}

impl RuleSpec {
    /// Create a rule spec without parameters.
    pub fn bare(identifier: impl Into<String>) -> Self {
        RuleSpec::Bare(identifier.into())
    }

    /// Create a rule spec with parameters.
    pub fn with_params(
        identifier: impl Into<String>,
        params: impl IntoIterator<Item = RuleParam>,
    ) -> Self {
        RuleSpec::WithParams(identifier.into(), params.into_iter().collect())
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            RuleSpec::Bare(id) | RuleSpec::WithParams(id, _) => id,
        }
    }

    /// Parameters; empty for a bare spec.
    #[must_use]
    pub fn params(&self) -> &[RuleParam] {
        match self {
            RuleSpec::Bare(_) => &[],
            RuleSpec::WithParams(_, params) => params,
        }
    }
}

/// Merge a base rule layer with an override layer.
///
/// Rules are keyed by identifier. A rule keeps the position where its
/// identifier first appears (base first, then overrides), and takes the
/// value of its last appearance, so an override replaces a base rule's
/// parameters in place. Override-only rules follow, in override order.
///
/// ```
/// use servo_validator::formats::{compose_rules, RuleSpec};
///
/// let base = vec![RuleSpec::with_params("a", [1.into()]), RuleSpec::bare("b")];
/// let overrides = vec![RuleSpec::with_params("b", [2.into()]), RuleSpec::bare("c")];
///
/// let composed = compose_rules(Some(base.as_slice()), &overrides);
/// assert_eq!(
///     composed,
///     vec![
///         RuleSpec::with_params("a", [1.into()]),
///         RuleSpec::with_params("b", [2.into()]),
///         RuleSpec::bare("c"),
///     ]
/// );
/// ```
#[must_use]
pub fn compose_rules(base: Option<&[RuleSpec]>, overrides: &[RuleSpec]) -> Vec<RuleSpec> {
    let mut order: Vec<&str> = Vec::new();
    let mut values: FxHashMap<&str, &RuleSpec> = FxHashMap::default();

    for spec in base.unwrap_or_default().iter().chain(overrides) {
        let identifier = spec.identifier();
        if values.insert(identifier, spec).is_none() {
            order.push(identifier);
        }
    }

    order
        .into_iter()
        .filter_map(|identifier| values.get(identifier).map(|spec| (*spec).clone()))
        .collect()
}
