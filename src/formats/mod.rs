//! Rules formats: configuration, layer composition, and rule binding.
//!
//! ## Key Types
//!
//! - `RuleSpec`: A rule as configured (identifier + parameters)
//! - `FormatConfiguration`: Named format with base and override layers
//! - `FormatCatalog`: Selectable formats by name
//! - `RuleRegistry`: Binds identifiers to rule factories
//! - `ResolvedFormat`: A format's ordered, bound rules

pub mod config;
pub mod registry;
pub mod spec;

pub use config::{
    commander_base_rules, FormatCatalog, FormatConfiguration, BUDGET_COMMANDER, COMMANDER,
};
pub use registry::{resolve_format, ResolvedFormat, RuleFactory, RuleRegistry};
pub use spec::{compose_rules, RuleParam, RuleSpec};
