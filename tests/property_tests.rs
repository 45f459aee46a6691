//! Property tests.
//!
//! These tests check invariants over generated input:
//! - Re-parsing a parsed decklist changes nothing
//! - The canonical price is the minimum available finish
//! - Rule composition keeps every identifier exactly once
//! - Resolution never invents entries

use proptest::prelude::*;

use servo_validator::cards::{resolve_price, CardAttributes, CardEntry, Prices};
use servo_validator::decklist::parse_decklist;
use servo_validator::formats::{compose_rules, RuleSpec};
use servo_validator::lookup::InMemoryLookup;
use servo_validator::validation::resolve_decklist;

fn card_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,8}( [A-Z][a-z]{2,8}){0,2}"
}

fn entries() -> impl Strategy<Value = Vec<(u32, String)>> {
    prop::collection::vec((1u32..40, card_name()), 0..30)
}

fn render(entries: &[CardEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{} {}\n", e.quantity, e.name))
        .collect()
}

fn price() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(0.0f64..1000.0)
}

fn rule_ids() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]", 0..8)
}

proptest! {
    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_parse_is_idempotent(lines in entries()) {
        let text: String = lines.iter().map(|(q, name)| format!("{q} {name}\n")).collect();
        let first = parse_decklist(&text);
        prop_assert!(first.errors.is_empty());

        let second = parse_decklist(&render(&first.entries));
        prop_assert!(second.errors.is_empty());
        prop_assert_eq!(&first.entries, &second.entries);
    }

    #[test]
    fn test_parse_preserves_total_quantity(lines in entries()) {
        let text: String = lines.iter().map(|(q, name)| format!("{q}x {name}\n")).collect();
        let parsed = parse_decklist(&text);

        let submitted: u32 = lines.iter().map(|(q, _)| q).sum();
        let parsed_total: u32 = parsed.entries.iter().map(|e| e.quantity).sum();
        prop_assert_eq!(submitted, parsed_total);
    }

    // =========================================================================
    // Pricing
    // =========================================================================

    #[test]
    fn test_price_is_minimum(usd in price(), usd_foil in price(), usd_etched in price()) {
        let prices = Prices { usd, usd_foil, usd_etched };
        let available: Vec<f64> = [usd, usd_foil, usd_etched].into_iter().flatten().collect();

        match resolve_price(&prices) {
            None => prop_assert!(available.is_empty()),
            Some(min) => {
                prop_assert!(available.contains(&min));
                prop_assert!(available.iter().all(|p| min <= *p));
            }
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    #[test]
    fn test_compose_keeps_each_identifier_once(base in rule_ids(), overrides in rule_ids()) {
        let base: Vec<RuleSpec> = base.iter().map(|id| RuleSpec::bare(id.as_str())).collect();
        let overrides: Vec<RuleSpec> = overrides
            .iter()
            .enumerate()
            .map(|(i, id)| RuleSpec::with_params(id.as_str(), [(i as i64).into()]))
            .collect();

        let composed = compose_rules(Some(base.as_slice()), &overrides);

        let mut ids: Vec<&str> = composed.iter().map(RuleSpec::identifier).collect();
        let count = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), count);

        // Any overridden identifier carries the last override's value.
        for spec in &composed {
            let last = overrides.iter().rev().find(|o| o.identifier() == spec.identifier());
            if let Some(last) = last {
                prop_assert_eq!(spec, last);
            }
        }
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    #[test]
    fn test_resolution_never_invents_entries(
        commander_names in prop::collection::vec(card_name(), 0..3),
        lines in entries(),
        known in prop::collection::vec(card_name(), 0..10),
    ) {
        let lookup: InMemoryLookup = known
            .iter()
            .map(|name| CardAttributes::new(name.as_str(), "Legendary Creature"))
            .collect();
        let commanders: Vec<CardEntry> = commander_names
            .iter()
            .map(|name| CardEntry::new(name.as_str(), 1))
            .collect();
        let decklist: Vec<CardEntry> = lines
            .iter()
            .map(|(q, name)| CardEntry::new(name.as_str(), *q))
            .collect();

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let resolved = runtime.block_on(resolve_decklist(&commanders, &decklist, &lookup));

        let deck = &resolved.deck;
        prop_assert!(deck.commanders.len() <= commanders.len());
        prop_assert!(deck.decklist.len() <= decklist.len());
        prop_assert_eq!(
            deck.commanders.len() + deck.decklist.len() + resolved.errors.len(),
            commanders.len() + decklist.len()
        );

        // Survivors keep submission order.
        let submitted: Vec<String> = commanders
            .iter()
            .chain(&decklist)
            .filter(|entry| lookup.get(&entry.name).is_some())
            .map(|entry| entry.name.to_lowercase())
            .collect();
        let kept: Vec<String> = deck.all_cards().map(|card| card.name().to_lowercase()).collect();
        prop_assert_eq!(submitted, kept);
    }
}
