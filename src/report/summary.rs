//! Success report for a deck that passed validation.
//!
//! The report is CSV: one line per card, commanders first, followed by a
//! totals line.

use serde::{Deserialize, Serialize};

use crate::cards::ResolvedCard;
use crate::decklist::DecklistData;
use crate::rules::tally_deck_value;

/// CSV header matching `report_line`.
pub const REPORT_HEADER: &str = "Quantity,Name,Price,Link";

/// Per-card lines and deck totals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckReport {
    pub lines: Vec<String>,
    /// Value as counted by the budget rule.
    pub total_value: f64,
    /// Decklist quantities plus one per commander.
    pub total_count: u64,
}

impl DeckReport {
    /// Build the report for a resolved deck.
    #[must_use]
    pub fn new(deck: &DecklistData) -> Self {
        Self {
            lines: deck.all_cards().map(report_line).collect(),
            total_value: tally_deck_value(deck).total,
            total_count: deck.total_card_count(),
        }
    }

    /// Totals as a CSV line: `count,"Total",$value,`.
    #[must_use]
    pub fn totals_line(&self) -> String {
        format!("{},\"Total\",${:.2},", self.total_count, self.total_value)
    }

    /// Full CSV document: header, card lines, totals line.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut csv = String::from(REPORT_HEADER);
        for line in self.lines.iter().cloned().chain([self.totals_line()]) {
            csv.push('\n');
            csv.push_str(&line);
        }
        csv
    }
}

/// `quantity,"name",$price,reference_uri`.
///
/// The price is blank for basic lands and for cards without pricing data.
#[must_use]
pub fn report_line(entry: &ResolvedCard) -> String {
    let price = match entry.unit_price() {
        Some(price) if !entry.card.is_basic_land() => format!("${price:.2}"),
        _ => String::new(),
    };

    format!(
        "{},\"{}\",{},{}",
        entry.quantity,
        entry.name().replace('"', "\"\""),
        price,
        entry.card.reference_uri
    )
}
