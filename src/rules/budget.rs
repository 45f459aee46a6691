//! Budget rules and deck value tallying.
//!
//! Cards without pricing data are never counted as $0.00: they are left
//! out of every sum and reported on their own.

use crate::decklist::DecklistData;

/// Value of a deck and the cards that could not be priced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeckValue {
    /// Sum of all priced cards.
    pub total: f64,
    /// One message per card without pricing data, decklist first.
    pub missing_prices: Vec<String>,
}

/// Tally the value of a deck.
///
/// Decklist cards count price × quantity, except basic lands which count
/// nothing. Commanders count their price once.
#[must_use]
pub fn tally_deck_value(deck: &DecklistData) -> DeckValue {
    let mut value = DeckValue::default();

    for entry in &deck.decklist {
        match entry.unit_price() {
            None => value.missing_prices.push(format!(
                "The card \"{}\" does not have pricing information. Please verify this is the correct card and resubmit.",
                entry.name()
            )),
            Some(_) if entry.card.is_basic_land() => {}
            Some(price) => value.total += price * f64::from(entry.quantity),
        }
    }

    for commander in &deck.commanders {
        match commander.unit_price() {
            None => value.missing_prices.push(format!(
                "The commander \"{}\" does not have pricing information. Please verify this is the correct card and resubmit.",
                commander.name()
            )),
            Some(price) => value.total += price,
        }
    }

    value
}

/// The whole deck must not be worth more than `budget`.
#[must_use]
pub fn is_total_budget_exceeded(budget: f64, deck: &DecklistData) -> Vec<String> {
    let DeckValue {
        total,
        mut missing_prices,
    } = tally_deck_value(deck);

    if total > budget {
        missing_prices.push(format!(
            "The total deck value is **${total:.2}**, exceeding the **${}** budget. Please modify your deck to have a value below the budget and resubmit.",
            display_budget(budget)
        ));
    }

    missing_prices
}

/// The commanders together must not be worth more than `budget`.
///
/// Unpriced commanders are left out of the sum; the total budget rule
/// reports them.
#[must_use]
pub fn is_commander_budget_exceeded(budget: f64, deck: &DecklistData) -> Vec<String> {
    let total: f64 = deck
        .commanders
        .iter()
        .filter_map(|commander| commander.unit_price())
        .sum();

    if total <= budget {
        return Vec::new();
    }

    match deck.commanders.as_slice() {
        [commander] => vec![format!(
            "Your commander \"{}\" has a value of **${total:.2}**, exceeding the budget of **${}**. Please select a different commander and resubmit.",
            commander.name(),
            display_budget(budget)
        )],
        commanders => {
            let names: Vec<String> = commanders
                .iter()
                .map(|commander| format!("\"{}\"", commander.name()))
                .collect();
            vec![format!(
                "Your commanders {} have a total value of **${total:.2}**, exceeding the budget of **${}**. Please modify your commander selection and resubmit.",
                names.join(" and "),
                display_budget(budget)
            )]
        }
    }
}

/// Budgets print without trailing zeros: `25`, `7.5`.
fn display_budget(budget: f64) -> String {
    budget.to_string()
}
