//! Canonical price resolution.
//!
//! A card can be priced in several finishes. The canonical price is the
//! cheapest available one. A card with no priced finish has no canonical
//! price at all, which is not the same as costing $0.00.

use super::attributes::Prices;

/// Cheapest of the non-null finish prices, or `None` if none are set.
///
/// ```
/// use servo_validator::cards::{resolve_price, Prices};
///
/// assert_eq!(resolve_price(&Prices::usd(2.0).with_foil(1.5)), Some(1.5));
/// assert_eq!(resolve_price(&Prices::default()), None);
/// ```
#[must_use]
pub fn resolve_price(prices: &Prices) -> Option<f64> {
    [prices.usd, prices.usd_foil, prices.usd_etched]
        .into_iter()
        .flatten()
        .reduce(f64::min)
}
