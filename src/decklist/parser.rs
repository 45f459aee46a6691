//! Decklist text parsing.
//!
//! Decklists arrive as free text, one `"<quantity> <card name>"` per line.
//! Commander input is one card name per line.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::cards::CardEntry;

/// Entries parsed from a decklist, plus one message per rejected line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedDecklist {
    /// Deduplicated entries in first-occurrence order.
    pub entries: Vec<CardEntry>,
    pub errors: Vec<String>,
}

/// Parse a decklist.
///
/// Blank lines are skipped. A malformed line is reported and dropped
/// without stopping the parse. Repeated names are merged: quantities add
/// up and the entry keeps the position of the name's first line. A repeat
/// that would push the merged quantity past `u32::MAX` is reported and
/// dropped like a malformed line.
///
/// ```
/// use servo_validator::decklist::parse_decklist;
///
/// let parsed = parse_decklist("1 Sol Ring\n30 Forest\nSol Ring\n2 Forest");
/// assert_eq!(parsed.entries.len(), 2);
/// assert_eq!(parsed.entries[1].quantity, 32);
/// assert_eq!(parsed.errors.len(), 1);
/// ```
#[must_use]
pub fn parse_decklist(text: &str) -> ParsedDecklist {
    let mut parsed = ParsedDecklist::default();
    let mut positions: FxHashMap<String, usize> = FxHashMap::default();

    for line in non_empty_lines(text) {
        let Some((name, quantity)) = parse_line(line) else {
            parsed.errors.push(wrong_format(line));
            continue;
        };

        match positions.get(name) {
            Some(&index) => {
                let entry = &mut parsed.entries[index];
                match entry.quantity.checked_add(quantity) {
                    Some(total) => entry.quantity = total,
                    // The merged quantity is unrepresentable; this line is dropped.
                    None => parsed.errors.push(wrong_format(line)),
                }
            }
            None => {
                positions.insert(name.to_string(), parsed.entries.len());
                parsed.entries.push(CardEntry::new(name, quantity));
            }
        }
    }

    debug!(
        entries = parsed.entries.len(),
        rejected = parsed.errors.len(),
        "parsed decklist"
    );
    parsed
}

/// Parse commander input: every non-empty line names one commander.
///
/// Lines are not merged or capped; the commander rule reports a count
/// above two.
#[must_use]
pub fn parse_commander_input(text: &str) -> Vec<CardEntry> {
    non_empty_lines(text)
        .map(|line| CardEntry::new(line, 1))
        .collect()
}

fn wrong_format(line: &str) -> String {
    format!(
        "The decklist entry \"{line}\" is in the wrong format. Please resubmit using the format \"<quantity> <card name>\"."
    )
}

fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Split a trimmed line at its first space into (name, quantity).
fn parse_line(line: &str) -> Option<(&str, u32)> {
    let (quantity, name) = line.split_once(' ')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    // "2x Island" is common in exported lists.
    let quantity = quantity
        .strip_suffix('x')
        .or_else(|| quantity.strip_suffix('X'))
        .unwrap_or(quantity);

    match quantity.parse::<u32>() {
        Ok(q) if q > 0 => Some((name, q)),
        _ => None,
    }
}
