//! Error digest chunking.
//!
//! Validation errors are delivered as bulleted chat messages, which have a
//! size limit. Errors are packed greedily into as few messages as fit.

/// Default per-message character limit.
pub const DEFAULT_MESSAGE_CHAR_LIMIT: usize = 1900;

/// Pack errors into `"- error"` bullet messages under `limit` characters.
///
/// A bullet is appended to the current message unless the result would
/// reach the limit, in which case it starts a new message. A single bullet
/// longer than the limit still gets a message of its own.
///
/// ```
/// use servo_validator::report::chunk_error_messages;
///
/// let errors = vec!["first".to_string(), "second".to_string()];
/// assert_eq!(chunk_error_messages(&errors, 1900), vec!["- first\n- second"]);
/// assert_eq!(chunk_error_messages(&errors, 16), vec!["- first", "- second"]);
/// ```
#[must_use]
pub fn chunk_error_messages(errors: &[String], limit: usize) -> Vec<String> {
    let mut messages: Vec<String> = Vec::new();
    // Character count of the last message.
    let mut current_len = 0;

    for error in errors {
        let bullet = format!("- {error}");
        let bullet_len = bullet.chars().count();

        match messages.last_mut() {
            Some(current) if current_len + 1 + bullet_len < limit => {
                current.push('\n');
                current.push_str(&bullet);
                current_len += 1 + bullet_len;
            }
            _ => {
                messages.push(bullet);
                current_len = bullet_len;
            }
        }
    }

    messages
}
