//! Output formatting: success reports and chunked error digests.

pub mod messages;
pub mod summary;

pub use messages::{chunk_error_messages, DEFAULT_MESSAGE_CHAR_LIMIT};
pub use summary::{report_line, DeckReport, REPORT_HEADER};
