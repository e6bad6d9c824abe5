//! Event ID filter parsing
//!
//! A filter is a compact, comma separated list of event IDs and ID ranges
//! that selects which event log entries to keep.
//!
//! # Syntax
//!
//! ```text
//! id                   Keep entries with this event ID
//! -id                  Drop entries with this event ID
//! begin-end            Keep entries with an ID in begin..=end
//! -begin-end           Drop entries with an ID in begin..=end
//! ```
//!
//! Spaces are ignored anywhere, so `" 42 - 48 "` reads the same as `"42-48"`.
//! Single included and excluded IDs can only be mixed when the filter also
//! carries an included range.
//!
//! # Examples
//!
//! ```text
//! 42                   Only event 42
//! 42, 43, 44           Events 42, 43 or 44
//! -42                  Everything except event 42
//! 1,2,5-99,-45,-15     Events 1, 2 and 5..=99, but not 45 or 15
//! ```

pub mod error;
pub mod parser;
pub mod prefix;
pub mod validator;

pub use error::FilterParseError;
pub use parser::{EventIdFilter, EventRange};
pub use prefix::MessagePrefixes;
pub use validator::validate_filter;
