//! Event log query generation
//!
//! Turns an event ID filter plus an optional severity threshold into the
//! structured query text understood by the Windows event log query engine.
//! The text is matched literally downstream, so operand order, bracket
//! placement and spacing are all part of the contract.
//!
//! ```
//! use eventlog_filter::query::EventQuery;
//!
//! let query = EventQuery::new("1,2,5-99,-45,-15", None).unwrap();
//! assert_eq!(
//!     query.query(),
//!     "*[System[(((EventID = 1 or EventID = 2) or (EventID >= 5 and EventID <= 99)) and (EventID != 45 and EventID != 15))]]"
//! );
//! ```

pub mod builder;
pub mod expr;
pub mod severity;

use crate::filter::{EventIdFilter, FilterParseError, MessagePrefixes, validate_filter};
pub use builder::{build_expr, render_query};
pub use expr::{CmpOp, Field, QueryExpr};
pub use severity::Severity;
use std::fmt;

/// A compiled, validated event query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    filter: EventIdFilter,
    severity: Option<Severity>,
    query: String,
}

impl EventQuery {
    /// Parse, validate and render `filter`
    pub fn new(filter: &str, severity: Option<Severity>) -> Result<Self, FilterParseError> {
        Self::compile(filter, filter, severity)
    }

    /// Same as [`EventQuery::new`], taking the integer severity convention
    /// where `-1` disables the severity filter
    pub fn from_threshold(filter: &str, threshold: i32) -> Result<Self, FilterParseError> {
        Self::new(filter, Severity::from_threshold(threshold)?)
    }

    /// Strip message-catalog prefixes from the filter tokens before compiling
    ///
    /// Errors quote the filter as the user typed it.
    pub fn with_prefixes(
        filter: &str,
        severity: Option<Severity>,
        prefixes: &MessagePrefixes,
    ) -> Result<Self, FilterParseError> {
        let stripped = prefixes.strip(filter);
        Self::compile(&stripped, filter, severity)
    }

    fn compile(
        source: &str,
        raw: &str,
        severity: Option<Severity>,
    ) -> Result<Self, FilterParseError> {
        let filter = EventIdFilter::scan(source, raw.trim())?;
        validate_filter(&filter, raw)?;
        let query = render_query(&build_expr(&filter, severity));

        Ok(EventQuery {
            filter,
            severity,
            query,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> &EventIdFilter {
        &self.filter
    }

    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    pub fn into_query(self) -> String {
        self.query
    }
}

impl fmt::Display for EventQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query)
    }
}
