use thiserror::Error;

/// Errors that can occur when compiling an event ID filter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterParseError {
    #[error("Invalid Event ID filter: '{0}'")]
    InvalidFilter(String),

    #[error("Invalid inclusive range filter: '{0}'")]
    InvalidInclusiveRange(String),

    #[error("Invalid exclusive range filter: '{0}'")]
    InvalidExclusiveRange(String),

    #[error("Invalid inclusive range filter '{begin}'-'{end}'. Both parts of the range are required")]
    IncompleteInclusiveRange { begin: String, end: String },

    #[error("Invalid exclusive range filter -'{begin}'-'{end}'. Both parts of the range are required")]
    IncompleteExclusiveRange { begin: String, end: String },

    #[error("Invalid exclusive filter '-'. The event ID must be specified")]
    MissingExcludedId,

    #[error("Invalid inclusive range filter '{begin}-{end}'. Begin must be < end")]
    InvertedInclusiveRange { begin: String, end: String },

    #[error("Invalid exclusive range filter '-{begin}-{end}'. Begin must be < end")]
    InvertedExclusiveRange { begin: String, end: String },

    #[error(
        "Invalid inclusive range filter '{begin}-{end}'. A range starting at {begin} is already specified"
    )]
    DuplicateInclusiveRange { begin: String, end: String },

    #[error(
        "Invalid exclusive range filter '-{begin}-{end}'. A range starting at {begin} is already specified"
    )]
    DuplicateExclusiveRange { begin: String, end: String },

    #[error(
        "Invalid Event ID filter. Cannot have included and excluded events in a filter without a range: '{0}'"
    )]
    MixedWithoutRange(String),

    #[error("Invalid severity level {0}. Expected -1 or a value between 1 and 5")]
    InvalidSeverity(i32),
}
