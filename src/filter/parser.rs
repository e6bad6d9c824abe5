use super::error::FilterParseError;
use serde::Serialize;
use std::cmp::Ordering;

/// Scanner state while walking the raw filter text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Between tokens
    Start,
    /// Reading the digits of an included ID (or the begin of an inclusive range)
    InIncludedId,
    /// Reading the end of an inclusive range (`begin-end`)
    InIncludedRangeEnd,
    /// Reading the digits of an excluded ID (or the begin of an exclusive range)
    InExcludedId,
    /// Reading the end of an exclusive range (`-begin-end`)
    InExcludedRangeEnd,
}

/// Which half of the filter a range belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeKind {
    Inclusive,
    Exclusive,
}

impl RangeKind {
    fn incomplete(self, begin: String, end: String) -> FilterParseError {
        match self {
            RangeKind::Inclusive => FilterParseError::IncompleteInclusiveRange { begin, end },
            RangeKind::Exclusive => FilterParseError::IncompleteExclusiveRange { begin, end },
        }
    }

    fn inverted(self, begin: &str, end: &str) -> FilterParseError {
        let begin = numeric_value(begin).to_string();
        let end = numeric_value(end).to_string();
        match self {
            RangeKind::Inclusive => FilterParseError::InvertedInclusiveRange { begin, end },
            RangeKind::Exclusive => FilterParseError::InvertedExclusiveRange { begin, end },
        }
    }

    fn duplicate(self, range: &EventRange) -> FilterParseError {
        let begin = numeric_value(&range.begin).to_string();
        let end = numeric_value(&range.end).to_string();
        match self {
            RangeKind::Inclusive => FilterParseError::DuplicateInclusiveRange { begin, end },
            RangeKind::Exclusive => FilterParseError::DuplicateExclusiveRange { begin, end },
        }
    }
}

/// An inclusive `begin..=end` span of event IDs, kept as the typed digits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRange {
    pub begin: String,
    pub end: String,
}

impl EventRange {
    fn checked(kind: RangeKind, begin: String, end: String) -> Result<Self, FilterParseError> {
        if begin.is_empty() || end.is_empty() {
            return Err(kind.incomplete(begin, end));
        }
        if compare_ids(&begin, &end) != Ordering::Less {
            return Err(kind.inverted(&begin, &end));
        }
        Ok(EventRange { begin, end })
    }
}

/// The four token collections produced by scanning a filter string
///
/// Every collection keeps insertion order, which is also the operand order
/// of the rendered query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventIdFilter {
    pub included_ids: Vec<String>,
    pub excluded_ids: Vec<String>,
    pub included_ranges: Vec<EventRange>,
    pub excluded_ranges: Vec<EventRange>,
}

impl EventIdFilter {
    /// Scan a filter string such as `"1,2,5-99,-45,-15"`
    ///
    /// Only tokenizes; the include/exclude combination rule is checked
    /// separately by [`validate_filter`](super::validate_filter).
    pub fn parse(input: &str) -> Result<Self, FilterParseError> {
        Self::scan(input, input.trim())
    }

    /// Scan `source`, quoting `echo` in any malformed-token error
    pub(crate) fn scan(source: &str, echo: &str) -> Result<Self, FilterParseError> {
        let mut scanner = Scanner::new(echo);
        for c in source.chars() {
            scanner.feed(c)?;
        }
        scanner.finish()
    }

    /// True when the filter selects nothing in particular (empty input)
    pub fn is_empty(&self) -> bool {
        self.included_ids.is_empty()
            && self.excluded_ids.is_empty()
            && self.included_ranges.is_empty()
            && self.excluded_ranges.is_empty()
    }
}

struct Scanner<'a> {
    echo: &'a str,
    state: ParseState,
    current_id: String,
    current_range: String,
    filter: EventIdFilter,
}

impl<'a> Scanner<'a> {
    fn new(echo: &'a str) -> Self {
        Self {
            echo,
            state: ParseState::Start,
            current_id: String::new(),
            current_range: String::new(),
            filter: EventIdFilter::default(),
        }
    }

    fn feed(&mut self, c: char) -> Result<(), FilterParseError> {
        match self.state {
            ParseState::Start => match c {
                ' ' => {}
                '-' => self.state = ParseState::InExcludedId,
                d if d.is_ascii_digit() => {
                    self.current_id.push(d);
                    self.state = ParseState::InIncludedId;
                }
                _ => return Err(FilterParseError::InvalidFilter(self.echo.to_string())),
            },
            ParseState::InIncludedId => match c {
                ' ' => {}
                ',' => self.commit()?,
                '-' => self.state = ParseState::InIncludedRangeEnd,
                d if d.is_ascii_digit() => self.current_id.push(d),
                _ => return Err(FilterParseError::InvalidFilter(self.echo.to_string())),
            },
            ParseState::InIncludedRangeEnd => match c {
                ' ' => {}
                ',' => self.commit()?,
                d if d.is_ascii_digit() => self.current_range.push(d),
                _ => {
                    return Err(FilterParseError::InvalidInclusiveRange(
                        self.echo.to_string(),
                    ));
                }
            },
            ParseState::InExcludedId => match c {
                ' ' => {}
                ',' => self.commit()?,
                '-' => self.state = ParseState::InExcludedRangeEnd,
                d if d.is_ascii_digit() => self.current_id.push(d),
                _ => return Err(FilterParseError::InvalidFilter(self.echo.to_string())),
            },
            ParseState::InExcludedRangeEnd => match c {
                ' ' => {}
                ',' => self.commit()?,
                d if d.is_ascii_digit() => self.current_range.push(d),
                _ => {
                    return Err(FilterParseError::InvalidExclusiveRange(
                        self.echo.to_string(),
                    ));
                }
            },
        }
        Ok(())
    }

    /// Store the pending token and return to `Start`
    fn commit(&mut self) -> Result<(), FilterParseError> {
        let id = std::mem::take(&mut self.current_id);
        let range_end = std::mem::take(&mut self.current_range);

        match self.state {
            // Nothing is pending between tokens
            ParseState::Start => {}
            ParseState::InIncludedId => self.filter.included_ids.push(id),
            ParseState::InExcludedId => {
                if id.is_empty() {
                    return Err(FilterParseError::MissingExcludedId);
                }
                self.filter.excluded_ids.push(id);
            }
            ParseState::InIncludedRangeEnd => {
                let range = EventRange::checked(RangeKind::Inclusive, id, range_end)?;
                push_range(&mut self.filter.included_ranges, range, RangeKind::Inclusive)?;
            }
            ParseState::InExcludedRangeEnd => {
                let range = EventRange::checked(RangeKind::Exclusive, id, range_end)?;
                push_range(&mut self.filter.excluded_ranges, range, RangeKind::Exclusive)?;
            }
        }

        self.state = ParseState::Start;
        Ok(())
    }

    fn finish(mut self) -> Result<EventIdFilter, FilterParseError> {
        // A dangling token is flushed as if a comma followed it
        if self.state != ParseState::Start {
            self.commit()?;
        }
        Ok(self.filter)
    }
}

/// Ranges are keyed by their begin as typed; a repeated begin is rejected
fn push_range(
    ranges: &mut Vec<EventRange>,
    range: EventRange,
    kind: RangeKind,
) -> Result<(), FilterParseError> {
    if ranges.iter().any(|r| r.begin == range.begin) {
        return Err(kind.duplicate(&range));
    }
    ranges.push(range);
    Ok(())
}

/// Strip leading zeros, keeping a single `0` for an all-zero ID
fn numeric_value(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Compare two digit strings by numeric value, without any width limit
fn compare_ids(a: &str, b: &str) -> Ordering {
    let a = numeric_value(a);
    let b = numeric_value(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
