use super::error::FilterParseError;
use super::parser::EventIdFilter;

/// Check the cross-collection rules of a scanned filter
///
/// Single included and excluded IDs may only be mixed when an included range
/// is also present. Overlapping or otherwise odd ranges are accepted, the
/// same way the event log query engine accepts them.
pub fn validate_filter(filter: &EventIdFilter, raw: &str) -> Result<(), FilterParseError> {
    if !filter.included_ids.is_empty()
        && !filter.excluded_ids.is_empty()
        && filter.included_ranges.is_empty()
    {
        return Err(FilterParseError::MixedWithoutRange(raw.trim().to_string()));
    }

    Ok(())
}
