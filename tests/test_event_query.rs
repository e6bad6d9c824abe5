use eventlog_filter::filter::MessagePrefixes;
use eventlog_filter::query::{EventQuery, Severity};

fn query(filter: &str) -> String {
    EventQuery::new(filter, None)
        .expect("filter should compile")
        .into_query()
}

fn query_with_level(filter: &str, severity: Severity) -> String {
    EventQuery::new(filter, Some(severity))
        .expect("filter should compile")
        .into_query()
}

fn error(filter: &str) -> String {
    EventQuery::new(filter, None)
        .expect_err("filter should be rejected")
        .to_string()
}

#[test]
fn test_empty_string_returns_match_all_wildcard() {
    assert_eq!(query(""), "*[System[(*)]]");
}

#[test]
fn test_only_spaces_returns_match_all_wildcard() {
    assert_eq!(query("    "), "*[System[(*)]]");
}

#[test]
fn test_single_comma_not_allowed() {
    assert_eq!(error(","), "Invalid Event ID filter: ','");
    assert_eq!(error("   ,   "), "Invalid Event ID filter: ','");
}

#[test]
fn test_single_hyphen_not_allowed() {
    assert_eq!(
        error("-"),
        "Invalid exclusive filter '-'. The event ID must be specified"
    );
}

#[test]
fn test_extra_hyphens_not_allowed() {
    assert_eq!(error("----42"), "Invalid exclusive range filter: '----42'");
    assert_eq!(
        error("--42"),
        "Invalid exclusive range filter -''-'42'. Both parts of the range are required"
    );
    assert_eq!(error("42--44"), "Invalid inclusive range filter: '42--44'");
    assert_eq!(error("-42--44"), "Invalid exclusive range filter: '-42--44'");
}

#[test]
fn test_missing_range_end_not_allowed() {
    assert_eq!(
        error("42-"),
        "Invalid inclusive range filter '42'-''. Both parts of the range are required"
    );
    assert_eq!(
        error("-42-"),
        "Invalid exclusive range filter -'42'-''. Both parts of the range are required"
    );
}

#[test]
fn test_range_begin_must_be_less_than_end() {
    assert_eq!(
        error("42-41"),
        "Invalid inclusive range filter '42-41'. Begin must be < end"
    );
    assert_eq!(
        error("-42-40"),
        "Invalid exclusive range filter '-42-40'. Begin must be < end"
    );
    assert_eq!(
        error("42-42"),
        "Invalid inclusive range filter '42-42'. Begin must be < end"
    );
    assert_eq!(
        error("-41-41"),
        "Invalid exclusive range filter '-41-41'. Begin must be < end"
    );
}

#[test]
fn test_single_event_id_included() {
    assert_eq!(query("42"), "*[System[((EventID = 42))]]");
}

#[test]
fn test_multiple_event_ids_included() {
    assert_eq!(
        query(" 42 , 43 , 44 "),
        "*[System[((EventID = 42 or EventID = 43 or EventID = 44))]]"
    );
}

#[test]
fn test_single_event_id_excluded() {
    assert_eq!(query(" -42"), "*[System[((EventID != 42))]]");
}

#[test]
fn test_multiple_event_ids_excluded() {
    assert_eq!(
        query(" -42 , -43 , -44"),
        "*[System[((EventID != 42 and EventID != 43 and EventID != 44))]]"
    );
}

#[test]
fn test_included_and_excluded_ids_without_range_are_rejected() {
    assert_eq!(
        error("32, -42"),
        "Invalid Event ID filter. Cannot have included and excluded events in a filter without a range: '32, -42'"
    );
    assert_eq!(
        error(" 32, -42, 33, -44 "),
        "Invalid Event ID filter. Cannot have included and excluded events in a filter without a range: '32, -42, 33, -44'"
    );
}

#[test]
fn test_included_range_allows_excludes_and_outside_includes() {
    assert_eq!(
        query("0-999,-0,1003,-3,1025,-300-500"),
        "*[System[(((EventID = 1003 or EventID = 1025) or (EventID >= 0 and EventID <= 999)) and ((EventID != 0 and EventID != 3) and (EventID < 300 or EventID > 500)))]]"
    );
}

#[test]
fn test_single_range_included() {
    assert_eq!(
        query("42-49"),
        "*[System[((EventID >= 42 and EventID <= 49))]]"
    );
}

#[test]
fn test_overlapping_ranges_included() {
    assert_eq!(
        query(" 42-48 , 43-80 , 44 - 50 "),
        "*[System[(((EventID >= 42 and EventID <= 48) or (EventID >= 43 and EventID <= 80) or (EventID >= 44 and EventID <= 50)))]]"
    );
}

#[test]
fn test_single_range_excluded() {
    assert_eq!(
        query("-42-49"),
        "*[System[((EventID < 42 or EventID > 49))]]"
    );
}

#[test]
fn test_multiple_ranges_excluded() {
    assert_eq!(
        query(" -60-200 , -400-800 , -1025 - 1028 "),
        "*[System[(((EventID < 60 or EventID > 200) and (EventID < 400 or EventID > 800) and (EventID < 1025 or EventID > 1028)))]]"
    );
}

#[test]
fn test_excluded_ranges_with_single_include() {
    assert_eq!(
        query(" -60-200 , -400-800 , 1026, -1025 - 1028, "),
        "*[System[((EventID = 1026) and ((EventID < 60 or EventID > 200) and (EventID < 400 or EventID > 800) and (EventID < 1025 or EventID > 1028)))]]"
    );
}

#[test]
fn test_mixed_filter() {
    assert_eq!(
        query("1,2,5-99,-45,-15"),
        "*[System[(((EventID = 1 or EventID = 2) or (EventID >= 5 and EventID <= 99)) and (EventID != 45 and EventID != 15))]]"
    );
}

#[test]
fn test_mixed_filter_in_any_order() {
    assert_eq!(
        query(" 5-99 , -2-7, -45 , -15, 1, 2 "),
        "*[System[(((EventID = 1 or EventID = 2) or (EventID >= 5 and EventID <= 99)) and ((EventID != 45 and EventID != 15) and (EventID < 2 or EventID > 7)))]]"
    );
}

#[test]
fn test_ids_and_single_range() {
    assert_eq!(
        query(" 44,45,46,60-70 "),
        "*[System[(((EventID = 44 or EventID = 45 or EventID = 46) or (EventID >= 60 and EventID <= 70)))]]"
    );
}

#[test]
fn test_severity_only() {
    assert_eq!(
        query_with_level("", Severity::Warning),
        "*[System[((Level > 0 and Level <= 3))]]"
    );
    assert_eq!(
        query_with_level("", Severity::Error),
        "*[System[((Level > 0 and Level <= 2))]]"
    );
    assert_eq!(
        query_with_level("", Severity::Critical),
        "*[System[((Level > 0 and Level <= 1))]]"
    );
}

#[test]
fn test_severity_with_single_parts() {
    assert_eq!(
        query_with_level("42", Severity::Warning),
        "*[System[((Level > 0 and Level <= 3) and ((EventID = 42)))]]"
    );
    assert_eq!(
        query_with_level("-1", Severity::Warning),
        "*[System[((Level > 0 and Level <= 3) and ((EventID != 1)))]]"
    );
    assert_eq!(
        query_with_level("42-44", Severity::Warning),
        "*[System[((Level > 0 and Level <= 3) and ((EventID >= 42 and EventID <= 44)))]]"
    );
    assert_eq!(
        query_with_level("-11-21", Severity::Warning),
        "*[System[((Level > 0 and Level <= 3) and ((EventID < 11 or EventID > 21)))]]"
    );
}

#[test]
fn test_severity_with_mixed_filter() {
    assert_eq!(
        query_with_level("1,2,5-99,-45,-15", Severity::Warning),
        "*[System[((Level > 0 and Level <= 3) and (((EventID = 1 or EventID = 2) or (EventID >= 5 and EventID <= 99)) and (EventID != 45 and EventID != 15)))]]"
    );
}

#[test]
fn test_invalid_characters_are_not_allowed() {
    assert_eq!(error("a"), "Invalid Event ID filter: 'a'");
    assert_eq!(error("-a"), "Invalid Event ID filter: '-a'");
    assert_eq!(error("4a"), "Invalid Event ID filter: '4a'");
    assert_eq!(error("-4a"), "Invalid Event ID filter: '-4a'");
    assert_eq!(error("4-a"), "Invalid inclusive range filter: '4-a'");
    assert_eq!(error("-4-a"), "Invalid exclusive range filter: '-4-a'");
    assert_eq!(error("4-4a"), "Invalid inclusive range filter: '4-4a'");
    assert_eq!(error("-4-4a"), "Invalid exclusive range filter: '-4-4a'");
}

#[test]
fn test_message_prefix_is_not_part_of_the_grammar() {
    assert_eq!(error("BIP42"), "Invalid Event ID filter: 'BIP42'");
}

#[test]
fn test_message_prefixed_event_id_included() {
    let prefixes = MessagePrefixes::new(&["BIP".to_string()]);
    let query = EventQuery::with_prefixes("BIP42", None, &prefixes).unwrap();
    assert_eq!(query.query(), "*[System[((EventID = 42))]]");
}

#[test]
fn test_prefixed_errors_quote_the_typed_filter() {
    let prefixes = MessagePrefixes::new(&["BIP".to_string()]);
    let err = EventQuery::with_prefixes(" BIP32, -BIP42 ", None, &prefixes).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid Event ID filter. Cannot have included and excluded events in a filter without a range: 'BIP32, -BIP42'"
    );

    let err = EventQuery::with_prefixes("BIP4x", None, &prefixes).unwrap_err();
    assert_eq!(err.to_string(), "Invalid Event ID filter: 'BIP4x'");
}

#[test]
fn test_integer_threshold_convention() {
    assert_eq!(
        EventQuery::from_threshold("42", -1).unwrap().query(),
        "*[System[((EventID = 42))]]"
    );
    assert_eq!(
        EventQuery::from_threshold("", 4).unwrap().query(),
        "*[System[((Level > 0 and Level <= 4))]]"
    );
    assert_eq!(
        EventQuery::from_threshold("", 0).unwrap_err().to_string(),
        "Invalid severity level 0. Expected -1 or a value between 1 and 5"
    );
}

#[test]
fn test_query_exposes_parsed_filter() {
    let query = EventQuery::new("1,5-9,-7", Some(Severity::Error)).unwrap();
    assert_eq!(query.filter().included_ids, vec!["1"]);
    assert_eq!(query.filter().excluded_ids, vec!["7"]);
    assert_eq!(query.filter().included_ranges.len(), 1);
    assert_eq!(query.severity(), Some(Severity::Error));
    assert_eq!(query.to_string(), query.query());
}

#[test]
fn test_spaced_prefix_is_not_glued_to_previous_digits() {
    let prefixes = MessagePrefixes::new(&["BIP".to_string()]);
    let err = EventQuery::with_prefixes("4 BIP2", None, &prefixes).unwrap_err();
    assert_eq!(err.to_string(), "Invalid Event ID filter: '4 BIP2'");

    let err = EventQuery::with_prefixes("BIP4 BIP2", None, &prefixes).unwrap_err();
    assert_eq!(err.to_string(), "Invalid Event ID filter: 'BIP4 BIP2'");

    let query = EventQuery::with_prefixes("4, BIP2", None, &prefixes).unwrap();
    assert_eq!(query.query(), "*[System[((EventID = 4 or EventID = 2))]]");
}
