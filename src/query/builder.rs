use super::expr::{CmpOp, Field, QueryExpr};
use super::severity::Severity;
use crate::filter::{EventIdFilter, EventRange};

const QUERY_HEAD: &str = "*[System[(";
const QUERY_TAIL: &str = ")]]";

/// Build the expression selecting events that pass `filter` and `severity`
///
/// Shape: `(Level) and ( ((ids) or (ranges)) and ((!ids) and (!ranges)) )`,
/// with each bracket present only when the parts it joins exist.
pub fn build_expr(filter: &EventIdFilter, severity: Option<Severity>) -> QueryExpr {
    let halves: Vec<QueryExpr> = [included_half(filter), excluded_half(filter)]
        .into_iter()
        .flatten()
        .collect();

    let events = match halves.len() {
        0 => None,
        1 => halves.into_iter().next(),
        _ => Some(QueryExpr::All(halves)),
    };

    match (severity.map(level_expr), events) {
        (Some(level), Some(events)) => QueryExpr::All(vec![level, events.grouped()]),
        (Some(level), None) => level,
        (None, Some(events)) => events,
        (None, None) => QueryExpr::Wildcard,
    }
}

/// Wrap an expression in the event log's `System` selector
pub fn render_query(expr: &QueryExpr) -> String {
    format!("{QUERY_HEAD}{expr}{QUERY_TAIL}")
}

fn level_expr(severity: Severity) -> QueryExpr {
    QueryExpr::All(vec![
        QueryExpr::compare(Field::Level, CmpOp::Gt, "0"),
        QueryExpr::compare(Field::Level, CmpOp::Le, severity.threshold().to_string()),
    ])
    .grouped()
}

/// `(ids) or (ranges)`, grouped when both are present
fn included_half(filter: &EventIdFilter) -> Option<QueryExpr> {
    let ids = id_list(&filter.included_ids, CmpOp::Eq, Joiner::Any);
    let ranges = range_list(&filter.included_ranges, inside_range, Joiner::Any);
    pair(ids, ranges, Joiner::Any)
}

/// `(!ids) and (!ranges)`, grouped when both are present
fn excluded_half(filter: &EventIdFilter) -> Option<QueryExpr> {
    let ids = id_list(&filter.excluded_ids, CmpOp::Ne, Joiner::All);
    let ranges = range_list(&filter.excluded_ranges, outside_range, Joiner::All);
    pair(ids, ranges, Joiner::All)
}

#[derive(Clone, Copy)]
enum Joiner {
    All,
    Any,
}

impl Joiner {
    fn join(self, items: Vec<QueryExpr>) -> QueryExpr {
        match self {
            Joiner::All => QueryExpr::All(items),
            Joiner::Any => QueryExpr::Any(items),
        }
    }
}

fn pair(first: Option<QueryExpr>, second: Option<QueryExpr>, joiner: Joiner) -> Option<QueryExpr> {
    match (first, second) {
        (Some(a), Some(b)) => Some(joiner.join(vec![a, b]).grouped()),
        (a, b) => a.or(b),
    }
}

/// One group holding every single-ID comparison
fn id_list(ids: &[String], op: CmpOp, joiner: Joiner) -> Option<QueryExpr> {
    if ids.is_empty() {
        return None;
    }
    let items = ids
        .iter()
        .map(|id| QueryExpr::compare(Field::EventId, op, id.as_str()))
        .collect();
    Some(joiner.join(items).grouped())
}

/// Each range grouped on its own; several ranges get one more group around them
fn range_list(
    ranges: &[EventRange],
    render: fn(&EventRange) -> QueryExpr,
    joiner: Joiner,
) -> Option<QueryExpr> {
    match ranges {
        [] => None,
        [single] => Some(render(single)),
        many => Some(joiner.join(many.iter().map(render).collect()).grouped()),
    }
}

fn inside_range(range: &EventRange) -> QueryExpr {
    QueryExpr::All(vec![
        QueryExpr::compare(Field::EventId, CmpOp::Ge, range.begin.as_str()),
        QueryExpr::compare(Field::EventId, CmpOp::Le, range.end.as_str()),
    ])
    .grouped()
}

fn outside_range(range: &EventRange) -> QueryExpr {
    QueryExpr::Any(vec![
        QueryExpr::compare(Field::EventId, CmpOp::Lt, range.begin.as_str()),
        QueryExpr::compare(Field::EventId, CmpOp::Gt, range.end.as_str()),
    ])
    .grouped()
}
