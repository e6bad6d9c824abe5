use std::fmt;

/// Event properties a query can compare against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    EventId,
    Level,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::EventId => "EventID",
            Field::Level => "Level",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Ne => "!=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
        }
    }
}

/// Boolean expression over event properties
///
/// Parentheses are explicit: `All` and `Any` print their operands joined by
/// `and` / `or` with no brackets of their own, and only `Group` adds a pair.
/// That keeps the printed text fully determined by the tree shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryExpr {
    Compare {
        field: Field,
        op: CmpOp,
        value: String,
    },
    All(Vec<QueryExpr>),
    Any(Vec<QueryExpr>),
    Group(Box<QueryExpr>),
    /// Matches every event
    Wildcard,
}

impl QueryExpr {
    pub fn compare(field: Field, op: CmpOp, value: impl Into<String>) -> Self {
        QueryExpr::Compare {
            field,
            op,
            value: value.into(),
        }
    }

    pub fn grouped(self) -> Self {
        QueryExpr::Group(Box::new(self))
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[QueryExpr], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for QueryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryExpr::Compare { field, op, value } => {
                write!(f, "{} {} {}", field.as_str(), op.as_str(), value)
            }
            QueryExpr::All(items) => write_joined(f, items, " and "),
            QueryExpr::Any(items) => write_joined(f, items, " or "),
            QueryExpr::Group(inner) => write!(f, "({inner})"),
            QueryExpr::Wildcard => f.write_str("*"),
        }
    }
}
