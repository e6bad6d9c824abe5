use regex::Regex;
use std::borrow::Cow;

/// Message-catalog prefixes (e.g. `BIP` in `BIP2152`) removed from filter tokens
///
/// A prefix is only removed at the start of a token: at the start of the
/// input or after a `,` or `-`, with any number of spaces in between, and only
/// when a digit follows it. Anything else is left for the scanner to reject,
/// so `"4 BIP2"` is not read as event 42.
#[derive(Debug, Clone, Default)]
pub struct MessagePrefixes {
    pattern: Option<Regex>,
}

impl MessagePrefixes {
    pub fn new(prefixes: &[String]) -> Self {
        Self {
            pattern: prefix_regex(prefixes),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }

    pub fn strip<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match &self.pattern {
            Some(re) => re.replace_all(input, "${lead}${digit}"),
            None => Cow::Borrowed(input),
        }
    }
}

fn prefix_regex(prefixes: &[String]) -> Option<Regex> {
    let alternatives: Vec<String> = prefixes
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| regex::escape(p))
        .collect();
    if alternatives.is_empty() {
        return None;
    }

    let pattern = format!(
        r"(?P<lead>(?:^|[,\-]) *)(?:{})(?P<digit>[0-9])",
        alternatives.join("|")
    );
    // Escaped literals always form a valid pattern
    Regex::new(&pattern).ok()
}
