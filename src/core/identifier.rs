use crate::domain::{ServiceKind, TrainId};
use crate::utils::error::{FormatError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// One capture group per rule, in `ServiceKind::ALL` order. The regex crate
/// resolves alternation leftmost-first, so the earliest start position wins
/// and ties at a position go to the rule listed first. Anchored rules only
/// apply at the start of the input.
static ID_MATCHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&grammar_pattern()).expect("identifier grammar is a valid pattern")
});

fn grammar_pattern() -> String {
    ServiceKind::ALL
        .iter()
        .map(|kind| {
            let (min, max) = kind.digits();
            let anchor = if kind.anchored() { "^" } else { "" };
            format!(
                "({}{}[0-9]{{{},{}}})",
                anchor,
                regex::escape(kind.prefix()),
                min,
                max
            )
        })
        .collect::<Vec<_>>()
        .join("|")
}

/// Finds the first service code in `raw` and reports which rule matched.
pub fn identify(raw: &str) -> Option<TrainId<'_>> {
    let caps = ID_MATCHER.captures(raw)?;

    ServiceKind::ALL
        .iter()
        .enumerate()
        .find_map(|(index, kind)| {
            caps.get(index + 1).map(|m| TrainId {
                kind: *kind,
                code: m.as_str(),
            })
        })
}

/// Extracts the first service code from a free-form identifier, e.g. a
/// vehicle URI or headsign label.
pub fn filter_id(raw: &str) -> Result<&str> {
    match identify(raw) {
        Some(id) => {
            tracing::debug!("Matched {} identifier {} in {:?}", id.kind, id.code, raw);
            Ok(id.code)
        }
        None => {
            tracing::debug!("No train identifier in {:?}", raw);
            Err(FormatError::NoMatchFound {
                input: raw.to_string(),
            })
        }
    }
}
