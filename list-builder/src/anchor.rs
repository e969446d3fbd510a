use std::sync::LazyLock;

use regex::Regex;

use crate::error::RowError;

// "12. Two Sum : 1 | 55.2%"
static WITH_ORDINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.\s*(.+?)\s*:\s*(\d+)\s*\|\s*([\d.]+)%").unwrap()
});
// "Two Sum : 1 | 55.2%"
static WITHOUT_ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*:\s*(\d+)\s*\|\s*([\d.]+)%").unwrap());
// "1. Two Sum", as scraped
pub(crate) static ID_AND_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s*(.+)").unwrap());
static ANY_PERCENTAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([\d.]+)%").unwrap());
static PLAIN_DECIMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\d.]+$").unwrap());

/// The fields recoverable from a row's link text.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub title: String,
    pub external_id: String,
    pub acceptance: f64,
}

/// A known text layout. `None` means the layout does not apply and the next
/// one should be tried; `Some(Err)` rejects the row outright.
type Layout = fn(&str) -> Option<Result<Anchor, RowError>>;

/// Layouts in priority order.
const LAYOUTS: [Layout; 3] = [with_ordinal, without_ordinal, id_and_title];

/// Parse the link text of one list row.
pub fn parse_anchor_text(text: &str) -> Result<Anchor, RowError> {
    LAYOUTS
        .iter()
        .find_map(|layout| layout(text))
        .unwrap_or_else(|| Err(RowError::UnrecognizedLayout(text.to_string())))
}

/// A plain decimal in `0..=100`. Signs, exponents, `NaN` and `inf` are
/// rejected.
pub fn parse_percentage(raw: &str) -> Result<f64, RowError> {
    let bad = || RowError::BadPercentage(raw.to_string());
    let trimmed = raw.trim();
    if !PLAIN_DECIMAL.is_match(trimmed) {
        return Err(bad());
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value <= 100.0 => Ok(value),
        _ => Err(bad()),
    }
}

fn with_ordinal(text: &str) -> Option<Result<Anchor, RowError>> {
    let caps = WITH_ORDINAL.captures(text)?;
    Some(anchor(&caps[2], &caps[3], &caps[4]))
}

fn without_ordinal(text: &str) -> Option<Result<Anchor, RowError>> {
    let caps = WITHOUT_ORDINAL.captures(text)?;
    Some(anchor(&caps[1], &caps[2], &caps[3]))
}

fn id_and_title(text: &str) -> Option<Result<Anchor, RowError>> {
    let caps = ID_AND_TITLE.captures(text)?;
    let acceptance = match ANY_PERCENTAGE.captures(text) {
        Some(pct) => match parse_percentage(&pct[1]) {
            Ok(value) => value,
            Err(e) => return Some(Err(e)),
        },
        None => 0.0,
    };

    Some(Ok(Anchor {
        title: caps[2].trim().to_string(),
        external_id: caps[1].to_string(),
        acceptance,
    }))
}

fn anchor(title: &str, id: &str, pct: &str) -> Result<Anchor, RowError> {
    Ok(Anchor {
        title: title.trim().to_string(),
        external_id: id.to_string(),
        acceptance: parse_percentage(pct)?,
    })
}
