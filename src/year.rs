use regex::Regex;
use std::sync::LazyLock;

/// Longest plausible lifespan; death dates further out are taken as bad data.
pub const MAX_LIFESPAN_YEARS: i64 = 125;

static RE_DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

// ── Parsing ────────────────────────────────────────────────────────
//
// Real data examples (dbpedia deathDate / deathYear bindings):
//   well-formed:  "1850", "-0399", "1912-04-15", "0476-09-04"
//   problematic:  "c. 1850", "399 BC", "44 BCE", "Unknown", "circa 12th century"

/// Convert a free-form date string into a signed year (BCE negative).
///
/// Strings with letters in them go through a lenient path that takes the
/// first run of digits; everything else must look like `[-]yyyy[-...]`.
pub fn parse_year(raw: &str) -> Option<i32> {
    let date = raw.trim();
    if is_problematic(date) {
        parse_problematic(date)
    } else {
        parse_well_formed(date)
    }
}

fn is_problematic(date: &str) -> bool {
    date.is_empty() || date.chars().any(char::is_alphabetic)
}

fn parse_problematic(date: &str) -> Option<i32> {
    let lower = date.to_lowercase();
    if lower.contains("unknown") {
        return None;
    }
    // "bce" contains "bc"
    let bce = lower.contains("bc");
    let year: i32 = RE_DIGIT_RUN.find(&lower)?.as_str().parse().ok()?;
    Some(if bce { -year } else { year })
}

fn parse_well_formed(date: &str) -> Option<i32> {
    let negative = date.starts_with('-');
    let body = date.trim_start_matches('-');
    // "1912-04-15" → "1912"
    let first = body.split('-').next()?;
    let year: i32 = first.parse().ok()?;
    Some(if negative { -year } else { year })
}

// ── Sanity repair ──────────────────────────────────────────────────

/// Pick the reading of `death` that makes a plausible lifespan.
///
/// Sources often drop the era marker on ancient dates, so the negated year is
/// tried as well. Returns `None` when neither reading lands within
/// [`MAX_LIFESPAN_YEARS`] after `birth`.
pub fn reconcile_death_year(birth: i32, death: i32) -> Option<i32> {
    [Some(death), death.checked_neg()]
        .into_iter()
        .flatten()
        .find(|&candidate| {
            let span = i64::from(candidate) - i64::from(birth);
            span > 0 && span < MAX_LIFESPAN_YEARS
        })
}

/// Render a year for display: `1850`, `428 BCE`.
pub fn year_label(year: i32) -> String {
    if year > 0 {
        year.to_string()
    } else {
        format!("{} BCE", -i64::from(year))
    }
}
