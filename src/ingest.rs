use figure_types::BiographicalRecord;
use serde::Deserialize;

use crate::year::{parse_year, reconcile_death_year};

/// Size hint dbpedia appends to thumbnail links.
const THUMBNAIL_SIZE_HINT: &str = "?width=300";

/// A year column as it appears in exported rows: an integer, a float left
/// over from a spreadsheet export, or an unparsed date string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum YearField {
    Year(i64),
    Float(f64),
    Date(String),
}

impl YearField {
    pub fn year(&self) -> Option<i32> {
        match self {
            Self::Year(y) => i32::try_from(*y).ok(),
            Self::Float(f) if f.is_finite() => i32::try_from(f.trunc() as i64).ok(),
            Self::Float(_) => None,
            Self::Date(s) => parse_year(s),
        }
    }
}

/// One exported dataset row before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub article_id: u64,
    pub full_name: String,
    #[serde(default)]
    pub birth_year: Option<YearField>,
    #[serde(default)]
    pub death_year: Option<YearField>,
    #[serde(alias = "historical_popularity_index")]
    pub popularity_index: f64,
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// Validate one row. `None` when the row has no usable birth year.
///
/// Death dates given as strings are additionally checked against the birth
/// year, and dropped when no reading gives a plausible lifespan.
pub fn ingest(raw: RawRecord) -> Option<BiographicalRecord> {
    let birth_year = raw.birth_year.as_ref().and_then(YearField::year)?;

    let death_year = match &raw.death_year {
        Some(YearField::Date(date)) => {
            parse_year(date).and_then(|death| reconcile_death_year(birth_year, death))
        }
        Some(field) => field.year(),
        None => None,
    };

    Some(BiographicalRecord {
        article_id: raw.article_id,
        full_name: raw.full_name,
        birth_year,
        death_year,
        popularity_index: raw.popularity_index,
        abstract_text: raw.abstract_text.unwrap_or_default(),
        thumbnail_url: raw.thumbnail_url.and_then(normalize_thumbnail),
    })
}

/// Validate a batch of rows, dropping the unusable ones.
pub fn ingest_all(rows: Vec<RawRecord>) -> Vec<BiographicalRecord> {
    let total = rows.len();
    let records: Vec<BiographicalRecord> = rows.into_iter().filter_map(ingest).collect();
    let without_death = records.iter().filter(|r| r.death_year.is_none()).count();

    tracing::debug!(
        rows = total,
        missing_birth_year = total - records.len(),
        missing_death_year = without_death,
        "ingested records"
    );

    records
}

fn normalize_thumbnail(url: String) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    Some(url.strip_suffix(THUMBNAIL_SIZE_HINT).unwrap_or(url).to_string())
}
