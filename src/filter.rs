use std::cmp::Ordering;

use figure_types::BiographicalRecord;

use crate::error::{Error, Result};
use crate::overlap::Lifespan;

/// A record that survived filtering, with its lifespan resolved.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub record: &'a BiographicalRecord,
    pub lifespan: Lifespan,
}

impl<'a> Candidate<'a> {
    /// `None` when the record has no death year.
    pub fn from_record(record: &'a BiographicalRecord) -> Option<Self> {
        let death = record.death_year?;
        Some(Self {
            record,
            lifespan: Lifespan::new(record.birth_year, death),
        })
    }
}

/// Select the pairing pool: figures with a full lifespan born before
/// `birth_cutoff`, most popular first, truncated to the top
/// `popularity_fraction` of what remains.
pub fn filter_candidates(
    records: &[BiographicalRecord],
    birth_cutoff: i32,
    popularity_fraction: f64,
) -> Result<Vec<Candidate<'_>>> {
    if !(popularity_fraction > 0.0 && popularity_fraction <= 1.0) {
        return Err(Error::InvalidArgument(format!(
            "popularity fraction must be in (0, 1], got {popularity_fraction}"
        )));
    }

    let mut candidates: Vec<Candidate> =
        records.iter().filter_map(Candidate::from_record).collect();
    let dropped = records.len() - candidates.len();

    // sort_by is stable: equal popularity keeps input order
    candidates.sort_by(|a, b| by_popularity_desc(a.record, b.record));
    candidates.retain(|c| c.lifespan.birth < birth_cutoff);

    let keep = (candidates.len() as f64 * popularity_fraction).floor() as usize;
    candidates.truncate(keep);

    tracing::debug!(
        input = records.len(),
        missing_death_year = dropped,
        kept = candidates.len(),
        birth_cutoff,
        popularity_fraction,
        "filtered pairing candidates"
    );

    Ok(candidates)
}

fn by_popularity_desc(a: &BiographicalRecord, b: &BiographicalRecord) -> Ordering {
    let key = |r: &BiographicalRecord| {
        if r.popularity_index.is_nan() {
            f64::NEG_INFINITY
        } else {
            r.popularity_index
        }
    };
    key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal)
}
