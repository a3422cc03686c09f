use figure_types::{BiographicalRecord, Thread, ThreadStatus};
use rand::Rng;

use crate::chunker::abstract_segments;
use crate::pairing::Pairing;
use crate::year::year_label;

// ── Header sentences ───────────────────────────────────────────────

/// Values substituted into a header sentence.
#[derive(Debug, Clone)]
pub struct HeaderFields<'a> {
    pub older: &'a str,
    pub younger: &'a str,
    pub years: u32,
    pub start: String,
    pub end: String,
}

impl<'a> HeaderFields<'a> {
    pub fn from_pairing(pairing: &Pairing<'a>) -> Self {
        Self {
            older: &pairing.older.record.full_name,
            younger: &pairing.younger.record.full_name,
            years: pairing.overlap_years,
            start: year_label(pairing.start_year()),
            end: year_label(pairing.end_year()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTemplate {
    LivedConcurrently,
    ForYearsCouldHaveMet,
    PeriodLivedConcurrently,
    AtMostYearsOld,
    ForYearsAlive,
    AliveForYears,
    PeriodCouldHaveMet,
}

impl HeaderTemplate {
    pub const ALL: [Self; 7] = [
        Self::LivedConcurrently,
        Self::ForYearsCouldHaveMet,
        Self::PeriodLivedConcurrently,
        Self::AtMostYearsOld,
        Self::ForYearsAlive,
        Self::AliveForYears,
        Self::PeriodCouldHaveMet,
    ];

    /// Uniform choice over [`Self::ALL`].
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn render(self, h: &HeaderFields) -> String {
        let HeaderFields {
            older: a,
            younger: b,
            years,
            start,
            end,
        } = h;
        match self {
            Self::LivedConcurrently => {
                format!("{a} and {b} lived concurrently for {years} years between {start} and {end}.")
            }
            Self::ForYearsCouldHaveMet => {
                format!("For {years} years between {start} and {end} {a} and {b} could have met.")
            }
            Self::PeriodLivedConcurrently => format!(
                "There was a period of {years} years between {start} and {end} when {a} and {b} lived concurrently."
            ),
            Self::AtMostYearsOld => format!(
                "{a} and {b} could have met between {start} and {end}. {b} would have been at most {years} years old."
            ),
            Self::ForYearsAlive => format!(
                "For {years} years between {start} and {end} {a} and {b} were alive at the same time."
            ),
            Self::AliveForYears => format!(
                "{a} and {b} were alive at the same time for {years} years between {start} and {end}."
            ),
            Self::PeriodCouldHaveMet => format!(
                "There was a period of {years} years between {start} and {end} when {a} and {b} could have met."
            ),
        }
    }
}

// ── Thread assembly ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct ComposeOptions {
    pub max_bio_segments: usize,
    pub segment_max_len: usize,
}

fn figure_segments(figure: &BiographicalRecord, options: ComposeOptions) -> Vec<String> {
    let mut segments = abstract_segments(
        &figure.abstract_text,
        options.segment_max_len,
        options.max_bio_segments,
    );
    segments.push(figure.wikipedia_url());
    segments
}

/// Build the pending thread for one pairing.
///
/// Segment order: header, older figure's abstract and link, younger figure's
/// abstract and link. `rng` only decides the header template.
pub fn compose<R: Rng + ?Sized>(
    id: usize,
    pairing: &Pairing,
    options: ComposeOptions,
    rng: &mut R,
) -> Thread {
    let older = pairing.older.record;
    let younger = pairing.younger.record;

    let header = HeaderTemplate::pick(rng).render(&HeaderFields::from_pairing(pairing));

    let mut segments = vec![header];
    segments.extend(figure_segments(older, options));
    segments.extend(figure_segments(younger, options));

    Thread {
        id,
        status: ThreadStatus::Pending,
        segments,
        thumbnail_urls: vec![older.thumbnail_url.clone(), younger.thumbnail_url.clone()],
        wikipedia_urls: vec![older.wikipedia_url(), younger.wikipedia_url()],
        message_id: None,
    }
}
