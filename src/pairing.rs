use rand::Rng;
use rand::seq::SliceRandom;

use crate::filter::Candidate;
use crate::overlap::{InnerOverlapPolicy, OverlapResult, older_first, overlap};

/// Two distinct figures that were alive at the same time.
#[derive(Debug, Clone, Copy)]
pub struct Pairing<'a> {
    pub older: Candidate<'a>,
    pub younger: Candidate<'a>,
    pub overlap_years: u32,
}

impl<'a> Pairing<'a> {
    fn new(a: Candidate<'a>, b: Candidate<'a>, overlap_years: u32) -> Self {
        let (older_span, _) = older_first(a.lifespan, b.lifespan);
        // Identical lifespans keep argument order
        let (older, younger) = if older_span == a.lifespan { (a, b) } else { (b, a) };
        Self {
            older,
            younger,
            overlap_years,
        }
    }

    /// First year both figures were alive.
    pub fn start_year(&self) -> i32 {
        self.younger.lifespan.birth
    }

    pub fn end_year(&self) -> i32 {
        self.start_year().saturating_add_unsigned(self.overlap_years)
    }
}

/// Window and edge-case policy for a pairing search.
#[derive(Debug, Clone, Copy)]
pub struct OverlapWindow {
    pub min: u32,
    pub max: u32,
    pub policy: InnerOverlapPolicy,
}

impl OverlapWindow {
    fn qualifies(&self, a: &Candidate, b: &Candidate) -> Option<u32> {
        match overlap(a.lifespan, b.lifespan, self.policy) {
            found @ OverlapResult::Overlap(years) if found.within(self.min, self.max) => {
                Some(years)
            }
            _ => None,
        }
    }
}

/// Every unordered pair of candidates whose overlap lies in the window.
///
/// Pairs are visited as `(i, j)` with `i < j` in index order, so the result
/// order depends only on the order of `candidates`.
pub fn find_all_pairings<'a>(
    candidates: &[Candidate<'a>],
    window: OverlapWindow,
) -> Vec<Pairing<'a>> {
    let mut pairings = Vec::new();

    for (i, a) in candidates.iter().enumerate() {
        for b in &candidates[i + 1..] {
            if let Some(years) = window.qualifies(a, b) {
                pairings.push(Pairing::new(*a, *b, years));
            }
        }
    }

    tracing::info!(
        candidates = candidates.len(),
        pairings = pairings.len(),
        min_overlap = window.min,
        max_overlap = window.max,
        "found unique pairings"
    );

    pairings
}

/// The first qualifying pair after visiting candidates in an order drawn
/// from `rng`.
///
/// Only reproducible when both the seed of `rng` and the order of
/// `candidates` are held fixed.
pub fn find_first_pairing<'a, R: Rng + ?Sized>(
    candidates: &[Candidate<'a>],
    window: OverlapWindow,
    rng: &mut R,
) -> Option<Pairing<'a>> {
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.shuffle(rng);

    for &i in &order {
        for &j in &order {
            if i == j {
                continue;
            }
            let (a, b) = (candidates[i], candidates[j]);
            if let Some(years) = window.qualifies(&a, &b) {
                return Some(Pairing::new(a, b, years));
            }
        }
    }
    None
}

/// Shuffle search results in place; the only source of ordering randomness.
pub fn shuffle_pairings<R: Rng + ?Sized>(pairings: &mut [Pairing<'_>], rng: &mut R) {
    pairings.shuffle(rng);
}
