use figure_types::{BiographicalRecord, Thread};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::compose::{ComposeOptions, compose};
use crate::config::GenerationConfig;
use crate::error::Result;
use crate::filter::filter_candidates;
use crate::pairing::{find_all_pairings, find_first_pairing, shuffle_pairings};

fn compose_options(config: &GenerationConfig) -> ComposeOptions {
    ComposeOptions {
        max_bio_segments: config.max_bio_segments,
        segment_max_len: config.segment_max_len,
    }
}

/// Filter, pair, shuffle and compose in one run.
///
/// A single `StdRng` seeded from `config.seed` drives the shuffle and then
/// every header choice, so equal inputs give equal output.
pub fn generate_threads(
    records: &[BiographicalRecord],
    config: &GenerationConfig,
) -> Result<Vec<Thread>> {
    config.validate()?;

    let candidates = filter_candidates(
        records,
        config.birth_cutoff,
        config.popularity_fraction,
    )?;
    let mut pairings = find_all_pairings(&candidates, config.window());

    let mut rng = StdRng::seed_from_u64(config.seed);
    shuffle_pairings(&mut pairings, &mut rng);

    let options = compose_options(config);
    let threads: Vec<Thread> = pairings
        .iter()
        .enumerate()
        .map(|(id, pairing)| compose(id, pairing, options, &mut rng))
        .collect();

    tracing::info!(
        records = records.len(),
        candidates = candidates.len(),
        threads = threads.len(),
        seed = config.seed,
        "generated threads"
    );

    Ok(threads)
}

/// Compose a single thread from the first qualifying pair, or `None` when
/// the window admits no pair.
pub fn sample_thread(
    records: &[BiographicalRecord],
    config: &GenerationConfig,
) -> Result<Option<Thread>> {
    config.validate()?;

    let candidates = filter_candidates(
        records,
        config.birth_cutoff,
        config.popularity_fraction,
    )?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let thread = find_first_pairing(&candidates, config.window(), &mut rng)
        .map(|pairing| compose(0, &pairing, compose_options(config), &mut rng));

    Ok(thread)
}
