use std::path::Path;

use serde::Deserialize;

use crate::chunker::DEFAULT_SEGMENT_LEN;
use crate::error::{Error, Result};
use crate::overlap::InnerOverlapPolicy;
use crate::pairing::OverlapWindow;

/// Seed used when the caller does not pick one, so reruns reproduce.
pub const DEFAULT_SEED: u64 = 1688;

/// Parameters of one generation run.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// min_overlap = 10
/// popularity_fraction = 0.2
/// inner_overlap = "younger_lifespan"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    pub min_overlap: u32,
    pub max_overlap: u32,
    /// Only figures born strictly before this year are paired
    pub birth_cutoff: i32,
    /// Share of the most popular figures kept, in (0, 1]
    pub popularity_fraction: f64,
    /// Abstract segments per figure
    pub max_bio_segments: usize,
    pub segment_max_len: usize,
    pub seed: u64,
    pub inner_overlap: InnerOverlapPolicy,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_overlap: 15,
            max_overlap: 20,
            birth_cutoff: 1900,
            popularity_fraction: 0.05,
            max_bio_segments: 1,
            segment_max_len: DEFAULT_SEGMENT_LEN,
            seed: DEFAULT_SEED,
            inner_overlap: InnerOverlapPolicy::Zero,
        }
    }
}

impl GenerationConfig {
    /// Defaults for a one-off sample: every figure born before 2000, no
    /// popularity truncation.
    pub fn sampling() -> Self {
        Self {
            birth_cutoff: 2000,
            popularity_fraction: 1.0,
            ..Self::default()
        }
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.popularity_fraction > 0.0 && self.popularity_fraction <= 1.0) {
            return Err(Error::InvalidArgument(format!(
                "popularity fraction must be in (0, 1], got {}",
                self.popularity_fraction
            )));
        }
        if self.segment_max_len == 0 {
            return Err(Error::InvalidArgument(
                "segment length must be positive".to_string(),
            ));
        }
        if self.min_overlap > self.max_overlap {
            tracing::warn!(
                min_overlap = self.min_overlap,
                max_overlap = self.max_overlap,
                "overlap window is empty, no pairings will be found"
            );
        }
        Ok(())
    }

    pub fn window(&self) -> OverlapWindow {
        OverlapWindow {
            min: self.min_overlap,
            max: self.max_overlap,
            policy: self.inner_overlap,
        }
    }
}
