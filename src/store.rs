use std::path::{Path, PathBuf};

use figure_types::{BiographicalRecord, Thread};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::ingest::{RawRecord, ingest_all};

pub const DEFAULT_THREADS_PATH: &str = "output/threads.json";

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(data).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, &json).map_err(io_err)?;
    tracing::info!(path = %path.display(), bytes = json.len(), "wrote output");
    Ok(())
}

// ── Records ────────────────────────────────────────────────────────

/// Discover record files under `root`.
///
/// A file path is returned as-is. A directory is walked recursively for
/// `*.json` files, in file-name order so that the record order is stable.
pub fn record_files(root: &Path) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        return Err(Error::NotFound(format!("record source {}", root.display())));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Io {
            path: e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf()),
            source: e.into(),
        })?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().and_then(|e| e.to_str()) == Some("json")
        {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Load and validate every record under `root`.
///
/// Each file holds a JSON array of rows. Rows without a usable birth year
/// are dropped.
pub fn load_records(root: &Path) -> Result<Vec<BiographicalRecord>> {
    let files = record_files(root)?;
    let mut rows: Vec<RawRecord> = Vec::new();
    for file in &files {
        let batch: Vec<RawRecord> = read_json(file)?;
        tracing::debug!(file = %file.display(), rows = batch.len(), "read record file");
        rows.extend(batch);
    }

    let total = rows.len();
    let records = ingest_all(rows);
    tracing::info!(
        files = files.len(),
        rows = total,
        records = records.len(),
        "loaded records"
    );
    Ok(records)
}

// ── Threads ────────────────────────────────────────────────────────

pub fn write_threads(path: &Path, threads: &[Thread]) -> Result<()> {
    write_json(path, threads)
}

pub fn read_threads(path: &Path) -> Result<Vec<Thread>> {
    read_json(path)
}
