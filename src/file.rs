// src/file.rs

use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use flate2::{write::GzEncoder, Compression};
use serde::Serialize;
use serde_json::Value;

use crate::config::consts::{GZIP_LEVEL, STRIPPED_KEYS, TMP_SUFFIX};
use crate::error::{PipelineError, Result};

/// Sibling temp path used while writing `path`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(TMP_SUFFIX);
    path.with_file_name(name)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

fn write_file<F>(path: &Path, fill: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut out = BufWriter::new(File::create(path)?);
    fill(&mut out)?;
    out.flush()?;
    out.get_ref().sync_all()
}

/// Write through a sibling temp file, then rename over `path`.
/// Readers see either the old file or the complete new one.
pub fn write_atomic<F>(path: &Path, fill: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let tmp = tmp_path(path);
    match write_file(&tmp, fill).and_then(|()| fs::rename(&tmp, path)) {
        Ok(()) => Ok(()),
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(e)
        }
    }
}

/// Pretty (2-space) JSON, written atomically.
pub fn save_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(|source| PipelineError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    write_atomic(path, |out| out.write_all(text.as_bytes())).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Remove every object key named in `keys`, at any depth.
pub fn strip_keys(value: &mut Value, keys: &[&str]) {
    match value {
        Value::Object(map) => {
            map.retain(|k, _| !keys.contains(&k.as_str()));
            for v in map.values_mut() {
                strip_keys(v, keys);
            }
        }
        Value::Array(items) => {
            for v in items {
                strip_keys(v, keys);
            }
        }
        _ => {}
    }
}

pub fn gzip_bytes(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::new(GZIP_LEVEL));
    enc.write_all(data)?;
    enc.finish()
}

/// Sizes of the compressed corpus, for the reduction log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompressStats {
    pub json_bytes: usize,
    pub gz_bytes: usize,
}

impl CompressStats {
    /// `(input - output) / input` as a percentage.
    pub fn reduction_pct(&self) -> f64 {
        if self.json_bytes == 0 {
            return 0.0;
        }
        (self.json_bytes as f64 - self.gz_bytes as f64) / self.json_bytes as f64 * 100.0
    }
}

/// Strip blacklisted keys, serialize compactly, gzip, write atomically.
pub fn save_compressed(path: &Path, mut doc: Value) -> Result<CompressStats> {
    strip_keys(&mut doc, &STRIPPED_KEYS);
    let json = serde_json::to_vec(&doc).map_err(|source| PipelineError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    let gz = gzip_bytes(&json).map_err(|source| PipelineError::Compress {
        path: path.to_path_buf(),
        source,
    })?;
    write_atomic(path, |out| out.write_all(&gz)).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let stats = CompressStats { json_bytes: json.len(), gz_bytes: gz.len() };
    logf!(
        "Compressed corpus: {} -> {} bytes ({:.1}% smaller)",
        stats.json_bytes,
        stats.gz_bytes,
        stats.reduction_pct()
    );
    Ok(stats)
}
