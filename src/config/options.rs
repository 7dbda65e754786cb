// src/config/options.rs
use std::path::{Path, PathBuf};

use ::log::LevelFilter;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Raw corpus `{ "data": [...] }`
    pub input: PathBuf,
    /// Chart artifact; `None` → `charts_data.json` beside the input
    pub charts: Option<PathBuf>,
    /// Compressed corpus; `None` → `<input>.gz`
    pub compressed: Option<PathBuf>,
    /// Taxonomy override (JSON); `None` → built-in
    pub taxonomy: Option<PathBuf>,
    /// Print categories and exit
    pub list_categories: bool,
    pub log_level: LevelFilter,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            input: default_input_path(),
            charts: None,
            compressed: None,
            taxonomy: None,
            list_categories: false,
            log_level: LevelFilter::Info,
        }
    }
}

impl PipelineOptions {
    pub fn with_input(input: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), ..Self::default() }
    }

    /// Directory the outputs land in when not overridden.
    pub fn input_dir(&self) -> &Path {
        match self.input.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }

    pub fn charts_path(&self) -> PathBuf {
        self.charts
            .clone()
            .unwrap_or_else(|| self.input_dir().join(CHARTS_FILE))
    }

    pub fn compressed_path(&self) -> PathBuf {
        if let Some(p) = &self.compressed {
            return p.clone();
        }
        let mut name = self
            .input
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_INPUT_FILE.into());
        name.push(COMPRESSED_SUFFIX);
        self.input_dir().join(name)
    }
}

/// `jobs.json` beside the executable; the working directory if the
/// executable path can't be resolved.
pub fn default_input_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_INPUT_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outputs_follow_input_dir() {
        let opts = PipelineOptions::with_input("data/run/jobs.json");
        assert_eq!(opts.charts_path(), Path::new("data/run").join(CHARTS_FILE));
        assert_eq!(opts.compressed_path(), Path::new("data/run").join("jobs.json.gz"));
    }

    #[test]
    fn bare_filename_resolves_to_cwd() {
        let opts = PipelineOptions::with_input("jobs.json");
        assert_eq!(opts.input_dir(), Path::new("."));
        assert_eq!(opts.compressed_path(), Path::new(".").join("jobs.json.gz"));
    }

    #[test]
    fn overrides_win() {
        let mut opts = PipelineOptions::with_input("a/jobs.json");
        opts.charts = Some(PathBuf::from("b/charts.json"));
        opts.compressed = Some(PathBuf::from("c/out.gz"));
        assert_eq!(opts.charts_path(), PathBuf::from("b/charts.json"));
        assert_eq!(opts.compressed_path(), PathBuf::from("c/out.gz"));
    }
}
