// src/config/consts.rs

// Files (all colocated with the input unless overridden)
pub const DEFAULT_INPUT_FILE: &str = "jobs.json";
pub const CHARTS_FILE: &str = "charts_data.json";
pub const COMPRESSED_SUFFIX: &str = ".gz";
pub const TMP_SUFFIX: &str = ".tmp";

// Placeholders written into enriched jobs / charts
pub const UNKNOWN_ROLE: &str = "—";
pub const NO_EXPERIENCE: &str = "—";
pub const NOT_AVAILABLE: &str = "N/A";
pub const UNCATEGORIZED: &str = "Uncategorized";

// Aggregation
pub const TOP_COMPANIES: usize = 20;
pub const TOP_LOCATIONS: usize = 10;
pub const DAILY_RETENTION: usize = 1825; // ~5 years

// Experience extraction
pub const MAX_PLAUSIBLE_YEARS: u32 = 35;
pub const MIN_BARE_YEARS: u32 = 2;

// Classification
pub const UNKNOWN_MIN_CONFIDENCE: f64 = 0.35;
pub const UNKNOWN_MIN_SCORE: f64 = 3.0;
pub const WEAK_WIN_SCORE: f64 = 4.0;
pub const WEAK_WIN_MARGIN: f64 = 1.0;

// Compressed corpus
pub const GZIP_LEVEL: u32 = 9;
pub const STRIPPED_KEYS: [&str; 5] = ["debugScores", "jobId", "applicants", "companyUrl", "confidence"];

// Progress
pub const PROGRESS_EVERY: usize = 1000;
