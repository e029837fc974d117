use std::convert::TryFrom;
use std::path::{Path, PathBuf};

pub const DEFAULT_DIR: &str = "data";
pub const DEFAULT_MAX_RECORDS: usize = 250;

pub const ARCHIVE_FILE: &str = "ngs.fa.gz";
pub const DECOMPRESSED_FILE: &str = "ngs.fa";
pub const OUTPUT_FILE: &str = "ngs_variants.fa";
pub const REPORT_FILE: &str = "md5_ngs_variants.txt";

/// Where each stage reads and writes, and how many records to transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_archive_path: PathBuf,
    pub decompressed_path: PathBuf,
    pub output_path: PathBuf,
    /// `None` transforms every record.
    pub max_records: Option<usize>,
    pub checksum_report_path: PathBuf,
}

impl Config {
    /// The standard file names under `dir`, limited to [`DEFAULT_MAX_RECORDS`].
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Config {
            input_archive_path: dir.join(ARCHIVE_FILE),
            decompressed_path: dir.join(DECOMPRESSED_FILE),
            output_path: dir.join(OUTPUT_FILE),
            max_records: Some(DEFAULT_MAX_RECORDS),
            checksum_report_path: dir.join(REPORT_FILE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::in_dir(DEFAULT_DIR)
    }
}

/// Maps a signed limit to a record bound; zero and negative values allow no records.
pub fn record_limit(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}
