use std::fmt::Display;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The source is not gzip, or the gzip stream broke off mid-read.
    #[error("failed to decompress {}: {reason}", .path.display())]
    Decompression { path: PathBuf, reason: String },

    /// A header line at `line` has no sequence line after it.
    #[error("truncated record: header at line {line} has no sequence line")]
    TruncatedRecord { line: usize },

    /// A header line at `line` is empty after trimming.
    #[error("malformed header at line {line}: no variant nucleotide")]
    MalformedHeader { line: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot read {} for checksum: {source}", .path.display())]
    ChecksumSourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn decompression<P: AsRef<Path>, D: Display>(path: P, reason: D) -> Self {
        Error::Decompression {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }
}
