use log::info;
use strum::Display;
use thiserror::Error;

use crate::checksum;
use crate::config::Config;
use crate::decompress::decompress_gz_file;
use crate::error::Error;
use crate::transform::{transform_file, TransformSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    Decompress,
    Transform,
    Checksum,
}

impl Stage {
    fn failed(self) -> impl FnOnce(Error) -> StageError {
        move |source| StageError {
            stage: self,
            source,
        }
    }
}

#[derive(Debug, Error)]
#[error("{stage} stage failed: {source}")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub source: Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub decompressed_bytes: u64,
    pub transform: TransformSummary,
    pub digest: String,
}

/// Decompresses, transforms and checksums according to `config`, stopping at
/// the first failing stage.
pub fn run(config: &Config) -> Result<RunReport, StageError> {
    let decompressed_bytes =
        decompress_gz_file(&config.input_archive_path, &config.decompressed_path)
            .map_err(Stage::Decompress.failed())?;

    let transform = transform_file(
        &config.decompressed_path,
        &config.output_path,
        config.max_records,
    )
    .map_err(Stage::Transform.failed())?;

    let digest = checksum::md5_hex(&config.output_path).map_err(Stage::Checksum.failed())?;
    info!("MD5 hash of the output file: {}", digest);
    checksum::write_report(&config.checksum_report_path, &digest)
        .map_err(Stage::Checksum.failed())?;

    Ok(RunReport {
        decompressed_bytes,
        transform,
        digest,
    })
}
