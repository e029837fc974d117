pub mod checksum;
pub mod config;
pub mod decompress;
pub mod error;
pub(crate) mod output;
pub mod pipeline;
pub mod reader;
pub mod record;
pub mod transform;

pub use config::Config;
pub use error::{Error, Result};
pub use reader::RecordPairs;
pub use record::{Record, Substitution, VARIANT_POSITION};
pub use transform::TransformSummary;
