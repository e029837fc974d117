use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use fasta_variant::config::{self, Config};
use fasta_variant::pipeline;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding ngs.fa.gz; outputs are written next to it
    #[arg(default_value = config::DEFAULT_DIR)]
    work_dir: PathBuf,

    /// Gzip-compressed input [default: <WORK_DIR>/ngs.fa.gz]
    #[arg(long)]
    input: Option<PathBuf>,

    /// Decompressed copy of the input [default: <WORK_DIR>/ngs.fa]
    #[arg(long)]
    decompressed: Option<PathBuf>,

    /// Transformed FASTA [default: <WORK_DIR>/ngs_variants.fa]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// MD5 report [default: <WORK_DIR>/md5_ngs_variants.txt]
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Maximum number of records to transform; zero or negative writes none
    #[arg(
        short = 'n',
        long,
        allow_negative_numbers = true,
        conflicts_with = "all"
    )]
    max_records: Option<i64>,

    /// Transform every record
    #[arg(short, long)]
    all: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        let mut config = Config::in_dir(&self.work_dir);
        if let Some(path) = self.input {
            config.input_archive_path = path;
        }
        if let Some(path) = self.decompressed {
            config.decompressed_path = path;
        }
        if let Some(path) = self.output {
            config.output_path = path;
        }
        if let Some(path) = self.report {
            config.checksum_report_path = path;
        }
        if self.all {
            config.max_records = None;
        } else if let Some(n) = self.max_records {
            config.max_records = Some(config::record_limit(n));
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config();
    let report = pipeline::run(&config).with_context(|| {
        format!(
            "processing {} failed",
            config.input_archive_path.display()
        )
    })?;

    println!("MD5 hash of the output file: {}", report.digest);
    Ok(())
}
