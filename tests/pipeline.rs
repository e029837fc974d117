use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use fasta_variant::pipeline::{self, Stage};
use fasta_variant::{Config, Error};

const EXAMPLE: &str = "resources/example.fa";

fn write_gz(path: &Path, text: &str) {
    let file = fs::File::create(path).unwrap();
    let mut writer = niffler::get_writer(
        Box::new(file),
        niffler::compression::Format::Gzip,
        niffler::Level::Six,
    )
    .unwrap();
    writer.write_all(text.as_bytes()).unwrap();
}

fn config_with(dir: &Path, text: &str, max_records: Option<usize>) -> Config {
    let mut config = Config::in_dir(dir);
    config.max_records = max_records;
    write_gz(&config.input_archive_path, text);
    config
}

#[test]
fn test_full_run() {
    let dir = tempfile::tempdir().unwrap();
    let text = fs::read_to_string(EXAMPLE).unwrap();
    let config = config_with(dir.path(), &text, None);

    let report = pipeline::run(&config).unwrap();
    assert_eq!(report.decompressed_bytes, text.len() as u64);
    assert_eq!(report.transform.records, 5);
    assert_eq!(report.transform.substituted, 3);
    assert_eq!(report.digest, "e2c2dba079eec4b54065b955438f9ea7");

    assert_eq!(fs::read_to_string(&config.decompressed_path).unwrap(), text);
    assert_eq!(
        fs::read_to_string(&config.checksum_report_path).unwrap(),
        "MD5 hash: e2c2dba079eec4b54065b955438f9ea7\n"
    );
}

#[test]
fn test_bounded_run() {
    let dir = tempfile::tempdir().unwrap();
    let text = fs::read_to_string(EXAMPLE).unwrap();
    let config = config_with(dir.path(), &text, Some(3));

    let report = pipeline::run(&config).unwrap();
    assert_eq!(report.transform.records, 3);
    assert_eq!(report.digest, "38ea535b89b81682a161e3a0485d1b2e");
    assert_eq!(
        fs::read_to_string(&config.output_path).unwrap().lines().count(),
        6
    );
}

#[test]
fn test_zero_records() {
    let dir = tempfile::tempdir().unwrap();
    let text = fs::read_to_string(EXAMPLE).unwrap();
    let config = config_with(dir.path(), &text, Some(0));

    let report = pipeline::run(&config).unwrap();
    assert_eq!(report.transform.records, 0);
    assert_eq!(fs::read_to_string(&config.output_path).unwrap(), "");
    assert_eq!(report.digest, "d41d8cd98f00b204e9800998ecf8427e");
}

#[test]
fn test_empty_archive() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_with(dir.path(), "", None);

    let report = pipeline::run(&config).unwrap();
    assert_eq!(report.decompressed_bytes, 0);
    assert_eq!(report.transform.records, 0);
    assert_eq!(fs::read_to_string(&config.output_path).unwrap(), "");
    assert_eq!(report.digest, "d41d8cd98f00b204e9800998ecf8427e");
}

#[test]
fn test_single_tiny_record() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_with(dir.path(), "A\nC\n", None);

    let report = pipeline::run(&config).unwrap();
    assert_eq!(report.transform.records, 1);
    assert_eq!(fs::read_to_string(&config.output_path).unwrap(), "A\nC\n");
}

#[test]
fn test_truncated_input_stops_before_checksum() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_with(dir.path(), "@a_A\nACGT\n@b_C\n", None);

    let err = pipeline::run(&config).unwrap_err();
    assert_eq!(err.stage, Stage::Transform);
    assert!(matches!(err.source, Error::TruncatedRecord { line: 3 }));
    assert!(!config.output_path.exists());
    assert!(!config.checksum_report_path.exists());
}

#[test]
fn test_binary_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let text = fs::read_to_string(EXAMPLE).unwrap();
    write_gz(&dir.path().join("ngs.fa.gz"), &text);

    let output = Command::new(env!("CARGO_BIN_EXE_fasta-variant"))
        .arg(dir.path())
        .arg("--all")
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "MD5 hash of the output file: e2c2dba079eec4b54065b955438f9ea7\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("md5_ngs_variants.txt")).unwrap(),
        "MD5 hash: e2c2dba079eec4b54065b955438f9ea7\n"
    );
}

#[test]
fn test_binary_fails_on_missing_archive() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_fasta-variant"))
        .arg(dir.path())
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(!dir.path().join("ngs_variants.fa").exists());
}
