use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use log::{debug, info};

use crate::error::Result;
use crate::output;
use crate::reader::RecordPairs;
use crate::record::Record;

/// Output line terminator, independent of platform and input.
pub const LINE_TERMINATOR: &str = "\n";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformSummary {
    /// Record pairs written.
    pub records: usize,
    /// Of those, pairs that received a substitution.
    pub substituted: usize,
}

/// Copies at most `max_records` pairs (all of them if `None`) from `records`
/// to `writer`, applying the variant substitution to each.
///
/// Input past the limit is never read.
pub fn transform_records<R: BufRead, W: Write>(
    mut records: RecordPairs<R>,
    writer: &mut W,
    max_records: Option<usize>,
) -> Result<TransformSummary> {
    let mut summary = TransformSummary::default();
    loop {
        if let Some(max) = max_records {
            if summary.records >= max {
                debug!("Stopping after {} records", max);
                break;
            }
        }
        let mut record = match records.read_record()? {
            Some(record) => record,
            None => break,
        };
        if let Some(substitution) = record.apply_variant()? {
            debug!(
                "line {}: {} -> {} ({})",
                record.line(),
                substitution.reference,
                substitution.variant,
                record.header()
            );
            summary.substituted += 1;
        }
        write_record(writer, &record)?;
        summary.records += 1;
    }
    Ok(summary)
}

fn write_record<W: Write>(writer: &mut W, record: &Record) -> io::Result<()> {
    writer.write_all(record.header().as_bytes())?;
    writer.write_all(LINE_TERMINATOR.as_bytes())?;
    writer.write_all(record.sequence().as_bytes())?;
    writer.write_all(LINE_TERMINATOR.as_bytes())
}

/// Transforms the pairs in `input` into `destination`.
///
/// `destination` is replaced only if the whole run succeeds. Refuses to write over
/// `input` itself.
pub fn transform_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    destination: Q,
    max_records: Option<usize>,
) -> Result<TransformSummary> {
    let input = input.as_ref();
    let destination = destination.as_ref();
    if same_file(input, destination) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("output {} would overwrite the input", destination.display()),
        )
        .into());
    }

    let records = RecordPairs::open(input)?;
    let summary = output::write_atomically(destination, |writer| {
        transform_records(records, writer, max_records)
    })?;

    info!(
        "Wrote {} records ({} substituted) to {}",
        summary.records,
        summary.substituted,
        destination.display()
    );
    Ok(summary)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
