use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::output;

const CHUNK_SIZE: usize = 4096;

/// Lowercase hex MD5 of the file at `path` (32 characters).
pub fn md5_hex<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let unreadable = |source: io::Error| Error::ChecksumSourceUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(unreadable)?;
    let mut context = md5::Context::new();
    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => context.consume(&buffer[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(unreadable(e)),
        }
    }
    Ok(format!("{:x}", context.compute()))
}

pub fn report_line(digest: &str) -> String {
    format!("MD5 hash: {}", digest)
}

/// Replaces `report_path` with a single `MD5 hash: <digest>` line.
pub fn write_report<P: AsRef<Path>>(report_path: P, digest: &str) -> Result<()> {
    output::write_atomically(report_path, |writer| {
        writeln!(writer, "{}", report_line(digest))?;
        Ok(())
    })
}
