use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use log::info;
use niffler::compression::Format;

use crate::error::{Error, Result};
use crate::output;

/// Decompression copies through a buffer of this many bytes.
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// Streams the gzip file at `source` into `destination` and returns the
/// number of decompressed bytes written.
///
/// `destination` only appears once the whole stream was decoded; any
/// decoding error leaves it untouched.
pub fn decompress_gz_file<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Result<u64> {
    let source = source.as_ref();
    let destination = destination.as_ref();
    info!("Decompressing ... {}", source.display());

    let (mut reader, format) =
        niffler::from_path(source).map_err(|e| Error::decompression(source, e))?;
    match format {
        Format::Gzip => {}
        other => {
            return Err(Error::decompression(
                source,
                format!("not gzip-compressed (detected {:?})", other),
            ))
        }
    }

    let bytes = output::write_atomically(destination, |writer| {
        copy_chunks(source, &mut reader, writer)
    })?;

    info!(
        "Decompressed {} to {} ({} bytes)",
        source.display(),
        destination.display(),
        bytes
    );
    Ok(bytes)
}

// Read errors belong to the gzip stream, write errors to the destination.
fn copy_chunks<R: Read + ?Sized, W: Write>(source: &Path, reader: &mut R, writer: &mut W) -> Result<u64> {
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::decompression(source, e)),
        };
        writer.write_all(&buffer[..n])?;
        total += n as u64;
    }
    Ok(total)
}
