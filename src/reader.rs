use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::record::Record;

/// Streaming iterator over header/sequence line pairs.
///
/// Lines must be UTF-8; other bytes fail with `InvalidData` naming the line.
pub struct RecordPairs<R: BufRead> {
    inner: R,
    line_buf: String,
    line_number: usize,
    finished: bool,
}

impl RecordPairs<BufReader<File>> {
    /// Opens `path` as plain text.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl RecordPairs<BufReader<Box<dyn Read>>> {
    /// Opens `path`, decompressing gzip on the fly. Files too short to sniff
    /// are read as plain text.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = match niffler::from_path(path) {
            Ok((reader, _format)) => reader,
            Err(niffler::Error::FileTooShort) => Box::new(File::open(path)?) as Box<dyn Read>,
            Err(e) => return Err(io::Error::new(io::ErrorKind::Other, e).into()),
        };
        Ok(Self::new(BufReader::new(reader)))
    }
}

impl<R: BufRead> RecordPairs<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: reader,
            line_buf: String::with_capacity(256),
            line_number: 0,
            finished: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn read_trimmed_line(&mut self) -> Result<Option<String>> {
        self.line_buf.clear();
        let line_number = self.line_number + 1;
        let read = self.inner.read_line(&mut self.line_buf).map_err(|e| {
            if e.kind() == io::ErrorKind::InvalidData {
                io::Error::new(e.kind(), format!("line {}: not valid UTF-8", line_number))
            } else {
                e
            }
        })?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        Ok(Some(self.line_buf.trim().to_string()))
    }

    /// Reads the next pair, `Ok(None)` once the input is exhausted.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        if self.finished {
            return Ok(None);
        }
        let result = self.read_pair();
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result
    }

    fn read_pair(&mut self) -> Result<Option<Record>> {
        let header = match self.read_trimmed_line()? {
            Some(header) => header,
            None => return Ok(None),
        };
        let line = self.line_number;
        if header.is_empty() {
            return Err(Error::MalformedHeader { line });
        }
        let sequence = self
            .read_trimmed_line()?
            .ok_or(Error::TruncatedRecord { line })?;
        Ok(Some(Record::new(line, header, sequence)))
    }
}

impl<R: BufRead> Iterator for RecordPairs<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}
