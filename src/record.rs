use getset::Getters;

use crate::error::{Error, Result};

/// 0-based position in the sequence that receives the variant nucleotide.
pub const VARIANT_POSITION: usize = 29;

/// A header line and the sequence line that follows it, both trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct Record {
    /// 1-based line number of the header in the input.
    line: usize,
    header: String,
    sequence: String,
}

/// The bases swapped at [`VARIANT_POSITION`] by [`Record::apply_variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub reference: char,
    pub variant: char,
}

impl Record {
    pub fn new<H: Into<String>, S: Into<String>>(line: usize, header: H, sequence: S) -> Self {
        Record {
            line,
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    /// Last character of the header.
    pub fn variant_nucleotide(&self) -> Option<char> {
        self.header.chars().last()
    }

    /// Base currently at [`VARIANT_POSITION`], if the sequence is long enough.
    pub fn reference_nucleotide(&self) -> Option<char> {
        self.sequence.chars().nth(VARIANT_POSITION)
    }

    /// Writes the header's variant nucleotide into the sequence at
    /// [`VARIANT_POSITION`] and replaces the header's last character with the
    /// replaced base followed by the variant, so `@read1_A` becomes `@read1_TA`.
    ///
    /// Sequences with no character at that position are left alone and
    /// `Ok(None)` is returned.
    pub fn apply_variant(&mut self) -> Result<Option<Substitution>> {
        let variant = self
            .variant_nucleotide()
            .ok_or(Error::MalformedHeader { line: self.line })?;
        let (offset, reference) = match self.sequence.char_indices().nth(VARIANT_POSITION) {
            Some(found) => found,
            None => return Ok(None),
        };

        let mut buf = [0u8; 4];
        self.sequence.replace_range(
            offset..offset + reference.len_utf8(),
            variant.encode_utf8(&mut buf),
        );
        self.header.pop();
        self.header.push(reference);
        self.header.push(variant);

        Ok(Some(Substitution { reference, variant }))
    }
}
