use std::{fmt, str::FromStr};

use crate::error::HuffmanError;

/// A bit-string made only of `'0'` and `'1'` characters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EncodedText(String);

impl EncodedText {
    pub(crate) fn from_bits(bits: String) -> Self {
        EncodedText(bits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for EncodedText {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().enumerate().find(|(_, c)| !matches!(c, '0' | '1')) {
            Some((position, c)) => Err(HuffmanError::InvalidBit(c, position)),
            None => Ok(EncodedText(s.to_string())),
        }
    }
}

impl fmt::Display for EncodedText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
