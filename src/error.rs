use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HuffmanError {
    #[error("input was empty, there is nothing to build a code from")]
    InvalidInput,

    #[error("symbol {0:?} has no code in the table")]
    UnknownSymbol(char),

    #[error("malformed code table: {0}")]
    MalformedCodeTable(String),

    #[error("encoded text ended in the middle of a code (trailing bits \"{0}\")")]
    IncompleteCode(String),

    #[error("no code matches the bits starting at position {0}")]
    UnknownCode(usize),

    #[error("invalid bit {0:?} at position {1}, expected '0' or '1'")]
    InvalidBit(char, usize),
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
