use log::debug;

use crate::{
    code_table::ReverseCodeTable,
    encoded_text::EncodedText,
    error::{HuffmanError, Result},
};

/// Decodes a bit-string by growing a prefix until it matches a code.
///
/// Fails with `UnknownCode` once the prefix is as long as the longest code
/// without matching, and with `IncompleteCode` when bits are left over at the
/// end of the input.
pub fn decode(encoded: &EncodedText, table: &ReverseCodeTable) -> Result<String> {
    let mut decoded = String::new();
    let mut current = String::with_capacity(table.max_code_len());
    let mut start = 0;

    for (position, bit) in encoded.as_str().chars().enumerate() {
        current.push(bit);

        if let Some(symbol) = table.symbol(&current) {
            decoded.push(symbol);
            current.clear();
            start = position + 1;
        } else if current.len() >= table.max_code_len() {
            return Err(HuffmanError::UnknownCode(start));
        }
    }

    if !current.is_empty() {
        return Err(HuffmanError::IncompleteCode(current));
    }

    debug!(
        "decoded {} bits into {} symbols",
        encoded.len(),
        decoded.chars().count()
    );
    Ok(decoded)
}
