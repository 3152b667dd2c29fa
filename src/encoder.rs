use log::debug;

use crate::{
    code_table::CodeTable,
    encoded_text::EncodedText,
    error::{HuffmanError, Result},
    frequency::FrequencyTable,
};

/// Concatenates the code of every character of `text`, in order.
pub fn encode(text: &str, table: &CodeTable) -> Result<EncodedText> {
    let bits = concat_codes(text, table)?;
    debug!(
        "encoded {} symbols into {} bits",
        text.chars().count(),
        bits.len()
    );
    Ok(EncodedText::from_bits(bits))
}

/// Sums the code lengths first so the output is allocated once, at its final size.
fn concat_codes(text: &str, table: &CodeTable) -> Result<String> {
    let bit_count = text
        .chars()
        .try_fold(0, |total, symbol| -> Result<usize> {
            Ok(total + code_of(table, symbol)?.len())
        })?;

    let mut bits = String::with_capacity(bit_count);
    for symbol in text.chars() {
        bits.push_str(code_of(table, symbol)?);
    }
    Ok(bits)
}

fn code_of(table: &CodeTable, symbol: char) -> Result<&str> {
    table
        .code(symbol)
        .ok_or(HuffmanError::UnknownSymbol(symbol))
}

/// Number of bits `encode` produces for a text with the given frequencies.
pub fn encoded_len(counts: &FrequencyTable, table: &CodeTable) -> Result<usize> {
    counts.iter().try_fold(0, |total, (symbol, count)| -> Result<usize> {
        Ok(total + count * code_of(table, symbol)?.len())
    })
}
