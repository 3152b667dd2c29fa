//! Huffman coding of text into a string of `'0'` and `'1'` characters.
//!
//! ```
//! let table = rhuffman::build_codec("abracadabra")?;
//! let bits = rhuffman::encode("abracadabra", &table)?;
//! assert_eq!(bits.len(), 23);
//!
//! let reverse = rhuffman::load_reverse_table(&table.to_string())?;
//! assert_eq!(rhuffman::decode(&bits, &reverse)?, "abracadabra");
//! # Ok::<(), rhuffman::HuffmanError>(())
//! ```

use log::{debug, trace};

pub mod code_table;
pub mod decoder;
pub mod encoded_text;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod table_format;
pub mod tree;

pub use code_table::{CodeTable, ReverseCodeTable};
pub use decoder::decode;
pub use encoded_text::EncodedText;
pub use encoder::{encode, encoded_len};
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use table_format::load_reverse_table;
pub use tree::HuffmanTree;

/// Counts the characters of `text` and derives their codes.
pub fn build_codec(text: &str) -> Result<CodeTable> {
    let counts = FrequencyTable::from_text(text);
    trace!("frequencies: {:?}", counts);

    let tree = HuffmanTree::create(&counts)?;
    let table = CodeTable::from_tree(&tree);
    debug!(
        "{} distinct symbols, longest code is {} bits",
        table.len(),
        table.max_code_len()
    );
    Ok(table)
}
