use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use log::trace;

use crate::{
    error::{HuffmanError, Result},
    tree::HuffmanTree,
};

/// Symbol to code mapping used by the encoder, together with its inverse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
    reverse: ReverseCodeTable,
}

/// Code to symbol mapping used by the decoder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReverseCodeTable {
    symbols: HashMap<String, char>,
    max_code_len: usize,
}

impl CodeTable {
    /// Assigns every leaf the path leading to it, `0` for left and `1` for right.
    /// A tree made of a single leaf gets the code `0`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        match tree {
            HuffmanTree::Leaf(_, symbol) => {
                codes.insert(*symbol, String::from("0"));
            }
            HuffmanTree::Node(_, _, _) => {
                let mut path = String::new();
                Self::generate_codes(tree, &mut path, &mut codes);
            }
        }
        Self::with_codes(codes)
    }

    fn generate_codes(tree: &HuffmanTree, path: &mut String, codes: &mut BTreeMap<char, String>) {
        match tree {
            HuffmanTree::Leaf(_, symbol) => {
                trace!("{:?} => {}", symbol, path);
                codes.insert(*symbol, path.clone());
            }
            HuffmanTree::Node(_, left, right) => {
                path.push('0');
                Self::generate_codes(left, path, codes);
                path.pop();

                path.push('1');
                Self::generate_codes(right, path, codes);
                path.pop();
            }
        }
    }

    /// Builds a table from arbitrary entries, checking that they form a usable
    /// prefix-free code.
    pub fn from_entries(entries: impl IntoIterator<Item = (char, String)>) -> Result<Self> {
        let mut codes = BTreeMap::new();
        for (symbol, code) in entries {
            if code.is_empty() {
                return Err(malformed(format!("symbol {:?} has an empty code", symbol)));
            }
            if let Some(bit) = code.chars().find(|c| !matches!(c, '0' | '1')) {
                return Err(malformed(format!(
                    "code {:?} of symbol {:?} contains {:?}",
                    code, symbol, bit
                )));
            }
            if codes.insert(symbol, code).is_some() {
                return Err(malformed(format!("symbol {:?} appears twice", symbol)));
            }
        }

        if codes.is_empty() {
            return Err(malformed("the table has no entries".to_string()));
        }

        // In lexicographic order a code that prefixes another one is directly
        // followed by a code it prefixes.
        for (shorter, longer) in codes.values().sorted().tuple_windows() {
            if longer.starts_with(shorter.as_str()) {
                return Err(malformed(if shorter == longer {
                    format!("code {} is used twice", shorter)
                } else {
                    format!("code {} is a prefix of {}", shorter, longer)
                }));
            }
        }

        Ok(Self::with_codes(codes))
    }

    fn with_codes(codes: BTreeMap<char, String>) -> Self {
        let reverse = ReverseCodeTable {
            symbols: codes
                .iter()
                .map(|(symbol, code)| (code.clone(), *symbol))
                .collect(),
            max_code_len: codes.values().map(String::len).max().unwrap_or(0),
        };
        CodeTable { codes, reverse }
    }

    pub fn code(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn reverse(&self) -> &ReverseCodeTable {
        &self.reverse
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn max_code_len(&self) -> usize {
        self.reverse.max_code_len
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + Clone {
        self.codes
            .iter()
            .map(|(symbol, code)| (*symbol, code.as_str()))
    }
}

impl ReverseCodeTable {
    pub fn symbol(&self, code: &str) -> Option<char> {
        self.symbols.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn max_code_len(&self) -> usize {
        self.max_code_len
    }
}

impl From<CodeTable> for ReverseCodeTable {
    fn from(table: CodeTable) -> Self {
        table.reverse
    }
}

fn malformed(reason: String) -> HuffmanError {
    HuffmanError::MalformedCodeTable(reason)
}
