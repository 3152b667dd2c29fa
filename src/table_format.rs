//! Text form of a code table, as written to and read back from key files:
//! `{a=0, b=10, c=11}`.
//!
//! Every entry starts with exactly one symbol character, so braces, commas,
//! spaces and `=` are valid symbols and need no escaping.

use std::{fmt, str::FromStr};

use crate::{
    code_table::{CodeTable, ReverseCodeTable},
    error::{HuffmanError, Result},
};

const SEPARATOR: &str = ", ";

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (index, (symbol, code)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}={}", symbol, code)?;
        }
        write!(f, "}}")
    }
}

impl FromStr for CodeTable {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parser = Parser::new(s)?;
        let mut entries = Vec::new();
        loop {
            entries.push(parser.read_entry()?);
            if parser.end_reached() {
                break;
            }
            parser.expect_separator()?;
        }
        CodeTable::from_entries(entries)
    }
}

/// Parses a persisted code table into the lookup used for decoding.
pub fn load_reverse_table(serialized: &str) -> Result<ReverseCodeTable> {
    let table: CodeTable = serialized.parse()?;
    Ok(table.into())
}

struct Parser {
    buf: Vec<char>,
    index: usize,
}

impl Parser {
    /// Keeps only what is between the outer pair of braces.
    fn new(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or_else(|| malformed("expected the table to be enclosed in braces", 0))?;
        Ok(Parser {
            buf: inner.chars().collect(),
            index: 0,
        })
    }

    fn end_reached(&self) -> bool {
        self.index >= self.buf.len()
    }

    fn peek(&self) -> Option<char> {
        self.buf.get(self.index).copied()
    }

    fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.index += 1;
        Some(c)
    }

    fn expect_separator(&mut self) -> Result<()> {
        for expected in SEPARATOR.chars() {
            if self.next() != Some(expected) {
                return Err(malformed(
                    "expected \", \" between entries",
                    self.index.saturating_sub(1),
                ));
            }
        }
        Ok(())
    }

    fn read_entry(&mut self) -> Result<(char, String)> {
        let entry_start = self.index;
        let symbol = self
            .next()
            .ok_or_else(|| malformed("expected a symbol", entry_start))?;

        if self.next() != Some('=') {
            return Err(malformed(
                &format!("entry {:?} has no '='", symbol),
                entry_start,
            ));
        }

        let mut code = String::new();
        while let Some(bit @ ('0' | '1')) = self.peek() {
            code.push(bit);
            self.index += 1;
        }
        if code.is_empty() {
            return Err(malformed(
                &format!("entry {:?} has an empty code", symbol),
                entry_start,
            ));
        }

        Ok((symbol, code))
    }
}

fn malformed(reason: &str, index: usize) -> HuffmanError {
    HuffmanError::MalformedCodeTable(format!("{} (at character {})", reason, index))
}

#[cfg(test)]
mod tests {
    use crate::{
        build_codec,
        code_table::CodeTable,
        error::HuffmanError,
        table_format::load_reverse_table,
    };

    #[test]
    fn writes_entries_in_symbol_order() {
        let table = build_codec("abracadabra").unwrap();
        assert_eq!(table.to_string(), "{a=0, b=110, c=100, d=101, r=111}");
    }

    #[test]
    fn reads_a_table() {
        let reverse = load_reverse_table("{a=0, b=10, c=11}").unwrap();
        assert_eq!(reverse.len(), 3);
        assert_eq!(reverse.symbol("0"), Some('a'));
        assert_eq!(reverse.symbol("10"), Some('b'));
        assert_eq!(reverse.symbol("11"), Some('c'));
    }

    #[test]
    fn ignores_whitespace_around_braces() {
        let reverse = load_reverse_table("  {a=0, b=1}\n").unwrap();
        assert_eq!(reverse.len(), 2);
    }

    #[test]
    fn punctuation_and_whitespace_symbols() {
        let table: CodeTable = "{\n=000,  =001, ,=010, ==011, {=100, }=101, a=11}"
            .parse()
            .unwrap();
        assert_eq!(table.code('\n'), Some("000"));
        assert_eq!(table.code(' '), Some("001"));
        assert_eq!(table.code(','), Some("010"));
        assert_eq!(table.code('='), Some("011"));
        assert_eq!(table.code('{'), Some("100"));
        assert_eq!(table.code('}'), Some("101"));
        assert_eq!(table.code('a'), Some("11"));
    }

    #[test]
    fn written_table_reads_back() {
        let table = build_codec("a, b = {c}\n\td").unwrap();
        let reread: CodeTable = table.to_string().parse().unwrap();
        assert_eq!(reread, table);
        assert_eq!(
            load_reverse_table(&table.to_string()).unwrap(),
            *table.reverse()
        );
    }

    #[test]
    fn entry_without_equals() {
        assert_eq!(
            load_reverse_table("{a=0, b}"),
            Err(HuffmanError::MalformedCodeTable(
                "entry 'b' has no '=' (at character 5)".to_string()
            ))
        );
    }

    #[test]
    fn malformed_tables() {
        for input in [
            "a=0, b=1",
            "{a=0, b=1",
            "{}",
            "{a=}",
            "{a=0,b=1}",
            "{a=0, b=1, }",
            "{a=0x}",
            "{a=0, b=0}",
            "{a=0, a=1}",
            "{a=1, b=10}",
        ] {
            let result = load_reverse_table(input);
            assert!(
                matches!(result, Err(HuffmanError::MalformedCodeTable(_))),
                "{input:?} gave {result:?}"
            );
        }
    }
}
