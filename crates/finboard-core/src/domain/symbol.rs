use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_SYMBOL_LEN: usize = 20;

/// Normalized market symbol/ticker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parse and normalize a symbol to uppercase.
    ///
    /// Exchange suffixes and index prefixes are accepted (`0700.HK`,
    /// `^GSPC`, `EURUSD=X`).
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        let normalized = trimmed.to_ascii_uppercase();
        let len = normalized.chars().count();
        if len > MAX_SYMBOL_LEN {
            return Err(ValidationError::SymbolTooLong {
                len,
                max: MAX_SYMBOL_LEN,
            });
        }

        for (index, ch) in normalized.chars().enumerate() {
            if !is_symbol_char(ch) {
                return Err(ValidationError::SymbolInvalidChar { ch, index });
            }
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_symbol_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '^' | '=' | '_' | ':' | '&' | '/')
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_symbol() {
        let parsed = Symbol::parse(" tsla ").expect("symbol should parse");
        assert_eq!(parsed.as_str(), "TSLA");
    }

    #[test]
    fn accepts_exchange_suffix_and_index_prefix() {
        assert_eq!(Symbol::parse("0700.hk").expect("valid").as_str(), "0700.HK");
        assert_eq!(Symbol::parse("^gspc").expect("valid").as_str(), "^GSPC");
    }

    #[test]
    fn accepts_ampersand_and_share_class_slash() {
        assert_eq!(Symbol::parse("m&m.bse").expect("valid").as_str(), "M&M.BSE");
        assert_eq!(Symbol::parse("brk/b").expect("valid").as_str(), "BRK/B");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(Symbol::parse("   "), Err(ValidationError::EmptySymbol));

        let err = Symbol::parse("AA PL").expect_err("must fail");
        assert!(matches!(err, ValidationError::SymbolInvalidChar { ch: ' ', index: 2 }));
    }

    #[test]
    fn rejects_overlong_symbol() {
        let err = Symbol::parse(&"A".repeat(21)).expect_err("must fail");
        assert!(matches!(err, ValidationError::SymbolTooLong { len: 21, max: 20 }));
    }

    #[test]
    fn deserializes_through_validation() {
        let symbol: Symbol = serde_json::from_str("\"msft\"").expect("valid json symbol");
        assert_eq!(symbol.as_str(), "MSFT");
        assert!(serde_json::from_str::<Symbol>("\"\"").is_err());
    }
}
