use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "-_.~";

/// Characters that `@{string}` values are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringAlphabet {
    /// A-Z, a-z and 0-9
    #[default]
    Alphanumeric,
    /// A-Z and a-z
    Letters,
    /// Alphanumeric plus `-`, `_`, `.` and `~`
    AlphanumericSymbols,
}

impl StringAlphabet {
    pub fn chars(&self) -> Vec<char> {
        let sets: &[&str] = match self {
            Self::Alphanumeric => &[UPPERCASE, LOWERCASE, DIGITS],
            Self::Letters => &[UPPERCASE, LOWERCASE],
            Self::AlphanumericSymbols => &[UPPERCASE, LOWERCASE, DIGITS, SYMBOLS],
        };
        sets.iter().flat_map(|set| set.chars()).collect()
    }

    pub fn contains(&self, ch: char) -> bool {
        match self {
            Self::Alphanumeric => ch.is_ascii_alphanumeric(),
            Self::Letters => ch.is_ascii_alphabetic(),
            Self::AlphanumericSymbols => ch.is_ascii_alphanumeric() || SYMBOLS.contains(ch),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alphanumeric => "alphanumeric",
            Self::Letters => "letters",
            Self::AlphanumericSymbols => "alphanumeric-symbols",
        }
    }
}

impl fmt::Display for StringAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StringAlphabet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alphanumeric" => Ok(Self::Alphanumeric),
            "letters" => Ok(Self::Letters),
            "alphanumeric-symbols" => Ok(Self::AlphanumericSymbols),
            other => Err(format!(
                "unknown alphabet '{}': expected alphanumeric, letters or alphanumeric-symbols",
                other
            )),
        }
    }
}
