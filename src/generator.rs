//! Letters and words over a presentation's extended alphabet.
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::{Error, Result};

pub type Symbol = Arc<str>;

/// Rendering of the empty word.
pub const IDENTITY: &str = "e";
pub const INVERSE_SUFFIX: &str = "^-1";
pub const SEPARATOR: char = '*';

/// Base symbols are non-empty runs of ASCII alphanumerics or `_`. The
/// identity marker is reserved so that rendered words parse back.
pub fn validate_symbol(symbol: &str) -> Result<()> {
    let well_formed = !symbol.is_empty()
        && symbol
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !well_formed || symbol == IDENTITY {
        return Err(Error::InvalidSymbol(symbol.to_owned()));
    }
    Ok(())
}

/// A base symbol together with its polarity. Ordering compares the symbol
/// first, so sorting a word groups by base symbol.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generator {
    symbol: Symbol,
    inverted: bool,
}

impl Generator {
    pub fn new(symbol: impl Into<Symbol>, inverted: bool) -> Self {
        Generator {
            symbol: symbol.into(),
            inverted,
        }
    }

    pub fn direct(symbol: impl Into<Symbol>) -> Self {
        Self::new(symbol, false)
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Same base symbol, flipped polarity.
    pub fn inverse(&self) -> Self {
        Generator {
            symbol: self.symbol.clone(),
            inverted: !self.inverted,
        }
    }

    pub fn is_inverse_of(&self, other: &Generator) -> bool {
        self.symbol == other.symbol && self.inverted != other.inverted
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inverted {
            write!(f, "{}{INVERSE_SUFFIX}", self.symbol)
        } else {
            write!(f, "{}", self.symbol)
        }
    }
}

impl FromStr for Generator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (symbol, inverted) = match s.strip_suffix(INVERSE_SUFFIX) {
            Some(base) => (base, true),
            None => (s, false),
        };
        validate_symbol(symbol)?;
        Ok(Generator::new(symbol, inverted))
    }
}

/// An ordered sequence of generators. A word carries no presentation; it is
/// validated and reduced when it becomes an element.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(Vec<Generator>);

impl Word {
    pub fn identity() -> Self {
        Word(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tokens(&self) -> &[Generator] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Generator> {
        self.0.iter()
    }

    pub fn push(&mut self, generator: Generator) {
        self.0.push(generator);
    }

    /// Reverses the word and flips every polarity. The inverse of a reduced
    /// word is reduced as a trace, though not necessarily in sorted order.
    pub fn inverse(&self) -> Word {
        self.0.iter().rev().map(Generator::inverse).collect()
    }

    pub fn concat(&self, other: &Word) -> Word {
        let mut tokens = Vec::with_capacity(self.len() + other.len());
        tokens.extend_from_slice(&self.0);
        tokens.extend_from_slice(&other.0);
        Word(tokens)
    }

    /// Build a word from `(symbol, inverted)` pairs.
    pub fn from_pairs<S: Into<Symbol>>(pairs: impl IntoIterator<Item = (S, bool)>) -> Word {
        pairs
            .into_iter()
            .map(|(symbol, inverted)| Generator::new(symbol, inverted))
            .collect()
    }

    /// Parse the rendered form: tokens separated by `*` or whitespace, with
    /// `e` standing for the empty word.
    pub fn parse(text: &str) -> Result<Word> {
        let text = text.trim();
        if text.is_empty() || text == IDENTITY {
            return Ok(Word::identity());
        }
        text.split(|c: char| c == SEPARATOR || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(str::parse::<Generator>)
            .collect()
    }
}

impl FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Word::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "{IDENTITY}");
        }
        for (i, generator) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{generator}")?;
        }
        Ok(())
    }
}

impl FromIterator<Generator> for Word {
    fn from_iter<I: IntoIterator<Item = Generator>>(iter: I) -> Self {
        Word(iter.into_iter().collect())
    }
}

impl From<Vec<Generator>> for Word {
    fn from(tokens: Vec<Generator>) -> Self {
        Word(tokens)
    }
}

impl IntoIterator for Word {
    type Item = Generator;
    type IntoIter = std::vec::IntoIter<Generator>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a Generator;
    type IntoIter = std::slice::Iter<'a, Generator>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_is_an_involution() {
        let g = Generator::direct("a");
        assert!(g.inverse().is_inverted());
        assert_eq!(g.inverse().inverse(), g);
        assert!(g.is_inverse_of(&g.inverse()));
        assert!(!g.is_inverse_of(&g));
    }

    #[test]
    fn renders_and_parses() {
        let word = Word::from_pairs([("a", false), ("b", true), ("c", false)]);
        assert_eq!(word.to_string(), "a*b^-1*c");
        assert_eq!("a * b^-1 c".parse::<Word>().unwrap(), word);
        assert_eq!(Word::identity().to_string(), "e");
        assert_eq!(Word::parse("e").unwrap(), Word::identity());
        assert_eq!(Word::parse("  ").unwrap(), Word::identity());
    }

    #[test]
    fn rejects_bad_symbols() {
        assert_eq!(
            "a-b".parse::<Generator>(),
            Err(Error::InvalidSymbol("a-b".into()))
        );
        assert!(validate_symbol("").is_err());
        assert!(validate_symbol("e").is_err());
        assert!(validate_symbol("x_1").is_ok());
        assert!(Word::parse("a*e").is_err());
    }

    #[test]
    fn word_inverse_reverses() {
        let word = Word::parse("a*b^-1*c").unwrap();
        assert_eq!(word.inverse().to_string(), "c^-1*b*a^-1");
    }
}
