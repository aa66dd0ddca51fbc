//! Text <-> word translation through a character alphabet.
//!
//! Encoding spells each character as its generator and reduces the result,
//! so text only survives a round trip when no two adjacent letters commute
//! out of order or cancel.
use std::sync::Arc;

use indexmap::IndexMap;

use crate::*;

#[derive(Clone, Debug)]
pub struct Alphabet {
    presentation: Arc<Presentation>,
    to_symbol: IndexMap<char, Symbol>,
    to_char: IndexMap<Symbol, char>,
}

impl Alphabet {
    /// A one-to-one pairing of characters with generators of
    /// `presentation`.
    pub fn new<S: AsRef<str>>(
        presentation: &Arc<Presentation>,
        pairs: impl IntoIterator<Item = (char, S)>,
    ) -> Result<Self> {
        let mut to_symbol = IndexMap::new();
        let mut to_char = IndexMap::new();
        for (c, symbol) in pairs {
            let symbol = symbol.as_ref();
            let symbol = presentation
                .symbol(symbol)
                .ok_or_else(|| Error::InvalidGenerator(symbol.to_owned()))?;
            if to_symbol.insert(c, symbol.clone()).is_some() {
                return Err(Error::InvalidAlphabet(format!("{c:?} is mapped twice")));
            }
            if to_char.insert(symbol.clone(), c).is_some() {
                return Err(Error::InvalidAlphabet(format!("{symbol} is mapped twice")));
            }
        }
        Ok(Alphabet {
            presentation: presentation.clone(),
            to_symbol,
            to_char,
        })
    }

    /// Pair the characters of `chars` with the generators in presentation
    /// order.
    pub fn sequential(presentation: &Arc<Presentation>, chars: &str) -> Result<Self> {
        let count = chars.chars().count();
        if count > presentation.rank() {
            return Err(Error::InvalidAlphabet(format!(
                "{count} characters but only {} generators",
                presentation.rank()
            )));
        }
        Self::new(presentation, chars.chars().zip(presentation.generators()))
    }

    pub fn presentation(&self) -> &Arc<Presentation> {
        &self.presentation
    }

    pub fn len(&self) -> usize {
        self.to_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_symbol.is_empty()
    }

    pub fn symbol_for(&self, c: char) -> Option<&Symbol> {
        self.to_symbol.get(&c)
    }

    pub fn char_for(&self, symbol: &str) -> Option<char> {
        self.to_char.get(symbol).copied()
    }

    pub fn encode(&self, text: &str) -> Result<Element> {
        let word = text
            .chars()
            .map(|c| {
                self.symbol_for(c)
                    .map(|symbol| Generator::direct(symbol.clone()))
                    .ok_or(Error::UnmappedCharacter(c))
            })
            .collect::<Result<Word>>()?;
        Ok(Element::from_valid(self.presentation.clone(), &word))
    }

    /// Spell out a reduced word. Inverted letters have no character.
    pub fn decode(&self, element: &Element) -> Result<String> {
        if !Arc::ptr_eq(element.presentation(), &self.presentation) {
            return Err(Error::PresentationMismatch);
        }
        element
            .word()
            .iter()
            .map(|letter| match self.char_for(letter.symbol()) {
                Some(c) if !letter.is_inverted() => Ok(c),
                _ => Err(Error::UnmappedSymbol(letter.to_string())),
            })
            .collect()
    }
}
