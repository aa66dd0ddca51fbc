use std::fmt;
use std::sync::Arc;

use indexmap::IndexSet;
use rustc_hash::FxHashSet;

use crate::*;

/// Generators plus the pairs of them that commute. Built once and shared
/// through an `Arc` by every element and homomorphism that refers to it.
///
/// Two presentations are the same group only if they are the same
/// allocation; structurally equal presentations built separately are
/// distinct for the purposes of multiplication and homomorphisms.
#[derive(Debug)]
pub struct Presentation {
    generators: IndexSet<Symbol>,
    // (i, j) with i < j, indices into `generators`
    commuting: FxHashSet<(usize, usize)>,
}

impl Presentation {
    /// Duplicate generators collapse. Fails on an empty generator set,
    /// malformed symbols, self-pairs and pairs naming unknown symbols.
    pub fn new<G, P, S>(generators: G, commuting_pairs: P) -> Result<Arc<Self>>
    where
        G: IntoIterator,
        G::Item: AsRef<str>,
        P: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut symbols = IndexSet::<Symbol>::new();
        for symbol in generators {
            let symbol = symbol.as_ref();
            validate_symbol(symbol)?;
            if !symbols.contains(symbol) {
                symbols.insert(Symbol::from(symbol));
            }
        }
        if symbols.is_empty() {
            return Err(Error::InvalidPresentation(
                "a presentation needs at least one generator".into(),
            ));
        }

        let mut commuting = FxHashSet::default();
        for (a, b) in commuting_pairs {
            let (a, b) = (a.as_ref(), b.as_ref());
            let lookup = |s: &str| {
                symbols.get_index_of(s).ok_or_else(|| {
                    Error::InvalidPresentation(format!(
                        "commuting pair ({a}, {b}) names unknown generator '{s}'"
                    ))
                })
            };
            let (i, j) = (lookup(a)?, lookup(b)?);
            if i == j {
                return Err(Error::InvalidPresentation(format!(
                    "commuting pair ({a}, {b}) must name two distinct generators"
                )));
            }
            commuting.insert((i.min(j), i.max(j)));
        }

        log::debug!(
            "built presentation with {} generators and {} commuting pairs",
            symbols.len(),
            commuting.len()
        );
        Ok(Arc::new(Presentation {
            generators: symbols,
            commuting,
        }))
    }

    /// The free group on `generators`.
    pub fn free<G>(generators: G) -> Result<Arc<Self>>
    where
        G: IntoIterator,
        G::Item: AsRef<str>,
    {
        Self::new(generators, std::iter::empty::<(&str, &str)>())
    }

    /// The free abelian group on `generators`.
    pub fn free_abelian<G>(generators: G) -> Result<Arc<Self>>
    where
        G: IntoIterator,
        G::Item: AsRef<str>,
    {
        let symbols: Vec<String> = generators
            .into_iter()
            .map(|s| s.as_ref().to_owned())
            .collect();
        let mut pairs = vec![];
        for (i, a) in symbols.iter().enumerate() {
            for b in &symbols[i + 1..] {
                if a != b {
                    pairs.push((a.as_str(), b.as_str()));
                }
            }
        }
        Self::new(&symbols, pairs)
    }

    pub fn rank(&self) -> usize {
        self.generators.len()
    }

    pub fn generators(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.generators.iter()
    }

    /// The interned copy of `symbol`, if it is a generator.
    pub fn symbol(&self, symbol: &str) -> Option<&Symbol> {
        self.generators.get(symbol)
    }

    /// Commuting pairs in generator order.
    pub fn commuting_pairs(&self) -> Vec<(&Symbol, &Symbol)> {
        let mut pairs: Vec<_> = self.commuting.iter().copied().collect();
        pairs.sort_unstable();
        pairs
            .into_iter()
            .map(|(i, j)| (&self.generators[i], &self.generators[j]))
            .collect()
    }

    pub fn is_free(&self) -> bool {
        self.commuting.is_empty()
    }

    pub fn is_free_abelian(&self) -> bool {
        let n = self.rank();
        self.commuting.len() == n * (n - 1) / 2
    }

    /// Whether two base symbols commute. Every symbol commutes with itself;
    /// symbols outside the presentation commute with nothing else.
    pub fn commutes(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        match (
            self.generators.get_index_of(a),
            self.generators.get_index_of(b),
        ) {
            (Some(i), Some(j)) => self.commuting.contains(&(i.min(j), i.max(j))),
            _ => false,
        }
    }

    /// Commutation ignores polarity.
    pub fn generators_commute(&self, a: &Generator, b: &Generator) -> bool {
        self.commutes(a.symbol(), b.symbol())
    }

    pub fn inverse(&self, g: &Generator) -> Generator {
        g.inverse()
    }

    pub fn is_valid(&self, g: &Generator) -> bool {
        self.generators.contains(&**g.symbol())
    }

    /// Check every token of `word` against the alphabet and swap in the
    /// interned symbols.
    pub fn validate(&self, word: &Word) -> Result<Word> {
        word.iter()
            .map(|g| match self.symbol(g.symbol()) {
                Some(symbol) => Ok(Generator::new(symbol.clone(), g.is_inverted())),
                None => Err(Error::InvalidGenerator(g.symbol().to_string())),
            })
            .collect()
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (i, g) in self.generators.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{g}")?;
        }
        let pairs = self.commuting_pairs();
        if !pairs.is_empty() {
            write!(f, " |")?;
            for (i, (a, b)) in pairs.into_iter().enumerate() {
                let sep = if i > 0 { "," } else { "" };
                write!(f, "{sep} [{a}, {b}]")?;
            }
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commutation_is_symmetric_and_reflexive() {
        let p = Presentation::new(["x", "y", "z"], [("x", "y")]).unwrap();
        assert!(p.commutes("x", "y"));
        assert!(p.commutes("y", "x"));
        assert!(p.commutes("z", "z"));
        assert!(!p.commutes("x", "z"));
        assert!(!p.commutes("x", "w"));
        assert!(p.generators_commute(&Generator::new("x", true), &Generator::direct("y")));
    }

    #[test]
    fn rejects_unknown_pair_symbols() {
        let err = Presentation::new(["a", "b"], [("a", "c")]).unwrap_err();
        assert!(matches!(err, Error::InvalidPresentation(_)));
    }

    #[test]
    fn rejects_self_pairs_and_empty_alphabets() {
        assert!(matches!(
            Presentation::new(["a"], [("a", "a")]),
            Err(Error::InvalidPresentation(_))
        ));
        assert!(matches!(
            Presentation::free(Vec::<String>::new()),
            Err(Error::InvalidPresentation(_))
        ));
        assert_eq!(
            Presentation::free(["a", "b c"]).unwrap_err(),
            Error::InvalidSymbol("b c".into())
        );
    }

    #[test]
    fn duplicates_collapse() {
        let p = Presentation::new(["a", "b", "a"], [("a", "b"), ("b", "a")]).unwrap();
        assert_eq!(p.rank(), 2);
        assert_eq!(p.commuting_pairs().len(), 1);
        assert!(p.is_free_abelian());
    }

    #[test]
    fn validity_and_inverse() {
        let p = Presentation::free(["a"]).unwrap();
        let a = Generator::direct("a");
        assert!(p.is_valid(&a));
        assert!(p.is_valid(&p.inverse(&a)));
        assert!(!p.is_valid(&Generator::direct("b")));
        assert_eq!(p.inverse(&p.inverse(&a)), a);
        assert!(p.is_free());
    }

    #[test]
    fn display() {
        let p = Presentation::new(["x", "y", "z"], [("y", "x")]).unwrap();
        assert_eq!(p.to_string(), "<x, y, z | [x, y]>");
        let abelian = Presentation::free_abelian(["a", "b", "c"]).unwrap();
        assert_eq!(abelian.to_string(), "<a, b, c | [a, b], [a, c], [b, c]>");
    }
}
