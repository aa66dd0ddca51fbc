use std::fmt;
use std::sync::Arc;

use crate::*;

/// A group element: a presentation and a word in normal form.
#[derive(Clone, Debug)]
pub struct Element {
    presentation: Arc<Presentation>,
    word: Word,
}

impl Element {
    /// Fails with [`Error::InvalidGenerator`] on the first token outside the
    /// alphabet. The stored word is always reduced.
    pub fn new(presentation: &Arc<Presentation>, word: &Word) -> Result<Self> {
        let word = presentation.validate(word)?;
        Ok(Self::from_valid(presentation.clone(), &word))
    }

    /// Build from `(symbol, inverted)` tokens.
    pub fn from_tokens<S: Into<Symbol>>(
        presentation: &Arc<Presentation>,
        tokens: impl IntoIterator<Item = (S, bool)>,
    ) -> Result<Self> {
        Self::new(presentation, &Word::from_pairs(tokens))
    }

    /// Parse the rendered form (`a*b^-1`, `e`) over `presentation`.
    pub fn parse(presentation: &Arc<Presentation>, text: &str) -> Result<Self> {
        Self::new(presentation, &Word::parse(text)?)
    }

    pub fn identity(presentation: &Arc<Presentation>) -> Self {
        Element {
            presentation: presentation.clone(),
            word: Word::identity(),
        }
    }

    pub fn generator(presentation: &Arc<Presentation>, symbol: &str) -> Result<Self> {
        Self::new(presentation, &Word::from_pairs([(symbol, false)]))
    }

    // `word` must already be validated against `presentation`
    pub(crate) fn from_valid(presentation: Arc<Presentation>, word: &Word) -> Self {
        let word = reduce(&presentation, word);
        Element { presentation, word }
    }

    pub fn presentation(&self) -> &Arc<Presentation> {
        &self.presentation
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_identity(&self) -> bool {
        self.word.is_empty()
    }

    pub fn same_presentation(&self, other: &Element) -> bool {
        Arc::ptr_eq(&self.presentation, &other.presentation)
    }

    fn check_presentation(&self, other: &Element) -> Result<()> {
        if self.same_presentation(other) {
            Ok(())
        } else {
            Err(Error::PresentationMismatch)
        }
    }

    /// The group product `self * other`.
    pub fn multiply(&self, other: &Element) -> Result<Element> {
        self.check_presentation(other)?;
        Ok(Self::from_valid(
            self.presentation.clone(),
            &self.word.concat(&other.word),
        ))
    }

    pub fn invert(&self) -> Element {
        Self::from_valid(self.presentation.clone(), &self.word.inverse())
    }

    /// `self^n`; negative exponents raise the inverse.
    ///
    /// Takes `O(log |n|)` products, reducing after each one. These groups
    /// are torsion-free, so for any element other than the identity the
    /// result has at least `|n|` letters and the cost is dominated by
    /// writing it out.
    pub fn pow(&self, n: i64) -> Element {
        let mut acc = Element::identity(&self.presentation);
        if self.is_identity() {
            return acc;
        }
        let mut base = if n < 0 { self.invert() } else { self.clone() };
        let mut n = n.unsigned_abs();
        while n > 0 {
            if n & 1 == 1 {
                acc = Self::from_valid(self.presentation.clone(), &acc.word.concat(&base.word));
            }
            n >>= 1;
            if n > 0 {
                base = Self::from_valid(self.presentation.clone(), &base.word.concat(&base.word));
            }
        }
        acc
    }

    /// `self * other * self^-1 * other^-1`.
    pub fn commutator(&self, other: &Element) -> Result<Element> {
        self.check_presentation(other)?;
        let word = self
            .word
            .concat(&other.word)
            .concat(&self.word.inverse())
            .concat(&other.word.inverse());
        Ok(Self::from_valid(self.presentation.clone(), &word))
    }

    /// `by * self * by^-1`.
    pub fn conjugate(&self, by: &Element) -> Result<Element> {
        by.multiply(self)?.multiply(&by.invert())
    }

    /// Two elements commute when both products have the same normal form.
    pub fn commutes_with(&self, other: &Element) -> Result<bool> {
        Ok(self.multiply(other)?.word == other.multiply(self)?.word)
    }

    pub fn equals(&self, other: &Element) -> bool {
        self.same_presentation(other) && self.word == other.word
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Element {}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ab_commuting() -> Arc<Presentation> {
        Presentation::new(["a", "b"], [("a", "b")]).unwrap()
    }

    #[test]
    fn commutator_of_commuting_generators_is_trivial() {
        let p = ab_commuting();
        let e = Element::from_tokens(&p, [("a", false), ("b", false), ("a", true), ("b", true)])
            .unwrap();
        assert!(e.is_identity());
        assert_eq!(e.to_string(), "e");

        let a = Element::generator(&p, "a").unwrap();
        let b = Element::generator(&p, "b").unwrap();
        assert!(a.commutator(&b).unwrap().is_identity());
        assert!(a.commutes_with(&b).unwrap());
    }

    #[test]
    fn free_commutator_survives() {
        let p = Presentation::free(["a", "b"]).unwrap();
        let a = Element::generator(&p, "a").unwrap();
        let b = Element::generator(&p, "b").unwrap();
        let c = a.commutator(&b).unwrap();
        assert_eq!(c.to_string(), "a*b*a^-1*b^-1");
        assert!(!a.commutes_with(&b).unwrap());
    }

    #[test]
    fn rejects_foreign_tokens() {
        let p = ab_commuting();
        assert_eq!(
            Element::parse(&p, "a*c").unwrap_err(),
            Error::InvalidGenerator("c".into())
        );
    }

    #[test]
    fn multiplication_needs_one_presentation() {
        let p = ab_commuting();
        let q = ab_commuting();
        let a = Element::generator(&p, "a").unwrap();
        let a2 = Element::generator(&q, "a").unwrap();
        assert_eq!(a.multiply(&a2).unwrap_err(), Error::PresentationMismatch);
        assert!(!a.equals(&a2));
        assert!(a.equals(&Element::generator(&p, "a").unwrap()));
    }

    #[test]
    fn product_is_re_reduced() {
        let p = Presentation::new(["x", "y", "z"], [("x", "y")]).unwrap();
        let left = Element::parse(&p, "z*y").unwrap();
        let right = Element::parse(&p, "x*y^-1").unwrap();
        assert_eq!(left.multiply(&right).unwrap().to_string(), "z*x");
    }

    #[test]
    fn inverse_and_powers() {
        let p = ab_commuting();
        let e = Element::parse(&p, "b*a*a").unwrap();
        assert_eq!(e.to_string(), "a*a*b");
        assert_eq!(e.invert().to_string(), "a^-1*a^-1*b^-1");
        assert!(e.multiply(&e.invert()).unwrap().is_identity());
        assert_eq!(e.invert().invert(), e);
        assert_eq!(e.pow(2).to_string(), "a*a*a*a*b*b");
        assert_eq!(e.pow(-1), e.invert());
        assert!(e.pow(0).is_identity());
    }

    #[test]
    fn large_powers() {
        let p = Presentation::free(["a", "c"]).unwrap();
        let e = Element::parse(&p, "c*a*c^-1").unwrap();
        let mut repeated = Element::identity(&p);
        for _ in 0..1000 {
            repeated = repeated.multiply(&e).unwrap();
        }
        let power = e.pow(1000);
        assert_eq!(power, repeated);
        assert_eq!(power.len(), 1002);
        assert_eq!(e.pow(-1000), power.invert());
        assert_eq!(e.pow(1000).multiply(&e.pow(-999)).unwrap(), e);

        let identity = Element::identity(&p);
        assert!(identity.pow(i64::MIN).is_identity());
        assert!(identity.pow(i64::MAX).is_identity());
        assert!(e.pow(-1000).multiply(&e.pow(1000)).unwrap().is_identity());
    }

    #[test]
    fn conjugation() {
        let p = Presentation::new(["a", "b", "c"], [("a", "b")]).unwrap();
        let b = Element::generator(&p, "b").unwrap();
        let a = Element::generator(&p, "a").unwrap();
        let c = Element::generator(&p, "c").unwrap();
        assert_eq!(b.conjugate(&a).unwrap(), b);
        assert_eq!(b.conjugate(&c).unwrap().to_string(), "c*b*c^-1");
    }
}
