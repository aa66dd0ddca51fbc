use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::*;

/// A substitution of codomain words for domain generators that preserves
/// every commutation relation of the domain. Only verified mappings can be
/// built, so `apply` never has to second-guess an image.
#[derive(Clone, Debug)]
pub struct Homomorphism {
    domain: Arc<Presentation>,
    codomain: Arc<Presentation>,
    // in domain generator order, one entry per generator
    images: IndexMap<Symbol, Element>,
}

impl Homomorphism {
    /// Check that `mapping` names every domain generator exactly once, that every
    /// image is spelled in the codomain alphabet, and that commuting
    /// generators go to commuting images.
    pub fn new<K, M>(
        domain: &Arc<Presentation>,
        codomain: &Arc<Presentation>,
        mapping: M,
    ) -> Result<Self>
    where
        K: AsRef<str>,
        M: IntoIterator<Item = (K, Word)>,
    {
        let mut given = IndexMap::<Symbol, Word>::new();
        for (key, word) in mapping {
            let key = key.as_ref();
            let symbol = domain
                .symbol(key)
                .ok_or_else(|| Error::InvalidGenerator(key.to_owned()))?;
            let word = codomain.validate(&word).map_err(|err| match err {
                Error::InvalidGenerator(symbol) => Error::InvalidImageSymbol {
                    generator: key.to_owned(),
                    symbol,
                },
                err => err,
            })?;
            if given.insert(symbol.clone(), word).is_some() {
                return Err(Error::DuplicateImage(key.to_owned()));
            }
        }

        let mut images = IndexMap::with_capacity(domain.rank());
        for symbol in domain.generators() {
            let word = given
                .get(symbol)
                .ok_or_else(|| Error::UndefinedGenerator(symbol.to_string()))?;
            images.insert(symbol.clone(), Element::from_valid(codomain.clone(), word));
        }

        let hom = Homomorphism {
            domain: domain.clone(),
            codomain: codomain.clone(),
            images,
        };
        hom.verify()?;
        log::debug!("verified homomorphism {} -> {}", hom.domain, hom.codomain);
        Ok(hom)
    }

    /// The inclusion of `presentation` into itself.
    pub fn identity(presentation: &Arc<Presentation>) -> Self {
        let images = presentation
            .generators()
            .map(|g| {
                let word = Word::from_pairs([(g.clone(), false)]);
                (g.clone(), Element::from_valid(presentation.clone(), &word))
            })
            .collect();
        Homomorphism {
            domain: presentation.clone(),
            codomain: presentation.clone(),
            images,
        }
    }

    // Each unordered pair of distinct generators is checked once; a
    // generator always commutes with itself.
    fn verify(&self) -> Result<()> {
        let images: Vec<(&Symbol, &Element)> = self.images.iter().collect();
        for (i, (a, image_a)) in images.iter().enumerate() {
            for (b, image_b) in &images[i + 1..] {
                if !self.domain.commutes(a, b) {
                    continue;
                }
                if !image_a.commutes_with(image_b)? {
                    return Err(Error::NonHomomorphicMapping(a.to_string(), b.to_string()));
                }
            }
        }
        Ok(())
    }

    pub fn domain(&self) -> &Arc<Presentation> {
        &self.domain
    }

    pub fn codomain(&self) -> &Arc<Presentation> {
        &self.codomain
    }

    /// The image of a domain generator.
    pub fn image(&self, symbol: &str) -> Option<&Element> {
        self.images.get(symbol)
    }

    /// Substitute images for letters, inverting the image of an inverted
    /// letter, and reduce the result once.
    pub fn apply(&self, element: &Element) -> Result<Element> {
        if !Arc::ptr_eq(element.presentation(), &self.domain) {
            return Err(Error::DomainMismatch);
        }
        let mut word = Word::identity();
        for letter in element.word() {
            let image = self
                .images
                .get(&**letter.symbol())
                .ok_or_else(|| Error::InvalidGenerator(letter.symbol().to_string()))?
                .word();
            word = if letter.is_inverted() {
                word.concat(&image.inverse())
            } else {
                word.concat(image)
            };
        }
        Ok(Element::from_valid(self.codomain.clone(), &word))
    }

    /// `next ∘ self`: apply `self`, then `next`.
    pub fn compose(&self, next: &Homomorphism) -> Result<Homomorphism> {
        if !Arc::ptr_eq(&self.codomain, &next.domain) {
            return Err(Error::DomainMismatch);
        }
        let mapping = self
            .images
            .iter()
            .map(|(symbol, image)| Ok((symbol.clone(), next.apply(image)?.word().clone())))
            .collect::<Result<Vec<_>>>()?;
        Homomorphism::new(&self.domain, &next.codomain, mapping)
    }
}

impl fmt::Display for Homomorphism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (symbol, image)) in self.images.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{symbol} -> {image}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(text: &str) -> Word {
        Word::parse(text).unwrap()
    }

    fn domain() -> Arc<Presentation> {
        Presentation::new(["a", "b"], [("a", "b")]).unwrap()
    }

    fn codomain() -> Arc<Presentation> {
        Presentation::new(["x", "y", "z"], [("x", "y")]).unwrap()
    }

    #[test]
    fn rejects_non_commuting_images() {
        let err = Homomorphism::new(
            &domain(),
            &codomain(),
            [("a", w("x*z")), ("b", w("y"))],
        )
        .unwrap_err();
        assert_eq!(err, Error::NonHomomorphicMapping("a".into(), "b".into()));
    }

    #[test]
    fn rejects_incomplete_and_malformed_mappings() {
        let (d, c) = (domain(), codomain());
        assert_eq!(
            Homomorphism::new(&d, &c, [("a", w("x"))]).unwrap_err(),
            Error::UndefinedGenerator("b".into())
        );
        assert_eq!(
            Homomorphism::new(&d, &c, [("a", w("x*q")), ("b", w("y"))]).unwrap_err(),
            Error::InvalidImageSymbol {
                generator: "a".into(),
                symbol: "q".into()
            }
        );
        assert_eq!(
            Homomorphism::new(&d, &c, [("a", w("x")), ("b", w("y")), ("c", w("z"))])
                .unwrap_err(),
            Error::InvalidGenerator("c".into())
        );
    }

    #[test]
    fn rejects_repeated_generators() {
        let (d, c) = (domain(), codomain());
        // alone, a -> z would fail verification against b -> y
        assert_eq!(
            Homomorphism::new(&d, &c, [("a", w("z")), ("a", w("x")), ("b", w("y"))])
                .unwrap_err(),
            Error::DuplicateImage("a".into())
        );
        assert_eq!(
            Homomorphism::new(&d, &c, [("a", w("x")), ("b", w("y")), ("b", w("y"))])
                .unwrap_err(),
            Error::DuplicateImage("b".into())
        );
    }

    #[test]
    fn applies_inverse_letters_through_inverse_images() {
        let (d, c) = (domain(), codomain());
        let hom = Homomorphism::new(&d, &c, [("a", w("x*x")), ("b", w("y^-1"))]).unwrap();
        let e = Element::parse(&d, "a*b^-1*a^-1").unwrap();
        assert_eq!(e.to_string(), "b^-1");
        assert_eq!(hom.apply(&e).unwrap().to_string(), "y");

        let e = Element::parse(&d, "a^-1*b").unwrap();
        assert_eq!(hom.apply(&e).unwrap().to_string(), "x^-1*x^-1*y^-1");

        let response = hom.apply(&e).unwrap();
        let check = hom.apply(&e.invert()).unwrap().multiply(&response).unwrap();
        assert!(check.is_identity());
        let wrong = hom.apply(&e.pow(2)).unwrap();
        assert!(!hom.apply(&e.invert()).unwrap().multiply(&wrong).unwrap().is_identity());
    }

    #[test]
    fn images_may_be_trivial() {
        let (d, c) = (domain(), codomain());
        let hom = Homomorphism::new(&d, &c, [("a", Word::identity()), ("b", w("z"))]).unwrap();
        let e = Element::parse(&d, "a*b*a").unwrap();
        assert_eq!(hom.apply(&e).unwrap().to_string(), "z");
    }

    #[test]
    fn apply_checks_the_domain() {
        let (d, c) = (domain(), codomain());
        let hom = Homomorphism::new(&d, &c, [("a", w("x")), ("b", w("y"))]).unwrap();
        let stranger = Element::generator(&domain(), "a").unwrap();
        assert_eq!(hom.apply(&stranger).unwrap_err(), Error::DomainMismatch);
    }

    #[test]
    fn composition() {
        let (d, c) = (domain(), codomain());
        let f = Homomorphism::new(&d, &c, [("a", w("x")), ("b", w("y*x"))]).unwrap();
        let back = Homomorphism::new(&c, &d, [("x", w("a")), ("y", w("b")), ("z", w("a"))])
            .unwrap();
        let g = f.compose(&back).unwrap();
        assert_eq!(g.image("b").unwrap().to_string(), "a*b");
        assert!(Arc::ptr_eq(g.codomain(), &d));
        assert_eq!(back.compose(&back).unwrap_err(), Error::DomainMismatch);

        let id = Homomorphism::identity(&d);
        let e = Element::parse(&d, "b*a^-1").unwrap();
        assert_eq!(id.apply(&e).unwrap(), e);
        assert_eq!(f.to_string(), "a -> x, b -> x*y");
    }
}
