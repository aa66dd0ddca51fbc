//! JSON-friendly descriptions of presentations and homomorphisms.
//!
//! ```json
//! {
//!   "domain":   { "generators": ["a", "b"], "commuting": [["a", "b"]] },
//!   "codomain": { "generators": ["x", "y", "z"], "commuting": [["x", "y"]] },
//!   "mapping":  { "a": "x*x", "b": "y" }
//! }
//! ```
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationDoc {
    pub generators: Vec<String>,
    #[serde(default)]
    pub commuting: Vec<(String, String)>,
}

impl PresentationDoc {
    pub fn build(&self) -> Result<Arc<Presentation>> {
        Presentation::new(&self.generators, self.commuting.iter().map(|(a, b)| (a, b)))
    }
}

impl From<&Presentation> for PresentationDoc {
    fn from(presentation: &Presentation) -> Self {
        PresentationDoc {
            generators: presentation.generators().map(|g| g.to_string()).collect(),
            commuting: presentation
                .commuting_pairs()
                .into_iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        }
    }
}

/// Images are written in the rendered word form, `e` for the identity.
/// A generator named twice in `mapping` is a parse error rather than a
/// silent overwrite.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomomorphismDoc {
    pub domain: PresentationDoc,
    pub codomain: PresentationDoc,
    #[serde(deserialize_with = "unique_keys")]
    pub mapping: IndexMap<String, String>,
}

fn unique_keys<'de, D>(
    deserializer: D,
) -> std::result::Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueKeys;

    impl<'de> Visitor<'de> for UniqueKeys {
        type Value = IndexMap<String, String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map from generator to image word")
        }

        fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut mapping = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, image)) = access.next_entry::<String, String>()? {
                if mapping.contains_key(&key) {
                    return Err(de::Error::custom(Error::DuplicateImage(key)));
                }
                mapping.insert(key, image);
            }
            Ok(mapping)
        }
    }

    deserializer.deserialize_map(UniqueKeys)
}

impl HomomorphismDoc {
    pub fn build(&self) -> Result<Homomorphism> {
        let domain = self.domain.build()?;
        let codomain = self.codomain.build()?;
        let mapping = self
            .mapping
            .iter()
            .map(|(symbol, image)| Ok((symbol, Word::parse(image)?)))
            .collect::<Result<Vec<_>>>()?;
        Homomorphism::new(&domain, &codomain, mapping)
    }
}

impl From<&Homomorphism> for HomomorphismDoc {
    fn from(hom: &Homomorphism) -> Self {
        let mapping = hom
            .domain()
            .generators()
            .filter_map(|g| Some((g.to_string(), hom.image(g)?.to_string())))
            .collect();
        HomomorphismDoc {
            domain: PresentationDoc::from(&**hom.domain()),
            codomain: PresentationDoc::from(&**hom.codomain()),
            mapping,
        }
    }
}
