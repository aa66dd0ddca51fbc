//! Right-angled Artin groups: presentations, normal forms, elements and
//! homomorphisms.
//!
//! A presentation lists generators and the pairs of them that commute; all
//! other pairs interact freely. Every word is reduced to a canonical normal
//! form (see [`reduce`](mod@reduce)), which is what equality, multiplication and
//! homomorphism checks compare.
//!
//! ```
//! use raag::*;
//!
//! let p = Presentation::new(["a", "b"], [("a", "b")]).unwrap();
//! let e = Element::parse(&p, "a*b*a^-1*b^-1").unwrap();
//! assert!(e.is_identity());
//! ```

pub mod codec;
pub mod document;
pub mod element;
pub mod error;
pub mod generator;
pub mod homomorphism;
pub mod presentation;
pub mod reduce;


pub use codec::Alphabet;
pub use document::{HomomorphismDoc, PresentationDoc};
pub use element::Element;
pub use error::{Error, Result};
pub use generator::{validate_symbol, Generator, Symbol, Word};
pub use homomorphism::Homomorphism;
pub use presentation::Presentation;
pub use reduce::{is_reduced, reduce, reduce_with_stats, Reduction};
