use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the algebra can report. None of these are retried: the
/// caller has to fix the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid presentation: {0}")]
    InvalidPresentation(String),
    #[error("invalid symbol '{0}'")]
    InvalidSymbol(String),
    #[error("generator '{0}' is not in the presentation")]
    InvalidGenerator(String),
    #[error("elements belong to different presentations")]
    PresentationMismatch,
    #[error("domain generator '{0}' is mapped more than once")]
    DuplicateImage(String),
    #[error("no image given for domain generator '{0}'")]
    UndefinedGenerator(String),
    #[error("image of '{generator}' uses '{symbol}', which is not a codomain generator")]
    InvalidImageSymbol { generator: String, symbol: String },
    #[error("images of commuting generators '{0}' and '{1}' do not commute")]
    NonHomomorphicMapping(String, String),
    #[error("element is not in the domain of the homomorphism")]
    DomainMismatch,
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),
    #[error("character {0:?} has no generator")]
    UnmappedCharacter(char),
    #[error("token '{0}' has no character")]
    UnmappedSymbol(String),
}
