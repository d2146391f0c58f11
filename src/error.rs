/// Errors surfaced by the library.
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("invalid color '{0}': expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
