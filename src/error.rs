use thiserror::Error;

/// The one failure this crate can produce: an extraction required a value
/// but the `Optional` was empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no value present")]
    NoValuePresent,
}

pub type Result<T> = std::result::Result<T, Error>;
