mod error;
mod optional;

pub use error::{Error, Result};
pub use optional::Optional;
