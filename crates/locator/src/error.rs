use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocatorError {
    #[error("Locator parse error in '{0}': {1}")]
    Parse(String, String),

    #[error("Positional index must be at least 1, got {0}")]
    ZeroIndex(usize),
}
