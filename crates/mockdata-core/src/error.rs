use thiserror::Error;

/// Core error type shared across mockdata crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The field catalog violates its invariants.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    /// A caller-supplied argument is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A requested field type is not part of the catalog.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

/// Convenience alias for results returned by mockdata crates.
pub type Result<T> = std::result::Result<T, Error>;
