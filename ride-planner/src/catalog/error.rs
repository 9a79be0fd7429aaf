//! Catalog loading error types.

/// Errors that can occur when loading a ride catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be opened or read
    #[error("cannot read ride catalog: {0}")]
    Io(#[from] std::io::Error),

    /// A record does not have exactly three fields
    #[error("invalid field count at line {line}; want 3 but got {found}: {text:?}")]
    FieldCount {
        line: usize,
        found: usize,
        text: String,
    },
}
