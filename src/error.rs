use thiserror::Error;

/// Errors raised while building or querying an account merge
#[derive(Error, Debug)]
pub enum MergeError {
    /// Lookup of an identifier that no record registered
    #[error("identifier not found: '{identifier}'")]
    NotFound { identifier: String },

    /// A record needs a name and at least one identifier
    #[error("invalid record at position {index}: expected a name and at least one identifier, got {fields} field(s)")]
    InvalidRecord { index: usize, fields: usize },

    /// An account built from a name and an empty identifier list
    #[error("account '{name}' has no identifiers")]
    MissingIdentifiers { name: String },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MergeError {
    pub(crate) fn not_found(identifier: &str) -> Self {
        MergeError::NotFound {
            identifier: identifier.to_string(),
        }
    }
}

pub type Result<T, E = MergeError> = std::result::Result<T, E>;
