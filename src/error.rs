//! Error taxonomy.
//!
//! Every failure is fatal to the call that produced it; nothing here is
//! retried or recovered internally.
use thiserror::Error;

/// A descriptor that could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid type name {0:?}: must be non-empty and contain no whitespace or any of `<>[]`")]
    InvalidName(String),
    #[error("array dimension must not be negative (got {0})")]
    NegativeArrayDimension(isize),
}

/// The metadata provider has never heard of `name`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type `{name}`")]
pub struct UnknownTypeError {
    pub name: String,
}

/// Everything `TypeTreeGenerator::generate` can fail with. No partial tree
/// is ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    UnknownType(#[from] UnknownTypeError),

    #[error("metadata lookup for `{name}` failed")]
    Metadata {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("type `{signature}` refers back to itself")]
    CyclicType { signature: String },

    #[error("type tree deeper than {limit} levels at `{signature}`")]
    DepthLimitExceeded { limit: usize, signature: String },
}

/// Failures while loading a `Catalog` or a `GeneratorConfig` from JSON.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("at JSON path {path} → {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
