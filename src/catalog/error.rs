//! Error taxonomy for catalog loading and summary composition.
//!
//! Lookup helpers (`get_control`, `get_group`, `find_part`, ...) signal
//! absence with `Option`; only the loader and `control_summary` fail with a
//! `CatalogError` because those callers cannot proceed on a missing value.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is malformed JSON, or neither the top-level object nor
    /// the `"catalog"`-wrapped object satisfies the catalog shape.
    #[error("catalog document failed schema validation:\n{}", diagnostics.join("\n"))]
    SchemaValidation { diagnostics: Vec<String> },

    #[error("control '{0}' not found in catalog")]
    ControlNotFound(String),

    /// A control resolved but no group owns it; summaries require the family.
    #[error("no group owns control '{0}'")]
    GroupNotFound(String),

    #[error("unable to read catalog document")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    pub(crate) fn schema(diagnostics: Vec<String>) -> Self {
        CatalogError::SchemaValidation { diagnostics }
    }
}
