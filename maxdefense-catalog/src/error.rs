use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ItemError {
    #[error("Item description must be non-empty")]
    EmptyDescription,

    #[error("Item cost must be positive")]
    ZeroCost,

    #[error("Item defense ({0}) must be a non-negative finite number")]
    InvalidDefense(f64),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Cannot open catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read catalog at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid field count at line {line}; want 3 but got {found}. Line: {text}")]
    FieldCount {
        line: usize,
        found: usize,
        text: String,
    },
}
