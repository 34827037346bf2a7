use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::{CatalogError, SelectionError};

#[derive(Error, Debug)]
pub enum ChooserError {
    #[error("No input catalogs given")]
    NoCatalogs,

    #[error("Failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog {path}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },

    #[error("No image selected from {path}: {source}")]
    Selection {
        path: PathBuf,
        #[source]
        source: SelectionError,
    },

    #[error("Terminal initialization error: {0}")]
    TerminalInit(String),

    #[error("Menu has no entries to choose from")]
    EmptyMenu,

    #[error("Selection interrupted")]
    Interrupted,

    #[error("Failed to write output file {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChooserError>;
