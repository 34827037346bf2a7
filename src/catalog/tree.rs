//! Generic catalog document tree
//!
//! Catalogs are parsed into an untyped `serde_json::Value` and walked with
//! the accessors below. Each lookup either yields a value of the requested
//! shape or a typed error the caller can propagate with `?`.

use serde_json::{Map, Value};
use thiserror::Error;

/// A node anywhere in the catalog document
pub type Node = Value;

/// An ordered mapping node (document order is preserved)
pub type Mapping = Map<String, Value>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("missing field `{key}`")]
    MissingField { key: String },

    #[error("field `{key}` is not {expected}")]
    TypeMismatch { key: String, expected: &'static str },
}

impl CatalogError {
    fn missing(key: &str) -> Self {
        CatalogError::MissingField {
            key: key.to_string(),
        }
    }

    fn mismatch(key: &str, expected: &'static str) -> Self {
        CatalogError::TypeMismatch {
            key: key.to_string(),
            expected,
        }
    }
}

/// A parsed catalog, owned by whoever parsed it
#[derive(Debug, Clone)]
pub struct CatalogTree {
    root: Node,
}

impl CatalogTree {
    /// Root node of the document (always a mapping)
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The top-level `products` mapping
    pub fn products(&self) -> Result<&Mapping, CatalogError> {
        get_mapping(&self.root, "products")
    }
}

/// Parse raw catalog text. There is no partial recovery.
pub fn parse(text: &str) -> Result<CatalogTree, CatalogError> {
    let root: Node = serde_json::from_str(text)?;
    if !root.is_object() {
        return Err(CatalogError::mismatch("(root)", "a mapping"));
    }
    Ok(CatalogTree { root })
}

fn get<'a>(node: &'a Node, key: &str) -> Result<&'a Node, CatalogError> {
    node.get(key).ok_or_else(|| CatalogError::missing(key))
}

pub fn get_mapping<'a>(node: &'a Node, key: &str) -> Result<&'a Mapping, CatalogError> {
    get(node, key)?
        .as_object()
        .ok_or_else(|| CatalogError::mismatch(key, "a mapping"))
}

pub fn get_string<'a>(node: &'a Node, key: &str) -> Result<&'a str, CatalogError> {
    get(node, key)?
        .as_str()
        .ok_or_else(|| CatalogError::mismatch(key, "a string"))
}

/// Non-negative integer field. Strings holding digits are not accepted.
pub fn get_integer(node: &Node, key: &str) -> Result<u64, CatalogError> {
    get(node, key)?
        .as_u64()
        .ok_or_else(|| CatalogError::mismatch(key, "a non-negative integer"))
}

/// Like [`get_string`], but an absent field is `None` rather than an error
pub fn opt_string<'a>(node: &'a Node, key: &str) -> Result<Option<&'a str>, CatalogError> {
    match node.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| CatalogError::mismatch(key, "a string")),
    }
}
