//! Newest image selection
//!
//! Resolves the most recent installable image for one architecture out of
//! a parsed catalog.

use thiserror::Error;
use tracing::debug;

use super::models::ImageRecord;
use super::tree::{self, CatalogError, CatalogTree, Node};

/// `ftype` of the item holding the complete installable image
pub const IMAGE_FTYPE: &str = "iso";

#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("no product for architecture `{arch}`")]
    NoMatchingProduct { arch: String },

    #[error("product `{product}` has no versions")]
    NoVersions { product: String },

    #[error("version `{version}` of product `{product}` has no `iso` item")]
    NoImage { product: String, version: String },

    #[error("image path `{path}` of product `{product}` is relative and no mirror was given")]
    RelativePath { product: String, path: String },

    #[error("product `{product}`: {source}")]
    Field {
        product: String,
        #[source]
        source: CatalogError,
    },
}

/// Find the newest image for `target_arch`.
///
/// When several products carry the requested architecture, the first one in
/// document order is resolved and the rest are ignored. Within that product
/// the greatest version key wins; version keys are zero-padded dates, so
/// string order is chronological order.
///
/// Item paths must already be absolute URLs; see [`select_newest_from_mirror`]
/// for catalogs that use mirror-relative paths.
pub fn select_newest(tree: &CatalogTree, target_arch: &str) -> Result<ImageRecord, SelectionError> {
    select(tree, target_arch, None)
}

/// Like [`select_newest`], but relative item paths are joined onto `mirror`
pub fn select_newest_from_mirror(
    tree: &CatalogTree,
    target_arch: &str,
    mirror: &str,
) -> Result<ImageRecord, SelectionError> {
    select(tree, target_arch, Some(mirror))
}

fn select(
    tree: &CatalogTree,
    target_arch: &str,
    mirror: Option<&str>,
) -> Result<ImageRecord, SelectionError> {
    let products = tree.products()?;

    let mut candidates = products
        .iter()
        .filter(|(id, product)| matches_arch(id, product, target_arch));

    let (product_id, product) =
        candidates
            .next()
            .ok_or_else(|| SelectionError::NoMatchingProduct {
                arch: target_arch.to_string(),
            })?;

    let ignored = candidates.count();
    if ignored > 0 {
        debug!(
            product = %product_id,
            ignored,
            "Several products match {}, using the first", target_arch
        );
    }

    resolve_product(product_id, product, mirror)
}

fn matches_arch(product_id: &str, product: &Node, target_arch: &str) -> bool {
    match tree::get_string(product, "arch") {
        Ok(arch) => arch == target_arch,
        Err(e) => {
            debug!(product = %product_id, "Skipping product: {}", e);
            false
        }
    }
}

fn resolve_product(
    product_id: &str,
    product: &Node,
    mirror: Option<&str>,
) -> Result<ImageRecord, SelectionError> {
    let field = |source: CatalogError| SelectionError::Field {
        product: product_id.to_string(),
        source,
    };

    let versions = tree::get_mapping(product, "versions").map_err(field)?;
    let (version_key, version) = versions
        .iter()
        .max_by(|a, b| a.0.cmp(b.0))
        .ok_or_else(|| SelectionError::NoVersions {
            product: product_id.to_string(),
        })?;

    debug!(product = %product_id, version = %version_key, "Newest version");

    let items = tree::get_mapping(version, "items").map_err(field)?;
    let mut image = None;
    for item in items.values() {
        if tree::get_string(item, "ftype").map_err(field)? == IMAGE_FTYPE {
            image = Some(item);
            break;
        }
    }
    let item = image.ok_or_else(|| SelectionError::NoImage {
        product: product_id.to_string(),
        version: version_key.to_string(),
    })?;

    let path = tree::get_string(item, "path").map_err(field)?;
    let url = image_url(path, mirror).ok_or_else(|| SelectionError::RelativePath {
        product: product_id.to_string(),
        path: path.to_string(),
    })?;

    Ok(ImageRecord {
        label: synthesize_label(product_id, product, version_key).map_err(field)?,
        url,
        checksum: tree::get_string(item, "sha256").map_err(field)?.to_string(),
        size: tree::get_integer(item, "size").map_err(field)?,
    })
}

/// Absolute URLs pass through. Relative paths need a mirror to hang off.
fn image_url(path: &str, mirror: Option<&str>) -> Option<String> {
    if path.contains("://") {
        return Some(path.to_string());
    }
    let mirror = mirror?;
    debug!("Joining {} onto mirror {}", path, mirror);
    Some(format!(
        "{}/{}",
        mirror.trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}

/// "Ubuntu Server 22.10 (Kinetic Kudu)" style label
fn synthesize_label(
    product_id: &str,
    product: &Node,
    version_key: &str,
) -> Result<String, CatalogError> {
    let name = match tree::opt_string(product, "os")? {
        Some(os) => display_name(os),
        None => product_id.to_string(),
    };

    let release = match tree::opt_string(product, "release_title")? {
        Some(title) => title,
        None => tree::opt_string(product, "release")?.unwrap_or(version_key),
    };

    let mut label = format!("{} {}", name, release);
    if let Some(codename) = tree::opt_string(product, "release_codename")? {
        label.push_str(&format!(" ({})", codename));
    }
    Ok(label)
}

/// `ubuntu-server` -> `Ubuntu Server`
fn display_name(os: &str) -> String {
    os.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
