//! Menu choice aggregation

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::models::{ChoiceList, ImageRecord};
use super::select::{select_newest, select_newest_from_mirror};
use super::tree;
use crate::error::{ChooserError, Result};

impl ChoiceList {
    /// Resolve one image per catalog, keeping input order.
    ///
    /// The first catalog that fails to read, parse or yield an image aborts
    /// the whole build; a list with missing entries is never produced.
    /// Relative image paths are joined onto `mirror` when one is given.
    pub fn build<P: AsRef<Path>>(
        paths: &[P],
        target_arch: &str,
        mirror: Option<&str>,
    ) -> Result<ChoiceList> {
        if paths.is_empty() {
            return Err(ChooserError::NoCatalogs);
        }

        let records = paths
            .iter()
            .map(|path| resolve_catalog(path.as_ref(), target_arch, mirror))
            .collect::<Result<Vec<ImageRecord>>>()?;

        info!("Resolved {} image(s) for {}", records.len(), target_arch);
        Ok(ChoiceList::from(records))
    }
}

fn resolve_catalog(path: &Path, target_arch: &str, mirror: Option<&str>) -> Result<ImageRecord> {
    debug!("Reading catalog {}", path.display());

    let text = std::fs::read_to_string(path).map_err(|source| ChooserError::CatalogRead {
        path: PathBuf::from(path),
        source,
    })?;

    let catalog = tree::parse(&text).map_err(|source| ChooserError::Catalog {
        path: PathBuf::from(path),
        source,
    })?;

    let selected = match mirror {
        Some(mirror) => select_newest_from_mirror(&catalog, target_arch, mirror),
        None => select_newest(&catalog, target_arch),
    };
    let record = selected.map_err(|source| ChooserError::Selection {
        path: PathBuf::from(path),
        source,
    })?;

    debug!(url = %record.url, "{}: {}", path.display(), record.label);
    Ok(record)
}
