//! Image catalog handling
//!
//! Parses SimpleStreams-style catalogs and resolves the newest installable
//! image each one describes.

mod choices;
mod models;
mod select;
pub mod tree;

pub use models::{ChoiceList, ImageRecord};
pub use select::{select_newest, select_newest_from_mirror, SelectionError, IMAGE_FTYPE};
pub use tree::{parse, CatalogError, CatalogTree};
