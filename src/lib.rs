pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use error::{ChooserError, Result};
