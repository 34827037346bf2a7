//! Runtime configuration

use std::path::PathBuf;

/// Banner title shown above the menu unless overridden
pub const DEFAULT_TITLE: &str = "Choose an Ubuntu version to install";

/// Everything a run needs, already validated by the CLI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooserConfig {
    /// Destination for the shell-sourceable result
    pub output: PathBuf,
    /// Catalogs in the order their images appear in the menu
    pub inputs: Vec<PathBuf>,
    /// Architecture tag images must carry, e.g. "amd64"
    pub arch: String,
    /// Base URL for catalogs whose item paths are mirror-relative
    pub mirror: Option<String>,
    pub title: String,
}

impl ChooserConfig {
    pub fn new(output: PathBuf, inputs: Vec<PathBuf>) -> Self {
        Self {
            output,
            inputs,
            arch: host_arch().to_string(),
            mirror: None,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Host architecture in Debian naming, as used by catalog `arch` tags
pub fn host_arch() -> &'static str {
    debian_arch(std::env::consts::ARCH)
}

/// Map a Rust target architecture to its Debian name
pub fn debian_arch(rust_arch: &str) -> &str {
    match rust_arch {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "powerpc64" => "ppc64el",
        "arm" => "armhf",
        "x86" => "i386",
        other => other,
    }
}
