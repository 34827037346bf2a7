use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{self, ChooserConfig};

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// iso-chooser: pick an installer ISO to chain-boot
#[derive(Parser, Debug)]
#[command(name = "iso-chooser")]
#[command(version)]
#[command(about = "Pick an installer ISO to chain-boot")]
#[command(
    long_about = "Reads SimpleStreams catalogs, offers the newest ISO from each in a menu, and writes the chosen ISO as MEDIA_* shell variables."
)]
pub struct Cli {
    /// File receiving the MEDIA_* assignments for the chosen image
    pub output: PathBuf,

    /// SimpleStreams catalogs, in the order their images are listed
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Architecture to look for (defaults to the host, e.g. amd64)
    #[arg(long)]
    pub arch: Option<String>,

    /// Base URL joined onto relative image paths
    #[arg(long, value_name = "URL")]
    pub mirror: Option<String>,

    /// Banner title
    #[arg(long, default_value = config::DEFAULT_TITLE)]
    pub title: String,

    /// Set log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Runtime configuration derived from the arguments
    pub fn config(&self) -> ChooserConfig {
        let mut config = ChooserConfig::new(self.output.clone(), self.inputs.clone());
        if let Some(arch) = &self.arch {
            config.arch = arch.clone();
        }
        config.mirror = self.mirror.clone();
        config.title = self.title.clone();
        config
    }
}
