//! Shell-sourceable output for the chosen image
//!
//! The file is meant for the `/bin/sh` `source` built-in:
//!
//! ```text
//! MEDIA_URL="https://releases.ubuntu.com/kinetic/ubuntu-22.10-live-server-amd64.iso"
//! MEDIA_LABEL="Ubuntu Server 22.10 (Kinetic Kudu)"
//! MEDIA_256SUM="<sha256>"
//! MEDIA_SIZE="1642631168"
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::catalog::ImageRecord;
use crate::error::{ChooserError, Result};

/// Render the four assignments. Values are quoted but not escaped.
pub fn render(record: &ImageRecord) -> String {
    format!(
        "MEDIA_URL=\"{}\"\nMEDIA_LABEL=\"{}\"\nMEDIA_256SUM=\"{}\"\nMEDIA_SIZE=\"{}\"\n",
        record.url, record.label, record.checksum, record.size
    )
}

/// Write `record` to `path`, truncating whatever was there
pub fn write(path: &Path, record: &ImageRecord) -> Result<()> {
    let output_error = |source: std::io::Error| ChooserError::Output {
        path: path.to_path_buf(),
        source,
    };

    debug!("selected: {}", record.label);

    let file = File::create(path).map_err(output_error)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render(record).as_bytes())
        .map_err(output_error)?;
    writer.flush().map_err(output_error)?;
    Ok(())
}
