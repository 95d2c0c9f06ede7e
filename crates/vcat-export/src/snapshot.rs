//! JSON snapshot of the normalized catalog.
//!
//! A pretty-printed array of canonical records, useful as an
//! intermediate structured document for diffing runs or feeding other
//! tools without re-scraping.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use vcat_core::CanonicalProduct;

use crate::error::ExportError;

/// Writes the catalog as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`ExportError`] on I/O or serialization failure.
pub fn write_json_snapshot(path: &Path, products: &[CanonicalProduct]) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, products)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
