//! Downstream sinks for the canonical record stream.
//!
//! Exporters consume `&[CanonicalProduct]` untouched; field names and
//! types are guaranteed by `vcat-core`. Nothing here feeds back into the
//! extraction pipeline.

pub mod error;
pub mod snapshot;
pub mod tabular;

pub use error::ExportError;
pub use snapshot::write_json_snapshot;
pub use tabular::{write_csv, write_sheets_csv};
