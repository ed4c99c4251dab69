mod bytes;
mod chunk;
mod document;
mod error;
mod header;
mod inspect;
/// Streaming reader and payload limits.
pub mod reader;
mod report;

/// Parsed chunk header.
pub use chunk::ChunkHeader;
/// Metadata document and descriptor extraction.
pub use document::{Descriptor, Document, FieldReport, NAME_PLACEHOLDER};
/// Error and result aliases.
pub use error::{GlbError, Result};
/// Container header representation.
pub use header::GlbHeader;
/// Inspection entry points and output.
pub use inspect::{Inspection, MESHES_FIELD, NODES_FIELD, inspect_path, inspect_reader};
/// Sequential container reader.
pub use reader::GlbReader;
