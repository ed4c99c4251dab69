use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::glb::{ChunkHeader, Document, FieldReport, GlbError, GlbHeader, GlbReader, Result};

/// Top-level field listing scene nodes.
pub const NODES_FIELD: &str = "nodes";
/// Top-level field listing meshes.
pub const MESHES_FIELD: &str = "meshes";

/// Structural summary of one container.
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
	/// Container header.
	pub header: GlbHeader,
	/// Header of the first (JSON) chunk.
	pub json_chunk: ChunkHeader,
	/// Nodes found in the metadata document.
	pub nodes: FieldReport,
	/// Meshes found in the metadata document.
	pub meshes: FieldReport,
}

/// Open `path` and inspect it.
pub fn inspect_path(path: impl AsRef<Path>) -> Result<Inspection> {
	let path = path.as_ref();
	debug!(path = %path.display(), "inspecting");
	let file = File::open(path)?;
	inspect_reader(BufReader::new(file))
}

/// Inspect a container from a stream positioned at its first byte.
///
/// Only the header, the first chunk header, and (when it is JSON) the first
/// chunk payload are consumed.
pub fn inspect_reader<R: Read>(reader: R) -> Result<Inspection> {
	let mut reader = GlbReader::new(reader);

	let header = reader.read_header().inspect_err(|err| {
		if let GlbError::InvalidFormat { magic } = err {
			warn!(magic = format_args!("0x{magic:08x}"), "rejected container magic");
		}
	})?;
	debug!(version = header.version, total_length = header.total_length, "container header");

	let json_chunk = reader.read_chunk_header()?;
	debug!(length = json_chunk.length, chunk_type = %json_chunk.type_label(), "first chunk");
	if !json_chunk.is_json() {
		warn!(chunk_type = %json_chunk.type_label(), "first chunk is not JSON");
		return Err(GlbError::UnexpectedChunkType {
			chunk_type: json_chunk.chunk_type,
		});
	}

	let payload = reader.read_chunk_payload(&json_chunk)?;
	let document = Document::parse(&payload)?;

	let nodes = document.descriptors(NODES_FIELD, true)?;
	let meshes = document.descriptors(MESHES_FIELD, false)?;

	Ok(Inspection {
		header,
		json_chunk,
		nodes,
		meshes,
	})
}
