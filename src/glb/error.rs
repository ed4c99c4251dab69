use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, GlbError>;

/// Errors produced while reading and inspecting `.glb` containers.
#[derive(Debug, Error)]
pub enum GlbError {
	/// Filesystem or stream IO failure other than a short read.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Leading magic is not `glTF`.
	#[error("not a valid container file")]
	InvalidFormat {
		/// Magic value read from offset 0.
		magic: u32,
	},
	/// First chunk is not the JSON metadata chunk.
	#[error("first chunk is not metadata")]
	UnexpectedChunkType {
		/// Chunk type tag read from the first chunk header.
		chunk_type: u32,
	},
	/// Stream ended inside a fixed-size header.
	#[error("truncated {header} header: need {need} bytes, have {have}")]
	TruncatedHeader {
		/// Which header was being read (`container` or `chunk`).
		header: &'static str,
		/// Header size in bytes.
		need: usize,
		/// Bytes actually available.
		have: usize,
	},
	/// Stream ended before the declared chunk payload length.
	#[error("truncated chunk at offset {at}: need {need} bytes, have {have}")]
	TruncatedChunk {
		/// Stream offset of the chunk payload.
		at: u64,
		/// Declared payload length.
		need: usize,
		/// Bytes actually available.
		have: usize,
	},
	/// Declared chunk length exceeds the payload safety limit.
	#[error("chunk length {len} exceeds limit {limit} bytes")]
	ChunkTooLarge {
		/// Declared payload length.
		len: u32,
		/// Maximum accepted payload length.
		limit: usize,
	},
	/// JSON chunk payload is not valid UTF-8 JSON.
	#[error("malformed metadata: {0}")]
	MalformedMetadata(#[source] serde_json::Error),
	/// A top-level descriptor field has the wrong JSON kind.
	#[error("field {field} expected {expected}, got {got}")]
	UnexpectedFieldType {
		/// Top-level field name.
		field: &'static str,
		/// Expected JSON kind.
		expected: &'static str,
		/// Actual JSON kind.
		got: &'static str,
	},
	/// Not enough bytes remained in a fixed buffer for a requested read.
	///
	/// Header parsers check their length up front and report
	/// [`GlbError::TruncatedHeader`] instead; only direct cursor use sees this.
	#[doc(hidden)]
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
}
