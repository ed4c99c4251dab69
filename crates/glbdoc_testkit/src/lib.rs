//! Shared test helpers for building synthetic `.glb` containers.

use std::fs;
use std::path::{Path, PathBuf};

/// ASCII `glTF` container magic.
pub const GLB_MAGIC: u32 = 0x4654_6C67;
/// ASCII `JSON` chunk type.
pub const JSON_CHUNK: u32 = 0x4E4F_534A;
/// ASCII `BIN\0` chunk type.
pub const BIN_CHUNK: u32 = 0x004E_4942;

/// Byte-level builder for GLB containers, including deliberately broken ones.
#[derive(Debug, Clone)]
pub struct GlbBuilder {
	magic: u32,
	version: u32,
	total_length: Option<u32>,
	body: Vec<u8>,
}

impl Default for GlbBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl GlbBuilder {
	/// Start a version 2 container with the correct magic and no chunks.
	pub fn new() -> Self {
		Self {
			magic: GLB_MAGIC,
			version: 2,
			total_length: None,
			body: Vec::new(),
		}
	}

	/// Override the header magic.
	pub fn magic(mut self, magic: u32) -> Self {
		self.magic = magic;
		self
	}

	/// Override the header version.
	pub fn version(mut self, version: u32) -> Self {
		self.version = version;
		self
	}

	/// Override the declared total length (defaults to the built size).
	pub fn total_length(mut self, total_length: u32) -> Self {
		self.total_length = Some(total_length);
		self
	}

	/// Append a JSON chunk, space-padded to a 4-byte boundary.
	pub fn json_chunk(self, json: &str) -> Self {
		let mut payload = json.as_bytes().to_vec();
		pad_to_4(&mut payload, b' ');
		self.chunk(JSON_CHUNK, &payload)
	}

	/// Append a BIN chunk, zero-padded to a 4-byte boundary.
	pub fn bin_chunk(self, data: &[u8]) -> Self {
		let mut payload = data.to_vec();
		pad_to_4(&mut payload, 0);
		self.chunk(BIN_CHUNK, &payload)
	}

	/// Append a chunk whose declared length matches `payload`.
	pub fn chunk(self, chunk_type: u32, payload: &[u8]) -> Self {
		let len = u32::try_from(payload.len()).expect("test payload fits u32");
		self.raw_chunk(chunk_type, len, payload)
	}

	/// Append a chunk header declaring `declared_len`, followed by `payload` as-is.
	pub fn raw_chunk(mut self, chunk_type: u32, declared_len: u32, payload: &[u8]) -> Self {
		self.body.extend_from_slice(&declared_len.to_le_bytes());
		self.body.extend_from_slice(&chunk_type.to_le_bytes());
		self.body.extend_from_slice(payload);
		self
	}

	/// Append arbitrary trailing bytes.
	pub fn raw_bytes(mut self, bytes: &[u8]) -> Self {
		self.body.extend_from_slice(bytes);
		self
	}

	/// Produce the container bytes.
	pub fn build(self) -> Vec<u8> {
		let size = u32::try_from(12 + self.body.len()).expect("test container fits u32");
		let mut out = Vec::with_capacity(12 + self.body.len());
		out.extend_from_slice(&self.magic.to_le_bytes());
		out.extend_from_slice(&self.version.to_le_bytes());
		out.extend_from_slice(&self.total_length.unwrap_or(size).to_le_bytes());
		out.extend_from_slice(&self.body);
		out
	}
}

/// Write `bytes` to `dir/name` and return the full path.
pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
	let path = dir.join(name);
	fs::write(&path, bytes).expect("fixture writes");
	path
}

fn pad_to_4(payload: &mut Vec<u8>, fill: u8) {
	while payload.len() % 4 != 0 {
		payload.push(fill);
	}
}
