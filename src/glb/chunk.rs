use crate::glb::bytes::Cursor;
use crate::glb::{GlbError, Result};

/// Parsed 8-byte chunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
	/// Declared payload length in bytes.
	pub length: u32,
	/// Four-byte type tag read as a little-endian `u32`.
	pub chunk_type: u32,
}

impl ChunkHeader {
	/// Fixed chunk header size in bytes.
	pub const SIZE: usize = 8;
	/// ASCII `JSON`: structured metadata chunk.
	pub const JSON: u32 = 0x4E4F_534A;
	/// ASCII `BIN\0`: binary buffer chunk.
	pub const BIN: u32 = 0x004E_4942;

	/// Parse a chunk header from exactly [`Self::SIZE`] bytes.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		if bytes.len() < Self::SIZE {
			return Err(GlbError::TruncatedHeader {
				header: "chunk",
				need: Self::SIZE,
				have: bytes.len(),
			});
		}

		let mut cursor = Cursor::new(bytes);
		let length = cursor.read_u32_le()?;
		let chunk_type = cursor.read_u32_le()?;

		Ok(Self { length, chunk_type })
	}

	/// Return whether this is the JSON metadata chunk.
	pub fn is_json(&self) -> bool {
		self.chunk_type == Self::JSON
	}

	/// Render the type tag as a printable label (`JSON`, `BIN`, ...).
	pub fn type_label(&self) -> String {
		let mut out = String::new();
		for byte in self.chunk_type.to_le_bytes() {
			if byte == 0 {
				continue;
			}
			if byte.is_ascii_graphic() || byte == b' ' {
				out.push(char::from(byte));
			} else {
				out.push('.');
			}
		}
		if out.is_empty() { "....".to_owned() } else { out }
	}
}
