use crate::glb::bytes::Cursor;
use crate::glb::{GlbError, Result};

/// Parsed 12-byte GLB container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlbHeader {
	/// Container format version. Informational, never validated.
	pub version: u32,
	/// Declared total file length in bytes. Informational, never validated.
	pub total_length: u32,
}

impl GlbHeader {
	/// Fixed header size in bytes.
	pub const SIZE: usize = 12;
	/// ASCII `glTF` read as a little-endian `u32`.
	pub const MAGIC: u32 = 0x4654_6C67;

	/// Parse the container header from the first bytes of a file.
	///
	/// `bytes` shorter than [`Self::SIZE`] is a truncated header; a magic
	/// mismatch is [`GlbError::InvalidFormat`].
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		if bytes.len() < Self::SIZE {
			return Err(GlbError::TruncatedHeader {
				header: "container",
				need: Self::SIZE,
				have: bytes.len(),
			});
		}

		let mut cursor = Cursor::new(bytes);
		let magic = cursor.read_u32_le()?;
		if magic != Self::MAGIC {
			return Err(GlbError::InvalidFormat { magic });
		}

		let version = cursor.read_u32_le()?;
		let total_length = cursor.read_u32_le()?;

		Ok(Self { version, total_length })
	}
}

#[cfg(test)]
mod tests;
