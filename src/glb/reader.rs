use std::io::Read;

use crate::glb::{ChunkHeader, GlbError, GlbHeader, Result};

/// Largest JSON chunk payload accepted before allocation.
pub const MAX_JSON_CHUNK_BYTES: usize = 256 * 1024 * 1024;

const READ_CAPACITY_HINT: usize = 64 * 1024;

/// Sequential GLB reader over any byte stream.
///
/// Every read is bounded by the size the format declares, so nothing past the
/// structure being decoded is consumed from `inner`. Short reads surface as
/// truncation errors rather than raw IO errors.
pub struct GlbReader<R> {
	inner: R,
	offset: u64,
}

impl<R: Read> GlbReader<R> {
	/// Wrap a stream positioned at the start of a container.
	pub fn new(inner: R) -> Self {
		Self { inner, offset: 0 }
	}

	/// Return the number of bytes consumed so far.
	pub fn offset(&self) -> u64 {
		self.offset
	}

	/// Read and validate the 12-byte container header.
	pub fn read_header(&mut self) -> Result<GlbHeader> {
		let raw = self.read_up_to(GlbHeader::SIZE)?;
		GlbHeader::parse(&raw)
	}

	/// Read the next 8-byte chunk header.
	pub fn read_chunk_header(&mut self) -> Result<ChunkHeader> {
		let raw = self.read_up_to(ChunkHeader::SIZE)?;
		ChunkHeader::parse(&raw)
	}

	/// Read exactly the payload declared by `head`.
	pub fn read_chunk_payload(&mut self, head: &ChunkHeader) -> Result<Vec<u8>> {
		let need = usize::try_from(head.length)
			.ok()
			.filter(|len| *len <= MAX_JSON_CHUNK_BYTES)
			.ok_or(GlbError::ChunkTooLarge {
				len: head.length,
				limit: MAX_JSON_CHUNK_BYTES,
			})?;

		let at = self.offset;
		let payload = self.read_up_to(need)?;
		if payload.len() < need {
			return Err(GlbError::TruncatedChunk {
				at,
				need,
				have: payload.len(),
			});
		}

		Ok(payload)
	}

	fn read_up_to(&mut self, n: usize) -> Result<Vec<u8>> {
		let mut out = Vec::with_capacity(n.min(READ_CAPACITY_HINT));
		let read = (&mut self.inner).take(n as u64).read_to_end(&mut out)?;
		self.offset += read as u64;
		Ok(out)
	}
}
