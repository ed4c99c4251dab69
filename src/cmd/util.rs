use std::io::{self, Write};

use glbdoc::glb::Result;

/// Write `value` to stdout as pretty JSON followed by a newline.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T) -> Result<()> {
	let stdout = io::stdout();
	let mut out = stdout.lock();
	serde_json::to_writer_pretty(&mut out, value).map_err(io::Error::from)?;
	writeln!(out)?;
	Ok(())
}
