use std::fmt;

use crate::glb::{Descriptor, FieldReport, Inspection};

impl fmt::Display for Inspection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "version: {}", self.header.version)?;
		writeln!(f, "total_length: {}", self.header.total_length)?;
		writeln!(f, "json_chunk_length: {}", self.json_chunk.length)?;

		writeln!(f)?;
		write_field(f, &self.nodes, "nodes", "node")?;
		writeln!(f)?;
		write_field(f, &self.meshes, "meshes", "mesh")
	}
}

fn write_field(f: &mut fmt::Formatter<'_>, report: &FieldReport, plural: &str, singular: &str) -> fmt::Result {
	let Some(items) = report.descriptors() else {
		return writeln!(f, "no {plural} field found");
	};

	writeln!(f, "found {} {plural}:", items.len())?;
	for item in items {
		write_descriptor(f, item, singular)?;
	}
	Ok(())
}

fn write_descriptor(f: &mut fmt::Formatter<'_>, item: &Descriptor, singular: &str) -> fmt::Result {
	writeln!(f, "{singular} {}: {}", item.index, item.display_name())?;
	if let Some(extras) = &item.extras {
		writeln!(f, "  extras: {extras}")?;
	}
	Ok(())
}

#[cfg(test)]
mod tests;
