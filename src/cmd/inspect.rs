use std::path::{Path, PathBuf};

use glbdoc::glb::{Descriptor, FieldReport, Inspection, Result, inspect_path};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Path to a binary glTF (`.glb`) file.
	pub path: PathBuf,
	/// Emit the report as JSON.
	#[arg(long)]
	pub json: bool,
}

/// Print header facts plus node and mesh names of one container.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let inspection = inspect_path(&path)?;

	if json {
		return emit_json(&InspectJson::new(&path, &inspection));
	}

	println!("path: {}", path.display());
	print!("{inspection}");
	Ok(())
}

#[derive(serde::Serialize)]
struct DescriptorJson<'a> {
	index: usize,
	name: &'a str,
	#[serde(skip_serializing_if = "Option::is_none")]
	extras: Option<&'a serde_json::Value>,
}

#[derive(serde::Serialize)]
struct InspectJson<'a> {
	path: String,
	version: u32,
	total_length: u32,
	json_chunk_length: u32,
	nodes: Option<Vec<DescriptorJson<'a>>>,
	meshes: Option<Vec<DescriptorJson<'a>>>,
}

impl<'a> InspectJson<'a> {
	fn new(path: &Path, inspection: &'a Inspection) -> Self {
		Self {
			path: path.display().to_string(),
			version: inspection.header.version,
			total_length: inspection.header.total_length,
			json_chunk_length: inspection.json_chunk.length,
			nodes: field_json(&inspection.nodes),
			meshes: field_json(&inspection.meshes),
		}
	}
}

fn field_json(report: &FieldReport) -> Option<Vec<DescriptorJson<'_>>> {
	report.descriptors().map(|items| items.iter().map(descriptor_json).collect())
}

fn descriptor_json(item: &Descriptor) -> DescriptorJson<'_> {
	DescriptorJson {
		index: item.index,
		name: item.display_name(),
		extras: item.extras.as_ref(),
	}
}
