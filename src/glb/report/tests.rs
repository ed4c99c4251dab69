use std::io::Cursor;

use glbdoc_testkit::GlbBuilder;

use crate::glb::inspect_reader;

fn render(json: &str) -> String {
	let bytes = GlbBuilder::new().json_chunk(json).build();
	let inspection = inspect_reader(Cursor::new(bytes)).expect("inspection succeeds");
	inspection.to_string()
}

#[test]
fn renders_nodes_extras_and_meshes() {
	let json = r#"{"nodes":[{"name":"Root","extras":{"foo":1}},{}],"meshes":[{"name":"Cube"}]}"#;
	let text = render(json);
	let padded_len = json.len().div_ceil(4) * 4;
	let total = 12 + 8 + padded_len;

	let expected = format!(
		"version: 2\n\
		 total_length: {total}\n\
		 json_chunk_length: {padded_len}\n\
		 \n\
		 found 2 nodes:\n\
		 node 0: Root\n\
		 \x20 extras: {{\"foo\":1}}\n\
		 node 1: N/A\n\
		 \n\
		 found 1 meshes:\n\
		 mesh 0: Cube\n"
	);
	assert_eq!(text, expected);
}

#[test]
fn renders_absent_fields() {
	let text = render(r#"{"asset":{"version":"2.0"}}"#);

	assert!(text.contains("\nno nodes field found\n"));
	assert!(text.ends_with("\nno meshes field found\n"));
}

#[test]
fn absent_meshes_do_not_hide_nodes() {
	let text = render(r#"{"nodes":[{"name":"A"},{"name":"B"}]}"#);

	assert!(text.contains("found 2 nodes:\nnode 0: A\nnode 1: B\n"));
	assert!(text.contains("no meshes field found"));
}

#[test]
fn empty_sequences_report_zero() {
	let text = render(r#"{"nodes":[],"meshes":[]}"#);

	assert!(text.contains("found 0 nodes:\n"));
	assert!(text.contains("found 0 meshes:\n"));
}
