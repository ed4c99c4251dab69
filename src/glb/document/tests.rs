use serde_json::json;

use crate::glb::{Descriptor, Document, FieldReport, GlbError, NAME_PLACEHOLDER};

fn doc(text: &str) -> Document {
	Document::parse(text.as_bytes()).expect("document parses")
}

#[test]
fn nodes_keep_document_order_and_indices() {
	let document = doc(r#"{"nodes":[{"name":"Root"},{"name":"Arm"},{"name":"Hand"}]}"#);
	let report = document.descriptors("nodes", true).expect("nodes decode");
	let items = report.descriptors().expect("nodes present");

	assert_eq!(items.len(), 3);
	let names: Vec<_> = items.iter().map(|item| (item.index, item.display_name())).collect();
	assert_eq!(names, vec![(0, "Root"), (1, "Arm"), (2, "Hand")]);
}

#[test]
fn missing_name_uses_placeholder() {
	let document = doc(r#"{"meshes":[{"primitives":[]},{"name":"Cube"}]}"#);
	let report = document.descriptors("meshes", false).expect("meshes decode");
	let items = report.descriptors().expect("meshes present");

	assert_eq!(items[0].name, None);
	assert_eq!(items[0].display_name(), NAME_PLACEHOLDER);
	assert_eq!(items[0].display_name(), "N/A");
	assert_eq!(items[1].display_name(), "Cube");
}

#[test]
fn node_extras_round_trip_verbatim() {
	let document = doc(r#"{"nodes":[{"name":"Tulsi","extras":{"foo":1}}]}"#);
	let report = document.descriptors("nodes", true).expect("nodes decode");

	assert_eq!(
		report,
		FieldReport::Present(vec![Descriptor {
			index: 0,
			name: Some("Tulsi".to_owned()),
			extras: Some(json!({"foo": 1})),
		}])
	);
}

#[test]
fn mesh_extras_are_not_collected() {
	let document = doc(r#"{"meshes":[{"name":"Leaf","extras":{"foo":1}}]}"#);
	let report = document.descriptors("meshes", false).expect("meshes decode");

	assert_eq!(report.descriptors().expect("meshes present")[0].extras, None);
}

#[test]
fn absent_fields_are_independent() {
	let document = doc(r#"{"nodes":[{"name":"Only"}]}"#);

	assert!(document.descriptors("nodes", true).expect("nodes decode").descriptors().is_some());
	assert_eq!(document.descriptors("meshes", false).expect("meshes lookup"), FieldReport::Absent);
}

#[test]
fn non_object_root_has_no_fields() {
	let document = doc(r#"["nodes","meshes"]"#);

	assert!(document.field("nodes").is_none());
	assert_eq!(document.descriptors("nodes", true).expect("lookup"), FieldReport::Absent);
}

#[test]
fn non_array_field_is_rejected() {
	let document = doc(r#"{"nodes":{"name":"Root"}}"#);
	let err = document.descriptors("nodes", true).expect_err("object is not a sequence");

	assert!(matches!(
		err,
		GlbError::UnexpectedFieldType {
			field: "nodes",
			expected: "array",
			got: "object"
		}
	));
}

#[test]
fn non_object_elements_and_non_string_names() {
	let document = doc(r#"{"nodes":[7,{"name":42},{"name":null}]}"#);
	let report = document.descriptors("nodes", true).expect("nodes decode");
	let items = report.descriptors().expect("nodes present");

	assert_eq!(items[0].display_name(), NAME_PLACEHOLDER);
	assert_eq!(items[1].display_name(), "42");
	assert_eq!(items[2].display_name(), "null");
}

#[test]
fn malformed_json_is_reported() {
	let err = Document::parse(br#"{"nodes": [}"#).expect_err("syntax error");
	assert!(matches!(err, GlbError::MalformedMetadata(_)));
	assert!(err.to_string().starts_with("malformed metadata: "));
}

#[test]
fn invalid_utf8_is_reported() {
	let err = Document::parse(b"{\"name\":\"\xFF\xFE\"}").expect_err("invalid utf-8");
	assert!(matches!(err, GlbError::MalformedMetadata(_)));
}

#[test]
fn trailing_space_padding_is_accepted() {
	let document = doc("{\"nodes\":[]}   ");
	assert_eq!(document.descriptors("nodes", true).expect("nodes decode"), FieldReport::Present(Vec::new()));
}

#[test]
fn byte_order_mark_is_rejected() {
	let err = Document::parse(b"\xEF\xBB\xBF{\"nodes\":[]}").expect_err("bom is not json");
	assert!(matches!(err, GlbError::MalformedMetadata(_)));
}
