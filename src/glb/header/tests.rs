use crate::glb::{GlbError, GlbHeader};

fn header_bytes(magic: u32, version: u32, total_length: u32) -> Vec<u8> {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&magic.to_le_bytes());
	bytes.extend_from_slice(&version.to_le_bytes());
	bytes.extend_from_slice(&total_length.to_le_bytes());
	bytes
}

#[test]
fn parses_gltf_header() {
	let header = GlbHeader::parse(&header_bytes(GlbHeader::MAGIC, 2, 1024)).expect("header parses");
	assert_eq!(header.version, 2);
	assert_eq!(header.total_length, 1024);
}

#[test]
fn magic_is_ascii_gltf() {
	assert_eq!(&GlbHeader::MAGIC.to_le_bytes(), b"glTF");
}

#[test]
fn version_and_length_are_not_validated() {
	let header = GlbHeader::parse(&header_bytes(GlbHeader::MAGIC, 99, 0)).expect("any version parses");
	assert_eq!(header.version, 99);
	assert_eq!(header.total_length, 0);
}

#[test]
fn rejects_wrong_magic() {
	let err = GlbHeader::parse(&header_bytes(0x4643_4D4B, 2, 12)).expect_err("wrong magic should fail");
	assert!(matches!(err, GlbError::InvalidFormat { magic: 0x4643_4D4B }));
	assert_eq!(err.to_string(), "not a valid container file");
}

#[test]
fn short_input_is_truncated_header() {
	let err = GlbHeader::parse(b"glTF\x02\x00").expect_err("six bytes cannot hold a header");
	assert!(matches!(
		err,
		GlbError::TruncatedHeader {
			header: "container",
			need: 12,
			have: 6
		}
	));
}
