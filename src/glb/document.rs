use serde_json::Value;
use tracing::debug;

use crate::glb::{GlbError, Result};

/// Name printed for descriptors without a `name` field.
pub const NAME_PLACEHOLDER: &str = "N/A";

/// Decoded JSON metadata chunk, kept as a generic tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
	root: Value,
}

impl Document {
	/// Decode a UTF-8 JSON payload.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let root = serde_json::from_slice(bytes).map_err(GlbError::MalformedMetadata)?;
		Ok(Self { root })
	}

	/// Look up a top-level field. A non-object root has no fields.
	pub fn field(&self, name: &str) -> Option<&Value> {
		self.root.as_object()?.get(name)
	}

	/// Collect the descriptors of the top-level sequence `field`.
	///
	/// With `keep_extras`, each descriptor also carries its `extras` value.
	pub fn descriptors(&self, field: &'static str, keep_extras: bool) -> Result<FieldReport> {
		let Some(value) = self.field(field) else {
			debug!(field, "descriptor field absent");
			return Ok(FieldReport::Absent);
		};

		let items = value.as_array().ok_or(GlbError::UnexpectedFieldType {
			field,
			expected: "array",
			got: value_kind(value),
		})?;
		debug!(field, count = items.len(), "descriptor field");

		let descriptors = items
			.iter()
			.enumerate()
			.map(|(index, item)| Descriptor::from_value(index, item, keep_extras))
			.collect();
		Ok(FieldReport::Present(descriptors))
	}
}

/// Outcome of looking up one top-level descriptor sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldReport {
	/// Field is not present in the document.
	Absent,
	/// Field is present; descriptors in document order.
	Present(Vec<Descriptor>),
}

impl FieldReport {
	/// Return descriptors when the field was present.
	pub fn descriptors(&self) -> Option<&[Descriptor]> {
		match self {
			Self::Absent => None,
			Self::Present(items) => Some(items),
		}
	}
}

/// One node or mesh entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
	/// Position in the source sequence.
	pub index: usize,
	/// `name` field; non-string names are kept as compact JSON text.
	pub name: Option<String>,
	/// `extras` field, passed through untouched.
	pub extras: Option<Value>,
}

impl Descriptor {
	fn from_value(index: usize, value: &Value, keep_extras: bool) -> Self {
		let object = value.as_object();
		let name = object.and_then(|map| map.get("name")).map(|name| match name {
			Value::String(text) => text.clone(),
			other => other.to_string(),
		});
		let extras = if keep_extras { object.and_then(|map| map.get("extras")).cloned() } else { None };

		Self { index, name, extras }
	}

	/// Return the name, or [`NAME_PLACEHOLDER`] when absent.
	pub fn display_name(&self) -> &str {
		self.name.as_deref().unwrap_or(NAME_PLACEHOLDER)
	}
}

fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

#[cfg(test)]
mod tests;
