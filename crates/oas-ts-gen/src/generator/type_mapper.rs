//! Schema-to-TypeScript type expression mapping.

use itertools::Itertools;

use crate::spec::{EnumValue, Schema, SchemaType};

/// The opaque fallback for anything the mapper cannot name.
pub(crate) const OPAQUE_TYPE: &str = "any";

/// Maps one schema node to a TypeScript type expression.
///
/// Total: always returns at least [`OPAQUE_TYPE`]. Precedence is reference,
/// then enum, then the `type` keyword. Object-typed nodes flatten to an
/// open string-keyed mapping; only top-level registry entries become named
/// interfaces.
pub(crate) fn map_type(schema: &Schema) -> String {
  if let Some(ref_path) = &schema.ref_path {
    let name = ref_path.rsplit('/').next().unwrap_or_default();
    if name.is_empty() {
      return OPAQUE_TYPE.to_string();
    }
    return name.to_string();
  }

  if let Some(values) = &schema.enum_values {
    return values.iter().map(literal).join(" | ");
  }

  match schema.schema_type {
    Some(SchemaType::String) => "string".to_string(),
    Some(SchemaType::Number | SchemaType::Integer) => "number".to_string(),
    Some(SchemaType::Boolean) => "boolean".to_string(),
    Some(SchemaType::Array) => match &schema.items {
      Some(items) => format!("{}[]", map_type(items)),
      None => "any[]".to_string(),
    },
    Some(SchemaType::Object) => "Record<string, any>".to_string(),
    Some(SchemaType::Unknown) | None => OPAQUE_TYPE.to_string(),
  }
}

fn literal(value: &EnumValue) -> String {
  match value {
    EnumValue::String(s) => format!("'{s}'"),
    EnumValue::Number(n) => n.to_string(),
    EnumValue::Other(v) => v.to_string(),
  }
}
