//! Interface declaration emission.

use crate::{generator::type_mapper::map_type, spec::Schema};

/// Emits one complete `export interface` block for a named schema.
///
/// Descriptions become `/** ... */` comments, one ` * ` line per input
/// line. Members appear in property order with a `?` marker when the name
/// is absent from the schema's `required` set. A schema without properties
/// produces an empty declaration body.
pub(crate) fn emit_interface(name: &str, schema: &Schema) -> String {
  let mut out = String::new();

  if let Some(description) = schema.description.as_deref()
    && !description.is_empty()
  {
    push_doc_comment(&mut out, description, "");
  }

  out.push_str("export interface ");
  out.push_str(name);
  out.push_str(" {\n");

  for (prop_name, prop_schema) in &schema.properties {
    let required = schema.required.iter().any(|field| field == prop_name);

    if let Some(description) = prop_schema.description.as_deref()
      && !description.is_empty()
    {
      push_doc_comment(&mut out, description, "  ");
    }

    let marker = if required { "" } else { "?" };
    out.push_str(&format!("  {prop_name}{marker}: {};\n", map_type(prop_schema)));
  }

  out.push_str("}\n");
  out
}

fn push_doc_comment(out: &mut String, text: &str, indent: &str) {
  out.push_str(indent);
  out.push_str("/**\n");
  for line in text.lines() {
    out.push_str(indent);
    if line.is_empty() {
      out.push_str(" *\n");
    } else {
      out.push_str(&format!(" * {line}\n"));
    }
  }
  out.push_str(indent);
  out.push_str(" */\n");
}
