//! Pipeline driver: one string in, one string out.

use itertools::Itertools;

use crate::{
  error::ConvertError,
  generator::{emitter::emit_interface, registry::SchemaRegistry},
  parser::parse_spec,
};

const EMPTY_INPUT_PROMPT: &str =
  "// Please paste your OpenAPI/Swagger spec in the input area and click \"Generate\".";

/// Converts OpenAPI/Swagger document text into TypeScript interface
/// declarations.
///
/// Never panics and never returns an error value: every failure folds into
/// a single `// Error: ...` comment line, and blank input returns a fixed
/// instructional comment. The call is pure, so identical input yields
/// byte-identical output.
#[must_use]
pub fn generate_interfaces(spec_content: &str) -> String {
  if spec_content.trim().is_empty() {
    return EMPTY_INPUT_PROMPT.to_string();
  }

  match convert(spec_content) {
    Ok(output) => output,
    Err(error) => format!("// Error: {error}"),
  }
}

fn convert(spec_content: &str) -> Result<String, ConvertError> {
  let mut spec = parse_spec(spec_content)?;
  let registry = SchemaRegistry::collect(&mut spec);

  if registry.is_empty() {
    return Err(ConvertError::NoSchemas);
  }

  Ok(
    registry
      .iter()
      .map(|(name, schema)| emit_interface(name, schema))
      .join("\n"),
  )
}
