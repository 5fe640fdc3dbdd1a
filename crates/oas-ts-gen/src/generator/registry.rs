//! Flat schema registry with inline request-body lifting.

use indexmap::IndexMap;

use crate::{
  generator::naming::name_from_path,
  spec::{Schema, Spec},
};

const V3_REF_PREFIX: &str = "#/components/schemas/";
const LEGACY_REF_PREFIX: &str = "#/definitions/";

/// The flat name-to-schema mapping the emitter iterates over.
///
/// Entries keep document order: declared schemas first, then lifted
/// request-body schemas in path/method/media-type order. Re-inserting an
/// existing name overwrites its schema in place without moving it.
#[derive(Debug, Default)]
pub(crate) struct SchemaRegistry {
  schemas: IndexMap<String, Schema>,
}

impl SchemaRegistry {
  /// Builds the registry from a document, lifting inline request bodies.
  ///
  /// The seed is the document's own declared registry: `components.schemas`
  /// when present, else the legacy `definitions`, never both. Every
  /// non-reference request-body schema is then moved into the registry
  /// under a name synthesized from its path template, and its place in the
  /// document is rewritten to a reference using the version-appropriate
  /// prefix. Name collisions silently overwrite, later occurrence wins.
  ///
  /// Response bodies are not inspected.
  pub(crate) fn collect(spec: &mut Spec) -> Self {
    let mut schemas = spec
      .components
      .as_ref()
      .and_then(|components| components.schemas.as_ref())
      .or(spec.definitions.as_ref())
      .cloned()
      .unwrap_or_default();

    let ref_prefix = if spec.is_v3() { V3_REF_PREFIX } else { LEGACY_REF_PREFIX };

    let Some(paths) = spec.paths.as_mut() else {
      return Self { schemas };
    };

    for (path, path_item) in paths.iter_mut() {
      for (_, operation) in path_item.operations_mut() {
        let Some(request_body) = operation.request_body.as_mut() else {
          continue;
        };
        for media_type in request_body.content.values_mut() {
          let Some(schema) = media_type.schema.as_mut() else {
            continue;
          };
          if schema.ref_path.is_some() {
            continue;
          }

          let name = name_from_path(path);
          let lifted = std::mem::replace(schema, Schema::reference(format!("{ref_prefix}{name}")));
          schemas.insert(name, lifted);
        }
      }
    }

    Self { schemas }
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.schemas.is_empty()
  }

  pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
    self.schemas.iter().map(|(name, schema)| (name.as_str(), schema))
  }

  #[cfg(test)]
  pub(crate) fn get(&self, name: &str) -> Option<&Schema> {
    self.schemas.get(name)
  }
}
