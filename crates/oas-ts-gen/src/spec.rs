//! Data model for OpenAPI/Swagger documents.
//!
//! Every field an input document may or may not carry is optional or
//! defaulted, and field deserialization is lenient: a wrong-shaped value
//! degrades to the field's fallback instead of failing the parse, so the
//! opaque type surfaces downstream exactly where the bad field sat. Maps
//! that feed emitted output preserve document order.

use std::fmt;

use indexmap::IndexMap;
use serde::{
  Deserialize, Deserializer,
  de::{DeserializeOwned, IgnoredAny, MapAccess, Visitor},
};

/// Swallows shape mismatches into the field's default.
///
/// The value is buffered first so a failed attempt cannot leave the
/// underlying deserializer mid-stream.
fn lenient<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
  T: DeserializeOwned + Default,
  D: Deserializer<'de>,
{
  let value = serde_json::Value::deserialize(deserializer)?;
  Ok(T::deserialize(value).unwrap_or_default())
}

/// Lenient string-keyed map: a non-map value yields an empty map, and each
/// wrong-shaped entry degrades to the entry type's default.
fn lenient_map<'de, T, D>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
  T: DeserializeOwned + Default,
  D: Deserializer<'de>,
{
  let value = serde_json::Value::deserialize(deserializer)?;
  let serde_json::Value::Object(entries) = value else {
    return Ok(IndexMap::new());
  };
  Ok(
    entries
      .into_iter()
      .map(|(key, value)| (key, T::deserialize(value).unwrap_or_default()))
      .collect(),
  )
}

/// Like [`lenient_map`] but a non-map value means "absent", keeping the
/// present-but-empty / absent distinction the registry seeding relies on.
fn lenient_opt_map<'de, T, D>(deserializer: D) -> Result<Option<IndexMap<String, T>>, D::Error>
where
  T: DeserializeOwned + Default,
  D: Deserializer<'de>,
{
  let value = serde_json::Value::deserialize(deserializer)?;
  let serde_json::Value::Object(entries) = value else {
    return Ok(None);
  };
  Ok(Some(
    entries
      .into_iter()
      .map(|(key, value)| (key, T::deserialize(value).unwrap_or_default()))
      .collect(),
  ))
}

/// Lenient `required` list: non-array values yield an empty list and
/// non-string members are dropped.
fn lenient_string_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = serde_json::Value::deserialize(deserializer)?;
  let serde_json::Value::Array(items) = value else {
    return Ok(Vec::new());
  };
  Ok(
    items
      .into_iter()
      .filter_map(|item| match item {
        serde_json::Value::String(s) => Some(s),
        _ => None,
      })
      .collect(),
  )
}

/// A parsed OpenAPI/Swagger document.
///
/// The `openapi` version marker selects the schema registry location and
/// reference prefix: a `3.`-prefixed marker means `components.schemas` and
/// `#/components/schemas/`, anything else (including a missing marker) means
/// the legacy `definitions` and `#/definitions/`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Spec {
  #[serde(deserialize_with = "lenient")]
  pub openapi: Option<String>,
  #[serde(deserialize_with = "lenient")]
  pub components: Option<Components>,
  #[serde(deserialize_with = "lenient_opt_map")]
  pub definitions: Option<IndexMap<String, Schema>>,
  #[serde(deserialize_with = "lenient_opt_map")]
  pub paths: Option<IndexMap<String, PathItem>>,
}

impl Spec {
  /// Whether the document belongs to the OpenAPI 3.x family.
  #[must_use]
  pub fn is_v3(&self) -> bool {
    self.openapi.as_deref().is_some_and(|v| v.starts_with("3."))
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Components {
  #[serde(deserialize_with = "lenient_opt_map")]
  pub schemas: Option<IndexMap<String, Schema>>,
}

/// One node describing the shape of a value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Schema {
  #[serde(deserialize_with = "lenient")]
  pub description: Option<String>,
  #[serde(rename = "type", deserialize_with = "lenient")]
  pub schema_type: Option<SchemaType>,
  #[serde(deserialize_with = "lenient")]
  pub format: Option<String>,
  #[serde(rename = "enum", deserialize_with = "lenient")]
  pub enum_values: Option<Vec<EnumValue>>,
  #[serde(deserialize_with = "lenient_string_seq")]
  pub required: Vec<String>,
  #[serde(deserialize_with = "lenient_map")]
  pub properties: IndexMap<String, Schema>,
  #[serde(deserialize_with = "lenient")]
  pub items: Option<Box<Schema>>,
  #[serde(rename = "$ref", deserialize_with = "lenient")]
  pub ref_path: Option<String>,
}

impl Schema {
  /// A bare reference schema, as written back into lifted request bodies.
  #[must_use]
  pub fn reference(ref_path: impl Into<String>) -> Self {
    Self {
      ref_path: Some(ref_path.into()),
      ..Self::default()
    }
  }
}

/// The `type` keyword. Unrecognized values parse as [`SchemaType::Unknown`]
/// and map to the opaque fallback rather than failing the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
  String,
  Number,
  Integer,
  Boolean,
  Array,
  Object,
  Unknown,
}

impl<'de> Deserialize<'de> for SchemaType {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let raw = String::deserialize(deserializer)?;
    Ok(match raw.as_str() {
      "string" => Self::String,
      "number" => Self::Number,
      "integer" => Self::Integer,
      "boolean" => Self::Boolean,
      "array" => Self::Array,
      "object" => Self::Object,
      _ => Self::Unknown,
    })
  }
}

/// A literal `enum` member. Strings and numbers are the documented cases;
/// anything else is carried through and rendered in its source form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
  String(String),
  Number(serde_json::Number),
  Other(serde_json::Value),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Operation {
  #[serde(rename = "requestBody", deserialize_with = "lenient")]
  pub request_body: Option<RequestBody>,
  #[serde(deserialize_with = "lenient_map")]
  pub responses: IndexMap<String, Response>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequestBody {
  #[serde(deserialize_with = "lenient_map")]
  pub content: IndexMap<String, MediaTypeObject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MediaTypeObject {
  #[serde(deserialize_with = "lenient")]
  pub schema: Option<Schema>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Response {
  #[serde(deserialize_with = "lenient_opt_map")]
  pub content: Option<IndexMap<String, MediaTypeObject>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
  Get,
  Post,
  Put,
  Delete,
  Patch,
}

impl HttpMethod {
  fn from_key(key: &str) -> Option<Self> {
    match key {
      "get" => Some(Self::Get),
      "post" => Some(Self::Post),
      "put" => Some(Self::Put),
      "delete" => Some(Self::Delete),
      "patch" => Some(Self::Patch),
      _ => None,
    }
  }
}

/// The operations declared on one path template.
///
/// Method keys keep the order they have in the document; keys that are not
/// HTTP methods (`summary`, `parameters`, vendor extensions) are skipped,
/// and a wrong-shaped operation value degrades to an empty operation.
#[derive(Debug, Clone, Default)]
pub struct PathItem {
  operations: IndexMap<HttpMethod, Operation>,
}

impl PathItem {
  pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
    self.operations.iter().map(|(method, op)| (*method, op))
  }

  pub fn operations_mut(&mut self) -> impl Iterator<Item = (HttpMethod, &mut Operation)> {
    self.operations.iter_mut().map(|(method, op)| (*method, op))
  }

  #[must_use]
  pub fn get(&self, method: HttpMethod) -> Option<&Operation> {
    self.operations.get(&method)
  }
}

impl<'de> Deserialize<'de> for PathItem {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct PathItemVisitor;

    impl<'de> Visitor<'de> for PathItemVisitor {
      type Value = PathItem;

      fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a path item object")
      }

      fn visit_map<A>(self, mut map: A) -> Result<PathItem, A::Error>
      where
        A: MapAccess<'de>,
      {
        let mut operations = IndexMap::new();
        while let Some(key) = map.next_key::<String>()? {
          match HttpMethod::from_key(&key) {
            Some(method) => {
              let value = map.next_value::<serde_json::Value>()?;
              operations.insert(method, Operation::deserialize(value).unwrap_or_default());
            }
            None => {
              map.next_value::<IgnoredAny>()?;
            }
          }
        }
        Ok(PathItem { operations })
      }
    }

    deserializer.deserialize_map(PathItemVisitor)
  }
}
