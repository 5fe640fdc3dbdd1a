//! Error taxonomy for the conversion pipeline.

use thiserror::Error;

/// Terminal failures of one conversion call.
///
/// The pipeline driver folds these into a single `// Error: ...` comment
/// line; they never escape [`crate::generate_interfaces`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
  /// The input text matched neither parse strategy.
  #[error("Invalid input: Content is not valid JSON or YAML.")]
  InvalidFormat,

  /// Parsing succeeded but no named schema exists anywhere in the document.
  #[error("No schemas found in components/schemas, definitions, or inline in paths.")]
  NoSchemas,
}
