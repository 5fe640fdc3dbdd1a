//! Document parsing: strict JSON first, permissive YAML second.

use crate::{error::ConvertError, spec::Spec};

/// Parses raw document text into a [`Spec`].
///
/// Either one strategy fully succeeds or the call fails with the unified
/// content-format error; there is no partial recovery.
pub fn parse_spec(content: &str) -> Result<Spec, ConvertError> {
  if let Ok(spec) = serde_json::from_str::<Spec>(content) {
    return Ok(spec);
  }
  serde_yaml::from_str(content).map_err(|_| ConvertError::InvalidFormat)
}
