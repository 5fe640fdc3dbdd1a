//! Synthesized names for lifted request-body schemas.

/// Derives a registry name from a path template.
///
/// The final `/`-segment is cut at its first literal `.` (extension strip),
/// then every run of non-alphanumeric characters in the template becomes a
/// word boundary. Each word is title-cased with its remaining characters
/// preserved, the words are concatenated, and the `Params` suffix is
/// appended. A template with no alphanumeric content yields bare `Params`.
///
/// `/pets/{id}` becomes `PetsIdParams`.
pub(crate) fn name_from_path(path: &str) -> String {
  let (head, last) = match path.rfind('/') {
    Some(idx) => (&path[..idx], &path[idx + 1..]),
    None => ("", path),
  };
  let stem = last.split('.').next().unwrap_or_default();

  let mut name = String::new();
  for segment in [head, stem] {
    for word in segment
      .split(|c: char| !c.is_ascii_alphanumeric())
      .filter(|word| !word.is_empty())
    {
      let mut chars = word.chars();
      if let Some(first) = chars.next() {
        name.extend(first.to_uppercase());
        name.push_str(chars.as_str());
      }
    }
  }
  name.push_str("Params");
  name
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_strips_braces_and_title_cases_each_segment() {
    assert_eq!(name_from_path("/pets/{id}"), "PetsIdParams");
  }

  #[test]
  fn test_single_segment() {
    assert_eq!(name_from_path("/pets"), "PetsParams");
  }

  #[test]
  fn test_hyphenated_segment_splits_into_words() {
    assert_eq!(name_from_path("/user-profile"), "UserProfileParams");
  }

  #[test]
  fn test_extension_is_stripped_from_the_final_segment() {
    assert_eq!(name_from_path("/files/report.json"), "FilesReportParams");
  }

  #[test]
  fn test_preserves_interior_casing() {
    assert_eq!(name_from_path("/dnsRecords"), "DnsRecordsParams");
  }

  #[test]
  fn test_no_alphanumeric_content_yields_bare_suffix() {
    assert_eq!(name_from_path("/"), "Params");
    assert_eq!(name_from_path(""), "Params");
    assert_eq!(name_from_path("/{}/"), "Params");
  }
}
