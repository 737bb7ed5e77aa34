use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::constants::{MANIFEST_FILENAME, MANIFEST_INDENT};
use crate::error::{Error, Result};

/// Rewrites the `name` field of the copied package.json.
///
/// The manifest is parsed as a JSON object, the name is overwritten with
/// the project name and the document is written back with 4-space
/// indentation. Key order is preserved. Everything else in the file is
/// left untouched.
pub fn rewrite_manifest_name<P: AsRef<Path>>(destination: P, project_name: &str) -> Result<()> {
    let manifest_path = destination.as_ref().join(MANIFEST_FILENAME);
    let raw = std::fs::read_to_string(&manifest_path).map_err(Error::IoError)?;

    let mut document: serde_json::Value =
        serde_json::from_str(&raw).map_err(|source| Error::ManifestParseError {
            manifest: manifest_path.display().to_string(),
            source,
        })?;

    let Some(fields) = document.as_object_mut() else {
        return Err(Error::ManifestFormatError {
            manifest: manifest_path.display().to_string(),
        });
    };
    fields.insert("name".to_string(), serde_json::Value::String(project_name.to_string()));

    std::fs::write(&manifest_path, render_manifest(&document)?).map_err(Error::IoError)
}

fn render_manifest(document: &serde_json::Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(MANIFEST_INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer).map_err(|source| {
        Error::ManifestParseError { manifest: MANIFEST_FILENAME.to_string(), source }
    })?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn overwrites_name_and_keeps_remaining_fields() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("package.json"),
            r#"{"name":"mongodb-main","version":"1.0.0","scripts":{"dev":"nodemon"}}"#,
        )
        .unwrap();

        rewrite_manifest_name(tmp.path(), "my-api").unwrap();

        let raw = fs::read_to_string(tmp.path().join("package.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["name"], "my-api");
        assert_eq!(parsed["version"], "1.0.0");
        assert_eq!(parsed["scripts"]["dev"], "nodemon");
    }

    #[test]
    fn writes_four_space_indentation_preserving_key_order() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("package.json"),
            r#"{"version":"1.0.0","name":"template","license":"MIT"}"#,
        )
        .unwrap();

        rewrite_manifest_name(tmp.path(), "ordered").unwrap();

        let raw = fs::read_to_string(tmp.path().join("package.json")).unwrap();
        assert!(raw.contains("    \"version\": \"1.0.0\""));
        // `name` keeps its original position between `version` and `license`.
        let version_at = raw.find("\"version\"").unwrap();
        let name_at = raw.find("\"name\"").unwrap();
        let license_at = raw.find("\"license\"").unwrap();
        assert!(version_at < name_at && name_at < license_at);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("package.json"), "{not json").unwrap();
        let err = rewrite_manifest_name(tmp.path(), "broken").unwrap_err();
        assert!(matches!(err, Error::ManifestParseError { .. }));
    }

    #[test]
    fn non_object_manifest_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("package.json"), "[1,2,3]").unwrap();
        let err = rewrite_manifest_name(tmp.path(), "list").unwrap_err();
        assert!(matches!(err, Error::ManifestFormatError { .. }));
    }

    #[test]
    fn missing_manifest_is_an_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = rewrite_manifest_name(tmp.path(), "absent").unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }
}
