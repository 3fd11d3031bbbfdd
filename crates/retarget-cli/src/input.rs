// crates/retarget-cli/src/input.rs
//
// Loading mapping, rig, and taxonomy documents from disk.
// The format follows the file extension: `.toml` is TOML, anything else JSON.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

/// Document formats accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &str) -> Self {
        match Path::new(path).extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Parse a document's contents in the given format.
pub fn parse_document<T: DeserializeOwned>(
    contents: &str,
    format: DocumentFormat,
) -> Result<T, Box<dyn std::error::Error>> {
    let value = match format {
        DocumentFormat::Json => serde_json::from_str(contents)?,
        DocumentFormat::Toml => toml::from_str(contents)?,
    };
    Ok(value)
}

/// Read and parse a document from disk.
pub fn load_document<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Could not read {}: {}", path, e))?;
    let value = parse_document(&contents, DocumentFormat::from_path(path))
        .map_err(|e| format!("Could not parse {}: {}", path, e))?;
    tracing::debug!("Loaded {}", path);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use retarget_core::{BoneMapping, ChainId, ChainTaxonomy, RigDescription};

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path("mapping.toml"), DocumentFormat::Toml);
        assert_eq!(DocumentFormat::from_path("Mapping.TOML"), DocumentFormat::Toml);
        assert_eq!(DocumentFormat::from_path("mapping.json"), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path("mapping"), DocumentFormat::Json);
    }

    #[test]
    fn test_parse_toml_mapping() {
        let mapping: BoneMapping = parse_document(
            r#"
            LeftUpperArm = "upperarm_l"
            LeftHand = "hand_l"
            "#,
            DocumentFormat::Toml,
        )
        .unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.source_for("LeftHand").unwrap().as_str(), "hand_l");
    }

    #[test]
    fn test_parse_toml_taxonomy() {
        let taxonomy: ChainTaxonomy = parse_document(
            r#"
            pelvis = ["Hips"]
            spine = ["Spine", "Chest", "UpperChest"]
            "#,
            DocumentFormat::Toml,
        )
        .unwrap();
        assert_eq!(taxonomy.chain(ChainId::Spine).unwrap().len(), 3);
    }

    #[test]
    fn test_parse_json_rig() {
        let rig: RigDescription = parse_document(
            r#"{"name": "bot", "skinned_meshes": [{"name": "Body", "bones": ["Hips"]}]}"#,
            DocumentFormat::Json,
        )
        .unwrap();
        assert_eq!(rig.skinned_meshes.len(), 1);
    }

    #[test]
    fn test_parse_rejects_empty_joint_name() {
        let result: Result<BoneMapping, _> =
            parse_document(r#"{"LeftHand": ""}"#, DocumentFormat::Json);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_document::<BoneMapping>("/nonexistent/mapping.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/mapping.json"));
    }
}
