//! Vocabulary Schema Types
//!
//! Serde types matching the vocabulary TOML layout, for both the embedded
//! built-in tables and user extension files.

use serde::Deserialize;

/// Root vocabulary file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VocabularyFile {
    pub meta: VocabularyMeta,
    pub tables: Tables,
}

/// Vocabulary metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VocabularyMeta {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// The three reference tables. Extension files may supply any subset.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Tables {
    #[serde(default)]
    pub properties: Vec<String>,
    #[serde(default)]
    pub units: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_file() {
        let toml_src = r#"
            [meta]
            name = "css"
            version = "1.0"

            [tables]
            properties = ["color", "margin"]
            units = ["px"]
            colors = ["red"]
        "#;

        let file: VocabularyFile = toml::from_str(toml_src).unwrap();
        assert_eq!(file.meta.name, "css");
        assert_eq!(file.tables.properties, vec!["color", "margin"]);
        assert_eq!(file.tables.units, vec!["px"]);
        assert_eq!(file.tables.colors, vec!["red"]);
    }

    #[test]
    fn test_parse_partial_tables() {
        let toml_src = r#"
            [meta]
            name = "project-extras"

            [tables]
            properties = ["corner-shape"]
        "#;

        let file: VocabularyFile = toml::from_str(toml_src).unwrap();
        assert_eq!(file.tables.properties, vec!["corner-shape"]);
        assert!(file.tables.units.is_empty());
        assert!(file.tables.colors.is_empty());
    }
}
