//! Reference Tables
//!
//! The three static vocabularies consulted by the rule checks: recognized
//! property names, recognized units, and named color keywords. Loaded once
//! from an embedded TOML resource, optionally extended from user-supplied
//! vocabulary files, and never mutated afterwards.

pub mod schema;

pub use schema::{Tables, VocabularyFile, VocabularyMeta};

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};

/// Runtime vocabulary (optimized for lookups).
///
/// Each table keeps its declaration order in a `Vec` (the nearest-match
/// tie-break depends on it) alongside a set for membership tests. Colors
/// are stored lowercase; callers lowercase before lookup.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    properties: Vec<String>,
    units: Vec<String>,
    colors: Vec<String>,
    property_set: HashSet<String>,
    unit_set: HashSet<String>,
    color_set: HashSet<String>,
}

impl Vocabulary {
    /// Build the vocabulary from the embedded TOML resource.
    pub fn embedded() -> Self {
        let embedded_toml = include_str!("../../resources/css.vocab.toml");

        match toml::from_str::<VocabularyFile>(embedded_toml) {
            Ok(file) => Vocabulary::from(file),
            Err(e) => {
                log::warn!(
                    "Failed to parse embedded CSS vocabulary: {}. Using minimal fallback.",
                    e
                );
                Self::minimal_fallback()
            }
        }
    }

    /// Build the embedded vocabulary, then merge extension files found in
    /// the given directories (every `*.toml` file, in directory order).
    ///
    /// Unreadable or unparsable extension files are logged and skipped.
    pub fn with_extensions(dirs: &[impl AsRef<Path>]) -> Self {
        let mut vocab = Self::embedded();

        for dir in dirs {
            let dir = dir.as_ref();
            let entries = match std::fs::read_dir(dir) {
                Ok(entries) => entries,
                Err(_) => continue, // Missing directories are not an error
            };

            let mut paths: Vec<_> = entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == "toml"))
                .collect();
            paths.sort();

            for path in paths {
                if let Err(e) = vocab.extend_from_file(&path) {
                    log::warn!("Skipping vocabulary file {:?}: {}", path, e);
                }
            }
        }

        vocab
    }

    /// Merge one extension file into the vocabulary.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read vocabulary file {:?}", path))?;
        let file: VocabularyFile = toml::from_str(&content)
            .with_context(|| format!("failed to parse vocabulary file {:?}", path))?;

        log::info!("Loaded vocabulary extension '{}' from {:?}", file.meta.name, path);
        self.merge(file.tables);
        Ok(())
    }

    /// Append extension entries after the built-ins, skipping duplicates so
    /// built-in tie-break order is never disturbed.
    fn merge(&mut self, tables: Tables) {
        for property in tables.properties {
            if self.property_set.insert(property.clone()) {
                self.properties.push(property);
            }
        }
        for unit in tables.units {
            if self.unit_set.insert(unit.clone()) {
                self.units.push(unit);
            }
        }
        for color in tables.colors {
            let color = color.to_lowercase();
            if self.color_set.insert(color.clone()) {
                self.colors.push(color);
            }
        }
    }

    /// Minimal hard-coded tables in case the embedded TOML fails to parse.
    fn minimal_fallback() -> Self {
        let properties = ["color", "background-color", "margin", "padding", "width", "height"];
        let units = ["px", "em", "rem", "%"];
        let colors = ["black", "white", "red", "green", "blue"];

        Self::from_parts(
            properties.iter().map(|s| s.to_string()).collect(),
            units.iter().map(|s| s.to_string()).collect(),
            colors.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn from_parts(properties: Vec<String>, units: Vec<String>, colors: Vec<String>) -> Self {
        let colors: Vec<String> = colors.into_iter().map(|c| c.to_lowercase()).collect();
        let property_set = properties.iter().cloned().collect();
        let unit_set = units.iter().cloned().collect();
        let color_set = colors.iter().cloned().collect();

        Self {
            properties,
            units,
            colors,
            property_set,
            unit_set,
            color_set,
        }
    }

    pub fn is_property(&self, name: &str) -> bool {
        self.property_set.contains(name)
    }

    pub fn is_unit(&self, unit: &str) -> bool {
        self.unit_set.contains(unit)
    }

    /// Membership test for named colors. Expects a lowercased value.
    pub fn is_named_color(&self, color: &str) -> bool {
        self.color_set.contains(color)
    }

    /// Property names in declaration order (the matcher tie-break order).
    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    /// Units in declaration order.
    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// Named colors in declaration order, lowercased.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl From<VocabularyFile> for Vocabulary {
    fn from(file: VocabularyFile) -> Self {
        Self::from_parts(file.tables.properties, file.tables.units, file.tables.colors)
    }
}

/// The process-wide built-in vocabulary, constructed on first use and shared
/// read-only by any number of concurrent validations.
pub fn builtin() -> &'static Vocabulary {
    static BUILTIN: OnceLock<Vocabulary> = OnceLock::new();
    BUILTIN.get_or_init(Vocabulary::embedded)
}
