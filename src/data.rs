// src/data.rs

use crate::model::ContentCatalog;

/// Loads the preset catalog (videos + homework) embedded in the binary.
pub fn read_catalog_embedded() -> Result<ContentCatalog, serde_yaml::Error> {
    let file_content = include_str!("data/catalog.yaml");
    read_catalog(file_content)
}

pub fn read_catalog(yaml: &str) -> Result<ContentCatalog, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}
