use serde::{Deserialize, Serialize};

/// One row of the license inventory, with the license text attached when a
/// matching file was found.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct LicenseRecord {
    pub name: String,
    pub version: String,
    pub license: String,
    pub license_url: String,
    pub license_text: Option<String>,
}

/// CSV row as written by the inventory generator. Extra columns are ignored.
#[derive(Debug, Deserialize)]
pub struct InventoryRow {
    #[serde(rename = "Component Name")]
    pub name: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "License (SPDX ID)")]
    pub license: String,
    #[serde(rename = "License URL")]
    pub license_url: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct LicenseCount {
    pub license: String,
    pub count: usize,
}
