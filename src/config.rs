use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Philosophy",
    "Sports",
    "Science",
    "Literature",
    "History",
    "Technology",
];

pub const DEFAULT_MAX_FILE_BYTES: u64 = 50 * 1024 * 1024;

pub const DEFAULT_EXTENSIONS: [&str; 3] = ["pdf", "epub", "mobi"];

/// Startup settings for a [`crate::Catalogue`].
///
/// Missing keys fall back to the defaults, so a host can pass `{}` or only the
/// values it wants to override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogueConfig {
    pub seed_categories: Vec<String>,
    pub max_file_bytes: u64,
    pub allowed_extensions: Vec<String>,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        CatalogueConfig {
            seed_categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            allowed_extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl CatalogueConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }
}
