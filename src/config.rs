use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::decode::is_image_type;
use crate::payload::types;
use crate::Result;

/// Drop target settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DropConfig {
    /// Representation types the target is registered for. Drags carrying
    /// none of them are refused on enter.
    pub registered_types: Vec<String>,
    /// Only keep local files whose content type is an image.
    pub image_files_only: bool,
}

impl Default for DropConfig {
    fn default() -> Self {
        Self {
            registered_types: [
                types::FILE_URL,
                types::TIFF,
                types::PNG,
                types::URL,
                types::PLAIN_TEXT,
            ]
            .iter()
            .map(|t| t.to_string())
            .collect(),
            image_files_only: false,
        }
    }
}

impl DropConfig {
    /// Load a config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path.as_ref())?;
        let config = serde_json::from_slice(&bytes)?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Registering any image type registers every image type, as the
    /// classifier decodes whatever image format the payload carries.
    pub fn is_registered(&self, type_id: &str) -> bool {
        self.registered_types.iter().any(|t| {
            t == type_id || (is_image_type(t) && is_image_type(type_id))
        })
    }
}
