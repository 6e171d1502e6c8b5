use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

/// What a dropped item refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    FileReference(PathBuf),
    InMemoryImage(Vec<u8>),
    RemoteLocator(Url),
}

/// A single normalized result of classifying a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedItem {
    resource: Resource,
    type_hint: Option<String>,
}

impl DroppedItem {
    pub fn file(path: PathBuf, type_hint: Option<String>) -> Self {
        Self {
            resource: Resource::FileReference(path),
            type_hint,
        }
    }

    pub fn image(data: Vec<u8>, type_id: String) -> Self {
        Self {
            resource: Resource::InMemoryImage(data),
            type_hint: Some(type_id),
        }
    }

    pub fn remote(url: Url) -> Self {
        Self {
            resource: Resource::RemoteLocator(url),
            type_hint: None,
        }
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn type_hint(&self) -> Option<&str> {
        self.type_hint.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.resource {
            Resource::FileReference(path) => Some(path),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&Url> {
        match &self.resource {
            Resource::RemoteLocator(url) => Some(url),
            _ => None,
        }
    }

    pub fn image_data(&self) -> Option<&[u8]> {
        match &self.resource {
            Resource::InMemoryImage(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_resource(self) -> Resource {
        self.resource
    }
}

impl fmt::Display for DroppedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.resource {
            Resource::FileReference(path) => write!(f, "{}", path.display())?,
            Resource::InMemoryImage(data) => {
                write!(f, "<image: {} bytes>", data.len())?
            }
            Resource::RemoteLocator(url) => write!(f, "{}", url)?,
        }
        write!(f, ", {}", self.type_hint().unwrap_or("-"))
    }
}
