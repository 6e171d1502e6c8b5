use std::path::Path;

use itertools::Itertools;
use url::Url;

use crate::decode::is_image_type;

/// Well-known representation type identifiers.
pub mod types {
    pub const FILE_URL: &str = "public.file-url";
    pub const URL: &str = "public.url";
    pub const PLAIN_TEXT: &str = "public.utf8-plain-text";
    pub const PNG: &str = "public.png";
    pub const TIFF: &str = "public.tiff";
    pub const JPEG: &str = "public.jpeg";
}

/// What a payload can be read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadableKind {
    Uri,
    Image,
}

/// One typed encoding of a payload entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Representation {
    pub type_id: String,
    pub data: Vec<u8>,
}

impl Representation {
    pub fn new<S: Into<String>>(type_id: S, data: Vec<u8>) -> Self {
        Self {
            type_id: type_id.into(),
            data,
        }
    }

    fn is_uri_typed(&self) -> bool {
        self.type_id == types::FILE_URL || self.type_id == types::URL
    }

    /// Returns the UTF-8 contents if this representation can be read
    /// as a URI string.
    fn as_uri_string(&self) -> Option<&str> {
        let text = std::str::from_utf8(&self.data).ok()?.trim();
        if self.is_uri_typed() {
            return Some(text);
        }
        if self.type_id == types::PLAIN_TEXT && text_is_uri(text) {
            return Some(text);
        }
        None
    }
}

/// A single payload entry, possibly offered in several encodings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteboardItem {
    representations: Vec<Representation>,
}

impl PasteboardItem {
    pub fn new(representations: Vec<Representation>) -> Self {
        Self { representations }
    }

    pub fn with_representation<S: Into<String>>(
        mut self,
        type_id: S,
        data: Vec<u8>,
    ) -> Self {
        self.representations
            .push(Representation::new(type_id, data));
        self
    }

    pub fn representations(&self) -> &[Representation] {
        &self.representations
    }

    fn uri_string(&self) -> Option<&str> {
        self.representations
            .iter()
            .find_map(Representation::as_uri_string)
    }
}

/// The data offered during a drag-and-drop interaction.
///
/// Implementations answer [`can_read`](TransferPayload::can_read) from the
/// declared type identifiers alone; content is never decoded there.
pub trait TransferPayload {
    fn can_read(&self, kind: ReadableKind) -> bool;

    fn items(&self) -> &[PasteboardItem];

    fn uri_strings(&self) -> Vec<String>;

    /// Every distinct representation type, in first-seen order
    fn types(&self) -> Vec<&str> {
        self.items()
            .iter()
            .flat_map(|item| item.representations())
            .map(|repr| repr.type_id.as_str())
            .unique()
            .collect()
    }
}

/// In-memory transfer payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pasteboard {
    items: Vec<PasteboardItem>,
}

impl Pasteboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item: PasteboardItem) -> Self {
        self.items.push(item);
        self
    }

    /// Adds an item holding a single URI. Absolute paths and `file:`
    /// URLs are typed as file URLs, everything else as URLs.
    pub fn with_uri<S: AsRef<str>>(self, uri: S) -> Self {
        let uri = uri.as_ref();
        let type_id = match resolve_uri(uri) {
            Some(url) if url.scheme() == "file" => types::FILE_URL,
            _ => types::URL,
        };
        self.with_item(
            PasteboardItem::default()
                .with_representation(type_id, uri.as_bytes().to_vec()),
        )
    }

    pub fn with_image<S: Into<String>>(self, type_id: S, data: Vec<u8>) -> Self {
        self.with_item(
            PasteboardItem::default().with_representation(type_id, data),
        )
    }

    pub fn with_text<S: AsRef<str>>(self, text: S) -> Self {
        self.with_item(PasteboardItem::default().with_representation(
            types::PLAIN_TEXT,
            text.as_ref().as_bytes().to_vec(),
        ))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TransferPayload for Pasteboard {
    fn can_read(&self, kind: ReadableKind) -> bool {
        let mut representations = self
            .items
            .iter()
            .flat_map(|item| item.representations());
        match kind {
            ReadableKind::Uri => {
                representations.any(|repr| repr.as_uri_string().is_some())
            }
            ReadableKind::Image => {
                representations.any(|repr| is_image_type(&repr.type_id))
            }
        }
    }

    fn items(&self) -> &[PasteboardItem] {
        &self.items
    }

    fn uri_strings(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(PasteboardItem::uri_string)
            .map(str::to_owned)
            .collect()
    }
}

/// Schemes plain text is promoted to a URI for.
const TEXT_URI_SCHEMES: &[&str] = &["http", "https", "ftp", "file", "ws", "wss"];

/// Whether dropped plain text reads as a link or an absolute path rather
/// than prose.
fn text_is_uri(text: &str) -> bool {
    if text.is_empty() || text.chars().any(char::is_whitespace) {
        return false;
    }
    if Path::new(text).is_absolute() {
        return true;
    }
    Url::parse(text)
        .map(|url| TEXT_URI_SCHEMES.contains(&url.scheme()))
        .unwrap_or(false)
}

/// Resolves a URI string into an absolute URL.
///
/// Absolute filesystem paths are accepted and turned into `file:` URLs.
pub fn resolve_uri(uri: &str) -> Option<Url> {
    let uri = uri.trim();
    if uri.is_empty() {
        return None;
    }
    let path = Path::new(uri);
    if path.is_absolute() {
        return Url::from_file_path(path).ok();
    }
    Url::parse(uri).ok()
}
