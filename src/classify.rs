use std::path::{Path, PathBuf};

use image::GenericImageView;
use once_cell::sync::Lazy;
use url::Url;

use crate::config::DropConfig;
use crate::decode::{decode_image, is_image_type};
use crate::item::DroppedItem;
use crate::payload::{resolve_uri, ReadableKind, TransferPayload};
use crate::type_hint;

static DEFAULT: Lazy<Classifier> = Lazy::new(Classifier::default);

/// Classify a payload with the default configuration
pub fn classify<P: TransferPayload + ?Sized>(payload: &P) -> Vec<DroppedItem> {
    DEFAULT.classify(payload)
}

/// Cheap acceptability check with the default configuration
pub fn can_accept<P: TransferPayload + ?Sized>(payload: &P) -> bool {
    DEFAULT.can_accept(payload)
}

/// Turns drag payloads into dropped items.
///
/// The rules are tried in order and the first one producing items wins:
///
/// 1. the first URI is local: every URI becomes a file reference,
/// 2. some representations decode as images: one item per decoded image,
/// 3. any URIs at all: every URI becomes a remote locator.
///
/// Anything else is rejected with an empty list. Per-item failures never
/// abort classification.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: DropConfig,
}

impl Classifier {
    pub fn new(config: DropConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DropConfig {
        &self.config
    }

    /// Whether the payload can be read as URIs or as an image. Only
    /// declared types are inspected, nothing is decoded.
    pub fn can_accept<P: TransferPayload + ?Sized>(&self, payload: &P) -> bool {
        payload.can_read(ReadableKind::Uri) || payload.can_read(ReadableKind::Image)
    }

    pub fn classify<P: TransferPayload + ?Sized>(
        &self,
        payload: &P,
    ) -> Vec<DroppedItem> {
        let urls = resolved_urls(payload);

        let files = self.file_candidates(&urls);
        if let Some((first, _)) = files.first() {
            if first.scheme() == "file" {
                log::debug!("classified {} local file(s)", files.len());
                return files
                    .into_iter()
                    .map(|(url, hint)| file_reference(url, hint))
                    .collect();
            }
        }

        let images = in_memory_images(payload);
        if !images.is_empty() {
            log::debug!("classified {} in-memory image(s)", images.len());
            return images;
        }

        if !urls.is_empty() {
            log::debug!("classified {} remote locator(s)", urls.len());
            return urls.into_iter().map(DroppedItem::remote).collect();
        }

        log::debug!("nothing to classify, rejecting drop");
        Vec::new()
    }

    /// URLs considered for the local file batch, each with its type hint
    /// if it was already looked up. Only this list is filtered by
    /// `image_files_only`; remote locators are built from all URLs.
    fn file_candidates<'a>(
        &self,
        urls: &'a [Url],
    ) -> Vec<(&'a Url, Option<String>)> {
        if !self.config.image_files_only {
            return urls.iter().map(|url| (url, None)).collect();
        }
        urls.iter()
            .filter_map(|url| {
                if url.scheme() != "file" {
                    return Some((url, None));
                }
                image_hint(url).map(|hint| (url, Some(hint)))
            })
            .collect()
    }
}

fn resolved_urls<P: TransferPayload + ?Sized>(payload: &P) -> Vec<Url> {
    payload
        .uri_strings()
        .iter()
        .filter_map(|uri| {
            let resolved = resolve_uri(uri);
            if resolved.is_none() {
                log::warn!("skipping unresolvable uri {:?}", uri);
            }
            resolved
        })
        .collect()
}

fn local_path(url: &Url) -> PathBuf {
    url.to_file_path()
        .unwrap_or_else(|_| PathBuf::from(url.path()))
}

fn lookup_hint(path: &Path) -> Option<String> {
    match type_hint::resolve(path) {
        Ok(hint) => Some(hint),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

fn file_reference(url: &Url, known_hint: Option<String>) -> DroppedItem {
    let path = local_path(url);
    let type_hint = known_hint.or_else(|| lookup_hint(&path));
    DroppedItem::file(path, type_hint)
}

fn in_memory_images<P: TransferPayload + ?Sized>(payload: &P) -> Vec<DroppedItem> {
    let mut images = Vec::new();
    for item in payload.items() {
        for repr in item.representations() {
            match decode_image(&repr.data) {
                Ok(image) => {
                    let (width, height) = image.dimensions();
                    log::trace!(
                        "decoded {} as {}x{} image",
                        repr.type_id,
                        width,
                        height
                    );
                    images.push(DroppedItem::image(
                        repr.data.clone(),
                        repr.type_id.clone(),
                    ));
                }
                Err(e) => log::trace!("skipping {}: {}", repr.type_id, e),
            }
        }
    }
    images
}

/// Content type of a local file, if it is an image.
fn image_hint(url: &Url) -> Option<String> {
    lookup_hint(&local_path(url)).filter(|hint| is_image_type(hint))
}
