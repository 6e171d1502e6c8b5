use std::fs;
use std::path::Path;

use crate::{DropError, Result};

pub const DIRECTORY_TYPE: &str = "inode/directory";
pub const FALLBACK_TYPE: &str = "application/octet-stream";

/// Looks up the declared content type of a local path.
///
/// The file header is sniffed first, then the extension is consulted.
/// Only metadata and the first bytes of the file are read.
pub fn resolve<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let unavailable = |source| DropError::TypeHintUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(unavailable)?;
    if metadata.is_dir() {
        return Ok(DIRECTORY_TYPE.to_string());
    }

    if let Some(kind) = infer::get_from_path(path).map_err(unavailable)? {
        log::trace!("sniffed {} as {}", path.display(), kind.mime_type());
        return Ok(kind.mime_type().to_string());
    }

    let guessed = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_TYPE);
    log::trace!("guessed {} as {}", path.display(), guessed);
    Ok(guessed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::encode_png;
    use tempdir::TempDir;

    #[test]
    fn sniffs_header_before_extension() {
        let dir = TempDir::new("type_hint").unwrap();
        // header wins over a misleading extension
        let path = dir.path().join("picture.txt");
        fs::write(&path, encode_png(1, 1)).unwrap();

        assert_eq!(resolve(&path).unwrap(), "image/png");
    }

    #[test]
    fn falls_back_to_extension() {
        let dir = TempDir::new("type_hint").unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "plain words").unwrap();

        assert_eq!(resolve(&path).unwrap(), "text/plain");
    }

    #[test]
    fn unknown_content() {
        let dir = TempDir::new("type_hint").unwrap();
        let path = dir.path().join("blob");
        fs::write(&path, [0u8, 1, 2, 3]).unwrap();

        assert_eq!(resolve(&path).unwrap(), FALLBACK_TYPE);
    }

    #[test]
    fn directories() {
        let dir = TempDir::new("type_hint").unwrap();
        assert_eq!(resolve(dir.path()).unwrap(), DIRECTORY_TYPE);
    }

    #[test]
    fn missing_path_is_unavailable() {
        let result = resolve("/definitely/not/here.png");
        assert!(matches!(
            result,
            Err(DropError::TypeHintUnavailable { .. })
        ));
    }
}
