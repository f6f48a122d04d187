use std::path::{Path, PathBuf};
use std::{fs, io};

const DATA_DIR_NAME: &str = "scroblcli";
const LEGACY_DOTDIR: &str = ".scroblcli";

pub fn home_directory() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Platform-specific application data directory, `<local data dir>/scroblcli`.
///
/// With `create` set the directory is created on the way out; creation
/// failures are ignored, callers that write into it surface the error on
/// their own write.
pub fn data_directory(create: bool) -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(DATA_DIR_NAME);
    if create {
        let _ = fs::create_dir_all(&path);
    }
    path
}

/// Ensures a non-empty path string ends with the platform separator.
pub fn normalize_dir(path: &str) -> String {
    if path.is_empty() || path.ends_with(std::path::MAIN_SEPARATOR) {
        path.to_string()
    } else {
        format!("{}{}", path, std::path::MAIN_SEPARATOR)
    }
}

/// Additive byte checksum. Cheap integrity tag, not a cryptographic digest.
pub fn checksum(data: &[u8]) -> i64 {
    data.iter().map(|b| *b as i64).sum()
}

pub fn file_to_bytes<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
    fs::read(path)
}

pub fn file_to_string<P: AsRef<Path>>(path: P) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Moves a pre-1.0 `~/.scroblcli` dotdir into the platform data directory.
///
/// Runs once at startup. Does nothing when the old directory is absent or
/// the new one already exists, so an interrupted migration never clobbers
/// current data.
pub fn migrate_legacy_data_dir() -> io::Result<()> {
    let old = home_directory().join(LEGACY_DOTDIR);
    let new = data_directory(false);

    if !old.is_dir() || new.exists() {
        return Ok(());
    }

    if let Some(parent) = new.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::rename(&old, &new)
}
