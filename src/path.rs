//! Filesystem path helpers.

use std::path::{Path, PathBuf};

/// Expands a leading `~` to the current user's home directory.
///
/// Paths without a leading `~` component, and paths on systems where the
/// home directory cannot be determined, are returned unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest))
}
