//! Asset source resolution.

use std::path::PathBuf;

/// Where a typeface is loaded from, chosen automatically from the source
/// string: `http://` / `https://` prefixes select HTTP, anything else is
/// treated as a local path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    File(PathBuf),
    Http(String),
}

impl AssetSource {
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::Http(source.to_string())
        } else {
            Self::File(PathBuf::from(source))
        }
    }

    /// Returns the filename component of a source string, for log messages.
    #[must_use]
    pub fn filename(source: &str) -> &str {
        if source.starts_with("http://") || source.starts_with("https://") {
            source.rsplit('/').next().unwrap_or(source)
        } else {
            std::path::Path::new(source)
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or(source)
        }
    }
}
