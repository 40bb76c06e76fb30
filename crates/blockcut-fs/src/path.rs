//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path with a forward-slash display form.
///
/// The native path is kept exactly as given and is what every I/O call
/// uses, so names containing backslashes or non-UTF-8 bytes still resolve
/// on Unix. The forward-slash form exists only for messages and logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    native: PathBuf,
    display: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let native = path.as_ref().to_path_buf();
        let display = native.to_string_lossy().replace('\\', "/");
        Self { native, display }
    }

    /// Get the forward-slash display form.
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Get the path as given, for I/O operations.
    pub fn as_native(&self) -> &Path {
        &self.native
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        self.native.clone()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.native.is_file()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        &self.native
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
