//! Error types for the pathlib library.
//!
//! Every variant names the filesystem step that failed, the path it failed
//! on, and carries the underlying cause as its `source`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathlib error.
///
/// # Examples
///
/// ```
/// use pathlib::{PathValue, Result};
///
/// fn scratch_dir() -> Result<PathValue> {
///     let dir = PathValue::new(std::env::temp_dir()).join("pathlib-doc");
///     dir.mkdir()?;
///     Ok(dir)
/// }
/// # scratch_dir().unwrap().delete();
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathlib library.
#[derive(Debug, Error)]
pub enum Error {
    /// A directory (or one of its missing ancestors) could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDirectory {
        /// The directory that was being created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An empty file could not be created.
    #[error("failed to create file {}: {source}", path.display())]
    CreateFile {
        /// The file that was being created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Checking whether an entry exists failed for a reason other than
    /// the entry being absent.
    #[error("failed to check file status {}: {source}", path.display())]
    Stat {
        /// The path whose status was queried.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A file or directory tree could not be removed.
    #[error("failed to delete {}: {source}", path.display())]
    Remove {
        /// The path that was being removed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The recursive directory walk was interrupted.
    #[error("error during walk of {}: {source}", root.display())]
    Walk {
        /// The root of the walk.
        root: PathBuf,
        /// The underlying walk error.
        #[source]
        source: walkdir::Error,
    },

    /// A glob pattern could not be compiled.
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// The underlying parse error.
        #[source]
        source: glob::PatternError,
    },
}

impl Error {
    /// The path the failing operation was acting on, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::CreateDirectory { path, .. }
            | Self::CreateFile { path, .. }
            | Self::Stat { path, .. }
            | Self::Read { path, .. }
            | Self::Remove { path, .. } => Some(path.as_path()),
            Self::Walk { source, root } => source.path().or(Some(root.as_path())),
            Self::InvalidPattern { .. } => None,
        }
    }

    /// The underlying I/O error kind, when the failure came from the OS.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::CreateDirectory { source, .. }
            | Self::CreateFile { source, .. }
            | Self::Stat { source, .. }
            | Self::Read { source, .. }
            | Self::Remove { source, .. } => Some(source.kind()),
            Self::Walk { source, .. } => source.io_error().map(io::Error::kind),
            Self::InvalidPattern { .. } => None,
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::Error;
    /// use std::io;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::Read {
    ///     path: PathBuf::from("/nonexistent"),
    ///     source: io::Error::from(io::ErrorKind::NotFound),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::NotFound)
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::Error;
    /// use std::io;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::Remove {
    ///     path: PathBuf::from("/restricted"),
    ///     source: io::Error::from(io::ErrorKind::PermissionDenied),
    /// };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::PermissionDenied)
    }
}
