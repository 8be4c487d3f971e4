//! Existence checks, whole-file reads and recursive deletes.

use std::fs;

use super::value::PathValue;
use crate::error::{Error, Result};
use crate::logging::{Diagnostics, LogFacade};

impl PathValue {
    /// Whether the path currently resolves to a file or directory.
    ///
    /// Symlinks are followed. Any failure to stat, including permission
    /// errors, reads as `false`.
    #[must_use]
    pub fn exists(&self) -> bool {
        fs::metadata(self.as_path()).is_ok()
    }

    /// Read the whole file, reporting why it failed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the file is missing, unreadable, or a
    /// directory.
    pub fn try_read(&self) -> Result<Vec<u8>> {
        fs::read(self.as_path()).map_err(|source| Error::Read {
            path: self.as_path().to_path_buf(),
            source,
        })
    }

    /// Read the whole file.
    ///
    /// `None` means the read failed for whatever reason; an existing empty
    /// file is `Some` of an empty vector. Use [`try_read`](Self::try_read)
    /// to learn the cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::PathValue;
    ///
    /// assert_eq!(PathValue::new("/no/such/file").read(), None);
    /// ```
    #[must_use]
    pub fn read(&self) -> Option<Vec<u8>> {
        match self.try_read() {
            Ok(data) => Some(data),
            Err(e) => {
                log::debug!("{e}");
                None
            }
        }
    }

    /// Remove the path and everything beneath it.
    ///
    /// A path that does not exist is already deleted and succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Remove`] if removal was attempted and failed.
    pub fn try_delete(&self) -> Result<()> {
        let Ok(meta) = fs::symlink_metadata(self.as_path()) else {
            return Ok(());
        };
        // a symlink to a directory is unlinked, not descended into
        let removed = if meta.is_dir() {
            fs::remove_dir_all(self.as_path())
        } else {
            fs::remove_file(self.as_path())
        };
        removed.map_err(|source| Error::Remove {
            path: self.as_path().to_path_buf(),
            source,
        })
    }

    /// Remove the path, reporting failures through `diagnostics`.
    ///
    /// Returns `true` if the path did not exist or was removed.
    pub fn delete_with(&self, diagnostics: &dyn Diagnostics) -> bool {
        match self.try_delete() {
            Ok(()) => true,
            Err(e) => {
                diagnostics.report(&e);
                false
            }
        }
    }

    /// Remove the path, logging failures.
    ///
    /// Returns `true` if the path did not exist or was removed. Deleting
    /// twice is fine; the second call finds nothing and returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::PathValue;
    ///
    /// let missing = PathValue::new(std::env::temp_dir()).join("pathlib-never-created");
    /// assert!(missing.delete());
    /// assert!(!missing.exists());
    /// ```
    pub fn delete(&self) -> bool {
        self.delete_with(&LogFacade)
    }
}
