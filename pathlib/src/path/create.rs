//! Directory and file creation.
//!
//! All three operations are idempotent: creating something that already
//! exists is not an error. Concurrent callers racing on the same path rely
//! on that, there is no locking.

use std::fs::{self, DirBuilder, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

use super::normalize::split_pathname;
use super::value::PathValue;
use crate::error::{Error, Result};

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

fn dir_builder() -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
}

impl PathValue {
    /// Create this directory and any missing ancestors.
    ///
    /// Succeeds without doing anything if the directory already exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CreateDirectory`] if a component could not be
    /// created, for example because a file is in the way or permission was
    /// denied.
    pub fn mkdir(&self) -> Result<()> {
        dir_builder()
            .create(self.as_path())
            .map_err(|source| Error::CreateDirectory {
                path: self.as_path().to_path_buf(),
                source,
            })
    }

    /// Create an empty file at `name` under this directory unless something
    /// is already there.
    ///
    /// An existing file or directory at the target is left untouched.
    /// Returns the path of the target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Stat`] if the target's status cannot be checked and
    /// [`Error::CreateFile`] if the file cannot be created.
    pub fn touch<S: AsRef<Path>>(&self, name: S) -> Result<PathValue> {
        let target = self.join(name);
        match fs::metadata(target.as_path()) {
            Ok(_) => return Ok(target),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(source) => {
                return Err(Error::Stat {
                    path: target.into_path_buf(),
                    source,
                })
            }
        }

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(target.as_path())
        {
            Ok(_) => {
                log::debug!("created {target}");
                Ok(target)
            }
            // lost a race with another creator
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(target),
            Err(source) => Err(Error::CreateFile {
                path: target.into_path_buf(),
                source,
            }),
        }
    }

    /// Make `pathname`, relative to this path, exist.
    ///
    /// A trailing separator makes the whole of `pathname` a directory.
    /// Otherwise the last segment is a file: its directory is created
    /// first, then the file is touched. Returns the created file, or the
    /// created directory when there is no file portion.
    ///
    /// # Errors
    ///
    /// Returns the first [`mkdir`](Self::mkdir) or [`touch`](Self::touch)
    /// failure encountered.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::PathValue;
    ///
    /// let root = PathValue::new(std::env::temp_dir()).join("pathlib-create-doc");
    /// let file = root.create("templates/base.json").unwrap();
    /// assert_eq!(file.name(), "base.json");
    /// assert!(file.exists());
    ///
    /// let dir = root.create("cache/").unwrap();
    /// assert_eq!(dir.name(), "cache");
    /// assert!(dir.exists());
    /// # root.delete();
    /// ```
    pub fn create(&self, pathname: &str) -> Result<PathValue> {
        let (dir, file) = split_pathname(pathname);
        let dir = if dir.is_empty() {
            self.clone()
        } else {
            let dir = self.join(dir);
            dir.mkdir()?;
            dir
        };

        match file {
            Some(file) => dir.touch(file),
            None => Ok(dir),
        }
    }
}
