//! Path values and the filesystem operations built on them.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Every [`PathValue`] holds a lexically cleaned path: repeated separators
//! collapsed, `.` removed, `..` resolved where it can be. The filesystem is
//! never consulted while cleaning, and symlinks are not resolved.
//!
//! ## Derived paths
//!
//! `join`, `parent` and `ancestor` are pure and return new values. Nothing
//! ever mutates an existing `PathValue`, and deleting what a value points at
//! does not invalidate it.
//!
//! ## Effectful operations
//!
//! Creation (`mkdir`, `touch`, `create`) returns typed errors. The other
//! operations always hand back usable data:
//!
//! - `read` gives `None` on any failure
//! - `delete` gives `false`, and reports the cause
//! - `find` gives whatever it matched before a walk error, and reports it
//!
//! Each of these has a `try_*` twin that exposes the cause directly.
//!
//! # Examples
//!
//! ```
//! use pathlib::PathValue;
//!
//! let root = PathValue::new(std::env::temp_dir()).join("pathlib-module-doc");
//! root.create("src/main.go").unwrap();
//! root.create("src/util/util.go").unwrap();
//!
//! let found = root.find(&["*.go", "*.py"]);
//! assert_eq!(found["*.go"].len(), 2);
//! assert!(found["*.py"].is_empty());
//!
//! assert!(root.delete());
//! assert!(!root.exists());
//! ```

mod access;
mod create;
mod find;
pub mod normalize;
mod value;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use find::FindOutcome;
pub use value::PathValue;
