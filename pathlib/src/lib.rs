#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathlib
//!
//! A small convenience layer over host filesystem paths.
//!
//! The central type is [`PathValue`], an immutable, lexically normalized
//! path with methods to join segments, walk up to parents and ancestors,
//! glob for files recursively, create directories and files, read file
//! contents and delete trees.
//!
//! ## Core Types
//!
//! - [`PathValue`]: the path value and all its operations
//! - [`FindOutcome`]: matches plus the error that cut a search short
//! - [`Error`] and [`Result`]: error handling types
//! - [`Diagnostics`], [`Logger`] and [`LogLevel`]: where absorbed failures go
//!
//! Everything is synchronous. Values are plain data and can be shared
//! between threads; the library does no locking of its own.
//!
//! ## Examples
//!
//! ```
//! use pathlib::PathValue;
//!
//! let p = PathValue::new("/var/log/../lib/./app/");
//! assert_eq!(p.to_string(), "/var/lib/app");
//! assert_eq!(p.ancestor(0), p.parent());
//! assert_eq!(p.join("data").name(), "data");
//! ```

pub mod error;
pub mod logging;
pub mod path;

pub use error::{Error, Result};
pub use logging::{init_logger, Diagnostics, LogFacade, LogLevel, Logger};
pub use path::{FindOutcome, PathValue};
