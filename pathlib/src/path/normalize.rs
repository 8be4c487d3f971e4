//! Lexical path normalization.
//!
//! Nothing in this module touches the filesystem. Cleaning:
//! - collapses repeated separators and drops trailing ones
//! - removes `.` components
//! - resolves `..` against the preceding component where there is one
//! - turns an empty path into `.`

use std::ffi::OsStr;
use std::path::{is_separator, Component, Path, PathBuf};

/// Lexically clean a path.
///
/// A `..` that would climb above the root is dropped (`/..` is `/`). A
/// leading `..` in a relative path has nothing to cancel and is kept.
///
/// # Examples
///
/// ```
/// use pathlib::path::normalize::clean;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(clean(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(clean(Path::new("a//b/")), PathBuf::from("a/b"));
/// assert_eq!(clean(Path::new("../a/..")), PathBuf::from(".."));
/// assert_eq!(clean(Path::new("")), PathBuf::from("."));
/// ```
#[must_use]
pub fn clean(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut has_root = false;
    // number of normal components at the tail of `result` that `..` may pop
    let mut poppable = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
            }
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if poppable > 0 {
                    result.pop();
                    poppable -= 1;
                } else if !has_root {
                    result.push(component);
                }
            }
            Component::Normal(name) => {
                result.push(name);
                poppable += 1;
            }
        }
    }

    if result.as_os_str().is_empty() {
        result.push(Component::CurDir);
    }
    result
}

/// Split a `create` pathname into its directory and file portions.
///
/// A trailing separator marks the whole string as a directory with no file
/// portion. Otherwise the text after the last separator is the file and
/// everything before it the directory; with no separator at all the
/// directory portion is empty.
///
/// # Examples
///
/// ```
/// use pathlib::path::normalize::split_pathname;
/// use std::ffi::OsStr;
///
/// assert_eq!(split_pathname("a/b/c.txt"), ("a/b", Some(OsStr::new("c.txt"))));
/// assert_eq!(split_pathname("a/b/"), ("a/b/", None));
/// assert_eq!(split_pathname("c.txt"), ("", Some(OsStr::new("c.txt"))));
/// ```
#[must_use]
pub fn split_pathname(pathname: &str) -> (&str, Option<&OsStr>) {
    if pathname.is_empty() || pathname.ends_with(is_separator) {
        return (pathname, None);
    }
    match pathname.rfind(is_separator) {
        Some(idx) => {
            // separators are single-byte on every supported platform
            let (dir, file) = (&pathname[..idx], &pathname[idx + 1..]);
            (dir, Some(OsStr::new(file)))
        }
        None => ("", Some(OsStr::new(pathname))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaned(s: &str) -> PathBuf {
        clean(Path::new(s))
    }

    #[test]
    fn test_clean_empty_is_current_dir() {
        assert_eq!(cleaned(""), PathBuf::from("."));
        assert_eq!(cleaned("."), PathBuf::from("."));
        assert_eq!(cleaned("./"), PathBuf::from("."));
        assert_eq!(cleaned("a/.."), PathBuf::from("."));
    }

    #[test]
    fn test_clean_collapses_separators() {
        assert_eq!(cleaned("a//b///c"), PathBuf::from("a/b/c"));
        assert_eq!(cleaned("a/b/"), PathBuf::from("a/b"));
    }

    #[test]
    #[cfg(unix)]
    fn test_clean_rooted() {
        assert_eq!(cleaned("/"), PathBuf::from("/"));
        assert_eq!(cleaned("//"), PathBuf::from("/"));
        assert_eq!(cleaned("/.."), PathBuf::from("/"));
        assert_eq!(cleaned("/../a"), PathBuf::from("/a"));
        assert_eq!(cleaned("/a/b/../../.."), PathBuf::from("/"));
        assert_eq!(cleaned("/a/./b/../c"), PathBuf::from("/a/c"));
    }

    #[test]
    fn test_clean_relative_parent_kept() {
        assert_eq!(cleaned(".."), PathBuf::from(".."));
        assert_eq!(cleaned("../.."), PathBuf::from("../.."));
        assert_eq!(cleaned("../a/../b"), PathBuf::from("../b"));
        assert_eq!(cleaned("a/../../b"), PathBuf::from("../b"));
    }

    #[test]
    fn test_split_pathname_file() {
        assert_eq!(
            split_pathname("dir/file.ext"),
            ("dir", Some(OsStr::new("file.ext")))
        );
        assert_eq!(
            split_pathname("a/b/c.txt"),
            ("a/b", Some(OsStr::new("c.txt")))
        );
    }

    #[test]
    fn test_split_pathname_directory() {
        assert_eq!(split_pathname("dir/"), ("dir/", None));
        assert_eq!(split_pathname("a/b//"), ("a/b//", None));
        assert_eq!(split_pathname(""), ("", None));
    }

    #[test]
    fn test_split_pathname_bare_file() {
        assert_eq!(split_pathname("file"), ("", Some(OsStr::new("file"))));
    }

    #[test]
    #[cfg(unix)]
    fn test_split_pathname_rooted() {
        assert_eq!(split_pathname("/f"), ("", Some(OsStr::new("f"))));
    }

    #[cfg(unix)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn path_with_dots_strategy() -> impl Strategy<Value = String> {
            (
                any::<bool>(),
                prop::collection::vec(
                    prop_oneof![
                        Just(".".to_string()),
                        Just("..".to_string()),
                        Just(String::new()),
                        "[a-zA-Z0-9_-]{1,10}".prop_map(|s| s),
                    ],
                    0..=8,
                ),
            )
                .prop_map(|(rooted, parts)| {
                    let joined = parts.join("/");
                    if rooted {
                        format!("/{joined}")
                    } else {
                        joined
                    }
                })
        }

        proptest! {
            /// Cleaning is idempotent
            #[test]
            fn clean_idempotent(s in path_with_dots_strategy()) {
                let once = clean(Path::new(&s));
                let twice = clean(&once);
                prop_assert_eq!(once, twice);
            }

            /// Cleaned paths are never empty and never contain `.`
            #[test]
            fn clean_no_current_dir(s in path_with_dots_strategy()) {
                let cleaned = clean(Path::new(&s));
                prop_assert!(!cleaned.as_os_str().is_empty());
                if cleaned != Path::new(".") {
                    for component in cleaned.components() {
                        prop_assert_ne!(component, Component::CurDir);
                    }
                }
            }

            /// Rooted paths stay rooted and lose every `..`
            #[test]
            fn clean_rooted_has_no_parent_dir(s in path_with_dots_strategy()) {
                let cleaned = clean(Path::new(&s));
                if s.starts_with('/') {
                    prop_assert!(cleaned.is_absolute());
                    for component in cleaned.components() {
                        prop_assert_ne!(component, Component::ParentDir);
                    }
                }
            }
        }
    }
}
