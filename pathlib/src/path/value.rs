//! The [`PathValue`] type and its pure path algebra.

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::normalize::clean;

/// An immutable, lexically normalized filesystem path.
///
/// Every constructor cleans its input, so two values compare equal exactly
/// when their normalized paths are equal. Deriving a new path (`join`,
/// `parent`, `ancestor`) never touches the filesystem; the effectful
/// operations live in the `access`, `find` and `create` modules.
///
/// # Examples
///
/// ```
/// use pathlib::PathValue;
///
/// let p = PathValue::new("/srv//data/./logs/");
/// assert_eq!(p.to_string(), "/srv/data/logs");
/// assert_eq!(p.name(), "logs");
/// assert_eq!(p.parent(), PathValue::new("/srv/data"));
/// assert_eq!(p.join("app.log").to_string(), "/srv/data/logs/app.log");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathValue {
    path: PathBuf,
}

impl PathValue {
    /// Create a path value from anything path-like, normalizing it.
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: clean(path.as_ref()),
        }
    }

    /// The process's current working directory, read once.
    ///
    /// Falls back to `.` if the working directory cannot be determined.
    #[must_use]
    pub fn working_dir() -> Self {
        match env::current_dir() {
            Ok(cwd) => Self::new(cwd),
            Err(e) => {
                log::debug!("cannot read working directory, using '.': {e}");
                Self::current()
            }
        }
    }

    fn current() -> Self {
        Self {
            path: PathBuf::from("."),
        }
    }

    /// Borrow the normalized path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Consume the value, returning the normalized path.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }

    /// The final segment of the path.
    ///
    /// The root's name is the separator itself, and `.` and `..` name
    /// themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::PathValue;
    ///
    /// assert_eq!(PathValue::new("a/b/c.txt").name(), "c.txt");
    /// assert_eq!(PathValue::new("..").name(), "..");
    /// assert_eq!(PathValue::new("").name(), ".");
    /// ```
    #[must_use]
    pub fn name(&self) -> String {
        match self.path.components().next_back() {
            Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
            Some(Component::ParentDir) => "..".to_string(),
            Some(Component::RootDir) => MAIN_SEPARATOR_STR.to_string(),
            Some(Component::Prefix(prefix)) => prefix.as_os_str().to_string_lossy().into_owned(),
            Some(Component::CurDir) | None => ".".to_string(),
        }
    }

    /// Whether the path is absolute on this host.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.path.is_absolute()
    }

    /// Append `segment` after a separator and normalize.
    ///
    /// The segment is always nested, even when it is itself absolute. An
    /// empty segment returns the path unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::PathValue;
    ///
    /// let base = PathValue::new("/a");
    /// assert_eq!(base.join("b/../c").to_string(), "/a/c");
    /// assert_eq!(base.join("/d").to_string(), "/a/d");
    /// assert_eq!(base.join(""), base);
    /// ```
    #[must_use]
    pub fn join<S: AsRef<Path>>(&self, segment: S) -> Self {
        let segment = segment.as_ref();
        if segment.as_os_str().is_empty() {
            return self.clone();
        }
        let mut joined = OsString::from(self.path.as_os_str());
        joined.push(MAIN_SEPARATOR_STR);
        joined.push(segment.as_os_str());
        Self::new(joined)
    }

    /// The path one level up.
    ///
    /// A single relative segment has `.` as its parent; the root and `.`
    /// are their own parents.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::PathValue;
    ///
    /// assert_eq!(PathValue::new("/a/b").parent().to_string(), "/a");
    /// assert_eq!(PathValue::new("a").parent().to_string(), ".");
    /// assert_eq!(PathValue::new("/").parent().to_string(), "/");
    /// ```
    #[must_use]
    pub fn parent(&self) -> Self {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Self::new(parent),
            Some(_) => Self::current(),
            None => self.clone(),
        }
    }

    /// Whether `parent()` can make no further progress from here.
    ///
    /// True for `.` and for a bare root.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        self.path == Path::new(".") || (self.path.has_root() && self.path.parent().is_none())
    }

    /// The ancestor reached by applying [`parent`](Self::parent) `depth + 1`
    /// times.
    ///
    /// The walk stops early at `.` or a root. If the first step already
    /// lands on the boundary, the boundary itself is returned, so
    /// `ancestor(0) == parent()` always holds. Otherwise the result is the
    /// last ancestor reached before the boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlib::PathValue;
    ///
    /// let p = PathValue::new("/a/b/c/d");
    /// assert_eq!(p.ancestor(0).to_string(), "/a/b/c");
    /// assert_eq!(p.ancestor(1).to_string(), "/a/b");
    /// assert_eq!(p.ancestor(10).to_string(), "/a");
    /// assert_eq!(PathValue::new("/a").ancestor(3).to_string(), "/");
    /// ```
    #[must_use]
    pub fn ancestor(&self, depth: usize) -> Self {
        let mut current = self.parent();
        if current.is_boundary() {
            return current;
        }
        let mut reached = current.clone();
        for _ in 0..depth {
            current = current.parent();
            if current.is_boundary() {
                break;
            }
            reached = current.clone();
        }
        reached
    }
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl AsRef<Path> for PathValue {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl From<&str> for PathValue {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PathValue {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&Path> for PathValue {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<PathBuf> for PathValue {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<PathValue> for PathBuf {
    fn from(value: PathValue) -> Self {
        value.path
    }
}

impl FromStr for PathValue {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl Serialize for PathValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.path.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PathValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        PathBuf::deserialize(deserializer).map(Self::new)
    }
}
