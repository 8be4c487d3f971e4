//! Recursive file search by glob pattern.
//!
//! Each pattern gets its own walk of the tree. Only the base name of
//! non-directory entries is matched, so `*`, `?` and `[...]` never see a
//! separator and there is no recursive `**` form.
//!
//! Pattern syntax is that of [`glob::Pattern`]. A bracket class is negated
//! with `[!a]`, not `[^a]`, and there is no backslash escape: a literal
//! metacharacter is written as a one-character class such as `[*]` or
//! `[?]`. File names that are not valid UTF-8 never match.

use std::collections::BTreeMap;

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use super::value::PathValue;
use crate::error::Error;
use crate::logging::{Diagnostics, LogFacade};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Result of searching for a single pattern.
///
/// `matches` holds everything found before the walk stopped; `error` is set
/// when it stopped early or the pattern could not be compiled.
#[derive(Debug)]
pub struct FindOutcome {
    /// Matching files in walk order.
    pub matches: Vec<PathValue>,
    /// The failure that ended the search, if any.
    pub error: Option<Error>,
}

impl FindOutcome {
    /// Whether the walk covered the whole tree.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

impl PathValue {
    /// Search the tree under this path for files whose name matches
    /// `pattern`, keeping any error alongside the partial results.
    ///
    /// Directory entries are visited in file-name order at each level and
    /// symlinks are not followed. The first walk error stops the search.
    pub fn try_find_one(&self, pattern: &str) -> FindOutcome {
        let compiled = match Pattern::new(pattern) {
            Ok(compiled) => compiled,
            Err(source) => {
                return FindOutcome {
                    matches: Vec::new(),
                    error: Some(Error::InvalidPattern {
                        pattern: pattern.to_string(),
                        source,
                    }),
                }
            }
        };

        let mut matches = Vec::new();
        for entry in WalkDir::new(self.as_path()).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    return FindOutcome {
                        matches,
                        error: Some(Error::Walk {
                            root: self.as_path().to_path_buf(),
                            source,
                        }),
                    }
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if compiled.matches_with(name, MATCH_OPTIONS) {
                matches.push(PathValue::new(entry.path()));
            }
        }

        FindOutcome {
            matches,
            error: None,
        }
    }

    /// Files under this path matching `pattern`, reporting a walk failure
    /// through `diagnostics`.
    pub fn find_one_with(&self, pattern: &str, diagnostics: &dyn Diagnostics) -> Vec<PathValue> {
        let outcome = self.try_find_one(pattern);
        if let Some(err) = &outcome.error {
            diagnostics.report(err);
        }
        outcome.matches
    }

    /// Files under this path matching `pattern`, logging a walk failure.
    ///
    /// Always returns a list, possibly partial, possibly empty.
    #[must_use]
    pub fn find_one(&self, pattern: &str) -> Vec<PathValue> {
        self.find_one_with(pattern, &LogFacade)
    }

    /// Search for several patterns, reporting failures through
    /// `diagnostics`.
    ///
    /// Every requested pattern is a key of the result, mapped to an empty
    /// list when nothing matched.
    pub fn find_with<S: AsRef<str>>(
        &self,
        patterns: &[S],
        diagnostics: &dyn Diagnostics,
    ) -> BTreeMap<String, Vec<PathValue>> {
        patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                (pattern.to_string(), self.find_one_with(pattern, diagnostics))
            })
            .collect()
    }

    /// Search for several patterns, logging failures.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pathlib::PathValue;
    ///
    /// let found = PathValue::working_dir().find(&["*.rs", "*.toml"]);
    /// for path in &found["*.rs"] {
    ///     println!("{path}");
    /// }
    /// ```
    #[must_use]
    pub fn find<S: AsRef<str>>(&self, patterns: &[S]) -> BTreeMap<String, Vec<PathValue>> {
        self.find_with(patterns, &LogFacade)
    }
}
