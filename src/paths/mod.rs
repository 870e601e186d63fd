//! Lexical path arithmetic.
//!
//! Every function here is purely syntactic: nothing touches the file
//! system, symlinks are not resolved and results may name paths that do
//! not exist. Inputs are already-decoded text.

use std::path::{Component, Path, MAIN_SEPARATOR_STR};

use crate::{AppError, Result};

/// A path split into its drive prefix, root marker and normalized segments.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Lexical {
    prefix: Option<String>,
    absolute: bool,
    parts: Vec<String>,
}

impl Lexical {
    fn parse(raw: &str) -> Self {
        let mut lexical = Self {
            prefix: None,
            absolute: false,
            parts: Vec::new(),
        };
        for component in Path::new(raw).components() {
            match component {
                Component::Prefix(prefix) => {
                    lexical.prefix = Some(prefix.as_os_str().to_string_lossy().into_owned());
                }
                Component::RootDir => lexical.absolute = true,
                Component::CurDir => {}
                Component::ParentDir => lexical.push_parent(),
                Component::Normal(part) => lexical.parts.push(part.to_string_lossy().into_owned()),
            }
        }
        lexical
    }

    fn push_parent(&mut self) {
        match self.parts.last() {
            Some(last) if last != ".." => {
                self.parts.pop();
            }
            // `/..` is `/`.
            _ if self.absolute => {}
            _ => self.parts.push("..".into()),
        }
    }

    /// Re-root a relative path under `anchor`; absolute paths pass through.
    fn anchored(self, anchor: &Self) -> Self {
        if self.absolute {
            return Self {
                prefix: self.prefix.or_else(|| anchor.prefix.clone()),
                ..self
            };
        }
        let mut rooted = anchor.clone();
        for part in self.parts {
            if part == ".." {
                rooted.push_parent();
            } else {
                rooted.parts.push(part);
            }
        }
        rooted
    }

    fn render(&self) -> String {
        let mut out = self.prefix.clone().unwrap_or_default();
        if self.absolute {
            out.push_str(MAIN_SEPARATOR_STR);
        }
        out.push_str(&self.parts.join(MAIN_SEPARATOR_STR));
        if out.is_empty() {
            out.push('.');
        }
        out
    }
}

/// Collapse `.` segments, repeated separators and `name/..` pairs.
///
/// Leading `..` segments of a relative path are kept; on an absolute path
/// they collapse into the root. An empty input normalizes to `.`.
#[must_use]
pub fn normalize(path: &str) -> String {
    Lexical::parse(path).render()
}

/// Express `path` relative to `start`.
///
/// Relative inputs are interpreted against `anchor`, which should be an
/// absolute directory; an empty `start` means the anchor itself. Two
/// spellings of the same location yield `.`.
///
/// # Errors
///
/// Returns `AppError::InvalidPath` if `path` is empty or the two paths live
/// under different drive prefixes.
pub fn relative_to(path: &str, start: &str, anchor: &str) -> Result<String> {
    if path.is_empty() {
        return Err(AppError::InvalidPath("no path specified".into()));
    }

    let anchor = Lexical::parse(anchor);
    let target = Lexical::parse(path).anchored(&anchor);
    let base = if start.is_empty() {
        anchor.clone()
    } else {
        Lexical::parse(start).anchored(&anchor)
    };

    if target.prefix != base.prefix {
        return Err(AppError::InvalidPath(format!(
            "{path} and {start} are on different drives"
        )));
    }

    let common = target
        .parts
        .iter()
        .zip(&base.parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<&str> = vec![".."; base.parts.len() - common];
    segments.extend(target.parts[common..].iter().map(String::as_str));

    if segments.is_empty() {
        Ok(".".into())
    } else {
        Ok(segments.join(MAIN_SEPARATOR_STR))
    }
}

/// Join `tail` onto `base` with platform rules.
///
/// An absolute `tail` replaces `base`. An empty `tail` returns `base`
/// untouched and an empty `base` returns `tail` untouched.
#[must_use]
pub fn join(base: &str, tail: &str) -> String {
    if tail.is_empty() {
        return base.to_owned();
    }
    if base.is_empty() {
        return tail.to_owned();
    }
    Path::new(base).join(tail).to_string_lossy().into_owned()
}
