//! Translation between diff paths and working-directory paths.
//!
//! `git diff` reports paths relative to the repository root, while callers
//! open files relative to their own working directory. `PathResolver`
//! discovers the root once per `initialize` and afterwards converts between
//! the two coordinate systems with pure path arithmetic.

use std::path::Path;

use tracing::{debug, info, trace};

use crate::config::GlobalConfig;
use crate::git::{GitRootLocator, RootLocator};
use crate::paths;
use crate::{AppError, Result};

/// Lifecycle of a resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResolverState {
    /// No working directory has been set yet.
    #[default]
    Uninitialized,
    /// Working directory and its discovered root, always replaced together.
    Initialized {
        /// Absolute working directory supplied by the caller.
        working_directory: String,
        /// Root discovered from `working_directory`; empty when unknown.
        repository_root: String,
    },
}

/// Converts `git diff` paths to absolute paths or paths relative to the
/// working directory.
#[derive(Debug, Clone)]
pub struct PathResolver<L = GitRootLocator> {
    locator: L,
    strict_root: bool,
    state: ResolverState,
}

impl PathResolver<GitRootLocator> {
    /// Build an uninitialized resolver from configuration.
    #[must_use]
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::new(GitRootLocator::from_config(config)).with_strict_root(config.strict_root)
    }
}

impl Default for PathResolver<GitRootLocator> {
    fn default() -> Self {
        Self::new(GitRootLocator::default())
    }
}

impl<L: RootLocator> PathResolver<L> {
    /// Build an uninitialized resolver that discovers roots through `locator`.
    #[must_use]
    pub fn new(locator: L) -> Self {
        Self {
            locator,
            strict_root: false,
            state: ResolverState::Uninitialized,
        }
    }

    /// Reject an empty discovered root during [`initialize`](Self::initialize).
    #[must_use]
    pub fn with_strict_root(mut self, strict_root: bool) -> Self {
        self.strict_root = strict_root;
        self
    }

    /// Set the working directory and discover its repository root.
    ///
    /// Runs root discovery exactly once. A repeated call replaces both the
    /// working directory and the root. When discovery fails with an error
    /// the previous state is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidPath` if `working_directory` is not
    /// absolute, `AppError::Decode` if the discovered root is not UTF-8, and
    /// `AppError::RootUnknown` in strict mode when no root was found.
    pub fn initialize(&mut self, working_directory: &str) -> Result<()> {
        if !Path::new(working_directory).is_absolute() {
            return Err(AppError::InvalidPath(format!(
                "working directory must be absolute: {working_directory}"
            )));
        }

        let repository_root = self.locator.locate(Path::new(working_directory))?;
        if repository_root.is_empty() && self.strict_root {
            return Err(AppError::RootUnknown(format!(
                "no repository contains {working_directory}"
            )));
        }

        info!(
            working_directory,
            repository_root = repository_root.as_str(),
            "path resolver initialized"
        );
        self.state = ResolverState::Initialized {
            working_directory: working_directory.to_owned(),
            repository_root,
        };
        Ok(())
    }

    /// Return `diff_path`, a repository-root-relative path, relative to the
    /// working directory.
    ///
    /// With working directory `/repo/sub` under root `/repo`, the diff path
    /// `sub/file.py` becomes `file.py`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Uninitialized` before [`initialize`](Self::initialize)
    /// and `AppError::InvalidPath` if `diff_path` is empty.
    pub fn relative_path(&self, diff_path: &str) -> Result<String> {
        let (working_directory, repository_root) = self.initialized("relative_path")?;

        let root_relative_cwd =
            paths::relative_to(working_directory, repository_root, working_directory)?;
        let relative = paths::relative_to(diff_path, &root_relative_cwd, working_directory)?;

        trace!(
            diff_path,
            root_relative_cwd = %root_relative_cwd,
            relative = %relative,
            "relative path resolved"
        );
        Ok(relative)
    }

    /// Return `source_path`, a repository-root-relative path, joined onto the
    /// repository root.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Uninitialized` before [`initialize`](Self::initialize).
    pub fn absolute_path(&self, source_path: &str) -> Result<String> {
        let (_, repository_root) = self.initialized("absolute_path")?;
        let absolute = paths::join(repository_root, source_path);
        trace!(source_path, absolute = %absolute, "absolute path resolved");
        Ok(absolute)
    }

    /// Working directory supplied to the last successful `initialize`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Uninitialized` before [`initialize`](Self::initialize).
    pub fn working_directory(&self) -> Result<&str> {
        self.initialized("working_directory").map(|(cwd, _)| cwd)
    }

    /// Repository root discovered by the last successful `initialize`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Uninitialized` before [`initialize`](Self::initialize).
    pub fn repository_root(&self) -> Result<&str> {
        self.initialized("repository_root").map(|(_, root)| root)
    }

    /// Whether `initialize` has succeeded at least once.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, ResolverState::Initialized { .. })
    }

    /// Whether a non-empty repository root is known.
    #[must_use]
    pub fn root_known(&self) -> bool {
        matches!(
            &self.state,
            ResolverState::Initialized { repository_root, .. } if !repository_root.is_empty()
        )
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> &ResolverState {
        &self.state
    }

    fn initialized(&self, operation: &str) -> Result<(&str, &str)> {
        match &self.state {
            ResolverState::Initialized {
                working_directory,
                repository_root,
            } => Ok((working_directory.as_str(), repository_root.as_str())),
            ResolverState::Uninitialized => {
                debug!(operation, "path resolver used before initialize");
                Err(AppError::Uninitialized(format!(
                    "{operation} called before initialize"
                )))
            }
        }
    }
}
