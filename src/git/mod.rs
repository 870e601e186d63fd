//! Repository root discovery.
//!
//! Asks the version-control tool for the top-level directory of the working
//! tree. Subprocess failures degrade to an empty root; only undecodable
//! output is reported as an error.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info_span, warn};

use crate::config::GlobalConfig;
use crate::Result;

/// Arguments requesting the absolute top-level path with UTF-8 output.
pub const TOPLEVEL_ARGS: [&str; 3] = ["rev-parse", "--show-toplevel", "--encoding=utf-8"];

/// Source of the repository root for a working directory.
pub trait RootLocator {
    /// Return the absolute repository root containing `working_directory`,
    /// or an empty string when none could be determined.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Decode` if the root was reported in a form that
    /// cannot be decoded as UTF-8.
    fn locate(&self, working_directory: &Path) -> Result<String>;
}

impl<T: RootLocator + ?Sized> RootLocator for &T {
    fn locate(&self, working_directory: &Path) -> Result<String> {
        (**self).locate(working_directory)
    }
}

/// Locates the root by running `git rev-parse --show-toplevel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRootLocator {
    binary: String,
}

impl Default for GitRootLocator {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitRootLocator {
    /// Create a locator that invokes `binary`.
    #[must_use]
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Create a locator from the configured `git_binary`.
    #[must_use]
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::new(config.git_binary.clone())
    }

    /// Executable this locator runs.
    #[must_use]
    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl RootLocator for GitRootLocator {
    fn locate(&self, working_directory: &Path) -> Result<String> {
        let span = info_span!(
            "discover_root",
            binary = %self.binary,
            cwd = %working_directory.display()
        );
        let _guard = span.enter();

        let output = match Command::new(&self.binary)
            .args(TOPLEVEL_ARGS)
            .current_dir(working_directory)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
        {
            Ok(output) => output,
            Err(err) => {
                warn!(%err, "failed to run version-control binary; repository root unknown");
                return Ok(String::new());
            }
        };

        if !output.stderr.is_empty() {
            debug!(
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "root discovery wrote to stderr"
            );
        }
        debug!(status = %output.status, "root discovery finished");

        let root = parse_toplevel(&output.stdout)?;
        if root.is_empty() {
            warn!("no repository root reported");
        }
        Ok(root)
    }
}

/// Extract the repository root from `rev-parse` standard output.
///
/// Surrounding whitespace is trimmed and only the first whitespace-separated
/// token is kept, since git echoes unrecognized options such as
/// `--encoding=utf-8` after the path. Empty output yields an empty root.
///
/// # Errors
///
/// Returns `AppError::Decode` if the token is not valid UTF-8.
pub fn parse_toplevel(stdout: &[u8]) -> Result<String> {
    let token = stdout
        .split(u8::is_ascii_whitespace)
        .find(|token| !token.is_empty())
        .unwrap_or_default();
    Ok(std::str::from_utf8(token)?.to_owned())
}
