#![forbid(unsafe_code)]

//! Translate paths reported by `git diff` between repository-root
//! coordinates and the caller's working directory.

pub mod config;
pub mod errors;
pub mod git;
pub mod paths;
pub mod resolver;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};
pub use git::{GitRootLocator, RootLocator};
pub use resolver::{PathResolver, ResolverState};
