#![forbid(unsafe_code)]

//! `git-path` — translate `git diff` paths from the command line.
//!
//! Discovers the repository root for a working directory, then prints
//! diff paths either relative to that directory or as absolute paths.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use git_path::{AppError, GlobalConfig, PathResolver, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "git-path", about = "Translate git diff paths", version, long_about = None)]
struct Cli {
    /// Working directory paths are resolved against (defaults to the current directory).
    #[arg(long)]
    cwd: Option<OsString>,

    /// Path to an optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail when no repository root can be discovered.
    #[arg(long)]
    strict: bool,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the discovered repository root.
    Root,

    /// Print diff paths relative to the working directory.
    Relative {
        /// Paths as reported by `git diff`.
        #[arg(required = true)]
        paths: Vec<OsString>,
        /// Emit one JSON object per path.
        #[arg(long)]
        json: bool,
    },

    /// Print diff paths joined onto the repository root.
    Absolute {
        /// Paths as reported by `git diff`.
        #[arg(required = true)]
        paths: Vec<OsString>,
        /// Emit one JSON object per path.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct Resolved<'a> {
    input: &'a str,
    output: &'a str,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    if let Err(err) = init_tracing(args.log_format) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => GlobalConfig::load_from_path(path)?,
        None => GlobalConfig::default(),
    };
    if args.strict {
        config.strict_root = true;
    }
    debug!(?config, "configuration loaded");

    let cwd = match args.cwd {
        Some(cwd) => decode_arg(cwd)?,
        None => {
            let current = std::env::current_dir()
                .map_err(|err| AppError::Io(format!("cannot read current directory: {err}")))?;
            decode_arg(current.into_os_string())?
        }
    };

    let mut resolver = PathResolver::from_config(&config);
    resolver.initialize(&cwd)?;

    match args.command {
        Command::Root => println!("{}", resolver.repository_root()?),
        Command::Relative { paths, json } => {
            print_resolved(paths, json, |path| resolver.relative_path(path))?;
        }
        Command::Absolute { paths, json } => {
            print_resolved(paths, json, |path| resolver.absolute_path(path))?;
        }
    }

    Ok(())
}

fn print_resolved<F>(paths: Vec<OsString>, json: bool, resolve: F) -> Result<()>
where
    F: Fn(&str) -> Result<String>,
{
    for raw in paths {
        let input = decode_arg(raw)?;
        let output = resolve(&input)?;
        if json {
            let line = serde_json::to_string(&Resolved {
                input: &input,
                output: &output,
            })
            .map_err(|err| AppError::Io(format!("failed to encode json: {err}")))?;
            println!("{line}");
        } else {
            println!("{output}");
        }
    }
    Ok(())
}

/// Decode a raw command-line value to text at the process boundary.
fn decode_arg(raw: OsString) -> Result<String> {
    raw.into_string().map_err(|raw| {
        AppError::Decode(format!(
            "argument is not valid utf-8: {}",
            raw.to_string_lossy()
        ))
    })
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
