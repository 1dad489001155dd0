//! Error taxonomy for the launcher
//!
//! Every failure the launcher can hit before or during the hand-off.
//! None of these are retried; `main` reports them and exits non-zero.

use snafu::Snafu;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum LauncherError {
    #[snafu(display("Failed to determine current executable path"))]
    LocateSelf { source: std::io::Error },

    #[snafu(display("Failed to read current working directory"))]
    CurrentDir { source: std::io::Error },

    #[snafu(display("Executable path has no parent directory: {}", exe.display()))]
    NoParentDir { exe: PathBuf },

    #[snafu(display("Failed to read {}", path.display()))]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to parse {}", path.display()))]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[snafu(display("Failed to write to stdout"))]
    WriteOutput { source: std::io::Error },

    #[snafu(display(
        "Failed to execute {} {}",
        interpreter.display(),
        script.display()
    ))]
    Exec {
        interpreter: PathBuf,
        script: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T, E = LauncherError> = std::result::Result<T, E>;
