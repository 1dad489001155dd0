//! # inject-deps-launcher
//!
//! Relocation shim for `inject_deps_path.py`. The real script now lives in
//! `temp/` beside this launcher; the launcher finds it and becomes it, or
//! prints a single fallback line when it is not there.

pub mod config;
pub mod error;
pub mod launcher;
pub mod logging;

pub use config::LauncherConfig;
pub use error::{LauncherError, Result};
pub use launcher::{DelegateInvocation, Plan, plan, run};
