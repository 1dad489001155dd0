//! stderr diagnostics
//!
//! `tracing` events flow through its `log` feature into `env_logger`.
//! stdout stays reserved for the single fallback line.

use std::io::Write;

/// Set to any value to get debug output without spelling out `RUST_LOG`
pub const DEBUG_ENV: &str = "INJECT_DEPS_DEBUG";

const DEFAULT_FILTER: &str = "warn";

/// Filter used when `RUST_LOG` is unset
pub fn default_filter(debug: bool) -> &'static str {
    if debug { "debug" } else { DEFAULT_FILTER }
}

pub fn init() {
    let debug = std::env::var_os(DEBUG_ENV).is_some();
    let env = env_logger::Env::default().default_filter_or(default_filter(debug));

    let installed = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            writeln!(buf, "inject_deps_path [{}] {}", record.level(), record.args())
        })
        .try_init();

    // Only a repeated init() in the same process gets here
    if let Err(e) = installed {
        tracing::debug!("logger already initialised: {}", e);
    }
}
