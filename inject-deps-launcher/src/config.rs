//! Interpreter selection for the delegate script
//!
//! Reads an optional `inject_deps_path.toml` next to the launcher, then lets
//! `INJECT_DEPS_INTERPRETER` override whatever the file says.

use crate::error::{ParseConfigSnafu, ReadConfigSnafu, Result};
use serde::Deserialize;
use snafu::ResultExt;
use std::path::{Path, PathBuf};

/// Config file looked up in the launcher directory
pub const CONFIG_FILE: &str = "inject_deps_path.toml";

/// Environment override for the delegate interpreter
pub const INTERPRETER_ENV: &str = "INJECT_DEPS_INTERPRETER";

#[cfg(unix)]
const DEFAULT_INTERPRETER: &str = "python3";
#[cfg(not(unix))]
const DEFAULT_INTERPRETER: &str = "python";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub interpreter: PathBuf,
}

/// On-disk shape of `inject_deps_path.toml`
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    interpreter: Option<PathBuf>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from(DEFAULT_INTERPRETER),
        }
    }
}

impl LauncherConfig {
    /// Load config for a launcher living in `base_dir`
    pub fn load(base_dir: &Path) -> Result<Self> {
        let env_override = std::env::var_os(INTERPRETER_ENV);
        Self::load_with(base_dir, env_override.as_deref().map(Path::new))
    }

    /// Same as [`LauncherConfig::load`] with the environment passed in
    pub fn load_with(base_dir: &Path, env_override: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let config_path = base_dir.join(CONFIG_FILE);
        if let Some(file) = read_config_file(&config_path)? {
            if let Some(interpreter) = file.interpreter {
                tracing::debug!(
                    "interpreter {} from {}",
                    interpreter.display(),
                    config_path.display()
                );
                config.interpreter = interpreter;
            }
        }

        if let Some(interpreter) = env_override.filter(|p| !p.as_os_str().is_empty()) {
            tracing::debug!("interpreter {} from {}", interpreter.display(), INTERPRETER_ENV);
            config.interpreter = interpreter.to_path_buf();
        }

        Ok(config)
    }
}

/// Missing file is not an error
fn read_config_file(path: &Path) -> Result<Option<ConfigFile>> {
    if !path.is_file() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).context(ReadConfigSnafu { path })?;
    let file = toml::from_str(&content).context(ParseConfigSnafu { path })?;
    Ok(Some(file))
}
