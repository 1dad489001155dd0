//! Hand-off to the delegate interpreter
//!
//! On Unix the launcher's process image is replaced outright. Platforms
//! without exec get spawn-and-wait with the child's exit code passed through.

use crate::error::{ExecSnafu, Result};
use snafu::ResultExt;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

/// `interpreter script args...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegateInvocation {
    pub interpreter: PathBuf,
    pub script: PathBuf,
    pub args: Vec<OsString>,
}

impl DelegateInvocation {
    /// Environment and stdio are inherited untouched
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.interpreter);
        cmd.arg(&self.script).args(&self.args);
        cmd
    }
}

/// Replace the current process with the delegate
///
/// Only returns on failure.
#[cfg(unix)]
pub fn hand_off(invocation: &DelegateInvocation) -> Result<i32> {
    use std::os::unix::process::CommandExt;

    tracing::debug!(
        "exec {} {} ({} args)",
        invocation.interpreter.display(),
        invocation.script.display(),
        invocation.args.len()
    );

    let err = invocation.command().exec();
    Err(err).context(ExecSnafu {
        interpreter: invocation.interpreter.clone(),
        script: invocation.script.clone(),
    })
}

/// Run the delegate as a child and return its exit code
#[cfg(not(unix))]
pub fn hand_off(invocation: &DelegateInvocation) -> Result<i32> {
    tracing::debug!(
        "spawn {} {} ({} args)",
        invocation.interpreter.display(),
        invocation.script.display(),
        invocation.args.len()
    );

    let status = invocation.command().status().context(ExecSnafu {
        interpreter: invocation.interpreter.clone(),
        script: invocation.script.clone(),
    })?;

    Ok(status.code().unwrap_or(1))
}
