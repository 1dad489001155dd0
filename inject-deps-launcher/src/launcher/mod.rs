//! Path-delegating launcher
//!
//! Looks for `temp/inject_deps_path.py` next to the launcher binary:
//! - present: hand the process over to the interpreter running it, args[1..] forwarded
//! - absent: print args[1], or the working directory when there is no args[1]

pub mod exec;
pub mod locate;

pub use exec::{DelegateInvocation, hand_off};
pub use locate::{DELEGATE_DIR, DELEGATE_FILE, delegate_path, locate_self, resolve_base_dir};

use crate::config::LauncherConfig;
use crate::error::{CurrentDirSnafu, Result, WriteOutputSnafu};
use snafu::ResultExt;
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::{Path, PathBuf};

/// What the launcher is going to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Delegate(DelegateInvocation),
    Echo(OsString),
}

/// Decide between hand-off and fallback
///
/// `args[0]` is the program name and is never forwarded. `cwd` is only read
/// when there is nothing else to echo, `interpreter` only when the delegate
/// exists.
pub fn plan<C, F>(base_dir: &Path, args: &[OsString], cwd: C, interpreter: F) -> Result<Plan>
where
    C: FnOnce() -> Result<PathBuf>,
    F: FnOnce() -> Result<PathBuf>,
{
    let script = delegate_path(base_dir);

    if script.exists() {
        tracing::debug!("delegate found at {}", script.display());
        return Ok(Plan::Delegate(DelegateInvocation {
            interpreter: interpreter()?,
            script,
            args: args.iter().skip(1).cloned().collect(),
        }));
    }

    tracing::debug!("no delegate at {}, falling back", script.display());
    let value = match args.get(1) {
        Some(first) => first.clone(),
        None => cwd()?.into_os_string(),
    };
    Ok(Plan::Echo(value))
}

/// Write `value` and a newline, then flush
pub fn echo<W: Write>(value: &OsStr, out: &mut W) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        out.write_all(value.as_bytes()).context(WriteOutputSnafu)?;
    }
    #[cfg(not(unix))]
    out.write_all(value.to_string_lossy().as_bytes())
        .context(WriteOutputSnafu)?;

    out.write_all(b"\n").context(WriteOutputSnafu)?;
    out.flush().context(WriteOutputSnafu)
}

/// Full launcher flow; returns the exit code to terminate with
///
/// `open_out` is only called on the fallback path, and the sink it returns is
/// dropped before returning. Nothing holds stdout while the delegate runs.
pub fn run<W, O>(args: &[OsString], open_out: O) -> Result<i32>
where
    W: Write,
    O: FnOnce() -> W,
{
    let base_dir = locate_self(args.first().map(OsString::as_os_str))?;
    tracing::debug!("launcher dir {}", base_dir.display());

    let plan = plan(
        &base_dir,
        args,
        || std::env::current_dir().context(CurrentDirSnafu),
        || LauncherConfig::load(&base_dir).map(|config| config.interpreter),
    )?;

    match plan {
        Plan::Delegate(invocation) => hand_off(&invocation),
        Plan::Echo(value) => {
            let mut out = open_out();
            echo(&value, &mut out)?;
            drop(out);
            Ok(0)
        }
    }
}
