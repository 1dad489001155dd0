//! Self-location and delegate path derivation
//!
//! The launcher directory is taken from the path it was invoked through, so a
//! symlinked launcher looks for `temp/` beside the link. A bare program name
//! (found via `PATH`) falls back to `current_exe()`.

use crate::error::{CurrentDirSnafu, LauncherError, LocateSelfSnafu, NoParentDirSnafu, Result};
use snafu::{OptionExt, ResultExt};
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Directory under the launcher directory holding the delegate
pub const DELEGATE_DIR: &str = "temp";

/// File name of the delegate script
pub const DELEGATE_FILE: &str = "inject_deps_path.py";

/// Directory containing `exe`, made absolute against `cwd` when needed
///
/// `cwd` is only called for a relative `exe`.
pub fn resolve_base_dir<C>(exe: &Path, cwd: C) -> Result<PathBuf>
where
    C: FnOnce() -> Result<PathBuf>,
{
    let exe = if exe.is_absolute() {
        exe.to_path_buf()
    } else {
        cwd()?.join(exe)
    };

    let parent = exe
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .context(NoParentDirSnafu { exe: exe.clone() })?;

    Ok(parent.to_path_buf())
}

/// `argv[0]` names a path rather than a bare command
fn has_dir_component(invoked: &Path) -> bool {
    invoked.parent().is_some_and(|dir| !dir.as_os_str().is_empty())
}

fn current_dir() -> Result<PathBuf> {
    env::current_dir().context(CurrentDirSnafu)
}

/// Absolute directory of the running launcher
///
/// `argv0` is the program name as invoked, `args_os().next()`.
pub fn locate_self(argv0: Option<&OsStr>) -> Result<PathBuf> {
    if let Some(invoked) = argv0.map(Path::new).filter(|p| has_dir_component(p)) {
        if invoked.is_file() {
            match resolve_base_dir(invoked, current_dir) {
                Ok(dir) => return Ok(dir),
                Err(LauncherError::CurrentDir { source }) => {
                    tracing::debug!("cannot absolutize {}: {}", invoked.display(), source);
                }
                Err(e) => return Err(e),
            }
        } else {
            tracing::debug!("argv[0] {} is not a file, using current_exe", invoked.display());
        }
    }

    let current_exe = env::current_exe().context(LocateSelfSnafu)?;
    resolve_base_dir(&current_exe, current_dir)
}

/// `<base_dir>/temp/inject_deps_path.py`
pub fn delegate_path(base_dir: &Path) -> PathBuf {
    base_dir.join(DELEGATE_DIR).join(DELEGATE_FILE)
}
