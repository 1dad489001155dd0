//! Thin launcher binary that delegates to `temp/inject_deps_path.py`
//!
//! No flags are parsed: every argument goes to the delegate untouched.

use anyhow::Context;
use std::env;
use std::ffi::OsString;
use std::process::exit;

fn main() {
    inject_deps_launcher::logging::init();

    // Keep argv[0] so plan() sees the same list the OS handed us
    let args: Vec<OsString> = env::args_os().collect();

    // stdout is locked only for the fallback echo, never across the hand-off
    let result = inject_deps_launcher::run(&args, || std::io::stdout().lock())
        .context("inject_deps_path launcher failed");

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:#}", e);
            exit(1);
        }
    }
}
