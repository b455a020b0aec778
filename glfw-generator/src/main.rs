//! Offline generator for the committed constant modules.
//!
//! Reads GLFW's public header, extracts every numeric `#define GLFW_*`
//! constant and rewrites the two generated source files in place. Run it
//! from the workspace root after a header upgrade and review the diff:
//!
//! ```text
//! cargo run -p glfw-generator -- path/to/GLFW/glfw3.h
//! ```
//!
//! Any I/O failure is fatal. A partially written constants module is worse
//! than a failed run, so there is no degraded mode.

use std::env;
use std::fs;
use std::process;

use anyhow::{Context, Result};
use log::info;

mod extract;

use extract::{extract_constants, render_binding_constants, render_sys_constants};

const DEFAULT_HEADER: &str = "thirdparty/glfw/include/GLFW/glfw3.h";
const SYS_CONSTANTS_PATH: &str = "glfw-sys/src/constants.rs";
const BINDING_CONSTANTS_PATH: &str = "glfw/src/consts.rs";

fn run() -> Result<()> {
    let header_path = env::args().nth(1).unwrap_or_else(|| DEFAULT_HEADER.to_owned());

    let header = fs::read_to_string(&header_path)
        .with_context(|| format!("failed to read header {header_path}"))?;

    let constants = extract_constants(&header);

    fs::write(SYS_CONSTANTS_PATH, render_sys_constants(&constants))
        .with_context(|| format!("failed to write {SYS_CONSTANTS_PATH}"))?;
    fs::write(BINDING_CONSTANTS_PATH, render_binding_constants(&constants))
        .with_context(|| format!("failed to write {BINDING_CONSTANTS_PATH}"))?;

    info!(
        "extracted {} constants from {} into {} and {}",
        constants.len(),
        header_path,
        SYS_CONSTANTS_PATH,
        BINDING_CONSTANTS_PATH
    );
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("glfw-generator: {err:#}");
        process::exit(1);
    }
}
