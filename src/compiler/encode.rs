//! Binary-to-literal encoding via the external `xxd` tool.
//!
//! `xxd -i <file>` emits a C array named after the file plus a `_len`
//! symbol; its stdout is captured verbatim and spliced into the generated
//! implementation. The child process runs with the asset's source directory
//! as its working directory so the symbol is derived from the bare
//! filename; the compiler's own working directory is never touched.

use std::process::ExitStatus;

use anyhow::{Result, bail};
use thiserror::Error;

use crate::asset::AssetDescriptor;
use crate::utils::exec::Cmd;

/// The external byte-dump tool.
pub const XXD_BIN: &str = "xxd";

/// Failure modes of the byte-dump invocation.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The tool ran and reported a non-zero exit; isolated to one asset.
    #[error("xxd exited with {status}")]
    ToolFailed { status: ExitStatus },

    /// The tool could not be spawned at all; aborts the whole run.
    #[error("xxd is not available: {0}")]
    ToolUnavailable(String),
}

/// Verify the byte-dump tool exists before starting a batch.
pub fn ensure_tool() -> Result<()> {
    if which::which(XXD_BIN).is_err() {
        bail!("`{XXD_BIN}` not found on PATH. Please install xxd.");
    }
    Ok(())
}

/// Run `xxd -i` on the asset and capture the emitted literal array.
pub fn dump_bytes(asset: &AssetDescriptor) -> Result<String, EncodeError> {
    let output = Cmd::new(XXD_BIN)
        .arg("-i")
        .arg(&asset.filename)
        .cwd(&asset.source_dir)
        .run()
        .map_err(|e| EncodeError::ToolUnavailable(format!("{e:#}")))?;

    if !output.status.success() {
        return Err(EncodeError::ToolFailed {
            status: output.status,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Placeholder embedded in place of the array when the tool fails.
pub fn failure_placeholder(status: ExitStatus) -> String {
    format!("// Error: xxd failed with {status}")
}
