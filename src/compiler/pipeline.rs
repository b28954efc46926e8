//! Compilation pipeline: per-asset compile plus the batch driver.
//!
//! Per-asset failures are isolated and summarized at the end of the run;
//! only an unavailable byte-dump tool aborts the whole batch.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::asset::{self, AssetDescriptor};
use crate::log;
use crate::utils::plural::{plural_count, plural_s};

use super::encode::{self, EncodeError};
use super::render;

/// Outcome of a full run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub succeeded: usize,
    pub total: usize,
    pub dry_run: bool,
}

impl RunSummary {
    /// True when at least one asset failed in real mode.
    pub fn failed(&self) -> bool {
        !self.dry_run && self.succeeded < self.total
    }
}

/// Discover and compile every asset under `root`.
pub fn run_all(root: &Path, dry_run: bool) -> Result<RunSummary> {
    log!("scan"; "discovering assets in {}", root.display());
    let assets = asset::discover_all(root)?;

    if assets.is_empty() {
        log!("warn"; "no assets found to compile");
        return Ok(RunSummary {
            succeeded: 0,
            total: 0,
            dry_run,
        });
    }

    // Probe once up front: a missing tool is an environment error for the
    // whole batch, not a per-asset failure. Dry runs never invoke it.
    if !dry_run {
        encode::ensure_tool()?;
    }

    let mut succeeded = 0;
    for asset in &assets {
        if compile(asset, dry_run)? {
            succeeded += 1;
        }
    }

    let total = assets.len();
    if dry_run {
        log!("dry-run"; "would compile {}", plural_count(total, "asset"));
    } else {
        log!("compile"; "successfully compiled {succeeded}/{total} asset{}", plural_s(total));
    }

    Ok(RunSummary {
        succeeded,
        total,
        dry_run,
    })
}

/// Compile one asset.
///
/// Returns `Ok(false)` for a per-asset failure; `Err` only for conditions
/// that must abort the batch.
pub fn compile(asset: &AssetDescriptor, dry_run: bool) -> Result<bool> {
    log!("compile"; "{} -> {}", asset.filename, asset.resource_name);

    // Re-check: discovery and compilation may be separated in time.
    let source = asset.source_path();
    if !source.exists() {
        log!("error"; "source file not found: {}", source.display());
        return Ok(false);
    }

    if dry_run {
        log!("dry-run"; "would generate {}", asset.output_impl.display());
        log!("dry-run"; "would generate {}", asset.output_header.display());
        return Ok(true);
    }

    if let Err(e) = create_output_dirs(asset) {
        log!("error"; "failed to compile {}: {e:#}", asset.filename);
        return Ok(false);
    }

    let (byte_dump, encoded) = match encode::dump_bytes(asset) {
        Ok(text) => (text, true),
        Err(EncodeError::ToolFailed { status }) => {
            log!("error"; "xxd failed for {}: {status}", asset.filename);
            (encode::failure_placeholder(status), false)
        }
        Err(e @ EncodeError::ToolUnavailable(_)) => {
            log!("error"; "{e}");
            return Err(e.into());
        }
    };

    let (header, implementation) = render::render(asset, &byte_dump);

    if let Err(e) = write_artifacts(asset, &header, &implementation) {
        log!("error"; "failed to compile {}: {e:#}", asset.filename);
        return Ok(false);
    }

    log!("compile"; "generated {} and {}",
        asset.output_impl.display(), asset.output_header.display());
    Ok(encoded)
}

fn create_output_dirs(asset: &AssetDescriptor) -> Result<()> {
    for path in [&asset.output_impl, &asset.output_header] {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Write both artifacts, overwriting any existing content unconditionally.
fn write_artifacts(asset: &AssetDescriptor, header: &str, implementation: &str) -> Result<()> {
    fs::write(&asset.output_header, header)
        .with_context(|| format!("failed to write {}", asset.output_header.display()))?;
    fs::write(&asset.output_impl, implementation)
        .with_context(|| format!("failed to write {}", asset.output_impl.display()))?;
    Ok(())
}
