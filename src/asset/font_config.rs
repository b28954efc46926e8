//! Font sidecar configuration.
//!
//! Every font atlas may carry a JSON sidecar next to it (`font.png` →
//! `font.json`) describing the atlas and glyph-cell geometry. A missing
//! sidecar gets an example written in its place; the defaults are used for
//! the current run rather than re-reading the file just written.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{debug, log};

/// Default atlas side length in pixels.
pub const DEFAULT_ATLAS_SIDE: u32 = 512;

/// Default glyph cell side length in pixels.
pub const DEFAULT_CHAR_SIDE: u32 = 64;

/// Atlas and glyph-cell geometry for a bitmap font.
///
/// Doubles as the sidecar schema: every key is optional and falls back to
/// its default independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontMetadata {
    #[serde(default = "default_atlas_side")]
    pub atlas_width: u32,
    #[serde(default = "default_atlas_side")]
    pub atlas_height: u32,
    #[serde(default = "default_char_side")]
    pub char_width: u32,
    #[serde(default = "default_char_side")]
    pub char_height: u32,
}

impl Default for FontMetadata {
    fn default() -> Self {
        Self {
            atlas_width: DEFAULT_ATLAS_SIDE,
            atlas_height: DEFAULT_ATLAS_SIDE,
            char_width: DEFAULT_CHAR_SIDE,
            char_height: DEFAULT_CHAR_SIDE,
        }
    }
}

fn default_atlas_side() -> u32 {
    DEFAULT_ATLAS_SIDE
}

fn default_char_side() -> u32 {
    DEFAULT_CHAR_SIDE
}

/// Sidecar path for a font asset: same stem, `.json`, same directory.
pub fn sidecar_path(font_path: &Path) -> PathBuf {
    font_path.with_extension("json")
}

/// Resolve atlas and glyph geometry for a font file.
pub fn resolve(font_path: &Path) -> FontMetadata {
    let config_path = sidecar_path(font_path);

    if !config_path.exists() {
        log!("fonts"; "config {} not found, creating example", config_path.display());
        create_example(&config_path);
        return FontMetadata::default();
    }

    match load(&config_path) {
        Ok(metadata) => {
            debug!("fonts"; "loaded config from {}", config_path.display());
            metadata
        }
        Err(e) => {
            log!("error"; "invalid font config {}: {e:#}", config_path.display());
            FontMetadata::default()
        }
    }
}

fn load(path: &Path) -> Result<FontMetadata> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Write an example sidecar populated with the defaults.
///
/// Failure to create it is logged, not fatal.
fn create_example(path: &Path) {
    let write = || -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&FontMetadata::default())?;
        fs::write(path, text)?;
        Ok(())
    };

    match write() {
        Ok(()) => log!("fonts"; "created example font config at {}", path.display()),
        Err(e) => log!("error"; "could not create example font config: {e:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidecar_path_replaces_extension() {
        assert_eq!(
            sidecar_path(Path::new("assets/fonts/mono/mono.png")),
            Path::new("assets/fonts/mono/mono.json")
        );
    }

    #[test]
    fn test_missing_keys_fall_back_independently() {
        let metadata: FontMetadata = serde_json::from_str(r#"{"atlas_width": 256}"#).unwrap();
        assert_eq!(metadata.atlas_width, 256);
        assert_eq!(metadata.atlas_height, DEFAULT_ATLAS_SIDE);
        assert_eq!(metadata.char_width, DEFAULT_CHAR_SIDE);
        assert_eq!(metadata.char_height, DEFAULT_CHAR_SIDE);
    }

    #[test]
    fn test_empty_config_yields_defaults() {
        let metadata: FontMetadata = serde_json::from_str("{}").unwrap();
        assert_eq!(metadata, FontMetadata::default());
    }
}
