//! Fixed project layout: where assets live and where generated sources go.
//!
//! All functions here are pure path derivations from `(root, category, stem)`.
//! Re-running discovery on an unchanged tree therefore derives identical
//! output paths.

use std::path::{Path, PathBuf};

use super::{Category, ShaderStage};

/// Extension of compiled shader bytecode.
pub const SHADER_EXTENSION: &str = "spv";

/// Raster formats accepted as image assets.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tga", "gif"];

/// Raster formats accepted as font atlases.
pub const FONT_EXTENSIONS: &[&str] = &["png", "bmp", "tga"];

const RENDER_ENGINE: &str = "src/game_engine_sdk/render_engine";

/// Source directory for one shader stage.
pub fn shader_root(root: &Path, stage: ShaderStage) -> PathBuf {
    root.join(RENDER_ENGINE)
        .join("shaders")
        .join(stage.dir_name())
}

/// Source directory for image assets.
pub fn images_root(root: &Path) -> PathBuf {
    root.join("assets/images")
}

/// Base directory containing one subdirectory per font.
pub fn fonts_root(root: &Path) -> PathBuf {
    root.join("assets/fonts")
}

/// Directory receiving both generated files for one asset.
pub fn output_dir(root: &Path, category: Category, stem: &str) -> PathBuf {
    let resources = root.join(RENDER_ENGINE).join("resources");
    match category {
        Category::Shader(stage) => resources
            .join("shaders")
            .join(stage.dir_name())
            .join(stem),
        Category::Image => resources.join("images").join(stem),
        Category::Font => resources.join("fonts").join(stem),
    }
}
