//! Asset discovery.
//!
//! Each `find_*` function scans one category's fixed roots and returns
//! descriptors for every eligible file. Missing roots are logged and yield
//! zero descriptors; they never abort the run. Scanning is one directory
//! level deep per category.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use rustc_hash::FxHashMap;

use crate::utils::plural::plural_count;
use crate::{debug, log};

use super::{AssetDescriptor, Category, ShaderStage, font_config, layout};

/// Discover every asset under `root`, in category order: shaders, images,
/// fonts.
///
/// Two stems normalizing to the same PascalCase name would write to the
/// same output directory, pairing one asset's header with another's
/// implementation; collisions are rejected before anything is compiled.
pub fn discover_all(root: &Path) -> Result<Vec<AssetDescriptor>> {
    let shaders = find_shaders(root);
    let images = find_images(root);
    let fonts = find_fonts(root);

    log!("scan"; "found {}, {}, {}",
        plural_count(shaders.len(), "shader"),
        plural_count(images.len(), "image"),
        plural_count(fonts.len(), "font"));

    let mut all = shaders;
    all.extend(images);
    all.extend(fonts);

    check_collisions(&all)?;
    Ok(all)
}

/// Find all shader assets, partitioned by stage.
pub fn find_shaders(root: &Path) -> Vec<AssetDescriptor> {
    let mut assets = Vec::new();

    for stage in [ShaderStage::Vertex, ShaderStage::Fragment] {
        let dir = layout::shader_root(root, stage);
        if !dir.exists() {
            log!("warn"; "{} shader directory {} does not exist", stage.dir_name(), dir.display());
            continue;
        }

        for filename in files_with_extensions(&dir, &[layout::SHADER_EXTENSION]) {
            assets.push(AssetDescriptor::new(
                root,
                dir.clone(),
                filename,
                Category::Shader(stage),
                None,
            ));
        }
    }

    assets
}

/// Find all image assets.
pub fn find_images(root: &Path) -> Vec<AssetDescriptor> {
    let dir = layout::images_root(root);
    if !dir.exists() {
        log!("warn"; "images directory {} does not exist", dir.display());
        return Vec::new();
    }

    files_with_extensions(&dir, layout::IMAGE_EXTENSIONS)
        .into_iter()
        .map(|filename| AssetDescriptor::new(root, dir.clone(), filename, Category::Image, None))
        .collect()
}

/// Find all font assets.
///
/// The fonts root holds one subdirectory per font; each atlas inside it
/// gets its sidecar resolved (the only discovery step with a side effect,
/// since a missing sidecar is created with defaults).
pub fn find_fonts(root: &Path) -> Vec<AssetDescriptor> {
    let base = layout::fonts_root(root);
    let Ok(entries) = fs::read_dir(&base) else {
        log!("warn"; "fonts directory {} does not exist", base.display());
        return Vec::new();
    };

    let mut font_dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    font_dirs.sort();

    let mut assets = Vec::new();
    for dir in font_dirs {
        for filename in files_with_extensions(&dir, layout::FONT_EXTENSIONS) {
            let font_path = dir.join(&filename);
            debug!("scan"; "reading {}", font_path.display());

            let metadata = font_config::resolve(&font_path);
            assets.push(AssetDescriptor::new(
                root,
                dir.clone(),
                filename,
                Category::Font,
                Some(metadata),
            ));
        }
    }

    assets
}

/// List files in `dir` matching one of `extensions`, sorted for
/// deterministic discovery order. Single level, directories skipped.
fn files_with_extensions(dir: &Path, extensions: &[&str]) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<String> = entries
        .flatten()
        .filter(|e| e.path().is_file())
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| {
            Path::new(name)
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.contains(&ext))
        })
        .collect();

    files.sort();
    files
}

fn check_collisions(assets: &[AssetDescriptor]) -> Result<()> {
    let mut seen: FxHashMap<&str, &AssetDescriptor> = FxHashMap::default();

    for asset in assets {
        if let Some(previous) = seen.insert(asset.resource_name.as_str(), asset) {
            bail!(
                "resource name `{}` is produced by both `{}` and `{}`",
                asset.resource_name,
                previous.source_path().display(),
                asset.source_path().display()
            );
        }
    }

    Ok(())
}
