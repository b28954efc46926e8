//! Normalized description of one discovered asset.

use std::path::{Path, PathBuf};

use super::{Category, FontMetadata, layout};

/// One discovered asset plus everything derived from it.
///
/// Descriptors are created fresh by discovery on every run, consumed once
/// by the pipeline, and discarded.
#[derive(Debug, Clone)]
pub struct AssetDescriptor {
    /// Base name with extension, unique within `source_dir`.
    pub filename: String,
    /// Directory the file was discovered in.
    pub source_dir: PathBuf,
    /// Destination of the generated implementation file.
    pub output_impl: PathBuf,
    /// Destination of the generated header file.
    pub output_header: PathBuf,
    pub category: Category,
    /// PascalCase class name exposed by the generated header.
    pub resource_name: String,
    /// Atlas and glyph geometry, present only for fonts.
    pub font_metadata: Option<FontMetadata>,
}

impl AssetDescriptor {
    /// Build a descriptor for a discovered file, deriving resource name and
    /// output paths from the category and filename stem.
    pub fn new(
        root: &Path,
        source_dir: PathBuf,
        filename: String,
        category: Category,
        font_metadata: Option<FontMetadata>,
    ) -> Self {
        let stem = file_stem(&filename);
        let output = layout::output_dir(root, category, stem);
        let output_impl = output.join(format!("{stem}.cpp"));
        let output_header = output.join(format!("{stem}.h"));
        let resource_name = resource_name(stem, category);

        Self {
            filename,
            source_dir,
            output_impl,
            output_header,
            category,
            resource_name,
            font_metadata,
        }
    }

    /// Full path to the source file.
    pub fn source_path(&self) -> PathBuf {
        self.source_dir.join(&self.filename)
    }

    /// Base filename without extension.
    pub fn stem(&self) -> &str {
        file_stem(&self.filename)
    }

    /// Identifier xxd derives for the embedded array (`.` replaced by `_`).
    pub fn symbol_name(&self) -> String {
        self.filename.replace('.', "_")
    }
}

/// Convert a snake_case stem into the PascalCase resource name.
pub fn resource_name(stem: &str, category: Category) -> String {
    let mut name: String = stem.split('_').map(capitalize).collect();
    name.push_str(category.name_suffix());
    name
}

/// Uppercase the first character of a segment, lowercase the rest.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn file_stem(filename: &str) -> &str {
    filename
        .rsplit_once('.')
        .map_or(filename, |(stem, _)| stem)
}
