//! Template-driven rendering of the generated C++ sources.
//!
//! Pure functions: a descriptor plus its encoded byte dump in, the header
//! and implementation text out. Writing is the pipeline's job.

use crate::asset::{AssetDescriptor, Category};

use super::template::{Template, TemplateVars};

// ============================================================================
// Templates
// ============================================================================

const SHADER_HEADER: Template<HeaderVars> = Template::new(
    r#"#pragma once
#include "graphics_pipeline/ShaderResource.h"
#include <memory>

class __CLASS_NAME__ {
  public:
  static std::unique_ptr<graphics_pipeline::ShaderResource> create_resource();
};
"#,
);

const IMAGE_HEADER: Template<HeaderVars> = Template::new(
    r#"#pragma once
#include "game_engine_sdk/render_engine/resources/images/ImageResource.h"
#include <memory>

class __CLASS_NAME__ {
  public:
    static std::unique_ptr<ImageResource> create_resource();
};
"#,
);

const FONT_HEADER: Template<HeaderVars> = Template::new(
    r#"#pragma once
#include "game_engine_sdk/render_engine/resources/fonts/FontResource.h"
#include <memory>

class __CLASS_NAME__ {
  public:
    static std::unique_ptr<FontResource> create_resource();
};
"#,
);

const IMPL_FILE: Template<ImplVars> = Template::new(
    r#"/// This file is auto generated by assetc
#include "__STEM__.h"

namespace {
std::string resource_name = "__RESOURCE_NAME__";

__BYTE_DUMP__
} // namespace

__CREATE_FUNCTION__
"#,
);

const STANDARD_CREATE: Template<CreateVars> = Template::new(
    r#"std::unique_ptr<__RESOURCE_TYPE__> __CLASS_NAME__::create_resource() {
    return __RESOURCE_TYPE__Builder()
        .name(std::move(resource_name))
        .length(__SYMBOL___len)
        .bytes(&__SYMBOL__[0])
        .build();
}"#,
);

const FONT_CREATE: Template<FontCreateVars> = Template::new(
    r#"std::unique_ptr<__RESOURCE_TYPE__> __CLASS_NAME__::create_resource() {
    return __RESOURCE_TYPE__Builder()
        .name(std::move(resource_name))
        .length(__SYMBOL___len)
        .bytes(&__SYMBOL__[0])
        .atlas_width(__ATLAS_WIDTH__)
        .atlas_height(__ATLAS_HEIGHT__)
        .char_width(__CHAR_WIDTH__)
        .char_height(__CHAR_HEIGHT__)
        .build();
}"#,
);

// ============================================================================
// Template variables
// ============================================================================

struct HeaderVars {
    class_name: String,
}

impl TemplateVars for HeaderVars {
    fn apply(&self, content: &str) -> String {
        content.replace("__CLASS_NAME__", &self.class_name)
    }
}

struct ImplVars {
    stem: String,
    resource_name: String,
    byte_dump: String,
    create_function: String,
}

impl TemplateVars for ImplVars {
    fn apply(&self, content: &str) -> String {
        content
            .replace("__STEM__", &self.stem)
            .replace("__RESOURCE_NAME__", &self.resource_name)
            .replace("__BYTE_DUMP__", &self.byte_dump)
            .replace("__CREATE_FUNCTION__", &self.create_function)
    }
}

struct CreateVars {
    resource_type: String,
    class_name: String,
    symbol: String,
}

impl TemplateVars for CreateVars {
    fn apply(&self, content: &str) -> String {
        content
            .replace("__RESOURCE_TYPE__", &self.resource_type)
            .replace("__CLASS_NAME__", &self.class_name)
            .replace("__SYMBOL__", &self.symbol)
    }
}

struct FontCreateVars {
    create: CreateVars,
    atlas_width: u32,
    atlas_height: u32,
    char_width: u32,
    char_height: u32,
}

impl TemplateVars for FontCreateVars {
    fn apply(&self, content: &str) -> String {
        self.create
            .apply(content)
            .replace("__ATLAS_WIDTH__", &self.atlas_width.to_string())
            .replace("__ATLAS_HEIGHT__", &self.atlas_height.to_string())
            .replace("__CHAR_WIDTH__", &self.char_width.to_string())
            .replace("__CHAR_HEIGHT__", &self.char_height.to_string())
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render both artifacts for one asset: `(header, implementation)`.
pub fn render(asset: &AssetDescriptor, byte_dump: &str) -> (String, String) {
    (render_header(asset), render_implementation(asset, byte_dump))
}

/// Render the declaration exposing the typed constructor.
pub fn render_header(asset: &AssetDescriptor) -> String {
    let template = match asset.category {
        Category::Shader(_) => SHADER_HEADER,
        Category::Image => IMAGE_HEADER,
        Category::Font => FONT_HEADER,
    };

    template.render(&HeaderVars {
        class_name: asset.resource_name.clone(),
    })
}

/// Render the implementation embedding the byte dump.
pub fn render_implementation(asset: &AssetDescriptor, byte_dump: &str) -> String {
    IMPL_FILE.render(&ImplVars {
        stem: asset.stem().to_string(),
        resource_name: asset.resource_name.clone(),
        byte_dump: byte_dump.to_string(),
        create_function: render_create_function(asset),
    })
}

/// Render the constructor body building the resource via its fluent builder.
fn render_create_function(asset: &AssetDescriptor) -> String {
    let create = CreateVars {
        resource_type: asset.category.resource_type().to_string(),
        class_name: asset.resource_name.clone(),
        symbol: asset.symbol_name(),
    };

    match asset.category {
        Category::Font => {
            let metadata = asset.font_metadata.unwrap_or_default();
            FONT_CREATE.render(&FontCreateVars {
                create,
                atlas_width: metadata.atlas_width,
                atlas_height: metadata.atlas_height,
                char_width: metadata.char_width,
                char_height: metadata.char_height,
            })
        }
        Category::Shader(_) | Category::Image => STANDARD_CREATE.render(&create),
    }
}
