//! Asset categories and their code-generation attributes.

/// Pipeline stage of a compiled shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Directory name the stage lives under, both for sources and outputs.
    pub fn dir_name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

/// Category of a discovered asset.
///
/// Closed set: each category selects the output templates and the resource
/// type the generated constructor builds. Adding a category means adding a
/// template, which the exhaustive matches below enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Shader(ShaderStage),
    Image,
    Font,
}

impl Category {
    /// Suffix appended to the PascalCase stem when deriving the resource name.
    pub fn name_suffix(self) -> &'static str {
        match self {
            Category::Shader(ShaderStage::Vertex) => "Vertex",
            Category::Shader(ShaderStage::Fragment) => "Fragment",
            Category::Image => "Image",
            Category::Font => "Font",
        }
    }

    /// C++ resource type returned by the generated constructor.
    ///
    /// Shader resources live in the `graphics_pipeline` namespace; image
    /// and font resources are global.
    pub fn resource_type(self) -> &'static str {
        match self {
            Category::Shader(_) => "graphics_pipeline::ShaderResource",
            Category::Image => "ImageResource",
            Category::Font => "FontResource",
        }
    }
}
