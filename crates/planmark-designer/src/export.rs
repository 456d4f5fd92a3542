//! Export collaborator seam and page fitting.
//!
//! Rasterizing and document generation live outside the designer. This
//! module computes where the rendered canvas goes on a fixed-size page and
//! defines the trait the renderers implement.

use planmark_settings::ExportSettings;

use crate::serialization::Layout;

/// Output format of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

/// Size of the rendered canvas in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentSize {
    pub width: f64,
    pub height: f64,
}

impl ContentSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Page geometry in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl PageSize {
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::from(&ExportSettings::default())
    }
}

impl From<&ExportSettings> for PageSize {
    fn from(settings: &ExportSettings) -> Self {
        Self::new(settings.page_width, settings.page_height, settings.margin)
    }
}

/// Where the content lands on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePlacement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

/// Scales `content` to fit inside the page margins, preserving aspect ratio,
/// and centers it. Returns `None` when either side has no area.
pub fn fit_to_page(content: ContentSize, page: &PageSize) -> Option<PagePlacement> {
    let available_w = page.width - 2.0 * page.margin;
    let available_h = page.height - 2.0 * page.margin;
    if !content.has_area() || available_w <= 0.0 || available_h <= 0.0 {
        return None;
    }

    let scale = (available_w / content.width).min(available_h / content.height);
    let width = content.width * scale;
    let height = content.height * scale;

    Some(PagePlacement {
        x: (page.width - width) / 2.0,
        y: (page.height - height) / 2.0,
        width,
        height,
        scale,
    })
}

/// Everything a renderer needs to produce one export.
#[derive(Debug, Clone)]
pub struct ExportRequest<'a> {
    pub format: ExportFormat,
    pub layout: &'a Layout,
    pub content: ContentSize,
    /// Page placement, set for PDF exports.
    pub placement: Option<PagePlacement>,
}

/// Renders a layout to bytes (PNG stream or single-page PDF).
pub trait CanvasExporter {
    fn export(&self, request: &ExportRequest<'_>) -> anyhow::Result<Vec<u8>>;
}
