//! Image metadata and page layout
//!
//! Locating image files and reading their headers is the job of an
//! [`ImageResolver`] supplied by the caller; the engine itself never touches
//! the filesystem.

use std::collections::HashMap;

pub const MM_PER_INCH: f64 = 25.4;

/// Default maximum printable width, in millimetres
pub const DEFAULT_MAX_WIDTH_MM: f64 = 175.0;

/// Page geometry threaded into image rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub max_width_mm: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            max_width_mm: DEFAULT_MAX_WIDTH_MM,
        }
    }
}

/// Basic metadata of an image file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageMetadata {
    pub width_px: u32,
    pub dpi: f64,
}

impl ImageMetadata {
    pub fn new(width_px: u32, dpi: f64) -> Self {
        Self { width_px, dpi }
    }

    /// Printed width in millimetres, or `None` when the DPI is unusable
    pub fn physical_width_mm(&self) -> Option<f64> {
        (self.dpi.is_finite() && self.dpi > 0.0)
            .then(|| f64::from(self.width_px) * MM_PER_INCH / self.dpi)
    }
}

/// Looks up metadata for the image paths referenced by a document
pub trait ImageResolver: Send + Sync {
    fn metadata(&self, path: &str) -> Option<ImageMetadata>;
}

/// Resolver that knows no images; every image directive falls back
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageResolver for NoImages {
    fn metadata(&self, _path: &str) -> Option<ImageMetadata> {
        None
    }
}

/// Resolver backed by a fixed table, for callers that resolve images up front
#[derive(Debug, Clone, Default)]
pub struct StaticImageResolver {
    images: HashMap<String, ImageMetadata>,
}

impl StaticImageResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, path: impl Into<String>, metadata: ImageMetadata) -> Self {
        self.insert(path, metadata);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, metadata: ImageMetadata) {
        self.images.insert(path.into(), metadata);
    }
}

impl ImageResolver for StaticImageResolver {
    fn metadata(&self, path: &str) -> Option<ImageMetadata> {
        self.images.get(path).copied()
    }
}
