//! Sizing and naming decisions shared by the image renderers

use crate::images::{ImageMetadata, Layout};
use crate::options::Options;
use std::path::Path;

/// An image directive resolved against its file metadata
#[derive(Debug, Clone, Copy)]
pub struct ImageRequest<'a> {
    pub path: &'a str,
    pub metadata: ImageMetadata,
    pub options: Options<'a>,
}

/// How an image is scaled on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageScale {
    /// `w=NN%` was given: a fraction of the maximum page width
    Explicit { percent: f64, width_mm: f64 },
    /// The printed image would overflow the page
    FullWidth,
    Native,
}

impl<'a> ImageRequest<'a> {
    pub fn new(path: &'a str, metadata: ImageMetadata, options: &'a str) -> Self {
        Self {
            path,
            metadata,
            options: Options::new(options),
        }
    }

    /// An explicit width always wins over the overflow check.
    pub fn scale(&self, layout: &Layout) -> ImageScale {
        if let Some(percent) = self.options.width_percent() {
            return ImageScale::Explicit {
                percent,
                width_mm: layout.max_width_mm * percent / 100.0,
            };
        }
        match self.metadata.physical_width_mm() {
            Some(width) if width > layout.max_width_mm => ImageScale::FullWidth,
            _ => ImageScale::Native,
        }
    }

    /// Base name of the image file
    pub fn file_name(&self) -> &'a str {
        Path::new(self.path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.path)
    }

    /// Explicit label, or the file name without its extension
    pub fn label(&self) -> &'a str {
        self.options.label().unwrap_or_else(|| {
            Path::new(self.path)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or(self.path)
        })
    }

    pub fn caption(&self) -> Option<&'a str> {
        self.options.caption()
    }
}

/// Format a length in millimetres without trailing zeros
pub(crate) fn format_mm(value: f64) -> String {
    let formatted = format!("{value:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
