//! Filesystem image resolver
//!
//! Image paths in a document are relative to the document's directory. Only
//! the file header is inspected: pixel width from the PNG `IHDR`, GIF logical
//! screen or JPEG start-of-frame, and the resolution from a PNG `pHYs` chunk
//! or JFIF density when present. Anything else falls back to the configured
//! default DPI.

use std::fs;
use std::path::PathBuf;
use tinta_markup::{ImageMetadata, ImageResolver};

const METERS_PER_INCH: f64 = 0.0254;
const CM_PER_INCH: f64 = 2.54;

pub struct FsImageResolver {
    root: PathBuf,
    default_dpi: f64,
}

impl FsImageResolver {
    pub fn new(root: impl Into<PathBuf>, default_dpi: f64) -> Self {
        Self {
            root: root.into(),
            default_dpi,
        }
    }
}

impl ImageResolver for FsImageResolver {
    fn metadata(&self, path: &str) -> Option<ImageMetadata> {
        let full = self.root.join(path);
        let data = match fs::read(&full) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(path = %full.display(), error = %err, "cannot read image");
                return None;
            }
        };
        let Some(header) = read_header(&data) else {
            tracing::warn!(path = %full.display(), "unrecognized image format");
            return None;
        };
        let dpi = header.dpi.unwrap_or(self.default_dpi);
        tracing::debug!(path = %full.display(), width = header.width, dpi, "resolved image");
        Some(ImageMetadata::new(header.width, dpi))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ImageHeader {
    width: u32,
    dpi: Option<f64>,
}

fn read_header(data: &[u8]) -> Option<ImageHeader> {
    if data.len() < 24 {
        return None;
    }

    // PNG: width at bytes 16-19 of the IHDR chunk
    if data.starts_with(&[0x89, b'P', b'N', b'G']) {
        let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
        return Some(ImageHeader {
            width,
            dpi: png_dpi(data),
        });
    }

    if data.starts_with(&[0xFF, 0xD8]) {
        return jpeg_header(data);
    }

    // GIF: little-endian width at bytes 6-7; no resolution
    if data.starts_with(b"GIF") {
        let width = u32::from(u16::from_le_bytes([data[6], data[7]]));
        return Some(ImageHeader { width, dpi: None });
    }

    None
}

/// Horizontal resolution from the `pHYs` chunk, when given in pixels per metre
fn png_dpi(data: &[u8]) -> Option<f64> {
    let mut i = 8;
    while i + 8 <= data.len() {
        let length =
            u32::from_be_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]]) as usize;
        let kind = &data[i + 4..i + 8];
        let body = i + 8;
        match kind {
            b"pHYs" if body + 9 <= data.len() => {
                let per_unit = u32::from_be_bytes([
                    data[body],
                    data[body + 1],
                    data[body + 2],
                    data[body + 3],
                ]);
                let unit = data[body + 8];
                return (unit == 1 && per_unit > 0)
                    .then(|| f64::from(per_unit) * METERS_PER_INCH);
            }
            b"IDAT" | b"IEND" => return None,
            _ => {}
        }
        // length, type, data and CRC
        i = body.checked_add(length)?.checked_add(4)?;
    }
    None
}

fn jpeg_header(data: &[u8]) -> Option<ImageHeader> {
    let mut dpi = None;
    let mut i = 2;
    while i + 4 < data.len() {
        if data[i] != 0xFF {
            i += 1;
            continue;
        }

        let marker = data[i + 1];

        // JFIF APP0: density units at +11, horizontal density at +12
        if marker == 0xE0 && i + 16 < data.len() && &data[i + 4..i + 9] == b"JFIF\0" {
            let density = f64::from(u16::from_be_bytes([data[i + 12], data[i + 13]]));
            dpi = match data[i + 11] {
                1 if density > 0.0 => Some(density),
                2 if density > 0.0 => Some(density * CM_PER_INCH),
                _ => None,
            };
        }

        // start of frame markers carry the dimensions
        if matches!(
            marker,
            0xC0 | 0xC1
                | 0xC2
                | 0xC3
                | 0xC5
                | 0xC6
                | 0xC7
                | 0xC9
                | 0xCA
                | 0xCB
                | 0xCD
                | 0xCE
                | 0xCF
        ) && i + 9 < data.len()
        {
            let width = u32::from(u16::from_be_bytes([data[i + 7], data[i + 8]]));
            return Some(ImageHeader { width, dpi });
        }

        let length = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
        i += 2 + length;
    }
    None
}
