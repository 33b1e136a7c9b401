// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelgeist

//! PNG materialization of the canvas.
//!
//! Always writes 8-bit RGBA — per-pixel alpha is the occupancy signal, so
//! color types without an alpha channel cannot carry a chain. Reading
//! normalizes palette/low-depth/tRNS inputs to RGBA8 where the PNG format
//! allows and rejects everything else.

use crate::codec::error::{CodecError, Result};
use crate::raster::canvas::Canvas;

/// Upper bound on decoded pixel count (2^28 ≈ 268M pixels, ~1 GiB RGBA).
///
/// A PNG header is a handful of bytes but may declare a multi-gigapixel
/// canvas; the bound is checked before the pixel buffer is allocated.
pub const MAX_DECODE_PIXELS: u64 = 1 << 28;

/// Serialize a canvas as a PNG file in memory.
pub fn write_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut out = Vec::new();

    let mut encoder = png::Encoder::new(&mut out, canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(canvas.rgba())?;
    writer.finish()?;

    Ok(out)
}

/// Quick scan of the declared IHDR dimensions before any decoding starts.
///
/// IHDR is required to be the first chunk, so for every well-formed PNG the
/// width and height sit at fixed offsets. Malformed data returns `None` and
/// is left to the full parser to reject.
fn declared_pixels(data: &[u8]) -> Option<u64> {
    // signature(8) + chunk length(4) + "IHDR"(4), then width/height (BE u32).
    if data.len() < 24 || !data.starts_with(b"\x89PNG\r\n\x1a\n") || &data[12..16] != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
    let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
    Some(width as u64 * height as u64)
}

/// Parse a PNG file into an RGBA8 canvas.
///
/// # Errors
/// - [`CodecError::InvalidPng`] if the data is not a well-formed PNG.
/// - [`CodecError::ImageTooLarge`] if the declared dimensions exceed
///   [`MAX_DECODE_PIXELS`].
/// - [`CodecError::UnsupportedImage`] if the pixel data cannot be
///   normalized to 8-bit RGBA (e.g. grayscale without alpha).
pub fn read_png(data: &[u8]) -> Result<Canvas> {
    if declared_pixels(data).map_or(false, |pixels| pixels > MAX_DECODE_PIXELS) {
        return Err(CodecError::ImageTooLarge);
    }

    // The default decoder limits are tighter than MAX_DECODE_PIXELS; widen
    // them so the pixel bound above is the one that governs.
    let mut limits = png::Limits::default();
    limits.bytes = MAX_DECODE_PIXELS as usize * 4;
    let mut decoder = png::Decoder::new_with_limits(data, limits);
    decoder.set_transformations(
        png::Transformations::normalize_to_color8() | png::Transformations::ALPHA,
    );

    let mut reader = decoder.read_info()?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    if width as u64 * height as u64 > MAX_DECODE_PIXELS {
        return Err(CodecError::ImageTooLarge);
    }

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    if info.color_type != png::ColorType::Rgba || info.bit_depth != png::BitDepth::Eight {
        return Err(CodecError::UnsupportedImage("pixel data is not 8-bit RGBA"));
    }
    buf.truncate(info.buffer_size());

    Ok(Canvas::from_rgba(info.width, info.height, buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_roundtrip() {
        let mut canvas = Canvas::new(5, 3);
        canvas.put(0, 0, (1, 2, 3));
        canvas.put(4, 2, (250, 251, 252));
        let png = write_png(&canvas).unwrap();
        let restored = read_png(&png).unwrap();
        assert_eq!(restored, canvas);
    }

    #[test]
    fn transparent_cells_stay_transparent() {
        let mut canvas = Canvas::new(2, 2);
        canvas.put(1, 1, (9, 8, 7));
        let restored = read_png(&write_png(&canvas).unwrap()).unwrap();
        assert_eq!(restored.get(0, 0), [0, 0, 0, 0]);
        assert_eq!(restored.get(1, 1), [9, 8, 7, 0xFF]);
    }

    #[test]
    fn declared_pixels_reads_the_header() {
        let png = write_png(&Canvas::new(7, 11)).unwrap();
        assert_eq!(declared_pixels(&png), Some(77));
        assert_eq!(declared_pixels(b"not a png"), None);
        assert_eq!(declared_pixels(&png[..10]), None);
    }

    #[test]
    fn garbage_is_invalid_png() {
        let result = read_png(b"definitely not a png");
        assert!(matches!(result, Err(CodecError::InvalidPng(_))));
    }

    #[test]
    fn truncated_png_is_invalid() {
        let canvas = Canvas::new(3, 3);
        let png = write_png(&canvas).unwrap();
        let result = read_png(&png[..png.len() / 2]);
        assert!(result.is_err());
    }
}
