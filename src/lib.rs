// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelgeist

//! # pixelgeist-core
//!
//! Hides an arbitrary byte stream inside a PNG image by encoding it as a
//! traversable chain of colored pixels, recoverable byte-for-byte from the
//! image alone.
//!
//! Each pixel carries one byte pair (red = high byte, blue = low byte) and
//! a pointer to the next pixel packed into the green channel (6-bit
//! distance, 2-bit direction); alpha marks which cells carry data. The
//! decoder finds the unique pixel no other pixel points to and follows the
//! chain to the EOF sentinel. The payload travels inside a length-prefixed,
//! CRC-guarded frame, so decoding either reconstructs it exactly or fails.
//!
//! Placement randomness is an explicit per-call resource: pass a seed for
//! byte-identical reproducible output, or none for fresh OS entropy.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use pixelgeist_core::{encode_bytes, decode_bytes};
//!
//! let png = encode_bytes(b"secret payload", Some(42)).unwrap();
//! let decoded = decode_bytes(&png).unwrap();
//! assert_eq!(decoded, b"secret payload");
//! ```

pub mod codec;
pub mod raster;
pub mod text;

use std::fs;
use std::path::Path;

pub use codec::{CodecError, Coord, Direction, Pointer, Record, SparseMap, MAX_DISTANCE};
pub use raster::{Canvas, MAX_DECODE_PIXELS};
pub use text::TextEncoding;

/// Encode a byte payload as a PNG image, returned as bytes.
///
/// `seed` fixes the placement sequence: the same payload and seed produce a
/// byte-identical PNG on every platform. `None` draws fresh OS entropy.
///
/// # Errors
/// See [`codec::encode_to_png`].
pub fn encode_bytes(data: &[u8], seed: Option<u64>) -> Result<Vec<u8>, CodecError> {
    codec::encode_to_png(data, seed)
}

/// Decode a byte payload from PNG bytes produced by [`encode_bytes`].
///
/// # Errors
/// See [`codec::decode_from_png`].
pub fn decode_bytes(png: &[u8]) -> Result<Vec<u8>, CodecError> {
    codec::decode_from_png(png)
}

/// Encode a text payload (UTF-8) as a PNG image.
pub fn encode_text(message: &str, seed: Option<u64>) -> Result<Vec<u8>, CodecError> {
    encode_bytes(&text::to_bytes(message, TextEncoding::Utf8), seed)
}

/// Decode a text payload (UTF-8) from PNG bytes.
///
/// # Errors
/// [`CodecError::InvalidText`] if the recovered payload is not valid UTF-8,
/// plus everything [`decode_bytes`] can fail with.
pub fn decode_text(png: &[u8]) -> Result<String, CodecError> {
    text::from_bytes(&decode_bytes(png)?, TextEncoding::Utf8)
}

/// Encode a byte payload and write the PNG to `path`.
pub fn encode_bytes_to_file<P: AsRef<Path>>(
    data: &[u8],
    path: P,
    seed: Option<u64>,
) -> Result<(), CodecError> {
    let png = encode_bytes(data, seed)?;
    fs::write(path, png)?;
    Ok(())
}

/// Encode the contents of `input` and write the PNG to `output`.
pub fn encode_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    seed: Option<u64>,
) -> Result<(), CodecError> {
    let data = fs::read(input)?;
    encode_bytes_to_file(&data, output, seed)
}

/// Decode the payload from a PNG file.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, CodecError> {
    let png = fs::read(path)?;
    decode_bytes(&png)
}

/// Decode the payload from a PNG file and write it to `output`.
pub fn decode_to_file<P: AsRef<Path>, Q: AsRef<Path>>(
    png_path: P,
    output: Q,
) -> Result<(), CodecError> {
    let data = decode_file(png_path)?;
    fs::write(output, data)?;
    Ok(())
}
