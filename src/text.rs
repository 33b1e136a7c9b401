// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelgeist

//! Text ↔ bytes transcoding.
//!
//! The codec core is byte-oriented; text convenience is a pure transcoding
//! layer outside it. Rust strings are always valid Unicode scalar
//! sequences, so encoding is total for every input string; decoding bytes
//! that are not valid in the requested encoding fails with
//! [`CodecError::InvalidText`].

use crate::codec::error::{CodecError, Result};

/// Character encoding for text payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// UTF-16, little-endian code units, no BOM.
    Utf16Le,
}

/// Encode a string into payload bytes.
pub fn to_bytes(text: &str, encoding: TextEncoding) -> Vec<u8> {
    match encoding {
        TextEncoding::Utf8 => text.as_bytes().to_vec(),
        TextEncoding::Utf16Le => text
            .encode_utf16()
            .flat_map(|unit| unit.to_le_bytes())
            .collect(),
    }
}

/// Decode payload bytes back into a string.
///
/// # Errors
/// [`CodecError::InvalidText`] if the bytes are not valid in `encoding`
/// (including odd-length input for UTF-16).
pub fn from_bytes(data: &[u8], encoding: TextEncoding) -> Result<String> {
    match encoding {
        TextEncoding::Utf8 => {
            String::from_utf8(data.to_vec()).map_err(|_| CodecError::InvalidText)
        }
        TextEncoding::Utf16Le => {
            if data.len() % 2 != 0 {
                return Err(CodecError::InvalidText);
            }
            let units: Vec<u16> = data
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16(&units).map_err(|_| CodecError::InvalidText)
        }
    }
}
