// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelgeist

//! Error types for the pixel-chain codec.
//!
//! [`CodecError`] covers all failure modes from PNG parsing through chain
//! traversal and frame extraction. All variants are terminal for the
//! operation in progress — nothing is retried internally.

use core::fmt;

use crate::codec::Coord;

/// Errors that can occur during encoding or decoding.
#[derive(Debug)]
pub enum CodecError {
    /// The image contains no opaque pixels.
    NoPayload,
    /// Zero or more than one origin candidate was found (count attached).
    AmbiguousOrigin(usize),
    /// A pointer targets a coordinate with no opaque pixel.
    BrokenChain(Coord),
    /// Chain traversal revisited a coordinate.
    CycleDetected(Coord),
    /// No free cell within the 4-direction × 63-distance search bound.
    PlacementExhausted,
    /// Payload frame length or CRC check failed.
    FrameCorrupted,
    /// The payload exceeds the u32 length field of the frame.
    PayloadTooLarge,
    /// The image pixel count exceeds the decode bound.
    ImageTooLarge,
    /// The image could not be normalized to 8-bit RGBA.
    UnsupportedImage(&'static str),
    /// The image could not be parsed as a PNG.
    InvalidPng(png::DecodingError),
    /// PNG serialization failed.
    PngWrite(png::EncodingError),
    /// The decoded payload is not valid text in the requested encoding.
    InvalidText,
    /// Underlying file I/O failure, surfaced unmodified.
    Io(std::io::Error),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPayload => write!(f, "no payload found in the image"),
            Self::AmbiguousOrigin(n) => write!(f, "cannot uniquely identify the chain origin ({n} candidates)"),
            Self::BrokenChain((x, y)) => write!(f, "broken pointer chain: no pixel at ({x}, {y})"),
            Self::CycleDetected((x, y)) => write!(f, "pointer cycle detected at ({x}, {y})"),
            Self::PlacementExhausted => write!(f, "no free cell within the placement search bound"),
            Self::FrameCorrupted => write!(f, "payload frame length/CRC mismatch"),
            Self::PayloadTooLarge => write!(f, "payload exceeds the 4 GiB frame limit"),
            Self::ImageTooLarge => write!(f, "image exceeds the decode pixel bound"),
            Self::UnsupportedImage(msg) => write!(f, "unsupported image: {msg}"),
            Self::InvalidPng(e) => write!(f, "invalid PNG: {e}"),
            Self::PngWrite(e) => write!(f, "PNG write failed: {e}"),
            Self::InvalidText => write!(f, "decoded payload is not valid text"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPng(e) => Some(e),
            Self::PngWrite(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<png::DecodingError> for CodecError {
    fn from(e: png::DecodingError) -> Self {
        Self::InvalidPng(e)
    }
}

impl From<png::EncodingError> for CodecError {
    fn from(e: png::EncodingError) -> Self {
        Self::PngWrite(e)
    }
}

impl From<std::io::Error> for CodecError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
