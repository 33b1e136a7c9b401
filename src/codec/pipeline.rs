// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelgeist

//! Byte-stream ↔ PNG encode/decode pipeline.
//!
//! Encode: frame the payload, split into byte pairs, build the chain on the
//! lattice, rasterize to an RGBA canvas, serialize as PNG. Decode runs the
//! same stages in reverse, with the walker re-validating every structural
//! property the encoder guarantees by construction.
//!
//! Randomness is an explicit per-call resource: a fixed seed yields a
//! byte-identical PNG on every platform, no seed draws a fresh ChaCha20
//! state from OS entropy. Nothing is shared across calls.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::codec::error::Result;
use crate::codec::{builder, frame, walker};
use crate::raster;

/// Encode a byte payload as a PNG image.
///
/// # Arguments
/// - `data`: Raw bytes to hide. Any length, including empty.
/// - `seed`: Placement seed. `Some(seed)` makes the output fully
///   reproducible; `None` uses fresh OS entropy.
///
/// # Returns
/// The PNG file as bytes.
///
/// # Errors
/// - [`CodecError::PayloadTooLarge`](crate::CodecError) if `data` exceeds
///   the frame's u32 length field.
/// - [`CodecError::PlacementExhausted`](crate::CodecError) if the placement
///   engine finds no free cell; retry with a different seed.
/// - [`CodecError::PngWrite`](crate::CodecError) on PNG serialization
///   failure.
pub fn encode_to_png(data: &[u8], seed: Option<u64>) -> Result<Vec<u8>> {
    let mut rng = match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };

    // 1. Wrap the payload in the length/CRC frame.
    let framed = frame::build_frame(data)?;

    // 2. Pair bytes (zero-padding an odd frame) and lay out the chain.
    let pairs = builder::pair_bytes(&framed);
    let chain = builder::build_chain(&pairs, &mut rng)?;

    // 3. Project onto a dense canvas and materialize as PNG.
    let canvas = raster::rasterize(&chain);
    raster::write_png(&canvas)
}

/// Decode a byte payload from a PNG image produced by [`encode_to_png`].
///
/// # Errors
/// - [`CodecError::InvalidPng`](crate::CodecError) /
///   [`CodecError::UnsupportedImage`](crate::CodecError) /
///   [`CodecError::ImageTooLarge`](crate::CodecError) from the raster layer.
/// - [`CodecError::NoPayload`](crate::CodecError) if the image has no
///   opaque pixels.
/// - [`CodecError::AmbiguousOrigin`](crate::CodecError),
///   [`CodecError::BrokenChain`](crate::CodecError),
///   [`CodecError::CycleDetected`](crate::CodecError) on structural
///   integrity failures.
/// - [`CodecError::FrameCorrupted`](crate::CodecError) if the recovered
///   frame fails its length or CRC check.
pub fn decode_from_png(png_bytes: &[u8]) -> Result<Vec<u8>> {
    // 1. Parse the PNG and collect the opaque pixels. Canvas coordinates
    //    serve directly as the working lattice; only relative pointer
    //    arithmetic matters.
    let canvas = raster::read_png(png_bytes)?;
    let map = canvas.sparse_map();

    // 2. Identify the unique origin and walk the chain.
    let origin = walker::find_origin(&map)?;
    let recovered = walker::walk(&map, origin)?;

    // 3. Unwrap the frame to the exact payload.
    frame::parse_frame(&recovered)
}
