// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelgeist

//! Pixel-chain codec: chain construction, placement, traversal, and framing.
//!
//! The payload is encoded as a singly linked chain of records on a sparse
//! 2D integer lattice. Each record holds one byte pair and a packed
//! (distance, direction) pointer to its successor; the terminal record
//! carries the EOF sentinel instead. Chain invariants:
//!
//! - coordinates are pairwise distinct;
//! - exactly one record has no outgoing pointer, and it is emitted last;
//! - exactly one record is the pointer-target of no other record (the
//!   origin — the decoder's entry point).
//!
//! A chain of length 1 is simultaneously origin and terminal. Chains live
//! only for the duration of one encode or decode call; they are never
//! persisted apart from the image they rasterize into.

pub mod builder;
pub mod error;
pub mod frame;
pub mod placement;
pub mod pointer;
pub mod walker;
mod pipeline;

use std::collections::HashMap;

pub use builder::{build_chain, pair_bytes, Record};
pub use error::CodecError;
pub use pipeline::{decode_from_png, encode_to_png};
pub use pointer::{Direction, Pointer, MAX_DISTANCE};
pub use walker::{find_origin, walk};

/// A lattice coordinate (x, y). The domain is unbounded; the first record
/// of every chain is placed at (0, 0), and rasterization later translates
/// all coordinates into canvas space.
pub type Coord = (i64, i64);

/// The decoder's view of a chain before identity and order are known: every
/// opaque pixel of an image, keyed by canvas coordinate, carrying its
/// (red, green, blue) channels.
pub type SparseMap = HashMap<Coord, (u8, u8, u8)>;
