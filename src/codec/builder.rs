// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelgeist

//! Chain builder: lays out a byte-pair sequence as linked records on the
//! lattice.
//!
//! The first record sits at (0, 0). Every record except the last carries a
//! pointer to its successor, obtained from the placement engine; the last
//! record carries no pointer and rasterizes with the green-channel EOF
//! sentinel. The occupied set is owned here and updated after each
//! placement, so encoder output is cycle-free by construction.

use std::collections::HashSet;

use rand::Rng;

use crate::codec::error::Result;
use crate::codec::placement;
use crate::codec::pointer::Pointer;
use crate::codec::Coord;

/// One chain node: a byte pair at a lattice coordinate, plus the pointer to
/// the next node (`None` for the terminal record).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub coord: Coord,
    pub high: u8,
    pub low: u8,
    pub pointer: Option<Pointer>,
}

/// Split a byte stream into (high, low) pairs, zero-padding odd-length input
/// with one trailing zero byte.
pub fn pair_bytes(data: &[u8]) -> Vec<(u8, u8)> {
    let mut pairs = Vec::with_capacity(data.len() / 2 + 1);
    let mut chunks = data.chunks_exact(2);
    for chunk in chunks.by_ref() {
        pairs.push((chunk[0], chunk[1]));
    }
    if let [last] = chunks.remainder() {
        pairs.push((*last, 0));
    }
    pairs
}

/// Build a chain of records for the given byte pairs.
///
/// Empty input degenerates to a single zero pair, so every chain has at
/// least one record.
///
/// # Errors
/// Propagates [`CodecError::PlacementExhausted`](crate::codec::CodecError)
/// from the placement engine.
pub fn build_chain<R: Rng>(pairs: &[(u8, u8)], rng: &mut R) -> Result<Vec<Record>> {
    let pairs: &[(u8, u8)] = if pairs.is_empty() { &[(0, 0)] } else { pairs };

    let mut records = Vec::with_capacity(pairs.len());
    let mut occupied: HashSet<Coord> = HashSet::with_capacity(pairs.len());
    let mut current: Coord = (0, 0);
    occupied.insert(current);

    for (idx, &(high, low)) in pairs.iter().enumerate() {
        if idx + 1 < pairs.len() {
            let (next, pointer) = placement::find_next(current, &occupied, rng)?;
            occupied.insert(next);
            records.push(Record { coord: current, high, low, pointer: Some(pointer) });
            current = next;
        } else {
            records.push(Record { coord: current, high, low, pointer: None });
        }
    }

    Ok(records)
}
