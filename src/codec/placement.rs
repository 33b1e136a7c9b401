// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelgeist

//! Lattice placement engine.
//!
//! Given the set of occupied cells and a current cell, finds a not-yet-used
//! cell reachable by one pointer step. Directions are tried in an order
//! shuffled by the caller-supplied RNG; within a direction, distances are
//! scanned nearest-first, so chains stay compact and only grow long steps
//! around already-occupied cells.
//!
//! # Cross-platform portability
//!
//! The direction shuffle uses `u32` for `gen_range` (not `usize`) so that the
//! same seed produces the same placement sequence on 32- and 64-bit targets.
//! `usize`-width ranges consume different amounts of PRNG entropy per step on
//! WASM vs native, which would break the fixed-seed reproducibility contract.

use std::collections::HashSet;

use rand::Rng;

use crate::codec::error::{CodecError, Result};
use crate::codec::pointer::{Direction, Pointer, MAX_DISTANCE};
use crate::codec::Coord;

/// Find the next free cell from `current` and the pointer that reaches it.
///
/// Placement decisions are returned, not applied — the caller inserts the
/// returned coordinate into `occupied`.
///
/// # Errors
/// [`CodecError::PlacementExhausted`] if every cell within 63 steps in all
/// four directions is occupied. This bounds placement work to 4 × 63
/// candidate cells per call and signals an unreasonably dense neighborhood,
/// not a data error; callers may retry the whole encode with another seed.
pub fn find_next<R: Rng>(
    current: Coord,
    occupied: &HashSet<Coord>,
    rng: &mut R,
) -> Result<(Coord, Pointer)> {
    let mut directions = Direction::ALL;
    shuffle_portable(&mut directions, rng);

    for &direction in &directions {
        let (dx, dy) = direction.delta();
        for distance in 1..=MAX_DISTANCE {
            let target = (
                current.0 + dx * distance as i64,
                current.1 + dy * distance as i64,
            );
            if !occupied.contains(&target) {
                return Ok((target, Pointer::new(distance, direction)));
            }
        }
    }

    Err(CodecError::PlacementExhausted)
}

/// Fisher-Yates over the four directions using `u32` ranges for portable
/// cross-platform behavior.
fn shuffle_portable<R: Rng>(directions: &mut [Direction; 4], rng: &mut R) {
    for i in (1..directions.len()).rev() {
        let j = rng.gen_range(0..=(i as u32)) as usize;
        directions.swap(i, j);
    }
}
