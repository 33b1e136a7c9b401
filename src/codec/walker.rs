// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelgeist

//! Chain walker: reconstructs the byte sequence from a sparse pixel map.
//!
//! Decoding trusts arbitrary input images, so every structural assumption
//! the encoder guarantees by construction is checked here instead: the
//! origin must be unique, every pointer target must exist, and no
//! coordinate may be visited twice.

use std::collections::HashSet;

use crate::codec::error::{CodecError, Result};
use crate::codec::pointer::Pointer;
use crate::codec::{Coord, SparseMap};

/// Identify the chain origin: the unique coordinate that no pointer targets.
///
/// # Errors
/// - [`CodecError::NoPayload`] if the map is empty.
/// - [`CodecError::AmbiguousOrigin`] if zero or more than one candidate
///   exists. This is a structural integrity failure, not recoverable.
pub fn find_origin(map: &SparseMap) -> Result<Coord> {
    if map.is_empty() {
        return Err(CodecError::NoPayload);
    }

    let mut pointed_to: HashSet<Coord> = HashSet::with_capacity(map.len());
    for (&coord, &(_, green, _)) in map {
        if let Some(ptr) = Pointer::unpack(green) {
            pointed_to.insert(ptr.apply(coord));
        }
    }

    let origins: Vec<Coord> = map
        .keys()
        .copied()
        .filter(|coord| !pointed_to.contains(coord))
        .collect();

    match origins[..] {
        [origin] => Ok(origin),
        _ => Err(CodecError::AmbiguousOrigin(origins.len())),
    }
}

/// Follow the chain from `origin`, emitting (red, blue) byte pairs until the
/// EOF sentinel.
///
/// # Errors
/// - [`CodecError::BrokenChain`] if a pointer targets a coordinate absent
///   from the map (tampered or partially overwritten image).
/// - [`CodecError::CycleDetected`] if a coordinate repeats. Encoder output
///   is cycle-free by construction; a cycle means a crafted or corrupted
///   image, and without this check traversal would never terminate.
pub fn walk(map: &SparseMap, origin: Coord) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(map.len() * 2);
    let mut visited: HashSet<Coord> = HashSet::with_capacity(map.len());
    let mut current = origin;

    loop {
        let &(red, green, blue) = map
            .get(&current)
            .ok_or(CodecError::BrokenChain(current))?;
        if !visited.insert(current) {
            return Err(CodecError::CycleDetected(current));
        }

        bytes.push(red);
        bytes.push(blue);

        match Pointer::unpack(green) {
            None => break, // EOF sentinel
            Some(ptr) => current = ptr.apply(current),
        }
    }

    Ok(bytes)
}
