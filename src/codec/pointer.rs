// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelgeist

//! Pointer packing for the green channel.
//!
//! Each chain node stores the step to its successor as a single byte in the
//! green channel:
//!
//! ```text
//! bits 7–2  distance (1..=63)
//! bits 1–0  direction code
//! ```
//!
//! Direction codes: Right=00, Left=01, Down=10, Up=11. The all-zero byte is
//! reserved as the EOF sentinel marking the terminal node, which is why
//! distance 0 is never a legal pointer distance. Encoder and decoder must
//! share this bijection exactly; both go through this module.

use crate::codec::Coord;

/// Maximum pointer distance: 6 bits of the green channel.
pub const MAX_DISTANCE: u8 = (1 << 6) - 1; // 63

/// Direction of a pointer step on the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// +x
    Right,
    /// -x
    Left,
    /// +y
    Down,
    /// -y
    Up,
}

impl Direction {
    /// All four directions in canonical (code) order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// The reserved 2-bit wire code for this direction.
    pub const fn code(self) -> u8 {
        match self {
            Direction::Right => 0b00,
            Direction::Left => 0b01,
            Direction::Down => 0b10,
            Direction::Up => 0b11,
        }
    }

    /// Decode a direction from the low 2 bits of a green byte.
    pub const fn from_code(code: u8) -> Direction {
        match code & 0b11 {
            0b00 => Direction::Right,
            0b01 => Direction::Left,
            0b10 => Direction::Down,
            _ => Direction::Up,
        }
    }

    /// Unit step (dx, dy) for this direction.
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
        }
    }
}

/// A decoded pointer: how to reach the next chain node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pointer {
    /// Step length in cells, 1..=63.
    pub distance: u8,
    /// Step direction.
    pub direction: Direction,
}

impl Pointer {
    /// Build a pointer. `distance` must be in 1..=[`MAX_DISTANCE`].
    pub fn new(distance: u8, direction: Direction) -> Pointer {
        debug_assert!(distance >= 1 && distance <= MAX_DISTANCE, "pointer distance out of range: {distance}");
        Pointer { distance, direction }
    }

    /// Pack into the green-channel byte: `(distance << 2) | code`.
    pub fn pack(self) -> u8 {
        (self.distance << 2) | self.direction.code()
    }

    /// Unpack a green-channel byte. Returns `None` for the EOF sentinel (0).
    ///
    /// Nonzero bytes with distance bits 0 (values 1–3) are structurally
    /// invalid on the wire; they unpack to a zero-length step and are caught
    /// by the walker's cycle detection.
    pub fn unpack(byte: u8) -> Option<Pointer> {
        if byte == 0 {
            return None;
        }
        Some(Pointer {
            distance: byte >> 2,
            direction: Direction::from_code(byte),
        })
    }

    /// Coordinate reached by following this pointer from `from`.
    pub fn apply(self, from: Coord) -> Coord {
        let (dx, dy) = self.direction.delta();
        (
            from.0 + dx * self.distance as i64,
            from.1 + dy * self.distance as i64,
        )
    }
}
