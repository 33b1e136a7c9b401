// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelgeist

//! Raster serializer: maps the sparse lattice of chain records onto a dense
//! rectangular pixel grid and materializes it as a PNG (and back).
//!
//! Channel semantics, bit-exact for interoperability:
//!
//! ```text
//! red    high byte of the pair
//! green  (distance << 2) | direction_code, or 0 for EOF
//! blue   low byte of the pair
//! alpha  255 for data pixels, 0 for empty cells
//! ```

pub mod canvas;
pub mod png_io;

pub use canvas::{rasterize, Canvas};
pub use png_io::{read_png, write_png, MAX_DECODE_PIXELS};
