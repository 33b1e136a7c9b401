// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelgeist

//! Decoding hostile and corrupted images: every structural failure mode
//! must surface as its own error kind, never as wrong payload bytes.

use pixelgeist_core::codec::find_origin;
use pixelgeist_core::raster::{read_png, write_png};
use pixelgeist_core::{decode_bytes, encode_bytes, Canvas, CodecError, Direction, Pointer};

fn ptr(distance: u8, direction: Direction) -> u8 {
    Pointer::new(distance, direction).pack()
}

#[test]
fn fully_transparent_image_is_no_payload() {
    let png = write_png(&Canvas::new(8, 8)).unwrap();
    assert!(matches!(decode_bytes(&png), Err(CodecError::NoPayload)));
}

#[test]
fn two_unreferenced_pixels_are_ambiguous() {
    let mut canvas = Canvas::new(8, 8);
    canvas.put(1, 1, (0x11, 0, 0x22));
    canvas.put(6, 6, (0x33, 0, 0x44));
    let png = write_png(&canvas).unwrap();
    assert!(matches!(decode_bytes(&png), Err(CodecError::AmbiguousOrigin(2))));
}

#[test]
fn closed_loop_has_no_origin() {
    let mut canvas = Canvas::new(4, 1);
    canvas.put(0, 0, (0, ptr(1, Direction::Right), 0));
    canvas.put(1, 0, (0, ptr(1, Direction::Left), 0));
    let png = write_png(&canvas).unwrap();
    assert!(matches!(decode_bytes(&png), Err(CodecError::AmbiguousOrigin(0))));
}

#[test]
fn dangling_pointer_is_broken_chain() {
    let mut canvas = Canvas::new(8, 1);
    canvas.put(0, 0, (0xAB, ptr(5, Direction::Right), 0xCD));
    let png = write_png(&canvas).unwrap();
    match decode_bytes(&png) {
        Err(CodecError::BrokenChain(at)) => assert_eq!(at, (5, 0)),
        other => panic!("expected BrokenChain, got {other:?}"),
    }
}

#[test]
fn pointer_cycle_is_detected() {
    // origin -> B -> C -> B again.
    let mut canvas = Canvas::new(4, 1);
    canvas.put(0, 0, (0, ptr(1, Direction::Right), 0));
    canvas.put(1, 0, (0, ptr(1, Direction::Right), 0));
    canvas.put(2, 0, (0, ptr(1, Direction::Left), 0));
    let png = write_png(&canvas).unwrap();
    match decode_bytes(&png) {
        Err(CodecError::CycleDetected(at)) => assert_eq!(at, (1, 0)),
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn flipped_data_channel_fails_the_frame_crc() {
    // Corrupt a red channel somewhere in the chain without touching the
    // pointer structure: traversal still succeeds, the CRC must not.
    let png = encode_bytes(b"integrity matters", Some(42)).unwrap();
    let canvas = read_png(&png).unwrap();
    let map = canvas.sparse_map();
    let (x, y) = find_origin(&map).unwrap();
    let (r, g, b) = map[&(x, y)];

    let mut tampered = canvas.clone();
    tampered.put(x as u32, y as u32, (r ^ 0x01, g, b));
    let png = write_png(&tampered).unwrap();
    assert!(matches!(decode_bytes(&png), Err(CodecError::FrameCorrupted)));
}

#[test]
fn stray_opaque_pixel_breaks_origin_uniqueness() {
    // A valid chain plus one isolated EOF pixel: two origin candidates.
    let png = encode_bytes(b"original", Some(8)).unwrap();
    let mut canvas = read_png(&png).unwrap();

    // Grow the canvas so the stray pixel cannot collide with the chain.
    let mut enlarged = Canvas::new(canvas.width() + 2, canvas.height() + 2);
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let [r, g, b, a] = canvas.get(x, y);
            if a != 0 {
                enlarged.put(x, y, (r, g, b));
            }
        }
    }
    enlarged.put(canvas.width() + 1, canvas.height() + 1, (0xEE, 0, 0xFF));
    canvas = enlarged;

    let png = write_png(&canvas).unwrap();
    assert!(matches!(decode_bytes(&png), Err(CodecError::AmbiguousOrigin(2))));
}

#[test]
fn declared_giant_dimensions_are_rejected_before_allocation() {
    // Hand-assembled PNG declaring a 100_000 x 100_000 canvas with no real
    // pixel data. The decoder must refuse on the header alone.
    fn chunk(tag: &[u8; 4], data: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(12 + data.len());
        out.extend_from_slice(&(data.len() as u32).to_be_bytes());
        out.extend_from_slice(tag);
        out.extend_from_slice(data);
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(tag);
        hasher.update(data);
        out.extend_from_slice(&hasher.finalize().to_be_bytes());
        out
    }

    let mut ihdr = Vec::new();
    ihdr.extend_from_slice(&100_000u32.to_be_bytes());
    ihdr.extend_from_slice(&100_000u32.to_be_bytes());
    ihdr.extend_from_slice(&[8, 6, 0, 0, 0]); // 8-bit RGBA, no interlace

    let mut png = b"\x89PNG\r\n\x1a\n".to_vec();
    png.extend_from_slice(&chunk(b"IHDR", &ihdr));
    png.extend_from_slice(&chunk(b"IDAT", &[]));
    png.extend_from_slice(&chunk(b"IEND", &[]));

    assert!(matches!(decode_bytes(&png), Err(CodecError::ImageTooLarge)));
}

#[test]
fn garbage_bytes_are_invalid_png() {
    assert!(matches!(
        decode_bytes(b"not a png at all"),
        Err(CodecError::InvalidPng(_))
    ));
}
