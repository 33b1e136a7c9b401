// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelgeist

//! Example: encode a text message with a fixed seed and decode it back.

fn main() {
    let message = "Hello, 🌍🚀!  𝄞🎶 𠜎";
    let output = "encoded_demo.png";

    println!("Original text: {message}");

    let png = pixelgeist_core::encode_text(message, Some(42)).expect("Encode failed");
    std::fs::write(output, &png).expect("Could not write output");
    println!("Encoded to: {output} ({} bytes)", png.len());

    let decoded = pixelgeist_core::decode_text(&png).expect("Decode failed");
    println!("Decoded text: {decoded}");
    println!("Round-trip successful: {}", message == decoded);
}
