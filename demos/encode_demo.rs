// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelgeist

//! Example: hide an arbitrary file in a PNG and recover it.
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: encode_demo <input-file> <output.png> [seed]");
        eprintln!("       encode_demo --decode <input.png> <output-file>");
        std::process::exit(1);
    }

    if args[1] == "--decode" {
        if args.len() < 4 {
            eprintln!("Usage: encode_demo --decode <input.png> <output-file>");
            std::process::exit(1);
        }
        match pixelgeist_core::decode_to_file(&args[2], &args[3]) {
            Ok(()) => println!("Payload written to: {}", args[3]),
            Err(e) => eprintln!("Decode failed: {e}"),
        }
    } else {
        let seed = args.get(3).map(|s| s.parse::<u64>().expect("seed must be an integer"));
        let data = fs::read(&args[1]).expect("Could not read input file");

        pixelgeist_core::encode_bytes_to_file(&data, &args[2], seed).expect("Encode failed");

        let png_len = fs::metadata(&args[2]).map(|m| m.len()).unwrap_or(0);
        println!("Payload image written to: {}", args[2]);
        println!("Payload: {} bytes, PNG: {} bytes", data.len(), png_len);
    }
}
