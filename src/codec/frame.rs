// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelgeist

//! Payload frame construction and parsing.
//!
//! The chain carries a self-describing frame rather than the raw payload:
//!
//! ```text
//! [4 bytes] payload length (big-endian u32)
//! [N bytes] payload
//! [4 bytes] CRC-32 of everything above
//! ```
//!
//! The length field makes decoding exact: the walker may recover one extra
//! zero byte (the parity pad for odd-length frames), and payloads that
//! legitimately end in zero bytes survive unchanged. The CRC catches
//! channel-level tampering that leaves the pointer structure intact.

use crate::codec::error::{CodecError, Result};

/// Fixed frame overhead: length(4) + crc(4) = 8 bytes (4 pixels).
pub const FRAME_OVERHEAD: usize = 4 + 4;

/// Maximum payload length supported by the u32 length field.
pub const MAX_PAYLOAD_BYTES: usize = u32::MAX as usize;

/// Wrap a payload in a length-prefixed, CRC-guarded frame.
///
/// # Errors
/// [`CodecError::PayloadTooLarge`] if the payload exceeds
/// [`MAX_PAYLOAD_BYTES`].
pub fn build_frame(payload: &[u8]) -> Result<Vec<u8>> {
    let len = u32::try_from(payload.len()).map_err(|_| CodecError::PayloadTooLarge)?;

    let mut frame = Vec::with_capacity(FRAME_OVERHEAD + payload.len());
    frame.extend_from_slice(&len.to_be_bytes());
    frame.extend_from_slice(payload);

    let crc = crc32fast::hash(&frame);
    frame.extend_from_slice(&crc.to_be_bytes());

    Ok(frame)
}

/// Parse a frame recovered from chain traversal, verifying the CRC.
///
/// `data` may be one byte longer than the frame itself (the encoder's
/// parity pad); any such slack is ignored.
///
/// # Errors
/// [`CodecError::FrameCorrupted`] if the declared length overruns the
/// recovered data or the CRC does not match.
pub fn parse_frame(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < FRAME_OVERHEAD {
        return Err(CodecError::FrameCorrupted);
    }

    let declared = u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;
    let total = declared
        .checked_add(FRAME_OVERHEAD)
        .ok_or(CodecError::FrameCorrupted)?;
    if total > data.len() {
        return Err(CodecError::FrameCorrupted);
    }

    let covered = &data[..4 + declared];
    let crc_bytes = &data[4 + declared..total];
    let stored = u32::from_be_bytes([crc_bytes[0], crc_bytes[1], crc_bytes[2], crc_bytes[3]]);
    if crc32fast::hash(covered) != stored {
        return Err(CodecError::FrameCorrupted);
    }

    Ok(covered[4..].to_vec())
}
