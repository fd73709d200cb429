// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Bounded read of the raw input into a caller-owned staging buffer.

use std::io::Read;
use tracing::{debug, trace};

/// Capacity of the staging buffer. At most this many bytes are consumed per run.
pub const INPUT_CAPACITY: usize = 100;

/// The staging buffer and how much of it a single read filled.
///
/// The storage is zeroed up front, so every read shorter than [`INPUT_CAPACITY`]
/// is followed by a terminator. A full read leaves no room for one.
pub struct InputBuffer {
    bytes: [u8; INPUT_CAPACITY],
    len: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        InputBuffer { bytes: [0; INPUT_CAPACITY], len: 0 }
    }

    /// Number of bytes the read produced.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The bytes that were read, without the zero padding.
    pub fn filled(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// The whole staging buffer, padding included. This is what gets handed to
    /// the copier, which scans it up to the first NUL.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Issue one read of up to [`INPUT_CAPACITY`] bytes from `source`.
///
/// End of stream and read errors both produce an empty buffer. The error is
/// only visible in the debug log; callers are expected to skip processing.
pub fn read_input<R: Read>(source: &mut R) -> InputBuffer {
    let mut input = InputBuffer::new();
    match source.read(&mut input.bytes) {
        Ok(len) => {
            input.len = len;
            trace!(len, terminated = len < INPUT_CAPACITY, "read_input");
        }
        Err(error) => {
            debug!(?error, "read_input_failed");
        }
    }
    input
}
