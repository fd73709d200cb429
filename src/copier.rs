// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
//! The vulnerable copy into a 10-byte stack buffer, and the comparison that follows it.
//!
//! [`unchecked_copy`] behaves like C's `strcpy`: it writes up to and including the
//! terminator and never looks at the destination capacity. [`process`] feeds it a
//! buffer of [`LOCAL_CAPACITY`] bytes, so any string of ten bytes or more (terminator
//! included) writes into whatever sits next to that buffer on the stack. Both are
//! `unsafe` so the overflow can only happen where a caller asks for it.
//!
//! [`checked_copy`] and [`process_checked`] are the bounded counterparts.

use std::ffi::CStr;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, trace};

/// Size of the local buffer the input is copied into.
pub const LOCAL_CAPACITY: usize = 10;

/// The string the local buffer is compared against.
pub const SECRET: &[u8] = b"secret";

/// What the copier saw in its local buffer after the copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The buffer held exactly [`SECRET`].
    Secret,
    /// Anything else. Holds the buffer contents up to the first NUL.
    Received(Vec<u8>),
}

impl Outcome {
    /// Print the single output line for this outcome. The received bytes are
    /// written as-is, without any re-encoding.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Outcome::Secret => out.write_all(b"You found the secret!\n"),
            Outcome::Received(contents) => {
                out.write_all(b"Received: ")?;
                out.write_all(contents)?;
                out.write_all(b"\n")
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CopyError {
    #[error(
        "input needs {needed} bytes including the terminator but the buffer only holds {capacity}"
    )]
    Overflow { needed: usize, capacity: usize },
}

/// Length of the NUL-terminated string at the start of `src`. A slice without a
/// NUL counts as terminated right after its last byte.
pub fn string_len(src: &[u8]) -> usize {
    src.iter().position(|byte| *byte == 0).unwrap_or(src.len())
}

/// Copy the string at the start of `src` to `dst`, terminator included, and
/// return how many bytes were written.
///
/// Nothing here knows how large `dst` is.
///
/// # Safety
///
/// `dst` must be valid for writes of `string_len(src) + 1` bytes. This is not
/// checked. Violating it writes past the end of the destination.
#[inline(never)]
pub unsafe fn unchecked_copy(dst: *mut u8, src: &[u8]) -> usize {
    let mut written = 0;
    for &byte in src {
        if byte == 0 {
            break;
        }
        // SAFETY: room for this byte is the caller's promise, not ours.
        unsafe { dst.add(written).write(byte) };
        written += 1;
    }
    // SAFETY: as above, for the terminator.
    unsafe { dst.add(written).write(0) };
    written + 1
}

/// Copy `input` into a fresh local buffer with [`unchecked_copy`], then compare
/// the buffer with [`SECRET`].
///
/// The buffer is read back as a C string through its pointer, so after an
/// overflow the comparison and the echoed contents run on into the neighbouring
/// stack memory until they hit a NUL.
///
/// # Safety
///
/// The string at the start of `input` must be shorter than [`LOCAL_CAPACITY`]
/// bytes, i.e. `string_len(input) + 1 <= LOCAL_CAPACITY`. Longer strings
/// overflow the stack buffer and the behaviour is undefined.
#[inline(never)]
pub unsafe fn process(input: &[u8]) -> Outcome {
    let mut buffer = [0u8; LOCAL_CAPACITY];
    // SAFETY: forwarded to the caller.
    let written = unsafe { unchecked_copy(buffer.as_mut_ptr(), input) };
    trace!(written, capacity = LOCAL_CAPACITY, "process");
    // SAFETY: `unchecked_copy` always writes a terminator after the copied bytes.
    let contents = unsafe { CStr::from_ptr(buffer.as_ptr().cast()) };
    compare(contents.to_bytes())
}

/// Bounded copy: fails instead of writing when the string plus its terminator
/// does not fit. `dst` is left untouched on failure.
pub fn checked_copy(dst: &mut [u8; LOCAL_CAPACITY], src: &[u8]) -> Result<usize, CopyError> {
    let len = string_len(src);
    let needed = len + 1;
    if needed > LOCAL_CAPACITY {
        debug!(needed, capacity = LOCAL_CAPACITY, "checked_copy_rejected");
        return Err(CopyError::Overflow { needed, capacity: LOCAL_CAPACITY });
    }
    dst[..len].copy_from_slice(&src[..len]);
    dst[len] = 0;
    Ok(needed)
}

/// Same as [`process`] but with [`checked_copy`], so oversized input is an error.
pub fn process_checked(input: &[u8]) -> Result<Outcome, CopyError> {
    let mut buffer = [0u8; LOCAL_CAPACITY];
    let written = checked_copy(&mut buffer, input)?;
    Ok(compare(&buffer[..written - 1]))
}

fn compare(contents: &[u8]) -> Outcome {
    if contents == SECRET { Outcome::Secret } else { Outcome::Received(contents.to_vec()) }
}


#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(11)]
    fn unchecked_copy_stays_in_bounds_when_terminated() {
        let src: [u8; LOCAL_CAPACITY] = kani::any();
        kani::assume(src.contains(&0));
        let mut dst = [0u8; LOCAL_CAPACITY];
        let written = unsafe { unchecked_copy(dst.as_mut_ptr(), &src) };
        assert!(written <= LOCAL_CAPACITY);
        assert_eq!(&dst[..written], &src[..written]);
    }

    #[kani::proof]
    #[kani::unwind(17)]
    fn checked_copy_never_overflows() {
        let src: [u8; 16] = kani::any();
        let mut dst = [0xaau8; LOCAL_CAPACITY];
        match checked_copy(&mut dst, &src) {
            Ok(written) => {
                assert!(written <= LOCAL_CAPACITY);
                assert_eq!(dst[written - 1], 0);
            }
            Err(CopyError::Overflow { needed, .. }) => {
                assert!(needed > LOCAL_CAPACITY);
                assert_eq!(dst, [0xaau8; LOCAL_CAPACITY]);
            }
        }
    }
}
