// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Drive the vulnerable copy the same way the binary does: one bounded read
//! into the staging buffer, then the unchecked copy. Any string of ten bytes or
//! more overruns the stack buffer, so the fuzzer is expected to report a crash
//! (AddressSanitizer flags the overflow as stack-buffer-overflow).
#![no_main]
use libfuzzer_sys::fuzz_target;
use stack_smash::{copier, read_input};

fuzz_target!(|data: &[u8]| {
    let input = read_input(&mut &data[..]);
    if input.is_empty() {
        return;
    }
    // SAFETY: none; overflowing input is the point of this target.
    let outcome = unsafe { copier::process(input.as_bytes()) };
    let mut out = Vec::new();
    outcome.write_to(&mut out).unwrap();
});
