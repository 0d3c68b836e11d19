//! Fibonacci numbers through a linear, wrapping 64-bit recurrence.
//!
//! [`fibonacci`] is the only entry point. The recurrence it is built on is
//! private to this crate: it needs a specific seed and gives wrong answers
//! for indices 0 and 1 when called directly.
//!
//! With the `export` feature, the crate additionally exports
//! `fib_dispatch` with the C ABI, for hosts that load the compiled code
//! (e.g. as a WASM module) instead of linking against it from Rust.

#![cfg_attr(not(test), no_std)]

mod recurrence;

/// Returns the `index`-th term of the Fibonacci sequence `0, 1, 1, 2, 3, 5, ...`.
///
/// Runs in `O(index)` time and constant space. Terms above index 93 do not fit
/// in a `u64`; they wrap silently instead of panicking, in debug and release
/// builds alike.
///
/// ```
/// use fibcycles_fibonacci::fibonacci;
///
/// assert_eq!(fibonacci(0), 0);
/// assert_eq!(fibonacci(10), 55);
/// assert_eq!(fibonacci(93), 12200160415121876738);
/// ```
pub const fn fibonacci(index: u64) -> u64 {
    match index {
        0 => 0,
        1 => 1,
        _ => recurrence::step(0, 1, index - 1),
    }
}

/// C-ABI wrapper around [`fibonacci`].
///
/// Embedding hosts must call this symbol rather than anything else in the
/// module.
#[cfg(feature = "export")]
#[no_mangle]
pub extern "C" fn fib_dispatch(fib_index: u64) -> u64 {
    fibonacci(fib_index)
}

/// The largest index whose term fits in a `u64`.
pub const LARGEST_EXACT_INDEX: u64 = 93;
