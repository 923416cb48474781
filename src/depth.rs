//! Recursion-depth guard for the decoder.
//!
//! Pathological input can nest compounds deeply enough to exhaust the native
//! call stack. The spec treats a nesting limit as encouraged but optional
//! (spec.md §5); this crate implements it as a single increment/decrement
//! per recursive entry, since the cost on the happy path is negligible.

use std::cell::Cell;

use crate::error::TooShort;

/// The suggested nesting limit from spec.md §5.
pub const MAX_DEPTH: u32 = 256;

thread_local! {
    static DEPTH: Cell<u32> = const { Cell::new(0) };
}

/// A guard marking one level of compound-decoder recursion. Decrements the
/// shared depth counter when dropped.
pub struct DepthGuard(());

impl DepthGuard {
    /// Enters one level of recursion, failing with [`TooShort`] if doing so
    /// would exceed [`MAX_DEPTH`].
    pub fn enter(rest: &[u8]) -> Result<Self, TooShort<'_>> {
        DEPTH.with(|depth| {
            let d = depth.get();
            if d >= MAX_DEPTH {
                return Err(TooShort::at(rest));
            }
            depth.set(d + 1);
            Ok(DepthGuard(()))
        })
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}
