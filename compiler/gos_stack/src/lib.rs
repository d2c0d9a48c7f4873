//! Stack growth for the recursive parts of Gosling.
//!
//! The parser recurses once per nested expression and the evaluator once
//! per nested node and per guest function call. Both wrap those recursions
//! in [`ensure_sufficient_stack`], which switches to a freshly allocated
//! stack segment when the current one is nearly used up.
//!
//! On `wasm32` the call is a plain passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first moving to a new stack segment if the current one is low.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
