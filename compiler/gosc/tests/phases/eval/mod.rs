//! Interpreter phase tests.
//!
//! - `programs` - complete programs run the way `gos run` runs them
//! - `runtime_errors` - error values, messages and locations
//! - `limits` - recursion limit and deep nesting

mod limits;
mod programs;
mod runtime_errors;
