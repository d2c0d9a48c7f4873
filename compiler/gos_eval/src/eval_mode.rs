//! Evaluation modes.
//!
//! The mode is the interpreter's policy knob. Today it only decides how
//! deep guest recursion may go before a call fails with an error value.

/// Default depth limit for guest function calls.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Standard mode for `gos run` and the REPL.
    #[default]
    Interpret,
    /// Caller-chosen recursion limit (`gos run --max-depth=N`, tests).
    Limited { max_depth: usize },
}

impl EvalMode {
    /// Maximum number of nested user-function calls.
    ///
    /// The host stack grows on demand (see `gos_stack`), so this limit is
    /// what turns runaway guest recursion into an ordinary runtime error
    /// instead of unbounded memory use.
    #[inline]
    pub fn max_recursion_depth(&self) -> usize {
        match self {
            Self::Interpret => DEFAULT_MAX_DEPTH,
            Self::Limited { max_depth } => *max_depth,
        }
    }
}
