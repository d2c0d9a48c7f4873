//! Option parsing for `gos run`.

use gos_eval::EvalMode;

use super::CommandError;

/// Parsed `gos run` arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub path: Option<String>,
    /// `--max-depth=<n>`: recursion limit for guest calls.
    pub max_depth: Option<usize>,
}

impl RunOptions {
    /// Evaluation mode selected by these options.
    pub fn mode(&self) -> EvalMode {
        match self.max_depth {
            Some(max_depth) => EvalMode::Limited { max_depth },
            None => EvalMode::Interpret,
        }
    }
}

/// Parse the arguments that follow `gos run`. Flags may appear before or
/// after the path.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, CommandError> {
    let mut options = RunOptions::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            let depth = value
                .parse::<usize>()
                .map_err(|_| CommandError::InvalidMaxDepth(value.to_string()))?;
            options.max_depth = Some(depth);
        } else if arg.starts_with('-') {
            return Err(CommandError::UnknownOption(arg.clone()));
        } else if options.path.is_none() {
            options.path = Some(arg.clone());
        }
    }
    Ok(options)
}
