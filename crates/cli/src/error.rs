//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: generator error (unknown generator, bad dimensions, zero replay seed)
//! - 12: input error (bad JSON params or replay record)
//! - 13: serialization error
//! - 14: the generator thread panicked

use maze_gen_core::MazeError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    Generator(MazeError),
    Input(String),
    Serialization(String),
    Worker(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Generator(_) => 10,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
            CliError::Worker(_) => 14,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Generator(e) => write!(f, "{e}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
            CliError::Worker(msg) => write!(f, "generator thread failed: {msg}"),
        }
    }
}

impl From<MazeError> for CliError {
    fn from(e: MazeError) -> Self {
        CliError::Generator(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_error_exit_code_is_10() {
        let err = CliError::from(MazeError::UnknownGenerator("foo".into()));
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().contains("foo"));
    }

    #[test]
    fn input_error_exit_code_is_12() {
        assert_eq!(CliError::Input("bad params".into()).exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let err = CliError::from(bad_json.unwrap_err());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn worker_error_exit_code_is_14() {
        let err = CliError::Worker("panicked".into());
        assert_eq!(err.exit_code(), 14);
        assert!(err.to_string().contains("panicked"));
    }
}
