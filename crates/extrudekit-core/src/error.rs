//! Error handling for extrudekit.
//!
//! Provides structured error types for path parsing, parameter validation
//! and per-path processing failures.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Errors raised while parsing SVG path data.
///
/// Parsing never drops input silently: unknown command letters and
/// malformed argument lists abort the affected path with one of these
/// variants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Unknown path command letter.
    #[error("unsupported path command '{0}'")]
    UnsupportedCommand(char),

    /// A command received the wrong number of arguments.
    #[error("malformed arguments for '{command}': got {got}, expected groups of {expected}")]
    MalformedArguments {
        /// The command letter as written in the path data.
        command: char,
        /// Number of arguments actually present.
        got: usize,
        /// Argument group size the command requires.
        expected: usize,
    },

    /// A numeric token could not be parsed as a number.
    #[error("invalid number '{token}' in path data")]
    InvalidNumber {
        /// The offending token text.
        token: String,
    },

    /// Path data began with numeric data instead of a command letter.
    #[error("path data must begin with a command letter")]
    MissingInitialCommand,

    /// Every subpath degenerated below three distinct points.
    #[error("path produced no valid outlines")]
    NoValidOutlines,
}

/// Errors related to tracing parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        /// The parameter name.
        name: String,
        /// The rejected value.
        value: f64,
        /// Minimum accepted value.
        min: f64,
        /// Maximum accepted value.
        max: f64,
    },

    /// A parameter value is invalid for a non-range reason.
    #[error("invalid value for '{name}': {reason}")]
    InvalidValue {
        /// The parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// A single path's processing failure with its source text attached.
///
/// Produced when parsing or outline construction aborts one path. Sibling
/// paths in the same document are unaffected; the caller reports this
/// failure and continues with a partial result.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{error} (path data: {path_data:?})")]
pub struct PathFailure {
    /// The raw `d` attribute text that failed to process.
    pub path_data: String,
    /// The underlying parse error.
    pub error: ParseError,
}

impl PathFailure {
    /// Attaches the offending source text to a parse error.
    pub fn new(path_data: impl Into<String>, error: ParseError) -> Self {
        Self {
            path_data: path_data.into(),
            error,
        }
    }
}

/// Main error type for extrudekit.
///
/// A unified error type that can represent any error from the pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Path parse error
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Parameter validation error
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Per-path processing failure
    #[error(transparent)]
    Path(#[from] PathFailure),
}

/// Result type using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for parse-stage operations.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::UnsupportedCommand('B');
        assert_eq!(err.to_string(), "unsupported path command 'B'");

        let err = ParseError::MalformedArguments {
            command: 'C',
            got: 4,
            expected: 6,
        };
        assert_eq!(
            err.to_string(),
            "malformed arguments for 'C': got 4, expected groups of 6"
        );

        let err = ParseError::InvalidNumber {
            token: "1.2.3".to_string(),
        };
        assert_eq!(err.to_string(), "invalid number '1.2.3' in path data");
    }

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::OutOfRange {
            name: "curve_resolution".to_string(),
            value: 0.0,
            min: 1.0,
            max: 512.0,
        };
        assert_eq!(
            err.to_string(),
            "parameter 'curve_resolution' out of range: 0 (valid: 1..512)"
        );
    }

    #[test]
    fn test_path_failure_carries_source() {
        let failure = PathFailure::new("M0,0 B10,10", ParseError::UnsupportedCommand('B'));
        assert_eq!(failure.path_data, "M0,0 B10,10");
        assert!(failure.to_string().contains("unsupported path command 'B'"));
        assert!(failure.to_string().contains("M0,0 B10,10"));
    }

    #[test]
    fn test_error_conversion() {
        let parse_err = ParseError::NoValidOutlines;
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Parse(_)));

        let failure = PathFailure::new("M0,0", ParseError::NoValidOutlines);
        let err: Error = failure.into();
        assert!(matches!(err, Error::Path(_)));
    }
}
