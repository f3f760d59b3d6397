//! # Extrudekit Core
//!
//! Core types and utilities for extrudekit.
//! Provides the fundamental geometry value types and the error taxonomy
//! shared by the tracing pipeline and its consumers.

pub mod error;
pub mod geometry;

pub use error::{Error, ParameterError, ParseError, ParseResult, PathFailure, Result};
pub use geometry::{BoundingBox, Point2D};
