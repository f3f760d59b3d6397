//! # Extrudekit
//!
//! Turns 2D vector drawings into extrudable 3D solid descriptions:
//! - SVG path data parsing with full relative/absolute and smooth-curve support
//! - Curve flattening (cubic, quadratic, elliptical arc) at configurable resolution
//! - Closed outline construction, one polygon per subpath
//! - Complexity scoring and adaptive level-of-detail planning
//! - Parallel batch processing across paths and documents
//!
//! ## Architecture
//!
//! Extrudekit is organized as a workspace with multiple crates:
//!
//! 1. **extrudekit-core** - Geometry value types and the error taxonomy
//! 2. **extrudekit-outline** - Path parsing, flattening, outline building,
//!    analysis and detail planning
//! 3. **extrudekit** - Facade crate that re-exports the public API
//!
//! The output of the pipeline (closed outlines plus detail settings) is a
//! geometric contract: any extrusion or rendering backend can consume it to
//! produce triangulated, beveled solids without touching the parsing logic.

pub use extrudekit_core::{
    BoundingBox, Error, ParameterError, ParseError, ParseResult, PathFailure, Point2D, Result,
};

pub use extrudekit_outline::{
    analyze, extract_path_data, parse, plan, plan_ladder, trace_document, trace_path, trace_paths,
    BatchOutcome, BuildEvent, DetailLevel, DetailSettings, Outline, OutlineBuilder, OutlineEntry,
    OutlineSet, PathCommand, ShapeAnalysis, TraceParameters, TracedOutline, TracedPath,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output, pretty formatting and
/// `RUST_LOG` environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
