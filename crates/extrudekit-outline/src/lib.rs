//! # Extrudekit Outline
//!
//! This crate is the vector-path-to-solid pipeline core. It parses raw SVG
//! path data into typed drawing commands, flattens curves into line
//! segments at a configurable resolution, accumulates them into closed
//! outlines, scores each outline's geometric complexity, and plans
//! tessellation/extrusion parameters adapted to that complexity.
//!
//! ## Core Components
//!
//! ### Path Processing
//! - **Parser**: tokenizes `d` attribute strings and resolves every
//!   command to absolute coordinates, including smooth-curve reflection
//! - **Flattener**: cubic/quadratic Bézier and elliptical-arc sampling
//! - **Outline builder**: one closed polygon per subpath, auto-closed
//!
//! ### Detail Planning
//! - **Shape analysis**: bounding box, point count, curve density,
//!   complexity score
//! - **Planner**: resolution, extrusion depth, bevel parameters and the
//!   Low/Medium/High/Ultra detail ladder
//!
//! ### Orchestration
//! - **Pipeline**: per-path parse → build → analyze → plan
//! - **Batch**: parallel fan-out across many paths or a whole document
//!
//! ## Architecture
//!
//! ```text
//! path data (d attribute)
//!   └── parser        → Vec<PathCommand>       (absolute coordinates)
//!         └── builder → OutlineSet             (flattener invoked per curve)
//!               └── analysis → ShapeAnalysis   (per outline)
//!                     └── planner → DetailSettings / ladder
//! ```
//!
//! Outlines plus detail settings form the contract consumed by the
//! extrusion/rendering backend; nothing in this crate touches geometry
//! beyond 2D polygons.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use extrudekit_outline::{trace_path, TraceParameters};
//!
//! let params = TraceParameters::default();
//! let traced = trace_path("M0,0 L10,0 L10,10 L0,10 Z", &params)?;
//! for outline in &traced.outlines {
//!     hand_to_extruder(&outline.outline, &outline.settings);
//! }
//! ```

pub mod batch;
pub mod detail;
pub mod params;
pub mod path;
pub mod pipeline;
pub mod svg;

pub use batch::{trace_document, trace_paths, BatchOutcome};
pub use detail::{
    analyze, plan, plan_ladder, DetailLevel, DetailSettings, ShapeAnalysis,
    CURVE_COMPLEXITY_WEIGHT, MAX_BASE_RESOLUTION, MIN_BASE_RESOLUTION, RESOLUTION_CEILING,
};
pub use params::TraceParameters;
pub use path::{
    flatten_command, parse, BuildEvent, Flattened, Outline, OutlineBuilder, OutlineEntry,
    OutlineSet, PathCommand,
};
pub use pipeline::{trace_path, TracedOutline, TracedPath};
pub use svg::extract_path_data;
