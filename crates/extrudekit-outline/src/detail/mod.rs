//! Shape analysis and adaptive detail planning.
//!
//! - [`analysis`]: per-outline complexity scoring
//! - [`planner`]: tessellation/extrusion parameter derivation and the
//!   Low/Medium/High/Ultra detail ladder

mod analysis;
mod planner;

pub use analysis::{analyze, ShapeAnalysis, CURVE_COMPLEXITY_WEIGHT};
pub use planner::{
    plan, plan_ladder, DetailLevel, DetailSettings, MAX_BASE_RESOLUTION, MIN_BASE_RESOLUTION,
    RESOLUTION_CEILING,
};
