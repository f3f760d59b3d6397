//! Detail level planning.
//!
//! Derives concrete tessellation and extrusion parameters from a shape
//! analysis. The driving idea: more geometric detail in the source gets
//! proportionally more tessellation budget, but always bounded. The
//! clamps below are what keep adversarial inputs (thousands of tiny curve
//! commands) from producing runaway vertex counts.
//!
//! All constants here are empirically tuned. Treat them as adjustable
//! parameters, not physical truths, and retune them in one place.

use serde::{Deserialize, Serialize};

use super::ShapeAnalysis;

/// Lower clamp on the derived base resolution.
pub const MIN_BASE_RESOLUTION: u32 = 32;
/// Upper clamp on the derived base resolution.
pub const MAX_BASE_RESOLUTION: u32 = 128;
/// Hard ceiling applied to every planned or ladder resolution.
pub const RESOLUTION_CEILING: u32 = 512;
/// Complexity units per curve segment when deriving the base resolution.
const COMPLEXITY_PER_SEGMENT: f64 = 5.0;
/// Floor when a vertex budget forces the resolution down.
const BUDGET_RESOLUTION_FLOOR: u32 = 8;
/// Curve count above which beveling is worth the extra geometry.
const BEVEL_CURVE_THRESHOLD: usize = 5;
/// Curve count above which the heavier bevel profile applies.
const HEAVY_BEVEL_CURVE_THRESHOLD: usize = 10;

/// Named tessellation tiers of the detail ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// Half the base resolution.
    Low,
    /// The base resolution.
    Medium,
    /// Twice the base resolution.
    High,
    /// Four times the base resolution.
    Ultra,
}

impl DetailLevel {
    /// All levels, lowest first.
    pub const ALL: [DetailLevel; 4] = [
        DetailLevel::Low,
        DetailLevel::Medium,
        DetailLevel::High,
        DetailLevel::Ultra,
    ];

    /// Multiplier applied to the base resolution for this level.
    pub fn multiplier(self) -> f64 {
        match self {
            DetailLevel::Low => 0.5,
            DetailLevel::Medium => 1.0,
            DetailLevel::High => 2.0,
            DetailLevel::Ultra => 4.0,
        }
    }
}

impl std::fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Ultra => write!(f, "ultra"),
        }
    }
}

/// Tessellation and extrusion parameters for one outline.
///
/// Never mutated after creation; each detail level is a fresh value.
/// Consumed by the extrusion backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailSettings {
    /// Segments per curved command when re-flattening at this level.
    pub curve_resolution: u32,
    /// Extrusion depth along the solid's depth axis.
    pub extrude_depth: f64,
    /// Whether edges get a bevel at all.
    pub bevel_enabled: bool,
    /// Bevel inset into the solid.
    pub bevel_thickness: f64,
    /// Bevel extent away from the outline.
    pub bevel_size: f64,
    /// Segments across the bevel profile.
    pub bevel_segments: u32,
    /// Subdivisions along the extrusion depth.
    pub depth_steps: u32,
}

/// Base resolution for the medium tier, derived from complexity.
fn base_resolution(analysis: &ShapeAnalysis) -> u32 {
    let derived = analysis.complexity / COMPLEXITY_PER_SEGMENT;
    (derived as u32).clamp(MIN_BASE_RESOLUTION, MAX_BASE_RESOLUTION)
}

/// Caps `resolution` so the estimated flattened vertex count fits the
/// budget. Estimate: every curved command resolves to `resolution` points
/// on top of the outline's existing points.
fn apply_vertex_budget(resolution: u32, analysis: &ShapeAnalysis, vertex_budget: u32) -> u32 {
    let curves = analysis.curve_command_count as u64;
    if curves == 0 {
        return resolution;
    }
    let estimate = analysis.point_count as u64 + curves * u64::from(resolution);
    if estimate <= u64::from(vertex_budget) {
        return resolution;
    }
    let available = u64::from(vertex_budget).saturating_sub(analysis.point_count as u64) / curves;
    let capped = u32::try_from(available).unwrap_or(u32::MAX);
    capped.clamp(BUDGET_RESOLUTION_FLOOR, resolution)
}

/// Derives the full parameter set for one resolution.
fn settings_at(analysis: &ShapeAnalysis, curve_resolution: u32) -> DetailSettings {
    let curves = analysis.curve_command_count;
    let heavy = curves > HEAVY_BEVEL_CURVE_THRESHOLD;
    DetailSettings {
        curve_resolution,
        extrude_depth: (analysis.bounds.diagonal() / 20.0).clamp(0.5, 5.0),
        bevel_enabled: curves > BEVEL_CURVE_THRESHOLD,
        bevel_thickness: if heavy { 0.3 } else { 0.1 },
        bevel_size: if heavy { 0.2 } else { 0.05 },
        bevel_segments: ((curves / 2) as u32).clamp(2, 8),
        depth_steps: ((analysis.complexity / 50.0).floor() as u32).clamp(1, 4),
    }
}

/// Plans detail settings for one outline within a vertex budget.
pub fn plan(analysis: &ShapeAnalysis, vertex_budget: u32) -> DetailSettings {
    let base = base_resolution(analysis);
    let resolution = apply_vertex_budget(base, analysis, vertex_budget).min(RESOLUTION_CEILING);
    settings_at(analysis, resolution)
}

/// Plans the four-rung detail ladder, lowest tier first.
///
/// Each rung scales the base resolution by its level multiplier and is
/// re-clamped to the global ceiling so even ultra stays bounded.
pub fn plan_ladder(analysis: &ShapeAnalysis) -> Vec<DetailSettings> {
    let base = base_resolution(analysis);
    DetailLevel::ALL
        .iter()
        .map(|level| {
            let scaled = (f64::from(base) * level.multiplier()).round() as u32;
            settings_at(analysis, scaled.min(RESOLUTION_CEILING))
        })
        .collect()
}
