//! Per-outline complexity analysis.

use extrudekit_core::BoundingBox;
use serde::{Deserialize, Serialize};

use crate::path::{Outline, PathCommand};

/// Weight of one curved command relative to a plain vertex in the
/// complexity score. Curves are the costly feature to resolve well.
///
/// Empirically tuned; treat as adjustable, not physical.
pub const CURVE_COMPLEXITY_WEIGHT: f64 = 10.0;

/// Derived, read-only measurements of one outline.
///
/// Cheap to recompute; recompute rather than cache whenever the
/// resolution that produced the outline changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeAnalysis {
    /// Axis-aligned bounds of the outline.
    pub bounds: BoundingBox,
    /// Points in the flattened outline.
    pub point_count: usize,
    /// Cubic, quadratic and arc commands that fed the outline.
    pub curve_command_count: usize,
    /// Scalar detail heuristic: `points + curves * weight`.
    pub complexity: f64,
}

/// Analyzes one outline against the commands that produced it.
///
/// Pure query with no side effects; safe to call repeatedly.
pub fn analyze(outline: &Outline, source_commands: &[PathCommand]) -> ShapeAnalysis {
    let bounds = outline.bounding_box();
    let point_count = outline.point_count();
    let curve_command_count = source_commands.iter().filter(|c| c.is_curve()).count();
    let complexity = point_count as f64 + curve_command_count as f64 * CURVE_COMPLEXITY_WEIGHT;
    ShapeAnalysis {
        bounds,
        point_count,
        curve_command_count,
        complexity,
    }
}
