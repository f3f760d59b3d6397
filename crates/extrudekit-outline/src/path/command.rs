//! Typed path drawing commands.

use extrudekit_core::Point2D;
use serde::{Deserialize, Serialize};

/// One resolved drawing command.
///
/// All coordinates are absolute: the parser resolves relative (lowercase)
/// commands and smooth-curve reflection before emitting these, so nothing
/// downstream needs to track a current point to interpret them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Start a new subpath at the given point.
    MoveTo(Point2D),
    /// Straight segment from the current point.
    LineTo(Point2D),
    /// Cubic Bézier segment.
    CubicTo {
        /// First control point.
        ctrl1: Point2D,
        /// Second control point.
        ctrl2: Point2D,
        /// Segment endpoint.
        end: Point2D,
    },
    /// Quadratic Bézier segment.
    QuadraticTo {
        /// Control point.
        ctrl: Point2D,
        /// Segment endpoint.
        end: Point2D,
    },
    /// Elliptical arc segment.
    ArcTo {
        /// X radius.
        rx: f64,
        /// Y radius.
        ry: f64,
        /// Ellipse rotation in radians (converted from the degrees in the
        /// source data).
        rotation: f64,
        /// Take the longer of the two candidate arcs.
        large_arc: bool,
        /// Sweep in the positive-angle direction.
        sweep: bool,
        /// Segment endpoint.
        end: Point2D,
    },
    /// Close the current subpath back to its start point.
    Close,
}

impl PathCommand {
    /// Whether this command draws a curve that needs flattening.
    pub fn is_curve(&self) -> bool {
        matches!(
            self,
            PathCommand::CubicTo { .. } | PathCommand::QuadraticTo { .. } | PathCommand::ArcTo { .. }
        )
    }

    /// The point this command leaves the pen at, if it moves the pen.
    pub fn end_point(&self) -> Option<Point2D> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::CubicTo { end, .. }
            | PathCommand::QuadraticTo { end, .. }
            | PathCommand::ArcTo { end, .. } => Some(end),
            PathCommand::Close => None,
        }
    }
}
