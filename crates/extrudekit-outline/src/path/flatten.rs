//! Curve flattening at a fixed parameter resolution.
//!
//! Every flattening routine here is a pure function of its inputs:
//! identical inputs always yield identical point sequences, which keeps
//! detail-level ladders reproducible. Output excludes the start point and
//! ends on the exact analytic endpoint of the curve, so consecutive
//! segments chain without drift.

use extrudekit_core::Point2D;
use tracing::warn;

use super::PathCommand;

/// Radii or chord lengths below this are treated as degenerate.
const DEGENERATE_EPSILON: f64 = 1e-12;

/// Result of flattening one curved command.
#[derive(Debug, Clone, PartialEq)]
pub struct Flattened {
    /// Sample points after the start point, ending on the curve endpoint.
    pub points: Vec<Point2D>,
    /// True when arc construction fell back to a straight line.
    pub degraded: bool,
}

impl Flattened {
    fn exact(points: Vec<Point2D>) -> Self {
        Self {
            points,
            degraded: false,
        }
    }
}

/// Flatten one curved command starting at `from`.
///
/// Returns `None` for commands that draw no curve (`MoveTo`, `LineTo`,
/// `Close`); those never need flattening.
pub fn flatten_command(command: &PathCommand, from: Point2D, resolution: u32) -> Option<Flattened> {
    match *command {
        PathCommand::CubicTo { ctrl1, ctrl2, end } => Some(Flattened::exact(flatten_cubic(
            from, ctrl1, ctrl2, end, resolution,
        ))),
        PathCommand::QuadraticTo { ctrl, end } => {
            Some(Flattened::exact(flatten_quadratic(from, ctrl, end, resolution)))
        }
        PathCommand::ArcTo {
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
            end,
        } => Some(flatten_arc(
            from, rx, ry, rotation, large_arc, sweep, end, resolution,
        )),
        PathCommand::MoveTo(_) | PathCommand::LineTo(_) | PathCommand::Close => None,
    }
}

/// Point on a cubic Bézier at parameter `t`.
fn cubic_point(p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D, t: f64) -> Point2D {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;
    Point2D::new(
        b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
        b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
    )
}

/// Point on a quadratic Bézier at parameter `t`.
fn quadratic_point(p0: Point2D, ctrl: Point2D, p2: Point2D, t: f64) -> Point2D {
    let u = 1.0 - t;
    let b0 = u * u;
    let b1 = 2.0 * u * t;
    let b2 = t * t;
    Point2D::new(
        b0 * p0.x + b1 * ctrl.x + b2 * p2.x,
        b0 * p0.y + b1 * ctrl.y + b2 * p2.y,
    )
}

/// Sample a cubic Bézier at `resolution` uniform parameter steps.
pub fn flatten_cubic(
    from: Point2D,
    ctrl1: Point2D,
    ctrl2: Point2D,
    end: Point2D,
    resolution: u32,
) -> Vec<Point2D> {
    let resolution = resolution.max(1);
    let mut points = Vec::with_capacity(resolution as usize);
    for step in 1..resolution {
        let t = f64::from(step) / f64::from(resolution);
        points.push(cubic_point(from, ctrl1, ctrl2, end, t));
    }
    // The final sample is the analytic endpoint, not an evaluation at t=1.
    points.push(end);
    points
}

/// Sample a quadratic Bézier at `resolution` uniform parameter steps.
pub fn flatten_quadratic(
    from: Point2D,
    ctrl: Point2D,
    end: Point2D,
    resolution: u32,
) -> Vec<Point2D> {
    let resolution = resolution.max(1);
    let mut points = Vec::with_capacity(resolution as usize);
    for step in 1..resolution {
        let t = f64::from(step) / f64::from(resolution);
        points.push(quadratic_point(from, ctrl, end, t));
    }
    points.push(end);
    points
}

/// Point on the ellipse `center + R(rotation) * (rx*u, ry*v)`.
#[allow(clippy::too_many_arguments)]
fn ellipse_point(
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    cos_phi: f64,
    sin_phi: f64,
    u: f64,
    v: f64,
) -> Point2D {
    Point2D::new(
        cx + cos_phi * (rx * u) - sin_phi * (ry * v),
        cy + sin_phi * (rx * u) + cos_phi * (ry * v),
    )
}

/// Sample an elliptical arc at `resolution` uniform angle steps.
///
/// Uses the endpoint-to-center conversion from the SVG arc definition.
/// When the construction cannot be solved (degenerate radii or coincident
/// endpoints) the arc degrades to a single straight segment to the
/// endpoint; this is reported on the returned [`Flattened`] and logged,
/// never raised as an error.
#[allow(clippy::too_many_arguments)]
pub fn flatten_arc(
    from: Point2D,
    rx: f64,
    ry: f64,
    rotation: f64,
    large_arc: bool,
    sweep: bool,
    end: Point2D,
    resolution: u32,
) -> Flattened {
    let resolution = resolution.max(1);

    if rx.abs() < DEGENERATE_EPSILON || ry.abs() < DEGENERATE_EPSILON {
        warn!(rx, ry, "degenerate arc radii, falling back to straight segment");
        return Flattened {
            points: vec![end],
            degraded: true,
        };
    }

    let mut rx = rx.abs();
    let mut ry = ry.abs();
    let cos_phi = rotation.cos();
    let sin_phi = rotation.sin();

    // Transform the midpoint into the ellipse frame.
    let dx2 = (from.x - end.x) / 2.0;
    let dy2 = (from.y - end.y) / 2.0;
    let x1p = cos_phi * dx2 + sin_phi * dy2;
    let y1p = -sin_phi * dx2 + cos_phi * dy2;

    // Scale radii up if they cannot span the endpoints.
    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        let scale = lambda.sqrt();
        rx *= scale;
        ry *= scale;
    }

    // Solve for the center in the ellipse frame.
    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let x1p2 = x1p * x1p;
    let y1p2 = y1p * y1p;
    let denom = rx2 * y1p2 + ry2 * x1p2;
    if denom.abs() < DEGENERATE_EPSILON {
        warn!("arc endpoints coincide, falling back to straight segment");
        return Flattened {
            points: vec![end],
            degraded: true,
        };
    }

    // Negative only through rounding once the radii are scaled.
    let numer = (rx2 * ry2 - rx2 * y1p2 - ry2 * x1p2).max(0.0);
    let sign = if large_arc == sweep { -1.0 } else { 1.0 };
    let coef = sign * (numer / denom).sqrt();
    let cxp = coef * (rx * y1p / ry);
    let cyp = coef * (-ry * x1p / rx);

    let cx = cos_phi * cxp - sin_phi * cyp + (from.x + end.x) / 2.0;
    let cy = sin_phi * cxp + cos_phi * cyp + (from.y + end.y) / 2.0;

    // Start angle and sweep extent.
    let ux = (x1p - cxp) / rx;
    let uy = (y1p - cyp) / ry;
    let vx = (-x1p - cxp) / rx;
    let vy = (-y1p - cyp) / ry;

    let theta1 = uy.atan2(ux);
    let mut delta = {
        let dot = ux * vx + uy * vy;
        let det = ux * vy - uy * vx;
        det.atan2(dot)
    };
    if !sweep && delta > 0.0 {
        delta -= std::f64::consts::TAU;
    } else if sweep && delta < 0.0 {
        delta += std::f64::consts::TAU;
    }

    let mut points = Vec::with_capacity(resolution as usize);
    for step in 1..resolution {
        let theta = theta1 + delta * f64::from(step) / f64::from(resolution);
        points.push(ellipse_point(
            cx,
            cy,
            rx,
            ry,
            cos_phi,
            sin_phi,
            theta.cos(),
            theta.sin(),
        ));
    }
    points.push(end);

    Flattened {
        points,
        degraded: false,
    }
}
