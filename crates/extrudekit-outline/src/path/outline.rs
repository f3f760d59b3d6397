//! Closed outline construction from resolved path commands.
//!
//! One outline per subpath. Subpaths without an explicit close are closed
//! implicitly back to their start point; subpaths that flatten to fewer
//! than three distinct points are dropped with a warning rather than
//! failing the whole path.

use std::ops::Range;

use extrudekit_core::{BoundingBox, Point2D};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{flatten_command, PathCommand};

/// A closed polygonal outline.
///
/// The first point implicitly connects back to the last; no closing
/// duplicate is stored. Immutable once built; ownership passes to the
/// caller that requested it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    points: Vec<Point2D>,
}

impl Outline {
    /// Builds an outline from raw points, enforcing the closed-polygon
    /// shape: a trailing duplicate of the first point is trimmed,
    /// consecutive duplicates collapse, and fewer than three distinct
    /// points yields `None`.
    pub fn from_points(mut points: Vec<Point2D>) -> Option<Self> {
        points.dedup();
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.len() < 3 {
            return None;
        }
        Some(Self { points })
    }

    /// The outline's points in drawing order.
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Number of points in the outline.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Axis-aligned bounds of the outline.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bounds = BoundingBox::at(self.points[0]);
        for point in &self.points[1..] {
            bounds.include(*point);
        }
        bounds
    }
}

/// Observability records emitted while building outlines.
///
/// These never abort processing; they let callers surface degraded
/// geometry without a tracing subscriber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BuildEvent {
    /// Arc flattening fell back to a straight segment.
    DegradedArc {
        /// Index of the arc in the source command list.
        command_index: usize,
    },
    /// A subpath flattened to fewer than three distinct points and was
    /// dropped.
    DroppedSubpath {
        /// Points the subpath held before it was dropped.
        point_count: usize,
    },
}

/// One finished outline with the span of source commands that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    /// The closed outline.
    pub outline: Outline,
    /// Half-open range into the command list fed to the builder.
    pub command_span: Range<usize>,
}

/// Everything produced by one build pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutlineSet {
    /// Finished outlines in subpath order.
    pub outlines: Vec<OutlineEntry>,
    /// Degradations and drops observed during the build.
    pub events: Vec<BuildEvent>,
}

impl OutlineSet {
    /// Number of finished outlines.
    pub fn outline_count(&self) -> usize {
        self.outlines.len()
    }

    /// True when no subpath survived.
    pub fn is_empty(&self) -> bool {
        self.outlines.is_empty()
    }
}

/// Accumulates resolved commands into closed outlines.
///
/// A single curve resolution applies to the whole build pass; adaptive
/// per-outline resolution is a separate, later pass driven by shape
/// analysis.
#[derive(Debug, Clone, Copy)]
pub struct OutlineBuilder {
    resolution: u32,
}

impl OutlineBuilder {
    /// Creates a builder flattening curves at the given resolution.
    pub fn new(resolution: u32) -> Self {
        Self { resolution }
    }

    /// Processes commands in order into closed outlines.
    pub fn build(&self, commands: &[PathCommand]) -> OutlineSet {
        let mut set = OutlineSet::default();
        let mut subpath: Vec<Point2D> = Vec::new();
        let mut span_start = 0usize;
        let mut current = Point2D::default();
        let mut subpath_start = Point2D::default();

        for (index, command) in commands.iter().enumerate() {
            match *command {
                PathCommand::MoveTo(point) => {
                    finalize_subpath(&mut set, &mut subpath, span_start..index);
                    span_start = index;
                    subpath.push(point);
                    current = point;
                    subpath_start = point;
                }
                PathCommand::LineTo(point) => {
                    if subpath.is_empty() {
                        subpath.push(current);
                    }
                    subpath.push(point);
                    current = point;
                }
                PathCommand::CubicTo { end, .. }
                | PathCommand::QuadraticTo { end, .. }
                | PathCommand::ArcTo { end, .. } => {
                    if subpath.is_empty() {
                        subpath.push(current);
                    }
                    // flatten_command returns Some for every curved kind.
                    if let Some(flat) = flatten_command(command, current, self.resolution) {
                        if flat.degraded {
                            set.events.push(BuildEvent::DegradedArc {
                                command_index: index,
                            });
                        }
                        subpath.extend(flat.points);
                    }
                    current = end;
                }
                PathCommand::Close => {
                    finalize_subpath(&mut set, &mut subpath, span_start..index + 1);
                    span_start = index + 1;
                    current = subpath_start;
                }
            }
        }

        finalize_subpath(&mut set, &mut subpath, span_start..commands.len());
        set
    }
}

/// Closes out the subpath buffer into an outline, or drops it with a
/// warning when it degenerated.
fn finalize_subpath(set: &mut OutlineSet, subpath: &mut Vec<Point2D>, span: Range<usize>) {
    let points = std::mem::take(subpath);
    let point_count = points.len();
    if point_count <= 1 {
        // Nothing was drawn (stray moveto or leftover close); not worth a
        // warning.
        return;
    }
    match Outline::from_points(points) {
        Some(outline) => set.outlines.push(OutlineEntry {
            outline,
            command_span: span,
        }),
        None => {
            warn!(point_count, "dropping subpath with fewer than three distinct points");
            set.events.push(BuildEvent::DroppedSubpath { point_count });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::parse;

    fn point(x: f64, y: f64) -> Point2D {
        Point2D::new(x, y)
    }

    fn build(data: &str, resolution: u32) -> OutlineSet {
        let commands = parse(data).unwrap();
        OutlineBuilder::new(resolution).build(&commands)
    }

    #[test]
    fn test_outline_from_points_trims_closing_duplicate() {
        let outline = Outline::from_points(vec![
            point(0.0, 0.0),
            point(1.0, 0.0),
            point(1.0, 1.0),
            point(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(outline.point_count(), 3);
    }

    #[test]
    fn test_outline_needs_three_distinct_points() {
        assert!(Outline::from_points(vec![point(0.0, 0.0), point(1.0, 1.0)]).is_none());
        assert!(Outline::from_points(vec![
            point(0.0, 0.0),
            point(0.0, 0.0),
            point(1.0, 1.0),
        ])
        .is_none());
    }

    #[test]
    fn test_auto_close_without_z() {
        let set = build("M0,0 L10,0 L10,10 L0,10", 16);
        assert_eq!(set.outline_count(), 1);
        assert_eq!(set.outlines[0].outline.point_count(), 4);
        assert!(set.events.is_empty());
    }

    #[test]
    fn test_explicit_close_matches_auto_close() {
        let open = build("M0,0 L10,0 L10,10 L0,10", 16);
        let closed = build("M0,0 L10,0 L10,10 L0,10 Z", 16);
        assert_eq!(
            open.outlines[0].outline.points(),
            closed.outlines[0].outline.points()
        );
    }

    #[test]
    fn test_two_subpaths_two_outlines() {
        let set = build("M0,0 L4,0 L4,4 Z M10,10 L14,10 L14,14 Z", 16);
        assert_eq!(set.outline_count(), 2);
        assert_eq!(set.outlines[0].command_span, 0..4);
        assert_eq!(set.outlines[1].command_span, 4..8);
    }

    #[test]
    fn test_degenerate_subpath_dropped_with_event() {
        let set = build("M0,0 L10,0 M20,20 L30,30 L30,30", 16);
        assert_eq!(set.outline_count(), 0);
        assert_eq!(set.events.len(), 2);
        assert!(matches!(
            set.events[0],
            BuildEvent::DroppedSubpath { point_count: 2 }
        ));
    }

    #[test]
    fn test_curves_flattened_at_resolution() {
        let set = build("M0,0 C10,0 10,10 0,10 Z", 32);
        assert_eq!(set.outline_count(), 1);
        // Start point plus 32 curve samples, minus nothing: the curve ends
        // away from the start so no dedup applies.
        assert_eq!(set.outlines[0].outline.point_count(), 33);
    }

    #[test]
    fn test_degraded_arc_recorded() {
        let set = build("M0,0 L10,0 A0,0 0 0 1 10,10 Z", 16);
        assert_eq!(set.outline_count(), 1);
        assert_eq!(
            set.events,
            vec![BuildEvent::DegradedArc { command_index: 2 }]
        );
        // The arc contributed exactly its endpoint.
        assert_eq!(set.outlines[0].outline.point_count(), 3);
    }

    #[test]
    fn test_subpath_after_close_continues_at_start() {
        // After z the pen returns to the subpath start; the following line
        // begins a new subpath from there.
        let set = build("M0,0 L10,0 L10,10 Z L5,5 L0,5", 16);
        assert_eq!(set.outline_count(), 2);
        assert_eq!(set.outlines[1].outline.points()[0], point(0.0, 0.0));
    }

    #[test]
    fn test_bounding_box() {
        let set = build("M1,2 L5,2 L5,8 L1,8 Z", 16);
        let bounds = set.outlines[0].outline.bounding_box();
        assert_eq!(bounds.min, point(1.0, 2.0));
        assert_eq!(bounds.max, point(5.0, 8.0));
    }
}
