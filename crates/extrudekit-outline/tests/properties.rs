use extrudekit_core::Point2D;
use extrudekit_outline::{
    flatten_command, parse, plan, plan_ladder, PathCommand, ShapeAnalysis, TraceParameters,
    RESOLUTION_CEILING,
};
use proptest::prelude::*;

fn finite_coord() -> impl Strategy<Value = f64> {
    -1_000.0..1_000.0f64
}

proptest! {
    #[test]
    fn prop_parse_is_deterministic(
        x1 in finite_coord(),
        y1 in finite_coord(),
        x2 in finite_coord(),
        y2 in finite_coord(),
    ) {
        let data = format!("M{x1},{y1} C{x2},{y2} {x1},{y2} {x2},{y1} Z");
        let first = parse(&data);
        let second = parse(&data);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_flatten_is_deterministic_and_ends_exactly(
        fx in finite_coord(),
        fy in finite_coord(),
        cx in finite_coord(),
        cy in finite_coord(),
        ex in finite_coord(),
        ey in finite_coord(),
        resolution in 1u32..256,
    ) {
        let from = Point2D::new(fx, fy);
        let end = Point2D::new(ex, ey);
        let command = PathCommand::QuadraticTo {
            ctrl: Point2D::new(cx, cy),
            end,
        };
        let first = flatten_command(&command, from, resolution).unwrap();
        let second = flatten_command(&command, from, resolution).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.points.len(), resolution as usize);
        prop_assert_eq!(*first.points.last().unwrap(), end);
    }

    #[test]
    fn prop_refinement_keeps_shared_parameter_samples(
        cx in finite_coord(),
        cy in finite_coord(),
        resolution in 1u32..64,
    ) {
        // Sampling at N and 4N shares every t = i/N; refinement never
        // moves the shared samples.
        let from = Point2D::new(0.0, 0.0);
        let end = Point2D::new(100.0, 0.0);
        let command = PathCommand::CubicTo {
            ctrl1: Point2D::new(cx, cy),
            ctrl2: Point2D::new(cy, cx),
            end,
        };
        let coarse = flatten_command(&command, from, resolution).unwrap().points;
        let fine = flatten_command(&command, from, resolution * 4).unwrap().points;
        prop_assert_eq!(fine.len(), coarse.len() * 4);
        for (i, sample) in coarse.iter().enumerate() {
            let shared = fine[(i + 1) * 4 - 1];
            prop_assert!(sample.distance_to(&shared) < 1e-6);
        }
    }

    #[test]
    fn prop_planned_resolution_never_exceeds_ceiling(
        point_count in 0usize..1_000_000,
        curves in 0usize..100_000,
        budget in 1u32..10_000_000,
        extent in 0.001f64..100_000.0,
    ) {
        let analysis = ShapeAnalysis {
            bounds: extrudekit_core::BoundingBox {
                min: Point2D::new(0.0, 0.0),
                max: Point2D::new(extent, extent),
            },
            point_count,
            curve_command_count: curves,
            complexity: point_count as f64 + curves as f64 * 10.0,
        };
        let planned = plan(&analysis, budget);
        prop_assert!(planned.curve_resolution <= RESOLUTION_CEILING);
        prop_assert!((0.5..=5.0).contains(&planned.extrude_depth));
        prop_assert!((1..=4).contains(&planned.depth_steps));
        prop_assert!((2..=8).contains(&planned.bevel_segments));
        for settings in plan_ladder(&analysis) {
            prop_assert!(settings.curve_resolution <= RESOLUTION_CEILING);
        }
    }

    #[test]
    fn prop_more_curves_strictly_raise_complexity(
        curves in 0usize..50,
        extra in 1usize..50,
    ) {
        let path_with = |n: usize| {
            let mut data = String::from("M0,0 L100,0 ");
            for i in 0..n {
                let x = 100.0 - (i as f64 + 1.0);
                data.push_str(&format!("Q{x},50 {x},0 "));
            }
            data.push_str("L0,10 Z");
            data
        };
        let params = TraceParameters {
            curve_resolution: 4,
            ..TraceParameters::default()
        };
        let base = extrudekit_outline::trace_path(&path_with(curves), &params).unwrap();
        let more = extrudekit_outline::trace_path(&path_with(curves + extra), &params).unwrap();
        prop_assert!(
            more.outlines[0].analysis.complexity > base.outlines[0].analysis.complexity
        );
    }
}
