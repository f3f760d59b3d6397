use extrudekit_core::ParseError;
use extrudekit_outline::{
    trace_document, trace_path, trace_paths, BuildEvent, DetailSettings, TraceParameters,
    RESOLUTION_CEILING,
};

#[test]
fn test_trace_heart_icon() {
    // Classic heart icon path: two cubics per lobe.
    let data = "M10,6 C10,2 16,2 16,6 C16,9 10,13 10,13 C10,13 4,9 4,6 C4,2 10,2 10,6 Z";
    let traced = trace_path(data, &TraceParameters::default()).unwrap();
    assert_eq!(traced.outlines.len(), 1);

    let outline = &traced.outlines[0];
    assert_eq!(outline.analysis.curve_command_count, 4);
    // Four cubics at the default resolution dominate the point count.
    assert!(outline.analysis.point_count > 4 * 32);
    assert!(outline.settings.curve_resolution >= 32);
    assert!(!outline.settings.bevel_enabled);
}

#[test]
fn test_trace_ladder_is_monotonic() {
    let data = "M0,0 C10,0 10,10 0,10 C-10,20 10,30 0,40 Z";
    let traced = trace_path(data, &TraceParameters::default()).unwrap();
    let ladder = traced.outlines[0].ladder.as_ref().unwrap();
    assert_eq!(ladder.len(), 4);
    for pair in ladder.windows(2) {
        assert!(pair[0].curve_resolution <= pair[1].curve_resolution);
    }
    for settings in ladder {
        assert!(settings.curve_resolution <= RESOLUTION_CEILING);
    }
}

#[test]
fn test_adversarial_curve_flood_stays_bounded() {
    // Thousands of tiny quadratic wiggles; the planner must keep every
    // resolution under the global ceiling and respect the vertex budget.
    let mut data = String::from("M0,0 ");
    for i in 0..2_000 {
        let x = f64::from(i) * 0.01;
        data.push_str(&format!("Q{:.2},1 {:.2},0 ", x, x + 0.01));
    }
    data.push('Z');

    let params = TraceParameters {
        curve_resolution: 8,
        ..TraceParameters::default()
    };
    let traced = trace_path(&data, &params).unwrap();
    let outline = &traced.outlines[0];
    assert_eq!(outline.analysis.curve_command_count, 2_000);

    let check = |settings: &DetailSettings| {
        assert!(settings.curve_resolution <= RESOLUTION_CEILING);
    };
    check(&outline.settings);
    for settings in outline.ladder.as_ref().unwrap() {
        check(settings);
    }

    // Budget math: planned points stay within the configured budget.
    let estimate = outline.analysis.point_count as u64
        + outline.analysis.curve_command_count as u64
            * u64::from(outline.settings.curve_resolution);
    let floor_estimate = outline.analysis.point_count as u64
        + outline.analysis.curve_command_count as u64 * 8;
    assert!(estimate <= u64::from(params.vertex_budget).max(floor_estimate));
}

#[test]
fn test_sibling_paths_survive_a_bad_one() {
    let paths = [
        "M0,0 L10,0 L10,10 L0,10 Z",
        "M0,0 C1,1",
        "M0,0 A0,0 0 0 1 5,5 L5,0 Z",
    ];
    let outcome = trace_paths(&paths, &TraceParameters::default());
    assert_eq!(outcome.traced.len(), 2);
    assert_eq!(outcome.failures.len(), 1);
    assert!(matches!(
        outcome.failures[0].error,
        ParseError::MalformedArguments { command: 'C', .. }
    ));
    // The degraded arc in the third path is an event, not a failure.
    assert!(outcome.traced[1]
        .events
        .iter()
        .any(|e| matches!(e, BuildEvent::DegradedArc { .. })));
}

#[test]
fn test_trace_document_end_to_end() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
        <path d="M4,4 L20,4 L20,20 L4,20 Z"/>
        <path d="M12,2 C6,2 2,6 2,12 C2,18 6,22 12,22 Z"/>
    </svg>"#;
    let outcome = trace_document(svg, &TraceParameters::default()).unwrap();
    assert!(outcome.is_complete());
    assert_eq!(outcome.traced.len(), 2);

    let square = &outcome.traced[0].outlines[0];
    let blob = &outcome.traced[1].outlines[0];
    assert!(blob.analysis.complexity > square.analysis.complexity);
    assert!(blob.settings.curve_resolution >= square.settings.curve_resolution);
}

#[test]
fn test_detail_settings_serialize_for_export() {
    let traced = trace_path("M0,0 L10,0 L10,10 Z", &TraceParameters::default()).unwrap();
    let json = serde_json::to_string(&traced.outlines[0].settings).unwrap();
    let back: DetailSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(traced.outlines[0].settings, back);
}
