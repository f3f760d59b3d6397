//! Per-path orchestration: parse, build, analyze, plan.

use extrudekit_core::{ParseError, PathFailure};
use tracing::debug;

use crate::detail::{analyze, plan, plan_ladder, DetailSettings, ShapeAnalysis};
use crate::params::TraceParameters;
use crate::path::{parse, BuildEvent, Outline, OutlineBuilder};

/// One traced outline with its analysis and planned detail settings.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedOutline {
    /// The closed outline, ready for extrusion.
    pub outline: Outline,
    /// Measurements the planning was derived from.
    pub analysis: ShapeAnalysis,
    /// Planned settings within the configured vertex budget.
    pub settings: DetailSettings,
    /// Low-to-ultra ladder, present when requested.
    pub ladder: Option<Vec<DetailSettings>>,
}

/// The full result of tracing one path data string.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedPath {
    /// Outlines in subpath order.
    pub outlines: Vec<TracedOutline>,
    /// Degradations and drops observed during outline construction.
    pub events: Vec<BuildEvent>,
}

/// Traces one SVG path data string end to end.
///
/// Any parse error aborts only this path; the failure carries the source
/// text for diagnostics. A path whose subpaths all degenerate reports
/// [`ParseError::NoValidOutlines`] the same way.
pub fn trace_path(path_data: &str, params: &TraceParameters) -> Result<TracedPath, PathFailure> {
    let commands =
        parse(path_data).map_err(|error| PathFailure::new(path_data, error))?;

    let set = OutlineBuilder::new(params.curve_resolution).build(&commands);
    if set.is_empty() {
        return Err(PathFailure::new(path_data, ParseError::NoValidOutlines));
    }

    debug!(
        outlines = set.outline_count(),
        commands = commands.len(),
        "traced path"
    );

    let outlines = set
        .outlines
        .into_iter()
        .map(|entry| {
            let analysis = analyze(&entry.outline, &commands[entry.command_span.clone()]);
            let settings = plan(&analysis, params.vertex_budget);
            let ladder = params.build_ladder.then(|| plan_ladder(&analysis));
            TracedOutline {
                outline: entry.outline,
                analysis,
                settings,
                ladder,
            }
        })
        .collect();

    Ok(TracedPath {
        outlines,
        events: set.events,
    })
}
