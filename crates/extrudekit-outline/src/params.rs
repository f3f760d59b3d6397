//! Tracing pass configuration.

use extrudekit_core::ParameterError;
use serde::{Deserialize, Serialize};

use crate::detail::RESOLUTION_CEILING;

/// Parameters for one tracing pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceParameters {
    /// Segments per curved command during the initial flattening pass.
    ///
    /// The detail planner later derives per-outline resolutions from the
    /// analysis; this value only controls the first pass the analysis is
    /// computed from.
    pub curve_resolution: u32,
    /// Vertex budget handed to the detail planner.
    pub vertex_budget: u32,
    /// Also produce the low-to-ultra detail ladder for each outline.
    pub build_ladder: bool,
}

impl Default for TraceParameters {
    fn default() -> Self {
        Self {
            curve_resolution: 64,
            vertex_budget: 20_000,
            build_ladder: true,
        }
    }
}

impl TraceParameters {
    /// Validates parameter ranges.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.curve_resolution < 1 || self.curve_resolution > RESOLUTION_CEILING {
            return Err(ParameterError::OutOfRange {
                name: "curve_resolution".to_string(),
                value: f64::from(self.curve_resolution),
                min: 1.0,
                max: f64::from(RESOLUTION_CEILING),
            });
        }
        if self.vertex_budget < 1 {
            return Err(ParameterError::OutOfRange {
                name: "vertex_budget".to_string(),
                value: f64::from(self.vertex_budget),
                min: 1.0,
                max: f64::from(u32::MAX),
            });
        }
        Ok(())
    }
}
