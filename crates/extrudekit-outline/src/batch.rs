//! Parallel batch processing across paths and documents.
//!
//! Paths are independent of each other, so batches fan out with simple
//! data parallelism. Results keep stable input order, which downstream
//! indexing relies on, and one bad path never aborts its siblings:
//! its failure is collected alongside the successful results.

use rayon::prelude::*;
use tracing::debug;

use extrudekit_core::PathFailure;

use crate::params::TraceParameters;
use crate::pipeline::{trace_path, TracedPath};
use crate::svg::extract_path_data;

/// Partial-result outcome of a batch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchOutcome {
    /// Successfully traced paths, in input order.
    pub traced: Vec<TracedPath>,
    /// Per-path failures, in input order, each with its source attached.
    pub failures: Vec<PathFailure>,
}

impl BatchOutcome {
    /// True when every path traced successfully.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Traces many path data strings in parallel.
pub fn trace_paths<S>(paths: &[S], params: &TraceParameters) -> BatchOutcome
where
    S: AsRef<str> + Sync,
{
    // Indexed parallel map keeps collection order stable.
    let results: Vec<Result<TracedPath, PathFailure>> = paths
        .par_iter()
        .map(|data| trace_path(data.as_ref(), params))
        .collect();

    let mut outcome = BatchOutcome::default();
    for result in results {
        match result {
            Ok(traced) => outcome.traced.push(traced),
            Err(failure) => outcome.failures.push(failure),
        }
    }

    debug!(
        traced = outcome.traced.len(),
        failed = outcome.failures.len(),
        "batch complete"
    );
    outcome
}

/// Extracts every path from an SVG document and traces them in parallel.
pub fn trace_document(svg_content: &str, params: &TraceParameters) -> anyhow::Result<BatchOutcome> {
    let paths = extract_path_data(svg_content)?;
    Ok(trace_paths(&paths, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use extrudekit_core::ParseError;

    #[test]
    fn test_batch_all_good() {
        let paths = ["M0,0 L10,0 L10,10 Z", "M0,0 L4,0 L4,4 L0,4 Z"];
        let outcome = trace_paths(&paths, &TraceParameters::default());
        assert!(outcome.is_complete());
        assert_eq!(outcome.traced.len(), 2);
        // Input order survives the parallel fan-out.
        assert_eq!(outcome.traced[0].outlines[0].outline.point_count(), 3);
        assert_eq!(outcome.traced[1].outlines[0].outline.point_count(), 4);
    }

    #[test]
    fn test_batch_partial_failure() {
        let paths = [
            "M0,0 L10,0 L10,10 Z",
            "M0,0 B10,10",
            "M0,0 L4,0 L4,4 L0,4 Z",
        ];
        let outcome = trace_paths(&paths, &TraceParameters::default());
        assert!(!outcome.is_complete());
        assert_eq!(outcome.traced.len(), 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].path_data, "M0,0 B10,10");
        assert_eq!(
            outcome.failures[0].error,
            ParseError::UnsupportedCommand('B')
        );
    }

    #[test]
    fn test_batch_deterministic() {
        let paths = vec!["M0,0 C10,0 10,10 0,10 Z".to_string(); 8];
        let a = trace_paths(&paths, &TraceParameters::default());
        let b = trace_paths(&paths, &TraceParameters::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_trace_document() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
            <path d="M0,0 L10,0 L10,10 Z"/>
            <path d="M0,0 B10,10"/>
        </svg>"#;
        let outcome = trace_document(svg, &TraceParameters::default()).unwrap();
        assert_eq!(outcome.traced.len(), 1);
        assert_eq!(outcome.failures.len(), 1);
    }

    #[test]
    fn test_trace_document_rejects_non_svg() {
        assert!(trace_document("not svg at all", &TraceParameters::default()).is_err());
    }
}
