//! SVG path data parsing and outline construction.
//!
//! The modules here cover the journey from a raw `d` attribute string to
//! closed polygonal outlines:
//!
//! - [`command`]: typed drawing commands with absolute coordinates
//! - [`parser`]: tokenizer and command resolution state machine
//! - [`flatten`]: curve-to-polyline sampling at a fixed resolution
//! - [`outline`]: closed outline accumulation, one polygon per subpath

mod command;
mod flatten;
mod outline;
mod parser;

pub use command::PathCommand;
pub use flatten::{flatten_command, Flattened};
pub use outline::{BuildEvent, Outline, OutlineBuilder, OutlineEntry, OutlineSet};
pub use parser::parse;
