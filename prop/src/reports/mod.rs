//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod attrs;
mod check;
mod output;
mod render;

pub use attrs::AttrsReport;
pub use check::{CheckReport, PropertyInfo};
pub use output::{Report, TerminalOutput};
pub use render::RenderReport;
