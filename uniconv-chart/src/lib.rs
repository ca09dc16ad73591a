//! uniconv Chart - Result comparison charts
//!
//! Turns a converted value into chart data for the front end:
//! - `build_comparison`: the value expressed in every unit of its category
//! - `ComparisonChart`: serializable bar chart (labels, magnitudes, colour)
//! - `TextRenderer`: markdown table and text bars for terminal clients

mod comparison;
mod chart;
mod render;

pub use comparison::{build_comparison, ComparisonEntry};
pub use chart::{Bar, ComparisonChart};
pub use render::TextRenderer;
