//! Configuration for the CTC Charts dashboard
//!
//! Holds the color palette and the declarative per-chart rendering options,
//! plus the built-in preset for every dashboard chart.

pub mod options;
pub mod palette;
pub mod presets;

pub use options::{AxisOptions, ChartOptions, LegendPosition, TickFormat};
pub use palette::{border_colors, generate_colors, group_color};
pub use presets::for_chart;
