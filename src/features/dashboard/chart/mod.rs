//! Donut chart geometry and provider colors.

pub mod geometry;
pub mod palette;

pub use geometry::{build_arcs, build_legend, ArcSegment, DonutLayout, LegendEntry};
pub use palette::ProviderPalette;
