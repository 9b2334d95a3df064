//! # mgplan-viz: Siting Result Plot Data
//!
//! Turns plants, candidate sites and a selection vector into a serializable
//! point list for a spatial scatter plot. Rendering is left to the consumer
//! (a frontend map, a notebook, an SVG writer); this crate only shapes the
//! data.

mod plot;

pub use plot::{selection_plot, PlotPoint, PlotResult, PointKind};
