//! range-chart: an embeddable bar chart for painting hours per day.
//!
//! A [`ChartWidget`] owns a fixed-length series of small integers, turns pointer
//! gestures into provisional drag edits, commits them on release and animates
//! externally pushed updates. Drawing goes through the [`render::Renderer`]
//! trait so the same widget runs headless, on Cairo, or inside GTK.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartWidget, ChartWidgetConfig};
pub use error::{ChartError, ChartResult};
