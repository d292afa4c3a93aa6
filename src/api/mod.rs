mod bar_render_frame_builder;
mod render_style;
mod widget;
mod widget_config;

pub use render_style::BarPalette;
pub use widget::{ChartWidget, CommitCallback};
pub use widget_config::ChartWidgetConfig;
