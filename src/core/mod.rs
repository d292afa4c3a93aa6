pub mod geometry;
pub mod overlay;
pub mod series;
pub mod span;
pub mod types;

pub use geometry::{BarGeometry, BarHit};
pub use overlay::DragOverlay;
pub use series::HoursSeries;
pub use span::DragSpan;
pub use types::{SurfaceOrigin, SurfacePoint, Viewport};
