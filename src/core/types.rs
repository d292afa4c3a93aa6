use serde::{Deserialize, Serialize};

/// Pixel size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Returns whether `y` lies in `[0, height]`.
    #[must_use]
    pub fn contains_y(self, y: f64) -> bool {
        (0.0..=f64::from(self.height)).contains(&y)
    }
}

/// Pointer position relative to the surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
}

impl SurfacePoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Page-space position of the surface's top-left corner.
///
/// Hosts that deliver pointer events in page coordinates describe where the
/// surface sits by handing over the offsets of each positioned ancestor,
/// starting from the surface itself.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceOrigin {
    pub x: f64,
    pub y: f64,
}

impl SurfaceOrigin {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Sums `(offset_left, offset_top)` pairs walked up the positioned
    /// ancestor chain.
    #[must_use]
    pub fn from_offset_chain<I>(chain: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        chain
            .into_iter()
            .fold(Self::default(), |origin, (left, top)| Self {
                x: origin.x + left,
                y: origin.y + top,
            })
    }

    #[must_use]
    pub fn to_local(self, page_x: f64, page_y: f64) -> SurfacePoint {
        SurfacePoint::new(page_x - self.x, page_y - self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::{SurfaceOrigin, Viewport};

    #[test]
    fn offset_chain_sums_every_ancestor() {
        let origin = SurfaceOrigin::from_offset_chain([(10.0, 4.0), (20.0, 6.0), (0.5, 0.0)]);
        assert_eq!(origin, SurfaceOrigin::new(30.5, 10.0));

        let local = origin.to_local(40.5, 12.0);
        assert_eq!(local.x, 10.0);
        assert_eq!(local.y, 2.0);
    }

    #[test]
    fn empty_chain_is_page_origin() {
        let origin = SurfaceOrigin::from_offset_chain(std::iter::empty());
        assert_eq!(origin, SurfaceOrigin::default());
    }

    #[test]
    fn vertical_bounds_are_inclusive() {
        let viewport = Viewport::new(100, 50);
        assert!(viewport.contains_y(0.0));
        assert!(viewport.contains_y(50.0));
        assert!(!viewport.contains_y(-0.1));
        assert!(!viewport.contains_y(50.1));
    }
}
