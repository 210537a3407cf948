//! Pixel-space primitives used by the drawables.
//!
//! Everything here is in SVG pixels with the origin at the top left corner
//! and `y` growing downward. The solver works in millimeters; the SVG
//! exporter scales its results into this space before anything is drawn.

/// A position on the canvas.
///
/// ```
/// # use spanfit_core::geometry::Point;
/// let tick = Point::new(60.0, 320.0).with_y(310.0);
/// assert_eq!((tick.x(), tick.y()), (60.0, 310.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Same horizontal position, different height.
    pub fn with_y(self, y: f32) -> Self {
        Self { y, ..self }
    }

    /// The box of `size` centered on this point.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_top_left(
            Self::new(self.x - size.width / 2.0, self.y - size.height / 2.0),
            size,
        )
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }
}

/// Axis-aligned box occupied by a drawable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    left: f32,
    top: f32,
    size: Size,
}

impl Bounds {
    /// Box whose upper left corner is `top_left`.
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            left: top_left.x,
            top: top_left.y,
            size,
        }
    }

    pub fn min_x(self) -> f32 {
        self.left
    }

    pub fn min_y(self) -> f32 {
        self.top
    }

    pub fn max_x(self) -> f32 {
        self.left + self.size.width
    }

    pub fn max_y(self) -> f32 {
        self.top + self.size.height
    }

    pub fn width(self) -> f32 {
        self.size.width
    }

    pub fn height(self) -> f32 {
        self.size.height
    }

    /// Horizontal midpoint, where ticks and element centers line up.
    pub fn center_x(self) -> f32 {
        self.left + self.size.width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_y_keeps_x() {
        let point = Point::new(3.5, 4.0).with_y(2.0);
        assert_eq!(point, Point::new(3.5, 2.0));
    }

    #[test]
    fn test_centered_bounds() {
        let bounds = Point::new(50.0, 50.0).to_bounds(Size::new(20.0, 10.0));

        assert_eq!(bounds.min_x(), 40.0);
        assert_eq!(bounds.min_y(), 45.0);
        assert_eq!(bounds.max_x(), 60.0);
        assert_eq!(bounds.max_y(), 55.0);
        assert_eq!(bounds.center_x(), 50.0);
    }

    #[test]
    fn test_top_left_bounds() {
        let bounds = Bounds::new_from_top_left(Point::new(60.0, 10.0), Size::new(100.0, 30.0));

        assert_eq!(bounds.max_x(), 160.0);
        assert_eq!(bounds.max_y(), 40.0);
        assert_eq!(bounds.width(), 100.0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn canvas_point() -> impl Strategy<Value = Point> {
        (0.0f32..2000.0, 0.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn pixel_size() -> impl Strategy<Value = Size> {
        (0.0f32..400.0, 0.0f32..400.0).prop_map(|(w, h)| Size::new(w, h))
    }

    /// A centered box keeps its size and its center.
    fn check_centered_box(center: Point, size: Size) -> Result<(), TestCaseError> {
        let bounds = center.to_bounds(size);

        prop_assert!(approx_eq!(f32, bounds.center_x(), center.x(), epsilon = 1e-3));
        prop_assert!(approx_eq!(f32, bounds.max_x() - bounds.min_x(), size.width(), epsilon = 1e-3));
        prop_assert!(approx_eq!(f32, bounds.max_y() - bounds.min_y(), size.height(), epsilon = 1e-3));
        Ok(())
    }

    proptest! {
        #[test]
        fn centered_box_keeps_center_and_size(center in canvas_point(), size in pixel_size()) {
            check_centered_box(center, size)?;
        }
    }
}
