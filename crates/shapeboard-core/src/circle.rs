//! Circle shape record.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for circles.
pub type CircleId = Uuid;

/// A circle placed inside the container.
///
/// `x`/`y` address the top-left corner of the circle's bounding square and
/// `size` is its diameter, all in container pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: CircleId,
    /// Diameter in pixels.
    pub size: f64,
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
}

impl Circle {
    /// Create a new circle with a fresh id.
    pub fn new(size: f64, x: f64, y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            size,
            x,
            y,
        }
    }

    pub fn id(&self) -> CircleId {
        self.id
    }

    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.radius(), self.y + self.radius())
    }

    /// Bounding square of the circle.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.size, self.y + self.size)
    }

    /// Check whether a point lies on the disc (edge inclusive).
    pub fn hit_test(&self, point: Point) -> bool {
        let r = self.radius();
        (point - self.center()).hypot2() <= r * r
    }

    /// Move the top-left corner to `target`, keeping the whole circle inside
    /// a container of the given size.
    pub fn place_clamped(&mut self, target: Point, container: Size) {
        self.x = clamp_axis(target.x, container.width, self.size);
        self.y = clamp_axis(target.y, container.height, self.size);
    }

    /// Whether the circle lies entirely inside the container.
    pub fn fits_within(&self, container: Size) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.size <= container.width
            && self.y + self.size <= container.height
    }
}

/// Clamp a top-left coordinate to `[0, extent - size]`.
///
/// Saturates at 0 when the circle is larger than the extent.
pub fn clamp_axis(value: f64, extent: f64, size: f64) -> f64 {
    let max = (extent - size).max(0.0);
    value.clamp(0.0, max)
}
