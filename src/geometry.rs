pub type Float = f32;
pub type Point = vek::vec::repr_c::vec2::Vec2<Float>;
pub const ORIGIN: Point = Point::new(0.0, 0.0);

pub fn is_finite(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// One plotted segment, from wherever the pen is to `target`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Move {
    pub target: Point,
    /// false: travel move, nothing is drawn
    pub pen_down: bool,
}

impl Move {
    pub const fn travel(target: Point) -> Self {
        Self { target, pen_down: false }
    }

    pub const fn draw(target: Point) -> Self {
        Self { target, pen_down: true }
    }
}

/// Drawable area reported by a backend.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dimensions {
    /// top left corner of the area
    pub origin: Point,
    pub width: Float,
    pub height: Float,
}

impl Dimensions {
    pub const fn new(origin: Point, width: Float, height: Float) -> Self {
        Self { origin, width, height }
    }

    pub fn center(&self) -> Point {
        self.origin + Point::new(self.width, self.height) * 0.5
    }

    /// Radius of the largest circle fitting the area
    pub fn inscribed_radius(&self) -> Float {
        self.width.min(self.height) * 0.5
    }
}
