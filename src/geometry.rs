/// Axis-aligned rectangles in logical screen pixels.
///
/// Only the origin and size are stored; every edge is derived on demand so
/// the two can never drift apart.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    /// A `w`×`h` rect whose right edge midpoint sits on `(x, y)`.
    pub fn from_mid_right((x, y): (f32, f32), w: f32, h: f32) -> Self {
        Rect::new(x - w, y - h / 2.0, w, h)
    }

    /// A `w`×`h` rect whose left edge midpoint sits on `(x, y)`.
    pub fn from_mid_left((x, y): (f32, f32), w: f32, h: f32) -> Self {
        Rect::new(x, y - h / 2.0, w, h)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn mid_left(&self) -> (f32, f32) {
        (self.left(), self.center_y())
    }

    pub fn mid_right(&self) -> (f32, f32) {
        (self.right(), self.center_y())
    }

    /// The pixel-snapped copy used for drawing and collision.
    pub fn rounded(&self) -> Rect {
        Rect::new(self.x.round(), self.y.round(), self.w, self.h)
    }

    /// Strict overlap: rects that merely share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Anything that occupies a rectangle on screen.
pub trait Body {
    fn bounds(&self) -> Rect;

    fn collides_with(&self, other: &dyn Body) -> bool {
        self.bounds().overlaps(&other.bounds())
    }
}
