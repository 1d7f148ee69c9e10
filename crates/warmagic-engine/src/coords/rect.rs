use super::{Point, Size};

/// Axis-aligned rectangle stored as its four edges (top-left origin).
///
/// `left <= right` and `top <= bottom` are expected but not enforced; an
/// inverted rect yields negative sizes and draws nothing downstream.
/// Zero-area rects are legal.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect { left: 0.0, top: 0.0, right: 0.0, bottom: 0.0 };

    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.w,
            bottom: origin.y + size.h,
        }
    }

    #[inline]
    pub const fn top_left(self) -> Point {
        Point::new(self.left, self.top)
    }

    #[inline]
    pub const fn size(self) -> Size {
        Size::new(self.right - self.left, self.bottom - self.top)
    }

    /// True when the rect covers a strictly positive area.
    #[inline]
    pub fn has_area(self) -> bool {
        self.size().has_area()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }

    /// Strict interior containment: points exactly on an edge are outside.
    ///
    /// Hit-testing wants this asymmetry so two widgets sharing an edge never
    /// both claim the same point.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x > self.left && p.y > self.top && p.x < self.right && p.y < self.bottom
    }

    #[inline]
    pub fn center(self) -> Point {
        Point::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }

    /// Same size, repositioned so its center lands on `center`.
    #[inline]
    pub fn with_center(self, center: Point) -> Self {
        let half_w = (self.right - self.left) * 0.5;
        let half_h = (self.bottom - self.top) * 0.5;
        Self {
            left: center.x - half_w,
            top: center.y - half_h,
            right: center.x + half_w,
            bottom: center.y + half_h,
        }
    }

    /// Same size, centered inside `outer`.
    #[inline]
    pub fn centered_on(self, outer: Rect) -> Self {
        self.with_center(outer.center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(left: f32, top: f32, right: f32, bottom: f32) -> Rect {
        Rect::new(left, top, right, bottom)
    }

    // ── size / has_area ───────────────────────────────────────────────────

    #[test]
    fn size_of_well_formed_rect() {
        let s = r(10.0, 20.0, 30.0, 50.0).size();
        assert_eq!(s, Size::new(20.0, 30.0));
    }

    #[test]
    fn inverted_rect_yields_negative_size() {
        let s = r(30.0, 0.0, 10.0, 10.0).size();
        assert_eq!(s.w, -20.0);
        assert!(!s.has_area());
    }

    #[test]
    fn zero_area_rect_has_no_area() {
        assert!(!r(5.0, 5.0, 5.0, 5.0).has_area());
        assert!(!r(0.0, 0.0, 10.0, 0.0).has_area());
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn contains_excludes_edges() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(!rect.contains(Point::new(0.0, 0.0)));
        assert!(!rect.contains(Point::new(10.0, 5.0)));
        assert!(!rect.contains(Point::new(5.0, 0.0)));
        assert!(!rect.contains(Point::new(5.0, 10.0)));
    }

    #[test]
    fn contains_outside() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(!rect.contains(Point::new(-1.0, 5.0)));
        assert!(!rect.contains(Point::new(5.0, 11.0)));
    }

    // ── centering ─────────────────────────────────────────────────────────

    #[test]
    fn center_of_rect() {
        assert_eq!(r(0.0, 0.0, 10.0, 20.0).center(), Point::new(5.0, 10.0));
    }

    #[test]
    fn with_center_keeps_size() {
        let moved = r(0.0, 0.0, 10.0, 4.0).with_center(Point::new(50.0, 50.0));
        assert_eq!(moved, r(45.0, 48.0, 55.0, 52.0));
    }

    #[test]
    fn centered_on_outer_rect() {
        let outer = r(0.0, 0.0, 100.0, 100.0);
        let inner = r(0.0, 0.0, 20.0, 10.0).centered_on(outer);
        assert_eq!(inner, r(40.0, 45.0, 60.0, 55.0));
    }
}
