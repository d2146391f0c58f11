/// Integer draw bounds handed in by the host, and the float rect used for strokes.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Bounds anchored at the origin.
    pub const fn sized(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn to_rect_f(self) -> RectF {
        RectF::new(
            self.left as f32,
            self.top as f32,
            self.right as f32,
            self.bottom as f32,
        )
    }

    /// Shrink by per-side insets, as a layered host would before drawing a child.
    pub fn inset_by(self, insets: Insets) -> Self {
        Self::new(
            self.left + insets.left,
            self.top + insets.top,
            self.right - insets.right,
            self.bottom - insets.bottom,
        )
    }
}

/// Per-side padding applied to a child's bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    pub const NONE: Insets = Insets::new(0, 0, 0, 0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    pub fn inset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right - dx, self.bottom - dy)
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Whether `(x, y)` lies inside the ellipse inscribed in this rect.
    pub fn oval_contains(&self, x: f32, y: f32) -> bool {
        let rx = self.width() / 2.0;
        let ry = self.height() / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let nx = (x - self.center_x()) / rx;
        let ny = (y - self.center_y()) / ry;
        nx * nx + ny * ny <= 1.0
    }

    /// Whether `(x, y)` lies inside this rect with corners rounded by `rx`/`ry`.
    pub fn round_rect_contains(&self, x: f32, y: f32, rx: f32, ry: f32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let rx = rx.max(0.0).min(self.width() / 2.0);
        let ry = ry.max(0.0).min(self.height() / 2.0);
        if rx <= 0.0 || ry <= 0.0 {
            return true;
        }
        // min/max rather than clamp: the range may invert by an ulp
        let cx = x.max(self.left + rx).min(self.right - rx);
        let cy = y.max(self.top + ry).min(self.bottom - ry);
        let nx = (x - cx) / rx;
        let ny = (y - cy) / ry;
        nx * nx + ny * ny <= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_dimensions() {
        let b = Bounds::new(10, 20, 110, 70);
        assert_eq!(b.width(), 100);
        assert_eq!(b.height(), 50);
        assert_eq!(b.inset_by(Insets::new(0, 0, 31, 0)), Bounds::new(10, 20, 79, 70));
    }

    #[test]
    fn inset_shrinks_both_sides() {
        let r = Bounds::sized(100, 100).to_rect_f().inset(2.0, 2.0);
        assert_eq!(r, RectF::new(2.0, 2.0, 98.0, 98.0));
    }

    #[test]
    fn oval_excludes_corners() {
        let r = RectF::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.oval_contains(5.0, 5.0));
        assert!(!r.oval_contains(0.5, 0.5));
    }

    #[test]
    fn round_rect_excludes_only_far_corner() {
        let r = RectF::new(0.0, 0.0, 20.0, 20.0);
        assert!(!r.round_rect_contains(0.5, 0.5, 6.0, 6.0));
        assert!(r.round_rect_contains(10.0, 0.5, 6.0, 6.0));
        assert!(r.round_rect_contains(0.5, 0.5, 0.0, 0.0));
    }
}
