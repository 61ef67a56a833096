//! Rectangle type for UI layout

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create from screen dimensions
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by padding on all sides
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }

    /// Split horizontally at fixed pixel position from left
    pub fn split_h_px(&self, pixels: f32) -> (Self, Self) {
        let split_x = pixels.clamp(0.0, self.w);
        (
            Self::new(self.x, self.y, split_x, self.h),
            Self::new(self.x + split_x, self.y, self.w - split_x, self.h),
        )
    }

    /// Split into `count` equal-width columns, left to right
    pub fn columns(&self, count: usize) -> Vec<Self> {
        if count == 0 {
            return Vec::new();
        }
        let w = self.w / count as f32;
        (0..count)
            .map(|i| Self::new(self.x + w * i as f32, self.y, w, self.h))
            .collect()
    }

    /// Get a horizontal slice (for toolbars, status bars)
    pub fn slice_top(&self, height: f32) -> Self {
        Self::new(self.x, self.y, self.w, height.min(self.h))
    }

    /// Get remaining area after slicing top
    pub fn remaining_after_top(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.y + h, self.w, self.h - h)
    }

    /// Get a horizontal slice from bottom
    pub fn slice_bottom(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.bottom() - h, self.w, h)
    }

    /// Get remaining area after slicing bottom
    pub fn remaining_after_bottom(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.y, self.w, self.h - h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns() {
        let r = Rect::new(10.0, 0.0, 300.0, 50.0);
        let cols = r.columns(3);
        assert_eq!(cols.len(), 3);
        assert!((cols[1].x - 110.0).abs() < 0.001);
        assert!((cols[2].right() - 310.0).abs() < 0.001);
        assert!(r.columns(0).is_empty());
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(50.0, 40.0));
        assert!(!r.contains(5.0, 40.0));
        assert!(!r.contains(50.0, 100.0));
    }

    #[test]
    fn test_slices() {
        let r = Rect::screen(200.0, 100.0);
        let top = r.slice_top(30.0);
        let rest = r.remaining_after_top(30.0);
        assert_eq!(top, Rect::new(0.0, 0.0, 200.0, 30.0));
        assert_eq!(rest, Rect::new(0.0, 30.0, 200.0, 70.0));

        let bottom = rest.slice_bottom(20.0);
        assert_eq!(bottom.y, 80.0);
        assert_eq!(rest.remaining_after_bottom(20.0).h, 50.0);
    }

    #[test]
    fn test_split_h_px_clamps() {
        let r = Rect::new(0.0, 0.0, 100.0, 10.0);
        let (left, right) = r.split_h_px(150.0);
        assert_eq!(left.w, 100.0);
        assert_eq!(right.w, 0.0);
    }
}
