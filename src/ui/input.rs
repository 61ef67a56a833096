//! Input state for UI interaction

use super::Rect;

/// Mouse button state
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_pressed: bool, // Just pressed this frame
    pub scroll: f32,        // Scroll wheel delta
}

impl MouseState {
    /// Read the current mouse state from macroquad
    pub fn capture() -> Self {
        use macroquad::prelude::*;

        let (x, y) = mouse_position();
        Self {
            x,
            y,
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            scroll: mouse_wheel().1,
        }
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

/// UI context passed through the frame
pub struct UiContext {
    pub mouse: MouseState,
    /// Set when a widget consumed this frame's click
    click_consumed: bool,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            mouse: MouseState::default(),
            click_consumed: false,
        }
    }

    /// Reset at start of frame (call before UI code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.click_consumed = false;
    }

    /// Claim this frame's click; returns true if `rect` was clicked and
    /// nothing claimed the click before
    pub fn take_click(&mut self, rect: &Rect) -> bool {
        if !self.click_consumed && self.mouse.clicked(rect) {
            self.click_consumed = true;
            true
        } else {
            false
        }
    }

    /// True if the mouse was pressed this frame but no widget took it
    pub fn unclaimed_click(&self) -> bool {
        self.mouse.left_pressed && !self.click_consumed
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click_at(x: f32, y: f32) -> MouseState {
        MouseState {
            x,
            y,
            left_pressed: true,
            scroll: 0.0,
        }
    }

    #[test]
    fn test_click_is_taken_once() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(click_at(5.0, 5.0));
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        assert!(ctx.take_click(&rect));
        assert!(!ctx.take_click(&rect));
        assert!(!ctx.unclaimed_click());

        ctx.begin_frame(click_at(5.0, 5.0));
        assert!(ctx.unclaimed_click());
    }

    #[test]
    fn test_click_outside() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(click_at(50.0, 50.0));
        assert!(!ctx.take_click(&Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(ctx.unclaimed_click());
    }
}
