//! Pointer and keyboard input handling

use glam::Vec2;

/// Maps client (CSS pixel) pointer coordinates onto the logical canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    /// Top-left of the canvas element in client coordinates
    pub origin: Vec2,
    /// Displayed size of the canvas element
    pub display_size: Vec2,
    /// Size of the logical drawing surface
    pub logical_size: Vec2,
}

impl CanvasTransform {
    pub fn new(origin: Vec2, display_size: Vec2, logical_size: Vec2) -> Self {
        Self {
            origin,
            display_size,
            logical_size,
        }
    }

    /// Logical position of a pointer event, clamped to the canvas.
    /// A collapsed (zero-sized) element maps everything to the centre.
    pub fn to_logical(&self, client: Vec2) -> Vec2 {
        let scale_axis = |offset: f32, display: f32, logical: f32| {
            if display <= 0.0 {
                return logical / 2.0;
            }
            (offset * logical / display).clamp(0.0, logical)
        };
        let offset = client - self.origin;
        Vec2::new(
            scale_axis(offset.x, self.display_size.x, self.logical_size.x),
            scale_axis(offset.y, self.display_size.y, self.logical_size.y),
        )
    }
}

/// Whether `key` is the serve button
pub fn is_action_key(key: &str) -> bool {
    matches!(key, " " | "Spacebar" | "Enter")
}

/// Paddle direction for a key: -1 = up, 1 = down, 0 = not a paddle key
pub fn paddle_direction(key: &str) -> i8 {
    match key {
        "ArrowUp" | "w" | "W" => -1,
        "ArrowDown" | "s" | "S" => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform() -> CanvasTransform {
        // 800x600 canvas drawn at half size, offset into the page
        CanvasTransform::new(
            Vec2::new(100.0, 50.0),
            Vec2::new(400.0, 300.0),
            Vec2::new(800.0, 600.0),
        )
    }

    #[test]
    fn test_to_logical_scales() {
        let t = transform();
        assert_eq!(t.to_logical(Vec2::new(100.0, 50.0)), Vec2::ZERO);
        assert_eq!(
            t.to_logical(Vec2::new(300.0, 200.0)),
            Vec2::new(400.0, 300.0)
        );
        assert_eq!(
            t.to_logical(Vec2::new(500.0, 350.0)),
            Vec2::new(800.0, 600.0)
        );
    }

    #[test]
    fn test_to_logical_clamps_outside_canvas() {
        let t = transform();
        assert_eq!(t.to_logical(Vec2::new(0.0, 0.0)), Vec2::ZERO);
        assert_eq!(
            t.to_logical(Vec2::new(2_000.0, 2_000.0)),
            Vec2::new(800.0, 600.0)
        );
    }

    #[test]
    fn test_collapsed_canvas_maps_to_centre() {
        let t = CanvasTransform::new(Vec2::ZERO, Vec2::ZERO, Vec2::new(800.0, 600.0));
        assert_eq!(
            t.to_logical(Vec2::new(123.0, 456.0)),
            Vec2::new(400.0, 300.0)
        );
    }

    #[test]
    fn test_keys() {
        assert!(is_action_key(" "));
        assert!(is_action_key("Enter"));
        assert!(!is_action_key("a"));
        assert_eq!(paddle_direction("ArrowUp"), -1);
        assert_eq!(paddle_direction("S"), 1);
        assert_eq!(paddle_direction("Enter"), 0);
    }
}
