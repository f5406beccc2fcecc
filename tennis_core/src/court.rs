//! Forced-perspective court geometry
//!
//! The court is drawn as two trapezoids ("boxes") stacked around the net. Each
//! box has its own top and bottom width, so the width at a given depth is a
//! clamped lerp inside whichever box the depth falls in.

use glam::Vec2;

use crate::{CourtConfig, CourtVariant};

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Fraction of the way from `start` to `end`, clamped to [0, 1]
fn depth_fraction(y: f32, start: f32, end: f32) -> f32 {
    let span = end - start;
    if span.abs() <= f32::EPSILON {
        return 0.0;
    }
    ((y - start) / span).clamp(0.0, 1.0)
}

/// Court definition
#[derive(Debug, Clone)]
pub struct Court {
    config: CourtConfig,
}

impl Court {
    pub fn new(config: CourtConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CourtConfig {
        &self.config
    }

    pub fn variant(&self) -> CourtVariant {
        self.config.variant
    }

    pub fn centre_x(&self) -> f32 {
        self.config.canvas_width / 2.0
    }

    /// Full (doubles) trapezoid width at depth `y`. Out-of-range depths clamp
    /// to the nearest box edge.
    pub fn width_at_depth(&self, y: f32) -> f32 {
        let c = &self.config;
        if y < c.net_y {
            let t = depth_fraction(y, c.far_top_y, c.far_bottom_y);
            lerp(c.far_width_top, c.far_width_bottom, t)
        } else {
            let t = depth_fraction(y, c.near_top_y, c.near_bottom_y);
            lerp(c.near_width_top, c.near_width_bottom, t)
        }
    }

    /// Width of the lines for `variant` at depth `y`
    pub fn line_width_at(&self, y: f32, variant: CourtVariant) -> f32 {
        self.width_at_depth(y) * variant.width_ratio()
    }

    /// Half-width of the playable court (this court's variant) at depth `y`
    pub fn half_width_at_depth(&self, y: f32) -> f32 {
        self.line_width_at(y, self.config.variant) / 2.0
    }

    /// Left and right x bounds of the playable court at depth `y`
    pub fn lateral_bounds(&self, y: f32) -> (f32, f32) {
        let half = self.half_width_at_depth(y);
        let centre = self.centre_x();
        (centre - half, centre + half)
    }

    /// Far and near baseline depths
    pub fn depth_range(&self) -> (f32, f32) {
        (self.config.far_top_y, self.config.near_bottom_y)
    }

    /// Whether a point on the ground lies inside the playable court
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let (far, near) = self.depth_range();
        if y < far || y > near {
            return false;
        }
        let (left, right) = self.lateral_bounds(y);
        x >= left && x <= right
    }

    /// Outline corners for `variant`: far-left, far-right, near-right, near-left
    pub fn corners(&self, variant: CourtVariant) -> [Vec2; 4] {
        let c = &self.config;
        let centre = self.centre_x();
        let far_half = c.far_width_top * variant.width_ratio() / 2.0;
        let near_half = c.near_width_bottom * variant.width_ratio() / 2.0;
        [
            Vec2::new(centre - far_half, c.far_top_y),
            Vec2::new(centre + far_half, c.far_top_y),
            Vec2::new(centre + near_half, c.near_bottom_y),
            Vec2::new(centre - near_half, c.near_bottom_y),
        ]
    }

    /// Horizontal segment across the court at depth `y`
    fn segment_at(&self, y: f32, variant: CourtVariant) -> (Vec2, Vec2) {
        let half = self.line_width_at(y, variant) / 2.0;
        let centre = self.centre_x();
        (Vec2::new(centre - half, y), Vec2::new(centre + half, y))
    }

    /// Net line, spanning this court's variant
    pub fn net_line(&self) -> (Vec2, Vec2) {
        self.segment_at(self.config.net_y, self.config.variant)
    }

    /// Far and near service lines. Service boxes always use singles width.
    pub fn service_lines(&self) -> [(Vec2, Vec2); 2] {
        [
            self.segment_at(self.config.far_service_y, CourtVariant::Singles),
            self.segment_at(self.config.near_service_y, CourtVariant::Singles),
        ]
    }
}

impl Default for Court {
    fn default() -> Self {
        Self::new(CourtConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_at_box_edges() {
        let court = Court::default();
        assert_eq!(court.width_at_depth(50.0), 400.0);
        assert_eq!(court.width_at_depth(250.0), 600.0);
        assert_eq!(court.width_at_depth(350.0), 600.0);
        assert_eq!(court.width_at_depth(550.0), 800.0);
    }

    #[test]
    fn test_width_interpolates_inside_boxes() {
        let court = Court::default();
        assert_eq!(court.width_at_depth(150.0), 500.0);
        assert_eq!(court.width_at_depth(450.0), 700.0);
    }

    #[test]
    fn test_width_clamps_out_of_range_depths() {
        let court = Court::default();
        assert_eq!(court.width_at_depth(-1000.0), 400.0);
        assert_eq!(court.width_at_depth(5000.0), 800.0);
        // Between the boxes both sides agree, so there is no seam at the net
        assert_eq!(court.width_at_depth(299.0), 600.0);
        assert_eq!(court.width_at_depth(300.0), 600.0);
    }

    #[test]
    fn test_lateral_bounds_are_centred() {
        let court = Court::default();
        let (left, right) = court.lateral_bounds(550.0);
        assert_eq!((left, right), (0.0, 800.0));
        let (left, right) = court.lateral_bounds(50.0);
        assert_eq!((left, right), (200.0, 600.0));
    }

    #[test]
    fn test_singles_court_is_narrower() {
        let doubles = Court::default();
        let singles = Court::new(CourtConfig {
            variant: CourtVariant::Singles,
            ..CourtConfig::default()
        });
        assert!(singles.half_width_at_depth(450.0) < doubles.half_width_at_depth(450.0));
        let expected = 700.0 * CourtVariant::Singles.width_ratio() / 2.0;
        assert!((singles.half_width_at_depth(450.0) - expected).abs() < 1e-3);
    }

    #[test]
    fn test_contains() {
        let court = Court::default();
        assert!(court.contains(400.0, 300.0));
        assert!(!court.contains(400.0, 10.0), "behind far baseline");
        assert!(!court.contains(400.0, 590.0), "behind near baseline");
        assert!(!court.contains(150.0, 60.0), "outside far sideline");
        assert!(court.contains(150.0, 540.0));
    }

    #[test]
    fn test_far_box_narrows_toward_far_baseline() {
        let court = Court::default();
        // Width follows the drawn outline: 400 at the far baseline, 600 at the net side
        let [far_left, far_right, _, _] = court.corners(CourtVariant::Doubles);
        assert_eq!(court.width_at_depth(50.0), far_right.x - far_left.x);
        assert_eq!(court.width_at_depth(200.0), 550.0);
        assert!(court.width_at_depth(100.0) < court.width_at_depth(200.0));

        let [far_service, _] = court.service_lines();
        let expected = 550.0 * CourtVariant::Singles.width_ratio();
        assert!((far_service.1.x - far_service.0.x - expected).abs() < 1e-3);
    }

    #[test]
    fn test_corners_and_lines() {
        let court = Court::default();
        let corners = court.corners(CourtVariant::Doubles);
        assert_eq!(corners[0], Vec2::new(200.0, 50.0));
        assert_eq!(corners[2], Vec2::new(800.0, 550.0));

        let (a, b) = court.net_line();
        assert_eq!(a.y, 300.0);
        assert_eq!(b.x - a.x, 600.0);

        let [far, near] = court.service_lines();
        assert_eq!(far.0.y, 200.0);
        assert_eq!(near.0.y, 400.0);
        let singles_far = 550.0 * CourtVariant::Singles.width_ratio();
        assert!((far.1.x - far.0.x - singles_far).abs() < 1e-3);
    }
}
