//! Pointer-driven 3D tilt
//!
//! Maps the pointer position inside a container to a normalized offset,
//! smooths it through a spring, and turns the smoothed offset into
//! `rotateX`/`rotateY` angles for a decorative element.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::spring::{Spring, SpringConfig};
use crate::consts::{TILT_DAMPING, TILT_STIFFNESS};

/// Container bounding box in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Pointer position as a fraction of the container, centred on zero.
/// Both components lie in [-0.5, 0.5].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerOffset {
    pub dx: f32,
    pub dy: f32,
}

impl PointerOffset {
    pub const NEUTRAL: Self = Self { dx: 0.0, dy: 0.0 };

    /// Offset of a client-space point within `rect`
    pub fn from_pointer(rect: Rect, client_x: f32, client_y: f32) -> Self {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Self::NEUTRAL;
        }
        Self {
            dx: ((client_x - rect.left) / rect.width - 0.5).clamp(-0.5, 0.5),
            dy: ((client_y - rect.top) / rect.height - 0.5).clamp(-0.5, 0.5),
        }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }
}

/// Rotation in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TiltAngles {
    /// Rotation about the horizontal axis, driven by `dy` (inverted)
    pub rotate_x: f32,
    /// Rotation about the vertical axis, driven by `dx`
    pub rotate_y: f32,
}

impl TiltAngles {
    /// Linear map of an offset onto ±`max_degrees`
    pub fn from_offset(offset: Vec2, max_degrees: f32) -> Self {
        Self {
            rotate_x: -offset.y * 2.0 * max_degrees,
            rotate_y: offset.x * 2.0 * max_degrees,
        }
    }
}

/// Tilt state for one container
#[derive(Debug, Clone)]
pub struct Tilt {
    raw: PointerOffset,
    smoothed: Spring,
    max_degrees: f32,
}

impl Default for Tilt {
    fn default() -> Self {
        Self::new(25.0, SpringConfig::new(TILT_STIFFNESS, TILT_DAMPING))
    }
}

impl Tilt {
    pub fn new(max_degrees: f32, spring: SpringConfig) -> Self {
        Self {
            raw: PointerOffset::NEUTRAL,
            smoothed: Spring::new(Vec2::ZERO, spring),
            max_degrees,
        }
    }

    /// Raw (unsmoothed) offset from the latest event
    pub fn raw_offset(&self) -> PointerOffset {
        self.raw
    }

    /// Smoothed offset
    pub fn smoothed_offset(&self) -> Vec2 {
        self.smoothed.value()
    }

    pub fn pointer_move(&mut self, rect: Rect, client_x: f32, client_y: f32) {
        self.raw = PointerOffset::from_pointer(rect, client_x, client_y);
        self.smoothed.set(self.raw.as_vec2());
    }

    /// Pointer left the container: aim back at neutral and let the spring glide there
    pub fn pointer_leave(&mut self) {
        self.raw = PointerOffset::NEUTRAL;
        self.smoothed.set(Vec2::ZERO);
    }

    pub fn update(&mut self, dt: f32) {
        self.smoothed.update(dt);
    }

    pub fn is_at_rest(&self) -> bool {
        self.smoothed.is_at_rest()
    }

    pub fn angles(&self) -> TiltAngles {
        TiltAngles::from_offset(self.smoothed.value(), self.max_degrees)
    }

    /// CSS `transform` value for the tilted element
    pub fn css_transform(&self) -> String {
        let a = self.angles();
        format!("rotateX({:.2}deg) rotateY({:.2}deg)", a.rotate_x, a.rotate_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect::new(0.0, 0.0, 200.0, 100.0);

    fn run(tilt: &mut Tilt, seconds: f32) {
        for _ in 0..(seconds * 60.0) as usize {
            tilt.update(1.0 / 60.0);
        }
    }

    #[test]
    fn test_center_is_neutral() {
        let o = PointerOffset::from_pointer(RECT, 100.0, 50.0);
        assert_eq!(o, PointerOffset::NEUTRAL);
    }

    #[test]
    fn test_corners_are_extremes() {
        assert_eq!(
            PointerOffset::from_pointer(RECT, 0.0, 0.0),
            PointerOffset { dx: -0.5, dy: -0.5 }
        );
        assert_eq!(
            PointerOffset::from_pointer(RECT, 200.0, 100.0),
            PointerOffset { dx: 0.5, dy: 0.5 }
        );
    }

    #[test]
    fn test_offset_respects_rect_origin() {
        let rect = Rect::new(50.0, 20.0, 100.0, 40.0);
        let o = PointerOffset::from_pointer(rect, 75.0, 50.0);
        assert!((o.dx + 0.25).abs() < 1e-6);
        assert!((o.dy - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_outside_points_clamped() {
        let o = PointerOffset::from_pointer(RECT, -40.0, 500.0);
        assert_eq!(o, PointerOffset { dx: -0.5, dy: 0.5 });
    }

    #[test]
    fn test_degenerate_rect_is_neutral() {
        let o = PointerOffset::from_pointer(Rect::new(0.0, 0.0, 0.0, 100.0), 10.0, 10.0);
        assert_eq!(o, PointerOffset::NEUTRAL);
    }

    #[test]
    fn test_angle_signs() {
        let a = TiltAngles::from_offset(Vec2::new(0.5, 0.5), 25.0);
        assert_eq!(a.rotate_x, -25.0);
        assert_eq!(a.rotate_y, 25.0);
        let a = TiltAngles::from_offset(Vec2::new(-0.5, -0.5), 15.0);
        assert_eq!(a.rotate_x, 15.0);
        assert_eq!(a.rotate_y, -15.0);
    }

    #[test]
    fn test_smoothed_lags_raw() {
        let mut tilt = Tilt::default();
        tilt.pointer_move(RECT, 200.0, 100.0);
        assert_eq!(tilt.raw_offset(), PointerOffset { dx: 0.5, dy: 0.5 });
        assert_eq!(tilt.angles(), TiltAngles::default());
        tilt.update(1.0 / 60.0);
        let a = tilt.angles();
        assert!(a.rotate_y > 0.0 && a.rotate_y < 25.0);
        run(&mut tilt, 5.0);
        assert_eq!(tilt.angles(), TiltAngles { rotate_x: -25.0, rotate_y: 25.0 });
    }

    #[test]
    fn test_leave_resets_raw_and_glides_back() {
        let mut tilt = Tilt::default();
        tilt.pointer_move(RECT, 13.0, 87.0);
        run(&mut tilt, 2.0);
        tilt.pointer_leave();
        assert_eq!(tilt.raw_offset(), PointerOffset::NEUTRAL);
        // Not snapped instantly
        assert!(tilt.angles() != TiltAngles::default());
        run(&mut tilt, 5.0);
        assert!(tilt.is_at_rest());
        assert_eq!(tilt.smoothed_offset(), Vec2::ZERO);
    }

    #[test]
    fn test_css_transform() {
        let mut tilt = Tilt::new(15.0, SpringConfig::new(150.0, 15.0));
        tilt.pointer_move(RECT, 0.0, 100.0);
        run(&mut tilt, 5.0);
        assert_eq!(tilt.css_transform(), "rotateX(-15.00deg) rotateY(-15.00deg)");
    }
}
