//! Custom pointer: a dot that tracks the pointer and a trailing ring

use glam::Vec2;

use super::spring::{Spring, SpringConfig};
use crate::consts::{CURSOR_DAMPING, CURSOR_OFFSCREEN, CURSOR_STIFFNESS};

#[derive(Debug, Clone)]
pub struct Cursor {
    dot: Vec2,
    ring: Spring,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(SpringConfig::new(CURSOR_STIFFNESS, CURSOR_DAMPING))
    }
}

impl Cursor {
    /// Starts offscreen until the viewport size is known
    pub fn new(ring_spring: SpringConfig) -> Self {
        let start = Vec2::splat(CURSOR_OFFSCREEN);
        Self {
            dot: start,
            ring: Spring::new(start, ring_spring),
        }
    }

    /// Park both parts at the viewport centre
    pub fn place_at_center(&mut self, viewport_width: f32, viewport_height: f32) {
        let center = Vec2::new(viewport_width, viewport_height) / 2.0;
        self.dot = center;
        self.ring.jump(center);
    }

    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.dot = Vec2::new(client_x, client_y);
        self.ring.set(self.dot);
    }

    pub fn update(&mut self, dt: f32) {
        self.ring.update(dt);
    }

    pub fn dot(&self) -> Vec2 {
        self.dot
    }

    pub fn ring(&self) -> Vec2 {
        self.ring.value()
    }

    /// CSS `transform` centring an element of any size on `pos`
    pub fn css_translate(pos: Vec2) -> String {
        format!(
            "translate({:.1}px, {:.1}px) translate(-50%, -50%)",
            pos.x, pos.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_offscreen() {
        let c = Cursor::default();
        assert_eq!(c.dot(), Vec2::splat(-100.0));
        assert_eq!(c.ring(), Vec2::splat(-100.0));
    }

    #[test]
    fn test_center() {
        let mut c = Cursor::default();
        c.place_at_center(1280.0, 720.0);
        assert_eq!(c.dot(), Vec2::new(640.0, 360.0));
        assert_eq!(c.ring(), Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_dot_immediate_ring_trails() {
        let mut c = Cursor::default();
        c.place_at_center(1000.0, 1000.0);
        c.pointer_move(100.0, 900.0);
        assert_eq!(c.dot(), Vec2::new(100.0, 900.0));
        c.update(1.0 / 60.0);
        let ring = c.ring();
        assert!(ring.x < 500.0 && ring.x > 100.0);
        for _ in 0..600 {
            c.update(1.0 / 60.0);
        }
        assert_eq!(c.ring(), c.dot());
    }

    #[test]
    fn test_css_translate() {
        assert_eq!(
            Cursor::css_translate(Vec2::new(12.0, 3.0)),
            "translate(12.0px, 3.0px) translate(-50%, -50%)"
        );
    }
}
