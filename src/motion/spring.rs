//! Spring-smoothed motion values
//!
//! `set` moves the target; `update` integrates a damped spring toward it at a
//! fixed timestep, so the displayed value lags behind raw input instead of
//! snapping.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{FRAME_DT, MAX_SUBSTEPS};

/// Below this displacement and speed the spring snaps to rest
const REST_EPSILON: f32 = 0.001;

/// Spring physical parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    #[serde(default = "default_mass")]
    pub mass: f32,
}

fn default_mass() -> f32 {
    1.0
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Positive stiffness and mass, non-negative damping, all finite.
    /// Anything else integrates to NaN or never settles.
    pub fn is_valid(&self) -> bool {
        self.stiffness.is_finite()
            && self.damping.is_finite()
            && self.mass.is_finite()
            && self.stiffness > 0.0
            && self.mass > 0.0
            && self.damping >= 0.0
    }
}

/// Two-dimensional spring-smoothed value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spring {
    pub config: SpringConfig,
    value: Vec2,
    velocity: Vec2,
    target: Vec2,
    #[serde(skip)]
    accumulator: f32,
}

impl Spring {
    pub fn new(initial: Vec2, config: SpringConfig) -> Self {
        Self {
            config,
            value: initial,
            velocity: Vec2::ZERO,
            target: initial,
            accumulator: 0.0,
        }
    }

    /// Set the raw target value
    pub fn set(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Jump straight to a value with no animation
    pub fn jump(&mut self, value: Vec2) {
        self.value = value;
        self.target = value;
        self.velocity = Vec2::ZERO;
    }

    /// Smoothed value
    pub fn value(&self) -> Vec2 {
        self.value
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == Vec2::ZERO
    }

    /// Advance by `dt` seconds in fixed substeps
    pub fn update(&mut self, dt: f32) {
        self.accumulator += dt.max(0.0);
        let mut substeps = 0;
        while self.accumulator >= FRAME_DT && substeps < MAX_SUBSTEPS {
            let displacement = self.value - self.target;
            let force =
                displacement * -self.config.stiffness - self.velocity * self.config.damping;
            self.velocity += force / self.config.mass * FRAME_DT;
            self.value += self.velocity * FRAME_DT;
            self.accumulator -= FRAME_DT;
            substeps += 1;

            if (self.value - self.target).length() < REST_EPSILON
                && self.velocity.length() < REST_EPSILON
            {
                self.value = self.target;
                self.velocity = Vec2::ZERO;
            }
        }
        // Drop time we could not catch up on
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(FRAME_DT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILT: SpringConfig = SpringConfig::new(150.0, 15.0);

    fn settle(spring: &mut Spring, seconds: f32) {
        let frames = (seconds * 60.0) as usize;
        for _ in 0..frames {
            spring.update(1.0 / 60.0);
        }
    }

    #[test]
    fn test_lags_behind_target() {
        let mut s = Spring::new(Vec2::ZERO, TILT);
        s.set(Vec2::new(0.5, 0.0));
        s.update(1.0 / 60.0);
        assert!(s.value().x > 0.0);
        assert!(s.value().x < 0.5);
        assert_eq!(s.value().y, 0.0);
    }

    #[test]
    fn test_converges_and_rests() {
        let mut s = Spring::new(Vec2::ZERO, TILT);
        s.set(Vec2::new(0.5, -0.25));
        settle(&mut s, 5.0);
        assert_eq!(s.value(), Vec2::new(0.5, -0.25));
        assert!(s.is_at_rest());
    }

    #[test]
    fn test_returns_to_neutral() {
        let mut s = Spring::new(Vec2::ZERO, TILT);
        s.set(Vec2::new(-0.5, 0.5));
        settle(&mut s, 1.0);
        s.set(Vec2::ZERO);
        s.update(1.0 / 60.0);
        // Still moving back, not snapped
        assert_ne!(s.value(), Vec2::ZERO);
        settle(&mut s, 5.0);
        assert_eq!(s.value(), Vec2::ZERO);
    }

    #[test]
    fn test_substep_cap() {
        let mut s = Spring::new(Vec2::ZERO, TILT);
        s.set(Vec2::ONE);
        // A huge frame gap only integrates MAX_SUBSTEPS steps
        s.update(10.0);
        let mut reference = Spring::new(Vec2::ZERO, TILT);
        reference.set(Vec2::ONE);
        for _ in 0..MAX_SUBSTEPS {
            reference.update(FRAME_DT);
        }
        assert!((s.value() - reference.value()).length() < 1e-4);
    }

    #[test]
    fn test_stiff_cursor_spring_converges() {
        let mut s = Spring::new(Vec2::ZERO, SpringConfig::new(700.0, 25.0));
        s.set(Vec2::new(300.0, 200.0));
        settle(&mut s, 10.0);
        assert_eq!(s.value(), Vec2::new(300.0, 200.0));
    }

    #[test]
    fn test_jump_skips_animation() {
        let mut s = Spring::new(Vec2::ZERO, TILT);
        s.jump(Vec2::new(4.0, 2.0));
        assert!(s.is_at_rest());
        assert_eq!(s.value(), Vec2::new(4.0, 2.0));
    }

    #[test]
    fn test_config_mass_defaults() {
        let c: SpringConfig = serde_json::from_str(r#"{"stiffness":150,"damping":15}"#).unwrap();
        assert_eq!(c, TILT);
    }

    #[test]
    fn test_config_validity() {
        assert!(TILT.is_valid());
        assert!(SpringConfig::new(700.0, 0.0).is_valid());
        assert!(!SpringConfig { mass: 0.0, ..TILT }.is_valid());
        assert!(!SpringConfig { mass: -1.0, ..TILT }.is_valid());
        assert!(!SpringConfig::new(0.0, 15.0).is_valid());
        assert!(!SpringConfig::new(150.0, -1.0).is_valid());
        assert!(!SpringConfig::new(f32::NAN, 15.0).is_valid());
        assert!(!SpringConfig { mass: f32::INFINITY, ..TILT }.is_valid());
    }
}
