//! Orbiting skill rings
//!
//! Skills sit at evenly spaced slots around a ring that spins at a constant
//! period. Angles follow CSS conventions: degrees, clockwise, screen y down,
//! with slot 0 at the top of the ring.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{normalize_angle, polar_to_cartesian};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitRing {
    /// Ring radius (px)
    pub radius: f32,
    /// Seconds per full revolution
    pub period: f32,
    /// Spin counter-clockwise
    pub reverse: bool,
    /// Number of evenly spaced slots
    pub slots: usize,
}

impl OrbitRing {
    pub fn inner(slots: usize) -> Self {
        Self {
            radius: INNER_ORBIT_RADIUS,
            period: INNER_ORBIT_PERIOD,
            reverse: false,
            slots,
        }
    }

    pub fn outer(slots: usize) -> Self {
        Self {
            radius: OUTER_ORBIT_RADIUS,
            period: OUTER_ORBIT_PERIOD,
            reverse: true,
            slots,
        }
    }

    /// Resting angle of slot `i` (degrees)
    pub fn slot_degrees(&self, i: usize) -> f32 {
        if self.slots == 0 {
            return 0.0;
        }
        i as f32 * (360.0 / self.slots as f32)
    }

    /// Seconds into the current revolution after `elapsed` seconds.
    ///
    /// Reduced in f64 so long sessions keep sub-pixel precision.
    pub fn phase(&self, elapsed: f64) -> f32 {
        if self.period <= 0.0 {
            return 0.0;
        }
        elapsed.rem_euclid(self.period as f64) as f32
    }

    /// Ring rotation after `t` seconds (degrees, unwrapped)
    pub fn spin_degrees(&self, t: f32) -> f32 {
        if self.period <= 0.0 {
            return 0.0;
        }
        let spin = 360.0 * t / self.period;
        if self.reverse { -spin } else { spin }
    }

    /// Offset of slot `i` from the ring centre after `t` seconds
    pub fn position(&self, i: usize, t: f32) -> Vec2 {
        let degrees = self.slot_degrees(i) + self.spin_degrees(t);
        // Slot 0 starts at the top, which is -90° in screen space
        let theta = normalize_angle((degrees - 90.0).to_radians());
        polar_to_cartesian(self.radius, theta)
    }

    /// Rotation that undoes the spin so icons keep their slot orientation
    pub fn icon_counter_rotation(&self, t: f32) -> f32 {
        -self.spin_degrees(t)
    }

    /// CSS `transform` for slot `i`'s icon, relative to the ring centre
    pub fn css_transform(&self, i: usize, t: f32) -> String {
        let pos = self.position(i, t);
        format!(
            "translate({:.2}px, {:.2}px) translate(-50%, -50%) rotate({:.2}deg)",
            pos.x,
            pos.y,
            self.slot_degrees(i)
        )
    }

    /// CSS `transform` for the ring's own path after `t` seconds
    pub fn path_css_transform(&self, t: f32) -> String {
        format!("translate(-50%, -50%) rotate({:.2}deg)", self.spin_degrees(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_slot_spacing() {
        let ring = OrbitRing::inner(5);
        assert_eq!(ring.slot_degrees(0), 0.0);
        assert_eq!(ring.slot_degrees(1), 72.0);
        assert_eq!(ring.slot_degrees(4), 288.0);
        let ring = OrbitRing::outer(6);
        assert_eq!(ring.slot_degrees(3), 180.0);
    }

    #[test]
    fn test_slot_zero_at_top() {
        let ring = OrbitRing::inner(5);
        assert!(approx(ring.position(0, 0.0), Vec2::new(0.0, -225.0)));
    }

    #[test]
    fn test_clockwise_quarter_turn() {
        let ring = OrbitRing::inner(4);
        // Slot 1 sits at 90°: right of centre
        assert!(approx(ring.position(1, 0.0), Vec2::new(225.0, 0.0)));
        // A quarter period later slot 0 has moved there too
        let quarter = INNER_ORBIT_PERIOD / 4.0;
        assert!(approx(ring.position(0, quarter), Vec2::new(225.0, 0.0)));
    }

    #[test]
    fn test_reverse_spins_counter_clockwise() {
        let ring = OrbitRing::outer(6);
        let quarter = OUTER_ORBIT_PERIOD / 4.0;
        assert!(approx(ring.position(0, quarter), Vec2::new(-350.0, 0.0)));
        assert_eq!(ring.icon_counter_rotation(quarter), 90.0);
    }

    #[test]
    fn test_full_period_returns_home() {
        let ring = OrbitRing::inner(5);
        for i in 0..5 {
            assert!(approx(ring.position(i, 0.0), ring.position(i, INNER_ORBIT_PERIOD)));
        }
    }

    #[test]
    fn test_phase_wraps_long_sessions() {
        let ring = OrbitRing::inner(5);
        assert_eq!(ring.phase(0.0), 0.0);
        assert_eq!(ring.phase(30.0), 5.0);
        // A week in, the phase is as exact as in the first revolution
        let week = 7.0 * 24.0 * 3600.0;
        assert_eq!(ring.phase(week + 12.5), 12.5);
        assert!(approx(
            ring.position(2, ring.phase(week + 12.5)),
            ring.position(2, 12.5)
        ));
        assert_eq!(OrbitRing { period: 0.0, ..ring }.phase(99.0), 0.0);
    }

    #[test]
    fn test_path_spins_with_ring() {
        let ring = OrbitRing::inner(5);
        assert_eq!(ring.path_css_transform(0.0), "translate(-50%, -50%) rotate(0.00deg)");
        let quarter = INNER_ORBIT_PERIOD / 4.0;
        assert_eq!(ring.path_css_transform(quarter), "translate(-50%, -50%) rotate(90.00deg)");
    }

    #[test]
    fn test_empty_ring() {
        let ring = OrbitRing::inner(0);
        assert_eq!(ring.slot_degrees(3), 0.0);
    }
}
