//! Galaxy Folio - an animated space-themed portfolio page
//!
//! Core modules:
//! - `motion`: Deterministic animation state (typewriter, tilt, springs, orbits)
//! - `content`: Static page content
//! - `view`: HTML rendering for repeated page items
//! - `contact`: Contact form validation and submission
//! - `platform`: Browser bindings (DOM, listeners, clock)
//! - `settings`: Persisted user preferences

pub mod contact;
pub mod content;
pub mod motion;
pub mod platform;
pub mod settings;
pub mod view;

pub use content::Portfolio;
pub use settings::{Settings, Theme};

use glam::Vec2;

/// Page-wide timing and layout constants
pub mod consts {
    /// Fixed animation timestep (120 Hz keeps springs stable at high stiffness)
    pub const FRAME_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Caret blink period (ms)
    pub const CARET_BLINK_MS: f64 = 500.0;
    /// Base delay between typed characters (ms)
    pub const TYPE_DELAY_MS: f64 = 150.0;
    /// Base delay between deleted characters (ms)
    pub const DELETE_DELAY_MS: f64 = 75.0;
    /// Pause once a phrase is fully typed (ms)
    pub const DEFAULT_PAUSE_MS: f64 = 3000.0;
    /// Exclusive upper bound of the per-step jitter (ms)
    pub const JITTER_MAX_MS: u32 = 350;
    /// Longer gaps between timer pumps are stalls (hidden tab); timers resume, not replay
    pub const TIMER_STALL_MS: f64 = 1000.0;

    /// Tilt spring (hero element)
    pub const TILT_STIFFNESS: f32 = 150.0;
    pub const TILT_DAMPING: f32 = 15.0;

    /// Cursor ring spring
    pub const CURSOR_STIFFNESS: f32 = 700.0;
    pub const CURSOR_DAMPING: f32 = 25.0;
    /// Cursor position before the viewport is known (offscreen)
    pub const CURSOR_OFFSCREEN: f32 = -100.0;

    /// Starfield
    pub const STAR_COUNT: usize = 50;

    /// Orbit rings
    pub const INNER_ORBIT_RADIUS: f32 = 225.0;
    pub const INNER_ORBIT_PERIOD: f32 = 25.0;
    pub const OUTER_ORBIT_RADIUS: f32 = 350.0;
    pub const OUTER_ORBIT_PERIOD: f32 = 40.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
