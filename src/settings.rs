//! Visitor preferences
//!
//! Persisted in LocalStorage as JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::motion::SpringConfig;

/// Visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    /// Deep-space look with full-strength tilt
    #[default]
    Galaxy,
    /// Calmer look with a gentler tilt
    Minimal,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Galaxy => "Galaxy",
            Theme::Minimal => "Minimal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "galaxy" => Some(Theme::Galaxy),
            "minimal" | "min" => Some(Theme::Minimal),
            _ => None,
        }
    }

    /// Tilt angle at the container edge (degrees)
    pub fn tilt_degrees(&self) -> f32 {
        match self {
            Theme::Galaxy => 25.0,
            Theme::Minimal => 15.0,
        }
    }

    /// Class set on `<body>`
    pub fn body_class(&self) -> &'static str {
        match self {
            Theme::Galaxy => "theme-galaxy",
            Theme::Minimal => "theme-minimal",
        }
    }
}

/// Page preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,

    // === Motion ===
    /// Reduced motion (no tilt, no orbit spin)
    pub reduced_motion: bool,
    /// Replace the system pointer with the dot + ring cursor
    pub custom_cursor: bool,
    /// Twinkling background stars
    pub starfield: bool,

    // === Tuning ===
    /// Pause after a typed phrase (ms)
    pub typewriter_pause_ms: f64,
    pub tilt_spring: SpringConfig,
    pub cursor_spring: SpringConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Galaxy,

            reduced_motion: false,
            custom_cursor: true,
            starfield: true,

            typewriter_pause_ms: DEFAULT_PAUSE_MS,
            tilt_spring: SpringConfig::new(TILT_STIFFNESS, TILT_DAMPING),
            cursor_spring: SpringConfig::new(CURSOR_STIFFNESS, CURSOR_DAMPING),
        }
    }
}

impl Settings {
    /// Replace tuning values that would break the animations with defaults.
    /// Stored settings are user-editable, so everything loaded passes through here.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.tilt_spring.is_valid() {
            log::warn!("Invalid tilt spring {:?}, using default", self.tilt_spring);
            self.tilt_spring = defaults.tilt_spring;
        }
        if !self.cursor_spring.is_valid() {
            log::warn!("Invalid cursor spring {:?}, using default", self.cursor_spring);
            self.cursor_spring = defaults.cursor_spring;
        }
        if !self.typewriter_pause_ms.is_finite() || self.typewriter_pause_ms < 0.0 {
            log::warn!("Invalid typewriter pause {}, using default", self.typewriter_pause_ms);
            self.typewriter_pause_ms = defaults.typewriter_pause_ms;
        }
        self
    }

    /// Effective tilt magnitude (respects reduced_motion)
    pub fn effective_tilt_degrees(&self) -> f32 {
        if self.reduced_motion {
            0.0
        } else {
            self.theme.tilt_degrees()
        }
    }

    /// Effective orbit spin (respects reduced_motion)
    pub fn effective_orbit_spin(&self) -> bool {
        !self.reduced_motion
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "galaxy_folio_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str::<Settings>(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings.sanitized();
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::from_str("GALAXY"), Some(Theme::Galaxy));
        assert_eq!(Theme::from_str("min"), Some(Theme::Minimal));
        assert_eq!(Theme::from_str("neon"), None);
        assert_eq!(Theme::from_str(Theme::Minimal.as_str()), Some(Theme::Minimal));
    }

    #[test]
    fn test_tilt_range() {
        for theme in [Theme::Galaxy, Theme::Minimal] {
            let deg = theme.tilt_degrees();
            assert!((15.0..=25.0).contains(&deg));
        }
    }

    #[test]
    fn test_reduced_motion_disables_tilt() {
        let mut s = Settings::default();
        assert_eq!(s.effective_tilt_degrees(), 25.0);
        s.reduced_motion = true;
        assert_eq!(s.effective_tilt_degrees(), 0.0);
        assert!(!s.effective_orbit_spin());
    }

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.typewriter_pause_ms, 3000.0);
        assert_eq!(s.tilt_spring, SpringConfig::new(150.0, 15.0));
        assert_eq!(s.cursor_spring, SpringConfig::new(700.0, 25.0));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"theme":"Minimal"}"#).unwrap();
        assert_eq!(
            s,
            Settings {
                theme: Theme::Minimal,
                ..Settings::default()
            }
        );

        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_broken_springs_replaced_with_defaults() {
        let json = r#"{
            "theme": "Minimal",
            "tilt_spring": {"stiffness": 150, "damping": 15, "mass": 0},
            "cursor_spring": {"stiffness": -5, "damping": 25},
            "typewriter_pause_ms": -1
        }"#;
        let s = serde_json::from_str::<Settings>(json).unwrap().sanitized();
        let defaults = Settings::default();
        assert_eq!(s.theme, Theme::Minimal);
        assert_eq!(s.tilt_spring, defaults.tilt_spring);
        assert_eq!(s.cursor_spring, defaults.cursor_spring);
        assert_eq!(s.typewriter_pause_ms, defaults.typewriter_pause_ms);

        // The sanitized tilt still produces finite transforms
        let mut tilt = crate::motion::Tilt::new(s.effective_tilt_degrees(), s.tilt_spring);
        tilt.pointer_move(crate::motion::Rect::new(0.0, 0.0, 100.0, 100.0), 90.0, 10.0);
        tilt.update(0.1);
        let a = tilt.angles();
        assert!(a.rotate_x.is_finite() && a.rotate_y.is_finite());
    }

    #[test]
    fn test_valid_tuning_kept() {
        let mut s = Settings::default();
        s.tilt_spring = SpringConfig::new(300.0, 0.0);
        s.typewriter_pause_ms = 0.0;
        let kept = s.clone().sanitized();
        assert_eq!(kept, s);
    }
}
