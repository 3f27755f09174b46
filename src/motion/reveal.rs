//! Scroll-in entrance animations
//!
//! Elements start faded and offset; whenever one enters the viewport it
//! slides into place, and it resets once it leaves again. The CSS transition
//! does the animating. This module only decides when the class flips.

use serde::{Deserialize, Serialize};

use super::tilt::Rect;

/// Starting offset and duration of an entrance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealFrom {
    /// Horizontal offset before entering (px)
    pub x: f32,
    /// Vertical offset before entering (px)
    pub y: f32,
    pub duration_ms: u32,
}

impl RevealFrom {
    /// Timeline cards rise 20px
    pub const TIMELINE: Self = Self::new(0.0, 20.0, 500);
    /// About photo slides in from the left
    pub const ABOUT_PHOTO: Self = Self::new(-50.0, 0.0, 600);
    /// About text slides in from the right
    pub const ABOUT_TEXT: Self = Self::new(50.0, 0.0, 600);

    pub const fn new(x: f32, y: f32, duration_ms: u32) -> Self {
        Self { x, y, duration_ms }
    }

    /// Custom properties read by the `.reveal` stylesheet rules
    pub fn css_style(&self) -> String {
        format!(
            "--reveal-x:{}px;--reveal-y:{}px;--reveal-ms:{}ms",
            self.x, self.y, self.duration_ms
        )
    }
}

/// True when any part of `rect` is inside a viewport of the given height
pub fn intersects_viewport(rect: Rect, viewport_height: f32) -> bool {
    rect.height > 0.0 && rect.top < viewport_height && rect.top + rect.height > 0.0
}

/// In-view state for a fixed list of elements
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    visible: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            visible: vec![false; count],
        }
    }

    /// Record element `index`'s latest box. Returns the new state only when it changed.
    pub fn observe(&mut self, index: usize, rect: Rect, viewport_height: f32) -> Option<bool> {
        let slot = self.visible.get_mut(index)?;
        let now = intersects_viewport(rect, viewport_height);
        if *slot == now {
            return None;
        }
        *slot = now;
        Some(now)
    }
}
