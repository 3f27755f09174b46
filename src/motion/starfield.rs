//! Twinkling background starfield
//!
//! Stars are generated once per page load. Twinkling itself is a CSS
//! keyframe animation; each star only carries its timing.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// A single background star
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Vertical position (% of viewport)
    pub top: f32,
    /// Horizontal position (% of viewport)
    pub left: f32,
    /// Diameter (px), in [0, 3)
    pub size: f32,
    /// Animation delay (s), in [0, 5)
    pub delay: f32,
    /// Twinkle period (s), in [3, 6)
    pub duration: f32,
}

impl Star {
    fn random(rng: &mut impl Rng) -> Self {
        Self {
            top: rng.random::<f32>() * 100.0,
            left: rng.random::<f32>() * 100.0,
            size: rng.random::<f32>() * 3.0,
            delay: rng.random::<f32>() * 5.0,
            duration: 3.0 + rng.random::<f32>() * 3.0,
        }
    }

    /// Inline style for the star element
    pub fn css_style(&self) -> String {
        format!(
            "top:{:.3}%;left:{:.3}%;width:{size:.2}px;height:{size:.2}px;\
             animation-delay:{:.3}s;animation-duration:{:.3}s;animation-iteration-count:infinite",
            self.top,
            self.left,
            self.delay,
            self.duration,
            size = self.size,
        )
    }
}

/// The full set of stars for one page load
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Starfield {
    pub seed: u64,
    pub stars: Vec<Star>,
}

impl Starfield {
    pub fn generate(seed: u64, count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..count).map(|_| Star::random(&mut rng)).collect();
        Self { seed, stars }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::STAR_COUNT;

    #[test]
    fn test_generates_requested_count() {
        let field = Starfield::generate(42, STAR_COUNT);
        assert_eq!(field.len(), 50);
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = Starfield::generate(7, 20);
        let b = Starfield::generate(7, 20);
        assert_eq!(a.stars, b.stars);
        let c = Starfield::generate(8, 20);
        assert_ne!(a.stars, c.stars);
    }

    #[test]
    fn test_star_ranges() {
        for star in Starfield::generate(1234, 500).stars {
            assert!((0.0..100.0).contains(&star.top));
            assert!((0.0..100.0).contains(&star.left));
            assert!((0.0..3.0).contains(&star.size));
            assert!((0.0..5.0).contains(&star.delay));
            assert!((3.0..=6.0).contains(&star.duration));
        }
    }

    #[test]
    fn test_css_style() {
        let star = Star {
            top: 10.0,
            left: 20.5,
            size: 2.0,
            delay: 1.0,
            duration: 4.0,
        };
        assert_eq!(
            star.css_style(),
            "top:10.000%;left:20.500%;width:2.00px;height:2.00px;\
             animation-delay:1.000s;animation-duration:4.000s;animation-iteration-count:infinite"
        );
    }
}
