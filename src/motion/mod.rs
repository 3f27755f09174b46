//! Deterministic animation module
//!
//! Every animated behavior on the page lives here. This module must stay pure:
//! - Time is passed in (milliseconds or seconds), never read from a clock
//! - Seeded RNG only
//! - No DOM or platform dependencies

pub mod cursor;
pub mod orbit;
pub mod reveal;
pub mod spring;
pub mod starfield;
pub mod ticker;
pub mod tilt;
pub mod timer;
pub mod typewriter;

pub use cursor::Cursor;
pub use orbit::OrbitRing;
pub use reveal::{RevealFrom, RevealTracker};
pub use spring::{Spring, SpringConfig};
pub use starfield::{Star, Starfield};
pub use ticker::TypewriterTicker;
pub use tilt::{PointerOffset, Rect, Tilt, TiltAngles};
pub use timer::{TimerId, TimerQueue};
pub use typewriter::{PhraseSet, PhraseSetError, StepOutcome, Typewriter, TypewriterState};
