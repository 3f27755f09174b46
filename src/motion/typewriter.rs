//! Typewriter text cycling
//!
//! Types each phrase one character at a time, pauses, deletes it, and moves
//! on to the next phrase, forever. The machine itself is timer-free: it
//! exposes single steps and the delay that should precede the next one.
//! [`TypewriterTicker`](super::TypewriterTicker) drives it from a timer queue.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected phrase lists
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhraseSetError {
    #[error("a typewriter needs at least one phrase")]
    Empty,
}

/// Non-empty ordered list of phrases; order defines the cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PhraseSet {
    phrases: Vec<String>,
}

impl PhraseSet {
    pub fn new<I, S>(phrases: I) -> Result<Self, PhraseSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(PhraseSetError::Empty);
        }
        Ok(Self { phrases })
    }

    /// A set holding one phrase
    pub fn single(phrase: impl Into<String>) -> Self {
        Self {
            phrases: vec![phrase.into()],
        }
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn get(&self, index: usize) -> &str {
        &self.phrases[index % self.phrases.len()]
    }
}

impl TryFrom<Vec<String>> for PhraseSet {
    type Error = PhraseSetError;

    fn try_from(phrases: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(phrases)
    }
}

impl From<PhraseSet> for Vec<String> {
    fn from(set: PhraseSet) -> Self {
        set.phrases
    }
}

/// Mutable typewriter state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TypewriterState {
    /// Index into the phrase set
    pub phrase_index: usize,
    /// Characters typed so far; reaches `len + 1` for one step before deleting
    pub length: usize,
    pub deleting: bool,
    pub caret_visible: bool,
}

/// What a single step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// One character typed
    Typed,
    /// One character deleted
    Deleted,
    /// Phrase complete; deleting from the next step on
    StartedDeleting,
    /// Phrase erased; typing the next phrase from the next step on
    NextPhrase,
}

/// Typewriter state machine over a phrase set
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: PhraseSet,
    /// Pause after a phrase is fully typed (ms)
    pause_ms: f64,
    state: TypewriterState,
}

impl Typewriter {
    pub fn new(phrases: PhraseSet) -> Self {
        Self::with_pause(phrases, DEFAULT_PAUSE_MS)
    }

    pub fn with_pause(phrases: PhraseSet, pause_ms: f64) -> Self {
        Self {
            phrases,
            pause_ms,
            state: TypewriterState {
                caret_visible: true,
                ..Default::default()
            },
        }
    }

    pub fn state(&self) -> &TypewriterState {
        &self.state
    }

    pub fn phrases(&self) -> &PhraseSet {
        &self.phrases
    }

    /// Phrase currently being typed or deleted
    pub fn current_phrase(&self) -> &str {
        self.phrases.get(self.state.phrase_index)
    }

    fn phrase_len(&self) -> usize {
        self.current_phrase().chars().count()
    }

    /// True when the next step switches mode instead of moving the length
    pub fn at_boundary(&self) -> bool {
        let s = &self.state;
        (!s.deleting && s.length == self.phrase_len() + 1) || (s.deleting && s.length == 0)
    }

    /// Advance by one step
    pub fn step(&mut self) -> StepOutcome {
        let len = self.phrase_len();
        let s = &mut self.state;

        if !s.deleting && s.length == len + 1 {
            s.deleting = true;
            return StepOutcome::StartedDeleting;
        }
        if s.deleting && s.length == 0 {
            s.deleting = false;
            s.phrase_index = (s.phrase_index + 1) % self.phrases.len();
            return StepOutcome::NextPhrase;
        }

        if s.deleting {
            s.length -= 1;
            StepOutcome::Deleted
        } else {
            s.length += 1;
            StepOutcome::Typed
        }
    }

    /// Base delay before the next step (ms), before jitter
    pub fn base_delay(&self) -> f64 {
        if self.state.deleting {
            DELETE_DELAY_MS
        } else if self.state.length == self.phrase_len() {
            self.pause_ms
        } else {
            TYPE_DELAY_MS
        }
    }

    /// Delay before the next step given a jitter sample in [0, 350) ms.
    ///
    /// Jitter only ever lengthens the base delay.
    pub fn next_delay(&self, jitter_ms: u32) -> f64 {
        self.base_delay().max(jitter_ms as f64)
    }

    pub fn toggle_caret(&mut self) {
        self.state.caret_visible = !self.state.caret_visible;
    }

    /// Visible part of the current phrase (no caret)
    pub fn visible_text(&self) -> &str {
        let phrase = self.current_phrase();
        let end = phrase
            .char_indices()
            .nth(self.state.length)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    /// Visible text followed by the caret (or a space while it is hidden)
    pub fn display(&self) -> String {
        let caret = if self.state.caret_visible { '|' } else { ' ' };
        let mut out = String::with_capacity(self.visible_text().len() + 1);
        out.push_str(self.visible_text());
        out.push(caret);
        out
    }
}
