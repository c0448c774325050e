//! Sound collaborator.
//!
//! The core asks for cues by name; there are no audio assets, so a cue is
//! logged and, when enabled, mapped to the terminal bell.

use tracing::debug;

use crate::types::SoundCue;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoundSink {
    bell: bool,
}

impl SoundSink {
    pub fn new(bell: bool) -> Self {
        Self { bell }
    }

    /// Handle one cue; returns true when the caller should ring the bell.
    pub fn play(&self, cue: SoundCue) -> bool {
        debug!(cue = cue.as_str(), "sound");
        self.bell && rings_bell(cue)
    }
}

/// Cues that ring the bell
fn rings_bell(cue: SoundCue) -> bool {
    matches!(cue, SoundCue::LineClear | SoundCue::GameOver)
}
