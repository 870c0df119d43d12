//! # Vibe Player
//!
//! Mood selection and the playback flag. Music itself is generated
//! server-side; the client only tracks which mood is playing.

use log::warn;

use crate::api::{ApiError, Mood, VibeResponse};
use crate::core::selection::Toggle;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VibeState {
    pub selected: Toggle<Mood>,
    pub loading: bool,
    pub is_playing: bool,
    /// Music URL from the server, or the mood name when it sent none.
    pub current_music: Option<String>,
}

impl VibeState {
    /// Pick a mood. Returns the mood to request music for, or `None` when the
    /// pick cleared the selection (which also stops the player).
    pub fn select(&mut self, mood: Mood) -> Option<Mood> {
        match self.selected.toggle(mood) {
            Some(mood) => {
                self.loading = true;
                Some(mood)
            }
            None => {
                self.loading = false;
                self.is_playing = false;
                self.current_music = None;
                None
            }
        }
    }

    /// Apply the server's answer for `mood`. Answers for a mood that is no
    /// longer selected are dropped. Failures leave the player as it was.
    pub fn apply_generated(&mut self, mood: Mood, result: Result<VibeResponse, ApiError>) {
        if !self.selected.is(mood) {
            return;
        }
        self.loading = false;
        match result {
            Ok(response) => {
                self.current_music = Some(
                    response
                        .music_url
                        .filter(|url| !url.is_empty())
                        .unwrap_or_else(|| mood.as_str().to_string()),
                );
                self.is_playing = true;
            }
            Err(e) => warn!("Failed to generate music: {}", e),
        }
    }

    /// Local play/pause; no request is sent.
    pub fn toggle_playback(&mut self) {
        if self.current_music.is_some() && !self.loading {
            self.is_playing = !self.is_playing;
        }
    }

    /// True while `mood` is waiting on the server.
    pub fn is_loading(&self, mood: Mood) -> bool {
        self.loading && self.selected.is(mood)
    }
}
