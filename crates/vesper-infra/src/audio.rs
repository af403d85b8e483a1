// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A headless audio backend that logs playback instead of producing sound.

use std::collections::{HashMap, HashSet};

use anyhow::Result;

use vesper_core::audio::{AudioMixer, PlayParams, SoundId};

/// An [`AudioMixer`] that tracks which sounds are playing and logs every
/// operation. Stands in for a real audio device in tests and headless runs.
#[derive(Debug, Default)]
pub struct LogMixer {
    names: HashMap<SoundId, String>,
    playing: HashSet<SoundId>,
    next_id: u32,
}

impl LogMixer {
    /// Creates an empty mixer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given sound currently has a playing voice.
    #[must_use]
    pub fn is_playing(&self, sound: SoundId) -> bool {
        self.playing.contains(&sound)
    }

    /// The number of currently playing sounds.
    #[must_use]
    pub fn playing_count(&self) -> usize {
        self.playing.len()
    }
}

impl AudioMixer for LogMixer {
    fn load(&mut self, path: &str) -> Result<SoundId> {
        let id = SoundId(self.next_id);
        self.next_id += 1;
        self.names.insert(id, path.to_string());
        log::debug!("Loaded sound '{path}' -> {id:?}");
        Ok(id)
    }

    fn play(&mut self, sound: SoundId, params: PlayParams) {
        if !self.names.contains_key(&sound) {
            log::warn!("Cannot play unknown sound {sound:?}");
            return;
        }
        self.playing.insert(sound);
        log::debug!(
            "Playing {:?} ({}) volume={} pan={} looped={}",
            sound,
            self.names[&sound],
            params.volume,
            params.pan,
            params.looped
        );
    }

    fn stop(&mut self, sound: SoundId) {
        if self.playing.remove(&sound) {
            log::debug!("Stopped {sound:?}");
        }
    }

    fn stop_all(&mut self) {
        if !self.playing.is_empty() {
            log::debug!("Stopping {} sound(s)", self.playing.len());
        }
        self.playing.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_and_stop_track_state() {
        let mut mixer = LogMixer::new();
        let shot = mixer.load("shot.wav").unwrap();
        let music = mixer.load("bgm.ogg").unwrap();

        mixer.play(shot, PlayParams::one_shot(0.8));
        mixer.play(music, PlayParams::looping(0.5));
        assert!(mixer.is_playing(shot));
        assert_eq!(mixer.playing_count(), 2);

        mixer.stop(shot);
        assert!(!mixer.is_playing(shot));
        assert!(mixer.is_playing(music));

        mixer.stop_all();
        assert_eq!(mixer.playing_count(), 0);
    }

    #[test]
    fn playing_an_unknown_sound_is_ignored() {
        let mut mixer = LogMixer::new();
        mixer.play(SoundId(99), PlayParams::default());
        assert_eq!(mixer.playing_count(), 0);
    }
}
