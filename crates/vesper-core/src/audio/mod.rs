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

//! Defines the abstract sound playback contract.
//!
//! Decoding and device output are backend concerns; the core only loads
//! sounds by path and starts/stops playback through opaque handles.

use anyhow::Result;

/// An opaque handle to a loaded sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(pub u32);

/// Playback parameters for one voice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayParams {
    /// Linear volume in `[0.0, 1.0]`.
    pub volume: f32,
    /// Stereo pan in `[-1.0, 1.0]`, negative being left.
    pub pan: f32,
    /// Whether playback restarts when the sound ends.
    pub looped: bool,
}

impl Default for PlayParams {
    fn default() -> Self {
        Self {
            volume: 1.0,
            pan: 0.0,
            looped: false,
        }
    }
}

impl PlayParams {
    /// A one-shot voice at the given volume, centered.
    #[inline]
    pub fn one_shot(volume: f32) -> Self {
        Self {
            volume,
            ..Self::default()
        }
    }

    /// A looping voice at the given volume, centered.
    #[inline]
    pub fn looping(volume: f32) -> Self {
        Self {
            volume,
            looped: true,
            ..Self::default()
        }
    }
}

/// The abstract contract for the sound playback backend.
pub trait AudioMixer {
    /// Loads a sound from `path` and returns its handle.
    fn load(&mut self, path: &str) -> Result<SoundId>;

    /// Starts playing a loaded sound.
    fn play(&mut self, sound: SoundId, params: PlayParams);

    /// Stops every voice playing this sound.
    fn stop(&mut self, sound: SoundId);

    /// Stops everything. Scenes call this from `finalize` so no sound
    /// outlives its scene.
    fn stop_all(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_params_defaults() {
        let p = PlayParams::default();
        assert_eq!(p.volume, 1.0);
        assert_eq!(p.pan, 0.0);
        assert!(!p.looped);

        assert!(PlayParams::looping(0.5).looped);
        assert!(!PlayParams::one_shot(0.5).looped);
    }
}
