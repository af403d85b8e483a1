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

//! The wave announcement banner played between combat waves.

use super::clock::AnimationClock;
use super::easing::{Ease, Span};
use super::Animation;
use crate::math::{rng::SplitMix32, Rect, Rgba, Vec2};
use crate::render::{Quad, Surface, TextBlock};

/// The banner's sequential phases, in playback order.
///
/// Phase boundaries are fixed offsets measured back from the end of the
/// duration, so shortening the banner compresses the lead-in rather than
/// the readable part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveBannerPhase {
    /// The two horizontal rules sweep in from the sides.
    SlideIn,
    /// The rules part vertically, opening the text gap.
    OpenGap,
    /// The announcement text is visible and shakes with decaying jitter.
    Shake,
    /// The text holds steady.
    Hold,
    /// Rules, backdrop, and text fade out together.
    FadeOut,
}

/// Announces the next wave: two rules sweep in, part to reveal the wave
/// text (shaken, then steady), and everything fades out.
///
/// The announcement text is chosen when [`reset`](WaveBanner::reset) runs:
/// a cleared game takes precedence over the last wave, which takes
/// precedence over the numbered form.
#[derive(Debug, Clone)]
pub struct WaveBanner {
    clock: AnimationClock,
    viewport: Rect,
    wave_number: u32,
    text: String,
    rng: SplitMix32,
    shake_start: f32,
    gap_span: Span,
    slide_span: Span,
    fade_span: Span,
    hold_start: f32,
    text_offset: Vec2,
    text_alpha: f32,
    band_alpha: f32,
    slide_ratio: f32,
    gap: f32,
}

impl WaveBanner {
    /// Default banner length in seconds.
    pub const DEFAULT_DURATION: f32 = 3.0;

    // Phase boundaries, as offsets from the end of the duration.
    const OPEN_GAP_FROM_END: f32 = 2.4;
    const SHAKE_FROM_END: f32 = 1.8;
    const HOLD_FROM_END: f32 = 0.9;
    const FADE_FROM_END: f32 = 0.45;

    /// Peak shake displacement in pixels.
    const JITTER_AMPLITUDE: f32 = 6.0;
    /// Full gap height between the rules, in pixels.
    const GAP_HEIGHT: f32 = 88.0;
    /// Thickness of each rule, in pixels.
    const RULE_HEIGHT: f32 = 4.0;

    /// Creates a banner over `viewport` with the default duration,
    /// initialized for wave 1.
    pub fn new(viewport: Rect) -> Self {
        Self::with_duration(viewport, Self::DEFAULT_DURATION)
    }

    /// Creates a banner with an explicit duration in seconds.
    pub fn with_duration(viewport: Rect, duration: f32) -> Self {
        let duration = duration.max(0.0);
        let open_gap_start = (duration - Self::OPEN_GAP_FROM_END).max(0.0);
        let shake_start = (duration - Self::SHAKE_FROM_END).max(0.0);
        let hold_start = (duration - Self::HOLD_FROM_END).max(0.0);
        let fade_start = (duration - Self::FADE_FROM_END).max(0.0);
        let mut banner = Self {
            clock: AnimationClock::new(duration),
            viewport,
            wave_number: 1,
            text: String::new(),
            rng: SplitMix32::new(1),
            shake_start,
            slide_span: Span::new(0.0, open_gap_start),
            gap_span: Span::new(open_gap_start, shake_start),
            fade_span: Span::new(fade_start, duration),
            hold_start,
            text_offset: Vec2::ZERO,
            text_alpha: 0.0,
            band_alpha: 1.0,
            slide_ratio: 0.0,
            gap: 0.0,
        };
        banner.reset(1, false, false);
        banner
    }

    /// Rearms the banner for the given wave and stops playback.
    ///
    /// The announcement text is fixed here, not per frame: `is_clear_wave`
    /// wins over `is_last_wave`, which wins over the numbered form. The
    /// jitter generator is reseeded from the wave number so a replay of the
    /// same wave shakes identically.
    pub fn reset(&mut self, wave_number: u32, is_last_wave: bool, is_clear_wave: bool) {
        self.wave_number = wave_number;
        self.text = if is_clear_wave {
            "WAVE ALL CLEAR".to_string()
        } else if is_last_wave {
            "WAVE LAST".to_string()
        } else {
            format!("WAVE {wave_number}")
        };
        self.rng = SplitMix32::new(0xB44E ^ wave_number);
        self.clock.stop();
        self.recompute_static();
        self.text_offset = Vec2::ZERO;
    }

    /// The phase the banner is in at its current elapsed time.
    pub fn phase(&self) -> WaveBannerPhase {
        let at = self.clock.elapsed();
        if self.slide_span.contains(at) {
            WaveBannerPhase::SlideIn
        } else if self.gap_span.contains(at) {
            WaveBannerPhase::OpenGap
        } else if at < self.hold_start {
            WaveBannerPhase::Shake
        } else if at < self.fade_span.start {
            WaveBannerPhase::Hold
        } else {
            WaveBannerPhase::FadeOut
        }
    }

    /// True exactly on the frame the text became visible (the shake phase
    /// began). Scenes use this as a one-frame cue to fire sounds.
    #[inline]
    pub fn just_revealed(&self) -> bool {
        self.clock.just_crossed(self.shake_start)
    }

    /// The announcement text chosen at the last [`reset`](WaveBanner::reset).
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The wave number set at the last [`reset`](WaveBanner::reset).
    #[inline]
    pub fn wave_number(&self) -> u32 {
        self.wave_number
    }

    /// The current per-frame shake displacement of the text.
    #[inline]
    pub fn text_offset(&self) -> Vec2 {
        self.text_offset
    }

    /// The current text opacity.
    #[inline]
    pub fn text_alpha(&self) -> f32 {
        self.text_alpha
    }

    /// Recomputes everything that is a pure function of elapsed time.
    fn recompute_static(&mut self) {
        let at = self.clock.elapsed();
        self.slide_ratio = self.slide_span.eased_ratio(at, Ease::OutQuad);
        self.gap = self.gap_span.eased_ratio(at, Ease::OutQuad) * Self::GAP_HEIGHT;
        let fade = self.fade_span.eased_ratio(at, Ease::InOutQuad);
        self.band_alpha = 1.0 - fade;
        self.text_alpha = if at < self.shake_start {
            0.0
        } else {
            1.0 - fade
        };
    }

    fn rule_rects(&self) -> (Rect, Rect, Rect) {
        let center = self.viewport.center();
        let half_w = self.viewport.width() * 0.5 * self.slide_ratio;
        let half_gap = self.gap * 0.5;
        // The top rule sweeps in from the left, the bottom one from the right.
        let top = Rect::from_min_max(
            Vec2::new(center.x - half_w, center.y - half_gap - Self::RULE_HEIGHT),
            Vec2::new(center.x + half_w, center.y - half_gap),
        );
        let bottom = Rect::from_min_max(
            Vec2::new(center.x - half_w, center.y + half_gap),
            Vec2::new(center.x + half_w, center.y + half_gap + Self::RULE_HEIGHT),
        );
        let backdrop = Rect::from_min_max(
            Vec2::new(center.x - half_w, center.y - half_gap),
            Vec2::new(center.x + half_w, center.y + half_gap),
        );
        (top, bottom, backdrop)
    }
}

impl Animation for WaveBanner {
    fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    fn clock_mut(&mut self) -> &mut AnimationClock {
        &mut self.clock
    }

    fn update(&mut self, dt: f32) {
        self.clock.advance(dt);
        self.recompute_static();

        // The jitter is the one deliberately non-deterministic-looking
        // input; its amplitude decays with overall progress so the text
        // settles before the hold phase ends.
        if self.phase() == WaveBannerPhase::Shake {
            let remaining = 1.0 - self.clock.progress();
            let amplitude = Self::JITTER_AMPLITUDE * remaining;
            self.text_offset =
                Vec2::new(self.rng.next_signed(), self.rng.next_signed()) * amplitude;
        } else {
            self.text_offset = Vec2::ZERO;
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let (top, bottom, backdrop) = self.rule_rects();
        surface.draw_quad(&Quad::from_rect(
            backdrop,
            Rgba::BLACK.with_alpha(0.6 * self.band_alpha),
        ));
        surface.draw_quad(&Quad::from_rect(
            top,
            Rgba::WHITE.with_alpha(self.band_alpha),
        ));
        surface.draw_quad(&Quad::from_rect(
            bottom,
            Rgba::WHITE.with_alpha(self.band_alpha),
        ));

        if self.text_alpha > 0.0 {
            surface.draw_text(&TextBlock::new(
                self.text.clone(),
                self.viewport.center() + self.text_offset,
                Rgba::WHITE.with_alpha(self.text_alpha),
            ));
        }
    }
}
