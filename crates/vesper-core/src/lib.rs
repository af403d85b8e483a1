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

//! # Vesper Core
//!
//! Foundational crate for the Vesper engine: timed animations, scene
//! lifecycle management, and the abstract contracts (drawing, text, audio,
//! input, timing) that concrete backends implement.
//!
//! The engine core is single-threaded by design: the owner drives one
//! `update` followed by one `draw` per frame for the active scene, and all
//! cross-component calls are synchronous.

#![warn(missing_docs)]

pub mod animation;
pub mod audio;
pub mod config;
pub mod event;
pub mod input;
pub mod math;
pub mod render;
pub mod scene;
pub mod time;
pub mod ui;

pub use animation::{Animation, AnimationClock};
pub use scene::{Scene, SceneDirective, SceneManager};
pub use time::Stopwatch;
