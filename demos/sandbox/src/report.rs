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

//! The run report the game scene writes and the result scene reads.

use std::cell::RefCell;
use std::rc::Rc;

/// Outcome of one play-through, shared between scenes.
///
/// Scenes are registered once and cannot reach each other through the
/// manager, so cross-scene data travels through an explicitly shared
/// handle instead of globals.
#[derive(Debug, Default, Clone)]
pub struct RunReport {
    /// Accumulated score.
    pub score: i64,
    /// Number of waves fully cleared.
    pub waves_cleared: u32,
}

/// A shared, single-threaded handle to the current run's report.
pub type SharedReport = Rc<RefCell<RunReport>>;

/// Creates a fresh shared report.
pub fn shared() -> SharedReport {
    Rc::new(RefCell::new(RunReport::default()))
}
