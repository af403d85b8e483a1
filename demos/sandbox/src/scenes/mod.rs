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

//! The demo's three scenes: title, game, result.

mod game;
mod result;
mod title;

pub use game::GameScene;
pub use result::ResultScene;
pub use title::TitleScene;

/// Registry names, shared so switch directives and registration agree.
pub mod names {
    /// The title scene.
    pub const TITLE: &str = "title";
    /// The wave-combat scene.
    pub const GAME: &str = "game";
    /// The result scene.
    pub const RESULT: &str = "result";
}
