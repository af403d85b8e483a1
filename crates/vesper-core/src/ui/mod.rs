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

//! A typed store for named UI values (HUD counters, debug readouts).
//!
//! Values live in a closed tagged union, so reading back a value is a
//! typed accessor returning `Option` — there is no type erasure and no
//! downcasting anywhere in the store.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::math::{Rgba, Vec2};

/// The closed set of value kinds a UI element can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiValue {
    /// A boolean flag (visibility, toggle state).
    Bool(bool),
    /// A signed counter (score, wave number).
    Int(i64),
    /// A scalar (gauge fill, timer).
    Float(f32),
    /// A text label.
    Text(String),
    /// A color.
    Color(Rgba),
    /// A screen position or offset.
    Point(Vec2),
}

impl UiValue {
    /// A short name for the value's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            UiValue::Bool(_) => "bool",
            UiValue::Int(_) => "int",
            UiValue::Float(_) => "float",
            UiValue::Text(_) => "text",
            UiValue::Color(_) => "color",
            UiValue::Point(_) => "point",
        }
    }

    fn same_kind(&self, other: &UiValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Named UI values with stable enumeration order.
///
/// A value's kind is fixed at first insertion: writing a differently-typed
/// value to an existing name is a configuration error and degrades to a
/// warned no-op, keeping the previous value.
#[derive(Debug, Default)]
pub struct UiStore {
    values: HashMap<String, UiValue>,
    order: Vec<String>,
}

impl UiStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or updates a value.
    ///
    /// A new name is registered; an existing name is updated only when the
    /// kinds match, otherwise the store warns and keeps the old value.
    pub fn set(&mut self, name: &str, value: UiValue) {
        match self.values.get(name) {
            None => {
                self.order.push(name.to_string());
                self.values.insert(name.to_string(), value);
            }
            Some(existing) if existing.same_kind(&value) => {
                self.values.insert(name.to_string(), value);
            }
            Some(existing) => {
                log::warn!(
                    "UI value '{name}' holds {} but was written as {}; keeping the old value",
                    existing.kind(),
                    value.kind()
                );
            }
        }
    }

    /// Removes a value. Unknown names are ignored.
    pub fn remove(&mut self, name: &str) {
        if self.values.remove(name).is_some() {
            self.order.retain(|n| n != name);
        }
    }

    /// The raw value, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&UiValue> {
        self.values.get(name)
    }

    /// The boolean under `name`, if present and a boolean.
    #[must_use]
    pub fn bool_value(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(UiValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    /// The integer under `name`, if present and an integer.
    #[must_use]
    pub fn int_value(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(UiValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// The scalar under `name`, if present and a scalar.
    #[must_use]
    pub fn float_value(&self, name: &str) -> Option<f32> {
        match self.values.get(name) {
            Some(UiValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    /// The text under `name`, if present and text.
    #[must_use]
    pub fn text_value(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(UiValue::Text(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// The color under `name`, if present and a color.
    #[must_use]
    pub fn color_value(&self, name: &str) -> Option<Rgba> {
        match self.values.get(name) {
            Some(UiValue::Color(v)) => Some(*v),
            _ => None,
        }
    }

    /// The point under `name`, if present and a point.
    #[must_use]
    pub fn point_value(&self, name: &str) -> Option<Vec2> {
        match self.values.get(name) {
            Some(UiValue::Point(v)) => Some(*v),
            _ => None,
        }
    }

    /// Names in first-insertion order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// The number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_getters_return_matching_values() {
        let mut store = UiStore::new();
        store.set("score", UiValue::Int(12400));
        store.set("alive", UiValue::Bool(true));
        store.set("label", UiValue::Text("WAVE 3".to_string()));

        assert_eq!(store.int_value("score"), Some(12400));
        assert_eq!(store.bool_value("alive"), Some(true));
        assert_eq!(store.text_value("label"), Some("WAVE 3"));
    }

    #[test]
    fn wrong_kind_getter_returns_none() {
        let mut store = UiStore::new();
        store.set("score", UiValue::Int(10));
        assert_eq!(store.float_value("score"), None);
        assert_eq!(store.int_value("missing"), None);
    }

    #[test]
    fn kind_mismatch_write_keeps_old_value() {
        let mut store = UiStore::new();
        store.set("score", UiValue::Int(10));
        store.set("score", UiValue::Text("oops".to_string()));
        assert_eq!(store.int_value("score"), Some(10));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn same_kind_write_updates() {
        let mut store = UiStore::new();
        store.set("score", UiValue::Int(10));
        store.set("score", UiValue::Int(20));
        assert_eq!(store.int_value("score"), Some(20));
    }

    #[test]
    fn names_keep_insertion_order() {
        let mut store = UiStore::new();
        store.set("b", UiValue::Int(1));
        store.set("a", UiValue::Int(2));
        store.set("c", UiValue::Int(3));
        let names: Vec<&str> = store.names().iter().map(String::as_str).collect();
        assert_eq!(names, vec!["b", "a", "c"]);

        store.remove("a");
        let names: Vec<&str> = store.names().iter().map(String::as_str).collect();
        assert_eq!(names, vec!["b", "c"]);
    }
}
