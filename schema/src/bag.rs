//! Property bag abstraction and value coercion.
//!
//! A property bag is whatever key/value storage the host attaches to an
//! object. Reads are tolerant of hosts that store booleans as integers;
//! writes always use canonical JSON values.

#[cfg(test)]
#[path = "bag_test.rs"]
mod bag_test;

use serde_json::{Map, Value};

/// Key/value storage attached to a single scene object.
pub trait PropertyBag {
    /// Stored value for `key`, if present.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Insert or replace the value for `key`.
    fn set(&mut self, key: &str, value: Value);

    /// Delete `key`, returning the previous value if it was present.
    fn remove(&mut self, key: &str) -> Option<Value>;

    /// Returns `true` if `key` is present.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl PropertyBag for Map<String, Value> {
    fn get(&self, key: &str) -> Option<&Value> {
        Map::get(self, key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        Map::shift_remove(self, key)
    }
}

/// A bare JSON value acts as a bag when it holds an object. Writing to a
/// non-object value replaces it with an empty object first.
impl PropertyBag for Value {
    fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    fn set(&mut self, key: &str, value: Value) {
        if !self.is_object() {
            *self = Value::Object(Map::new());
        }
        if let Some(map) = self.as_object_mut() {
            map.insert(key.to_owned(), value);
        }
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        self.as_object_mut().and_then(|map| map.shift_remove(key))
    }
}

/// Coerce a stored value to a boolean. Accepts JSON booleans and numbers
/// (zero, including `0.0`, is false); anything else is `None`.
#[must_use]
pub fn as_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        _ => None,
    }
}

/// `true` for a stored `true` or non-zero number.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    as_flag(value) == Some(true)
}

/// `true` for a stored `false` or numeric zero.
#[must_use]
pub fn is_explicit_false(value: &Value) -> bool {
    as_flag(value) == Some(false)
}
