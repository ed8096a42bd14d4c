//! Ordered map type for EDN maps.
//!
//! [`Map`] wraps an [`IndexMap`] of [`Value`] keys to [`Value`]s. EDN keys are
//! not restricted to strings, and insertion order is kept so the rendered map
//! lists its entries in the order they were added.
//!
//! ## Examples
//!
//! ```rust
//! use serde_edn::{to_string, Keyword, Map, Value};
//!
//! let mut map = Map::new();
//! map.insert(Value::from("x"), Value::from(-42));
//! map.insert(Value::from(Keyword::new("y")), Value::Nil);
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(to_string(&map).unwrap(), r#"{"x" -42, :y nil}"#);
//! ```

use crate::shape::{entries, Edn, MapShape, Shape};
use crate::Value;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::hash::{Hash, Hasher};

/// An insertion-ordered map of EDN values.
#[derive(Debug, Clone, Default)]
pub struct Map(IndexMap<Value, Value>);

impl Map {
    #[must_use]
    pub fn new() -> Self {
        Map(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map(IndexMap::with_capacity(capacity))
    }

    /// Inserts an entry, returning the value previously stored under `key`.
    ///
    /// A replaced entry keeps its original position.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &Value) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &Value) -> bool {
        self.0.contains_key(key)
    }

    /// Removes an entry, keeping the order of the rest.
    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, Value, Value> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, Value, Value> {
        self.0.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Value, Value> {
        self.0.iter()
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Map {}

// Equal maps may list their entries in different orders.
impl Hash for Map {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.len().hash(state);
    }
}

impl IntoIterator for Map {
    type Item = (Value, Value);
    type IntoIter = indexmap::map::IntoIter<Value, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a Value, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Value, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(Value, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        Map(IndexMap::from_iter(iter))
    }
}

impl Extend<(Value, Value)> for Map {
    fn extend<T: IntoIterator<Item = (Value, Value)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl Edn for Map {
    fn shape() -> Shape<Self> {
        Shape::Map(MapShape::of::<Value, Value>(|m| entries(m.0.iter())))
    }
}

impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaced_entry_keeps_position() {
        let mut map = Map::new();
        map.insert(Value::from(1), Value::from("a"));
        map.insert(Value::from(2), Value::from("b"));
        assert_eq!(map.insert(Value::from(1), Value::from("c")), Some(Value::from("a")));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec![Value::from(1), Value::from(2)]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut map: Map = (1..=3).map(|i| (Value::from(i), Value::Nil)).collect();
        map.remove(&Value::from(2));
        assert_eq!(crate::to_string(&map).unwrap(), "{1 nil, 3 nil}");
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: Map = vec![(Value::from(1), Value::Nil), (Value::from(2), Value::Nil)]
            .into_iter()
            .collect();
        let b: Map = vec![(Value::from(2), Value::Nil), (Value::from(1), Value::Nil)]
            .into_iter()
            .collect();
        assert_eq!(a, b);
    }
}
