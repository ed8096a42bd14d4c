//! Extension types with their own EDN productions.
//!
//! - [`Symbol`]: a bare, optionally namespaced name (`foo/bar`)
//! - [`Keyword`]: a `:`-prefixed name (`:foo/bar`)
//! - [`Set`]: a collection of unique values (`#{1 2 3}`)
//! - [`KMap`]: a map keyed by keywords (`{:foo 123, :bar true}`)
//! - [`Tagged`]: a user tagged literal (`#app/color "red"`)
//!
//! Each serializes through serde as well. The EDN [`Serializer`](crate::Serializer)
//! renders them natively; other formats see plain strings and sequences.
//!
//! ## Examples
//!
//! ```rust
//! use serde_edn::{to_string, Keyword, Set, Symbol};
//!
//! let mut set = Set::new();
//! set.add(Keyword::new("yolo"));
//! set.add(Keyword::new(":yolo"));
//! assert_eq!(set.len(), 1);
//!
//! assert_eq!(to_string(&Symbol::new("foo/bar")).unwrap(), "foo/bar");
//! assert_eq!(to_string(&set).unwrap(), "#{:yolo}");
//! ```

use crate::ser::token;
use crate::shape::{elems, entries, Edn, MapShape, SeqShape, Shape};
use crate::Value;
use indexmap::{IndexMap, IndexSet};
use serde::ser::{Serialize, SerializeMap, SerializeTuple, Serializer};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A symbol, emitted verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Symbol(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Symbol(name)
    }
}

impl Edn for Symbol {
    fn shape() -> Shape<Self> {
        Shape::Symbol(Symbol::as_str)
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct(token::SYMBOL, &self.0)
    }
}

/// A keyword.
///
/// The name is kept as given. Rendering adds the leading `:` only when it is
/// missing, and equality ignores one leading `:`, so `Keyword::new("a")` and
/// `Keyword::new(":a")` are the same keyword.
///
/// # Examples
///
/// ```rust
/// use serde_edn::{to_string, Keyword};
///
/// assert_eq!(to_string(&Keyword::new("foo/bar")).unwrap(), ":foo/bar");
/// assert_eq!(to_string(&Keyword::new(":wow")).unwrap(), ":wow");
/// assert_eq!(Keyword::new(":wow"), Keyword::new("wow"));
/// ```
#[derive(Clone, Debug)]
pub struct Keyword(String);

impl Keyword {
    pub fn new(name: impl Into<String>) -> Self {
        Keyword(name.into())
    }

    /// The name without its leading `:`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.strip_prefix(':').unwrap_or(&self.0)
    }

    /// The name exactly as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Keyword {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Keyword {}

impl Hash for Keyword {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl PartialOrd for Keyword {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyword {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.name())
    }
}

impl From<&str> for Keyword {
    fn from(name: &str) -> Self {
        Keyword::new(name)
    }
}

impl From<String> for Keyword {
    fn from(name: String) -> Self {
        Keyword(name)
    }
}

impl Edn for Keyword {
    fn shape() -> Shape<Self> {
        Shape::Keyword(Keyword::as_str)
    }
}

impl Serialize for Keyword {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct(token::KEYWORD, &self.0)
    }
}

/// An insertion-ordered set of unique values.
///
/// # Examples
///
/// ```rust
/// use serde_edn::{to_string, Keyword, Set, Value};
///
/// let set: Set = Set::new()
///     .with(Value::from(2))
///     .with(Value::from(Keyword::new(":yolo")))
///     .with(Value::from(2))
///     .with(Value::from(-3.14))
///     .with(Value::from("yo"));
/// assert_eq!(to_string(&set).unwrap(), r#"#{2 :yolo -3.14 "yo"}"#);
/// ```
#[derive(Clone)]
pub struct Set<T = Value>(IndexSet<T>);

impl<T: Hash + Eq> Set<T> {
    #[must_use]
    pub fn new() -> Self {
        Set(IndexSet::new())
    }

    /// Adds `value`, returning `false` if it was already present.
    pub fn add(&mut self, value: T) -> bool {
        self.0.insert(value)
    }

    /// Adds `value` and returns the set, for chaining.
    #[must_use]
    pub fn with(mut self, value: T) -> Self {
        self.0.insert(value);
        self
    }

    /// Removes `value`, keeping the order of the remaining members.
    pub fn discard<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.0.shift_remove(value)
    }

    #[must_use]
    pub fn has<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.0.contains(value)
    }
}

impl<T> Set<T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Hash + Eq> Default for Set<T> {
    fn default() -> Self {
        Set::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

// Membership decides equality; order does not.
impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: Hash + Eq> Hash for Set<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.len().hash(state);
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Set(iter.into_iter().collect())
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = indexmap::set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Edn> Edn for Set<T> {
    fn shape() -> Shape<Self> {
        Shape::Set(SeqShape::of::<T>(|s| elems(s.0.iter())))
    }
}

struct Members<'a, T>(&'a IndexSet<T>);

impl<T: Serialize> Serialize for Members<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0)
    }
}

impl<T: Serialize> Serialize for Set<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct(token::SET, &Members(&self.0))
    }
}

/// An insertion-ordered map keyed by keywords.
///
/// # Examples
///
/// ```rust
/// use serde_edn::{to_string, KMap, Value};
///
/// let mut map = KMap::new();
/// map.insert("foo", Value::from(123));
/// map.insert("bar", Value::from(true));
/// assert_eq!(to_string(&map).unwrap(), "{:foo 123, :bar true}");
/// ```
#[derive(Clone, Debug)]
pub struct KMap<V = Value>(IndexMap<Keyword, V>);

impl<V> KMap<V> {
    #[must_use]
    pub fn new() -> Self {
        KMap(IndexMap::new())
    }

    pub fn insert(&mut self, key: impl Into<Keyword>, value: V) -> Option<V> {
        self.0.insert(key.into(), value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.get(&Keyword::new(key))
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.0.shift_remove(&Keyword::new(key))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Keyword, V> {
        self.0.iter()
    }
}

impl<V> Default for KMap<V> {
    fn default() -> Self {
        KMap::new()
    }
}

impl<V: PartialEq> PartialEq for KMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: Into<Keyword>, V> FromIterator<(K, V)> for KMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        KMap(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<V> IntoIterator for KMap<V> {
    type Item = (Keyword, V);
    type IntoIter = indexmap::map::IntoIter<Keyword, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V: Edn> Edn for KMap<V> {
    fn shape() -> Shape<Self> {
        Shape::Map(MapShape::of::<Keyword, V>(|m| entries(m.0.iter())))
    }
}

impl<V: Serialize> Serialize for KMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// A user tagged literal, `#tag "payload"`.
///
/// The tag is written verbatim after `#`; the payload is quoted and escaped.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tagged {
    tag: String,
    payload: String,
}

impl Tagged {
    pub fn new(tag: impl Into<String>, payload: impl Into<String>) -> Self {
        Tagged {
            tag: tag.into(),
            payload: payload.into(),
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    fn parts(&self) -> (&str, &str) {
        (&self.tag, &self.payload)
    }
}

impl Edn for Tagged {
    fn shape() -> Shape<Self> {
        Shape::Tagged(Tagged::parts)
    }
}

struct TagAndPayload<'a>(&'a str, &'a str);

impl Serialize for TagAndPayload<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(self.0)?;
        tuple.serialize_element(self.1)?;
        tuple.end()
    }
}

impl Serialize for Tagged {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct(token::TAGGED, &TagAndPayload(&self.tag, &self.payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_string;

    #[test]
    fn test_set_collapses_duplicates_in_insertion_order() {
        let mut set = Set::new();
        assert!(set.add(Value::from(2)));
        assert!(set.add(Value::from(Keyword::new(":yolo"))));
        assert!(!set.add(Value::from(2)));
        set.add(Value::from(-3.14));
        set.add(Value::from("yo"));
        assert_eq!(set.len(), 4);
        assert_eq!(to_string(&set).unwrap(), r#"#{2 :yolo -3.14 "yo"}"#);
    }

    #[test]
    fn test_set_discard_and_has() {
        let mut set: Set<i32> = [1, 2, 3].into_iter().collect();
        assert!(set.has(&2));
        assert!(set.discard(&2));
        assert!(!set.discard(&2));
        assert!(!set.has(&2));
        assert_eq!(to_string(&set).unwrap(), "#{1 3}");
    }

    #[test]
    fn test_set_equality_ignores_order() {
        let a: Set<i32> = [1, 2].into_iter().collect();
        let b: Set<i32> = [2, 1].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_set() {
        assert_eq!(to_string(&Set::<Value>::new()).unwrap(), "#{}");
    }

    #[test]
    fn test_keyword_identity_ignores_prefix() {
        assert_eq!(Keyword::new("a/b"), Keyword::new(":a/b"));
        assert_eq!(Keyword::new(":a/b").name(), "a/b");
        assert_eq!(Keyword::new("a").to_string(), ":a");
    }

    #[test]
    fn test_kmap_keys_render_as_keywords() {
        let map: KMap<i32> = [("x", 1), (":y", 2)].into_iter().collect();
        assert_eq!(to_string(&map).unwrap(), "{:x 1, :y 2}");
        assert_eq!(map.get("y"), Some(&2));
    }

    #[test]
    fn test_tagged_escapes_payload() {
        let tagged = Tagged::new("app/note", "say \"hi\"");
        assert_eq!(to_string(&tagged).unwrap(), r#"#app/note "say \"hi\"""#);
    }
}
