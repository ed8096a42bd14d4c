//! Dynamic value representation for EDN data.
//!
//! This module provides the [`Value`] enum, which can hold anything the
//! notation can express. It is useful when the structure isn't known at
//! compile time, or when data arrives from another serde format.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_edn::{edn, Keyword, Value};
//!
//! let nil = Value::Nil;
//! let number = Value::from(42);
//! let keyword = Value::from(Keyword::new("status"));
//!
//! let doc = edn!({ "name" => "Alice", (Keyword::new("age")) => 30 });
//! assert!(doc.is_map());
//! ```
//!
//! ### Encoding
//!
//! `Value` implements [`Edn`]: each payload is rendered with the renderer of
//! its own type.
//!
//! ```rust
//! use serde_edn::{edn, to_string};
//!
//! let value = edn!([(-1), [0], #{"a"}]);
//! assert_eq!(to_string(&value).unwrap(), r#"[-1 [0] #{"a"}]"#);
//! ```
//!
//! ### Converting from other formats
//!
//! ```rust
//! use serde_edn::{to_string, Value};
//!
//! let value: Value = serde_json::from_str(r#"{"ids": [1, 2], "ok": true}"#).unwrap();
//! assert_eq!(to_string(&value).unwrap(), r#"{"ids" [1 2], "ok" true}"#);
//! ```

use crate::ser::token;
use crate::shape::{Edn, Shape};
use crate::{literal, Keyword, Map, Set, Symbol, Tagged};
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::LinkedList;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A dynamically-typed EDN value.
///
/// Floats compare by bit pattern so that `Value` can be a set member or a map
/// key: `NaN` equals itself and `0.0` differs from `-0.0`.
///
/// # Examples
///
/// ```rust
/// use serde_edn::Value;
///
/// assert!(Value::Nil.is_nil());
/// assert_eq!(Value::from(42).as_i64(), Some(42));
/// assert_eq!(Value::from("hello").as_str(), Some("hello"));
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Integer(i64),
    /// Unsigned integers past `i64::MAX`; smaller ones are `Integer`.
    Unsigned(u64),
    BigInt(BigInt),
    Float(f64),
    Char(char),
    String(String),
    Symbol(Symbol),
    Keyword(Keyword),
    Instant(DateTime<Utc>),
    Uuid(uuid::Uuid),
    Bytes(Vec<u8>),
    Vector(Vec<Value>),
    List(LinkedList<Value>),
    Map(Map),
    Set(Set<Value>),
    Tagged(Tagged),
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` for fixed-width and arbitrary precision integers.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Unsigned(_) | Value::BigInt(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self, Value::Keyword(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_vector(&self) -> bool {
        matches!(self, Value::Vector(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Value::Set(_))
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer that fits in an `i64`, returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_edn::Value;
    ///
    /// assert_eq!(Value::from(42u64).as_i64(), Some(42));
    /// assert_eq!(Value::from(u64::MAX).as_i64(), None);
    /// assert_eq!(Value::from(42.0).as_i64(), None);
    /// ```
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Unsigned(u) => i64::try_from(*u).ok(),
            Value::BigInt(b) => i64::try_from(b).ok(),
            _ => None,
        }
    }

    /// ```rust
    /// use serde_edn::Value;
    ///
    /// assert_eq!(Value::from(u64::MAX).as_u64(), Some(u64::MAX));
    /// assert_eq!(Value::from(-1).as_u64(), None);
    /// ```
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Integer(i) => u64::try_from(*i).ok(),
            Value::Unsigned(u) => Some(*u),
            Value::BigInt(b) => u64::try_from(b).ok(),
            _ => None,
        }
    }

    /// Floats as they are, integers converted.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            Value::Unsigned(u) => Some(*u as f64),
            _ => None,
        }
    }

    /// The text of a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_keyword(&self) -> Option<&Keyword> {
        match self {
            Value::Keyword(k) => Some(k),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(b) => Some(b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_instant(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Instant(t) => Some(t),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_uuid(&self) -> Option<&uuid::Uuid> {
        match self {
            Value::Uuid(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_vector(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&LinkedList<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_set(&self) -> Option<&Set<Value>> {
        match self {
            Value::Set(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_tagged(&self) -> Option<&Tagged> {
        match self {
            Value::Tagged(t) => Some(t),
            _ => None,
        }
    }

    /// The payload as an encodable value; `None` for `nil`.
    fn payload(&self) -> Option<&dyn Edn> {
        match self {
            Value::Nil => None,
            Value::Bool(b) => Some(b),
            Value::Integer(i) => Some(i),
            Value::Unsigned(u) => Some(u),
            Value::BigInt(b) => Some(b),
            Value::Float(f) => Some(f),
            Value::Char(c) => Some(c),
            Value::String(s) => Some(s),
            Value::Symbol(s) => Some(s),
            Value::Keyword(k) => Some(k),
            Value::Instant(t) => Some(t),
            Value::Uuid(id) => Some(id),
            Value::Bytes(b) => Some(b),
            Value::Vector(v) => Some(v),
            Value::List(l) => Some(l),
            Value::Map(m) => Some(m),
            Value::Set(s) => Some(s),
            Value::Tagged(t) => Some(t),
        }
    }
}

impl Edn for Value {
    fn shape() -> Shape<Self> {
        Shape::Dynamic(Value::payload)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Unsigned(a), Value::Unsigned(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Keyword(a), Value::Keyword(b)) => a == b,
            (Value::Instant(a), Value::Instant(b)) => a == b,
            (Value::Uuid(a), Value::Uuid(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Vector(a), Value::Vector(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            (Value::Tagged(a), Value::Tagged(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Nil => {}
            Value::Bool(b) => b.hash(state),
            Value::Integer(i) => i.hash(state),
            Value::Unsigned(u) => u.hash(state),
            Value::BigInt(b) => b.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Char(c) => c.hash(state),
            Value::String(s) => s.hash(state),
            Value::Symbol(s) => s.hash(state),
            Value::Keyword(k) => k.hash(state),
            Value::Instant(t) => t.hash(state),
            Value::Uuid(id) => id.hash(state),
            Value::Bytes(b) => b.hash(state),
            Value::Vector(v) => v.hash(state),
            Value::List(l) => l.hash(state),
            Value::Map(m) => m.hash(state),
            Value::Set(s) => s.hash(state),
            Value::Tagged(t) => t.hash(state),
        }
    }
}

/// Writes the EDN text of the value. A value that cannot be encoded, such as
/// a `NaN` float, is written as `#<error: ...>`, which no EDN reader accepts;
/// use [`crate::to_string`] to get the error itself.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::to_string(self) {
            Ok(text) => f.write_str(&text),
            Err(err) => write!(f, "#<error: {}>", err),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Nil => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Unsigned(u) => serializer.serialize_u64(*u),
            Value::BigInt(b) => serializer.serialize_newtype_struct(token::BIGINT, &b.to_string()),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Char(c) => serializer.serialize_char(*c),
            Value::String(s) => serializer.serialize_str(s),
            Value::Symbol(s) => s.serialize(serializer),
            Value::Keyword(k) => k.serialize(serializer),
            Value::Instant(t) => {
                serializer.serialize_newtype_struct(token::INST, &literal::instant_text(t))
            }
            Value::Uuid(id) => {
                serializer.serialize_newtype_struct(token::UUID, &id.hyphenated().to_string())
            }
            Value::Bytes(b) => serializer.serialize_bytes(b),
            Value::Vector(v) => serializer.collect_seq(v),
            Value::List(l) => serializer.serialize_newtype_struct(token::LIST, l),
            Value::Map(m) => m.serialize(serializer),
            Value::Set(s) => s.serialize(serializer),
            Value::Tagged(t) => t.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any value representable in EDN")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_i128<E>(self, value: i128) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u128<E>(self, value: u128) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_char<E>(self, value: char) -> Result<Self::Value, E> {
                Ok(Value::Char(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E> {
                Ok(Value::Bytes(value.to_vec()))
            }

            fn visit_byte_buf<E>(self, value: Vec<u8>) -> Result<Self::Value, E> {
                Ok(Value::Bytes(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Nil)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Nil)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Vector(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Map::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Map(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| crate::Error::custom(format!("expected integer, found {:?}", value)))
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| crate::Error::custom(format!("expected number, found {:?}", value)))
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| crate::Error::custom(format!("expected boolean, found {:?}", value)))
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                other
            ))),
        }
    }
}

macro_rules! from_integer {
    ($($t:ty)*) => {$(
        impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Value::Integer(i64::from(value))
            }
        }
    )*};
}

from_integer!(i8 i16 i32 i64 u8 u16 u32);

// Narrowest of `Integer`, `Unsigned` and `BigInt` that holds the value.
macro_rules! from_wide_integer {
    ($($t:ty)*) => {$(
        impl From<$t> for Value {
            fn from(value: $t) -> Self {
                if let Ok(i) = i64::try_from(value) {
                    Value::Integer(i)
                } else if let Ok(u) = u64::try_from(value) {
                    Value::Unsigned(u)
                } else {
                    Value::BigInt(BigInt::from(value))
                }
            }
        }
    )*};
}

from_wide_integer!(u64 i128 u128 isize usize);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(literal::widen_f32(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<Keyword> for Value {
    fn from(value: Keyword) -> Self {
        Value::Keyword(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Instant(value)
    }
}

impl From<uuid::Uuid> for Value {
    fn from(value: uuid::Uuid) -> Self {
        Value::Uuid(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Vector(value)
    }
}

impl From<LinkedList<Value>> for Value {
    fn from(value: LinkedList<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl From<Set<Value>> for Value {
    fn from(value: Set<Value>) -> Self {
        Value::Set(value)
    }
}

impl From<Tagged> for Value {
    fn from(value: Tagged) -> Self {
        Value::Tagged(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_string;
    use chrono::TimeZone;

    #[test]
    fn test_payloads_render_with_their_own_shape() {
        let t = Utc.with_ymd_and_hms(2014, 3, 14, 15, 59, 59).unwrap();
        let value = Value::Vector(vec![
            Value::Nil,
            Value::from('x'),
            Value::from(Symbol::new("foo/bar")),
            Value::from(t),
            Value::from(b"hi".to_vec()),
            Value::from(BigInt::from(7)),
        ]);
        assert_eq!(
            to_string(&value).unwrap(),
            r#"[nil \x foo/bar #inst "2014-03-14T15:59:59Z" #base64 "aGk=" 7N]"#
        );
    }

    #[test]
    fn test_list_renders_with_parentheses() {
        let mut list = LinkedList::new();
        list.push_front(Value::from("a"));
        list.push_front(Value::from(Set::new().with(Value::from("b"))));
        list.push_front(Value::from(Symbol::new("c")));
        list.push_front(Value::Vector(vec![Value::from("d"), Value::from("e")]));
        list.push_front(Value::from(Keyword::new("f")));
        assert_eq!(
            to_string(&Value::List(list)).unwrap(),
            r#"(:f ["d" "e"] c #{"b"} "a")"#
        );
    }

    #[test]
    fn test_nested_failure_surfaces() {
        let value = Value::Vector(vec![Value::from(1), Value::from(f64::NAN)]);
        assert!(to_string(&value).is_err());
        assert_eq!(format!("{}", Value::from(1)), "1");
    }

    #[test]
    fn test_unsigned_past_i64_stays_plain() {
        assert_eq!(Value::from(5u64), Value::Integer(5));
        assert_eq!(Value::from(u64::MAX), Value::Unsigned(u64::MAX));
        assert_eq!(Value::from(u64::MAX).as_i64(), None);
        assert_eq!(
            to_string(&Value::from(u64::MAX)).unwrap(),
            to_string(&u64::MAX).unwrap()
        );
        assert_eq!(
            to_string(&crate::to_value(&u64::MAX).unwrap()).unwrap(),
            "18446744073709551615"
        );

        let json: Value = serde_json::from_str("[18446744073709551615]").unwrap();
        assert_eq!(to_string(&json).unwrap(), "[18446744073709551615]");
    }

    #[test]
    fn test_only_values_past_64_bits_become_bigint() {
        let huge = u128::from(u64::MAX) + 1;
        assert_eq!(Value::from(huge).as_bigint(), Some(&BigInt::from(huge)));
        assert_eq!(to_string(&Value::from(huge)).unwrap(), "18446744073709551616N");
        assert_eq!(Value::from(-5i128), Value::Integer(-5));
    }

    #[test]
    fn test_f32_keeps_its_shortest_digits() {
        assert_eq!(to_string(&Value::from(3.14f32)).unwrap(), "3.14");
        assert_eq!(Value::from(3.14f32), crate::to_value(&3.14f32).unwrap());
        assert_eq!(
            to_string(&Value::from(3.14f32)).unwrap(),
            to_string(&3.14f32).unwrap()
        );
    }

    #[test]
    fn test_display_never_fails() {
        assert_eq!(Value::from(1).to_string(), "1");
        let text = format!("{}", Value::from(f64::NAN));
        assert!(text.starts_with("#<error: "), "{}", text);
        let nested = Value::Vector(vec![Value::from(1), Value::from(f64::INFINITY)]);
        assert!(nested.to_string().starts_with("#<error: "));
    }

    #[test]
    fn test_float_identity_is_bitwise() {
        assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_ne!(Value::from(0.0), Value::from(-0.0));
        assert_ne!(Value::from(1.0), Value::from(1));
    }

    #[test]
    fn test_tryfrom() {
        assert_eq!(i64::try_from(Value::from(42)).unwrap(), 42);
        assert_eq!(f64::try_from(Value::from(2)).unwrap(), 2.0);
        assert!(bool::try_from(Value::Nil).is_err());
        assert_eq!(String::try_from(Value::from("s")).unwrap(), "s");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Nil);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_deserialize_from_json() {
        let value: Value = serde_json::from_str(r#"[1, -2.5, "x", null, {"k": false}]"#).unwrap();
        assert_eq!(to_string(&value).unwrap(), r#"[1 -2.5 "x" nil {"k" false}]"#);
    }
}
