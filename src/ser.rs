//! EDN serialization through serde.
//!
//! [`Serializer`] writes the same notation as the shape-driven encoder for
//! any `T: Serialize`, following serde's data model:
//!
//! - structs become maps with keyword keys: `{:x 1, :y 2}`
//! - unit variants become keywords: `:active`
//! - newtype, tuple and struct variants become `{:variant payload}`
//! - byte buffers become `#base64` literals
//! - `None` and `()` become `nil`
//!
//! [`Symbol`], [`Keyword`], [`Set`](crate::Set), [`Tagged`] and the extension
//! kinds of [`Value`] pass through serde as newtype structs with reserved
//! names. This serializer renders them natively; every other serde format sees
//! the plain string or sequence inside.
//!
//! ## Usage
//!
//! ```rust
//! use serde::Serialize;
//! use serde_edn::serialize;
//!
//! #[derive(Serialize)]
//! enum Status { Active, Suspended { days: u32 } }
//!
//! #[derive(Serialize)]
//! struct Account { id: u64, status: Status, tags: Vec<String> }
//!
//! let account = Account { id: 7, status: Status::Active, tags: vec!["new".into()] };
//! assert_eq!(serialize(&account).unwrap(), r#"{:id 7, :status :Active, :tags ["new"]}"#);
//!
//! let account = Account { id: 8, status: Status::Suspended { days: 3 }, tags: vec![] };
//! assert_eq!(
//!     serialize(&account).unwrap(),
//!     "{:id 8, :status {:Suspended {:days 3}}, :tags []}"
//! );
//! ```

use crate::session::Session;
use crate::{literal, Error, Keyword, Map, Result, Symbol, Tagged, Value};
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{ser, Serialize};

/// Reserved newtype struct names carrying EDN extension kinds through serde.
pub(crate) mod token {
    pub(crate) const PREFIX: &str = "$serde_edn::";
    pub(crate) const SYMBOL: &str = "$serde_edn::Symbol";
    pub(crate) const KEYWORD: &str = "$serde_edn::Keyword";
    pub(crate) const SET: &str = "$serde_edn::Set";
    pub(crate) const LIST: &str = "$serde_edn::List";
    pub(crate) const INST: &str = "$serde_edn::Inst";
    pub(crate) const UUID: &str = "$serde_edn::Uuid";
    pub(crate) const BIGINT: &str = "$serde_edn::BigInt";
    pub(crate) const TAGGED: &str = "$serde_edn::Tagged";
}

/// Rebuilds the extension value named by a reserved newtype from its payload.
fn extension(name: &str, payload: Value) -> Result<Value> {
    let value = match (name, payload) {
        (token::SYMBOL, Value::String(s)) => Value::Symbol(Symbol::from(s)),
        (token::KEYWORD, Value::String(s)) => Value::Keyword(Keyword::from(s)),
        (token::SET, Value::Vector(members)) => Value::Set(members.into_iter().collect()),
        (token::LIST, Value::Vector(items)) => Value::List(items.into_iter().collect()),
        (token::INST, Value::String(s)) => {
            let t = DateTime::parse_from_rfc3339(&s).map_err(Error::custom)?;
            Value::Instant(t.with_timezone(&Utc))
        }
        (token::UUID, Value::String(s)) => {
            Value::Uuid(uuid::Uuid::parse_str(&s).map_err(Error::custom)?)
        }
        (token::BIGINT, Value::String(s)) => {
            Value::BigInt(s.parse::<BigInt>().map_err(Error::custom)?)
        }
        (token::TAGGED, Value::Vector(parts)) => match parts.as_slice() {
            [Value::String(tag), Value::String(payload)] => {
                Value::Tagged(Tagged::new(tag.as_str(), payload.as_str()))
            }
            _ => return Err(Error::custom(format!("malformed {} payload", name))),
        },
        (name, other) => {
            return Err(Error::custom(format!(
                "malformed {} payload: {:?}",
                name, other
            )))
        }
    };
    Ok(value)
}

fn is_reserved(name: &str) -> bool {
    name.starts_with(token::PREFIX)
}

/// The EDN serializer.
///
/// Output accumulates in an internal [`Session`]; take it with
/// [`Serializer::into_inner`]. A failed serialization leaves partial output
/// behind, so discard the serializer after an error.
///
/// ```rust
/// use serde::Serialize;
/// use serde_edn::Serializer;
///
/// let mut serializer = Serializer::new();
/// vec![1, 2, 3].serialize(&mut serializer).unwrap();
/// assert_eq!(serializer.into_inner(), "[1 2 3]");
/// ```
#[derive(Debug, Default)]
pub struct Serializer {
    session: Session,
}

impl Serializer {
    pub fn new() -> Self {
        Serializer {
            session: Session::new(),
        }
    }

    pub fn into_inner(self) -> String {
        self.session.into_string()
    }

    pub(crate) fn with_session(session: Session) -> Self {
        Serializer { session }
    }

    pub(crate) fn into_session(self) -> Session {
        self.session
    }

    #[inline]
    fn out(&mut self) -> &mut String {
        self.session.out()
    }

    fn open_variant(&mut self, variant: &str) {
        self.out().push('{');
        literal::write_keyword(self.out(), variant);
        self.out().push(' ');
    }
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = SeqSerializer<'a>;
    type SerializeTuple = SeqSerializer<'a>;
    type SerializeTupleStruct = SeqSerializer<'a>;
    type SerializeTupleVariant = SeqSerializer<'a>;
    type SerializeMap = MapSerializer<'a>;
    type SerializeStruct = MapSerializer<'a>;
    type SerializeStructVariant = MapSerializer<'a>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        literal::write_bool(self.out(), v);
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.serialize_i128(i128::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.serialize_i128(i128::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.serialize_i128(i128::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.serialize_i128(i128::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        literal::write_signed(self.out(), v);
        Ok(())
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.serialize_u128(u128::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.serialize_u128(u128::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.serialize_u128(u128::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.serialize_u128(u128::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        literal::write_unsigned(self.out(), v);
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        literal::write_f32(self.out(), v)
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        literal::write_f64(self.out(), v)
    }

    fn serialize_char(self, v: char) -> Result<()> {
        literal::write_char(self.out(), v);
        Ok(())
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        literal::write_string(self.out(), v);
        Ok(())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        literal::write_base64(self.out(), v);
        Ok(())
    }

    fn serialize_none(self) -> Result<()> {
        self.serialize_unit()
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        self.out().push_str(literal::NIL);
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        literal::write_keyword(self.out(), variant);
        Ok(())
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if is_reserved(name) {
            let native = extension(name, to_value(value)?)?;
            return self.session.encode(&native);
        }
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.open_variant(variant);
        value.serialize(&mut *self)?;
        self.out().push('}');
        Ok(())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SeqSerializer<'a>> {
        self.out().push('[');
        Ok(SeqSerializer {
            ser: self,
            first: true,
            close: "]",
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqSerializer<'a>> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqSerializer<'a>> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SeqSerializer<'a>> {
        self.open_variant(variant);
        self.out().push('[');
        Ok(SeqSerializer {
            ser: self,
            first: true,
            close: "]}",
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapSerializer<'a>> {
        self.out().push('{');
        Ok(MapSerializer {
            ser: self,
            first: true,
            close: "}",
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<MapSerializer<'a>> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<MapSerializer<'a>> {
        self.open_variant(variant);
        self.out().push('{');
        Ok(MapSerializer {
            ser: self,
            first: true,
            close: "}}",
        })
    }
}

/// Writes the elements of a sequence, tuple or tuple variant.
pub struct SeqSerializer<'a> {
    ser: &'a mut Serializer,
    first: bool,
    close: &'static str,
}

impl SeqSerializer<'_> {
    fn element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        if !self.first {
            self.ser.out().push(' ');
        }
        self.first = false;
        value.serialize(&mut *self.ser)
    }

    fn finish(self) -> Result<()> {
        self.ser.out().push_str(self.close);
        Ok(())
    }
}

impl ser::SerializeSeq for SeqSerializer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeTuple for SeqSerializer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeTupleStruct for SeqSerializer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeTupleVariant for SeqSerializer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

/// Writes the entries of a map, struct or struct variant.
pub struct MapSerializer<'a> {
    ser: &'a mut Serializer,
    first: bool,
    close: &'static str,
}

impl MapSerializer<'_> {
    fn separate(&mut self) {
        if !self.first {
            self.ser.out().push_str(", ");
        }
        self.first = false;
    }

    fn field<T: ?Sized + Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        self.separate();
        literal::write_keyword(self.ser.out(), key);
        self.ser.out().push(' ');
        value.serialize(&mut *self.ser)
    }

    fn finish(self) -> Result<()> {
        self.ser.out().push_str(self.close);
        Ok(())
    }
}

impl ser::SerializeMap for MapSerializer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.separate();
        key.serialize(&mut *self.ser)
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.ser.out().push(' ');
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeStruct for MapSerializer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeStructVariant for MapSerializer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

/// Serializes any `T: Serialize` into a [`Value`].
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
    variant: Option<&'static str>,
}

pub struct SerializeMap {
    map: Map,
    current_key: Option<Value>,
    variant: Option<&'static str>,
}

fn variant_map(variant: &'static str, payload: Value) -> Value {
    let mut map = Map::with_capacity(1);
    map.insert(Value::Keyword(Keyword::new(variant)), payload);
    Value::Map(map)
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::Char(v))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Bytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Nil)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Nil)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Nil)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::Keyword(Keyword::new(variant)))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let inner = value.serialize(ValueSerializer)?;
        if is_reserved(name) {
            return extension(name, inner);
        }
        Ok(inner)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(variant_map(variant, to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0), None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, Some(variant)))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0), None))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, Some(variant)))
    }
}

impl SerializeVec {
    fn new(len: usize, variant: Option<&'static str>) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(len),
            variant,
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn finish(self) -> Value {
        let vector = Value::Vector(self.vec);
        match self.variant {
            Some(variant) => variant_map(variant, vector),
            None => vector,
        }
    }
}

impl SerializeMap {
    fn new(len: usize, variant: Option<&'static str>) -> Self {
        SerializeMap {
            map: Map::with_capacity(len),
            current_key: None,
            variant,
        }
    }

    fn field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<()> {
        self.map
            .insert(Value::Keyword(Keyword::new(key)), to_value(value)?);
        Ok(())
    }

    fn finish(self) -> Value {
        let map = Value::Map(self.map);
        match self.variant {
            Some(variant) => variant_map(variant, map),
            None => map,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(to_value(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

/// Converts any `T: Serialize` into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_edn::{to_value, Keyword, Value};
///
/// #[derive(serde::Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// let map = value.as_map().unwrap();
/// assert_eq!(map.get(&Value::from(Keyword::new("x"))), Some(&Value::from(1)));
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{serialize, Set};
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    enum Figure {
        Dot,
        Circle(f64),
        Rect(u32, u32),
        Poly { sides: u8 },
    }

    #[test]
    fn test_variants() {
        assert_eq!(serialize(&Figure::Dot).unwrap(), ":Dot");
        assert_eq!(serialize(&Figure::Circle(1.5)).unwrap(), "{:Circle 1.5}");
        assert_eq!(serialize(&Figure::Rect(2, 3)).unwrap(), "{:Rect [2 3]}");
        assert_eq!(serialize(&Figure::Poly { sides: 5 }).unwrap(), "{:Poly {:sides 5}}");
    }

    #[test]
    fn test_variants_through_value_match_direct_output() {
        for figure in [Figure::Dot, Figure::Circle(1.5), Figure::Rect(2, 3), Figure::Poly { sides: 5 }] {
            let direct = serialize(&figure).unwrap();
            let via_value = crate::to_string(&to_value(&figure).unwrap()).unwrap();
            assert_eq!(direct, via_value);
        }
    }

    #[test]
    fn test_map_keys_are_not_restricted_to_strings() {
        let mut map = BTreeMap::new();
        map.insert(1, "one");
        map.insert(2, "two");
        assert_eq!(serialize(&map).unwrap(), r#"{1 "one", 2 "two"}"#);
    }

    #[test]
    fn test_reserved_newtypes_render_natively() {
        let set: Set<Symbol> = [Symbol::new("a"), Symbol::new("b")].into_iter().collect();
        assert_eq!(serialize(&set).unwrap(), "#{a b}");
        assert_eq!(serialize(&Keyword::new("k")).unwrap(), ":k");
        assert_eq!(
            serialize(&Tagged::new("app/id", "x1")).unwrap(),
            r#"#app/id "x1""#
        );
    }

    #[test]
    fn test_reserved_newtypes_are_transparent_elsewhere() {
        let json = serde_json::to_string(&Keyword::new("k")).unwrap();
        assert_eq!(json, r#""k""#);
        let json = serde_json::to_string(&Set::new().with(1).with(2)).unwrap();
        assert_eq!(json, "[1,2]");
    }

    #[test]
    fn test_malformed_reserved_payload() {
        #[derive(Serialize)]
        #[serde(rename = "$serde_edn::Uuid")]
        struct NotAUuid(&'static str);

        assert!(matches!(serialize(&NotAUuid("nope")), Err(Error::Custom(_))));
    }

    #[test]
    fn test_non_finite_float_fails() {
        assert!(matches!(
            serialize(&vec![1.0, f64::NAN]),
            Err(Error::UnsupportedValue(_))
        ));
    }

    #[test]
    fn test_f32_keeps_short_digits_through_value() {
        assert_eq!(to_value(&3.14f32).unwrap(), Value::Float(3.14));
    }
}
