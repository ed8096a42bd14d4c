//! The shape classifier: turns a [`Shape`] into the renderer for its type.
//!
//! Called by the cache, once per type. The match arms run in the order the
//! categories must be tried; the byte-blob guard sits ahead of the generic
//! sequence arm because a blob is structurally a sequence.

use crate::cache::Renderer;
use crate::literal;
use crate::render::{self, erase};
use crate::shape::{Edn, Shape};
use crate::Error;
use std::any::type_name;

/// Compiles the renderer for `T`. The [`ShapeId`](crate::ShapeId) compile hook.
pub(crate) fn compile<T: Edn>() -> Renderer {
    classify(T::shape())
}

fn classify<T: Edn>(shape: Shape<T>) -> Renderer {
    match shape {
        Shape::Nil => erase::<T>(|session, _| {
            session.out().push_str(literal::NIL);
            Ok(())
        }),
        Shape::Instant(get) => erase::<T>(move |session, value| {
            literal::write_instant(session.out(), &get(value));
            Ok(())
        }),
        Shape::Uuid(get) => erase::<T>(move |session, value| {
            literal::write_uuid(session.out(), &get(value));
            Ok(())
        }),
        Shape::Symbol(get) => erase::<T>(move |session, value| {
            literal::write_symbol(session.out(), get(value));
            Ok(())
        }),
        Shape::Keyword(get) => erase::<T>(move |session, value| {
            literal::write_keyword(session.out(), get(value));
            Ok(())
        }),
        Shape::Tagged(get) => erase::<T>(move |session, value| {
            let (tag, payload) = get(value);
            literal::write_tagged(session.out(), tag, payload);
            Ok(())
        }),
        Shape::Text(get) => erase::<T>(move |session, value| match get(value) {
            Ok(text) => {
                literal::write_string(session.out(), &text);
                Ok(())
            }
            Err(cause) => Err(Error::extension(type_name::<T>(), cause)),
        }),
        Shape::Bool(get) => erase::<T>(move |session, value| {
            literal::write_bool(session.out(), get(value));
            Ok(())
        }),
        Shape::Signed(get) => erase::<T>(move |session, value| {
            literal::write_signed(session.out(), get(value));
            Ok(())
        }),
        Shape::Unsigned(get) => erase::<T>(move |session, value| {
            literal::write_unsigned(session.out(), get(value));
            Ok(())
        }),
        Shape::BigInt(get) => erase::<T>(move |session, value| {
            literal::write_bigint(session.out(), get(value));
            Ok(())
        }),
        Shape::Float32(get) => {
            erase::<T>(move |session, value| literal::write_f32(session.out(), get(value)))
        }
        Shape::Float64(get) => {
            erase::<T>(move |session, value| literal::write_f64(session.out(), get(value)))
        }
        Shape::Char(get) => erase::<T>(move |session, value| {
            literal::write_char(session.out(), get(value));
            Ok(())
        }),
        Shape::String(get) => erase::<T>(move |session, value| {
            literal::write_string(session.out(), get(value));
            Ok(())
        }),
        Shape::Optional(reference) => render::optional(reference),
        Shape::Dynamic(get) => render::dynamic(get),
        Shape::Map(map) => render::map(map),
        Shape::Set(seq) => render::set(seq),
        Shape::Vector(seq) if seq.elem.is::<u8>() => render::bytes(seq),
        Shape::Vector(seq) | Shape::Array(seq) => render::vector(seq),
        Shape::List(seq) => render::list(seq),
        Shape::Record(fields) => render::record(fields),
        Shape::Tuple(fields) => render::tuple(fields),
        Shape::Unsupported => {
            let name = type_name::<T>();
            erase::<T>(move |_, _| Err(Error::unsupported_type(name)))
        }
    }
}
