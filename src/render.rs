//! Structural renderers: composites that delegate each child to the renderer
//! compiled for the child's shape.
//!
//! Child renderers are fetched from the cache when the parent is compiled, so a
//! recursive shape captures the pending indirection of its own entry.

use crate::cache::{self, Renderer};
use crate::literal;
use crate::session::Session;
use crate::shape::{Edn, Elems, Field, MapShape, RefShape, SeqShape};
use crate::{Error, Result};
use std::any::{type_name, Any};
use std::sync::Arc;

/// Wraps a typed render function as a [`Renderer`] over `&dyn Any`.
pub(crate) fn erase<T: Edn>(
    render: impl Fn(&mut Session, &T) -> Result<()> + Send + Sync + 'static,
) -> Renderer {
    Arc::new(move |session: &mut Session, value: &dyn Any| match value.downcast_ref::<T>() {
        Some(value) => render(session, value),
        None => Err(Error::shape_mismatch(
            type_name::<T>(),
            &format!("{:?}", value.type_id()),
        )),
    })
}

fn delimited(
    session: &mut Session,
    open: &str,
    close: char,
    items: Elems<'_>,
    render: &Renderer,
) -> Result<()> {
    session.out().push_str(open);
    for (i, item) in items.enumerate() {
        if i > 0 {
            session.out().push(' ');
        }
        render(session, item)?;
    }
    session.out().push(close);
    Ok(())
}

/// `[a b c]`, for vectors, arrays and tuples of one element type.
pub(crate) fn vector<T: Edn>(seq: SeqShape<T>) -> Renderer {
    let elem = cache::renderer(seq.elem);
    let elems = seq.elems;
    erase::<T>(move |session, value| delimited(session, "[", ']', elems(value), &elem))
}

/// `(a b c)`.
pub(crate) fn list<T: Edn>(seq: SeqShape<T>) -> Renderer {
    let elem = cache::renderer(seq.elem);
    let elems = seq.elems;
    erase::<T>(move |session, value| delimited(session, "(", ')', elems(value), &elem))
}

/// `#{a b c}`, members in the container's own order.
pub(crate) fn set<T: Edn>(seq: SeqShape<T>) -> Renderer {
    let elem = cache::renderer(seq.elem);
    let elems = seq.elems;
    erase::<T>(move |session, value| delimited(session, "#{", '}', elems(value), &elem))
}

/// A variable-length sequence of `u8` as one `#base64` literal.
pub(crate) fn bytes<T: Edn>(seq: SeqShape<T>) -> Renderer {
    let elems = seq.elems;
    erase::<T>(move |session, value| {
        if let Some(vec) = (value as &dyn Any).downcast_ref::<Vec<u8>>() {
            literal::write_base64(session.out(), vec);
            return Ok(());
        }
        let mut buf = Vec::new();
        for item in elems(value) {
            match item.downcast_ref::<u8>() {
                Some(byte) => buf.push(*byte),
                None => {
                    return Err(Error::shape_mismatch(
                        "u8",
                        &format!("{:?}", item.type_id()),
                    ))
                }
            }
        }
        literal::write_base64(session.out(), &buf);
        Ok(())
    })
}

/// `{k v, k v}`. Keys go through their own renderer and need not be text.
pub(crate) fn map<T: Edn>(shape: MapShape<T>) -> Renderer {
    let key = cache::renderer(shape.key);
    let val = cache::renderer(shape.value);
    let entries = shape.entries;
    erase::<T>(move |session, value| {
        session.out().push('{');
        for (i, (k, v)) in entries(value).enumerate() {
            if i > 0 {
                session.out().push_str(", ");
            }
            key(session, k)?;
            session.out().push(' ');
            val(session, v)?;
        }
        session.out().push('}');
        Ok(())
    })
}

/// `nil` when the reference is absent, otherwise the referent.
pub(crate) fn optional<T: Edn>(shape: RefShape<T>) -> Renderer {
    let inner = cache::renderer(shape.inner);
    let get = shape.get;
    erase::<T>(move |session, value| match get(value) {
        Some(referent) => inner(session, referent),
        None => {
            session.out().push_str(literal::NIL);
            Ok(())
        }
    })
}

/// Looks the renderer up per value from the payload's own shape.
pub(crate) fn dynamic<T: Edn>(get: for<'a> fn(&'a T) -> Option<&'a dyn Edn>) -> Renderer {
    erase::<T>(move |session, value| match get(value) {
        Some(payload) => {
            let render = cache::renderer(payload.shape_id());
            render(session, payload.as_any())
        }
        None => {
            session.out().push_str(literal::NIL);
            Ok(())
        }
    })
}

struct Compiled<T> {
    name: &'static str,
    get: for<'a> fn(&'a T) -> &'a dyn Any,
    render: Renderer,
}

fn compile_fields<T>(fields: Vec<Field<T>>) -> Vec<Compiled<T>> {
    fields
        .into_iter()
        .map(|field| Compiled {
            name: field.name,
            get: field.get,
            render: cache::renderer(field.shape),
        })
        .collect()
}

/// `{:field value, ...}` in declaration order.
pub(crate) fn record<T: Edn>(fields: Vec<Field<T>>) -> Renderer {
    let fields = compile_fields(fields);
    erase::<T>(move |session, value| {
        session.out().push('{');
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                session.out().push_str(", ");
            }
            literal::write_keyword(session.out(), field.name);
            session.out().push(' ');
            (field.render)(session, (field.get)(value))?;
        }
        session.out().push('}');
        Ok(())
    })
}

/// Positional fields as a vector.
pub(crate) fn tuple<T: Edn>(fields: Vec<Field<T>>) -> Renderer {
    let fields = compile_fields(fields);
    erase::<T>(move |session, value| {
        session.out().push('[');
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                session.out().push(' ');
            }
            (field.render)(session, (field.get)(value))?;
        }
        session.out().push(']');
        Ok(())
    })
}
