//! Shape descriptions: how a Rust type presents itself to the encoder.
//!
//! Every encodable type implements [`Edn`], whose single associated function
//! returns a [`Shape`]: the category of the type (boolean, map, optional, ...)
//! together with plain `fn` accessors that reach into a value of that type.
//! Shapes are data, not behavior. The classifier turns a shape into a renderer
//! the first time the type is seen, and the encoder cache keeps that renderer
//! for the rest of the process.
//!
//! Composite shapes refer to their children by [`ShapeId`] and hand values out
//! as `&dyn Any`, so a type may mention itself (directly or through other
//! types) without the description recursing.
//!
//! ## Implementing `Edn`
//!
//! ```rust
//! use serde_edn::{elems, to_string, Edn, SeqShape, Shape};
//!
//! // A tree whose only content is its children.
//! struct Tree(Vec<Tree>);
//!
//! impl Edn for Tree {
//!     fn shape() -> Shape<Self> {
//!         Shape::Vector(SeqShape::of::<Tree>(|t| elems(t.0.iter())))
//!     }
//! }
//!
//! let tree = Tree(vec![Tree(vec![]), Tree(vec![Tree(vec![])])]);
//! assert_eq!(to_string(&tree).unwrap(), "[[] [[]]]");
//! ```
//!
//! Structs usually go through [`edn_record!`](crate::edn_record) and types
//! with their own textual form through [`edn_text!`](crate::edn_text).

use crate::cache::Renderer;
use crate::classify;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Error type returned by [`ToEdnText`] implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Type-erased iterator over the elements of a sequence or set.
pub type Elems<'a> = Box<dyn Iterator<Item = &'a dyn Any> + 'a>;

/// Type-erased iterator over the entries of a map.
pub type Entries<'a> = Box<dyn Iterator<Item = (&'a dyn Any, &'a dyn Any)> + 'a>;

/// A type that can be encoded as EDN.
///
/// `shape` is called once per type per process; its result is compiled into a
/// renderer and cached. If it panics nothing is cached, and the next encode of
/// the type calls it again.
pub trait Edn: Reflect {
    fn shape() -> Shape<Self>
    where
        Self: Sized;
}

/// Object-safe access to a value's shape, used by `dyn Edn` slots.
///
/// Blanket implemented for every [`Edn`] type; never implement it by hand.
pub trait Reflect: Any {
    fn shape_id(&self) -> ShapeId;
    fn as_any(&self) -> &dyn Any;
}

impl<T: Edn> Reflect for T {
    fn shape_id(&self) -> ShapeId {
        ShapeId::of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A custom textual form, rendered as an EDN string.
///
/// The narrow capability behind [`Shape::Text`]: produce the text or fail.
/// A failure aborts the whole encode with [`Error::Extension`](crate::Error::Extension).
///
/// # Examples
///
/// ```rust
/// use serde_edn::{edn_text, to_string, BoxError, ToEdnText};
///
/// struct Version(u32, u32);
///
/// impl ToEdnText for Version {
///     fn to_edn_text(&self) -> Result<String, BoxError> {
///         Ok(format!("v{}.{}", self.0, self.1))
///     }
/// }
/// edn_text!(Version);
///
/// assert_eq!(to_string(&Version(1, 2)).unwrap(), r#""v1.2""#);
/// ```
pub trait ToEdnText {
    fn to_edn_text(&self) -> Result<String, BoxError>;
}

/// Stable identity of a shape: the key of the encoder cache.
#[derive(Clone, Copy)]
pub struct ShapeId {
    id: TypeId,
    name: &'static str,
    compile: fn() -> Renderer,
}

impl ShapeId {
    /// The identity of `T`'s shape.
    #[must_use]
    pub fn of<T: Edn>() -> Self {
        ShapeId {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            compile: classify::compile::<T>,
        }
    }

    /// The Rust type name, used in error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if this is the shape of `T`.
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    pub(crate) fn type_id(&self) -> TypeId {
        self.id
    }

    pub(crate) fn compile(&self) -> Renderer {
        (self.compile)()
    }
}

impl PartialEq for ShapeId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ShapeId {}

impl Hash for ShapeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ShapeId").field(&self.name).finish()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The category of a type, with accessors into values of that type.
///
/// Variants are listed in the order the classifier considers them.
pub enum Shape<T> {
    /// Always `nil`.
    Nil,
    /// `#inst "..."`; the accessor normalizes to UTC.
    Instant(fn(&T) -> DateTime<Utc>),
    /// `#uuid "..."`.
    Uuid(fn(&T) -> uuid::Uuid),
    /// Bare symbol, emitted verbatim.
    Symbol(for<'a> fn(&'a T) -> &'a str),
    /// `:name`; the colon is added only when missing.
    Keyword(for<'a> fn(&'a T) -> &'a str),
    /// `#tag "payload"`: the tag and the unescaped payload.
    Tagged(for<'a> fn(&'a T) -> (&'a str, &'a str)),
    /// Custom textual form, rendered as a string literal.
    Text(fn(&T) -> Result<String, BoxError>),
    Bool(fn(&T) -> bool),
    Signed(fn(&T) -> i128),
    Unsigned(fn(&T) -> u128),
    /// Arbitrary precision integer, `N` suffixed.
    BigInt(for<'a> fn(&'a T) -> &'a BigInt),
    Float32(fn(&T) -> f32),
    Float64(fn(&T) -> f64),
    Char(fn(&T) -> char),
    String(for<'a> fn(&'a T) -> &'a str),
    /// Pointer-like: `nil` when absent, else the referenced shape.
    Optional(RefShape<T>),
    /// Polymorphic slot, resolved per value at encode time.
    Dynamic(for<'a> fn(&'a T) -> Option<&'a dyn Edn>),
    Map(MapShape<T>),
    Set(SeqShape<T>),
    /// Variable-length sequence. Byte elements make it a `#base64` blob.
    Vector(SeqShape<T>),
    /// Fixed-length sequence, always a vector.
    Array(SeqShape<T>),
    /// Linked list, rendered with parentheses.
    List(SeqShape<T>),
    /// Named fields, rendered as a map with keyword keys.
    Record(Vec<Field<T>>),
    /// Positional fields, rendered as a vector.
    Tuple(Vec<Field<T>>),
    /// No EDN production; encoding a value of this shape fails.
    Unsupported,
}

impl<T: ToEdnText> Shape<T> {
    /// The [`Shape::Text`] of a [`ToEdnText`] type.
    #[must_use]
    pub fn text() -> Self {
        Shape::Text(<T as ToEdnText>::to_edn_text)
    }
}

/// Reference to a single optional child value.
pub struct RefShape<T> {
    pub inner: ShapeId,
    pub get: for<'a> fn(&'a T) -> Option<&'a dyn Any>,
}

impl<T> RefShape<T> {
    /// `get` must only hand out values of type `U`.
    #[must_use]
    pub fn of<U: Edn>(get: for<'a> fn(&'a T) -> Option<&'a dyn Any>) -> Self {
        RefShape {
            inner: ShapeId::of::<U>(),
            get,
        }
    }
}

/// Elements of a homogeneous sequence or set.
pub struct SeqShape<T> {
    pub elem: ShapeId,
    pub elems: for<'a> fn(&'a T) -> Elems<'a>,
}

impl<T> SeqShape<T> {
    /// `elems` must only yield values of type `E`; build it with [`elems`].
    #[must_use]
    pub fn of<E: Edn>(elems: for<'a> fn(&'a T) -> Elems<'a>) -> Self {
        SeqShape {
            elem: ShapeId::of::<E>(),
            elems,
        }
    }
}

/// Entries of a homogeneous map.
pub struct MapShape<T> {
    pub key: ShapeId,
    pub value: ShapeId,
    pub entries: for<'a> fn(&'a T) -> Entries<'a>,
}

impl<T> MapShape<T> {
    /// `entries` must only yield `(K, V)` pairs; build it with [`entries`].
    #[must_use]
    pub fn of<K: Edn, V: Edn>(entries: for<'a> fn(&'a T) -> Entries<'a>) -> Self {
        MapShape {
            key: ShapeId::of::<K>(),
            value: ShapeId::of::<V>(),
            entries,
        }
    }
}

/// One field of a record or tuple.
pub struct Field<T> {
    pub name: &'static str,
    pub shape: ShapeId,
    pub get: for<'a> fn(&'a T) -> &'a dyn Any,
}

impl<T> Field<T> {
    /// A named field of type `F`.
    #[must_use]
    pub fn new<F: Edn>(name: &'static str, get: for<'a> fn(&'a T) -> &'a dyn Any) -> Self {
        Field {
            name,
            shape: ShapeId::of::<F>(),
            get,
        }
    }

    /// An unnamed field of type `F`.
    #[must_use]
    pub fn positional<F: Edn>(get: for<'a> fn(&'a T) -> &'a dyn Any) -> Self {
        Self::new::<F>("", get)
    }
}

/// Erases an iterator of `&E` for [`SeqShape`].
pub fn elems<'a, E: Edn>(iter: impl Iterator<Item = &'a E> + 'a) -> Elems<'a> {
    Box::new(iter.map(|e| e as &dyn Any))
}

/// Erases an iterator of `(&K, &V)` for [`MapShape`].
pub fn entries<'a, K: Edn, V: Edn>(iter: impl Iterator<Item = (&'a K, &'a V)> + 'a) -> Entries<'a> {
    Box::new(iter.map(|(k, v)| (k as &dyn Any, v as &dyn Any)))
}
