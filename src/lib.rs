//! # serde_edn
//!
//! A type-driven encoder for EDN, the extensible data notation used by Clojure and Datomic.
//!
//! ## What is EDN?
//!
//! EDN reads like JSON with a few more literal forms: vectors `[1 2]` and lists `(1 2)`,
//! sets `#{1 2}`, keywords `:name`, bare symbols, and tagged literals such as
//! `#inst "2014-03-14T15:59:59Z"` or `#uuid "..."`.
//!
//! ## Key Features
//!
//! - **Shape Driven**: every encodable type describes its category once through [`Edn`];
//!   the renderer compiled from that description is cached for the whole process
//! - **Recursive Types**: a node holding a vector of nodes compiles on first use without
//!   unbounded recursion
//! - **Serde Compatible**: any `T: Serialize` can be written with [`serialize`]
//! - **Strict**: `NaN`, infinities, channels, locks and callables fail instead of producing
//!   something a reader would misinterpret
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_edn::{to_string, Keyword, Set};
//!
//! assert_eq!(to_string(&vec![1, 2, 3]).unwrap(), "[1 2 3]");
//! assert_eq!(to_string(&Keyword::new("answer")).unwrap(), ":answer");
//!
//! let set = Set::new().with(2).with(2).with(-3);
//! assert_eq!(to_string(&set).unwrap(), "#{2 -3}");
//! ```
//!
//! ### Records
//!
//! ```rust
//! use serde_edn::{edn_record, to_string};
//!
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! edn_record!(User { id: u32, name: String });
//!
//! let user = User { id: 7, name: "Ada".to_string() };
//! assert_eq!(to_string(&user).unwrap(), r#"{:id 7, :name "Ada"}"#);
//! ```
//!
//! ### Through Serde
//!
//! ```rust
//! use serde::Serialize;
//! use serde_edn::serialize;
//!
//! #[derive(Serialize)]
//! enum Event {
//!     Started,
//!     Moved { x: i32, y: i32 },
//! }
//!
//! assert_eq!(serialize(&Event::Started).unwrap(), ":Started");
//! assert_eq!(
//!     serialize(&Event::Moved { x: 1, y: -1 }).unwrap(),
//!     "{:Moved {:x 1, :y -1}}"
//! );
//! ```
//!
//! ### Dynamic Values with edn! Macro
//!
//! ```rust
//! use serde_edn::{edn, to_string};
//!
//! let value = edn!(["a", #{1}, { "k" => nil }]);
//! assert_eq!(to_string(&value).unwrap(), r#"["a" #{1} {"k" nil}]"#);
//! ```
//!
//! ## Output Conventions
//!
//! - Vector, list and set elements are separated by one space
//! - Map entries are separated by `", "`, key and value by one space
//! - Maps and sets keep the iteration order of the container they came from
//! - Floats use the shortest digits that round-trip, switching to exponent form outside
//!   `1e-4..1e6`
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Scalars, collections and extension literals
//! - **`records.rs`** - Recursive records and custom textual forms
//! - **`stream.rs`** - Newline-delimited output with [`StreamWriter`]
//!
//! Run any example with: `cargo run --example <name>`

mod cache;
mod classify;
pub mod error;
mod impls;
mod literal;
pub mod macros;
pub mod map;
mod render;
pub mod ser;
mod session;
pub mod shape;
pub mod stream;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use map::Map;
pub use ser::{to_value, Serializer, ValueSerializer};
pub use session::Session;
pub use shape::{
    elems, entries, BoxError, Edn, Elems, Entries, Field, MapShape, RefShape, Reflect,
    SeqShape, Shape, ShapeId, ToEdnText,
};
pub use stream::StreamWriter;
pub use types::{KMap, Keyword, Set, Symbol, Tagged};
pub use value::Value;

use serde::Serialize;
use std::io;

/// Encode any `T: Edn` to an EDN string.
///
/// # Examples
///
/// ```rust
/// use serde_edn::to_string;
///
/// assert_eq!(to_string(&(1, "two", 3.0)).unwrap(), r#"[1 "two" 3]"#);
/// assert_eq!(to_string(&None::<u8>).unwrap(), "nil");
/// ```
///
/// # Errors
///
/// Returns an error if the type or any value inside it has no EDN form.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T: Edn>(value: &T) -> Result<String> {
    let mut session = Session::new();
    session.encode(value)?;
    Ok(session.into_string())
}

/// Encode any `T: Edn` to EDN bytes.
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec<T: Edn>(value: &T) -> Result<Vec<u8>> {
    to_string(value).map(String::into_bytes)
}

/// Encode any `T: Edn` to a writer.
///
/// The value is rendered completely before anything is written, so an encoding
/// failure leaves the writer untouched.
///
/// # Examples
///
/// ```rust
/// use serde_edn::{to_writer, Symbol};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Symbol::new("user/name")).unwrap();
/// assert_eq!(buffer, b"user/name");
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: Edn,
{
    let mut session = Session::new();
    session.encode(value)?;
    writer
        .write_all(session.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Serialize any `T: Serialize` to an EDN string.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_edn::serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(serialize(&Point { x: 1, y: 2 }).unwrap(), "{:x 1, :y 2}");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (non-finite floats, or a
/// `Serialize` implementation that fails).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new();
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Serialize any `T: Serialize` to a writer in EDN.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize_to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let edn = serialize(value)?;
    writer
        .write_all(edn.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
