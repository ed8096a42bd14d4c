//! The encode session: an output accumulator plus the encode entry point.

use crate::cache;
use crate::shape::{Edn, ShapeId};
use crate::Result;
use std::any::Any;

/// An append-only EDN output buffer.
///
/// A session may encode several values in a row; each [`Session::encode`]
/// either appends one complete value or leaves the buffer as it was.
///
/// # Examples
///
/// ```rust
/// use serde_edn::Session;
///
/// let mut session = Session::new();
/// session.encode(&vec![1, 2, 3]).unwrap();
/// assert!(session.encode(&f64::INFINITY).is_err());
/// assert_eq!(session.as_str(), "[1 2 3]");
/// ```
#[derive(Debug, Default)]
pub struct Session {
    output: String,
}

impl Session {
    pub fn new() -> Self {
        Session {
            output: String::with_capacity(128),
        }
    }

    /// Appends the EDN form of `value`.
    ///
    /// # Errors
    ///
    /// Returns the first failure raised anywhere in the value; nothing written
    /// by this call is kept.
    pub fn encode<T: Edn>(&mut self, value: &T) -> Result<()> {
        let start = self.output.len();
        let render = cache::renderer(ShapeId::of::<T>());
        if let Err(err) = render(self, value as &dyn Any) {
            self.output.truncate(start);
            return Err(err);
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.output.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Empties the buffer, keeping its allocation.
    pub fn clear(&mut self) {
        self.output.clear();
    }

    pub fn into_string(self) -> String {
        self.output
    }

    pub(crate) fn out(&mut self) -> &mut String {
        &mut self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_failure_discards_partial_output() {
        let mut session = Session::new();
        session.encode(&"kept".to_string()).unwrap();

        let err = session.encode(&vec![1.0, 2.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedValue(_)));
        assert_eq!(session.as_str(), r#""kept""#);
    }

    #[test]
    fn test_clear_keeps_session_usable() {
        let mut session = Session::new();
        session.encode(&true).unwrap();
        session.clear();
        assert!(session.is_empty());
        session.encode(&false).unwrap();
        assert_eq!(session.into_string(), "false");
    }
}
