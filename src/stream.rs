//! Newline-delimited EDN output to an `io::Write` sink.

use crate::session::Session;
use crate::ser::Serializer;
use crate::shape::Edn;
use crate::{Error, Result};
use serde::Serialize;
use std::io;
use std::mem;
use tracing::warn;

/// Writes one EDN value per line to a sink.
///
/// Every call renders into a buffer owned by the writer, so a value that fails
/// to encode writes nothing. Once the sink itself fails, the writer is closed:
/// that same error is returned by every later call without touching the sink.
///
/// # Examples
///
/// ```rust
/// use serde_edn::{Set, StreamWriter};
///
/// let mut writer = StreamWriter::new(Vec::new());
/// writer.encode(&0.1).unwrap();
/// writer.encode(&"hello").unwrap();
/// writer.encode(&Set::new().with(1).with(2)).unwrap();
///
/// assert!(writer.encode(&f64::NAN).is_err());
/// writer.encode(&None::<i32>).unwrap();
///
/// let out = String::from_utf8(writer.into_inner()).unwrap();
/// assert_eq!(out, "0.1\n\"hello\"\n#{1 2}\nnil\n");
/// ```
#[derive(Debug)]
pub struct StreamWriter<W: io::Write> {
    sink: W,
    session: Session,
    failed: Option<Error>,
}

impl<W: io::Write> StreamWriter<W> {
    pub fn new(sink: W) -> Self {
        StreamWriter {
            sink,
            session: Session::new(),
            failed: None,
        }
    }

    /// Encodes `value` and writes it followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns the encoding error for this value, or the sink error that
    /// closed the writer.
    pub fn encode<T: Edn>(&mut self, value: &T) -> Result<()> {
        self.check()?;
        self.session.clear();
        self.session.encode(value)?;
        self.write_line()
    }

    /// Serializes `value` through serde and writes it followed by a newline.
    ///
    /// # Errors
    ///
    /// Same as [`StreamWriter::encode`].
    pub fn serialize<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.check()?;
        self.session.clear();
        let mut serializer = Serializer::with_session(mem::take(&mut self.session));
        let result = value.serialize(&mut serializer);
        self.session = serializer.into_session();
        result?;
        self.write_line()
    }

    /// Flushes the sink.
    pub fn flush(&mut self) -> Result<()> {
        self.check()?;
        let result = self.sink.flush();
        result.map_err(|e| self.close(e))
    }

    /// Returns `true` once the sink has failed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.failed.is_some()
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn check(&self) -> Result<()> {
        match &self.failed {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn write_line(&mut self) -> Result<()> {
        self.session.out().push('\n');
        let result = self.sink.write_all(self.session.as_bytes());
        result.map_err(|e| self.close(e))
    }

    fn close(&mut self, cause: io::Error) -> Error {
        warn!(error = %cause, "edn stream sink failed, closing writer");
        let err = Error::io(&cause.to_string());
        self.failed = Some(err.clone());
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    struct Broken {
        attempts: usize,
    }

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_is_sticky() {
        let mut writer = StreamWriter::new(Broken { attempts: 0 });
        let first = writer.encode(&1).unwrap_err();
        assert!(matches!(first, Error::Io(ref msg) if msg.contains("pipe closed")));
        assert!(writer.is_closed());

        let second = writer.encode(&2).unwrap_err();
        assert_eq!(first, second);
        assert_eq!(writer.serialize(&3).unwrap_err(), first);
        assert_eq!(writer.get_ref().attempts, 1);
    }

    #[test]
    fn test_encode_failure_does_not_close() {
        let mut writer = StreamWriter::new(Vec::new());
        assert!(matches!(
            writer.encode(&vec![f32::NAN]),
            Err(Error::UnsupportedValue(_))
        ));
        assert!(!writer.is_closed());
        writer.encode(&true).unwrap();
        assert_eq!(writer.get_ref().as_slice(), b"true\n");
    }

    #[test]
    fn test_serialize_reuses_buffer() {
        let mut writer = StreamWriter::new(Vec::new());
        writer.serialize(&vec!["a", "b", "c"]).unwrap();
        writer.serialize(&Some(3.14)).unwrap();
        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(out, "[\"a\" \"b\" \"c\"]\n3.14\n");
    }
}
