//! [`Edn`] for primitives, std containers, and the ecosystem types the
//! notation has literals for.

use crate::shape::{elems, entries, Edn, Field, MapShape, RefShape, SeqShape, Shape};
use chrono::{DateTime, TimeZone, Utc};
use indexmap::{IndexMap, IndexSet};
use num_bigint::BigInt;
use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::{mpsc, Arc, Mutex, RwLock};
use std::time::SystemTime;

macro_rules! signed {
    ($($t:ty)*) => {$(
        impl Edn for $t {
            fn shape() -> Shape<Self> {
                Shape::Signed(|v| *v as i128)
            }
        }
    )*};
}

macro_rules! unsigned {
    ($($t:ty)*) => {$(
        impl Edn for $t {
            fn shape() -> Shape<Self> {
                Shape::Unsigned(|v| *v as u128)
            }
        }
    )*};
}

signed!(i8 i16 i32 i64 i128 isize);
unsigned!(u8 u16 u32 u64 u128 usize);

impl Edn for bool {
    fn shape() -> Shape<Self> {
        Shape::Bool(|b| *b)
    }
}

impl Edn for f32 {
    fn shape() -> Shape<Self> {
        Shape::Float32(|v| *v)
    }
}

impl Edn for f64 {
    fn shape() -> Shape<Self> {
        Shape::Float64(|v| *v)
    }
}

impl Edn for char {
    fn shape() -> Shape<Self> {
        Shape::Char(|c| *c)
    }
}

impl Edn for String {
    fn shape() -> Shape<Self> {
        Shape::String(String::as_str)
    }
}

fn static_str<'a>(s: &'a &'static str) -> &'a str {
    s
}

impl Edn for &'static str {
    fn shape() -> Shape<Self> {
        Shape::String(static_str)
    }
}

impl Edn for () {
    fn shape() -> Shape<Self> {
        Shape::Nil
    }
}

impl Edn for BigInt {
    fn shape() -> Shape<Self> {
        Shape::BigInt(bigint)
    }
}

fn bigint(b: &BigInt) -> &BigInt {
    b
}

impl<Tz> Edn for DateTime<Tz>
where
    Tz: TimeZone + 'static,
{
    fn shape() -> Shape<Self> {
        Shape::Instant(|t| t.with_timezone(&Utc))
    }
}

impl Edn for SystemTime {
    fn shape() -> Shape<Self> {
        Shape::Instant(|t| DateTime::<Utc>::from(*t))
    }
}

impl Edn for uuid::Uuid {
    fn shape() -> Shape<Self> {
        Shape::Uuid(|id| *id)
    }
}

// Pointer-like types: nil when absent, otherwise the referent.

impl<T: Edn> Edn for Option<T> {
    fn shape() -> Shape<Self> {
        Shape::Optional(RefShape::of::<T>(|o| o.as_ref().map(|v| v as &dyn Any)))
    }
}

impl<T: Edn> Edn for Box<T> {
    fn shape() -> Shape<Self> {
        Shape::Optional(RefShape::of::<T>(|b| Some(&**b as &dyn Any)))
    }
}

impl<T: Edn> Edn for Arc<T> {
    fn shape() -> Shape<Self> {
        Shape::Optional(RefShape::of::<T>(|a| Some(&**a as &dyn Any)))
    }
}

impl<T: Edn> Edn for Rc<T> {
    fn shape() -> Shape<Self> {
        Shape::Optional(RefShape::of::<T>(|r| Some(&**r as &dyn Any)))
    }
}

impl<T: Edn> Edn for &'static T {
    fn shape() -> Shape<Self> {
        Shape::Optional(RefShape::of::<T>(|r| Some(*r as &dyn Any)))
    }
}

fn boxed_payload(b: &Box<dyn Edn>) -> Option<&dyn Edn> {
    Some(&**b)
}

impl Edn for Box<dyn Edn> {
    fn shape() -> Shape<Self> {
        Shape::Dynamic(boxed_payload)
    }
}

// Sequences.

impl<T: Edn> Edn for Vec<T> {
    fn shape() -> Shape<Self> {
        Shape::Vector(SeqShape::of::<T>(|v| elems(v.iter())))
    }
}

impl<T: Edn> Edn for VecDeque<T> {
    fn shape() -> Shape<Self> {
        Shape::Vector(SeqShape::of::<T>(|v| elems(v.iter())))
    }
}

impl<T: Edn> Edn for &'static [T] {
    fn shape() -> Shape<Self> {
        Shape::Vector(SeqShape::of::<T>(|s| elems(s.iter())))
    }
}

impl<T: Edn, const N: usize> Edn for [T; N] {
    fn shape() -> Shape<Self> {
        Shape::Array(SeqShape::of::<T>(|a| elems(a.iter())))
    }
}

impl<T: Edn> Edn for LinkedList<T> {
    fn shape() -> Shape<Self> {
        Shape::List(SeqShape::of::<T>(|l| elems(l.iter())))
    }
}

// Maps and sets, in each container's own iteration order.

impl<K: Edn, V: Edn, S: BuildHasher + 'static> Edn for HashMap<K, V, S> {
    fn shape() -> Shape<Self> {
        Shape::Map(MapShape::of::<K, V>(|m| entries(m.iter())))
    }
}

impl<K: Edn, V: Edn> Edn for BTreeMap<K, V> {
    fn shape() -> Shape<Self> {
        Shape::Map(MapShape::of::<K, V>(|m| entries(m.iter())))
    }
}

impl<K: Edn, V: Edn, S: BuildHasher + 'static> Edn for IndexMap<K, V, S> {
    fn shape() -> Shape<Self> {
        Shape::Map(MapShape::of::<K, V>(|m| entries(m.iter())))
    }
}

impl<T: Edn, S: BuildHasher + 'static> Edn for HashSet<T, S> {
    fn shape() -> Shape<Self> {
        Shape::Set(SeqShape::of::<T>(|s| elems(s.iter())))
    }
}

impl<T: Edn> Edn for BTreeSet<T> {
    fn shape() -> Shape<Self> {
        Shape::Set(SeqShape::of::<T>(|s| elems(s.iter())))
    }
}

impl<T: Edn, S: BuildHasher + 'static> Edn for IndexSet<T, S> {
    fn shape() -> Shape<Self> {
        Shape::Set(SeqShape::of::<T>(|s| elems(s.iter())))
    }
}

macro_rules! tuple {
    ($(($($name:ident $idx:tt),+))+) => {$(
        impl<$($name: Edn),+> Edn for ($($name,)+) {
            fn shape() -> Shape<Self> {
                Shape::Tuple(vec![
                    $(Field::<Self>::positional::<$name>(|t| &t.$idx as &dyn Any)),+
                ])
            }
        }
    )+};
}

tuple! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
    (A 0, B 1, C 2, D 3, E 4)
    (A 0, B 1, C 2, D 3, E 4, F 5)
}

// No EDN production; these fail when a value is actually rendered.

macro_rules! unsupported {
    ($($t:ty),* $(,)?) => {$(
        impl<T: 'static> Edn for $t {
            fn shape() -> Shape<Self> {
                Shape::Unsupported
            }
        }
    )*};
}

unsupported!(mpsc::Sender<T>, mpsc::SyncSender<T>, mpsc::Receiver<T>, Mutex<T>, RwLock<T>);

impl<R: 'static> Edn for fn() -> R {
    fn shape() -> Shape<Self> {
        Shape::Unsupported
    }
}

#[cfg(test)]
mod tests {
    use crate::{to_string, Edn, Error};
    use chrono::{FixedOffset, TimeZone, Utc};
    use std::collections::{BTreeMap, LinkedList};
    use std::rc::Rc;
    use std::sync::Arc;
    use std::time::{Duration, SystemTime};

    #[test]
    fn test_integer_widths() {
        assert_eq!(to_string(&i16::MIN).unwrap(), "-32768");
        assert_eq!(to_string(&(i64::MAX as u64)).unwrap(), "9223372036854775807");
        assert_eq!(to_string(&u128::MAX).unwrap(), u128::MAX.to_string());
        assert_eq!(to_string(&-5isize).unwrap(), "-5");
    }

    #[test]
    fn test_pointers() {
        assert_eq!(to_string(&Some(33)).unwrap(), "33");
        assert_eq!(to_string(&None::<i32>).unwrap(), "nil");
        assert_eq!(to_string(&Box::new("x".to_string())).unwrap(), r#""x""#);
        assert_eq!(to_string(&Arc::new(1.5)).unwrap(), "1.5");
        assert_eq!(to_string(&Rc::new(Some(true))).unwrap(), "true");
        assert_eq!(to_string(&Some(Some(None::<u8>))).unwrap(), "nil");
    }

    #[test]
    fn test_static_references() {
        static ANSWER: i32 = 42;
        let answer: &'static i32 = &ANSWER;
        assert_eq!(to_string(&answer).unwrap(), "42");
        assert_eq!(to_string(&"ok").unwrap(), r#""ok""#);
        let items: &'static [u16] = &[1, 2];
        assert_eq!(to_string(&items).unwrap(), "[1 2]");
    }

    #[test]
    fn test_dynamic_box() {
        let items: Vec<Box<dyn Edn>> = vec![Box::new(1), Box::new("two"), Box::new(vec![3.5])];
        assert_eq!(to_string(&items).unwrap(), r#"[1 "two" [3.5]]"#);
    }

    #[test]
    fn test_tuples_render_as_vectors() {
        assert_eq!(to_string(&(1, "a", 'b')).unwrap(), r#"[1 "a" \b]"#);
        assert_eq!(to_string(&((),)).unwrap(), "[nil]");
    }

    #[test]
    fn test_sorted_map_order() {
        let mut map = BTreeMap::new();
        map.insert("b", 2);
        map.insert("a", 1);
        assert_eq!(to_string(&map).unwrap(), r#"{"a" 1, "b" 2}"#);
    }

    #[test]
    fn test_list() {
        let list: LinkedList<i32> = [1, 2].into_iter().collect();
        assert_eq!(to_string(&list).unwrap(), "(1 2)");
    }

    #[test]
    fn test_instants_normalize_to_utc() {
        let offset = FixedOffset::east_opt(3600).unwrap();
        let local = offset.with_ymd_and_hms(2014, 3, 14, 16, 59, 59).unwrap();
        assert_eq!(
            to_string(&local).unwrap(),
            r#"#inst "2014-03-14T15:59:59Z""#
        );

        let system = SystemTime::UNIX_EPOCH + Duration::from_millis(1_500);
        assert_eq!(
            to_string(&system).unwrap(),
            r#"#inst "1970-01-01T00:00:01.5Z""#
        );

        let utc = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(to_string(&Some(utc)).unwrap(), r#"#inst "2000-01-01T00:00:00Z""#);
        assert_eq!(to_string(&None::<chrono::DateTime<Utc>>).unwrap(), "nil");
    }

    #[test]
    fn test_callables_are_unsupported() {
        fn seven() -> i32 {
            7
        }
        let f: fn() -> i32 = seven;
        assert!(matches!(to_string(&f), Err(Error::UnsupportedType(_))));
        assert!(matches!(
            to_string(&std::sync::RwLock::new(0)),
            Err(Error::UnsupportedType(_))
        ));
    }
}
