/// Builds a [`Value`](crate::Value) from EDN-like syntax.
///
/// - `nil`, `true`, `false`
/// - `[a, b]` for vectors, `#{a, b}` for sets
/// - `{key => value, ...}` for maps
/// - anything else is an expression converted with `Value::from`
///
/// Each element, key and value is a single token tree, so negative numbers and
/// calls need parentheses: `(-1)`, `(Keyword::new("a"))`.
///
/// # Examples
///
/// ```rust
/// use serde_edn::{edn, to_string, Keyword};
///
/// let value = edn!({
///     "x" => (-42),
///     (Keyword::new("y")) => #{1, 2},
///     nil => [true, nil],
/// });
/// assert_eq!(to_string(&value).unwrap(), r#"{"x" -42, :y #{1 2}, nil [true nil]}"#);
/// ```
#[macro_export]
macro_rules! edn {
    // Elements of a vector or set, accumulated as expressions.
    (@elems [$($done:expr,)*]) => {
        vec![$($done,)*]
    };
    (@elems [$($done:expr,)*] #{ $($set:tt)* } $(, $($rest:tt)*)?) => {
        $crate::edn!(@elems [$($done,)* $crate::edn!(#{ $($set)* }),] $($($rest)*)?)
    };
    (@elems [$($done:expr,)*] $next:tt $(, $($rest:tt)*)?) => {
        $crate::edn!(@elems [$($done,)* $crate::edn!($next),] $($($rest)*)?)
    };

    // Map entries, inserted one at a time.
    (@entries $map:ident) => {};
    (@entries $map:ident $key:tt => #{ $($set:tt)* } $(, $($rest:tt)*)?) => {
        $map.insert($crate::edn!($key), $crate::edn!(#{ $($set)* }));
        $crate::edn!(@entries $map $($($rest)*)?);
    };
    (@entries $map:ident $key:tt => $value:tt $(, $($rest:tt)*)?) => {
        $map.insert($crate::edn!($key), $crate::edn!($value));
        $crate::edn!(@entries $map $($($rest)*)?);
    };

    (nil) => {
        $crate::Value::Nil
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([ $($elems:tt)* ]) => {
        $crate::Value::Vector($crate::edn!(@elems [] $($elems)*))
    };

    (#{ $($elems:tt)* }) => {
        $crate::Value::Set($crate::edn!(@elems [] $($elems)*).into_iter().collect())
    };

    ({ $($entries:tt)* }) => {{
        #[allow(unused_mut)]
        let mut map = $crate::Map::new();
        $crate::edn!(@entries map $($entries)*);
        $crate::Value::Map(map)
    }};

    ($e:expr) => {
        $crate::Value::from($e)
    };
}

/// Implements [`Edn`](crate::Edn) for a struct as a record: a map from
/// keyword field names to field values, in the order listed.
///
/// Every field listed must be given with its declared type; fields left out
/// are not encoded.
///
/// # Examples
///
/// ```rust
/// use serde_edn::{edn_record, to_string};
///
/// struct Node {
///     name: String,
///     children: Vec<Node>,
/// }
///
/// edn_record!(Node { name: String, children: Vec<Node> });
///
/// let tree = Node {
///     name: "root".into(),
///     children: vec![Node { name: "leaf".into(), children: vec![] }],
/// };
/// assert_eq!(
///     to_string(&tree).unwrap(),
///     r#"{:name "root", :children [{:name "leaf", :children []}]}"#
/// );
/// ```
#[macro_export]
macro_rules! edn_record {
    ($ty:ident { $($field:ident : $fty:ty),* $(,)? }) => {
        impl $crate::Edn for $ty {
            fn shape() -> $crate::Shape<Self> {
                $crate::Shape::Record(vec![
                    $($crate::Field::<$ty>::new::<$fty>(stringify!($field), |record| {
                        let field: &$fty = &record.$field;
                        field as &dyn ::std::any::Any
                    })),*
                ])
            }
        }
    };
}

/// Implements [`Edn`](crate::Edn) for types that implement
/// [`ToEdnText`](crate::ToEdnText), rendering them as strings.
#[macro_export]
macro_rules! edn_text {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::Edn for $ty {
            fn shape() -> $crate::Shape<Self> {
                $crate::Shape::text()
            }
        }
    )+};
}

#[cfg(test)]
mod tests {
    use crate::{to_string, Keyword, Map, Set, Value};

    #[test]
    fn test_edn_macro_primitives() {
        assert_eq!(edn!(nil), Value::Nil);
        assert_eq!(edn!(true), Value::Bool(true));
        assert_eq!(edn!(false), Value::Bool(false));
        assert_eq!(edn!(42), Value::Integer(42));
        assert_eq!(edn!(3.5), Value::Float(3.5));
        assert_eq!(edn!("hello"), Value::String("hello".to_string()));
        assert_eq!(edn!((-7)), Value::Integer(-7));
    }

    #[test]
    fn test_edn_macro_collections() {
        assert_eq!(edn!([]), Value::Vector(vec![]));
        assert_eq!(edn!(#{}), Value::Set(Set::new()));
        assert_eq!(edn!({}), Value::Map(Map::new()));

        let nested = edn!([(-1), [0], { (Keyword::new("answer")) => 42 }]);
        assert_eq!(to_string(&nested).unwrap(), "[-1 [0] {:answer 42}]");
    }

    #[test]
    fn test_edn_macro_nested_sets() {
        let value = edn!([#{1, 1}, { "s" => #{} }]);
        assert_eq!(to_string(&value).unwrap(), r#"[#{1} {"s" #{}}]"#);
    }

    #[test]
    fn test_edn_macro_trailing_commas() {
        assert_eq!(edn!([1, 2,]), edn!([1, 2]));
        assert_eq!(edn!({ 1 => 2, }), edn!({ 1 => 2 }));
    }
}
