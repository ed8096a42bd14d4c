use serde_edn::{edn, edn_record, to_string, Keyword, Map, Set, Symbol, Value};

#[test]
fn test_edn_macro_nil_and_booleans() {
    assert_eq!(edn!(nil), Value::Nil);
    assert_eq!(edn!(true), Value::Bool(true));
    assert_eq!(edn!(false), Value::Bool(false));
}

#[test]
fn test_edn_macro_numbers() {
    assert_eq!(edn!(42), Value::Integer(42));
    assert_eq!(edn!(-123), Value::Integer(-123));
    assert_eq!(edn!(3.5), Value::Float(3.5));
    assert_eq!(edn!(u64::MAX).to_string(), "18446744073709551615");
}

#[test]
fn test_edn_macro_vectors() {
    let value = edn!([1, "two", nil, [true]]);
    let items = value.as_vector().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[1].as_str(), Some("two"));
    assert!(items[2].is_nil());
    assert_eq!(to_string(&value).unwrap(), r#"[1 "two" nil [true]]"#);
}

#[test]
fn test_edn_macro_sets_collapse() {
    let value = edn!(#{1, 2, 1, (Symbol::new("x"))});
    let set = value.as_set().unwrap();
    assert_eq!(set.len(), 3);
    assert!(set.has(&Value::from(Symbol::new("x"))));
}

#[test]
fn test_edn_macro_maps() {
    let value = edn!({
        (Keyword::new("name")) => "Ada",
        (Keyword::new("langs")) => ["en", "fr"],
        (Keyword::new("meta")) => {},
    });
    let map = value.as_map().unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(
        map.get(&Value::from(Keyword::new("name"))),
        Some(&Value::from("Ada"))
    );
    assert_eq!(
        map.get(&Value::from(Keyword::new(":meta"))),
        Some(&Value::Map(Map::new()))
    );
    assert_eq!(
        to_string(&value).unwrap(),
        r#"{:name "Ada", :langs ["en" "fr"], :meta {}}"#
    );
}

#[test]
fn test_edn_macro_variables() {
    let name = "dynamic";
    let count = 3usize;
    let tags = Set::new().with(Value::from("a"));
    let value = edn!([name, count, tags]);
    assert_eq!(to_string(&value).unwrap(), r#"["dynamic" 3 #{"a"}]"#);
}

struct Point {
    x: i32,
    y: i32,
    label: Option<String>,
}

edn_record!(Point { x: i32, y: i32, label: Option<String> });

#[test]
fn test_edn_record_field_order() {
    let p = Point {
        x: 1,
        y: -2,
        label: None,
    };
    assert_eq!(to_string(&p).unwrap(), "{:x 1, :y -2, :label nil}");

    let p = Point {
        x: 0,
        y: 0,
        label: Some("origin".into()),
    };
    assert_eq!(to_string(&vec![p]).unwrap(), r#"[{:x 0, :y 0, :label "origin"}]"#);
}

struct Secretive {
    shown: bool,
    #[allow(dead_code)]
    hidden: String,
}

edn_record!(Secretive { shown: bool });

#[test]
fn test_edn_record_skips_unlisted_fields() {
    let s = Secretive {
        shown: true,
        hidden: "password".into(),
    };
    assert_eq!(to_string(&s).unwrap(), "{:shown true}");
}
