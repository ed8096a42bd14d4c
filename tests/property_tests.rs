//! Property-based tests for the literal forms and collection invariants.
//!
//! There is no EDN reader in this crate, so "parses back" means parsing the
//! literal with the standard library, which accepts the same decimal forms.

use proptest::prelude::*;
use serde_edn::{serialize, to_string, Keyword, Set, Value};
use std::collections::HashSet;

proptest! {
    #[test]
    fn prop_i64_parses_back(n in any::<i64>()) {
        let out = to_string(&n).unwrap();
        prop_assert_eq!(out.parse::<i64>().unwrap(), n);
    }

    #[test]
    fn prop_u64_parses_back(n in any::<u64>()) {
        let out = to_string(&n).unwrap();
        prop_assert_eq!(out.parse::<u64>().unwrap(), n);
    }

    #[test]
    fn prop_i128_parses_back(n in any::<i128>()) {
        let out = to_string(&n).unwrap();
        prop_assert_eq!(out.parse::<i128>().unwrap(), n);
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert_eq!(to_string(&b).unwrap(), b.to_string());
    }

    #[test]
    fn prop_finite_f64_round_trips_bitwise(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let out = to_string(&f).unwrap();
        let back: f64 = out.parse().unwrap();
        prop_assert_eq!(back.to_bits(), f.to_bits(), "{} rendered as {}", f, out);
    }

    #[test]
    fn prop_finite_f32_round_trips_bitwise(f in any::<f32>().prop_filter("finite", |f| f.is_finite())) {
        let out = to_string(&f).unwrap();
        let back: f32 = out.parse().unwrap();
        prop_assert_eq!(back.to_bits(), f.to_bits(), "{} rendered as {}", f, out);
    }

    #[test]
    fn prop_non_finite_f64_rejected(f in prop_oneof![
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]) {
        prop_assert!(to_string(&f).is_err());
        prop_assert!(serialize(&f).is_err());
    }

    #[test]
    fn prop_keyword_prefix_never_doubles(name in "[a-z][a-z0-9/_-]{0,12}") {
        let bare = to_string(&Keyword::new(name.as_str())).unwrap();
        let prefixed = to_string(&Keyword::new(format!(":{}", name))).unwrap();
        prop_assert_eq!(&bare, &prefixed);
        prop_assert_eq!(bare, format!(":{}", name));
    }

    #[test]
    fn prop_set_elements_appear_once(items in prop::collection::vec(-50i64..50, 0..40)) {
        let set: Set<i64> = items.iter().copied().collect();
        let out = to_string(&set).unwrap();
        prop_assert!(out.starts_with("#{") && out.ends_with('}'), "set output not wrapped in #{{...}}: {}", out);

        let inner = &out[2..out.len() - 1];
        let rendered: Vec<i64> = if inner.is_empty() {
            vec![]
        } else {
            inner.split(' ').map(|s| s.parse().unwrap()).collect()
        };
        let unique: HashSet<i64> = items.iter().copied().collect();
        prop_assert_eq!(rendered.len(), unique.len());
        prop_assert_eq!(rendered.into_iter().collect::<HashSet<_>>(), unique);
    }

    #[test]
    fn prop_strings_stay_quoted(s in "\\PC*") {
        let out = to_string(&s).unwrap();
        prop_assert!(out.starts_with('"') && out.ends_with('"'));
        prop_assert!(!out[1..out.len() - 1].contains('\n'));
    }

    #[test]
    fn prop_native_and_serde_paths_agree(v in prop::collection::vec(
        prop::option::of(any::<i32>()), 0..20,
    )) {
        prop_assert_eq!(to_string(&v).unwrap(), serialize(&v).unwrap());
        let value = Value::Vector(v.iter().map(|x| Value::from(*x)).collect());
        prop_assert_eq!(to_string(&value).unwrap(), to_string(&v).unwrap());
    }
}
