use proptest::prelude::*;
use xform::{Builtin, Injected, apply_injected, apply_transform, apply_transform_default};

fn builtin() -> impl Strategy<Value = Builtin> {
    prop::sample::select(Builtin::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_pass_through(s in ".*", b in builtin()) {
        let f = b.as_fn();
        prop_assert_eq!(apply_transform(f, &s), f(&s));
    }

    #[test]
    fn prop_pass_through_non_string(s in ".*") {
        prop_assert_eq!(apply_transform(|v: &str| v.chars().count(), &s), s.chars().count());
    }

    #[test]
    fn prop_idempotent_builtins_stay_idempotent(s in "[ -~\t\n]*", b in builtin()) {
        let once = apply_transform(b.as_fn(), &s);
        let twice = apply_transform(b.as_fn(), &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_injected_matches_typed(s in ".*", b in builtin()) {
        let injected = Injected::from(b);
        let out = apply_injected(&injected, Some(s.as_str())).unwrap();
        prop_assert_eq!(out, serde_json::Value::String(b.apply(&s)));
    }
}

#[test]
fn test_default_equals_empty() {
    for b in Builtin::ALL {
        assert_eq!(apply_transform_default(b.as_fn()), apply_transform(b.as_fn(), ""));
    }
}
