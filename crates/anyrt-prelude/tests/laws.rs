// Property tests for the algebraic laws the prelude instances must satisfy.
//
// Arrays are generated with bounded nesting; closures are excluded since
// they only compare by identity.

use anyrt_prelude::{append_arrays, array_bind, array_map, concat_array, eq_arrays, Value};
use proptest::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        prop::num::f64::NORMAL.prop_map(Value::from),
        any::<char>().prop_map(Value::from),
        "[a-z0-9\"' ]{0,8}".prop_map(Value::from),
    ]
}

/// Arrays of scalars and nested arrays, up to three levels deep.
fn arb_array() -> BoxedStrategy<Value> {
    let element = arb_scalar().prop_recursive(3, 32, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(Value::from)
    });
    prop::collection::vec(element, 0..6).prop_map(Value::from).boxed()
}

fn arb_flat_array() -> impl Strategy<Value = Value> {
    prop::collection::vec(arb_scalar(), 0..12).prop_map(Value::from)
}

fn identity() -> Value {
    Value::closure("identity", Ok)
}

fn singleton() -> Value {
    Value::closure("pure", |x| Ok(Value::array([x])))
}

fn structural_eq() -> Value {
    Value::closure("eq", |x| {
        Ok(Value::closure("eq/1", move |y| Ok(Value::Bool(x == y))))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn map_identity(a in arb_flat_array()) {
        init_logging();
        let mapped = array_map(&identity()).apply(a.clone()).unwrap();
        prop_assert_eq!(mapped, a);
    }

    #[test]
    fn map_identity_nested(a in arb_array()) {
        let mapped = array_map(&identity()).apply(a.clone()).unwrap();
        prop_assert_eq!(mapped, a);
    }

    #[test]
    fn bind_right_identity(a in arb_flat_array()) {
        let bound = array_bind(&a).apply(singleton()).unwrap();
        prop_assert_eq!(bound, a);
    }

    #[test]
    fn bind_left_identity(x in arb_scalar()) {
        // pure x >>= f  ==  f x
        let dup = Value::closure("dup", |x| Ok(Value::array([x.clone(), x])));
        let bound = array_bind(&Value::array([x.clone()])).apply(dup.clone()).unwrap();
        prop_assert_eq!(bound, dup.apply(x).unwrap());
    }

    #[test]
    fn concat_is_associative(a in arb_flat_array(), b in arb_flat_array(), c in arb_flat_array()) {
        let left = concat_array(&concat_array(&a).apply(b.clone()).unwrap()).apply(c.clone()).unwrap();
        let right = concat_array(&a).apply(concat_array(&b).apply(c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn concat_preserves_length(a in arb_flat_array(), b in arb_flat_array()) {
        let joined = append_arrays(&a, &b).unwrap();
        let len = |v: &Value| v.as_array().unwrap().len();
        prop_assert_eq!(len(&joined), len(&a) + len(&b));
    }

    #[test]
    fn concat_does_not_alias_operands(a in arb_flat_array(), b in arb_flat_array(), extra in arb_flat_array()) {
        let copy = a.clone();
        let snapshot: Vec<Value> = a.extract().unwrap();

        let grown = append_arrays(&copy, &b).unwrap();
        let regrown = append_arrays(&grown, &extra).unwrap();

        prop_assert_eq!(&a, &Value::from(snapshot.clone()));
        prop_assert_eq!(&copy, &Value::from(snapshot));
        prop_assert!(regrown.as_array().unwrap().len() >= a.as_array().unwrap().len());
    }

    #[test]
    fn eq_array_is_reflexive(a in arb_flat_array()) {
        prop_assert_eq!(eq_arrays(&structural_eq(), &a, &a).unwrap(), Value::Bool(true));
    }
}
