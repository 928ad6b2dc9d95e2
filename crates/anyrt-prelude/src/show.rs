//! Show instances
//!
//! Characters and strings are quoted verbatim with no escaping; callers that
//! need escaped output must escape before calling.

use anyrt_core::{AnyrtResult, Value};

use crate::curry::curry2;
use crate::registry::Primitive;

pub const PRIMITIVES: &[Primitive] = &[
    Primitive { name: "showIntImpl", arity: 1, entry: show_int_impl },
    Primitive { name: "showNumberImpl", arity: 1, entry: show_number_impl },
    Primitive { name: "showCharImpl", arity: 1, entry: show_char_impl },
    Primitive { name: "showStringImpl", arity: 1, entry: show_string_impl },
    Primitive { name: "showArrayImpl", arity: 2, entry: |f| Ok(show_array_impl(f)) },
];

pub fn show_int_impl(x: &Value) -> AnyrtResult<Value> {
    Ok(Value::from(x.as_int()?.to_string()))
}

/// Native `f64` formatting: shortest text that round-trips, so integral
/// values carry no fraction (`1.0` shows as `1`, not `1.000000`)
pub fn show_number_impl(x: &Value) -> AnyrtResult<Value> {
    Ok(Value::from(x.as_number()?.to_string()))
}

pub fn show_char_impl(c: &Value) -> AnyrtResult<Value> {
    Ok(Value::from(format!("'{}'", c.as_char()?)))
}

pub fn show_string_impl(s: &Value) -> AnyrtResult<Value> {
    Ok(Value::from(format!("\"{}\"", s.as_str()?)))
}

/// `showArrayImpl f`: curried, awaiting the array
pub fn show_array_impl(f: &Value) -> Value {
    curry2("showArrayImpl", f, show_array)
}

/// `[` + comma-joined `f x` + `]`, no spaces
pub fn show_array(f: &Value, xs: &Value) -> AnyrtResult<Value> {
    let items = xs.as_array()?;
    let f = f.as_closure()?;
    log::trace!("showArrayImpl {} over {} elements", f.label(), items.len());
    let mut out = String::from("[");
    for (i, x) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(f.call(x.clone())?.as_str()?);
    }
    out.push(']');
    Ok(Value::from(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyrt_core::Kind;

    fn shown(v: AnyrtResult<Value>) -> String {
        v.and_then(|s| s.extract::<String>()).unwrap()
    }

    #[test]
    fn scalars() {
        assert_eq!(shown(show_int_impl(&Value::from(-12))), "-12");
        assert_eq!(shown(show_number_impl(&Value::from(1.5))), "1.5");
        assert_eq!(shown(show_number_impl(&Value::from(0.1 + 0.2))), "0.30000000000000004");
        assert_eq!(shown(show_number_impl(&Value::from(1.0))), "1");
        assert_eq!(shown(show_number_impl(&Value::from(-250.0))), "-250");
        assert_eq!(shown(show_char_impl(&Value::from('x'))), "'x'");
        assert_eq!(shown(show_char_impl(&Value::from('\''))), "'''");
    }

    #[test]
    fn strings_are_not_escaped() {
        assert_eq!(shown(show_string_impl(&Value::from("a\"b"))), "\"a\"b\"");
        assert_eq!(shown(show_string_impl(&Value::from(""))), "\"\"");
    }

    #[test]
    fn arrays() {
        let show_int = Value::closure("showIntImpl", |x| show_int_impl(&x));
        let xs: Value = [1, 2, 3].into_iter().map(Value::from).collect();
        assert_eq!(shown(show_array_impl(&show_int).apply(xs)), "[1,2,3]");
        assert_eq!(shown(show_array(&show_int, &Value::empty_array())), "[]");
    }

    #[test]
    fn nested_arrays_compose() {
        let show_int = Value::closure("showIntImpl", |x| show_int_impl(&x));
        let inner = show_array_impl(&show_int);
        let xs = Value::array([
            Value::array([Value::from(1)]),
            Value::empty_array(),
            Value::array([Value::from(2), Value::from(3)]),
        ]);
        assert_eq!(shown(show_array(&inner, &xs)), "[[1],[],[2,3]]");
    }

    #[test]
    fn renderer_must_return_string() {
        let wrong = Value::closure("wrong", Ok);
        let err = show_array(&wrong, &Value::array([Value::from(1)])).unwrap_err();
        assert_eq!(err.to_string(), format!("kind mismatch: expected {}, found {}", Kind::String, Kind::Integer));
    }
}
