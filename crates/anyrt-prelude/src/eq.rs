//! Eq: reference equality and element-wise array equality

use anyrt_core::{AnyrtResult, Value};

use crate::curry::{curry2, curry3};
use crate::registry::Primitive;

pub const PRIMITIVES: &[Primitive] = &[
    Primitive { name: "refEq", arity: 2, entry: |a| Ok(ref_eq(a)) },
    Primitive { name: "refIneq", arity: 2, entry: |a| Ok(ref_ineq(a)) },
    Primitive { name: "eqArrayImpl", arity: 3, entry: |f| Ok(eq_array_impl(f)) },
];

/// Native equality on the erased value
pub fn ref_eq(a: &Value) -> Value {
    curry2("refEq", a, |a, b| Ok(Value::Bool(a == b)))
}

pub fn ref_ineq(a: &Value) -> Value {
    curry2("refIneq", a, |a, b| Ok(Value::Bool(a != b)))
}

/// `eqArrayImpl f`: curried, awaiting two arrays
pub fn eq_array_impl(f: &Value) -> Value {
    curry3("eqArrayImpl", f, eq_arrays)
}

/// True iff the arrays have equal length and `f x y` holds pairwise.
/// Stops at the first pair `f` rejects.
pub fn eq_arrays(f: &Value, xs: &Value, ys: &Value) -> AnyrtResult<Value> {
    let (xs, ys) = (xs.as_array()?, ys.as_array()?);
    log::trace!("eqArrayImpl on lengths {} and {}", xs.len(), ys.len());
    if xs.len() != ys.len() {
        return Ok(Value::Bool(false));
    }
    for (x, y) in xs.iter().zip(ys.iter()) {
        if !f.apply2(x.clone(), y.clone())?.as_bool()? {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}
