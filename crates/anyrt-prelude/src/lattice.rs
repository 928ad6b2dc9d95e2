//! Lattice and ComplementedLattice for Boolean

use anyrt_core::{AnyrtResult, Value};

use crate::curry::curry2;
use crate::registry::Primitive;

pub const PRIMITIVES: &[Primitive] = &[
    Primitive { name: "boolOr", arity: 2, entry: |x| Ok(bool_or(x)) },
    Primitive { name: "boolAnd", arity: 2, entry: |x| Ok(bool_and(x)) },
    Primitive { name: "boolNot", arity: 1, entry: bool_not },
];

pub fn bool_or(x: &Value) -> Value {
    curry2("boolOr", x, |x, y| Ok(Value::Bool(x.as_bool()? || y.as_bool()?)))
}

pub fn bool_and(x: &Value) -> Value {
    curry2("boolAnd", x, |x, y| Ok(Value::Bool(x.as_bool()? && y.as_bool()?)))
}

pub fn bool_not(x: &Value) -> AnyrtResult<Value> {
    Ok(Value::Bool(!x.as_bool()?))
}
