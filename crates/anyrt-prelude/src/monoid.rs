//! Monoid (append) for arrays and strings
//!
//! Operands may be shared elsewhere, so both are left untouched and a new
//! value is returned.

use anyrt_core::{AnyrtResult, Value};

use crate::curry::curry2;
use crate::registry::Primitive;

pub const PRIMITIVES: &[Primitive] = &[
    Primitive { name: "concatArray", arity: 2, entry: |a| Ok(concat_array(a)) },
    Primitive { name: "concatString", arity: 2, entry: |a| Ok(concat_string(a)) },
];

pub fn concat_array(a: &Value) -> Value {
    curry2("concatArray", a, append_arrays)
}

pub fn concat_string(a: &Value) -> Value {
    curry2("concatString", a, append_strings)
}

/// Elements of `a` followed by the elements of `b`
pub fn append_arrays(a: &Value, b: &Value) -> AnyrtResult<Value> {
    let mut out = a.as_array()?.clone();
    log::trace!("concatArray of {} elements", out.len());
    out.append(b.as_array()?.clone());
    Ok(Value::from(out))
}

/// Byte-wise concatenation
pub fn append_strings(a: &Value, b: &Value) -> AnyrtResult<Value> {
    let (a, b) = (a.as_str()?, b.as_str()?);
    let mut out = String::with_capacity(a.len() + b.len());
    out.push_str(a);
    out.push_str(b);
    Ok(Value::from(out))
}
