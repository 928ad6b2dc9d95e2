//! Semiring, Ring and ModuloSemiring for Int and Number
//!
//! Integer arithmetic wraps on overflow. Integer division and modulus by zero
//! fail with `DivisionByZero`; Number division follows IEEE 754.

use anyrt_core::{AnyrtError, AnyrtResult, Value};

use crate::curry::curry2;
use crate::registry::Primitive;

pub const PRIMITIVES: &[Primitive] = &[
    Primitive { name: "intAdd", arity: 2, entry: |x| Ok(int_add(x)) },
    Primitive { name: "intMul", arity: 2, entry: |x| Ok(int_mul(x)) },
    Primitive { name: "intSub", arity: 2, entry: |x| Ok(int_sub(x)) },
    Primitive { name: "intDiv", arity: 2, entry: |x| Ok(int_div(x)) },
    Primitive { name: "intMod", arity: 2, entry: |x| Ok(int_mod(x)) },
    Primitive { name: "numAdd", arity: 2, entry: |x| Ok(num_add(x)) },
    Primitive { name: "numMul", arity: 2, entry: |x| Ok(num_mul(x)) },
    Primitive { name: "numSub", arity: 2, entry: |x| Ok(num_sub(x)) },
    Primitive { name: "numDiv", arity: 2, entry: |x| Ok(num_div(x)) },
];

fn int_op(x: &Value, y: &Value, op: fn(i64, i64) -> i64) -> AnyrtResult<Value> {
    Ok(Value::Int(op(x.as_int()?, y.as_int()?)))
}

fn num_op(x: &Value, y: &Value, op: fn(f64, f64) -> f64) -> AnyrtResult<Value> {
    Ok(Value::Number(op(x.as_number()?, y.as_number()?)))
}

pub fn int_add(x: &Value) -> Value {
    curry2("intAdd", x, |x, y| int_op(x, y, i64::wrapping_add))
}

pub fn int_mul(x: &Value) -> Value {
    curry2("intMul", x, |x, y| int_op(x, y, i64::wrapping_mul))
}

pub fn int_sub(x: &Value) -> Value {
    curry2("intSub", x, |x, y| int_op(x, y, i64::wrapping_sub))
}

pub fn int_div(x: &Value) -> Value {
    curry2("intDiv", x, divide_ints)
}

pub fn int_mod(x: &Value) -> Value {
    curry2("intMod", x, modulo_ints)
}

pub fn num_add(x: &Value) -> Value {
    curry2("numAdd", x, |x, y| num_op(x, y, |a, b| a + b))
}

pub fn num_mul(x: &Value) -> Value {
    curry2("numMul", x, |x, y| num_op(x, y, |a, b| a * b))
}

pub fn num_sub(x: &Value) -> Value {
    curry2("numSub", x, |x, y| num_op(x, y, |a, b| a - b))
}

pub fn num_div(x: &Value) -> Value {
    curry2("numDiv", x, |x, y| num_op(x, y, |a, b| a / b))
}

/// Truncating division
pub fn divide_ints(x: &Value, y: &Value) -> AnyrtResult<Value> {
    let (x, y) = (x.as_int()?, y.as_int()?);
    if y == 0 {
        return Err(AnyrtError::DivisionByZero);
    }
    Ok(Value::Int(x.wrapping_div(y)))
}

/// Remainder of truncating division; takes the sign of `x`
pub fn modulo_ints(x: &Value, y: &Value) -> AnyrtResult<Value> {
    let (x, y) = (x.as_int()?, y.as_int()?);
    if y == 0 {
        return Err(AnyrtError::DivisionByZero);
    }
    Ok(Value::Int(x.wrapping_rem(y)))
}
