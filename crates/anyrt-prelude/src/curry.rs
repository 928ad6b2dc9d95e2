//! Curried calling convention
//!
//! Generated code applies primitives one argument at a time. These helpers
//! turn a saturated Rust function into nested single-argument closures, each
//! owning a clone of the arguments seen so far.

use anyrt_core::{AnyrtResult, Value};

pub(crate) type Saturated2 = fn(&Value, &Value) -> AnyrtResult<Value>;
pub(crate) type Saturated3 = fn(&Value, &Value, &Value) -> AnyrtResult<Value>;

/// `body(a)` awaiting its second argument
pub(crate) fn curry2(label: &'static str, a: &Value, body: Saturated2) -> Value {
    let a = a.clone();
    Value::closure(label, move |b| body(&a, &b))
}

/// `body(a)` awaiting two more arguments
pub(crate) fn curry3(label: &'static str, a: &Value, body: Saturated3) -> Value {
    let a = a.clone();
    Value::closure(label, move |b| {
        let a = a.clone();
        Ok(Value::closure(label, move |c| body(&a, &b, &c)))
    })
}
