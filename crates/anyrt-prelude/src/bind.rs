//! Bind (monadic flatMap) for arrays

use anyrt_core::{AnyrtResult, Value};
use im::Vector;

use crate::curry::curry2;
use crate::registry::Primitive;

pub const PRIMITIVES: &[Primitive] = &[Primitive {
    name: "arrayBind",
    arity: 2,
    entry: |xs| Ok(array_bind(xs)),
}];

/// `arrayBind xs`: curried, awaiting the continuation
pub fn array_bind(xs: &Value) -> Value {
    curry2("arrayBind", xs, bind_array)
}

/// Concatenate `f(x)` for each `x` in `xs`, in order. Every `f(x)` must be an array.
pub fn bind_array(xs: &Value, f: &Value) -> AnyrtResult<Value> {
    let items = xs.as_array()?;
    let f = f.as_closure()?;
    log::trace!("arrayBind {} over {} elements", f.label(), items.len());

    let mut out = Vector::new();
    for x in items.iter() {
        let ys = f.call(x.clone())?;
        out.append(ys.as_array()?.clone());
    }
    Ok(Value::from(out))
}
