//! Functor instance for arrays

use anyrt_core::{AnyrtResult, Value};
use im::Vector;

use crate::curry::curry2;
use crate::registry::Primitive;

pub const PRIMITIVES: &[Primitive] = &[Primitive {
    name: "arrayMap",
    arity: 2,
    entry: |f| Ok(array_map(f)),
}];

/// `arrayMap f`: curried, awaiting the array
pub fn array_map(f: &Value) -> Value {
    curry2("arrayMap", f, map_array)
}

/// Apply `f` to every element of `xs`, preserving order.
///
/// The first failure from `f` is returned unchanged and the partially
/// mapped array is dropped.
pub fn map_array(f: &Value, xs: &Value) -> AnyrtResult<Value> {
    let items = xs.as_array()?;
    let f = f.as_closure()?;
    log::trace!("arrayMap {} over {} elements", f.label(), items.len());

    let mapped = items
        .iter()
        .map(|x| f.call(x.clone()))
        .collect::<AnyrtResult<Vector<Value>>>()?;
    Ok(Value::from(mapped))
}
