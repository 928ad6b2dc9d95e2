//! Ord: element-wise array ordering and the scalar comparison primitive
//!
//! Orderings are `Int` values: negative is less-than, zero is equal,
//! positive is greater-than.

use std::cmp::Ordering;

use anyrt_core::{ordering_to_int, AnyrtResult, Value};

use crate::curry::curry3;
use crate::registry::Primitive;

pub const PRIMITIVES: &[Primitive] = &[
    Primitive { name: "ordArrayImpl", arity: 3, entry: |f| Ok(ord_array_impl(f)) },
    Primitive { name: "unsafeCompareImpl", arity: 5, entry: |lt| Ok(unsafe_compare_impl(lt)) },
];

/// `ordArrayImpl f`: curried, awaiting two arrays
pub fn ord_array_impl(f: &Value) -> Value {
    curry3("ordArrayImpl", f, ord_arrays)
}

/// Compare the common prefix with `f`, returning its first non-zero result.
///
/// When the prefix is equal the LONGER array is less-than: equal lengths give
/// 0, `|xs| > |ys|` gives -1, `|xs| < |ys|` gives 1.
pub fn ord_arrays(f: &Value, xs: &Value, ys: &Value) -> AnyrtResult<Value> {
    let (xs, ys) = (xs.as_array()?, ys.as_array()?);
    log::trace!("ordArrayImpl on lengths {} and {}", xs.len(), ys.len());
    for (x, y) in xs.iter().zip(ys.iter()) {
        let o = f.apply2(x.clone(), y.clone())?;
        if o.as_int()? != 0 {
            return Ok(o);
        }
    }
    Ok(Value::Int(ordering_to_int(ys.len().cmp(&xs.len()))))
}

/// `unsafeCompareImpl lt eq gt x y`: picks a sentinel by native ordering of
/// `x` and `y`. Matching kinds are the caller's responsibility; values with
/// no ordering between them select `eq`.
pub fn unsafe_compare_impl(lt: &Value) -> Value {
    let lt = lt.clone();
    Value::closure("unsafeCompareImpl", move |eq| {
        let lt = lt.clone();
        Ok(Value::closure("unsafeCompareImpl", move |gt| {
            let (lt, eq) = (lt.clone(), eq.clone());
            Ok(Value::closure("unsafeCompareImpl", move |x| {
                let (lt, eq, gt) = (lt.clone(), eq.clone(), gt.clone());
                Ok(Value::closure("unsafeCompareImpl", move |y| {
                    Ok(unsafe_compare(&lt, &eq, &gt, &x, &y))
                }))
            }))
        }))
    })
}

/// Read an ordering result produced by a comparator
pub fn ordering_result(o: &Value) -> AnyrtResult<Ordering> {
    Ok(o.as_int()?.cmp(&0))
}

/// Saturated form of `unsafeCompareImpl`
pub fn unsafe_compare(lt: &Value, eq: &Value, gt: &Value, x: &Value, y: &Value) -> Value {
    match x.partial_cmp(y) {
        Some(Ordering::Less) => lt.clone(),
        Some(Ordering::Greater) => gt.clone(),
        _ => eq.clone(),
    }
}
