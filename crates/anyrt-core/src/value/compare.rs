//! Structural equality and ordering
//!
//! Arrays are compared with an explicit work stack rather than recursion,
//! so nesting depth is bounded by heap, not by the native stack.

use std::cmp::Ordering;
use std::iter::Zip;

use im::vector::Iter;

use crate::error::{AnyrtError, AnyrtResult};
use super::Value;

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        let mut pending: Vec<(&Value, &Value)> = vec![(self, other)];
        while let Some((x, y)) = pending.pop() {
            match (x, y) {
                (Value::Array(xs), Value::Array(ys)) => {
                    if xs.len() != ys.len() {
                        return false;
                    }
                    pending.extend(xs.iter().zip(ys.iter()));
                }
                _ => {
                    if !scalar_eq(x, y) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

/// Equality for everything except arrays; mismatched kinds are never equal.
fn scalar_eq(x: &Value, y: &Value) -> bool {
    match (x, y) {
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Char(a), Value::Char(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Closure(a), Value::Closure(b)) => a.ptr_eq(b),
        _ => false,
    }
}

impl PartialOrd for Value {
    /// Arrays rank by length first with the longer array ordered first;
    /// only equal-length arrays are compared element by element.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let mut frames: Vec<Zip<Iter<'_, Value>, Iter<'_, Value>>> = Vec::new();
        let mut next = Some((self, other));
        loop {
            if let Some((x, y)) = next.take() {
                match (x, y) {
                    (Value::Array(xs), Value::Array(ys)) => match ys.len().cmp(&xs.len()) {
                        Ordering::Equal => frames.push(xs.iter().zip(ys.iter())),
                        unequal => return Some(unequal),
                    },
                    _ => match scalar_cmp(x, y)? {
                        Ordering::Equal => {}
                        unequal => return Some(unequal),
                    },
                }
            }

            let frame = match frames.last_mut() {
                Some(frame) => frame,
                None => return Some(Ordering::Equal),
            };
            match frame.next() {
                Some(pair) => next = Some(pair),
                None => {
                    frames.pop();
                }
            }
        }
    }
}

/// Native ordering within one scalar kind. Strings compare byte-wise; a
/// closure is only ordered against itself, as `Equal`.
fn scalar_cmp(x: &Value, y: &Value) -> Option<Ordering> {
    match (x, y) {
        (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
        (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Char(a), Value::Char(b)) => a.partial_cmp(b),
        (Value::String(a), Value::String(b)) => a.as_bytes().partial_cmp(b.as_bytes()),
        (Value::Closure(a), Value::Closure(b)) if a.ptr_eq(b) => Some(Ordering::Equal),
        _ => None,
    }
}

/// Signed three-way result: negative, zero or positive
pub fn ordering_to_int(ordering: Ordering) -> i64 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

impl Value {
    /// Three-way comparison in the signed-integer convention
    pub fn compare(&self, other: &Value) -> AnyrtResult<i64> {
        self.partial_cmp(other)
            .map(ordering_to_int)
            .ok_or(AnyrtError::Incomparable {
                left: self.kind(),
                right: other.kind(),
            })
    }
}
