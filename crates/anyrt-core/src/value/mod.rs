//! Runtime Value Representation
//!
//! `Value` is the single erased type every compiled function takes and
//! returns. The kind set is closed; every access checks the active kind and
//! fails with `KindMismatch` instead of reinterpreting the payload.

mod closure;
mod compare;
mod display;
mod extract;
mod kind;

use std::mem;
use std::sync::{Arc, OnceLock};

use im::Vector;

use crate::error::{AnyrtError, AnyrtResult};

pub use closure::Closure;
pub use compare::ordering_to_int;
pub use extract::FromValue;
pub use kind::Kind;

/// Erased runtime value
///
/// Cloning never aliases observable state: strings are immutable shares,
/// arrays are shared persistent vectors (copy-on-write), closures own their
/// captures. Cloning is O(1) for every kind.
#[derive(Debug, Clone)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Number(f64),
    Char(char),
    String(Arc<str>),
    Array(Arc<Vector<Value>>),
    Closure(Closure),
}

/// One empty vector shared by every empty array and by drop
fn shared_empty() -> Arc<Vector<Value>> {
    static EMPTY: OnceLock<Arc<Vector<Value>>> = OnceLock::new();
    Arc::clone(EMPTY.get_or_init(|| Arc::new(Vector::new())))
}

/// Detach `slot` if this is the last handle to a non-empty array
fn take_unique(slot: &mut Arc<Vector<Value>>) -> Option<Arc<Vector<Value>>> {
    if slot.is_empty() || Arc::strong_count(slot) != 1 {
        return None;
    }
    Some(mem::replace(slot, shared_empty()))
}

impl Drop for Value {
    /// Nested arrays are released from a heap worklist, so dropping a deeply
    /// nested value never recurses. Shared arrays only lose a reference.
    fn drop(&mut self) {
        let root = match self {
            Value::Array(items) => take_unique(items),
            _ => None,
        };
        let mut pending: Vec<Arc<Vector<Value>>> = root.into_iter().collect();
        while let Some(items) = pending.pop() {
            let Ok(mut items) = Arc::try_unwrap(items) else { continue };
            for item in items.iter_mut() {
                if let Value::Array(inner) = item {
                    pending.extend(take_unique(inner));
                }
            }
        }
    }
}

impl Value {
    /// Wrap a Rust function as a closure value
    pub fn closure<F>(label: &'static str, body: F) -> Self
    where
        F: Fn(Value) -> AnyrtResult<Value> + Send + Sync + 'static,
    {
        Value::Closure(Closure::new(label, body))
    }

    /// Build an array value from any sequence of values
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::from(items.into_iter().collect::<Vector<Value>>())
    }

    pub fn empty_array() -> Self {
        Value::Array(shared_empty())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Boolean,
            Value::Int(_) => Kind::Integer,
            Value::Number(_) => Kind::Double,
            Value::Char(_) => Kind::Character,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Closure(_) => Kind::Closure,
        }
    }

    /// Extract the payload as `T`, failing if the active kind differs
    pub fn extract<T: FromValue>(&self) -> AnyrtResult<T> {
        T::from_value(self)
    }

    pub fn as_bool(&self) -> AnyrtResult<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(AnyrtError::kind_mismatch(Kind::Boolean, other.kind())),
        }
    }

    pub fn as_int(&self) -> AnyrtResult<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(AnyrtError::kind_mismatch(Kind::Integer, other.kind())),
        }
    }

    pub fn as_number(&self) -> AnyrtResult<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(AnyrtError::kind_mismatch(Kind::Double, other.kind())),
        }
    }

    pub fn as_char(&self) -> AnyrtResult<char> {
        match self {
            Value::Char(c) => Ok(*c),
            other => Err(AnyrtError::kind_mismatch(Kind::Character, other.kind())),
        }
    }

    pub fn as_str(&self) -> AnyrtResult<&str> {
        match self {
            Value::String(s) => Ok(&**s),
            other => Err(AnyrtError::kind_mismatch(Kind::String, other.kind())),
        }
    }

    pub fn as_array(&self) -> AnyrtResult<&Vector<Value>> {
        match self {
            Value::Array(items) => Ok(&**items),
            other => Err(AnyrtError::kind_mismatch(Kind::Array, other.kind())),
        }
    }

    pub fn as_closure(&self) -> AnyrtResult<&Closure> {
        match self {
            Value::Closure(c) => Ok(c),
            other => Err(AnyrtError::kind_mismatch(Kind::Closure, other.kind())),
        }
    }

    /// Call this value with `arg`; it must be a closure
    pub fn apply(&self, arg: Value) -> AnyrtResult<Value> {
        self.as_closure()?.call(arg)
    }

    /// Saturate a curried two-argument closure
    pub fn apply2(&self, a: Value, b: Value) -> AnyrtResult<Value> {
        self.apply(a)?.apply(b)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::from(Vector::from(items))
    }
}

impl From<Vector<Value>> for Value {
    fn from(items: Vector<Value>) -> Self {
        Value::Array(Arc::new(items))
    }
}

impl From<Closure> for Value {
    fn from(c: Closure) -> Self {
        Value::Closure(c)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::array(iter)
    }
}
