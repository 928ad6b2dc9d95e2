//! Closure payload
//!
//! A callable `Value -> Value` owning a snapshot of whatever it captured.
//! Captures are moved in at construction, so a closure never observes later
//! changes made by its creator.

use std::fmt;
use std::sync::Arc;

use crate::error::AnyrtResult;
use super::Value;

type Body = dyn Fn(Value) -> AnyrtResult<Value> + Send + Sync;

/// Single-argument callable over erased values
#[derive(Clone)]
pub struct Closure {
    label: &'static str,
    body: Arc<Body>,
}

impl Closure {
    pub fn new<F>(label: &'static str, body: F) -> Self
    where
        F: Fn(Value) -> AnyrtResult<Value> + Send + Sync + 'static,
    {
        Closure {
            label,
            body: Arc::new(body),
        }
    }

    /// Invoke with one argument; errors raised by the body are returned untouched
    pub fn call(&self, arg: Value) -> AnyrtResult<Value> {
        (self.body)(arg)
    }

    /// Name used when rendering and logging
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Identity comparison; closures have no structural equality
    pub fn ptr_eq(&self, other: &Closure) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Closure({})", self.label)
    }
}
