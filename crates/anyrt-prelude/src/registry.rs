//! Primitive table
//!
//! Every prelude module exports a `PRIMITIVES` table; this is the single
//! place that enumerates them, keyed by the name generated code links to.

use anyrt_core::{AnyrtResult, Value};

use crate::{bind, eq, functor, lattice, monoid, numeric, ord, show};

/// A curried prelude primitive
#[derive(Clone, Copy)]
pub struct Primitive {
    /// Foreign name as referenced by compiled code
    pub name: &'static str,
    /// Number of arguments before the primitive is saturated
    pub arity: usize,
    /// Applies the first argument
    pub entry: fn(&Value) -> AnyrtResult<Value>,
}

impl Primitive {
    /// The primitive as a first-class closure value
    pub fn to_value(&self) -> Value {
        let entry = self.entry;
        Value::closure(self.name, move |arg| entry(&arg))
    }
}

pub(crate) const ALL_TABLES: &[&[Primitive]] = &[
    functor::PRIMITIVES,
    bind::PRIMITIVES,
    monoid::PRIMITIVES,
    numeric::PRIMITIVES,
    eq::PRIMITIVES,
    ord::PRIMITIVES,
    lattice::PRIMITIVES,
    show::PRIMITIVES,
];

/// Iterate over every primitive
pub fn primitives() -> impl Iterator<Item = &'static Primitive> {
    ALL_TABLES.iter().flat_map(|table| table.iter())
}

/// Find a primitive by its foreign name
pub fn lookup(name: &str) -> Option<Value> {
    let found = primitives().find(|p| p.name == name);
    if found.is_none() {
        log::debug!("no prelude primitive named {}", name);
    }
    found.map(Primitive::to_value)
}
