//! Typed extraction
//!
//! `FromValue` is the checked replacement for an unchecked cast: each impl
//! names the kind it accepts and fails with `KindMismatch` otherwise.

use std::sync::Arc;

use im::Vector;

use crate::error::{AnyrtError, AnyrtResult};
use super::{Closure, Kind, Value};

/// Payload types that can be extracted from a `Value`
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> AnyrtResult<Self>;
}

impl FromValue for bool {
    fn from_value(value: &Value) -> AnyrtResult<Self> {
        value.as_bool()
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> AnyrtResult<Self> {
        value.as_int()
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> AnyrtResult<Self> {
        value.as_number()
    }
}

impl FromValue for char {
    fn from_value(value: &Value) -> AnyrtResult<Self> {
        value.as_char()
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> AnyrtResult<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromValue for Arc<str> {
    fn from_value(value: &Value) -> AnyrtResult<Self> {
        match value {
            Value::String(s) => Ok(Arc::clone(s)),
            other => Err(AnyrtError::kind_mismatch(Kind::String, other.kind())),
        }
    }
}

impl FromValue for Vector<Value> {
    fn from_value(value: &Value) -> AnyrtResult<Self> {
        value.as_array().cloned()
    }
}

impl FromValue for Vec<Value> {
    fn from_value(value: &Value) -> AnyrtResult<Self> {
        Ok(value.as_array()?.iter().cloned().collect())
    }
}

impl FromValue for Closure {
    fn from_value(value: &Value) -> AnyrtResult<Self> {
        value.as_closure().cloned()
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> AnyrtResult<Self> {
        Ok(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_round_trips_each_kind() {
        assert!(Value::from(true).extract::<bool>().unwrap());
        assert_eq!(Value::from(-7).extract::<i64>().unwrap(), -7);
        assert_eq!(Value::from(0.25).extract::<f64>().unwrap(), 0.25);
        assert_eq!(Value::from('λ').extract::<char>().unwrap(), 'λ');
        assert_eq!(Value::from("abc").extract::<String>().unwrap(), "abc");
        assert_eq!(&*Value::from("abc").extract::<Arc<str>>().unwrap(), "abc");

        let items = vec![Value::from(1), Value::from("two")];
        let arr = Value::from(items.clone());
        assert_eq!(arr.extract::<Vec<Value>>().unwrap(), items);
        assert_eq!(arr.extract::<Vector<Value>>().unwrap().len(), 2);

        let f = Value::closure("id", Ok);
        let c = f.extract::<Closure>().unwrap();
        assert_eq!(c.label(), "id");
        assert!(c.ptr_eq(f.as_closure().unwrap()));
    }

    #[test]
    fn extract_wrong_kind_reports_both_kinds() {
        let err = Value::from(1.5).extract::<i64>().unwrap_err();
        assert_eq!(err, AnyrtError::KindMismatch { expected: Kind::Integer, found: Kind::Double });

        let err = Value::from('c').extract::<String>().unwrap_err();
        assert_eq!(err, AnyrtError::KindMismatch { expected: Kind::String, found: Kind::Character });

        let err = Value::empty_array().extract::<Closure>().unwrap_err();
        assert_eq!(err, AnyrtError::KindMismatch { expected: Kind::Closure, found: Kind::Array });
    }
}
