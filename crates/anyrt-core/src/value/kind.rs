//! Value kinds
//!
//! The closed set of payloads an erased value can carry.

use std::fmt;

/// Discriminant of a `Value`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Boolean,
    Integer,
    Double,
    Character,
    String,
    Array,
    Closure,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Double => "double",
            Kind::Character => "character",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Closure => "closure",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
