//! Anyrt - Core Library
//!
//! The erased runtime value shared by compiled functional code and its
//! prelude primitives.

pub mod error;
pub mod config;
pub mod value;

// Re-export commonly used types
pub use error::{AnyrtError, AnyrtResult};
pub use config::AnyrtConfig;
pub use value::{Closure, FromValue, Kind, Value};
pub use value::ordering_to_int;
