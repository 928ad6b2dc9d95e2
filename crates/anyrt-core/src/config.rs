//! Anyrt Configuration
//!
//! Limits for the debug rendering of values (`Display for Value`).
//! Configuration specifies limits only; the renderer enforces them.
//! `show*` primitives are never affected.

use std::cell::Cell;
use std::env;

/// Environment variable overriding `print_length`
pub const PRINT_LENGTH_VAR: &str = "ANYRT_PRINT_LENGTH";

/// Environment variable overriding `print_depth`
pub const PRINT_DEPTH_VAR: &str = "ANYRT_PRINT_DEPTH";

thread_local! {
    static CURRENT: Cell<AnyrtConfig> = Cell::new(AnyrtConfig::from_env());
}

/// Runtime configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnyrtConfig {
    /// Maximum number of array elements rendered; `None` is unlimited
    pub print_length: Option<usize>,

    /// Maximum array nesting rendered; `None` is unlimited
    pub print_depth: Option<usize>,
}

impl Default for AnyrtConfig {
    fn default() -> Self {
        AnyrtConfig {
            print_length: Some(100),
            print_depth: Some(32),
        }
    }
}

impl AnyrtConfig {
    /// Create a new configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `ANYRT_PRINT_LENGTH` / `ANYRT_PRINT_DEPTH`.
    /// A value of `0` or `none` lifts the limit; unparsable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(limit) = read_limit(PRINT_LENGTH_VAR) {
            config.print_length = limit;
        }
        if let Some(limit) = read_limit(PRINT_DEPTH_VAR) {
            config.print_depth = limit;
        }
        config
    }

    /// Install these limits for the current thread
    pub fn apply(&self) {
        CURRENT.with(|c| c.set(*self));
    }

    /// Limits currently installed on this thread. A thread starts with
    /// `from_env()` until `apply` replaces it.
    pub fn current() -> Self {
        CURRENT.with(Cell::get)
    }
}

fn read_limit(var: &str) -> Option<Option<usize>> {
    let raw = env::var(var).ok()?;
    parse_limit(&raw).or_else(|| {
        log::warn!("ignoring {}={:?}: not a limit", var, raw);
        None
    })
}

fn parse_limit(raw: &str) -> Option<Option<usize>> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("none") {
        return Some(None);
    }
    match raw.parse::<usize>().ok()? {
        0 => Some(None),
        n => Some(Some(n)),
    }
}
