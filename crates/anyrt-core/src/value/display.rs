//! Debug rendering of values for logs and diagnostics.
//!
//! Honors the per-thread print limits from `AnyrtConfig`. This is not the
//! language's `show`; those primitives live in the prelude and never truncate.

use std::fmt;

use crate::config::AnyrtConfig;
use super::Value;

/// An array being written: elements left to visit and how many may still be shown
struct Frame<'a> {
    items: im::vector::Iter<'a, Value>,
    remaining: usize,
    truncated: bool,
    first: bool,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let limits = AnyrtConfig::current();
        let shown = limits.print_length.unwrap_or(usize::MAX);
        let mut stack: Vec<Frame<'_>> = Vec::new();
        let mut next = Some(self);
        loop {
            match next.take() {
                Some(Value::Array(items)) => {
                    if limits.print_depth.is_some_and(|max| stack.len() >= max) {
                        f.write_str("[...]")?;
                    } else {
                        f.write_str("[")?;
                        stack.push(Frame {
                            items: items.iter(),
                            remaining: shown,
                            truncated: items.len() > shown,
                            first: true,
                        });
                    }
                }
                Some(scalar) => render_scalar(scalar, f)?,
                None => {}
            }

            let Some(frame) = stack.last_mut() else {
                return Ok(());
            };
            if frame.remaining > 0 {
                if let Some(item) = frame.items.next() {
                    if !frame.first {
                        f.write_str(",")?;
                    }
                    frame.first = false;
                    frame.remaining -= 1;
                    next = Some(item);
                    continue;
                }
            }
            if frame.truncated {
                f.write_str(if frame.first { "..." } else { ",..." })?;
            }
            f.write_str("]")?;
            stack.pop();
        }
    }
}

fn render_scalar(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Bool(b) => write!(f, "{}", b),
        Value::Int(n) => write!(f, "{}", n),
        Value::Number(n) => write!(f, "{}", n),
        Value::Char(c) => write!(f, "'{}'", c),
        Value::String(s) => write!(f, "\"{}\"", s),
        Value::Closure(c) => write!(f, "#<closure {}>", c.label()),
        Value::Array(_) => unreachable!("arrays are written by the frame loop"),
    }
}
