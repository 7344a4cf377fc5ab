//! Observability trait for inspecting solver state.
//!
//! Machines expose their internal state for debugging and tests. Queries
//! never affect machine state.

use std::fmt;

/// A dynamically-typed value for state queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// Unsigned integer (cycle numbers, counts).
    U64(u64),
    /// Signed integer (register contents, sums).
    I64(i64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::U64(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
        }
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::U64(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<crate::Ticks> for Value {
    fn from(v: crate::Ticks) -> Self {
        Value::U64(v.get())
    }
}

/// A component whose state can be inspected.
pub trait Observable {
    /// Query a specific property by path.
    ///
    /// Paths are flat or dotted names such as `x`, `cycle` or
    /// `config.interval`. Returns `None` if the path is not recognised.
    fn query(&self, path: &str) -> Option<Value>;

    /// List all available query paths.
    fn query_paths(&self) -> &'static [&'static str];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_plain_number() {
        assert_eq!(Value::from(-1_i64).to_string(), "-1");
        assert_eq!(Value::from(240_u64).to_string(), "240");
    }

    #[test]
    fn ticks_convert_to_u64() {
        assert_eq!(Value::from(crate::Ticks::new(20)), Value::U64(20));
    }
}
