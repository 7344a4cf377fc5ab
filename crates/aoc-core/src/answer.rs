//! Solver results, printable as text or serialisable as JSON.

use std::fmt;

use serde::Serialize;

/// The result of one solver run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Number(i64),
    /// One number per input record.
    Numbers(Vec<i64>),
    /// Multi-line output such as a rendered screen, one entry per row.
    Lines(Vec<String>),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{n}"),
            Answer::Numbers(ns) => {
                for (i, n) in ns.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{n}")?;
                }
                Ok(())
            }
            Answer::Lines(rows) => {
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{row}")?;
                }
                Ok(())
            }
        }
    }
}

/// An answer tagged with the puzzle it solves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub day: u8,
    pub part: u8,
    pub answer: Answer,
}
