//! Instruction decoding.
//!
//! One instruction per line. Lines that do not decode are skipped: the
//! machine never sees them and its state is unchanged.

use std::fmt;
use std::str::FromStr;

use aoc_core::{InputError, Ticks};
use thiserror::Error;

/// A decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// One cycle, no effect.
    Noop,
    /// Two cycles, then X += delta.
    AddX(i64),
}

impl Instruction {
    /// Number of cycles the instruction occupies.
    #[must_use]
    pub const fn duration(self) -> Ticks {
        match self {
            Instruction::Noop => Ticks::new(1),
            Instruction::AddX(_) => Ticks::new(2),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Noop => write!(f, "noop"),
            Instruction::AddX(delta) => write!(f, "addx {delta}"),
        }
    }
}

/// Why a line is not an instruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseInstructionError {
    #[error("empty line")]
    Empty,
    #[error("unknown opcode {0:?}")]
    UnknownOpcode(String),
    #[error("addx needs an operand")]
    MissingOperand,
    #[error("invalid operand {0:?}")]
    InvalidOperand(String),
    #[error("unexpected operand {0:?}")]
    UnexpectedOperand(String),
}

impl FromStr for Instruction {
    type Err = ParseInstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_ascii_whitespace();
        let opcode = words.next().ok_or(ParseInstructionError::Empty)?;
        let instr = match opcode {
            "noop" => Instruction::Noop,
            "addx" => {
                let operand = words.next().ok_or(ParseInstructionError::MissingOperand)?;
                let delta = operand
                    .parse()
                    .map_err(|_| ParseInstructionError::InvalidOperand(operand.to_string()))?;
                Instruction::AddX(delta)
            }
            other => return Err(ParseInstructionError::UnknownOpcode(other.to_string())),
        };
        match words.next() {
            Some(extra) => Err(ParseInstructionError::UnexpectedOperand(extra.to_string())),
            None => Ok(instr),
        }
    }
}

/// Lazy decoder from input lines to instructions.
///
/// Single pass: consuming it consumes the underlying lines. I/O errors
/// are passed through, undecodable lines are dropped.
#[derive(Debug)]
pub struct Program<I> {
    lines: I,
    line: usize,
}

impl<I> Iterator for Program<I>
where
    I: Iterator<Item = Result<String, InputError>>,
{
    type Item = Result<Instruction, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(e) => return Some(Err(e)),
            };
            self.line += 1;
            match text.parse() {
                Ok(instr) => return Some(Ok(instr)),
                Err(ParseInstructionError::Empty) => {
                    log::trace!("line {}: blank", self.line);
                }
                Err(e) => log::debug!("line {}: skipping {text:?}: {e}", self.line),
            }
        }
    }
}

/// Decode a stream of input lines.
pub fn decode<I>(lines: I) -> Program<I::IntoIter>
where
    I: IntoIterator<Item = Result<String, InputError>>,
{
    Program {
        lines: lines.into_iter(),
        line: 0,
    }
}

/// Decode in-memory program text, dropping undecodable lines.
#[must_use]
pub fn parse_program(source: &str) -> Vec<Instruction> {
    source.lines().filter_map(|line| line.parse().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_forms() {
        assert_eq!("noop".parse::<Instruction>(), Ok(Instruction::Noop));
        assert_eq!("addx 3".parse::<Instruction>(), Ok(Instruction::AddX(3)));
        assert_eq!("addx -35".parse::<Instruction>(), Ok(Instruction::AddX(-35)));
        assert_eq!("  addx   +7 ".parse::<Instruction>(), Ok(Instruction::AddX(7)));
    }

    #[test]
    fn parse_rejects_everything_else() {
        assert_eq!(
            "jmp 5".parse::<Instruction>(),
            Err(ParseInstructionError::UnknownOpcode("jmp".into()))
        );
        assert_eq!("".parse::<Instruction>(), Err(ParseInstructionError::Empty));
        assert_eq!(
            "addx".parse::<Instruction>(),
            Err(ParseInstructionError::MissingOperand)
        );
        assert_eq!(
            "addx five".parse::<Instruction>(),
            Err(ParseInstructionError::InvalidOperand("five".into()))
        );
        assert_eq!(
            "noop 1".parse::<Instruction>(),
            Err(ParseInstructionError::UnexpectedOperand("1".into()))
        );
        // No first-letter aliases.
        assert!("nop".parse::<Instruction>().is_err());
        assert!("add 3".parse::<Instruction>().is_err());
    }

    #[test]
    fn display_matches_source_form() {
        assert_eq!(Instruction::AddX(-5).to_string(), "addx -5");
        assert_eq!(Instruction::Noop.to_string(), "noop");
    }

    #[test]
    fn durations() {
        assert_eq!(Instruction::Noop.duration(), Ticks::new(1));
        assert_eq!(Instruction::AddX(0).duration(), Ticks::new(2));
    }

    #[test]
    fn decode_skips_malformed_and_passes_errors() {
        let lines = vec![
            Ok("noop".to_string()),
            Ok("jmp 5".to_string()),
            Ok(String::new()),
            Ok("addx 2".to_string()),
            Err(InputError::Malformed {
                line: 5,
                content: "boom".into(),
            }),
        ];
        let mut program = decode(lines);
        assert!(matches!(program.next(), Some(Ok(Instruction::Noop))));
        assert!(matches!(program.next(), Some(Ok(Instruction::AddX(2)))));
        assert!(matches!(program.next(), Some(Err(InputError::Malformed { line: 5, .. }))));
        assert!(program.next().is_none());
    }

    #[test]
    fn parse_program_drops_bad_lines() {
        assert_eq!(
            parse_program("noop\nbogus\naddx 1\n"),
            [Instruction::Noop, Instruction::AddX(1)]
        );
    }
}
