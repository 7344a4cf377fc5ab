//! CRT scanout.
//!
//! The beam draws one pixel per cycle, left to right, 40 per row. Cycle
//! numbering starts at 0 so the column being drawn is `cycle % width`. A
//! pixel is lit when the sprite (X-1..=X+1) covers that column.

use std::collections::VecDeque;
use std::fmt;

use aoc_core::{InputError, Observable, Tickable, Ticks, Value};

use crate::{Instruction, MachineConfig, MachineState};

/// CPU plus beam.
///
/// Drawn glyphs queue up in an output buffer until drained.
#[derive(Debug, Clone)]
pub struct Crt {
    state: MachineState,
    config: MachineConfig,
    output: VecDeque<char>,
}

impl Crt {
    /// First cycle number in render mode.
    pub const START_CYCLE: Ticks = Ticks::ZERO;

    #[must_use]
    pub fn new(config: &MachineConfig) -> Self {
        Self {
            state: MachineState::new(Self::START_CYCLE),
            config: *config,
            output: VecDeque::with_capacity(4),
        }
    }

    /// Run one instruction: one pixel per cycle, then retire.
    pub fn execute(&mut self, instr: Instruction) {
        self.tick_n(instr.duration());
        self.state.retire(instr);
    }

    /// Take everything drawn since the last drain.
    pub fn drain(&mut self) -> std::collections::vec_deque::Drain<'_, char> {
        self.output.drain(..)
    }

    fn sprite_covers(&self, column: u64) -> bool {
        self.state.register.abs_diff(column as i64) <= 1
    }

    #[must_use]
    pub fn register(&self) -> i64 {
        self.state.register
    }

    #[must_use]
    pub fn cycle(&self) -> Ticks {
        self.state.cycle
    }
}

impl Tickable for Crt {
    fn tick(&mut self) {
        let width = self.config.row_width;
        let column = self.state.cycle.column(width);
        let row = self.state.cycle.get() / width;
        let lit = self.sprite_covers(column);
        self.output.push_back(self.config.glyph(lit));
        self.state.advance();
        if column == width - 1 {
            log::trace!("row {row} complete");
            self.output.push_back(MachineConfig::ROW_TERMINATOR);
        }
    }
}

impl Observable for Crt {
    fn query(&self, path: &str) -> Option<Value> {
        let width = self.config.row_width;
        match path {
            "x" => Some(self.state.register.into()),
            "cycle" => Some(self.state.cycle.into()),
            "beam.column" => Some(self.state.cycle.column(width).into()),
            "beam.row" => Some((self.state.cycle.get() / width).into()),
            "pending" => Some((self.output.len() as u64).into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &["x", "cycle", "beam.column", "beam.row", "pending"]
    }
}

/// Lazy character stream of a program's screen.
///
/// Pulls instructions only as far as needed to produce the next glyph.
/// After an input error the stream ends.
#[derive(Debug)]
pub struct Scanout<I> {
    crt: Crt,
    program: I,
    failed: bool,
}

impl<I> Scanout<I>
where
    I: Iterator<Item = Result<Instruction, InputError>>,
{
    pub fn new<P>(program: P, config: &MachineConfig) -> Self
    where
        P: IntoIterator<IntoIter = I>,
    {
        Self {
            crt: Crt::new(config),
            program: program.into_iter(),
            failed: false,
        }
    }

    /// The machine driving the stream.
    #[must_use]
    pub fn crt(&self) -> &Crt {
        &self.crt
    }
}

impl<I> Iterator for Scanout<I>
where
    I: Iterator<Item = Result<Instruction, InputError>>,
{
    type Item = Result<char, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(glyph) = self.crt.output.pop_front() {
                return Some(Ok(glyph));
            }
            if self.failed {
                return None;
            }
            match self.program.next()? {
                Ok(instr) => self.crt.execute(instr),
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// A fully drawn screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    rows: Vec<String>,
    width: u64,
    lit: char,
}

impl Screen {
    /// Collect a glyph stream into rows.
    ///
    /// A final row cut short by the end of the program is kept as drawn.
    pub fn collect<S>(stream: S, config: &MachineConfig) -> Result<Self, InputError>
    where
        S: IntoIterator<Item = Result<char, InputError>>,
    {
        let mut rows = Vec::new();
        let mut row = String::with_capacity(config.row_width as usize);
        for glyph in stream {
            match glyph? {
                MachineConfig::ROW_TERMINATOR => rows.push(std::mem::take(&mut row)),
                g => row.push(g),
            }
        }
        if !row.is_empty() {
            rows.push(row);
        }
        Ok(Self {
            rows,
            width: config.row_width,
            lit: config.lit,
        })
    }

    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    #[must_use]
    pub fn width(&self) -> u64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u64 {
        self.rows.len() as u64
    }

    /// Whether the pixel at (x, y) was drawn lit. Undrawn pixels are dark.
    #[must_use]
    pub fn is_lit(&self, x: u64, y: u64) -> bool {
        self.rows
            .get(y as usize)
            .and_then(|row| row.chars().nth(x as usize))
            .is_some_and(|g| g == self.lit)
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
