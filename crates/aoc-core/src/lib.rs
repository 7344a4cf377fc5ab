//! Core traits and types shared by the puzzle solvers.
//!
//! Every solver is a single forward pass over the lines of one input file.
//! Simulated machines count time in [`Ticks`] and advance one tick at a time.

mod answer;
mod input;
mod observable;
mod tickable;
mod ticks;

pub use answer::{Answer, Report};
pub use input::{InputError, InputLines, lines_from_reader, open_lines};
pub use observable::{Observable, Value};
pub use tickable::Tickable;
pub use ticks::Ticks;
