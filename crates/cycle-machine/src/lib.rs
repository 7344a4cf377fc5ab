//! Cycle-accurate two-instruction CPU.
//!
//! The CPU has one register, X, starting at 1, and two instructions:
//! `noop` (1 cycle) and `addx V` (2 cycles, X += V after the second).
//! Two components watch it tick:
//! - [`SignalProbe`] samples `cycle * X` at cycles 20, 60, 100, ...
//! - [`Crt`] draws one pixel per cycle, lit when the 3-wide sprite centred
//!   on X covers the column being drawn.
//!
//! Register writes land between ticks, so a sample or pixel always sees
//! the value X held *during* its cycle.

#[cfg(feature = "capture")]
pub mod capture;
mod config;
mod crt;
mod instruction;
mod signal;
mod state;

pub use config::MachineConfig;
pub use crt::{Crt, Scanout, Screen};
pub use instruction::{Instruction, ParseInstructionError, Program, decode, parse_program};
pub use signal::{SignalProbe, signal_strength};
pub use state::MachineState;
