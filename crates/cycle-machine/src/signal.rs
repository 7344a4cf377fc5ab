//! Signal-strength probe.
//!
//! Cycle numbering starts at 1. At every cycle boundary the probe compares
//! the current cycle with its next checkpoint; on a match it accumulates
//! `cycle * X` and moves the checkpoint one interval on. Because the test
//! runs at every boundary, a checkpoint is never missed however the
//! instructions around it are laid out, and because the checkpoint moves
//! after a hit, a boundary that is tested twice is never counted twice.

use aoc_core::{InputError, Observable, Tickable, Ticks, Value};

use crate::{Instruction, MachineConfig, MachineState};

/// CPU plus signal sampler.
#[derive(Debug, Clone)]
pub struct SignalProbe {
    state: MachineState,
    checkpoint: Ticks,
    interval: Ticks,
    signal_sum: i64,
    samples: u64,
}

impl SignalProbe {
    /// First cycle number in signal mode.
    pub const START_CYCLE: Ticks = Ticks::ONE;

    #[must_use]
    pub fn new(config: &MachineConfig) -> Self {
        Self {
            state: MachineState::new(Self::START_CYCLE),
            checkpoint: config.first_checkpoint,
            interval: config.checkpoint_interval,
            signal_sum: 0,
            samples: 0,
        }
    }

    /// Run one instruction to completion.
    ///
    /// Each of its cycles is sampled with the register value held during
    /// that cycle; the retired value is then sampled at the boundary with
    /// the following instruction.
    pub fn execute(&mut self, instr: Instruction) {
        self.tick_n(instr.duration());
        self.state.retire(instr);
        self.sample();
    }

    /// Fold a whole program into the probe.
    pub fn run<I>(mut self, program: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = Result<Instruction, InputError>>,
    {
        for instr in program {
            self.execute(instr?);
        }
        log::debug!(
            "signal: {} samples, sum {} after cycle {}",
            self.samples,
            self.signal_sum,
            self.state.cycle
        );
        Ok(self)
    }

    fn sample(&mut self) {
        if self.state.cycle != self.checkpoint {
            return;
        }
        let strength = (self.state.cycle.get() as i64).wrapping_mul(self.state.register);
        log::debug!(
            "checkpoint {}: X = {}, strength {strength}",
            self.state.cycle,
            self.state.register
        );
        self.signal_sum = self.signal_sum.wrapping_add(strength);
        self.samples += 1;
        self.checkpoint += self.interval;
    }

    #[must_use]
    pub fn signal_sum(&self) -> i64 {
        self.signal_sum
    }

    #[must_use]
    pub fn register(&self) -> i64 {
        self.state.register
    }

    #[must_use]
    pub fn cycle(&self) -> Ticks {
        self.state.cycle
    }

    /// Next cycle that will be sampled.
    #[must_use]
    pub fn checkpoint(&self) -> Ticks {
        self.checkpoint
    }

    /// Number of checkpoints hit so far.
    #[must_use]
    pub fn samples(&self) -> u64 {
        self.samples
    }
}

impl Tickable for SignalProbe {
    fn tick(&mut self) {
        self.sample();
        self.state.advance();
    }
}

impl Observable for SignalProbe {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "x" => Some(self.state.register.into()),
            "cycle" => Some(self.state.cycle.into()),
            "checkpoint" => Some(self.checkpoint.into()),
            "interval" => Some(self.interval.into()),
            "samples" => Some(self.samples.into()),
            "signal_sum" => Some(self.signal_sum.into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &["x", "cycle", "checkpoint", "interval", "samples", "signal_sum"]
    }
}

/// Sum of signal strengths over a program, with default sampling.
pub fn signal_strength<I>(program: I) -> Result<i64, InputError>
where
    I: IntoIterator<Item = Result<Instruction, InputError>>,
{
    SignalProbe::new(&MachineConfig::default())
        .run(program)
        .map(|probe| probe.signal_sum())
}
