//! Register file and cycle counter.

use aoc_core::Ticks;

use crate::Instruction;

/// Architectural state shared by both operating modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineState {
    /// The X register.
    pub register: i64,
    /// The cycle currently being executed.
    pub cycle: Ticks,
}

impl MachineState {
    pub const INITIAL_REGISTER: i64 = 1;

    #[must_use]
    pub const fn new(start: Ticks) -> Self {
        Self {
            register: Self::INITIAL_REGISTER,
            cycle: start,
        }
    }

    /// Apply an instruction's effect at the end of its last cycle.
    ///
    /// The register is 64-bit two's complement and wraps on overflow.
    pub fn retire(&mut self, instr: Instruction) {
        match instr {
            Instruction::Noop => {}
            Instruction::AddX(delta) => self.register = self.register.wrapping_add(delta),
        }
    }

    /// Move to the next cycle.
    pub fn advance(&mut self) {
        self.cycle += Ticks::ONE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addx_applies_delta_on_retire() {
        let mut state = MachineState::new(Ticks::ONE);
        state.retire(Instruction::AddX(3));
        state.retire(Instruction::Noop);
        state.retire(Instruction::AddX(-5));
        assert_eq!(state.register, -1);
        assert_eq!(state.cycle, Ticks::ONE);
    }

    #[test]
    fn register_wraps_at_i64_bounds() {
        let mut state = MachineState::new(Ticks::ONE);
        state.retire(Instruction::AddX(i64::MAX - 1));
        assert_eq!(state.register, i64::MAX);
        state.retire(Instruction::AddX(1));
        assert_eq!(state.register, i64::MIN);
        state.retire(Instruction::AddX(-1));
        assert_eq!(state.register, i64::MAX);
    }
}
