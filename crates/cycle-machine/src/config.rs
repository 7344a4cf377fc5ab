//! Machine configuration.

use aoc_core::Ticks;

/// Sampling and display parameters.
///
/// `Default` gives the handheld device's fixed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    /// First cycle at which signal strength is sampled.
    pub first_checkpoint: Ticks,
    /// Distance between successive sample cycles.
    pub checkpoint_interval: Ticks,
    /// CRT pixels per row.
    pub row_width: u64,
    /// Glyph for a lit pixel.
    pub lit: char,
    /// Glyph for a dark pixel.
    pub dark: char,
}

impl MachineConfig {
    /// Sentinel emitted after the last pixel of each row.
    pub const ROW_TERMINATOR: char = '\n';

    #[must_use]
    pub const fn new() -> Self {
        Self {
            first_checkpoint: Ticks::new(20),
            checkpoint_interval: Ticks::new(40),
            row_width: 40,
            lit: '#',
            dark: '.',
        }
    }

    /// Glyph for a pixel in the given state.
    #[must_use]
    pub const fn glyph(&self, lit: bool) -> char {
        if lit { self.lit } else { self.dark }
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::new()
    }
}
