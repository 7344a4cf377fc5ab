//! Trait for components that can be advanced by clock ticks.

use crate::Ticks;

/// A component that can be advanced by clock ticks.
///
/// Each call to `tick()` is one machine cycle: the component observes its
/// state as it stands *during* the cycle, then moves its cycle counter on.
/// Register writes happen between ticks, never inside one.
pub trait Tickable {
    /// Advance the component by one cycle.
    fn tick(&mut self);

    /// Advance the component by multiple cycles.
    ///
    /// Default implementation calls `tick()` in a loop. Components may
    /// override for efficiency, but must produce identical results.
    fn tick_n(&mut self, count: Ticks) {
        for _ in 0..count.get() {
            self.tick();
        }
    }
}
