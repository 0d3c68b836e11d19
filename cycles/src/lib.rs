//! Measures how many counter ticks a computation takes.
//!
//! The counter is abstracted behind [`CycleCounter`], so measurements can be
//! taken with the processor's cycle counter, a monotonic clock, or a fake
//! counter in tests. Reading the counter never changes what the measured
//! computation returns.

mod counter;
mod measure;

pub use counter::{CounterKind, CycleCounter, HardwareCounter, MonotonicClock};
pub use measure::{measure, measure_min, timed_fibonacci, Measured};
