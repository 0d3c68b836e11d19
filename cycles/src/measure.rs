use std::hint::black_box;
use std::num::NonZeroUsize;

use fibcycles_fibonacci::fibonacci;

use crate::CycleCounter;

/// The value returned by a measured computation, together with the number of
/// counter ticks between the reads before and after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measured<T> {
    pub value: T,
    pub cycles: u64,
}

/// Runs `f`, bracketed by two reads of `counter`.
pub fn measure<C, T>(counter: &C, f: impl FnOnce() -> T) -> Measured<T>
where
    C: CycleCounter + ?Sized,
{
    let start = counter.read();
    let value = black_box(f());
    let stop = counter.read();

    let cycles = stop.wrapping_sub(start);
    log::trace!("{}: {start} -> {stop} ({cycles} ticks)", counter.name());
    Measured { value, cycles }
}

/// Measures `f` `runs` times and keeps the run with the fewest ticks.
///
/// Ties keep the earliest run. Only the kept run's value is returned, so `f`
/// should be deterministic.
pub fn measure_min<C, T>(
    counter: &C,
    runs: NonZeroUsize,
    mut f: impl FnMut() -> T,
) -> Measured<T>
where
    C: CycleCounter + ?Sized,
{
    let mut best = measure(counter, &mut f);
    log::debug!("run 1/{runs}: {} ticks", best.cycles);

    for run in 2..=runs.get() {
        let sample = measure(counter, &mut f);
        log::debug!("run {run}/{runs}: {} ticks", sample.cycles);
        if sample.cycles < best.cycles {
            best = sample;
        }
    }
    best
}

/// Computes `fibonacci(index)` and measures it with `counter`.
pub fn timed_fibonacci<C>(counter: &C, index: u64) -> Measured<u64>
where
    C: CycleCounter + ?Sized,
{
    measure(counter, || fibonacci(black_box(index)))
}
