use std::time::Instant;

use strum::{Display, EnumString, EnumVariantNames};

/// A monotonically increasing tick source.
///
/// Only differences between two reads are meaningful. Implementations may
/// wrap around at `u64::MAX`; [`crate::measure`] subtracts with wrapping.
pub trait CycleCounter {
    /// Reads the current tick value.
    fn read(&self) -> u64;

    /// A short human readable name of the tick source.
    fn name(&self) -> &'static str;
}

impl<C: CycleCounter + ?Sized> CycleCounter for Box<C> {
    fn read(&self) -> u64 {
        (**self).read()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// The processor's cycle counter.
///
/// Uses `rdtsc` on x86_64 and the virtual counter `cntvct_el0` on aarch64.
/// Other targets have no portable counter and fall back to [`MonotonicClock`].
#[derive(Debug)]
pub struct HardwareCounter {
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    fallback: MonotonicClock,
}

impl HardwareCounter {
    pub fn new() -> Self {
        Self {
            #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
            fallback: MonotonicClock::new(),
        }
    }
}

impl Default for HardwareCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleCounter for HardwareCounter {
    #[cfg(target_arch = "x86_64")]
    #[allow(unused_unsafe)]
    fn read(&self) -> u64 {
        // SAFETY: rdtsc is available on every x86_64 processor.
        unsafe { core::arch::x86_64::_rdtsc() }
    }

    #[cfg(target_arch = "aarch64")]
    fn read(&self) -> u64 {
        let ticks: u64;
        // SAFETY: cntvct_el0 is readable from EL0 on all aarch64 targets we run on.
        unsafe {
            core::arch::asm!("mrs {}, cntvct_el0", out(reg) ticks, options(nostack));
        }
        ticks
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    fn read(&self) -> u64 {
        self.fallback.read()
    }

    fn name(&self) -> &'static str {
        if cfg!(target_arch = "x86_64") {
            "rdtsc"
        } else if cfg!(target_arch = "aarch64") {
            "cntvct_el0"
        } else {
            "monotonic clock"
        }
    }
}

/// Nanoseconds elapsed since the clock was created.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleCounter for MonotonicClock {
    fn read(&self) -> u64 {
        // u64 nanoseconds last for more than 500 years
        self.origin.elapsed().as_nanos() as u64
    }

    fn name(&self) -> &'static str {
        "monotonic clock"
    }
}

/// Selects a [`CycleCounter`] implementation by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumString, EnumVariantNames, Display)]
pub enum CounterKind {
    #[default]
    #[strum(serialize = "hardware")]
    Hardware,
    #[strum(serialize = "monotonic")]
    Monotonic,
}

impl CounterKind {
    pub fn counter(self) -> Box<dyn CycleCounter> {
        match self {
            CounterKind::Hardware => Box::new(HardwareCounter::new()),
            CounterKind::Monotonic => Box::new(MonotonicClock::new()),
        }
    }
}
