//! Measurement harness: warm-up, timed repetitions, cycles-per-element.
//!
//! The harness runs one untimed warm-up invocation of a kernel to populate
//! cache state, then a configured number of timed back-to-back invocations,
//! and converts the elapsed wall time into cycles per element (CPE) using a
//! configured CPU frequency:
//!
//! ```text
//! cpe = elapsed_secs * cpu_freq_hz / (len * repeat)
//! ```
//!
//! The frequency is an externally supplied constant. The harness never
//! calibrates or detects the actual CPU frequency; the conversion factor is
//! explicit configuration so it stays testable and overridable.

pub mod report;
pub mod timer;

use std::hint::black_box;
use std::time::Duration;

use crate::element::Element;
use crate::error::{ReduceError, ReduceResult};
use crate::kernels::Variant;
use crate::ops::CombineOp;
use crate::vector::NumVec;

use self::timer::{Clock, MonotonicClock};

/// Conversion policy and repetition count for one measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarnessConfig {
    /// Assumed CPU clock frequency in Hz for the cycle conversion.
    pub cpu_freq_hz: f64,
    /// Timed invocations per measurement. Must be at least 1.
    pub repeat: u32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            cpu_freq_hz: 2.6e9,
            repeat: 100,
        }
    }
}

impl HarnessConfig {
    /// Default repetition count with the frequency given in GHz.
    pub fn with_freq_ghz(freq_ghz: f64) -> Self {
        Self {
            cpu_freq_hz: freq_ghz * 1e9,
            ..Self::default()
        }
    }
}

/// Timing result for one kernel under one operation, plus the reduction
/// value the kernel produced. Transient; nothing is persisted.
#[derive(Debug, Clone, Copy)]
pub struct Measurement<T> {
    /// The reduction result of the final timed invocation.
    pub result: T,
    /// Wall time across the timed invocations.
    pub elapsed: Duration,
    /// Elapsed time converted to cycles at the configured frequency.
    pub cycles: f64,
    /// Cycles per element. Zero for an empty vector.
    pub cpe: f64,
}

/// Runs kernels under a clock and converts elapsed time to CPE.
#[derive(Debug)]
pub struct Harness<C: Clock = MonotonicClock> {
    config: HarnessConfig,
    clock: C,
}

impl Harness<MonotonicClock> {
    pub fn new(config: HarnessConfig) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> Harness<C> {
    /// Harness over a caller-supplied time source.
    pub fn with_clock(config: HarnessConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Measures `variant` applying `op` over `v`.
    ///
    /// One warm-up invocation runs outside the timed window, then exactly
    /// `repeat` invocations run back-to-back between two clock reads. The
    /// vector is never mutated; clock reads are the only side effect.
    ///
    /// Fails with [`ReduceError::InvalidRepeatCount`] when the configured
    /// repeat count is 0 and propagates [`ReduceError::ClockUnavailable`]
    /// from the time source.
    pub fn measure<T: Element>(
        &self,
        v: &NumVec<T>,
        variant: Variant,
        op: CombineOp,
    ) -> ReduceResult<Measurement<T>> {
        if self.config.repeat == 0 {
            return Err(ReduceError::InvalidRepeatCount);
        }

        let mut dest: T = op.identity();
        variant.run_into(v, op, &mut dest);

        let start = self.clock.now()?;
        for _ in 0..self.config.repeat {
            variant.run_into(v, op, &mut dest);
            black_box(&dest);
        }
        let end = self.clock.now()?;

        let elapsed = end.saturating_sub(start);
        let cycles = elapsed.as_secs_f64() * self.config.cpu_freq_hz;
        let total_elements = v.len() as f64 * f64::from(self.config.repeat);
        let cpe = if total_elements > 0.0 {
            cycles / total_elements
        } else {
            0.0
        };

        Ok(Measurement {
            result: dest,
            elapsed,
            cycles,
            cpe,
        })
    }
}
