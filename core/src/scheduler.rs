use std::time::Duration;

use crate::constants::{CLOCK_SPEED, TIMER_FREQUENCY};

/// The most wall time a single `advance` will account for. Anything beyond it
/// (a suspended host, a dragged window) is dropped rather than caught up on.
pub const MAX_CATCH_UP: Duration = Duration::from_millis(100);

/// How much work is due after some amount of wall time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ticks {
    pub cpu_steps: u32,
    pub timer_ticks: u32,
}

/// # Scheduler
/// Converts elapsed wall time into CPU steps and timer ticks.
///
/// The two cadences are tracked separately, so the CPU clock can be changed
/// without the timers running any faster or slower than 60Hz. Time that
/// doesn't add up to a whole period carries over to the next `advance`.
/// Each `advance` counts at most `MAX_CATCH_UP` of elapsed time.
#[derive(Debug, Clone)]
pub struct Scheduler {
    cpu_period: Duration,
    timer_period: Duration,
    cpu_debt: Duration,
    timer_debt: Duration,
}

impl Scheduler {
    /// Frequencies are in Hz; zero is treated as 1Hz. Anything above 1GHz
    /// runs with a 1ns period.
    pub fn new(cpu_hz: u32, timer_hz: u32) -> Self {
        Scheduler {
            cpu_period: period(cpu_hz),
            timer_period: period(timer_hz),
            cpu_debt: Duration::ZERO,
            timer_debt: Duration::ZERO,
        }
    }

    pub fn cpu_period(&self) -> Duration {
        self.cpu_period
    }

    pub fn timer_period(&self) -> Duration {
        self.timer_period
    }

    pub fn advance(&mut self, elapsed: Duration) -> Ticks {
        let elapsed = elapsed.min(MAX_CATCH_UP);
        Ticks {
            cpu_steps: drain(&mut self.cpu_debt, elapsed, self.cpu_period),
            timer_ticks: drain(&mut self.timer_debt, elapsed, self.timer_period),
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Scheduler::new(CLOCK_SPEED, TIMER_FREQUENCY)
    }
}

fn period(hz: u32) -> Duration {
    (Duration::from_secs(1) / hz.max(1)).max(Duration::from_nanos(1))
}

fn drain(debt: &mut Duration, elapsed: Duration, period: Duration) -> u32 {
    *debt += elapsed;
    let due = debt.as_nanos() / period.as_nanos();
    let due = due.min(u128::from(u32::MAX)) as u32;
    *debt -= period * due;
    due
}
