//! Multi-step hardware protocols
//!
//! Two operations on the TPS65185 are more than a register write: VCOM
//! kick-back acquisition/programming and thermistor conversion. Both write
//! a self-clearing trigger bit and then poll until the hardware reports
//! completion. Polling is bounded by a [`PollConfig`]; the caller supplies
//! the delay provider used between polls.
//!
//! Abandoning a poll (dropping an async future, or a timeout) never undoes
//! anything on the chip. The hardware operation keeps running on its own.

pub mod thermistor;
pub mod vcom;

pub use thermistor::{Saturation, TempChangeThreshold, TemperatureReading, ThermistorThresholds};
pub use vcom::{AveragingMode, VcomState};

/// Poll budget for a self-clearing trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollConfig {
    /// Number of status reads before giving up; 0 times out right after the
    /// trigger is written
    pub max_polls: u32,
    /// Delay before each status read, in microseconds
    pub interval_us: u32,
}

impl PollConfig {
    /// VCOM kick-back acquisition: 100 × 1 ms
    pub const VCOM_ACQUISITION: Self = Self::new(100, 1_000);

    /// VCOM NVM programming: 100 × 1 ms
    pub const VCOM_PROGRAMMING: Self = Self::new(100, 1_000);

    /// Thermistor ADC conversion: 50 × 1 ms
    pub const THERMISTOR: Self = Self::new(50, 1_000);

    /// Create a poll budget
    pub const fn new(max_polls: u32, interval_us: u32) -> Self {
        Self {
            max_polls,
            interval_us,
        }
    }

    /// Longest time spent waiting, in microseconds
    pub const fn budget_us(&self) -> u64 {
        self.max_polls as u64 * self.interval_us as u64
    }
}
