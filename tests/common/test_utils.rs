//! Test utilities and helper functions

use crate::common::mock_interface::MockInterface;
use tps65185::{PollConfig, Tps65185Driver};

/// Mock delay implementation for testing
///
/// This is a no-op delay that implements the embedded-hal DelayNs trait
/// for use in tests where actual delays are not needed.
#[derive(Debug, Clone, Copy)]
pub struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        // No-op for testing
    }
}

/// Delay that only records how long it was asked to wait
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingDelay {
    /// Number of delay calls
    pub calls: u32,
    /// Total requested delay in nanoseconds
    pub total_ns: u64,
}

impl embedded_hal::delay::DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ns += u64::from(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.calls += 1;
        self.total_ns += u64::from(us) * 1_000;
    }
}

/// Create a mock driver for testing
/// Returns (driver, interface) where interface is a clone that shares state with the driver
pub fn create_mock_driver() -> (Tps65185Driver<MockInterface>, MockInterface) {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    (Tps65185Driver::new(interface), interface_clone)
}

/// Create a mock driver whose sequences give up after `max_polls` reads
pub fn create_driver_with_polls(
    max_polls: u32,
) -> (Tps65185Driver<MockInterface>, MockInterface) {
    let (driver, interface) = create_mock_driver();
    let poll = PollConfig::new(max_polls, 1_000);
    let driver = driver
        .with_vcom_poll(poll)
        .with_program_poll(poll)
        .with_thermistor_poll(poll);
    (driver, interface)
}
