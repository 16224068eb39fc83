//! Error handling tests
//!
//! Verifies bus failures propagate unchanged and that the driver keeps
//! working once the bus recovers.

use crate::common::{Latency, MockDelay, MockError, create_mock_driver};
use tps65185::{AveragingMode, Error, Register, ThermistorThresholds};

#[test]
fn test_read_error_propagates() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();
    let result = driver.read_register(Register::Enable);

    assert_eq!(result, Err(Error::Bus(MockError::Communication)));
}

#[test]
fn test_write_error_propagates() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_write();
    let result = driver.write_register(Register::Tmst2, 0x2D);

    assert_eq!(result, Err(Error::Bus(MockError::Communication)));
    assert_eq!(interface.register(0x0E), 0x78);
}

#[test]
fn test_recovery_after_error() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();
    assert!(driver.probe().is_err());

    // Next operation should succeed
    assert!(driver.probe().is_ok());
}

#[test]
fn test_read_error_aborts_read_modify_write() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();
    assert!(driver.set_vcom(-2000).is_err());
    assert!(driver.activate().is_ok());

    // Only the activation made it to the chip
    assert_eq!(interface.writes(), vec![(0x01, 0x80)]);
}

#[test]
fn test_acquisition_trigger_write_failure() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_write();
    let result = driver.acquire_vcom(AveragingMode::X1, &mut MockDelay);

    assert_eq!(result, Err(Error::Bus(MockError::Communication)));
    // No polling without a trigger
    assert_eq!(interface.read_count(0x03), 1);
}

#[test]
fn test_read_error_during_polling() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_conversion(Latency::Never, 0);

    driver.start_temperature_conversion().unwrap();
    interface.fail_next_read();

    assert_eq!(
        driver.is_conversion_complete(),
        Err(Error::Bus(MockError::Communication))
    );
}

#[test]
fn test_validation_precedes_bus_traffic() {
    let (mut driver, interface) = create_mock_driver();

    assert_eq!(driver.set_vcom(100), Err(Error::OutOfRange));
    assert_eq!(driver.set_vcom(-5111), Err(Error::OutOfRange));
    assert_eq!(
        driver.set_thermistor_thresholds(&ThermistorThresholds { cold: 20, hot: 50 }),
        Err(Error::OutOfRange)
    );
    assert_eq!(driver.read_address(0x20), Err(Error::UnknownRegister(0x20)));

    assert!(interface.operations().is_empty());
}

#[test]
fn test_error_is_copy_and_comparable() {
    let error: Error<MockError> = MockError::Communication.into();
    let copy = error;

    assert_eq!(error, copy);
    assert_eq!(error, Error::Bus(MockError::Communication));
    assert_ne!(Error::<MockError>::Timeout, Error::OutOfRange);
}
