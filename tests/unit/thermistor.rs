//! Thermistor conversion and threshold tests

use crate::common::{CountingDelay, Latency, MockDelay, create_driver_with_polls, create_mock_driver};
use tps65185::{Error, Saturation, TempChangeThreshold, ThermistorThresholds};

const TMST_VALUE: u8 = 0x00;
const TMST1: u8 = 0x0D;
const TMST2: u8 = 0x0E;

#[test]
fn test_read_temperature() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_conversion(Latency::Reads(1), 25);

    let reading = driver.read_temperature(&mut MockDelay).unwrap();

    assert_eq!(reading.celsius(), 25);
    assert_eq!(reading.saturation(), Saturation::InRange);
}

#[test]
fn test_read_negative_temperature() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_conversion(Latency::Reads(0), 0xFF);

    let reading = driver.read_temperature(&mut MockDelay).unwrap();

    assert_eq!(reading.raw, 0xFF);
    assert_eq!(reading.celsius(), -1);
}

#[test]
fn test_saturated_readings() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_conversion(Latency::Reads(0), 0xF6);
    let reading = driver.read_temperature(&mut MockDelay).unwrap();
    assert_eq!(reading.celsius(), -10);
    assert_eq!(reading.saturation(), Saturation::AtOrBelowFloor);

    interface.set_conversion(Latency::Reads(0), 0x55);
    let reading = driver.read_temperature(&mut MockDelay).unwrap();
    assert_eq!(reading.celsius(), 85);
    assert_eq!(reading.saturation(), Saturation::AtOrAboveCeiling);
}

#[test]
fn test_conversion_sequence() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_conversion(Latency::Reads(2), 30);
    let mut delay = CountingDelay::default();

    driver.read_temperature(&mut delay).unwrap();

    // READ_THERM written with DT kept at its reset value
    assert_eq!(interface.writes(), vec![(TMST1, 0x80)]);
    // Read before the trigger, three polls, then the value
    assert_eq!(interface.read_count(TMST1), 4);
    assert_eq!(interface.read_count(TMST_VALUE), 1);
    assert_eq!(delay.calls, 3);
    assert_eq!(interface.register(TMST1) & 0xA0, 0x20);
}

#[test]
fn test_conversion_keeps_threshold() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .set_temperature_change_threshold(TempChangeThreshold::C4)
        .unwrap();
    interface.clear_operations();
    driver.read_temperature(&mut MockDelay).unwrap();

    assert_eq!(interface.writes(), vec![(TMST1, 0x82)]);
    assert_eq!(
        driver.temperature_change_threshold().unwrap(),
        TempChangeThreshold::C4
    );
}

#[test]
fn test_conversion_timeout() {
    let (mut driver, interface) = create_driver_with_polls(4);
    interface.set_conversion(Latency::Never, 0);

    let result = driver.read_temperature(&mut MockDelay);

    assert_eq!(result, Err(Error::Timeout));
    assert_eq!(interface.read_count(TMST1), 5);
    // No value read after giving up
    assert_eq!(interface.read_count(TMST_VALUE), 0);
    assert!(!driver.is_conversion_complete().unwrap());
}

#[test]
fn test_conversion_polling_by_hand() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_conversion(Latency::Reads(1), 42);

    assert!(driver.is_conversion_complete().unwrap());
    driver.start_temperature_conversion().unwrap();
    assert!(!driver.is_conversion_complete().unwrap());
    assert!(driver.is_conversion_complete().unwrap());
    assert_eq!(driver.last_temperature().unwrap().celsius(), 42);
}

#[test]
fn test_threshold_write_does_not_start_conversion() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .set_temperature_change_threshold(TempChangeThreshold::C5)
        .unwrap();

    let (_, value) = interface.writes()[0];
    assert_eq!(value & 0x80, 0);
    assert_eq!(value & 0x03, 0b11);
}

#[test]
fn test_thermistor_thresholds() {
    let (mut driver, interface) = create_mock_driver();

    assert_eq!(
        driver.thermistor_thresholds().unwrap(),
        ThermistorThresholds::default()
    );

    let thresholds = ThermistorThresholds { cold: -5, hot: 55 };
    driver.set_thermistor_thresholds(&thresholds).unwrap();

    assert_eq!(interface.register(TMST2), 0x2D);
    assert_eq!(driver.thermistor_thresholds().unwrap(), thresholds);
}

#[test]
fn test_thermistor_thresholds_out_of_range() {
    let (mut driver, interface) = create_mock_driver();

    for thresholds in [
        ThermistorThresholds { cold: -8, hot: 50 },
        ThermistorThresholds { cold: 9, hot: 50 },
        ThermistorThresholds { cold: 0, hot: 41 },
        ThermistorThresholds { cold: 0, hot: 58 },
    ] {
        assert_eq!(
            driver.set_thermistor_thresholds(&thresholds),
            Err(Error::OutOfRange)
        );
    }

    assert!(interface.operations().is_empty());
}
