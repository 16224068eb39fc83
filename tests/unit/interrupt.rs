//! Interrupt enable and status tests

use crate::common::{MockDelay, create_mock_driver};
use tps65185::{AveragingMode, InterruptEnable, InterruptStatus};

const INT_EN1: u8 = 0x05;
const INT_EN2: u8 = 0x06;
const INT1: u8 = 0x07;
const INT2: u8 = 0x08;

#[test]
fn test_reset_enables() {
    let (mut driver, _interface) = create_mock_driver();

    let enable = driver.interrupt_enable().unwrap();

    assert_eq!(enable, InterruptEnable::default());
    assert!(!enable.dtx);
    assert!(enable.eoc);
}

#[test]
fn test_set_enables() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .set_interrupt_enable(&InterruptEnable::faults_only())
        .unwrap();

    assert_eq!(interface.writes(), vec![(INT_EN1, 0x64), (INT_EN2, 0xFE)]);
    assert_eq!(
        driver.interrupt_enable().unwrap(),
        InterruptEnable::faults_only()
    );
}

#[test]
fn test_mask_everything() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_interrupt_enable(&InterruptEnable::none()).unwrap();

    assert_eq!(interface.register(INT_EN1), 0);
    assert_eq!(interface.register(INT_EN2), 0);
}

#[test]
fn test_status_clears_on_read() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(INT1, 0b0100_0000);
    interface.set_register(INT2, 0b0000_0100);

    let status = driver.interrupt_status().unwrap();
    assert!(status.tsd);
    assert!(status.vcomf);
    assert!(status.has_fault());

    let status = driver.interrupt_status().unwrap();
    assert_eq!(status, InterruptStatus::default());
    assert!(!status.any_set());
}

#[test]
fn test_completion_events() {
    let (mut driver, _interface) = create_mock_driver();

    driver.acquire_vcom(AveragingMode::X1, &mut MockDelay).unwrap();
    let status = driver.interrupt_status().unwrap();
    assert!(status.acqc);
    assert!(!status.has_fault());

    driver.read_temperature(&mut MockDelay).unwrap();
    let status = driver.interrupt_status().unwrap();
    assert!(status.eoc);
    assert!(status.any_set());
    assert!(!status.acqc);

    driver.program_vcom(-1000, &mut MockDelay).unwrap();
    assert!(driver.interrupt_status().unwrap().prgc);
}
