//! Register catalog and generic register access tests

use crate::common::{Operation, create_mock_driver};
use tps65185::registers::{enable, tmst1, tmst2, upseq1, vadj, vcom};
use tps65185::{Access, Error, REGISTER_MAP, Register, RegisterWidth};

#[test]
fn test_reset_values_match_catalog() {
    let (mut driver, _interface) = create_mock_driver();

    for register in Register::ALL {
        if let Some(default) = register.spec().default_value() {
            assert_eq!(
                driver.read_register(register).unwrap(),
                default,
                "{}",
                register.spec().name
            );
        }
    }
}

#[test]
fn test_transfer_widths() {
    let (mut driver, interface) = create_mock_driver();

    driver.read_register(Register::Vcom).unwrap();
    driver.read_register(Register::Tmst2).unwrap();

    assert_eq!(
        interface.operations(),
        vec![
            Operation::Read {
                address: 0x03,
                size_bits: 16,
                value: 0x047D,
            },
            Operation::Read {
                address: 0x0E,
                size_bits: 8,
                value: 0x78,
            },
        ]
    );
}

#[test]
fn test_sixteen_bit_write_order() {
    let (mut driver, interface) = create_mock_driver();

    driver.write_register(Register::Vcom, 0x01C8).unwrap();

    assert_eq!(interface.register(0x03), 0xC8);
    assert_eq!(interface.register(0x04), 0x01);
    assert_eq!(driver.vcom_millivolts().unwrap(), -4560);
}

#[test]
fn test_write_wider_than_register() {
    let (mut driver, interface) = create_mock_driver();

    assert_eq!(
        driver.write_register(Register::Enable, 0x1FF),
        Err(Error::OutOfRange)
    );
    assert!(interface.operations().is_empty());
}

#[test]
fn test_access_by_address() {
    let (mut driver, interface) = create_mock_driver();

    assert_eq!(driver.read_address(0x0A).unwrap(), 0x55);
    driver.write_address(0x0E, 0x29).unwrap();
    assert_eq!(interface.register(0x0E), 0x29);

    assert_eq!(driver.read_address(0x04), Err(Error::UnknownRegister(0x04)));
    assert_eq!(
        driver.write_address(0x11, 0),
        Err(Error::UnknownRegister(0x11))
    );
}

#[test]
fn test_read_field() {
    let (mut driver, _interface) = create_mock_driver();

    assert_eq!(driver.read_field(Register::Vcom, &vcom::VCOM).unwrap(), 125);
    assert_eq!(driver.read_field(Register::Vadj, &vadj::VSET).unwrap(), 3);
    assert_eq!(driver.read_field(Register::Tmst1, &tmst1::CONV_END).unwrap(), 1);
    assert_eq!(driver.read_field(Register::Tmst2, &tmst2::TMST_HOT).unwrap(), 8);
}

#[test]
fn test_write_field_preserves_neighbours() {
    let (mut driver, interface) = create_mock_driver();

    driver.write_field(Register::UpSeq1, &upseq1::UDLY3, 0b11).unwrap();
    assert_eq!(interface.register(0x0A), 0b0111_0101);

    driver.write_field(Register::Vcom, &vcom::AVG, 0b01).unwrap();
    assert_eq!(interface.vcom_raw(), 0x0C7D);
}

#[test]
fn test_write_field_rejections() {
    let (mut driver, interface) = create_mock_driver();

    assert_eq!(
        driver.write_field(Register::Vcom, &tmst1::DT, 1),
        Err(Error::UnknownField)
    );
    assert_eq!(
        driver.write_field(Register::Enable, &enable::ACTIVE, 1),
        Err(Error::NotWritable)
    );
    assert_eq!(
        driver.write_field(Register::Tmst1, &tmst1::CONV_END, 0),
        Err(Error::NotWritable)
    );
    assert_eq!(
        driver.write_field(Register::Vadj, &vadj::VSET, 8),
        Err(Error::OutOfRange)
    );

    // Only the out-of-range case got as far as reading
    let ops = interface.operations();
    assert_eq!(ops.len(), 1);
    assert!(!ops[0].is_write());
}

#[test]
fn test_catalog_lookup() {
    assert_eq!(REGISTER_MAP.len(), 16);
    let spec = REGISTER_MAP.by_name("VCOM").unwrap();
    assert_eq!(spec.address, 0x03);
    assert_eq!(spec.width, RegisterWidth::Bits16);
    assert_eq!(spec.field("HiZ").unwrap().access, Access::ReadWrite);
    assert!(REGISTER_MAP.get(0x04).is_none());
}
