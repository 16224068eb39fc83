//! I2C framing tests
//!
//! Drives the blocking API through `I2cInterface` over a byte-level I2C
//! mock, checking what actually goes out on the wire.

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use tps65185::{Error, I2C_ADDRESS, I2cInterface, Tps65185Driver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BusError;

impl embedded_hal::i2c::Error for BusError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Register-file I2C target with auto-incrementing pointer
struct MockI2c {
    registers: [u8; 0x11],
    pointer: usize,
    fail_next: bool,
    /// `(device address, bytes written)` per write operation
    writes: Vec<(u8, Vec<u8>)>,
}

impl MockI2c {
    fn new() -> Self {
        let mut registers = [0u8; 0x11];
        registers[0x03] = 0x7D;
        registers[0x04] = 0x04;
        registers[0x0E] = 0x78;
        registers[0x10] = 0x45;
        Self {
            registers,
            pointer: 0,
            fail_next: false,
            writes: Vec::new(),
        }
    }
}

impl ErrorType for MockI2c {
    type Error = BusError;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail_next {
            self.fail_next = false;
            return Err(BusError);
        }

        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    self.writes.push((address, bytes.to_vec()));
                    if let Some((&register, data)) = bytes.split_first() {
                        self.pointer = usize::from(register);
                        for &byte in data {
                            self.registers[self.pointer] = byte;
                            self.pointer += 1;
                        }
                    }
                }
                Operation::Read(buffer) => {
                    for byte in buffer.iter_mut() {
                        *byte = self.registers[self.pointer];
                        self.pointer += 1;
                    }
                }
            }
        }
        Ok(())
    }
}

#[test]
fn test_default_address() {
    let interface = I2cInterface::default(MockI2c::new());
    assert_eq!(interface.address(), I2C_ADDRESS);
    assert_eq!(I2cInterface::new(MockI2c::new(), 0x48).address(), 0x48);
}

#[test]
fn test_probe_over_i2c() {
    let mut driver = Tps65185Driver::new(I2cInterface::default(MockI2c::new()));

    assert!(driver.probe().unwrap().is_tps65185());

    let i2c = driver.release().release();
    // Register pointer write ahead of the read
    assert_eq!(i2c.writes, vec![(0x68, vec![0x10])]);
}

#[test]
fn test_vcom_is_little_endian_on_the_wire() {
    let mut driver = Tps65185Driver::new(I2cInterface::default(MockI2c::new()));

    assert_eq!(driver.vcom_millivolts().unwrap(), -1250);
    driver.set_vcom(-4560).unwrap();

    let i2c = driver.release().release();
    assert_eq!(i2c.writes.last(), Some(&(0x68, vec![0x03, 0xC8, 0x05])));
    assert_eq!(i2c.registers[0x03], 0xC8);
    assert_eq!(i2c.registers[0x04], 0x05);
}

#[test]
fn test_eight_bit_write_frame() {
    let mut driver = Tps65185Driver::new(I2cInterface::new(MockI2c::new(), 0x48));

    driver.write_address(0x0E, 0x2D).unwrap();

    let i2c = driver.release().release();
    assert_eq!(i2c.writes, vec![(0x48, vec![0x0E, 0x2D])]);
}

#[test]
fn test_bus_error_propagates() {
    let mut i2c = MockI2c::new();
    i2c.fail_next = true;
    let mut driver = Tps65185Driver::new(I2cInterface::default(i2c));

    assert_eq!(driver.probe(), Err(Error::Bus(BusError)));
    assert!(driver.probe().is_ok());
}
