//! Bus interface implementation for the TPS65185
//!
//! The chip speaks plain register I2C: a write transfers the register
//! address followed by the data bytes, a read writes the address and then
//! reads the data back. Multi-byte transfers auto-increment the address,
//! which is how the 16-bit VCOM register moves as `[VCOM1, VCOM2]`.

use crate::I2C_ADDRESS;

use device_driver::RegisterInterface;

/// Largest payload the chip ever transfers in one go (the VCOM register)
const MAX_PAYLOAD: usize = 2;

/// I2C interface for the TPS65185
///
/// Writes carry at most two data bytes, the width of the VCOM register.
/// Longer payloads are a caller bug: debug builds panic, release builds
/// send only the first two bytes.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the fixed device address (0x68)
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut pmic = Tps65185Driver::new(interface);
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS,
        }
    }

    /// Create a new I2C interface with a custom device address
    ///
    /// Useful behind address translators or muxes. For a directly connected
    /// chip prefer [`default()`](Self::default).
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Device address used for transfers
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

/// `[address, data...]`, truncated to the largest register
fn frame(address: u8, write_data: &[u8]) -> ([u8; MAX_PAYLOAD + 1], usize) {
    debug_assert!(write_data.len() <= MAX_PAYLOAD, "payload wider than any register");
    let mut buffer = [0u8; MAX_PAYLOAD + 1];
    buffer[0] = address;
    let len = write_data.len().min(MAX_PAYLOAD);
    buffer[1..=len].copy_from_slice(&write_data[..len]);
    (buffer, len + 1)
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits;
        let (buffer, len) = frame(address, write_data);
        self.i2c.write(self.address, &buffer[..len])
    }
}

#[cfg(feature = "async")]
impl<I2C, E> device_driver::AsyncRegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal_async::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits;
        self.i2c
            .write_read(self.address, &[address], read_data)
            .await
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits;
        let (buffer, len) = frame(address, write_data);
        self.i2c.write(self.address, &buffer[..len]).await
    }
}
