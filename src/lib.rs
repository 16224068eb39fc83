#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod field;
pub mod interface;
pub mod registers;

pub mod interrupt;
pub mod power;
pub mod sequencer;

// Re-export main types
pub use device::Tps65185Driver;
pub use field::{Access, BitFieldSpec, FieldValue};
pub use interface::I2cInterface;
pub use registers::{REGISTER_MAP, Register, RegisterMap, RegisterSpec, RegisterWidth};

pub use interrupt::{InterruptEnable, InterruptStatus};
pub use power::{
    DelayFactor, DownDelay, FirstDownDelay, PowerDownDelays, PowerGood, PowerUpDelays, RailEnable,
    RailSequence, Revision, Strobe, UpDelay, VposVnegVoltage,
};
pub use sequencer::{
    AveragingMode, PollConfig, Saturation, TempChangeThreshold, TemperatureReading,
    ThermistorThresholds, VcomState,
};

/// TPS65185 7-bit I2C address
///
/// The address is fixed in silicon. Use [`I2cInterface::default()`] for it.
pub const I2C_ADDRESS: u8 = 0x68;

/// Expected value of the REVID `VERSION` field
pub const VERSION_CODE: u8 = 0b0101;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Value does not fit the field, the register, or the chip's documented range
    OutOfRange,
    /// A self-clearing bit did not clear within the poll budget
    Timeout,
    /// Field is read-only, reserved or a trigger and cannot be written directly
    NotWritable,
    /// No register at this address
    UnknownRegister(u8),
    /// Field does not belong to the addressed register
    UnknownField,
    /// Invalid REVID `VERSION` (contains the raw REVID value read)
    InvalidDevice(u8),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
