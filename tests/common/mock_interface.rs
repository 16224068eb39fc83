//! Mock interface implementation for testing the TPS65185 driver
//!
//! Holds a byte-addressed register file initialised to the power-on reset
//! values and simulates the chip's self-clearing operations: VCOM
//! acquisition (ACQ), NVM programming (PROG), thermistor conversion
//! (READ_THERM) and the ACTIVE/STANDBY transitions.

use device_driver::RegisterInterface;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

const TMST_VALUE: u8 = 0x00;
const ENABLE: u8 = 0x01;
const VCOM1: u8 = 0x03;
const VCOM2: u8 = 0x04;
const INT1: u8 = 0x07;
const INT2: u8 = 0x08;
const TMST1: u8 = 0x0D;
const PG: u8 = 0x0F;

/// Power-on reset values, VCOM split into VCOM1/VCOM2
const RESET_VALUES: [(u8, u8); 17] = [
    (0x00, 0x00),
    (0x01, 0x00),
    (0x02, 0x23),
    (0x03, 0x7D),
    (0x04, 0x04),
    (0x05, 0x7F),
    (0x06, 0xFF),
    (0x07, 0x00),
    (0x08, 0x00),
    (0x09, 0xE4),
    (0x0A, 0x55),
    (0x0B, 0x1E),
    (0x0C, 0xE0),
    (0x0D, 0x20),
    (0x0E, 0x78),
    (0x0F, 0x00),
    (0x10, 0x45),
];

/// PG value once every rail is in regulation
pub const ALL_POWER_GOOD: u8 = 0b1111_1010;

/// Records operations performed on the mock interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Read register operation
    Read {
        /// First register address
        address: u8,
        /// Transfer width requested by the driver
        size_bits: u32,
        /// Value returned, little-endian assembled
        value: u16,
    },
    /// Write register operation
    Write {
        /// First register address
        address: u8,
        /// Transfer width requested by the driver
        size_bits: u32,
        /// Value written, little-endian assembled
        value: u16,
    },
}

impl Operation {
    /// `true` for writes
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}

/// Simulated duration of a self-clearing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    /// The first `n` status reads after the trigger still show it busy
    Reads(u32),
    /// The operation never completes
    Never,
}

/// Shared state for mock interface (uses interior mutability)
#[derive(Debug)]
struct MockState {
    /// Simulated register file
    registers: HashMap<u8, u8>,

    /// Operations log for verification
    operations: Vec<Operation>,

    /// Failure injection flags
    fail_next_read: bool,
    fail_next_write: bool,

    /// VCOM acquisition simulation
    acquisition_latency: Latency,
    acquisition_code: u16,
    acquisition_pending: Option<Latency>,

    /// NVM programming simulation
    programming_latency: Latency,
    programming_pending: Option<Latency>,
    nvm_code: Option<u16>,
    nvm_writes: u32,

    /// Thermistor conversion simulation
    conversion_latency: Latency,
    conversion_result: u8,
    conversion_pending: Option<Latency>,
}

/// Advance a pending operation by one status read; `true` when it completes
fn countdown(pending: &mut Option<Latency>) -> bool {
    match pending {
        Some(Latency::Reads(0)) => {
            *pending = None;
            true
        }
        Some(Latency::Reads(remaining)) => {
            *remaining -= 1;
            false
        }
        Some(Latency::Never) | None => false,
    }
}

fn assemble(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .rev()
        .fold(0u16, |value, &byte| (value << 8) | u16::from(byte))
}

impl MockState {
    fn new() -> Self {
        Self {
            registers: RESET_VALUES.iter().copied().collect(),
            operations: Vec::new(),
            fail_next_read: false,
            fail_next_write: false,
            acquisition_latency: Latency::Reads(2),
            acquisition_code: 0x0A5,
            acquisition_pending: None,
            programming_latency: Latency::Reads(1),
            programming_pending: None,
            nvm_code: None,
            nvm_writes: 0,
            conversion_latency: Latency::Reads(1),
            conversion_result: 0x19,
            conversion_pending: None,
        }
    }

    fn get(&self, address: u8) -> u8 {
        self.registers.get(&address).copied().unwrap_or(0)
    }

    fn set(&mut self, address: u8, value: u8) {
        self.registers.insert(address, value);
    }

    fn vcom_code(&self) -> u16 {
        u16::from(self.get(VCOM1)) | (u16::from(self.get(VCOM2) & 0x01) << 8)
    }

    /// Let time pass for the operation whose status lives at `address`
    fn tick(&mut self, address: u8) {
        match address {
            VCOM1 => {
                if countdown(&mut self.acquisition_pending) {
                    let code = self.acquisition_code & 0x1FF;
                    self.set(VCOM1, (code & 0xFF) as u8);
                    let high = (self.get(VCOM2) & !(0x80 | 0x01)) | (code >> 8) as u8;
                    self.set(VCOM2, high);
                    self.set(INT1, self.get(INT1) | 0x02);
                }
                if countdown(&mut self.programming_pending) {
                    self.nvm_code = Some(self.vcom_code());
                    self.nvm_writes += 1;
                    self.set(VCOM2, self.get(VCOM2) & !0x40);
                    self.set(INT1, self.get(INT1) | 0x01);
                    // The chip drops to STANDBY after programming
                    self.set(PG, 0x00);
                }
            }
            TMST1 => {
                if countdown(&mut self.conversion_pending) {
                    self.set(TMST_VALUE, self.conversion_result);
                    self.set(TMST1, (self.get(TMST1) & !0x80) | 0x20);
                    self.set(INT2, self.get(INT2) | 0x01);
                }
            }
            _ => {}
        }
    }

    /// React to a trigger bit landing in the register file
    fn trigger(&mut self, address: u8, write_data: &[u8]) {
        match address {
            ENABLE => {
                let value = write_data[0];
                if value & 0x40 != 0 {
                    self.set(PG, 0x00);
                } else if value & 0x80 != 0 {
                    self.set(PG, ALL_POWER_GOOD);
                }
                self.set(ENABLE, value & !0xC0);
            }
            VCOM1 if write_data.len() == 2 => {
                let high = write_data[1];
                if high & 0x80 != 0 {
                    self.acquisition_pending = Some(self.acquisition_latency);
                }
                if high & 0x40 != 0 {
                    self.programming_pending = Some(self.programming_latency);
                }
            }
            TMST1 => {
                if write_data[0] & 0x80 != 0 {
                    self.conversion_pending = Some(self.conversion_latency);
                    self.set(TMST1, self.get(TMST1) & !0x20);
                }
            }
            _ => {}
        }
    }
}

/// Mock interface for testing
#[derive(Clone)]
pub struct MockInterface {
    state: Rc<RefCell<MockState>>,
}

impl MockInterface {
    /// Create a new mock interface with reset register values
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::new())),
        }
    }

    /// Set a register byte
    pub fn set_register(&self, address: u8, value: u8) {
        self.state.borrow_mut().set(address, value);
    }

    /// Get a register byte
    pub fn register(&self, address: u8) -> u8 {
        self.state.borrow().get(address)
    }

    /// Current VCOM register as the driver would assemble it
    pub fn vcom_raw(&self) -> u16 {
        let state = self.state.borrow();
        u16::from(state.get(VCOM1)) | (u16::from(state.get(VCOM2)) << 8)
    }

    /// Configure the simulated VCOM acquisition
    pub fn set_acquisition(&self, latency: Latency, code: u16) {
        let mut state = self.state.borrow_mut();
        state.acquisition_latency = latency;
        state.acquisition_code = code;
    }

    /// Configure the simulated NVM programming
    pub fn set_programming(&self, latency: Latency) {
        self.state.borrow_mut().programming_latency = latency;
    }

    /// Configure the simulated thermistor conversion
    pub fn set_conversion(&self, latency: Latency, result: u8) {
        let mut state = self.state.borrow_mut();
        state.conversion_latency = latency;
        state.conversion_result = result;
    }

    /// VCOM code last committed to NVM
    pub fn nvm_code(&self) -> Option<u16> {
        self.state.borrow().nvm_code
    }

    /// Number of completed NVM commits
    pub fn nvm_writes(&self) -> u32 {
        self.state.borrow().nvm_writes
    }

    /// Inject a read failure on the next read operation
    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    /// Inject a write failure on the next write operation
    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    /// Get the operations log
    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    /// Clear the operations log
    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// `(address, value)` of every write, in order
    pub fn writes(&self) -> Vec<(u8, u16)> {
        self.state
            .borrow()
            .operations
            .iter()
            .filter_map(|op| match *op {
                Operation::Write { address, value, .. } => Some((address, value)),
                Operation::Read { .. } => None,
            })
            .collect()
    }

    /// Number of reads of `address`
    pub fn read_count(&self, address: u8) -> usize {
        self.state
            .borrow()
            .operations
            .iter()
            .filter(|op| matches!(op, Operation::Read { address: a, .. } if *a == address))
            .count()
    }
}

/// Mock error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    /// Simulated communication error
    Communication,
}

impl RegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(MockError::Communication);
        }

        state.tick(address);

        for (i, byte) in read_data.iter_mut().enumerate() {
            *byte = state.get(address.wrapping_add(i as u8));
        }

        let value = assemble(read_data);
        state.operations.push(Operation::Read {
            address,
            size_bits,
            value,
        });

        // Interrupt status latches clear on read
        for i in 0..read_data.len() {
            let reg_addr = address.wrapping_add(i as u8);
            if reg_addr == INT1 || reg_addr == INT2 {
                state.set(reg_addr, 0);
            }
        }

        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(MockError::Communication);
        }

        for (i, &byte) in write_data.iter().enumerate() {
            state.set(address.wrapping_add(i as u8), byte);
        }

        state.operations.push(Operation::Write {
            address,
            size_bits,
            value: assemble(write_data),
        });

        state.trigger(address, write_data);

        Ok(())
    }
}

impl Default for MockInterface {
    fn default() -> Self {
        Self::new()
    }
}
