//! VCOM kick-back acquisition and programming
//!
//! VCOM is the display's common-electrode bias, `-10 mV × VCOM[8:0]`. The
//! chip can measure the panel's kick-back voltage itself:
//!
//! 1. Write VCOM with `HiZ = 1`, `AVG = n` and `ACQ = 1`, keeping VCOM[8:0].
//! 2. Poll until `ACQ` reads back 0.
//! 3. VCOM[8:0] of that read holds the measured value.
//!
//! Programming writes VCOM[8:0] with `PROG = 1`. The chip commits the value
//! to nonvolatile memory, clears `PROG` and drops to STANDBY. Each commit
//! wears the NVM; nothing here rate-limits it.
//!
//! ```
//! use tps65185::sequencer::vcom::{code_to_millivolts, millivolts_to_code};
//!
//! assert_eq!(millivolts_to_code(-1250), Ok(0x07D));
//! assert_eq!(code_to_millivolts(0x07D), -1250);
//! assert!(millivolts_to_code(-6000).is_err());
//! ```

use crate::field::OutOfRange;
use crate::registers::Register;
use crate::registers::vcom::{ACQ, AVG, HIZ, PROG, VCOM};
use crate::{Error, Tps65185Driver};

#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

/// Most negative programmable VCOM, in millivolts
pub const MIN_MILLIVOLTS: i16 = -5110;

/// Millivolts per VCOM code step
const STEP_MV: i32 = 10;

/// What the VCOM engine is doing, from the trigger bits of one VCOM read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VcomState {
    /// No trigger pending
    Idle,
    /// Kick-back measurement in progress (`ACQ = 1`)
    Acquiring,
    /// NVM commit in progress (`PROG = 1`)
    Programming,
}

impl VcomState {
    /// Decode from a raw VCOM value
    ///
    /// `PROG` wins if both triggers read back set.
    pub const fn from_raw(raw: u16) -> Self {
        if PROG.is_set(raw) {
            Self::Programming
        } else if ACQ.is_set(raw) {
            Self::Acquiring
        } else {
            Self::Idle
        }
    }

    /// Check if a trigger is still in flight
    pub const fn is_busy(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Number of kick-back measurements averaged into one result
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AveragingMode {
    /// Single measurement
    #[default]
    X1 = 0,
    /// Average of 2
    X2 = 1,
    /// Average of 4
    X4 = 2,
    /// Average of 8
    X8 = 3,
}

impl AveragingMode {
    /// Decode the 2-bit `AVG` code
    pub const fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0 => Self::X1,
            1 => Self::X2,
            2 => Self::X4,
            _ => Self::X8,
        }
    }

    /// `AVG` code
    pub const fn bits(self) -> u16 {
        self as u16
    }

    /// Number of measurements
    pub const fn samples(self) -> u8 {
        1 << (self as u8)
    }
}

/// Convert a VCOM voltage to its 9-bit code, rounding to the nearest step
///
/// # Errors
///
/// Returns [`OutOfRange`] outside `-5110..=0` mV.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn millivolts_to_code(millivolts: i16) -> Result<u16, OutOfRange> {
    if millivolts > 0 || millivolts < MIN_MILLIVOLTS {
        return Err(OutOfRange);
    }
    let magnitude = -(millivolts as i32);
    Ok(((magnitude + STEP_MV / 2) / STEP_MV) as u16)
}

/// Convert a VCOM code to millivolts; bits above VCOM[8:0] are ignored
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub const fn code_to_millivolts(code: u16) -> i16 {
    -((code & VCOM.max_value()) as i16) * STEP_MV as i16
}

/// VCOM value that starts an acquisition
///
/// Sets `ACQ`, `HiZ` and `AVG`, clears `PROG`, keeps VCOM[8:0] and padding.
pub const fn acquisition_command(raw: u16, averaging: AveragingMode) -> u16 {
    let raw = raw & !(ACQ.mask | PROG.mask | AVG.mask);
    raw | ACQ.mask | HIZ.mask | AVG.place(averaging.bits())
}

/// VCOM value that commits `code` to NVM
///
/// Sets `PROG` and VCOM[8:0], clears `ACQ`, keeps `HiZ`, `AVG` and padding.
pub const fn program_command(raw: u16, code: u16) -> u16 {
    let raw = raw & !(ACQ.mask | PROG.mask | VCOM.mask);
    raw | PROG.mask | VCOM.place(code)
}

/// VCOM value that changes the volatile setpoint without any trigger
pub const fn setpoint_command(raw: u16, code: u16) -> u16 {
    (raw & !(ACQ.mask | PROG.mask | VCOM.mask)) | VCOM.place(code)
}

/// VCOM value that switches the pin's hi-impedance mode without any trigger
pub const fn hiz_command(raw: u16, enabled: bool) -> u16 {
    HIZ.with_flag(raw & !(ACQ.mask | PROG.mask), enabled)
}

fn result_millivolts(raw: u16) -> i16 {
    code_to_millivolts(VCOM.decode(raw))
}

#[cfg(not(feature = "async"))]
impl<I> Tps65185Driver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Read the state of the VCOM trigger bits
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn vcom_state(&mut self) -> Result<VcomState, Error<I::Error>> {
        Ok(VcomState::from_raw(self.read_register(Register::Vcom)?))
    }

    /// Read the current VCOM setpoint in millivolts
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn vcom_millivolts(&mut self) -> Result<i16, Error<I::Error>> {
        Ok(result_millivolts(self.read_register(Register::Vcom)?))
    }

    /// Read the averaging mode left in `AVG` by the last acquisition
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn vcom_averaging(&mut self) -> Result<AveragingMode, Error<I::Error>> {
        let raw = self.read_register(Register::Vcom)?;
        Ok(AveragingMode::from_bits(AVG.decode(raw)))
    }

    /// Set the volatile VCOM setpoint
    ///
    /// The value is lost at power-down. Use [`program_vcom`](Self::program_vcom)
    /// to make it the power-up default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] outside `-5110..=0` mV, or an error if
    /// communication with the device fails.
    pub fn set_vcom(&mut self, millivolts: i16) -> Result<(), Error<I::Error>> {
        let code = millivolts_to_code(millivolts).map_err(|_| Error::OutOfRange)?;
        let raw = self.read_register(Register::Vcom)?;
        self.write_register(Register::Vcom, setpoint_command(raw, code))
    }

    /// Put the VCOM pin in or out of hi-impedance mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_vcom_hiz(&mut self, enabled: bool) -> Result<(), Error<I::Error>> {
        let raw = self.read_register(Register::Vcom)?;
        self.write_register(Register::Vcom, hiz_command(raw, enabled))
    }

    /// Start a kick-back acquisition without waiting for it
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn start_vcom_acquisition(
        &mut self,
        averaging: AveragingMode,
    ) -> Result<(), Error<I::Error>> {
        let raw = self.read_register(Register::Vcom)?;
        self.write_register(Register::Vcom, acquisition_command(raw, averaging))?;

        #[cfg(feature = "defmt")]
        defmt::debug!("VCOM acquisition started ({=u8}x)", averaging.samples());

        Ok(())
    }

    /// Measure the panel's kick-back voltage
    ///
    /// Starts an acquisition and polls until `ACQ` clears, then returns the
    /// measured VCOM in millivolts. `HiZ` stays set; clear it with
    /// [`set_vcom_hiz`](Self::set_vcom_hiz) before driving the panel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] if `ACQ` is still set after the VCOM
    /// acquisition poll budget, or an error if communication with the device
    /// fails.
    pub fn acquire_vcom<D>(
        &mut self,
        averaging: AveragingMode,
        delay: &mut D,
    ) -> Result<i16, Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.start_vcom_acquisition(averaging)?;
        let poll = self.vcom_poll;
        let raw = self.wait_until(Register::Vcom, poll, delay, |raw| !ACQ.is_set(raw))?;
        let millivolts = result_millivolts(raw);

        #[cfg(feature = "defmt")]
        defmt::debug!("VCOM acquired: {=i16} mV", millivolts);

        Ok(millivolts)
    }

    /// Commit a VCOM voltage to nonvolatile memory
    ///
    /// Polls until `PROG` clears. The chip is in STANDBY afterwards; call
    /// [`activate`](Self::activate) to bring the rails back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] outside `-5110..=0` mV (nothing is
    /// written), [`Error::Timeout`] if `PROG` is still set after the
    /// programming poll budget, or an error if communication with the device
    /// fails.
    pub fn program_vcom<D>(&mut self, millivolts: i16, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        let code = millivolts_to_code(millivolts).map_err(|_| Error::OutOfRange)?;
        let raw = self.read_register(Register::Vcom)?;
        self.write_register(Register::Vcom, program_command(raw, code))?;

        let poll = self.program_poll;
        self.wait_until(Register::Vcom, poll, delay, |raw| !PROG.is_set(raw))?;

        #[cfg(feature = "defmt")]
        defmt::info!("VCOM {=i16} mV committed to NVM", millivolts);

        Ok(())
    }
}

#[cfg(feature = "async")]
impl<I> Tps65185Driver<I>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    /// Read the state of the VCOM trigger bits
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn vcom_state(&mut self) -> Result<VcomState, Error<I::Error>> {
        Ok(VcomState::from_raw(self.read_register(Register::Vcom).await?))
    }

    /// Read the current VCOM setpoint in millivolts
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn vcom_millivolts(&mut self) -> Result<i16, Error<I::Error>> {
        Ok(result_millivolts(self.read_register(Register::Vcom).await?))
    }

    /// Read the averaging mode left in `AVG` by the last acquisition
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn vcom_averaging(&mut self) -> Result<AveragingMode, Error<I::Error>> {
        let raw = self.read_register(Register::Vcom).await?;
        Ok(AveragingMode::from_bits(AVG.decode(raw)))
    }

    /// Set the volatile VCOM setpoint
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] outside `-5110..=0` mV, or an error if
    /// communication with the device fails.
    pub async fn set_vcom(&mut self, millivolts: i16) -> Result<(), Error<I::Error>> {
        let code = millivolts_to_code(millivolts).map_err(|_| Error::OutOfRange)?;
        let raw = self.read_register(Register::Vcom).await?;
        self.write_register(Register::Vcom, setpoint_command(raw, code))
            .await
    }

    /// Put the VCOM pin in or out of hi-impedance mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_vcom_hiz(&mut self, enabled: bool) -> Result<(), Error<I::Error>> {
        let raw = self.read_register(Register::Vcom).await?;
        self.write_register(Register::Vcom, hiz_command(raw, enabled))
            .await
    }

    /// Start a kick-back acquisition without waiting for it
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn start_vcom_acquisition(
        &mut self,
        averaging: AveragingMode,
    ) -> Result<(), Error<I::Error>> {
        let raw = self.read_register(Register::Vcom).await?;
        self.write_register(Register::Vcom, acquisition_command(raw, averaging))
            .await?;

        #[cfg(feature = "defmt")]
        defmt::debug!("VCOM acquisition started ({=u8}x)", averaging.samples());

        Ok(())
    }

    /// Measure the panel's kick-back voltage
    ///
    /// `HiZ` stays set on success.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] if `ACQ` is still set after the VCOM
    /// acquisition poll budget, or an error if communication with the device
    /// fails.
    pub async fn acquire_vcom<D>(
        &mut self,
        averaging: AveragingMode,
        delay: &mut D,
    ) -> Result<i16, Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        self.start_vcom_acquisition(averaging).await?;
        let poll = self.vcom_poll;
        let raw = self
            .wait_until(Register::Vcom, poll, delay, |raw| !ACQ.is_set(raw))
            .await?;
        let millivolts = result_millivolts(raw);

        #[cfg(feature = "defmt")]
        defmt::debug!("VCOM acquired: {=i16} mV", millivolts);

        Ok(millivolts)
    }

    /// Commit a VCOM voltage to nonvolatile memory
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] outside `-5110..=0` mV (nothing is
    /// written), [`Error::Timeout`] if `PROG` is still set after the
    /// programming poll budget, or an error if communication with the device
    /// fails.
    pub async fn program_vcom<D>(
        &mut self,
        millivolts: i16,
        delay: &mut D,
    ) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        let code = millivolts_to_code(millivolts).map_err(|_| Error::OutOfRange)?;
        let raw = self.read_register(Register::Vcom).await?;
        self.write_register(Register::Vcom, program_command(raw, code))
            .await?;

        let poll = self.program_poll;
        self.wait_until(Register::Vcom, poll, delay, |raw| !PROG.is_set(raw))
            .await?;

        #[cfg(feature = "defmt")]
        defmt::info!("VCOM {=i16} mV committed to NVM", millivolts);

        Ok(())
    }
}
