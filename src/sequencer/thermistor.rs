//! Thermistor temperature acquisition
//!
//! Writing `READ_THERM` in TMST1 starts one ADC conversion of the panel
//! thermistor. The conversion is complete once `CONV_END` reads 1 or
//! `READ_THERM` has cleared itself; TMST_VALUE then holds the temperature
//! as a signed byte in °C.
//!
//! The ADC saturates rather than failing: anything at or below -10 °C reads
//! `0xF6`, anything at or above 85 °C reads `0x55`. [`Saturation`] tells the
//! clamped readings apart.

use crate::field::OutOfRange;
use crate::registers::tmst1::{CONV_END, DT, READ_THERM};
use crate::registers::{Register, tmst_value, tmst2};
use crate::{Error, Tps65185Driver};

#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

/// Lowest temperature the ADC reports, in °C
pub const FLOOR_CELSIUS: i8 = -10;

/// Highest temperature the ADC reports, in °C
pub const CEILING_CELSIUS: i8 = 85;

/// Where a reading sits relative to the ADC's clamp points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Saturation {
    /// Inside the measurable range
    InRange,
    /// Clamped at the floor; the panel may be colder
    AtOrBelowFloor,
    /// Clamped at the ceiling; the panel may be hotter
    AtOrAboveCeiling,
}

/// One TMST_VALUE reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureReading {
    /// Raw two's-complement byte
    pub raw: u8,
}

impl TemperatureReading {
    /// Decode from a raw TMST_VALUE value
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_raw(raw: u16) -> Self {
        Self {
            raw: tmst_value::TEMP.decode(raw) as u8,
        }
    }

    /// Temperature in °C
    #[allow(clippy::cast_possible_wrap)]
    pub const fn celsius(&self) -> i8 {
        self.raw as i8
    }

    /// Classify against the clamp points
    pub const fn saturation(&self) -> Saturation {
        let celsius = self.celsius();
        if celsius <= FLOOR_CELSIUS {
            Saturation::AtOrBelowFloor
        } else if celsius >= CEILING_CELSIUS {
            Saturation::AtOrAboveCeiling
        } else {
            Saturation::InRange
        }
    }
}

/// Temperature change that raises the DTX interrupt (TMST1 `DT`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TempChangeThreshold {
    /// 2 °C
    #[default]
    C2 = 0,
    /// 3 °C
    C3 = 1,
    /// 4 °C
    C4 = 2,
    /// 5 °C
    C5 = 3,
}

impl TempChangeThreshold {
    /// Decode the 2-bit `DT` code
    pub const fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0 => Self::C2,
            1 => Self::C3,
            2 => Self::C4,
            _ => Self::C5,
        }
    }

    /// `DT` code
    pub const fn bits(self) -> u16 {
        self as u16
    }

    /// Threshold in °C
    pub const fn celsius(self) -> u8 {
        self as u8 + 2
    }
}

/// Hot and cold thermistor interrupt thresholds (TMST2), in °C
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThermistorThresholds {
    /// TMST_COLD fires at or below this temperature, `-7..=8`
    pub cold: i8,
    /// TMST_HOT fires at or above this temperature, `42..=57`
    pub hot: i8,
}

impl Default for ThermistorThresholds {
    fn default() -> Self {
        Self { cold: 0, hot: 50 }
    }
}

impl ThermistorThresholds {
    /// Offset of the TMST_COLD code, in °C
    pub const COLD_OFFSET: i8 = -7;

    /// Offset of the TMST_HOT code, in °C
    pub const HOT_OFFSET: i8 = 42;

    /// Decode from a raw TMST2 value
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn from_raw(raw: u16) -> Self {
        Self {
            cold: Self::COLD_OFFSET + tmst2::TMST_COLD.decode(raw) as i8,
            hot: Self::HOT_OFFSET + tmst2::TMST_HOT.decode(raw) as i8,
        }
    }

    /// Encode into a raw TMST2 value
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if either threshold falls outside the 16
    /// degrees its 4-bit code can express.
    #[allow(clippy::cast_sign_loss)]
    pub const fn to_raw(&self) -> Result<u16, OutOfRange> {
        let cold = self.cold as i16 - Self::COLD_OFFSET as i16;
        let hot = self.hot as i16 - Self::HOT_OFFSET as i16;
        if cold < 0 || hot < 0 {
            return Err(OutOfRange);
        }
        match tmst2::TMST_COLD.encode(0, cold as u16) {
            Ok(raw) => tmst2::TMST_HOT.encode(raw, hot as u16),
            Err(error) => Err(error),
        }
    }
}

/// TMST1 value that starts a conversion, keeping `DT`
pub const fn conversion_command(raw: u16) -> u16 {
    (raw & DT.mask) | READ_THERM.mask
}

/// TMST1 value that sets `DT` without starting a conversion
pub const fn threshold_command(raw: u16, threshold: TempChangeThreshold) -> u16 {
    (raw & !(READ_THERM.mask | DT.mask)) | DT.place(threshold.bits())
}

/// `true` if a TMST1 read shows no conversion in flight
pub const fn conversion_complete(raw: u16) -> bool {
    !READ_THERM.is_set(raw) || CONV_END.is_set(raw)
}

#[cfg(not(feature = "async"))]
impl<I> Tps65185Driver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Start a thermistor conversion without waiting for it
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn start_temperature_conversion(&mut self) -> Result<(), Error<I::Error>> {
        let raw = self.read_register(Register::Tmst1)?;
        self.write_register(Register::Tmst1, conversion_command(raw))?;

        #[cfg(feature = "defmt")]
        defmt::trace!("Thermistor conversion started");

        Ok(())
    }

    /// Check whether the last conversion has finished
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_conversion_complete(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(conversion_complete(self.read_register(Register::Tmst1)?))
    }

    /// Read TMST_VALUE as left by the last conversion
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn last_temperature(&mut self) -> Result<TemperatureReading, Error<I::Error>> {
        Ok(TemperatureReading::from_raw(
            self.read_register(Register::TmstValue)?,
        ))
    }

    /// Run one thermistor conversion and return the result
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] if the conversion does not finish within
    /// the thermistor poll budget, or an error if communication with the
    /// device fails.
    pub fn read_temperature<D>(&mut self, delay: &mut D) -> Result<TemperatureReading, Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.start_temperature_conversion()?;
        let poll = self.thermistor_poll;
        self.wait_until(Register::Tmst1, poll, delay, conversion_complete)?;
        let reading = self.last_temperature()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Thermistor: {=i8} C ({})", reading.celsius(), reading.saturation());

        Ok(reading)
    }

    /// Read the DTX interrupt threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn temperature_change_threshold(
        &mut self,
    ) -> Result<TempChangeThreshold, Error<I::Error>> {
        let raw = self.read_register(Register::Tmst1)?;
        Ok(TempChangeThreshold::from_bits(DT.decode(raw)))
    }

    /// Set the DTX interrupt threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_temperature_change_threshold(
        &mut self,
        threshold: TempChangeThreshold,
    ) -> Result<(), Error<I::Error>> {
        let raw = self.read_register(Register::Tmst1)?;
        self.write_register(Register::Tmst1, threshold_command(raw, threshold))
    }

    /// Read the hot and cold interrupt thresholds
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn thermistor_thresholds(&mut self) -> Result<ThermistorThresholds, Error<I::Error>> {
        Ok(ThermistorThresholds::from_raw(
            self.read_register(Register::Tmst2)?,
        ))
    }

    /// Set the hot and cold interrupt thresholds
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if a threshold cannot be encoded (nothing
    /// is written), or an error if communication with the device fails.
    pub fn set_thermistor_thresholds(
        &mut self,
        thresholds: &ThermistorThresholds,
    ) -> Result<(), Error<I::Error>> {
        let raw = thresholds.to_raw().map_err(|_| Error::OutOfRange)?;
        self.write_register(Register::Tmst2, raw)
    }
}

#[cfg(feature = "async")]
impl<I> Tps65185Driver<I>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    /// Start a thermistor conversion without waiting for it
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn start_temperature_conversion(&mut self) -> Result<(), Error<I::Error>> {
        let raw = self.read_register(Register::Tmst1).await?;
        self.write_register(Register::Tmst1, conversion_command(raw))
            .await?;

        #[cfg(feature = "defmt")]
        defmt::trace!("Thermistor conversion started");

        Ok(())
    }

    /// Check whether the last conversion has finished
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn is_conversion_complete(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(conversion_complete(
            self.read_register(Register::Tmst1).await?,
        ))
    }

    /// Read TMST_VALUE as left by the last conversion
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn last_temperature(&mut self) -> Result<TemperatureReading, Error<I::Error>> {
        Ok(TemperatureReading::from_raw(
            self.read_register(Register::TmstValue).await?,
        ))
    }

    /// Run one thermistor conversion and return the result
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] if the conversion does not finish within
    /// the thermistor poll budget, or an error if communication with the
    /// device fails.
    pub async fn read_temperature<D>(
        &mut self,
        delay: &mut D,
    ) -> Result<TemperatureReading, Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        self.start_temperature_conversion().await?;
        let poll = self.thermistor_poll;
        self.wait_until(Register::Tmst1, poll, delay, conversion_complete)
            .await?;
        let reading = self.last_temperature().await?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Thermistor: {=i8} C ({})", reading.celsius(), reading.saturation());

        Ok(reading)
    }

    /// Read the DTX interrupt threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn temperature_change_threshold(
        &mut self,
    ) -> Result<TempChangeThreshold, Error<I::Error>> {
        let raw = self.read_register(Register::Tmst1).await?;
        Ok(TempChangeThreshold::from_bits(DT.decode(raw)))
    }

    /// Set the DTX interrupt threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_temperature_change_threshold(
        &mut self,
        threshold: TempChangeThreshold,
    ) -> Result<(), Error<I::Error>> {
        let raw = self.read_register(Register::Tmst1).await?;
        self.write_register(Register::Tmst1, threshold_command(raw, threshold))
            .await
    }

    /// Read the hot and cold interrupt thresholds
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn thermistor_thresholds(
        &mut self,
    ) -> Result<ThermistorThresholds, Error<I::Error>> {
        Ok(ThermistorThresholds::from_raw(
            self.read_register(Register::Tmst2).await?,
        ))
    }

    /// Set the hot and cold interrupt thresholds
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if a threshold cannot be encoded (nothing
    /// is written), or an error if communication with the device fails.
    pub async fn set_thermistor_thresholds(
        &mut self,
        thresholds: &ThermistorThresholds,
    ) -> Result<(), Error<I::Error>> {
        let raw = thresholds.to_raw().map_err(|_| Error::OutOfRange)?;
        self.write_register(Register::Tmst2, raw).await
    }
}
