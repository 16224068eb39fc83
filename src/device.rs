//! High-level driver API for the TPS65185
//!
//! [`Tps65185Driver`] binds the register catalog to a bus interface. It
//! keeps no register state of its own: every accessor reads or writes the
//! chip, so values always reflect the hardware.
//!
//! The driver offers three levels of access:
//! - raw registers ([`read_register`](Tps65185Driver::read_register),
//!   [`write_register`](Tps65185Driver::write_register))
//! - single fields ([`read_field`](Tps65185Driver::read_field),
//!   [`write_field`](Tps65185Driver::write_field))
//! - typed accessors per register, plus the VCOM and thermistor sequences
//!   in [`sequencer`](crate::sequencer)

use crate::field::{Access, BitFieldSpec};
use crate::interrupt::{InterruptEnable, InterruptStatus};
use crate::power::{
    PowerDownDelays, PowerGood, PowerUpDelays, RailEnable, RailSequence, Revision,
    VposVnegVoltage,
};
use crate::registers::{Register, enable, vadj};
use crate::sequencer::PollConfig;
use crate::Error;

// Only import RegisterInterface when not using async feature
#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

/// Main driver for the TPS65185
pub struct Tps65185Driver<I> {
    interface: I,
    pub(crate) vcom_poll: PollConfig,
    pub(crate) program_poll: PollConfig,
    pub(crate) thermistor_poll: PollConfig,
}

impl<I> Tps65185Driver<I> {
    /// Create a new driver over a bus interface
    ///
    /// No bus traffic happens here. Call [`probe`](Self::probe) to check the
    /// chip is present.
    pub const fn new(interface: I) -> Self {
        Self {
            interface,
            vcom_poll: PollConfig::VCOM_ACQUISITION,
            program_poll: PollConfig::VCOM_PROGRAMMING,
            thermistor_poll: PollConfig::THERMISTOR,
        }
    }

    /// Override the VCOM acquisition poll budget
    #[must_use]
    pub fn with_vcom_poll(mut self, poll: PollConfig) -> Self {
        self.vcom_poll = poll;
        self
    }

    /// Override the VCOM programming poll budget
    #[must_use]
    pub fn with_program_poll(mut self, poll: PollConfig) -> Self {
        self.program_poll = poll;
        self
    }

    /// Override the thermistor conversion poll budget
    #[must_use]
    pub fn with_thermistor_poll(mut self, poll: PollConfig) -> Self {
        self.thermistor_poll = poll;
        self
    }

    /// VCOM acquisition poll budget
    pub const fn vcom_poll(&self) -> PollConfig {
        self.vcom_poll
    }

    /// VCOM programming poll budget
    pub const fn program_poll(&self) -> PollConfig {
        self.program_poll
    }

    /// Thermistor conversion poll budget
    pub const fn thermistor_poll(&self) -> PollConfig {
        self.thermistor_poll
    }

    /// Borrow the bus interface
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Consume the driver and return the bus interface
    pub fn release(self) -> I {
        self.interface
    }
}

fn ensure_member<E>(register: Register, field: &BitFieldSpec) -> Result<(), Error<E>> {
    if register.spec().contains(field) {
        Ok(())
    } else {
        Err(Error::UnknownField)
    }
}

fn ensure_fits<E>(register: Register, value: u16) -> Result<(), Error<E>> {
    if value > register.spec().width.max_value() {
        return Err(Error::OutOfRange);
    }
    Ok(())
}

fn ensure_writable<E>(field: &BitFieldSpec) -> Result<(), Error<E>> {
    if field.access != Access::ReadWrite {
        return Err(Error::NotWritable);
    }
    Ok(())
}

/// Raw value for a field write: triggers cleared, `value` inserted
fn field_command<E>(
    register: Register,
    field: &BitFieldSpec,
    raw: u16,
    value: u16,
) -> Result<u16, Error<E>> {
    let raw = raw & !register.spec().trigger_mask();
    field.encode(raw, value).map_err(|_| Error::OutOfRange)
}

/// ENABLE value that fires `trigger`, keeping the rail bits
const fn transition_command(raw: u16, trigger: &BitFieldSpec) -> u16 {
    (raw & !(enable::ACTIVE.mask | enable::STANDBY.mask)) | trigger.mask
}

#[allow(clippy::cast_possible_truncation)]
const fn low_byte(raw: u16) -> u8 {
    (raw & 0xFF) as u8
}

#[cfg(not(feature = "async"))]
impl<I> Tps65185Driver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Read a whole register
    ///
    /// 8-bit registers come back zero-extended; VCOM is assembled from its
    /// two little-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_register(&mut self, register: Register) -> Result<u16, Error<I::Error>> {
        let spec = register.spec();
        let mut buffer = [0u8; 2];
        self.interface.read_register(
            spec.address,
            spec.width.bits(),
            &mut buffer[..spec.width.bytes()],
        )?;
        Ok(u16::from_le_bytes(buffer))
    }

    /// Write a whole register
    ///
    /// Self-clearing bits set in `value` fire their operation on the chip.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `value` is wider than the register, or
    /// an error if communication with the device fails.
    pub fn write_register(&mut self, register: Register, value: u16) -> Result<(), Error<I::Error>> {
        ensure_fits(register, value)?;
        let spec = register.spec();
        let bytes = value.to_le_bytes();

        #[cfg(feature = "defmt")]
        defmt::trace!("{} <- {=u16:#x}", register, value);

        self.interface
            .write_register(spec.address, spec.width.bits(), &bytes[..spec.width.bytes()])?;
        Ok(())
    }

    /// Read the register at `address`
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRegister`] for addresses outside the map, or an
    /// error if communication with the device fails.
    pub fn read_address(&mut self, address: u8) -> Result<u16, Error<I::Error>> {
        let register = Register::from_address(address).ok_or(Error::UnknownRegister(address))?;
        self.read_register(register)
    }

    /// Write the register at `address`
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRegister`] for addresses outside the map,
    /// [`Error::OutOfRange`] if `value` is wider than the register, or an
    /// error if communication with the device fails.
    pub fn write_address(&mut self, address: u8, value: u16) -> Result<(), Error<I::Error>> {
        let register = Register::from_address(address).ok_or(Error::UnknownRegister(address))?;
        self.write_register(register, value)
    }

    /// Read one field, right-aligned
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] if `field` is not part of `register`,
    /// or an error if communication with the device fails.
    pub fn read_field(
        &mut self,
        register: Register,
        field: &BitFieldSpec,
    ) -> Result<u16, Error<I::Error>> {
        ensure_member(register, field)?;
        Ok(field.decode(self.read_register(register)?))
    }

    /// Read-modify-write one read/write field
    ///
    /// Other fields keep their current value. Trigger bits are written as 0,
    /// so an operation in flight is never fired twice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] if `field` is not part of `register`,
    /// [`Error::NotWritable`] for read-only, reserved or trigger fields,
    /// [`Error::OutOfRange`] if `value` does not fit, or an error if
    /// communication with the device fails.
    pub fn write_field(
        &mut self,
        register: Register,
        field: &BitFieldSpec,
        value: u16,
    ) -> Result<(), Error<I::Error>> {
        ensure_member(register, field)?;
        ensure_writable(field)?;
        let raw = self.read_register(register)?;
        let raw = field_command(register, field, raw, value)?;
        self.write_register(register, raw)
    }

    /// Check a TPS65185 answers on the bus
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDevice`] if REVID does not carry the TPS65185
    /// version code, or an error if communication with the device fails.
    pub fn probe(&mut self) -> Result<Revision, Error<I::Error>> {
        let raw = self.read_register(Register::RevId)?;
        let revision = Revision::from_raw(raw);
        if !revision.is_tps65185() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Unexpected REVID {=u16:#x}", raw);
            return Err(Error::InvalidDevice(low_byte(raw)));
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("TPS65185 rev {=u8}.{=u8}", revision.major, revision.minor);

        Ok(revision)
    }

    /// Read the individual rail enables
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn rail_enable(&mut self) -> Result<RailEnable, Error<I::Error>> {
        Ok(RailEnable::from_raw(self.read_register(Register::Enable)?))
    }

    /// Switch rails individually, bypassing the power sequencer
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_rail_enable(&mut self, rails: &RailEnable) -> Result<(), Error<I::Error>> {
        self.write_register(Register::Enable, rails.to_raw())
    }

    /// STANDBY to ACTIVE: power the rails up per UPSEQ0/UPSEQ1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn activate(&mut self) -> Result<(), Error<I::Error>> {
        let raw = self.read_register(Register::Enable)?;
        self.write_register(Register::Enable, transition_command(raw, &enable::ACTIVE))
    }

    /// ACTIVE to STANDBY: power the rails down per DWNSEQ0/DWNSEQ1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn standby(&mut self) -> Result<(), Error<I::Error>> {
        let raw = self.read_register(Register::Enable)?;
        self.write_register(Register::Enable, transition_command(raw, &enable::STANDBY))
    }

    /// Read the VPOS/VNEG target; `None` if VADJ holds a reserved code
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn vpos_vneg_voltage(&mut self) -> Result<Option<VposVnegVoltage>, Error<I::Error>> {
        let raw = self.read_register(Register::Vadj)?;
        Ok(VposVnegVoltage::from_code(vadj::VSET.decode(raw)))
    }

    /// Set the VPOS/VNEG target
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_vpos_vneg_voltage(&mut self, voltage: VposVnegVoltage) -> Result<(), Error<I::Error>> {
        let raw = self.read_register(Register::Vadj)?;
        self.write_register(Register::Vadj, voltage.apply(raw))
    }

    /// Read the power-up strobe assignment
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn power_up_sequence(&mut self) -> Result<RailSequence, Error<I::Error>> {
        Ok(RailSequence::from_raw(self.read_register(Register::UpSeq0)?))
    }

    /// Set the power-up strobe assignment
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_power_up_sequence(&mut self, sequence: &RailSequence) -> Result<(), Error<I::Error>> {
        self.write_register(Register::UpSeq0, sequence.to_raw())
    }

    /// Read the power-up delays
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn power_up_delays(&mut self) -> Result<PowerUpDelays, Error<I::Error>> {
        Ok(PowerUpDelays::from_raw(self.read_register(Register::UpSeq1)?))
    }

    /// Set the power-up delays
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_power_up_delays(&mut self, delays: &PowerUpDelays) -> Result<(), Error<I::Error>> {
        self.write_register(Register::UpSeq1, delays.to_raw())
    }

    /// Read the power-down strobe assignment
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn power_down_sequence(&mut self) -> Result<RailSequence, Error<I::Error>> {
        Ok(RailSequence::from_raw(self.read_register(Register::DwnSeq0)?))
    }

    /// Set the power-down strobe assignment
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_power_down_sequence(&mut self, sequence: &RailSequence) -> Result<(), Error<I::Error>> {
        self.write_register(Register::DwnSeq0, sequence.to_raw())
    }

    /// Read the power-down delays
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn power_down_delays(&mut self) -> Result<PowerDownDelays, Error<I::Error>> {
        Ok(PowerDownDelays::from_raw(self.read_register(Register::DwnSeq1)?))
    }

    /// Set the power-down delays
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_power_down_delays(&mut self, delays: &PowerDownDelays) -> Result<(), Error<I::Error>> {
        self.write_register(Register::DwnSeq1, delays.to_raw())
    }

    /// Read the power-good status of each rail
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn power_good(&mut self) -> Result<PowerGood, Error<I::Error>> {
        Ok(PowerGood::from_raw(self.read_register(Register::Pg)?))
    }

    /// Read the device revision without validating it
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn revision(&mut self) -> Result<Revision, Error<I::Error>> {
        Ok(Revision::from_raw(self.read_register(Register::RevId)?))
    }

    /// Read which interrupt sources are enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn interrupt_enable(&mut self) -> Result<InterruptEnable, Error<I::Error>> {
        let en1 = self.read_register(Register::IntEn1)?;
        let en2 = self.read_register(Register::IntEn2)?;
        Ok(InterruptEnable::from_raw(en1, en2))
    }

    /// Enable or mask interrupt sources
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_interrupt_enable(&mut self, enable: &InterruptEnable) -> Result<(), Error<I::Error>> {
        let (en1, en2) = enable.to_raw();
        self.write_register(Register::IntEn1, en1)?;
        self.write_register(Register::IntEn2, en2)
    }

    /// Read and clear the latched interrupt events
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn interrupt_status(&mut self) -> Result<InterruptStatus, Error<I::Error>> {
        let int1 = self.read_register(Register::Int1)?;
        let int2 = self.read_register(Register::Int2)?;
        Ok(InterruptStatus::from_raw(int1, int2))
    }

    /// Poll `register` until `done` accepts a read, returning that read
    pub(crate) fn wait_until<D, F>(
        &mut self,
        register: Register,
        poll: PollConfig,
        delay: &mut D,
        done: F,
    ) -> Result<u16, Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
        F: Fn(u16) -> bool,
    {
        for _ in 0..poll.max_polls {
            delay.delay_us(poll.interval_us);
            let raw = self.read_register(register)?;
            if done(raw) {
                return Ok(raw);
            }
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("{} still busy after {=u32} polls", register, poll.max_polls);

        Err(Error::Timeout)
    }
}

#[cfg(feature = "async")]
impl<I> Tps65185Driver<I>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    /// Read a whole register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_register(&mut self, register: Register) -> Result<u16, Error<I::Error>> {
        let spec = register.spec();
        let mut buffer = [0u8; 2];
        self.interface
            .read_register(
                spec.address,
                spec.width.bits(),
                &mut buffer[..spec.width.bytes()],
            )
            .await?;
        Ok(u16::from_le_bytes(buffer))
    }

    /// Write a whole register
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `value` is wider than the register, or
    /// an error if communication with the device fails.
    pub async fn write_register(
        &mut self,
        register: Register,
        value: u16,
    ) -> Result<(), Error<I::Error>> {
        ensure_fits(register, value)?;
        let spec = register.spec();
        let bytes = value.to_le_bytes();

        #[cfg(feature = "defmt")]
        defmt::trace!("{} <- {=u16:#x}", register, value);

        self.interface
            .write_register(spec.address, spec.width.bits(), &bytes[..spec.width.bytes()])
            .await?;
        Ok(())
    }

    /// Read the register at `address`
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRegister`] for addresses outside the map, or an
    /// error if communication with the device fails.
    pub async fn read_address(&mut self, address: u8) -> Result<u16, Error<I::Error>> {
        let register = Register::from_address(address).ok_or(Error::UnknownRegister(address))?;
        self.read_register(register).await
    }

    /// Write the register at `address`
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRegister`] for addresses outside the map,
    /// [`Error::OutOfRange`] if `value` is wider than the register, or an
    /// error if communication with the device fails.
    pub async fn write_address(&mut self, address: u8, value: u16) -> Result<(), Error<I::Error>> {
        let register = Register::from_address(address).ok_or(Error::UnknownRegister(address))?;
        self.write_register(register, value).await
    }

    /// Read one field, right-aligned
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] if `field` is not part of `register`,
    /// or an error if communication with the device fails.
    pub async fn read_field(
        &mut self,
        register: Register,
        field: &BitFieldSpec,
    ) -> Result<u16, Error<I::Error>> {
        ensure_member(register, field)?;
        Ok(field.decode(self.read_register(register).await?))
    }

    /// Read-modify-write one read/write field
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] if `field` is not part of `register`,
    /// [`Error::NotWritable`] for read-only, reserved or trigger fields,
    /// [`Error::OutOfRange`] if `value` does not fit, or an error if
    /// communication with the device fails.
    pub async fn write_field(
        &mut self,
        register: Register,
        field: &BitFieldSpec,
        value: u16,
    ) -> Result<(), Error<I::Error>> {
        ensure_member(register, field)?;
        ensure_writable(field)?;
        let raw = self.read_register(register).await?;
        let raw = field_command(register, field, raw, value)?;
        self.write_register(register, raw).await
    }

    /// Check a TPS65185 answers on the bus
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDevice`] if REVID does not carry the TPS65185
    /// version code, or an error if communication with the device fails.
    pub async fn probe(&mut self) -> Result<Revision, Error<I::Error>> {
        let raw = self.read_register(Register::RevId).await?;
        let revision = Revision::from_raw(raw);
        if !revision.is_tps65185() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Unexpected REVID {=u16:#x}", raw);
            return Err(Error::InvalidDevice(low_byte(raw)));
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("TPS65185 rev {=u8}.{=u8}", revision.major, revision.minor);

        Ok(revision)
    }

    /// Read the individual rail enables
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn rail_enable(&mut self) -> Result<RailEnable, Error<I::Error>> {
        Ok(RailEnable::from_raw(
            self.read_register(Register::Enable).await?,
        ))
    }

    /// Switch rails individually, bypassing the power sequencer
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_rail_enable(&mut self, rails: &RailEnable) -> Result<(), Error<I::Error>> {
        self.write_register(Register::Enable, rails.to_raw()).await
    }

    /// STANDBY to ACTIVE: power the rails up per UPSEQ0/UPSEQ1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn activate(&mut self) -> Result<(), Error<I::Error>> {
        let raw = self.read_register(Register::Enable).await?;
        self.write_register(Register::Enable, transition_command(raw, &enable::ACTIVE))
            .await
    }

    /// ACTIVE to STANDBY: power the rails down per DWNSEQ0/DWNSEQ1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn standby(&mut self) -> Result<(), Error<I::Error>> {
        let raw = self.read_register(Register::Enable).await?;
        self.write_register(Register::Enable, transition_command(raw, &enable::STANDBY))
            .await
    }

    /// Read the VPOS/VNEG target; `None` if VADJ holds a reserved code
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn vpos_vneg_voltage(
        &mut self,
    ) -> Result<Option<VposVnegVoltage>, Error<I::Error>> {
        let raw = self.read_register(Register::Vadj).await?;
        Ok(VposVnegVoltage::from_code(vadj::VSET.decode(raw)))
    }

    /// Set the VPOS/VNEG target
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_vpos_vneg_voltage(
        &mut self,
        voltage: VposVnegVoltage,
    ) -> Result<(), Error<I::Error>> {
        let raw = self.read_register(Register::Vadj).await?;
        self.write_register(Register::Vadj, voltage.apply(raw)).await
    }

    /// Read the power-up strobe assignment
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn power_up_sequence(&mut self) -> Result<RailSequence, Error<I::Error>> {
        Ok(RailSequence::from_raw(
            self.read_register(Register::UpSeq0).await?,
        ))
    }

    /// Set the power-up strobe assignment
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_power_up_sequence(
        &mut self,
        sequence: &RailSequence,
    ) -> Result<(), Error<I::Error>> {
        self.write_register(Register::UpSeq0, sequence.to_raw()).await
    }

    /// Read the power-up delays
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn power_up_delays(&mut self) -> Result<PowerUpDelays, Error<I::Error>> {
        Ok(PowerUpDelays::from_raw(
            self.read_register(Register::UpSeq1).await?,
        ))
    }

    /// Set the power-up delays
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_power_up_delays(
        &mut self,
        delays: &PowerUpDelays,
    ) -> Result<(), Error<I::Error>> {
        self.write_register(Register::UpSeq1, delays.to_raw()).await
    }

    /// Read the power-down strobe assignment
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn power_down_sequence(&mut self) -> Result<RailSequence, Error<I::Error>> {
        Ok(RailSequence::from_raw(
            self.read_register(Register::DwnSeq0).await?,
        ))
    }

    /// Set the power-down strobe assignment
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_power_down_sequence(
        &mut self,
        sequence: &RailSequence,
    ) -> Result<(), Error<I::Error>> {
        self.write_register(Register::DwnSeq0, sequence.to_raw())
            .await
    }

    /// Read the power-down delays
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn power_down_delays(&mut self) -> Result<PowerDownDelays, Error<I::Error>> {
        Ok(PowerDownDelays::from_raw(
            self.read_register(Register::DwnSeq1).await?,
        ))
    }

    /// Set the power-down delays
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_power_down_delays(
        &mut self,
        delays: &PowerDownDelays,
    ) -> Result<(), Error<I::Error>> {
        self.write_register(Register::DwnSeq1, delays.to_raw()).await
    }

    /// Read the power-good status of each rail
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn power_good(&mut self) -> Result<PowerGood, Error<I::Error>> {
        Ok(PowerGood::from_raw(self.read_register(Register::Pg).await?))
    }

    /// Read the device revision without validating it
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn revision(&mut self) -> Result<Revision, Error<I::Error>> {
        Ok(Revision::from_raw(
            self.read_register(Register::RevId).await?,
        ))
    }

    /// Read which interrupt sources are enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn interrupt_enable(&mut self) -> Result<InterruptEnable, Error<I::Error>> {
        let en1 = self.read_register(Register::IntEn1).await?;
        let en2 = self.read_register(Register::IntEn2).await?;
        Ok(InterruptEnable::from_raw(en1, en2))
    }

    /// Enable or mask interrupt sources
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_interrupt_enable(
        &mut self,
        enable: &InterruptEnable,
    ) -> Result<(), Error<I::Error>> {
        let (en1, en2) = enable.to_raw();
        self.write_register(Register::IntEn1, en1).await?;
        self.write_register(Register::IntEn2, en2).await
    }

    /// Read and clear the latched interrupt events
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn interrupt_status(&mut self) -> Result<InterruptStatus, Error<I::Error>> {
        let int1 = self.read_register(Register::Int1).await?;
        let int2 = self.read_register(Register::Int2).await?;
        Ok(InterruptStatus::from_raw(int1, int2))
    }

    /// Poll `register` until `done` accepts a read, returning that read
    pub(crate) async fn wait_until<D, F>(
        &mut self,
        register: Register,
        poll: PollConfig,
        delay: &mut D,
        done: F,
    ) -> Result<u16, Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
        F: Fn(u16) -> bool,
    {
        for _ in 0..poll.max_polls {
            delay.delay_us(poll.interval_us).await;
            let raw = self.read_register(register).await?;
            if done(raw) {
                return Ok(raw);
            }
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("{} still busy after {=u32} polls", register, poll.max_polls);

        Err(Error::Timeout)
    }
}
