//! Interrupt enables and latched interrupt status
//!
//! The TPS65185 drives its nINT pin low while any enabled status bit in
//! INT1/INT2 is set. Status bits latch until the register is read, so one
//! [`InterruptStatus`] read both reports and clears the pending events.
//!
//! # Example
//!
//! ```ignore
//! # use tps65185::{Tps65185Driver, interrupt::InterruptEnable};
//! # let mut pmic: Tps65185Driver<_> = todo!();
//! // Only wake the host for finished conversions and faults
//! let enable = InterruptEnable {
//!     eoc: true,
//!     ..InterruptEnable::faults_only()
//! };
//! pmic.set_interrupt_enable(&enable)?;
//!
//! let status = pmic.interrupt_status()?;
//! if status.has_fault() {
//!     pmic.standby()?;
//! }
//! # Ok::<(), tps65185::Error<()>>(())
//! ```

use crate::registers::{int1, int2, int_en1, int_en2};

/// Interrupt sources, one flag per INT_EN1/INT_EN2 bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct InterruptEnable {
    /// Panel temperature changed by the DT threshold
    pub dtx: bool,
    /// Thermal shutdown
    pub tsd: bool,
    /// Thermal shutdown early warning
    pub hot: bool,
    /// Thermistor hot threshold crossed
    pub tmst_hot: bool,
    /// Thermistor cold threshold crossed
    pub tmst_cold: bool,
    /// VIN under-voltage lockout
    pub uvlo: bool,
    /// VCOM acquisition complete
    pub acqc: bool,
    /// VCOM programming complete
    pub prgc: bool,
    /// Positive boost converter under-voltage
    pub vb_uv: bool,
    /// VDDH under-voltage
    pub vddh_uv: bool,
    /// Inverting buck-boost under-voltage
    pub vn_uv: bool,
    /// VPOS under-voltage
    pub vpos_uv: bool,
    /// VEE under-voltage
    pub vee_uv: bool,
    /// VCOM fault
    pub vcomf: bool,
    /// VNEG under-voltage
    pub vneg_uv: bool,
    /// Temperature conversion complete
    pub eoc: bool,
}

impl Default for InterruptEnable {
    /// Reset state: everything enabled except DTX
    fn default() -> Self {
        Self {
            dtx: false,
            ..Self::all()
        }
    }
}

impl InterruptEnable {
    /// Every source enabled
    pub const fn all() -> Self {
        Self {
            dtx: true,
            tsd: true,
            hot: true,
            tmst_hot: true,
            tmst_cold: true,
            uvlo: true,
            acqc: true,
            prgc: true,
            vb_uv: true,
            vddh_uv: true,
            vn_uv: true,
            vpos_uv: true,
            vee_uv: true,
            vcomf: true,
            vneg_uv: true,
            eoc: true,
        }
    }

    /// Every source masked
    pub const fn none() -> Self {
        Self::from_raw(0, 0)
    }

    /// Thermal, under-voltage and VCOM faults only
    pub const fn faults_only() -> Self {
        Self {
            dtx: false,
            tmst_hot: false,
            tmst_cold: false,
            acqc: false,
            prgc: false,
            eoc: false,
            ..Self::all()
        }
    }

    /// Decode from raw INT_EN1 and INT_EN2 values
    pub const fn from_raw(en1: u16, en2: u16) -> Self {
        Self {
            dtx: int_en1::DTX_EN.is_set(en1),
            tsd: int_en1::TSD_EN.is_set(en1),
            hot: int_en1::HOT_EN.is_set(en1),
            tmst_hot: int_en1::TMST_HOT_EN.is_set(en1),
            tmst_cold: int_en1::TMST_COLD_EN.is_set(en1),
            uvlo: int_en1::UVLO_EN.is_set(en1),
            acqc: int_en1::ACQC_EN.is_set(en1),
            prgc: int_en1::PRGC_EN.is_set(en1),
            vb_uv: int_en2::VBUVEN.is_set(en2),
            vddh_uv: int_en2::VDDHUVEN.is_set(en2),
            vn_uv: int_en2::VNUV_EN.is_set(en2),
            vpos_uv: int_en2::VPOSUVEN.is_set(en2),
            vee_uv: int_en2::VEEUVEN.is_set(en2),
            vcomf: int_en2::VCOMFEN.is_set(en2),
            vneg_uv: int_en2::VNEGUVEN.is_set(en2),
            eoc: int_en2::EOCEN.is_set(en2),
        }
    }

    /// Encode into raw `(INT_EN1, INT_EN2)` values
    pub const fn to_raw(&self) -> (u16, u16) {
        let mut en1 = 0;
        en1 = int_en1::DTX_EN.with_flag(en1, self.dtx);
        en1 = int_en1::TSD_EN.with_flag(en1, self.tsd);
        en1 = int_en1::HOT_EN.with_flag(en1, self.hot);
        en1 = int_en1::TMST_HOT_EN.with_flag(en1, self.tmst_hot);
        en1 = int_en1::TMST_COLD_EN.with_flag(en1, self.tmst_cold);
        en1 = int_en1::UVLO_EN.with_flag(en1, self.uvlo);
        en1 = int_en1::ACQC_EN.with_flag(en1, self.acqc);
        en1 = int_en1::PRGC_EN.with_flag(en1, self.prgc);

        let mut en2 = 0;
        en2 = int_en2::VBUVEN.with_flag(en2, self.vb_uv);
        en2 = int_en2::VDDHUVEN.with_flag(en2, self.vddh_uv);
        en2 = int_en2::VNUV_EN.with_flag(en2, self.vn_uv);
        en2 = int_en2::VPOSUVEN.with_flag(en2, self.vpos_uv);
        en2 = int_en2::VEEUVEN.with_flag(en2, self.vee_uv);
        en2 = int_en2::VCOMFEN.with_flag(en2, self.vcomf);
        en2 = int_en2::VNEGUVEN.with_flag(en2, self.vneg_uv);
        en2 = int_en2::EOCEN.with_flag(en2, self.eoc);

        (en1, en2)
    }
}

/// Latched interrupt events (INT1/INT2)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct InterruptStatus {
    /// Panel temperature changed by the DT threshold or more
    pub dtx: bool,
    /// Thermal shutdown
    pub tsd: bool,
    /// Thermal shutdown early warning
    pub hot: bool,
    /// Thermistor at or above the hot threshold
    pub tmst_hot: bool,
    /// Thermistor at or below the cold threshold
    pub tmst_cold: bool,
    /// VIN under-voltage lockout
    pub uvlo: bool,
    /// VCOM acquisition complete
    pub acqc: bool,
    /// VCOM programming complete
    pub prgc: bool,
    /// Positive boost converter under-voltage
    pub vb_uv: bool,
    /// VDDH under-voltage
    pub vddh_uv: bool,
    /// Inverting buck-boost under-voltage
    pub vn_uv: bool,
    /// VPOS under-voltage
    pub vpos_uv: bool,
    /// VEE under-voltage
    pub vee_uv: bool,
    /// VCOM fault
    pub vcomf: bool,
    /// VNEG under-voltage
    pub vneg_uv: bool,
    /// Temperature conversion complete
    pub eoc: bool,
}

impl InterruptStatus {
    /// Decode from raw INT1 and INT2 values
    pub const fn from_raw(raw1: u16, raw2: u16) -> Self {
        Self {
            dtx: int1::DTX.is_set(raw1),
            tsd: int1::TSD.is_set(raw1),
            hot: int1::HOT.is_set(raw1),
            tmst_hot: int1::TMST_HOT.is_set(raw1),
            tmst_cold: int1::TMST_COLD.is_set(raw1),
            uvlo: int1::UVLO.is_set(raw1),
            acqc: int1::ACQC.is_set(raw1),
            prgc: int1::PRGC.is_set(raw1),
            vb_uv: int2::VB_UV.is_set(raw2),
            vddh_uv: int2::VDDH_UV.is_set(raw2),
            vn_uv: int2::VN_UV.is_set(raw2),
            vpos_uv: int2::VPOS_UV.is_set(raw2),
            vee_uv: int2::VEE_UV.is_set(raw2),
            vcomf: int2::VCOMF.is_set(raw2),
            vneg_uv: int2::VNEG_UV.is_set(raw2),
            eoc: int2::EOC.is_set(raw2),
        }
    }

    /// Check if any event is pending
    pub const fn any_set(&self) -> bool {
        self.has_fault()
            || self.dtx
            || self.tmst_hot
            || self.tmst_cold
            || self.acqc
            || self.prgc
            || self.eoc
    }

    /// Check if a thermal, supply or VCOM fault is pending
    pub const fn has_fault(&self) -> bool {
        self.tsd
            || self.hot
            || self.uvlo
            || self.vb_uv
            || self.vddh_uv
            || self.vn_uv
            || self.vpos_uv
            || self.vee_uv
            || self.vcomf
            || self.vneg_uv
    }
}
