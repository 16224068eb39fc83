//! Rail control, power sequencing and status
//!
//! The TPS65185 powers six rails (V3P3, VDDH, VPOS, VEE, VNEG and VCOM).
//! They can be switched individually through ENABLE, or brought up and down
//! together by the ACTIVE/STANDBY transitions, which follow the strobe
//! assignments and delays programmed in UPSEQx/DWNSEQx.
//!
//! # Example
//!
//! ```ignore
//! # use tps65185::{Tps65185Driver, power::{RailSequence, Strobe}};
//! # let mut pmic: Tps65185Driver<_> = todo!();
//! // Bring VNEG and VEE up together, then VPOS, then VDDH
//! pmic.set_power_up_sequence(&RailSequence {
//!     vddh: Strobe::Strobe3,
//!     vpos: Strobe::Strobe2,
//!     vee: Strobe::Strobe1,
//!     vneg: Strobe::Strobe1,
//! })?;
//! pmic.activate()?;
//! # Ok::<(), tps65185::Error<()>>(())
//! ```

use crate::registers::{dwnseq1, enable, pg, revid, upseq0, upseq1, vadj};
use crate::VERSION_CODE;

/// Individual rail enables (ENABLE bits 5..0)
///
/// The transition bits ACTIVE and STANDBY are triggers and are driven by
/// [`activate`](crate::Tps65185Driver::activate) and
/// [`standby`](crate::Tps65185Driver::standby) instead.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct RailEnable {
    /// VIN3P3 to V3P3 switch
    pub v3p3: bool,
    /// VCOM buffer
    pub vcom: bool,
    /// VDDH charge pump
    pub vddh: bool,
    /// VPOS LDO; the chip ignores this while VNEG is off
    pub vpos: bool,
    /// VEE charge pump
    pub vee: bool,
    /// VNEG LDO
    pub vneg: bool,
}

impl RailEnable {
    /// Every rail on
    pub const fn all() -> Self {
        Self {
            v3p3: true,
            vcom: true,
            vddh: true,
            vpos: true,
            vee: true,
            vneg: true,
        }
    }

    /// Decode from a raw ENABLE value
    pub const fn from_raw(raw: u16) -> Self {
        Self {
            v3p3: enable::V3P3_EN.is_set(raw),
            vcom: enable::VCOM_EN.is_set(raw),
            vddh: enable::VDDH_EN.is_set(raw),
            vpos: enable::VPOS_EN.is_set(raw),
            vee: enable::VEE_EN.is_set(raw),
            vneg: enable::VNEG_EN.is_set(raw),
        }
    }

    /// Encode into a raw ENABLE value with both transition bits clear
    pub const fn to_raw(&self) -> u16 {
        let mut raw = 0;
        raw = enable::V3P3_EN.with_flag(raw, self.v3p3);
        raw = enable::VCOM_EN.with_flag(raw, self.vcom);
        raw = enable::VDDH_EN.with_flag(raw, self.vddh);
        raw = enable::VPOS_EN.with_flag(raw, self.vpos);
        raw = enable::VEE_EN.with_flag(raw, self.vee);
        enable::VNEG_EN.with_flag(raw, self.vneg)
    }

    /// Check if any rail is enabled
    pub const fn any_enabled(&self) -> bool {
        self.v3p3 || self.vcom || self.vddh || self.vpos || self.vee || self.vneg
    }
}

/// VPOS/VNEG regulation target (VADJ `VSET`)
///
/// VNEG tracks VPOS with the opposite sign.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VposVnegVoltage {
    /// ±15.00 V (reset default)
    #[default]
    V15_00 = 0b011,
    /// ±14.75 V
    V14_75 = 0b100,
    /// ±14.50 V
    V14_50 = 0b101,
    /// ±15.25 V
    V15_25 = 0b110,
}

impl VposVnegVoltage {
    /// Decode a `VSET` code; `None` for the reserved codes 0, 1, 2 and 7
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            0b011 => Some(Self::V15_00),
            0b100 => Some(Self::V14_75),
            0b101 => Some(Self::V14_50),
            0b110 => Some(Self::V15_25),
            _ => None,
        }
    }

    /// `VSET` code
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Magnitude of the target voltage in millivolts
    pub const fn millivolts(self) -> u16 {
        match self {
            Self::V15_00 => 15_000,
            Self::V14_75 => 14_750,
            Self::V14_50 => 14_500,
            Self::V15_25 => 15_250,
        }
    }

    /// Replace `VSET` in a raw VADJ value, keeping the padding bits
    pub const fn apply(self, raw: u16) -> u16 {
        (raw & !vadj::VSET.mask) | vadj::VSET.place(self.code())
    }
}

/// Sequencing time slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Strobe {
    /// First slot
    Strobe1 = 0,
    /// Second slot
    Strobe2 = 1,
    /// Third slot
    Strobe3 = 2,
    /// Fourth slot
    Strobe4 = 3,
}

impl Strobe {
    /// Decode a 2-bit strobe code
    pub const fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0 => Self::Strobe1,
            1 => Self::Strobe2,
            2 => Self::Strobe3,
            _ => Self::Strobe4,
        }
    }

    /// 2-bit strobe code
    pub const fn bits(self) -> u16 {
        self as u16
    }
}

/// Strobe assignment of the four sequenced rails
///
/// UPSEQ0 and DWNSEQ0 share this layout. Rails on the same strobe switch
/// together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RailSequence {
    /// VDDH slot
    pub vddh: Strobe,
    /// VPOS slot
    pub vpos: Strobe,
    /// VEE slot
    pub vee: Strobe,
    /// VNEG slot
    pub vneg: Strobe,
}

impl RailSequence {
    /// UPSEQ0 reset value: VNEG, VEE, VPOS, VDDH
    pub const POWER_UP_DEFAULT: Self = Self {
        vddh: Strobe::Strobe4,
        vpos: Strobe::Strobe3,
        vee: Strobe::Strobe2,
        vneg: Strobe::Strobe1,
    };

    /// DWNSEQ0 reset value: VDDH, VPOS, VNEG, VEE
    pub const POWER_DOWN_DEFAULT: Self = Self {
        vddh: Strobe::Strobe1,
        vpos: Strobe::Strobe2,
        vee: Strobe::Strobe4,
        vneg: Strobe::Strobe3,
    };

    /// Decode from a raw UPSEQ0 or DWNSEQ0 value
    pub const fn from_raw(raw: u16) -> Self {
        Self {
            vddh: Strobe::from_bits(upseq0::VDDH_UP.decode(raw)),
            vpos: Strobe::from_bits(upseq0::VPOS_UP.decode(raw)),
            vee: Strobe::from_bits(upseq0::VEE_UP.decode(raw)),
            vneg: Strobe::from_bits(upseq0::VNEG_UP.decode(raw)),
        }
    }

    /// Encode into a raw UPSEQ0 or DWNSEQ0 value
    pub const fn to_raw(&self) -> u16 {
        upseq0::VDDH_UP.place(self.vddh.bits())
            | upseq0::VPOS_UP.place(self.vpos.bits())
            | upseq0::VEE_UP.place(self.vee.bits())
            | upseq0::VNEG_UP.place(self.vneg.bits())
    }
}

/// Power-up delay between strobes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpDelay {
    /// 3 ms
    Ms3 = 0,
    /// 6 ms
    #[default]
    Ms6 = 1,
    /// 9 ms
    Ms9 = 2,
    /// 12 ms
    Ms12 = 3,
}

impl UpDelay {
    /// Decode a 2-bit delay code
    pub const fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0 => Self::Ms3,
            1 => Self::Ms6,
            2 => Self::Ms9,
            _ => Self::Ms12,
        }
    }

    /// Delay in milliseconds
    pub const fn millis(self) -> u32 {
        (self as u32 + 1) * 3
    }
}

/// Power-up delays (UPSEQ1)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerUpDelays {
    /// VN_PG high to STROBE1
    pub strobe1: UpDelay,
    /// STROBE1 to STROBE2
    pub strobe2: UpDelay,
    /// STROBE2 to STROBE3
    pub strobe3: UpDelay,
    /// STROBE3 to STROBE4
    pub strobe4: UpDelay,
}

impl PowerUpDelays {
    /// Decode from a raw UPSEQ1 value
    pub const fn from_raw(raw: u16) -> Self {
        Self {
            strobe1: UpDelay::from_bits(upseq1::UDLY1.decode(raw)),
            strobe2: UpDelay::from_bits(upseq1::UDLY2.decode(raw)),
            strobe3: UpDelay::from_bits(upseq1::UDLY3.decode(raw)),
            strobe4: UpDelay::from_bits(upseq1::UDLY4.decode(raw)),
        }
    }

    /// Encode into a raw UPSEQ1 value
    pub const fn to_raw(&self) -> u16 {
        upseq1::UDLY1.place(self.strobe1 as u16)
            | upseq1::UDLY2.place(self.strobe2 as u16)
            | upseq1::UDLY3.place(self.strobe3 as u16)
            | upseq1::UDLY4.place(self.strobe4 as u16)
    }

    /// Time from VN_PG to the last strobe
    pub const fn total_ms(&self) -> u32 {
        self.strobe1.millis() + self.strobe2.millis() + self.strobe3.millis() + self.strobe4.millis()
    }
}

/// Power-down delay between strobes, before [`DelayFactor`] is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DownDelay {
    /// 6 ms
    Ms6 = 0,
    /// 12 ms
    Ms12 = 1,
    /// 24 ms
    Ms24 = 2,
    /// 48 ms
    Ms48 = 3,
}

impl DownDelay {
    /// Decode a 2-bit delay code
    pub const fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0 => Self::Ms6,
            1 => Self::Ms12,
            2 => Self::Ms24,
            _ => Self::Ms48,
        }
    }

    /// Delay in milliseconds
    pub const fn millis(self) -> u32 {
        6 << (self as u32)
    }
}

/// Delay from WAKEUP low to the first power-down strobe (DDLY1)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FirstDownDelay {
    /// 3 ms
    #[default]
    Ms3 = 0,
    /// 6 ms
    Ms6 = 1,
}

impl FirstDownDelay {
    /// Delay in milliseconds
    pub const fn millis(self) -> u32 {
        match self {
            Self::Ms3 => 3,
            Self::Ms6 => 6,
        }
    }
}

/// Multiplier applied to the power-down delays of strobes 2..4 (DFCTR)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DelayFactor {
    /// ×1
    #[default]
    X1 = 0,
    /// ×16
    X16 = 1,
}

impl DelayFactor {
    /// Multiplier value
    pub const fn multiplier(self) -> u32 {
        match self {
            Self::X1 => 1,
            Self::X16 => 16,
        }
    }
}

/// Power-down delays (DWNSEQ1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerDownDelays {
    /// WAKEUP low to STROBE1
    pub strobe1: FirstDownDelay,
    /// STROBE1 to STROBE2
    pub strobe2: DownDelay,
    /// STROBE2 to STROBE3
    pub strobe3: DownDelay,
    /// STROBE3 to STROBE4
    pub strobe4: DownDelay,
    /// Multiplier for `strobe2..=strobe4`
    pub factor: DelayFactor,
}

impl Default for PowerDownDelays {
    fn default() -> Self {
        Self::from_raw(0xE0)
    }
}

impl PowerDownDelays {
    /// Decode from a raw DWNSEQ1 value
    pub const fn from_raw(raw: u16) -> Self {
        Self {
            strobe1: if dwnseq1::DDLY1.is_set(raw) {
                FirstDownDelay::Ms6
            } else {
                FirstDownDelay::Ms3
            },
            strobe2: DownDelay::from_bits(dwnseq1::DDLY2.decode(raw)),
            strobe3: DownDelay::from_bits(dwnseq1::DDLY3.decode(raw)),
            strobe4: DownDelay::from_bits(dwnseq1::DDLY4.decode(raw)),
            factor: if dwnseq1::DFCTR.is_set(raw) {
                DelayFactor::X16
            } else {
                DelayFactor::X1
            },
        }
    }

    /// Encode into a raw DWNSEQ1 value
    pub const fn to_raw(&self) -> u16 {
        dwnseq1::DDLY1.place(self.strobe1 as u16)
            | dwnseq1::DDLY2.place(self.strobe2 as u16)
            | dwnseq1::DDLY3.place(self.strobe3 as u16)
            | dwnseq1::DDLY4.place(self.strobe4 as u16)
            | dwnseq1::DFCTR.place(self.factor as u16)
    }

    /// Time from WAKEUP low to the last strobe, multiplier applied
    pub const fn total_ms(&self) -> u32 {
        let scaled = self.strobe2.millis() + self.strobe3.millis() + self.strobe4.millis();
        self.strobe1.millis() + scaled * self.factor.multiplier()
    }
}

/// Power-good status of each rail (PG)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct PowerGood {
    /// Positive boost converter (DCDC1)
    pub vb: bool,
    /// VDDH charge pump
    pub vddh: bool,
    /// Inverting buck-boost (DCDC2)
    pub vn: bool,
    /// VPOS LDO
    pub vpos: bool,
    /// VEE charge pump
    pub vee: bool,
    /// VNEG LDO
    pub vneg: bool,
}

impl PowerGood {
    /// Decode from a raw PG value
    pub const fn from_raw(raw: u16) -> Self {
        Self {
            vb: pg::VB_PG.is_set(raw),
            vddh: pg::VDDH_PG.is_set(raw),
            vn: pg::VN_PG.is_set(raw),
            vpos: pg::VPOS_PG.is_set(raw),
            vee: pg::VEE_PG.is_set(raw),
            vneg: pg::VNEG_PG.is_set(raw),
        }
    }

    /// Check if every rail is in regulation
    pub const fn all_good(&self) -> bool {
        self.vb && self.vddh && self.vn && self.vpos && self.vee && self.vneg
    }
}

/// Device identification (REVID)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Revision {
    /// Major revision (`MJREV`)
    pub major: u8,
    /// Minor revision (`MNREV`)
    pub minor: u8,
    /// Version code (`VERSION`)
    pub version: u8,
}

impl Revision {
    /// Decode from a raw REVID value
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_raw(raw: u16) -> Self {
        Self {
            major: revid::MJREV.decode(raw) as u8,
            minor: revid::MNREV.decode(raw) as u8,
            version: revid::VERSION.decode(raw) as u8,
        }
    }

    /// Check the version code identifies a TPS65185
    pub const fn is_tps65185(&self) -> bool {
        self.version == VERSION_CODE
    }

    /// Datasheet name of the major revision, e.g. `TPS65185_1p1`
    pub fn major_name(&self) -> Option<&'static str> {
        revid::MJREV.name_of(u16::from(self.major))
    }
}
