//! Register definitions for the TPS65185
//!
//! The TPS65185 exposes sixteen registers at addresses `0x00..=0x10`. All of
//! them are 8 bits wide except VCOM, which spans addresses 0x03 (VCOM1, low
//! byte) and 0x04 (VCOM2, high byte) and is transferred as one little-endian
//! 16-bit value. Address 0x04 is therefore not a register of its own.
//!
//! Each register lives in its own sub-module holding:
//! - `ADDRESS`: the register address
//! - one [`BitFieldSpec`] constant per field, named as in the datasheet
//! - `FIELDS`: all fields, most significant first
//! - `REGISTER`: the [`RegisterSpec`] tying them together
//!
//! [`REGISTER_MAP`] is the complete catalog, indexed by address.
//!
//! Reset defaults are design-time constants. They describe what the chip
//! holds after power-up, not what it holds now; read the register to learn
//! that.

use crate::field::{Access, BitFieldSpec, FieldValue};

/// Transfer width of a register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterWidth {
    /// One byte
    Bits8,
    /// Two bytes, little-endian
    Bits16,
}

impl RegisterWidth {
    /// Width in bits, as passed to the transport
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits8 => 8,
            Self::Bits16 => 16,
        }
    }

    /// Width in bytes
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Bits8 => 1,
            Self::Bits16 => 2,
        }
    }

    /// Largest raw value a register of this width can hold
    #[must_use]
    pub const fn max_value(self) -> u16 {
        match self {
            Self::Bits8 => 0x00FF,
            Self::Bits16 => 0xFFFF,
        }
    }
}

/// Descriptor of one addressable register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterSpec {
    /// Register name, as printed in the datasheet
    pub name: &'static str,
    /// Register address
    pub address: u8,
    /// Transfer width
    pub width: RegisterWidth,
    /// Short description
    pub description: &'static str,
    /// Fields, most significant first
    pub fields: &'static [BitFieldSpec],
}

impl RegisterSpec {
    /// Find a field by name
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static BitFieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// `true` if `field` is one of this register's fields
    #[must_use]
    pub fn contains(&self, field: &BitFieldSpec) -> bool {
        self.fields.iter().any(|candidate| candidate == field)
    }

    /// Power-on reset value composed from the field defaults
    ///
    /// Returns `None` when at least one field has no documented default
    /// (the temperature value and the interrupt status registers).
    #[must_use]
    pub fn default_value(&self) -> Option<u16> {
        self.fields.iter().try_fold(0u16, |raw, field| {
            field.default.map(|_| raw | field.default_raw())
        })
    }

    /// `true` if software cannot change any bit of this register
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.fields
            .iter()
            .all(|field| matches!(field.access, Access::ReadOnly | Access::Reserved))
    }

    /// Union of all self-clearing trigger bits
    ///
    /// A read-modify-write must clear these before writing back, or a
    /// trigger still in flight would be fired again.
    #[must_use]
    pub fn trigger_mask(&self) -> u16 {
        self.fields
            .iter()
            .filter(|field| field.access == Access::SelfClearing)
            .fold(0, |mask, field| mask | field.mask)
    }
}

/// Fixed catalog of all registers of the chip
#[derive(Debug, Clone, Copy)]
pub struct RegisterMap {
    registers: &'static [RegisterSpec],
}

impl RegisterMap {
    /// Build a catalog from a register table
    #[must_use]
    pub const fn new(registers: &'static [RegisterSpec]) -> Self {
        Self { registers }
    }

    /// Look up a register by address
    #[must_use]
    pub fn get(&self, address: u8) -> Option<&'static RegisterSpec> {
        self.registers.iter().find(|spec| spec.address == address)
    }

    /// Look up a register by name
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&'static RegisterSpec> {
        self.registers.iter().find(|spec| spec.name == name)
    }

    /// Iterate over all registers in address order
    pub fn iter(&self) -> core::slice::Iter<'static, RegisterSpec> {
        self.registers.iter()
    }

    /// Number of registers
    #[must_use]
    pub const fn len(&self) -> usize {
        self.registers.len()
    }

    /// `true` if the catalog holds no registers
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }
}

/// The TPS65185 register catalog
pub static REGISTER_MAP: RegisterMap = RegisterMap::new(&[
    tmst_value::REGISTER,
    enable::REGISTER,
    vadj::REGISTER,
    vcom::REGISTER,
    int_en1::REGISTER,
    int_en2::REGISTER,
    int1::REGISTER,
    int2::REGISTER,
    upseq0::REGISTER,
    upseq1::REGISTER,
    dwnseq0::REGISTER,
    dwnseq1::REGISTER,
    tmst1::REGISTER,
    tmst2::REGISTER,
    pg::REGISTER,
    revid::REGISTER,
]);

/// Register identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Thermistor value read by the ADC (0x00)
    TmstValue = 0x00,
    /// Rail enables and mode transitions (0x01)
    Enable = 0x01,
    /// VPOS/VNEG voltage adjustment (0x02)
    Vadj = 0x02,
    /// VCOM voltage, acquisition and programming (0x03-0x04)
    Vcom = 0x03,
    /// Interrupt enable group 1 (0x05)
    IntEn1 = 0x05,
    /// Interrupt enable group 2 (0x06)
    IntEn2 = 0x06,
    /// Interrupt status group 1 (0x07)
    Int1 = 0x07,
    /// Interrupt status group 2 (0x08)
    Int2 = 0x08,
    /// Power-up strobe assignment (0x09)
    UpSeq0 = 0x09,
    /// Power-up delays (0x0A)
    UpSeq1 = 0x0A,
    /// Power-down strobe assignment (0x0B)
    DwnSeq0 = 0x0B,
    /// Power-down delays (0x0C)
    DwnSeq1 = 0x0C,
    /// Thermistor control (0x0D)
    Tmst1 = 0x0D,
    /// Thermistor hot/cold thresholds (0x0E)
    Tmst2 = 0x0E,
    /// Power-good status (0x0F)
    Pg = 0x0F,
    /// Revision ID (0x10)
    RevId = 0x10,
}

impl Register {
    /// All registers in address order
    pub const ALL: [Self; 16] = [
        Self::TmstValue,
        Self::Enable,
        Self::Vadj,
        Self::Vcom,
        Self::IntEn1,
        Self::IntEn2,
        Self::Int1,
        Self::Int2,
        Self::UpSeq0,
        Self::UpSeq1,
        Self::DwnSeq0,
        Self::DwnSeq1,
        Self::Tmst1,
        Self::Tmst2,
        Self::Pg,
        Self::RevId,
    ];

    /// Register address
    #[must_use]
    pub const fn address(self) -> u8 {
        self as u8
    }

    /// Register descriptor
    #[must_use]
    pub const fn spec(self) -> &'static RegisterSpec {
        match self {
            Self::TmstValue => &tmst_value::REGISTER,
            Self::Enable => &enable::REGISTER,
            Self::Vadj => &vadj::REGISTER,
            Self::Vcom => &vcom::REGISTER,
            Self::IntEn1 => &int_en1::REGISTER,
            Self::IntEn2 => &int_en2::REGISTER,
            Self::Int1 => &int1::REGISTER,
            Self::Int2 => &int2::REGISTER,
            Self::UpSeq0 => &upseq0::REGISTER,
            Self::UpSeq1 => &upseq1::REGISTER,
            Self::DwnSeq0 => &dwnseq0::REGISTER,
            Self::DwnSeq1 => &dwnseq1::REGISTER,
            Self::Tmst1 => &tmst1::REGISTER,
            Self::Tmst2 => &tmst2::REGISTER,
            Self::Pg => &pg::REGISTER,
            Self::RevId => &revid::REGISTER,
        }
    }

    /// Register at `address`, if any
    #[must_use]
    pub const fn from_address(address: u8) -> Option<Self> {
        match address {
            0x00 => Some(Self::TmstValue),
            0x01 => Some(Self::Enable),
            0x02 => Some(Self::Vadj),
            0x03 => Some(Self::Vcom),
            0x05 => Some(Self::IntEn1),
            0x06 => Some(Self::IntEn2),
            0x07 => Some(Self::Int1),
            0x08 => Some(Self::Int2),
            0x09 => Some(Self::UpSeq0),
            0x0A => Some(Self::UpSeq1),
            0x0B => Some(Self::DwnSeq0),
            0x0C => Some(Self::DwnSeq1),
            0x0D => Some(Self::Tmst1),
            0x0E => Some(Self::Tmst2),
            0x0F => Some(Self::Pg),
            0x10 => Some(Self::RevId),
            _ => None,
        }
    }
}

const fn bit(name: &'static str, position: u32, default: u16, access: Access) -> BitFieldSpec {
    BitFieldSpec::new(name, 1 << position, Some(default), access)
}

const fn status(name: &'static str, position: u32) -> BitFieldSpec {
    BitFieldSpec::new(name, 1 << position, None, Access::ReadOnly)
}

const STROBES: &[FieldValue] = &[
    FieldValue::new("STROBE1", 0b00, ""),
    FieldValue::new("STROBE2", 0b01, ""),
    FieldValue::new("STROBE3", 0b10, ""),
    FieldValue::new("STROBE4", 0b11, ""),
];

const UP_DELAYS: &[FieldValue] = &[
    FieldValue::new("delay3ms", 0b00, "3 ms"),
    FieldValue::new("delay6ms", 0b01, "6 ms"),
    FieldValue::new("delay9ms", 0b10, "9 ms"),
    FieldValue::new("delay12ms", 0b11, "12 ms"),
];

const DOWN_DELAYS: &[FieldValue] = &[
    FieldValue::new("delay6ms", 0b00, "6 ms"),
    FieldValue::new("delay12ms", 0b01, "12 ms"),
    FieldValue::new("delay24ms", 0b10, "24 ms"),
    FieldValue::new("delay48ms", 0b11, "48 ms"),
];

/// TMST_VALUE (0x00): thermistor value read by the ADC
///
/// Signed two's-complement degrees Celsius. The ADC saturates: `0xF6` reads
/// for -10 °C and anything colder, `0x55` for 85 °C and anything hotter.
pub mod tmst_value {
    use super::*;

    /// Register address
    pub const ADDRESS: u8 = 0x00;

    /// Temperature in °C, signed 8-bit
    pub const TEMP: BitFieldSpec = BitFieldSpec::new("TEMP", 0xFF, None, Access::ReadOnly);

    /// All fields
    pub const FIELDS: &[BitFieldSpec] = &[TEMP];

    /// Register descriptor
    pub const REGISTER: RegisterSpec = RegisterSpec {
        name: "TMST_VALUE",
        address: ADDRESS,
        width: RegisterWidth::Bits8,
        description: "Thermistor value read by ADC, signed int in degrees C",
        fields: FIELDS,
    };
}

/// ENABLE (0x01): rail enables and STANDBY/ACTIVE transitions
pub mod enable {
    use super::*;

    /// Register address
    pub const ADDRESS: u8 = 0x01;

    /// STANDBY to ACTIVE transition; rails power up per UPSEQx. Self-clearing.
    pub const ACTIVE: BitFieldSpec = bit("ACTIVE", 7, 0, Access::SelfClearing);
    /// ACTIVE to STANDBY transition; rails power down per DWNSEQx. Self-clearing,
    /// takes priority over ACTIVE.
    pub const STANDBY: BitFieldSpec = bit("STANDBY", 6, 0, Access::SelfClearing);
    /// VIN3P3 to V3P3 switch enable
    pub const V3P3_EN: BitFieldSpec = bit("V3P3_EN", 5, 0, Access::ReadWrite);
    /// VCOM buffer enable
    pub const VCOM_EN: BitFieldSpec = bit("VCOM_EN", 4, 0, Access::ReadWrite);
    /// VDDH charge pump enable
    pub const VDDH_EN: BitFieldSpec = bit("VDDH_EN", 3, 0, Access::ReadWrite);
    /// VPOS LDO enable; VPOS cannot be enabled before VNEG
    pub const VPOS_EN: BitFieldSpec = bit("VPOS_EN", 2, 0, Access::ReadWrite);
    /// VEE charge pump enable
    pub const VEE_EN: BitFieldSpec = bit("VEE_EN", 1, 0, Access::ReadWrite);
    /// VNEG LDO enable; disabling VNEG also disables VPOS
    pub const VNEG_EN: BitFieldSpec = bit("VNEG_EN", 0, 0, Access::ReadWrite);

    /// All fields
    pub const FIELDS: &[BitFieldSpec] = &[
        ACTIVE, STANDBY, V3P3_EN, VCOM_EN, VDDH_EN, VPOS_EN, VEE_EN, VNEG_EN,
    ];

    /// Register descriptor
    pub const REGISTER: RegisterSpec = RegisterSpec {
        name: "ENABLE",
        address: ADDRESS,
        width: RegisterWidth::Bits8,
        description: "Enable/disable bits for regulators",
        fields: FIELDS,
    };
}

/// VADJ (0x02): VPOS/VNEG voltage adjustment
pub mod vadj {
    use super::*;

    /// Register address
    pub const ADDRESS: u8 = 0x02;

    /// Padding, reads back `0b00100`
    pub const UNUSED_0: BitFieldSpec =
        BitFieldSpec::new("unused_0", 0b1111_1000, Some(0b00100), Access::Reserved);

    /// VPOS and VNEG voltage setting
    pub const VSET: BitFieldSpec =
        BitFieldSpec::new("VSET", 0b0000_0111, Some(0b011), Access::ReadWrite).with_values(&[
            FieldValue::new("unused_0", 0b000, "not valid"),
            FieldValue::new("unused_1", 0b001, "not valid"),
            FieldValue::new("unused_2", 0b010, "not valid"),
            FieldValue::new("V15", 0b011, "15 V"),
            FieldValue::new("V14_75", 0b100, "14.75 V"),
            FieldValue::new("V14_5", 0b101, "14.5 V"),
            FieldValue::new("V15_25", 0b110, "15.25 V"),
            FieldValue::new("unused_3", 0b111, "reserved"),
        ]);

    /// All fields
    pub const FIELDS: &[BitFieldSpec] = &[UNUSED_0, VSET];

    /// Register descriptor
    pub const REGISTER: RegisterSpec = RegisterSpec {
        name: "VADJ",
        address: ADDRESS,
        width: RegisterWidth::Bits8,
        description: "VPOS/VNEG voltage adjustment",
        fields: FIELDS,
    };
}

/// VCOM (0x03-0x04): VCOM voltage setting, little-endian 16-bit
///
/// `VCOM = -10 mV * VCOM[8:0]`, from 0 mV down to -5.110 V.
pub mod vcom {
    use super::*;

    /// Register address (VCOM1, low byte)
    pub const ADDRESS: u8 = 0x03;

    /// Kick-back voltage acquisition. Writing 1 starts the measurement; the
    /// bit clears when the result is in VCOM[8:0].
    pub const ACQ: BitFieldSpec = bit("ACQ", 15, 0, Access::SelfClearing);
    /// VCOM programming. Writing 1 commits VCOM[8:0] to nonvolatile memory;
    /// the bit clears afterwards and the chip enters STANDBY.
    pub const PROG: BitFieldSpec = bit("PROG", 14, 0, Access::SelfClearing);
    /// VCOM pin hi-impedance for measurement
    pub const HIZ: BitFieldSpec = bit("HiZ", 13, 0, Access::ReadWrite);
    /// Number of acquisitions averaged into one measurement
    pub const AVG: BitFieldSpec =
        BitFieldSpec::new("AVG", 0b0001_1000_0000_0000, Some(0b00), Access::ReadWrite).with_values(
            &[
                FieldValue::new("AVG1x", 0b00, ""),
                FieldValue::new("AVG2x", 0b01, ""),
                FieldValue::new("AVG4x", 0b10, ""),
                FieldValue::new("AVG8x", 0b11, ""),
            ],
        );
    /// Padding, reads back `0b10`
    pub const UNUSED_0: BitFieldSpec =
        BitFieldSpec::new("unused_0", 0b0000_0110_0000_0000, Some(0b10), Access::Reserved);
    /// VCOM magnitude, 10 mV per step
    pub const VCOM: BitFieldSpec =
        BitFieldSpec::new("VCOM", 0b0000_0001_1111_1111, Some(0x07D), Access::ReadWrite);

    /// All fields
    pub const FIELDS: &[BitFieldSpec] = &[ACQ, PROG, HIZ, AVG, UNUSED_0, VCOM];

    /// Register descriptor
    pub const REGISTER: RegisterSpec = RegisterSpec {
        name: "VCOM",
        address: ADDRESS,
        width: RegisterWidth::Bits16,
        description: "VCOM voltage setting, byteorder little",
        fields: FIELDS,
    };
}

/// INT_EN1 (0x05): interrupt enable group 1
pub mod int_en1 {
    use super::*;

    /// Register address
    pub const ADDRESS: u8 = 0x05;

    /// Panel temperature-change interrupt enable
    pub const DTX_EN: BitFieldSpec = bit("DTX_EN", 7, 0, Access::ReadWrite);
    /// Thermal shutdown interrupt enable
    pub const TSD_EN: BitFieldSpec = bit("TSD_EN", 6, 1, Access::ReadWrite);
    /// Thermal shutdown early warning enable
    pub const HOT_EN: BitFieldSpec = bit("HOT_EN", 5, 1, Access::ReadWrite);
    /// Thermistor hot interrupt enable
    pub const TMST_HOT_EN: BitFieldSpec = bit("TMST_HOT_EN", 4, 1, Access::ReadWrite);
    /// Thermistor cold interrupt enable
    pub const TMST_COLD_EN: BitFieldSpec = bit("TMST_COLD_EN", 3, 1, Access::ReadWrite);
    /// VIN under-voltage interrupt enable
    pub const UVLO_EN: BitFieldSpec = bit("UVLO_EN", 2, 1, Access::ReadWrite);
    /// VCOM acquisition complete interrupt enable
    pub const ACQC_EN: BitFieldSpec = bit("ACQC_EN", 1, 1, Access::ReadWrite);
    /// VCOM programming complete interrupt enable
    pub const PRGC_EN: BitFieldSpec = bit("PRGC_EN", 0, 1, Access::ReadWrite);

    /// All fields
    pub const FIELDS: &[BitFieldSpec] = &[
        DTX_EN,
        TSD_EN,
        HOT_EN,
        TMST_HOT_EN,
        TMST_COLD_EN,
        UVLO_EN,
        ACQC_EN,
        PRGC_EN,
    ];

    /// Register descriptor
    pub const REGISTER: RegisterSpec = RegisterSpec {
        name: "INT_EN1",
        address: ADDRESS,
        width: RegisterWidth::Bits8,
        description: "Interrupt enable group1",
        fields: FIELDS,
    };
}

/// INT_EN2 (0x06): interrupt enable group 2
pub mod int_en2 {
    use super::*;

    /// Register address
    pub const ADDRESS: u8 = 0x06;

    /// Positive boost converter under-voltage interrupt enable
    pub const VBUVEN: BitFieldSpec = bit("VBUVEN", 7, 1, Access::ReadWrite);
    /// VDDH under-voltage interrupt enable
    pub const VDDHUVEN: BitFieldSpec = bit("VDDHUVEN", 6, 1, Access::ReadWrite);
    /// Inverting buck-boost under-voltage interrupt enable
    pub const VNUV_EN: BitFieldSpec = bit("VNUV_EN", 5, 1, Access::ReadWrite);
    /// VPOS under-voltage interrupt enable
    pub const VPOSUVEN: BitFieldSpec = bit("VPOSUVEN", 4, 1, Access::ReadWrite);
    /// VEE under-voltage interrupt enable
    pub const VEEUVEN: BitFieldSpec = bit("VEEUVEN", 3, 1, Access::ReadWrite);
    /// VCOM fault interrupt enable
    pub const VCOMFEN: BitFieldSpec = bit("VCOMFEN", 2, 1, Access::ReadWrite);
    /// VNEG under-voltage interrupt enable
    pub const VNEGUVEN: BitFieldSpec = bit("VNEGUVEN", 1, 1, Access::ReadWrite);
    /// Temperature ADC end-of-conversion interrupt enable
    pub const EOCEN: BitFieldSpec = bit("EOCEN", 0, 1, Access::ReadWrite);

    /// All fields
    pub const FIELDS: &[BitFieldSpec] = &[
        VBUVEN, VDDHUVEN, VNUV_EN, VPOSUVEN, VEEUVEN, VCOMFEN, VNEGUVEN, EOCEN,
    ];

    /// Register descriptor
    pub const REGISTER: RegisterSpec = RegisterSpec {
        name: "INT_EN2",
        address: ADDRESS,
        width: RegisterWidth::Bits8,
        description: "Interrupt enable group2",
        fields: FIELDS,
    };
}

/// INT1 (0x07): interrupt status group 1, latched by hardware
pub mod int1 {
    use super::*;

    /// Register address
    pub const ADDRESS: u8 = 0x07;

    /// Panel temperature changed by the DT threshold or more
    pub const DTX: BitFieldSpec = status("DTX", 7);
    /// Thermal shutdown
    pub const TSD: BitFieldSpec = status("TSD", 6);
    /// Thermal shutdown early warning
    pub const HOT: BitFieldSpec = status("HOT", 5);
    /// Thermistor at or above the TMST_HOT threshold
    pub const TMST_HOT: BitFieldSpec = status("TMST_HOT", 4);
    /// Thermistor at or below the TMST_COLD threshold
    pub const TMST_COLD: BitFieldSpec = status("TMST_COLD", 3);
    /// VIN below the UVLO threshold
    pub const UVLO: BitFieldSpec = status("UVLO", 2);
    /// VCOM acquisition complete
    pub const ACQC: BitFieldSpec = status("ACQC", 1);
    /// VCOM programming complete
    pub const PRGC: BitFieldSpec = status("PRGC", 0);

    /// All fields
    pub const FIELDS: &[BitFieldSpec] = &[DTX, TSD, HOT, TMST_HOT, TMST_COLD, UVLO, ACQC, PRGC];

    /// Register descriptor
    pub const REGISTER: RegisterSpec = RegisterSpec {
        name: "INT1",
        address: ADDRESS,
        width: RegisterWidth::Bits8,
        description: "Interrupt group1",
        fields: FIELDS,
    };
}

/// INT2 (0x08): interrupt status group 2, latched by hardware
pub mod int2 {
    use super::*;

    /// Register address
    pub const ADDRESS: u8 = 0x08;

    /// Positive boost converter (DCDC1) under-voltage
    pub const VB_UV: BitFieldSpec = status("VB_UV", 7);
    /// VDDH charge pump under-voltage
    pub const VDDH_UV: BitFieldSpec = status("VDDH_UV", 6);
    /// Inverting buck-boost (DCDC2) under-voltage
    pub const VN_UV: BitFieldSpec = status("VN_UV", 5);
    /// VPOS (LDO1) under-voltage
    pub const VPOS_UV: BitFieldSpec = status("VPOS_UV", 4);
    /// VEE charge pump under-voltage
    pub const VEE_UV: BitFieldSpec = status("VEE_UV", 3);
    /// VCOM outside its normal operating range
    pub const VCOMF: BitFieldSpec = status("VCOMF", 2);
    /// VNEG (LDO2) under-voltage
    pub const VNEG_UV: BitFieldSpec = status("VNEG_UV", 1);
    /// Temperature ADC end of conversion
    pub const EOC: BitFieldSpec = status("EOC", 0);

    /// All fields
    pub const FIELDS: &[BitFieldSpec] =
        &[VB_UV, VDDH_UV, VN_UV, VPOS_UV, VEE_UV, VCOMF, VNEG_UV, EOC];

    /// Register descriptor
    pub const REGISTER: RegisterSpec = RegisterSpec {
        name: "INT2",
        address: ADDRESS,
        width: RegisterWidth::Bits8,
        description: "Interrupt group2",
        fields: FIELDS,
    };
}

/// UPSEQ0 (0x09): power-up strobe assignment
pub mod upseq0 {
    use super::*;

    /// Register address
    pub const ADDRESS: u8 = 0x09;

    /// VDDH power-up strobe
    pub const VDDH_UP: BitFieldSpec =
        BitFieldSpec::new("VDDH_UP", 0b1100_0000, Some(0b11), Access::ReadWrite).with_values(STROBES);
    /// VPOS power-up strobe
    pub const VPOS_UP: BitFieldSpec =
        BitFieldSpec::new("VPOS_UP", 0b0011_0000, Some(0b10), Access::ReadWrite).with_values(STROBES);
    /// VEE power-up strobe
    pub const VEE_UP: BitFieldSpec =
        BitFieldSpec::new("VEE_UP", 0b0000_1100, Some(0b01), Access::ReadWrite).with_values(STROBES);
    /// VNEG power-up strobe
    pub const VNEG_UP: BitFieldSpec =
        BitFieldSpec::new("VNEG_UP", 0b0000_0011, Some(0b00), Access::ReadWrite).with_values(STROBES);

    /// All fields
    pub const FIELDS: &[BitFieldSpec] = &[VDDH_UP, VPOS_UP, VEE_UP, VNEG_UP];

    /// Register descriptor
    pub const REGISTER: RegisterSpec = RegisterSpec {
        name: "UPSEQ0",
        address: ADDRESS,
        width: RegisterWidth::Bits8,
        description: "Power-up strobe assignment",
        fields: FIELDS,
    };
}

/// UPSEQ1 (0x0A): power-up delays
pub mod upseq1 {
    use super::*;

    /// Register address
    pub const ADDRESS: u8 = 0x0A;

    /// Delay from STROBE3 to STROBE4
    pub const UDLY4: BitFieldSpec =
        BitFieldSpec::new("UDLY4", 0b1100_0000, Some(0b01), Access::ReadWrite).with_values(UP_DELAYS);
    /// Delay from STROBE2 to STROBE3
    pub const UDLY3: BitFieldSpec =
        BitFieldSpec::new("UDLY3", 0b0011_0000, Some(0b01), Access::ReadWrite).with_values(UP_DELAYS);
    /// Delay from STROBE1 to STROBE2
    pub const UDLY2: BitFieldSpec =
        BitFieldSpec::new("UDLY2", 0b0000_1100, Some(0b01), Access::ReadWrite).with_values(UP_DELAYS);
    /// Delay from VN_PG high to STROBE1
    pub const UDLY1: BitFieldSpec =
        BitFieldSpec::new("UDLY", 0b0000_0011, Some(0b01), Access::ReadWrite).with_values(UP_DELAYS);

    /// All fields
    pub const FIELDS: &[BitFieldSpec] = &[UDLY4, UDLY3, UDLY2, UDLY1];

    /// Register descriptor
    pub const REGISTER: RegisterSpec = RegisterSpec {
        name: "UPSEQ1",
        address: ADDRESS,
        width: RegisterWidth::Bits8,
        description: "Power-up sequence delay times",
        fields: FIELDS,
    };
}

/// DWNSEQ0 (0x0B): power-down strobe assignment
pub mod dwnseq0 {
    use super::*;

    /// Register address
    pub const ADDRESS: u8 = 0x0B;

    /// VDDH power-down strobe
    pub const VDDH_DWN: BitFieldSpec =
        BitFieldSpec::new("VDDH_DWN", 0b1100_0000, Some(0b00), Access::ReadWrite).with_values(STROBES);
    /// VPOS power-down strobe
    pub const VPOS_DWN: BitFieldSpec =
        BitFieldSpec::new("VPOS_DWN", 0b0011_0000, Some(0b01), Access::ReadWrite).with_values(STROBES);
    /// VEE power-down strobe
    pub const VEE_DWN: BitFieldSpec =
        BitFieldSpec::new("VEE_DWN", 0b0000_1100, Some(0b11), Access::ReadWrite).with_values(STROBES);
    /// VNEG power-down strobe
    pub const VNEG_DWN: BitFieldSpec =
        BitFieldSpec::new("VNEG_DWN", 0b0000_0011, Some(0b10), Access::ReadWrite).with_values(STROBES);

    /// All fields
    pub const FIELDS: &[BitFieldSpec] = &[VDDH_DWN, VPOS_DWN, VEE_DWN, VNEG_DWN];

    /// Register descriptor
    pub const REGISTER: RegisterSpec = RegisterSpec {
        name: "DWNSEQ0",
        address: ADDRESS,
        width: RegisterWidth::Bits8,
        description: "Power-down strobe assignment",
        fields: FIELDS,
    };
}

/// DWNSEQ1 (0x0C): power-down delays
///
/// DDLY2..4 are multiplied by DFCTR.
pub mod dwnseq1 {
    use super::*;

    /// Register address
    pub const ADDRESS: u8 = 0x0C;

    /// Delay from STROBE3 to STROBE4
    pub const DDLY4: BitFieldSpec =
        BitFieldSpec::new("DDLY4", 0b1100_0000, Some(0b11), Access::ReadWrite).with_values(DOWN_DELAYS);
    /// Delay from STROBE2 to STROBE3
    pub const DDLY3: BitFieldSpec =
        BitFieldSpec::new("DDLY3", 0b0011_0000, Some(0b10), Access::ReadWrite).with_values(DOWN_DELAYS);
    /// Delay from STROBE1 to STROBE2
    pub const DDLY2: BitFieldSpec =
        BitFieldSpec::new("DDLY2", 0b0000_1100, Some(0b00), Access::ReadWrite).with_values(DOWN_DELAYS);
    /// Delay from WAKEUP low to STROBE1
    pub const DDLY1: BitFieldSpec =
        BitFieldSpec::new("DDLY1", 0b0000_0010, Some(0b0), Access::ReadWrite).with_values(&[
            FieldValue::new("delay3ms", 0b0, "3 ms"),
            FieldValue::new("delay6ms", 0b1, "6 ms"),
        ]);
    /// Multiplier applied to DDLY2..4
    pub const DFCTR: BitFieldSpec =
        BitFieldSpec::new("DFCTR", 0b0000_0001, Some(0b0), Access::ReadWrite).with_values(&[
            FieldValue::new("multiply1x", 0b0, ""),
            FieldValue::new("multiply16x", 0b1, ""),
        ]);

    /// All fields
    pub const FIELDS: &[BitFieldSpec] = &[DDLY4, DDLY3, DDLY2, DDLY1, DFCTR];

    /// Register descriptor
    pub const REGISTER: RegisterSpec = RegisterSpec {
        name: "DWNSEQ1",
        address: ADDRESS,
        width: RegisterWidth::Bits8,
        description: "Power-down sequence delay times",
        fields: FIELDS,
    };
}

/// TMST1 (0x0D): thermistor configuration
pub mod tmst1 {
    use super::*;

    /// Register address
    pub const ADDRESS: u8 = 0x0D;

    /// Writing 1 starts a temperature acquisition; self-clears when done
    pub const READ_THERM: BitFieldSpec = bit("READ_THERM", 7, 0, Access::SelfClearing);
    /// Padding
    pub const UNUSED_0: BitFieldSpec = bit("unused_0", 6, 0, Access::Reserved);
    /// ADC conversion done
    pub const CONV_END: BitFieldSpec = bit("CONV_END", 5, 1, Access::ReadOnly);
    /// Padding
    pub const UNUSED_1: BitFieldSpec = bit("unused_1", 4, 0, Access::Reserved);
    /// Padding
    pub const UNUSED_2: BitFieldSpec = bit("unused_2", 3, 0, Access::Reserved);
    /// Padding
    pub const UNUSED_3: BitFieldSpec = bit("unused_3", 2, 0, Access::Reserved);
    /// Panel temperature-change interrupt threshold
    pub const DT: BitFieldSpec =
        BitFieldSpec::new("DT", 0b0000_0011, Some(0b00), Access::ReadWrite).with_values(&[
            FieldValue::new("TEMP2C", 0b00, "2 degrees C"),
            FieldValue::new("TEMP3C", 0b01, "3 degrees C"),
            FieldValue::new("TEMP4C", 0b10, "4 degrees C"),
            FieldValue::new("TEMP5C", 0b11, "5 degrees C"),
        ]);

    /// All fields
    pub const FIELDS: &[BitFieldSpec] = &[
        READ_THERM, UNUSED_0, CONV_END, UNUSED_1, UNUSED_2, UNUSED_3, DT,
    ];

    /// Register descriptor
    pub const REGISTER: RegisterSpec = RegisterSpec {
        name: "TMST1",
        address: ADDRESS,
        width: RegisterWidth::Bits8,
        description: "Thermistor configuration",
        fields: FIELDS,
    };
}

/// TMST2 (0x0E): thermistor hot/cold thresholds
pub mod tmst2 {
    use super::*;

    /// Register address
    pub const ADDRESS: u8 = 0x0E;

    /// Cold threshold, `temp = -7 °C + TMST_COLD`
    pub const TMST_COLD: BitFieldSpec =
        BitFieldSpec::new("TMST_COLD", 0b1111_0000, Some(0b0111), Access::ReadWrite);
    /// Hot threshold, `temp = 42 °C + TMST_HOT`
    pub const TMST_HOT: BitFieldSpec =
        BitFieldSpec::new("TMST_HOT", 0b0000_1111, Some(0b1000), Access::ReadWrite);

    /// All fields
    pub const FIELDS: &[BitFieldSpec] = &[TMST_COLD, TMST_HOT];

    /// Register descriptor
    pub const REGISTER: RegisterSpec = RegisterSpec {
        name: "TMST2",
        address: ADDRESS,
        width: RegisterWidth::Bits8,
        description: "Thermistor hot/cold temperature setting",
        fields: FIELDS,
    };
}

/// PG (0x0F): power-good status of each rail
pub mod pg {
    use super::*;

    /// Register address
    pub const ADDRESS: u8 = 0x0F;

    /// Positive boost converter (DCDC1) in regulation
    pub const VB_PG: BitFieldSpec = bit("VB_PG", 7, 0, Access::ReadOnly);
    /// VDDH charge pump in regulation
    pub const VDDH_PG: BitFieldSpec = bit("VDDH_PG", 6, 0, Access::ReadOnly);
    /// Inverting buck-boost (DCDC2) in regulation
    pub const VN_PG: BitFieldSpec = bit("VN_PG", 5, 0, Access::ReadOnly);
    /// VPOS (LDO1) in regulation
    pub const VPOS_PG: BitFieldSpec = bit("VPOS_PG", 4, 0, Access::ReadOnly);
    /// VEE charge pump in regulation
    pub const VEE_PG: BitFieldSpec = bit("VEE_PG", 3, 0, Access::ReadOnly);
    /// Padding
    pub const UNUSED_0: BitFieldSpec = bit("unused_0", 2, 0, Access::Reserved);
    /// VNEG (LDO2) in regulation
    pub const VNEG_PG: BitFieldSpec = bit("VNEG_PG", 1, 0, Access::ReadOnly);
    /// Padding
    pub const UNUSED_1: BitFieldSpec = bit("unused_1", 0, 0, Access::Reserved);

    /// All fields
    pub const FIELDS: &[BitFieldSpec] = &[
        VB_PG, VDDH_PG, VN_PG, VPOS_PG, VEE_PG, UNUSED_0, VNEG_PG, UNUSED_1,
    ];

    /// Register descriptor
    pub const REGISTER: RegisterSpec = RegisterSpec {
        name: "PG",
        address: ADDRESS,
        width: RegisterWidth::Bits8,
        description: "Power good status each rails",
        fields: FIELDS,
    };
}

/// REVID (0x10): device revision
pub mod revid {
    use super::*;

    /// Register address
    pub const ADDRESS: u8 = 0x10;

    /// Major revision
    pub const MJREV: BitFieldSpec =
        BitFieldSpec::new("MJREV", 0b1100_0000, Some(0b01), Access::ReadOnly).with_values(&[
            FieldValue::new("TPS65185_1p0", 0b00, ""),
            FieldValue::new("TPS65185_1p1", 0b01, ""),
            FieldValue::new("TPS65185_1p2", 0b10, ""),
        ]);
    /// Minor revision
    pub const MNREV: BitFieldSpec =
        BitFieldSpec::new("MNREV", 0b0011_0000, Some(0b00), Access::ReadOnly);
    /// Device version code
    pub const VERSION: BitFieldSpec =
        BitFieldSpec::new("VERSION", 0b0000_1111, Some(0b0101), Access::ReadOnly);

    /// All fields
    pub const FIELDS: &[BitFieldSpec] = &[MJREV, MNREV, VERSION];

    /// Register descriptor
    pub const REGISTER: RegisterSpec = RegisterSpec {
        name: "REVID",
        address: ADDRESS,
        width: RegisterWidth::Bits8,
        description: "Device revision ID information",
        fields: FIELDS,
    };
}
