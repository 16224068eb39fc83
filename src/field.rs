//! Bit-field descriptors and the generic field codec
//!
//! Every TPS65185 register is a set of named, masked slices. A [`BitFieldSpec`]
//! describes one slice: its mask, its documented reset default, how the
//! hardware treats it ([`Access`]) and, where the datasheet names them, the
//! legal encodings ([`FieldValue`]).
//!
//! Field values are always right-aligned: `decode` shifts the masked bits
//! down to bit 0 and `encode` shifts them back into place.
//!
//! ```
//! use tps65185::registers::upseq0;
//!
//! let raw = 0b11_10_01_00;
//! assert_eq!(upseq0::VPOS_UP.decode(raw), 0b10);
//!
//! let raw = upseq0::VPOS_UP.encode(raw, 0b01).unwrap();
//! assert_eq!(raw, 0b11_01_01_00);
//! ```

/// How the hardware treats a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Access {
    /// Ordinary configuration bits
    ReadWrite,
    /// Status bits set by hardware; writes have no effect
    ReadOnly,
    /// Trigger bit: writing 1 starts an operation, hardware resets it to 0
    /// once the operation completes
    SelfClearing,
    /// Documented padding; keep at its default
    Reserved,
}

/// One named encoding of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FieldValue {
    /// Symbolic name, as printed in the datasheet
    pub name: &'static str,
    /// Right-aligned raw value
    pub value: u16,
    /// Human-readable meaning (may be empty)
    pub description: &'static str,
}

impl FieldValue {
    /// Create a new named encoding
    #[must_use]
    pub const fn new(name: &'static str, value: u16, description: &'static str) -> Self {
        Self {
            name,
            value,
            description,
        }
    }
}

/// The value does not fit in the field's mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRange;

/// Descriptor of one bit-field inside a register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitFieldSpec {
    /// Field name, as printed in the datasheet
    pub name: &'static str,
    /// Mask of the field within the register
    pub mask: u16,
    /// Right-aligned reset default, `None` when the datasheet leaves it undefined
    pub default: Option<u16>,
    /// Hardware access semantics
    pub access: Access,
    /// Named encodings, empty for plain numeric fields
    pub values: &'static [FieldValue],
}

impl BitFieldSpec {
    /// Create a field without an enumeration table
    #[must_use]
    pub const fn new(name: &'static str, mask: u16, default: Option<u16>, access: Access) -> Self {
        Self {
            name,
            mask,
            default,
            access,
            values: &[],
        }
    }

    /// Attach an enumeration table
    #[must_use]
    pub const fn with_values(mut self, values: &'static [FieldValue]) -> Self {
        self.values = values;
        self
    }

    /// Position of the lowest bit of the mask
    #[must_use]
    pub const fn shift(&self) -> u32 {
        self.mask.trailing_zeros()
    }

    /// Number of bits in the field
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.mask.count_ones()
    }

    /// Largest right-aligned value the field can hold
    #[must_use]
    pub const fn max_value(&self) -> u16 {
        self.mask >> self.shift()
    }

    /// `true` if the mask is a single run of set bits
    #[must_use]
    pub const fn is_contiguous(&self) -> bool {
        let aligned = self.max_value();
        self.mask != 0 && (aligned & aligned.wrapping_add(1)) == 0
    }

    /// Reset default shifted into register position (0 if undocumented)
    #[must_use]
    pub const fn default_raw(&self) -> u16 {
        match self.default {
            Some(value) => (value << self.shift()) & self.mask,
            None => 0,
        }
    }

    /// Extract this field from a raw register value
    #[must_use]
    pub const fn decode(&self, raw: u16) -> u16 {
        (raw & self.mask) >> self.shift()
    }

    /// `true` if any bit of this field is set in `raw`
    #[must_use]
    pub const fn is_set(&self, raw: u16) -> bool {
        raw & self.mask != 0
    }

    /// Insert `value` into `raw`, leaving all other bits untouched
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `value`, shifted into position, has bits
    /// outside the mask. For split masks that includes the gaps.
    pub const fn encode(&self, raw: u16, value: u16) -> Result<u16, OutOfRange> {
        if ((value as u32) << self.shift()) & !(self.mask as u32) != 0 {
            return Err(OutOfRange);
        }
        Ok((raw & !self.mask) | self.place(value))
    }

    /// Shift `value` into register position, dropping bits beyond the field
    #[must_use]
    pub const fn place(&self, value: u16) -> u16 {
        (value << self.shift()) & self.mask
    }

    /// Set or clear a one-bit field
    #[must_use]
    pub const fn with_flag(&self, raw: u16, set: bool) -> u16 {
        if set { raw | self.mask } else { raw & !self.mask }
    }

    /// Look up the raw value of a named encoding
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<u16> {
        self.values
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value)
    }

    /// Look up the name of a raw encoding
    #[must_use]
    pub fn name_of(&self, value: u16) -> Option<&'static str> {
        self.values
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.name)
    }
}
