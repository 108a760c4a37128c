//! Decoding of the 32-bit PFNC numeric pixel format code.
//!
//! Every pixel format value packs a few descriptive fields next to its identifier.
//! These can be read without consulting the catalog at all, which is useful for
//! vendor specific (custom) formats that the catalog does not know about.
//!
//! # The Code Format
//!
//! The code is a [`u32`], bits are assigned as follows:
//!
//! - Bit 31: Custom flag. Set for vendor specific formats.
//! - Bits 24-30: Component class. `0x01` for single component, `0x02` for multiple component.
//! - Bits 16-23: Effective pixel size in bits, including any padding.
//! - Bits 0-15: Pixel ID, distinguishes formats of equal shape.
//!
//! Any other component class value makes the code malformed; [`component_class`] returns
//! [`None`] for it instead of guessing.

use bitfield::bitfield;
use derive_enum_all_values::AllValues;

/// Mask of the custom (vendor specific) flag.
pub const CUSTOM_FLAG: u32 = 0x8000_0000;

/// Mask of the component class field.
pub const COMPONENT_CLASS_MASK: u32 = 0x7F00_0000;
/// Shift of the component class field.
pub const COMPONENT_CLASS_SHIFT: u32 = 24;

/// Mask of the effective pixel size field.
pub const EFFECTIVE_SIZE_MASK: u32 = 0x00FF_0000;
/// Shift of the effective pixel size field.
pub const EFFECTIVE_SIZE_SHIFT: u32 = 16;

/// Mask of the pixel ID field.
pub const PIXEL_ID_MASK: u32 = 0x0000_FFFF;

/// Component class of a pixel format, as encoded in bits 24-30 of its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u8)]
pub enum ComponentClass {
    /// One component per pixel (mono, Bayer, single coordinate planes).
    Single = 0x01,
    /// More than one component per pixel (colour, YCbCr, multi-axis coordinates).
    Multiple = 0x02,
}

impl ComponentClass {
    /// Convert from the raw 7-bit field value.
    ///
    /// Returns [`None`] for any value other than the two defined classes.
    pub const fn from_raw(value: u32) -> Option<Self> {
        match value {
            0x01 => Some(Self::Single),
            0x02 => Some(Self::Multiple),
            _ => None,
        }
    }

    /// Convert to the raw 7-bit field value.
    pub const fn to_raw(self) -> u32 {
        self as u32
    }
}

/// Returns the effective pixel size, the number of bits a pixel occupies in memory.
///
/// This includes padding, so for many formats fewer bits are actually used.
#[inline]
pub const fn effective_pixel_size_bits(code: u32) -> u32 {
    (code & EFFECTIVE_SIZE_MASK) >> EFFECTIVE_SIZE_SHIFT
}

/// Returns `true` if the custom (vendor specific) flag is set.
#[inline]
pub const fn is_custom(code: u32) -> bool {
    (code & CUSTOM_FLAG) == CUSTOM_FLAG
}

/// Decodes the component class of a code.
///
/// Returns [`None`] if the code is malformed (matches neither class).
#[inline]
pub const fn component_class(code: u32) -> Option<ComponentClass> {
    ComponentClass::from_raw((code & COMPONENT_CLASS_MASK) >> COMPONENT_CLASS_SHIFT)
}

/// Returns `true` if the code belongs to the single component class.
///
/// A malformed code is neither single nor multiple component.
#[inline]
pub const fn is_single_component(code: u32) -> bool {
    matches!(component_class(code), Some(ComponentClass::Single))
}

/// Returns `true` if the code belongs to the multiple component class.
///
/// A malformed code is neither single nor multiple component.
#[inline]
pub const fn is_multiple_component(code: u32) -> bool {
    matches!(component_class(code), Some(ComponentClass::Multiple))
}

bitfield! {
    /// Structured view over a PFNC pixel format code.
    ///
    /// Bit layout:
    /// - Bits 0-15: Pixel ID (16 bits)
    /// - Bits 16-23: Effective pixel size in bits (8 bits)
    /// - Bits 24-30: Component class (7 bits)
    /// - Bit 31: Custom flag (1 bit)
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PixelFormatCode(u32);
    impl Debug;
    u32;

    /// Pixel ID (16 bits)
    pub pixel_id, set_pixel_id: 15, 0;
    /// Effective pixel size in bits, including padding (8 bits)
    pub effective_size_bits, set_effective_size_bits: 23, 16;
    /// Raw component class (7 bits)
    pub component_class_raw, set_component_class_raw: 30, 24;
    /// Vendor specific format flag (1 bit)
    pub custom, set_custom: 31;
}

impl PixelFormatCode {
    /// Wrap a raw numeric code.
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Compose a code from its fields. Each value is masked to the width of its field.
    pub fn compose(custom: bool, class: ComponentClass, effective_size_bits: u32, pixel_id: u32) -> Self {
        let mut code = Self::default();
        code.set_custom(custom);
        code.set_component_class_raw(class.to_raw());
        code.set_effective_size_bits(effective_size_bits);
        code.set_pixel_id(pixel_id);
        code
    }

    /// The raw numeric value.
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Decoded component class, [`None`] if the code is malformed.
    pub fn component_class(&self) -> Option<ComponentClass> {
        ComponentClass::from_raw(self.component_class_raw())
    }
}

impl From<u32> for PixelFormatCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl From<PixelFormatCode> for u32 {
    fn from(code: PixelFormatCode) -> Self {
        code.0
    }
}
