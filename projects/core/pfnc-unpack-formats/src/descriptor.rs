//! The pixel format descriptor model.
//!
//! A [`PixelFormatDescriptor`] is an immutable value describing one named pixel format:
//! how many components a pixel has, how wide each component is, and how the samples
//! are stored in memory ([`DataBoundary`]).

use crate::code::{component_class, ComponentClass, PixelFormatCode};
use crate::error::FormatError;
use core::fmt;
use derive_enum_all_values::AllValues;

/// Storage element type of a sample.
///
/// Only byte aligned widths exist: 8, 16 and 32 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum StorageKind {
    /// Signed 8-bit integer.
    Int8,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// IEEE 754 single precision float.
    Float32,
}

impl StorageKind {
    /// Width of one element in bits.
    pub const fn width_bits(self) -> u32 {
        match self {
            Self::Int8 | Self::Uint8 => 8,
            Self::Uint16 => 16,
            Self::Uint32 | Self::Float32 => 32,
        }
    }

    /// Width of one element in bytes.
    pub const fn size_bytes(self) -> usize {
        (self.width_bits() / 8) as usize
    }

    /// Whether the element type is a signed integer.
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::Int8)
    }

    /// Whether the element type is floating point.
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32)
    }

    /// Short lowercase name, e.g. `uint16`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Float32 => "float32",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Storage element types before (`unpacked`) and after (`packed`) bit packing.
///
/// The packed kind governs how raw bytes are grouped; the unpacked kind is the
/// element type handed to consumers. A format is packed iff the two differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataBoundary {
    unpacked: StorageKind,
    packed: StorageKind,
}

impl DataBoundary {
    /// Creates a boundary with distinct unpacked and packed storage.
    pub const fn new(unpacked: StorageKind, packed: StorageKind) -> Self {
        Self { unpacked, packed }
    }

    /// Creates a boundary for a format that is stored as-is.
    pub const fn unpacked_only(kind: StorageKind) -> Self {
        Self {
            unpacked: kind,
            packed: kind,
        }
    }

    /// Element type after unpacking.
    pub const fn unpacked(&self) -> StorageKind {
        self.unpacked
    }

    /// Element type of the raw, packed stream.
    pub const fn packed(&self) -> StorageKind {
        self.packed
    }

    /// Width of the unpacked element in bits.
    pub const fn unpacked_width_bits(&self) -> u32 {
        self.unpacked.width_bits()
    }

    /// Width of the packed element in bits.
    pub const fn packed_width_bits(&self) -> u32 {
        self.packed.width_bits()
    }

    /// Size of the unpacked element in bytes.
    pub const fn unpacked_size_bytes(&self) -> usize {
        self.unpacked.size_bytes()
    }

    /// Size of the packed element in bytes.
    pub const fn packed_size_bytes(&self) -> usize {
        self.packed.size_bytes()
    }

    /// Whether bit packing is applied, i.e. the storage kinds differ.
    pub const fn is_packed(&self) -> bool {
        !matches!(
            (self.unpacked, self.packed),
            (StorageKind::Int8, StorageKind::Int8)
                | (StorageKind::Uint8, StorageKind::Uint8)
                | (StorageKind::Uint16, StorageKind::Uint16)
                | (StorageKind::Uint32, StorageKind::Uint32)
                | (StorageKind::Float32, StorageKind::Float32)
        )
    }
}

/// Number of samples per pixel, following the PFNC component accounting.
///
/// Sub-sampled families (Bayer, 4:1:1 chroma) are accounted with shared samples across a
/// block of pixels, which the convention expresses as a fractional count such as `1.5`.
/// That count is kept as a ratio so no consumer has to deal with non-integral arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentCount {
    /// A whole number of components per pixel.
    Whole(u32),
    /// `samples_per_block` samples shared across `block_pixels` pixels.
    SharedComponent {
        /// Samples accounted per block.
        samples_per_block: u32,
        /// Pixels in one block.
        block_pixels: u32,
    },
}

impl ComponentCount {
    /// The count as a `(numerator, denominator)` pair.
    pub const fn as_ratio(&self) -> (u32, u32) {
        match *self {
            Self::Whole(count) => (count, 1),
            Self::SharedComponent {
                samples_per_block,
                block_pixels,
            } => (samples_per_block, block_pixels),
        }
    }

    /// Whether this is a shared (fractional) count.
    pub const fn is_shared(&self) -> bool {
        matches!(self, Self::SharedComponent { .. })
    }

    /// Logical bits per pixel for components of `bits_per_component` bits.
    ///
    /// Returns [`None`] if the result is not a whole number of bits or overflows.
    pub const fn logical_bits(&self, bits_per_component: u32) -> Option<u32> {
        let (num, den) = self.as_ratio();
        if den == 0 {
            return None;
        }
        match num.checked_mul(bits_per_component) {
            Some(total) if total % den == 0 => Some(total / den),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Whole(count) => write!(f, "{count}"),
            Self::SharedComponent {
                samples_per_block,
                block_pixels,
            } => write!(f, "{samples_per_block}/{block_pixels}"),
        }
    }
}

/// Stored samples per pixel as a ratio, e.g. `3/2` for 4:1:1 chroma sub-sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplesPerPixel {
    /// Samples per block.
    pub samples: u32,
    /// Pixels per block.
    pub pixels: u32,
}

impl SamplesPerPixel {
    /// Number of stored samples for `pixel_count` pixels.
    ///
    /// Returns [`None`] on overflow or if `pixel_count` does not cover whole blocks.
    pub const fn samples_for(&self, pixel_count: usize) -> Option<usize> {
        let pixels = self.pixels as usize;
        if pixels == 0 || pixel_count % pixels != 0 {
            return None;
        }
        (pixel_count / pixels).checked_mul(self.samples as usize)
    }
}

/// Arrangement of components within a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum ComponentLayout {
    /// A single component (mono, single colour plane, single coordinate axis, confidence).
    Mono,
    /// Three full resolution components (RGB, BGR, Coord3D ABC).
    Lmn444,
    /// Luma with horizontally half resolution chroma (YUV/YCbCr 4:2:2).
    Lmn422,
    /// Luma with quarter resolution chroma (YUV/YCbCr 4:1:1).
    Lmn411,
    /// Four full resolution components (RGBa, BGRa).
    Lmno4444,
    /// Two full resolution components (Coord3D AC).
    Lm44,
    /// Single channel sensor data behind a 2x2 colour filter array.
    Bayer,
}

impl ComponentLayout {
    /// Stored samples per pixel in memory.
    ///
    /// This is the count the codec works with, and differs from the legacy
    /// [`ComponentCount`] for the Bayer family.
    pub const fn samples_per_pixel(self) -> SamplesPerPixel {
        let (samples, pixels) = match self {
            Self::Mono | Self::Bayer => (1, 1),
            Self::Lm44 | Self::Lmn422 => (2, 1),
            Self::Lmn444 => (3, 1),
            Self::Lmn411 => (3, 2),
            Self::Lmno4444 => (4, 1),
        };
        SamplesPerPixel { samples, pixels }
    }

    /// The component class a code of this layout must carry.
    pub const fn component_class(self) -> ComponentClass {
        match self {
            Self::Mono | Self::Bayer => ComponentClass::Single,
            _ => ComponentClass::Multiple,
        }
    }

    /// Short lowercase name, e.g. `lmn444`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mono => "mono",
            Self::Lmn444 => "lmn444",
            Self::Lmn422 => "lmn422",
            Self::Lmn411 => "lmn411",
            Self::Lmno4444 => "lmno4444",
            Self::Lm44 => "lm44",
            Self::Bayer => "bayer",
        }
    }
}

impl fmt::Display for ComponentLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Order of colour channels for RGB style formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum ChannelOrder {
    /// Red, green, blue.
    Rgb,
    /// Blue, green, red.
    Bgr,
    /// Red, green, blue, alpha.
    Rgba,
    /// Blue, green, red, alpha.
    Bgra,
}

/// Immutable description of one named pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelFormatDescriptor {
    symbolic: &'static str,
    code: u32,
    layout: ComponentLayout,
    components: ComponentCount,
    bits_per_component: u32,
    is_signed: bool,
    storage: DataBoundary,
    planar: bool,
    channel_order: Option<ChannelOrder>,
}

impl PixelFormatDescriptor {
    /// Describes an unsigned, interleaved format without a channel order.
    ///
    /// Use [`signed`](Self::signed), [`planar`](Self::planar) and
    /// [`with_channel_order`](Self::with_channel_order) to refine it, and
    /// [`validate`](Self::validate) to check a hand-built descriptor.
    pub const fn new(
        symbolic: &'static str,
        code: u32,
        layout: ComponentLayout,
        components: ComponentCount,
        bits_per_component: u32,
        storage: DataBoundary,
    ) -> Self {
        Self {
            symbolic,
            code,
            layout,
            components,
            bits_per_component,
            is_signed: false,
            storage,
            planar: false,
            channel_order: None,
        }
    }

    /// Marks samples as signed.
    pub const fn signed(mut self) -> Self {
        self.is_signed = true;
        self
    }

    /// Marks components as stored in separate planes.
    pub const fn planar(mut self) -> Self {
        self.planar = true;
        self
    }

    /// Sets the colour channel order.
    pub const fn with_channel_order(mut self, order: ChannelOrder) -> Self {
        self.channel_order = Some(order);
        self
    }

    /// Unique external name, e.g. `Mono10p`.
    pub const fn symbolic(&self) -> &'static str {
        self.symbolic
    }

    /// Numeric PFNC code.
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// Structured view of the numeric code.
    pub const fn pfnc_code(&self) -> PixelFormatCode {
        PixelFormatCode::new(self.code)
    }

    /// Component arrangement.
    pub const fn layout(&self) -> ComponentLayout {
        self.layout
    }

    /// Components per pixel (legacy PFNC accounting).
    pub const fn component_count(&self) -> ComponentCount {
        self.components
    }

    /// Bit width of one logical sample, before padding.
    pub const fn bits_per_component(&self) -> u32 {
        self.bits_per_component
    }

    /// Whether samples are signed.
    pub const fn is_signed(&self) -> bool {
        self.is_signed
    }

    /// Storage element types.
    pub const fn storage(&self) -> DataBoundary {
        self.storage
    }

    /// Colour channel order, for the RGB/BGR families.
    pub const fn channel_order(&self) -> Option<ChannelOrder> {
        self.channel_order
    }

    /// Whether bit packing is applied to the stored samples.
    pub const fn is_packed(&self) -> bool {
        self.storage.is_packed()
    }

    /// Whether the format has a single component per pixel.
    pub const fn is_mono(&self) -> bool {
        matches!(self.layout, ComponentLayout::Mono)
    }

    /// Whether components are stored in separate planes.
    pub const fn is_planar(&self) -> bool {
        self.planar
    }

    /// Whether several samples per pixel are stored next to each other.
    pub const fn is_interleaved(&self) -> bool {
        let spp = self.layout.samples_per_pixel();
        !self.planar && spp.samples > spp.pixels
    }

    /// Stored samples per pixel in memory.
    pub const fn samples_per_pixel(&self) -> SamplesPerPixel {
        self.layout.samples_per_pixel()
    }

    /// Logical (unpadded) bits per pixel, `component_count * bits_per_component`.
    pub const fn logical_bit_depth(&self) -> u32 {
        match self.components.logical_bits(self.bits_per_component) {
            Some(bits) => bits,
            None => 0,
        }
    }

    /// Bits a pixel occupies in memory including padding, as declared by the code.
    pub const fn effective_pixel_size_bits(&self) -> u32 {
        crate::code::effective_pixel_size_bits(self.code)
    }

    /// Checks the descriptor's invariants.
    ///
    /// # Errors
    ///
    /// - [`FormatError::InvalidStorage`] if the unpacked element is narrower than the packed one
    /// - [`FormatError::MalformedCode`] if the code has no valid component class
    /// - [`FormatError::InconsistentComponents`] if the code's class disagrees with the layout,
    ///   the logical bit depth is not whole, a sample does not fit its unpacked element, or
    ///   a planar format uses a sub-sampled layout
    pub const fn validate(&self) -> Result<(), FormatError> {
        let unpacked_bits = self.storage.unpacked_width_bits();
        let packed_bits = self.storage.packed_width_bits();
        if unpacked_bits < packed_bits {
            return Err(FormatError::InvalidStorage {
                symbolic: self.symbolic,
                unpacked_bits,
                packed_bits,
            });
        }

        let class = match component_class(self.code) {
            Some(class) => class,
            None => return Err(FormatError::MalformedCode(self.code)),
        };

        let inconsistent = FormatError::InconsistentComponents {
            symbolic: self.symbolic,
        };
        if class as u8 != self.layout.component_class() as u8 {
            return Err(inconsistent);
        }
        if self.bits_per_component == 0 || self.bits_per_component > unpacked_bits {
            return Err(inconsistent);
        }
        if self.components.logical_bits(self.bits_per_component).is_none() {
            return Err(inconsistent);
        }
        // Every plane holds one sample per pixel.
        if self.planar && self.layout.samples_per_pixel().pixels != 1 {
            return Err(inconsistent);
        }
        Ok(())
    }
}

impl fmt::Display for PixelFormatDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#010x})", self.symbolic, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    const MONO10P: PixelFormatDescriptor = PixelFormatDescriptor::new(
        "Mono10p",
        0x010A_0046,
        ComponentLayout::Mono,
        ComponentCount::Whole(1),
        10,
        DataBoundary::new(StorageKind::Uint16, StorageKind::Uint8),
    );

    #[rstest]
    #[case(StorageKind::Int8, 8, 1)]
    #[case(StorageKind::Uint8, 8, 1)]
    #[case(StorageKind::Uint16, 16, 2)]
    #[case(StorageKind::Uint32, 32, 4)]
    #[case(StorageKind::Float32, 32, 4)]
    fn storage_kind_widths(#[case] kind: StorageKind, #[case] bits: u32, #[case] bytes: usize) {
        assert_eq!(kind.width_bits(), bits);
        assert_eq!(kind.size_bytes(), bytes);
    }

    #[test]
    fn storage_kind_widths_are_byte_aligned() {
        for kind in StorageKind::all_values() {
            assert!(matches!(kind.width_bits(), 8 | 16 | 32), "{kind}");
        }
    }

    #[test]
    fn boundary_is_packed_iff_kinds_differ() {
        for unpacked in StorageKind::all_values() {
            for packed in StorageKind::all_values() {
                let boundary = DataBoundary::new(*unpacked, *packed);
                assert_eq!(boundary.is_packed(), unpacked != packed);
            }
        }
    }

    #[rstest]
    #[case(ComponentCount::Whole(1), 8, Some(8))]
    #[case(ComponentCount::Whole(3), 10, Some(30))]
    #[case(ComponentCount::SharedComponent { samples_per_block: 6, block_pixels: 4 }, 8, Some(12))]
    #[case(ComponentCount::SharedComponent { samples_per_block: 6, block_pixels: 4 }, 10, Some(15))]
    #[case(ComponentCount::SharedComponent { samples_per_block: 6, block_pixels: 4 }, 1, None)]
    #[case(ComponentCount::SharedComponent { samples_per_block: u32::MAX, block_pixels: 1 }, 16, None)]
    #[case(ComponentCount::SharedComponent { samples_per_block: 6, block_pixels: 0 }, 8, None)]
    #[case(ComponentCount::Whole(u32::MAX), 1, Some(u32::MAX))]
    fn logical_bits(#[case] count: ComponentCount, #[case] bits: u32, #[case] expected: Option<u32>) {
        assert_eq!(count.logical_bits(bits), expected);
    }

    #[rstest]
    #[case(ComponentLayout::Mono, 16, Some(16))]
    #[case(ComponentLayout::Lmn444, 16, Some(48))]
    #[case(ComponentLayout::Lmn411, 4, Some(6))]
    #[case(ComponentLayout::Lmn411, 3, None)]
    fn samples_for_pixels(#[case] layout: ComponentLayout, #[case] pixels: usize, #[case] expected: Option<usize>) {
        assert_eq!(layout.samples_per_pixel().samples_for(pixels), expected);
    }

    #[test]
    fn valid_descriptor_passes_validation() {
        assert_eq!(MONO10P.validate(), Ok(()));
        assert!(MONO10P.is_packed());
        assert!(MONO10P.is_mono());
        assert!(!MONO10P.is_interleaved());
        assert_eq!(MONO10P.logical_bit_depth(), 10);
        assert_eq!(MONO10P.effective_pixel_size_bits(), 10);
    }

    #[test]
    fn narrower_unpacked_storage_is_rejected() {
        let descriptor = PixelFormatDescriptor::new(
            "Broken",
            0x0110_0001,
            ComponentLayout::Mono,
            ComponentCount::Whole(1),
            8,
            DataBoundary::new(StorageKind::Uint8, StorageKind::Uint16),
        );
        assert_eq!(
            descriptor.validate(),
            Err(FormatError::InvalidStorage {
                symbolic: "Broken",
                unpacked_bits: 8,
                packed_bits: 16,
            })
        );
    }

    #[test]
    fn malformed_code_is_rejected() {
        let descriptor = PixelFormatDescriptor::new(
            "Broken",
            0x0308_0001,
            ComponentLayout::Mono,
            ComponentCount::Whole(1),
            8,
            DataBoundary::unpacked_only(StorageKind::Uint8),
        );
        assert_eq!(descriptor.validate(), Err(FormatError::MalformedCode(0x0308_0001)));
    }

    #[rstest]
    // Multiple component code on a mono layout.
    #[case(0x0208_0001, ComponentLayout::Mono, 8)]
    // Sample wider than its storage element.
    #[case(0x0108_0001, ComponentLayout::Mono, 10)]
    // Zero width samples.
    #[case(0x0108_0001, ComponentLayout::Mono, 0)]
    fn inconsistent_descriptor_is_rejected(#[case] code: u32, #[case] layout: ComponentLayout, #[case] bits: u32) {
        let descriptor = PixelFormatDescriptor::new(
            "Broken",
            code,
            layout,
            ComponentCount::Whole(1),
            bits,
            DataBoundary::unpacked_only(StorageKind::Uint8),
        );
        assert_eq!(
            descriptor.validate(),
            Err(FormatError::InconsistentComponents { symbolic: "Broken" })
        );
    }

    #[rstest]
    #[case(ComponentCount::SharedComponent { samples_per_block: u32::MAX, block_pixels: 1 })]
    #[case(ComponentCount::SharedComponent { samples_per_block: 6, block_pixels: 0 })]
    #[case(ComponentCount::Whole(u32::MAX))]
    fn oversized_component_count_is_rejected(#[case] components: ComponentCount) {
        let vendor = PixelFormatDescriptor::new(
            "VendorMono",
            0x8110_0001,
            ComponentLayout::Mono,
            components,
            16,
            DataBoundary::unpacked_only(StorageKind::Uint16),
        );
        assert_eq!(
            vendor.validate(),
            Err(FormatError::InconsistentComponents { symbolic: "VendorMono" })
        );
        assert_eq!(vendor.logical_bit_depth(), 0);
    }

    #[test]
    fn planar_sub_sampled_layout_is_rejected() {
        let ycbcr411 = PixelFormatDescriptor::new(
            "VendorYCbCr411_8_Planar",
            0x820C_0001,
            ComponentLayout::Lmn411,
            ComponentCount::SharedComponent {
                samples_per_block: 6,
                block_pixels: 4,
            },
            8,
            DataBoundary::unpacked_only(StorageKind::Uint8),
        );
        assert_eq!(ycbcr411.validate(), Ok(()));
        assert_eq!(
            ycbcr411.planar().validate(),
            Err(FormatError::InconsistentComponents {
                symbolic: "VendorYCbCr411_8_Planar"
            })
        );
    }

    #[test]
    fn builder_methods_set_flags() {
        let descriptor = MONO10P.signed().planar().with_channel_order(ChannelOrder::Bgr);
        assert!(descriptor.is_signed());
        assert!(descriptor.is_planar());
        assert_eq!(descriptor.channel_order(), Some(ChannelOrder::Bgr));
    }

    #[test]
    fn interleaved_requires_multiple_samples_and_no_planes() {
        let rgb = PixelFormatDescriptor::new(
            "RGB8",
            0x0218_0014,
            ComponentLayout::Lmn444,
            ComponentCount::Whole(3),
            8,
            DataBoundary::unpacked_only(StorageKind::Uint8),
        );
        assert!(rgb.is_interleaved());
        assert!(!rgb.planar().is_interleaved());
    }
}
