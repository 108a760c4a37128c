//! The built-in catalog of named pixel formats.
//!
//! One row per format. The table is checked for consistency while compiling (see
//! [`crate::registry`]), so a bad row fails the build instead of a lookup.

use crate::descriptor::{
    ChannelOrder, ComponentCount, ComponentLayout, DataBoundary, PixelFormatDescriptor, StorageKind,
};

const I8: DataBoundary = DataBoundary::unpacked_only(StorageKind::Int8);
const U8: DataBoundary = DataBoundary::unpacked_only(StorageKind::Uint8);
const U16: DataBoundary = DataBoundary::unpacked_only(StorageKind::Uint16);
const F32: DataBoundary = DataBoundary::unpacked_only(StorageKind::Float32);
/// Bit packed stream of bytes, unpacked into 16-bit elements.
const PACKED: DataBoundary = DataBoundary::new(StorageKind::Uint16, StorageKind::Uint8);

/// Bayer and 4:1:1 formats account 1.5 samples per pixel.
const SHARED: ComponentCount = ComponentCount::SharedComponent {
    samples_per_block: 6,
    block_pixels: 4,
};

const fn mono(symbolic: &'static str, code: u32, bits: u32, storage: DataBoundary) -> PixelFormatDescriptor {
    PixelFormatDescriptor::new(symbolic, code, ComponentLayout::Mono, ComponentCount::Whole(1), bits, storage)
}

const fn bayer(symbolic: &'static str, code: u32, bits: u32, storage: DataBoundary) -> PixelFormatDescriptor {
    PixelFormatDescriptor::new(symbolic, code, ComponentLayout::Bayer, SHARED, bits, storage)
}

const fn lmn444(symbolic: &'static str, code: u32, bits: u32, storage: DataBoundary) -> PixelFormatDescriptor {
    PixelFormatDescriptor::new(symbolic, code, ComponentLayout::Lmn444, ComponentCount::Whole(3), bits, storage)
}

const fn lmn422(symbolic: &'static str, code: u32, bits: u32, storage: DataBoundary) -> PixelFormatDescriptor {
    PixelFormatDescriptor::new(symbolic, code, ComponentLayout::Lmn422, ComponentCount::Whole(2), bits, storage)
}

const fn lmn411(symbolic: &'static str, code: u32, bits: u32, storage: DataBoundary) -> PixelFormatDescriptor {
    PixelFormatDescriptor::new(symbolic, code, ComponentLayout::Lmn411, SHARED, bits, storage)
}

const fn lmno4444(symbolic: &'static str, code: u32, bits: u32, storage: DataBoundary) -> PixelFormatDescriptor {
    PixelFormatDescriptor::new(symbolic, code, ComponentLayout::Lmno4444, ComponentCount::Whole(4), bits, storage)
}

const fn lm44(symbolic: &'static str, code: u32, bits: u32, storage: DataBoundary) -> PixelFormatDescriptor {
    PixelFormatDescriptor::new(symbolic, code, ComponentLayout::Lm44, ComponentCount::Whole(2), bits, storage)
}

const fn rgb(symbolic: &'static str, code: u32, bits: u32, storage: DataBoundary) -> PixelFormatDescriptor {
    lmn444(symbolic, code, bits, storage).with_channel_order(ChannelOrder::Rgb)
}

const fn bgr(symbolic: &'static str, code: u32, bits: u32, storage: DataBoundary) -> PixelFormatDescriptor {
    lmn444(symbolic, code, bits, storage).with_channel_order(ChannelOrder::Bgr)
}

const fn rgba(symbolic: &'static str, code: u32, bits: u32, storage: DataBoundary) -> PixelFormatDescriptor {
    lmno4444(symbolic, code, bits, storage).with_channel_order(ChannelOrder::Rgba)
}

const fn bgra(symbolic: &'static str, code: u32, bits: u32, storage: DataBoundary) -> PixelFormatDescriptor {
    lmno4444(symbolic, code, bits, storage).with_channel_order(ChannelOrder::Bgra)
}

/// Every pixel format known to the standard registry.
#[rustfmt::skip]
pub const CATALOG: &[PixelFormatDescriptor] = &[
    // Mono
    mono("Mono8", 0x0108_0001, 8, U8),
    mono("Mono8s", 0x0108_0002, 8, I8).signed(),
    mono("Mono10", 0x0110_0003, 10, U16),
    mono("Mono12", 0x0110_0005, 12, U16),
    mono("Mono14", 0x0110_0025, 14, U16),
    mono("Mono16", 0x0110_0007, 16, U16),
    mono("Mono10p", 0x010A_0046, 10, PACKED),
    mono("Mono10Packed", 0x010C_0004, 10, PACKED),
    mono("Mono12p", 0x010C_0047, 12, PACKED),
    mono("Mono12Packed", 0x010C_0006, 12, PACKED),

    // Single colour planes
    mono("R8", 0x0108_00C9, 8, U8),
    mono("R10", 0x0110_00CA, 10, U16),
    mono("R12", 0x0110_00CB, 12, U16),
    mono("R16", 0x0110_00CC, 16, U16),
    mono("G8", 0x0108_00CD, 8, U8),
    mono("G10", 0x0110_00CE, 10, U16),
    mono("G12", 0x0110_00CF, 12, U16),
    mono("G16", 0x0110_00D0, 16, U16),
    mono("B8", 0x0108_00D1, 8, U8),
    mono("B10", 0x0110_00D2, 10, U16),
    mono("B12", 0x0110_00D3, 12, U16),
    mono("B16", 0x0110_00D4, 16, U16),

    // Single coordinate axis
    mono("Coord3D_A8", 0x0108_00AF, 8, U8),
    mono("Coord3D_B8", 0x0108_00B0, 8, U8),
    mono("Coord3D_C8", 0x0108_00B1, 8, U8),
    mono("Coord3D_A16", 0x0110_00B6, 16, U16),
    mono("Coord3D_B16", 0x0110_00B7, 16, U16),
    mono("Coord3D_C16", 0x0110_00B8, 16, U16),
    mono("Coord3D_A32f", 0x0120_00BD, 32, F32),
    mono("Coord3D_B32f", 0x0120_00BE, 32, F32),
    mono("Coord3D_C32f", 0x0120_00BF, 32, F32),
    mono("Coord3D_A10p", 0x010A_00D5, 10, PACKED),
    mono("Coord3D_B10p", 0x010A_00D6, 10, PACKED),
    mono("Coord3D_C10p", 0x010A_00D7, 10, PACKED),
    mono("Coord3D_A12p", 0x010C_00D8, 12, PACKED),
    mono("Coord3D_B12p", 0x010C_00D9, 12, PACKED),
    mono("Coord3D_C12p", 0x010C_00DA, 12, PACKED),

    // Confidence
    mono("Confidence1", 0x0108_00C4, 1, U8),
    mono("Confidence8", 0x0108_00C6, 8, U8),
    mono("Confidence16", 0x0110_00C7, 16, U16),
    mono("Confidence32f", 0x0120_00C8, 32, F32),

    // RGB / BGR
    rgb("RGB8", 0x0218_0014, 8, U8),
    rgb("RGB10", 0x0230_0018, 10, U16),
    rgb("RGB12", 0x0230_001A, 12, U16),
    rgb("RGB14", 0x0230_005E, 14, U16),
    rgb("RGB16", 0x0230_0033, 16, U16),
    bgr("BGR8", 0x0218_0015, 8, U8),
    bgr("BGR10", 0x0230_0019, 10, U16),
    bgr("BGR12", 0x0230_001B, 12, U16),
    bgr("BGR14", 0x0230_004A, 14, U16),
    bgr("BGR16", 0x0230_004B, 16, U16),

    // Three coordinate axes
    lmn444("Coord3D_ABC8", 0x0218_00B2, 8, U8),
    lmn444("Coord3D_ABC8_Planar", 0x0218_00B3, 8, U8).planar(),
    lmn444("Coord3D_ABC16", 0x0230_00B9, 16, U16),
    lmn444("Coord3D_ABC16_Planar", 0x0230_00BA, 16, U16).planar(),
    lmn444("Coord3D_ABC32f", 0x0260_00C0, 32, F32),
    lmn444("Coord3D_ABC32f_Planar", 0x0260_00C1, 32, F32).planar(),
    lmn444("Coord3D_ABC10p", 0x021E_00DB, 10, PACKED),
    lmn444("Coord3D_ABC10p_Planar", 0x021E_00DC, 10, PACKED).planar(),
    lmn444("Coord3D_ABC12p", 0x0224_00DE, 12, PACKED),
    lmn444("Coord3D_ABC12p_Planar", 0x0224_00DF, 12, PACKED).planar(),

    // RGBa / BGRa
    rgba("RGBa8", 0x0220_0016, 8, U8),
    rgba("RGBa10", 0x0240_005F, 10, U16),
    rgba("RGBa12", 0x0240_0061, 12, U16),
    rgba("RGBa14", 0x0240_0063, 14, U16),
    rgba("RGBa16", 0x0240_0064, 16, U16),
    rgba("RGBa10p", 0x0228_0060, 10, PACKED),
    rgba("RGBa12p", 0x0230_0062, 12, PACKED),
    bgra("BGRa8", 0x0220_0017, 8, U8),
    bgra("BGRa10", 0x0240_004C, 10, U16),
    bgra("BGRa12", 0x0240_004E, 12, U16),
    bgra("BGRa14", 0x0240_0050, 14, U16),
    bgra("BGRa16", 0x0240_0051, 16, U16),
    bgra("BGRa10p", 0x0228_004D, 10, PACKED),
    bgra("BGRa12p", 0x0230_004F, 12, PACKED),

    // Two coordinate axes
    lm44("Coord3D_AC8", 0x0210_00B4, 8, U8),
    lm44("Coord3D_AC8_Planar", 0x0210_00B5, 8, U8).planar(),
    lm44("Coord3D_AC16", 0x0220_00BB, 16, U16),
    lm44("Coord3D_AC16_Planar", 0x0220_00BC, 16, U16).planar(),
    lm44("Coord3D_AC32f", 0x0240_00C2, 32, F32),
    lm44("Coord3D_AC32f_Planar", 0x0240_00C3, 32, F32).planar(),
    lm44("Coord3D_AC10p", 0x0214_00F0, 10, PACKED),
    lm44("Coord3D_AC10p_Planar", 0x0214_00F1, 10, PACKED).planar(),
    lm44("Coord3D_AC12p", 0x0218_00F2, 12, PACKED),
    lm44("Coord3D_AC12p_Planar", 0x0218_00F3, 12, PACKED).planar(),

    // YUV / YCbCr 4:2:2
    lmn422("YUV422_8", 0x0210_0032, 8, U8),
    lmn422("YUV422_8_UYVY", 0x0210_001F, 8, U8),
    lmn422("YCbCr422_8", 0x0210_003B, 8, U8),
    lmn422("YCbCr601_422_8", 0x0210_003E, 8, U8),
    lmn422("YCbCr709_422_8", 0x0210_0041, 8, U8),
    lmn422("YCbCr422_8_CbYCrY", 0x0210_0043, 8, U8),
    lmn422("YCbCr601_422_8_CbYCrY", 0x0210_0044, 8, U8),
    lmn422("YCbCr709_422_8_CbYCrY", 0x0210_0045, 8, U8),
    lmn422("YCbCr422_10", 0x0220_0065, 10, U16),
    lmn422("YCbCr422_12", 0x0220_0066, 12, U16),
    lmn422("YCbCr601_422_10", 0x0220_0067, 10, U16),
    lmn422("YCbCr601_422_12", 0x0220_0068, 12, U16),
    lmn422("YCbCr709_422_10", 0x0220_0069, 10, U16),
    lmn422("YCbCr709_422_12", 0x0220_006A, 12, U16),
    lmn422("YCbCr422_10_CbYCrY", 0x0220_006B, 10, U16),
    lmn422("YCbCr422_12_CbYCrY", 0x0220_006C, 12, U16),
    lmn422("YCbCr601_422_10_CbYCrY", 0x0220_006D, 10, U16),
    lmn422("YCbCr601_422_12_CbYCrY", 0x0220_006E, 12, U16),
    lmn422("YCbCr709_422_10_CbYCrY", 0x0220_006F, 10, U16),
    lmn422("YCbCr709_422_12_CbYCrY", 0x0220_0070, 12, U16),
    lmn422("YCbCr422_10p", 0x0214_0087, 10, PACKED),
    lmn422("YCbCr422_12p", 0x0218_0088, 12, PACKED),
    lmn422("YCbCr601_422_10p", 0x0214_0089, 10, PACKED),
    lmn422("YCbCr601_422_12p", 0x0218_008A, 12, PACKED),
    lmn422("YCbCr709_422_10p", 0x0214_008B, 10, PACKED),
    lmn422("YCbCr709_422_12p", 0x0218_008C, 12, PACKED),
    lmn422("YCbCr422_10p_CbYCrY", 0x0214_008D, 10, PACKED),
    lmn422("YCbCr422_12p_CbYCrY", 0x0218_008E, 12, PACKED),
    lmn422("YCbCr601_422_10p_CbYCrY", 0x0214_008F, 10, PACKED),
    lmn422("YCbCr601_422_12p_CbYCrY", 0x0218_0090, 12, PACKED),
    lmn422("YCbCr709_422_10p_CbYCrY", 0x0214_0091, 10, PACKED),
    lmn422("YCbCr709_422_12p_CbYCrY", 0x0218_0092, 12, PACKED),

    // YUV / YCbCr 4:1:1
    lmn411("YUV411_8_UYYVYY", 0x020C_001E, 8, U8),
    lmn411("YCbCr411_8", 0x020C_005A, 8, U8),
    lmn411("YCbCr411_8_CbYYCrYY", 0x020C_003C, 8, U8),
    lmn411("YCbCr601_411_8_CbYYCrYY", 0x020C_003F, 8, U8),
    lmn411("YCbCr709_411_8_CbYYCrYY", 0x020C_0042, 8, U8),

    // Bayer
    bayer("BayerGR8", 0x0108_0008, 8, U8),
    bayer("BayerRG8", 0x0108_0009, 8, U8),
    bayer("BayerGB8", 0x0108_000A, 8, U8),
    bayer("BayerBG8", 0x0108_000B, 8, U8),
    bayer("BayerGR10", 0x0110_000C, 10, U16),
    bayer("BayerRG10", 0x0110_000D, 10, U16),
    bayer("BayerGB10", 0x0110_000E, 10, U16),
    bayer("BayerBG10", 0x0110_000F, 10, U16),
    bayer("BayerGR12", 0x0110_0010, 12, U16),
    bayer("BayerRG12", 0x0110_0011, 12, U16),
    bayer("BayerGB12", 0x0110_0012, 12, U16),
    bayer("BayerBG12", 0x0110_0013, 12, U16),
    bayer("BayerGR16", 0x0110_002E, 16, U16),
    bayer("BayerRG16", 0x0110_002F, 16, U16),
    bayer("BayerGB16", 0x0110_0030, 16, U16),
    bayer("BayerBG16", 0x0110_0031, 16, U16),
    bayer("BayerGR10Packed", 0x010C_0026, 10, PACKED),
    bayer("BayerRG10Packed", 0x010C_0027, 10, PACKED),
    bayer("BayerGB10Packed", 0x010C_0028, 10, PACKED),
    bayer("BayerBG10Packed", 0x010C_0029, 10, PACKED),
    bayer("BayerGR12Packed", 0x010C_002A, 12, PACKED),
    bayer("BayerRG12Packed", 0x010C_002B, 12, PACKED),
    bayer("BayerGB12Packed", 0x010C_002C, 12, PACKED),
    bayer("BayerBG12Packed", 0x010C_002D, 12, PACKED),
    bayer("BayerBG10p", 0x010A_0052, 10, PACKED),
    bayer("BayerBG12p", 0x010C_0053, 12, PACKED),
    bayer("BayerGB10p", 0x010A_0054, 10, PACKED),
    bayer("BayerGB12p", 0x010C_0055, 12, PACKED),
    bayer("BayerGR10p", 0x010A_0056, 10, PACKED),
    bayer("BayerGR12p", 0x010C_0057, 12, PACKED),
    bayer("BayerRG10p", 0x010A_0058, 10, PACKED),
    bayer("BayerRG12p", 0x010C_0059, 12, PACKED),
];

/// Number of entries in [`CATALOG`].
pub const CATALOG_LEN: usize = CATALOG.len();
