//! Unpacking of raw buffers into sample sequences.
//!
//! [`unpack`] selects a [`PackingScheme`] from the descriptor and applies it to the whole
//! buffer. The buffer may hold any whole number of packing groups; use
//! [`crate::unpack_frame`] to check it against frame dimensions as well.
//!
//! Multi-component packed formats need no special handling: the same group transform
//! applies to the interleaved (or planar) stream, and the component count only changes
//! how many groups a frame has.

pub mod passthrough;
pub mod ten_bit;
pub mod twelve_bit;

use crate::error::{ExpectedLength, UnpackError, UnpackResult};
use crate::samples::{SampleSequence, Samples};
use crate::scheme::PackingScheme;
use alloc::vec;
use pfnc_unpack_formats::{FormatRegistry, PixelFormatDescriptor};

pub use ten_bit::unpack_10bit_groups;
pub use twelve_bit::unpack_12bit_groups;

/// Unpacks a raw buffer of the given format.
///
/// Byte sized formats are returned borrowing `raw`; everything else is decoded into an
/// owned buffer. The function is pure: calling it twice on the same buffer yields
/// identical output.
///
/// # Errors
///
/// - [`UnpackError::UnknownFormat`] if the descriptor has no packing scheme
/// - [`UnpackError::SizeMismatch`] if `raw` is not a whole number of packing groups
///   (elements, for unpacked formats)
///
/// # Examples
///
/// ```
/// use pfnc_unpack_codec::unpack;
/// use pfnc_unpack_formats::FormatRegistry;
///
/// let mono10p = FormatRegistry::standard().resolve_by_name("Mono10p").unwrap();
/// let samples = unpack(mono10p, &[0xFF, 0x03, 0x00, 0x00]).unwrap();
/// assert_eq!(samples.samples().as_u16(), Some(&[0x3FF, 0, 0][..]));
/// ```
pub fn unpack<'a>(descriptor: &PixelFormatDescriptor, raw: &'a [u8]) -> UnpackResult<SampleSequence<'a>> {
    let scheme = PackingScheme::for_descriptor(descriptor)
        .ok_or(UnpackError::UnknownFormat(descriptor.symbolic()))?;
    let samples = unpack_with_scheme(scheme, raw)?;
    Ok(SampleSequence::new(descriptor, samples))
}

/// Resolves `symbolic` in the standard registry and unpacks `raw` with it.
///
/// # Errors
///
/// - [`UnpackError::Format`] if the name is not in the catalog
/// - Any error of [`unpack`]
pub fn unpack_by_name<'a>(symbolic: &str, raw: &'a [u8]) -> UnpackResult<SampleSequence<'a>> {
    let descriptor = FormatRegistry::standard().lookup_name(symbolic)?;
    unpack(descriptor, raw)
}

/// Applies `scheme` to the whole of `raw`.
///
/// # Errors
///
/// [`UnpackError::SizeMismatch`] if `raw` is not a whole number of groups.
pub fn unpack_with_scheme(scheme: PackingScheme, raw: &[u8]) -> UnpackResult<Samples<'_>> {
    match scheme {
        PackingScheme::Passthrough(kind) => passthrough::reinterpret(kind, raw),
        PackingScheme::TenBitGroup | PackingScheme::TwelveBitGroup => {
            let Some(sample_count) = scheme.samples_in(raw.len()) else {
                return Err(size_mismatch(scheme, raw.len()));
            };
            let mut output = vec![0u16; sample_count];
            if scheme == PackingScheme::TenBitGroup {
                unpack_10bit_groups(raw, &mut output)?;
            } else {
                unpack_12bit_groups(raw, &mut output)?;
            }
            Ok(Samples::Uint16(output))
        }
    }
}

fn size_mismatch(scheme: PackingScheme, actual: usize) -> UnpackError {
    UnpackError::SizeMismatch {
        actual,
        expected: ExpectedLength::MultipleOf(scheme.group_bytes()),
    }
}
