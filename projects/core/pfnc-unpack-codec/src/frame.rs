//! Frame level unpacking with exact size checks.
//!
//! A frame of `width * height` pixels stores `width * height * samples_per_pixel` samples.
//! For bit packed formats the stream is padded to whole groups at its end; planar packed
//! formats pad every plane on its own. The padding samples are dropped from the output.

use crate::error::{ExpectedLength, UnpackError, UnpackResult};
use crate::samples::{SampleSequence, Samples};
use crate::scheme::PackingScheme;
use crate::unpack::{unpack, unpack_10bit_groups, unpack_12bit_groups};
use alloc::vec;
use alloc::vec::Vec;
use likely_stable::unlikely;
use pfnc_unpack_formats::PixelFormatDescriptor;

/// Byte and sample counts of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    /// Number of separately stored planes, 1 for interleaved formats.
    pub planes: usize,
    /// Samples stored in each plane.
    pub samples_per_plane: usize,
    /// Raw bytes of each plane, including group padding.
    pub bytes_per_plane: usize,
}

impl FrameGeometry {
    /// Computes the geometry of a `width` x `height` frame.
    ///
    /// # Errors
    ///
    /// - [`UnpackError::UnknownFormat`] if the descriptor has no packing scheme, or is
    ///   planar with a sub-sampled layout
    /// - [`UnpackError::InvalidDimensions`] if the pixel count does not cover whole
    ///   sub-sampling blocks, or the sizes overflow
    pub fn new(descriptor: &PixelFormatDescriptor, width: usize, height: usize) -> UnpackResult<Self> {
        let scheme = PackingScheme::for_descriptor(descriptor)
            .ok_or(UnpackError::UnknownFormat(descriptor.symbolic()))?;
        let invalid = UnpackError::InvalidDimensions {
            symbolic: descriptor.symbolic(),
            width,
            height,
        };

        let pixels = width.checked_mul(height).ok_or(invalid)?;
        let spp = descriptor.samples_per_pixel();
        let (planes, samples_per_plane) = if descriptor.is_planar() {
            // Planar layouts hold one whole component per pixel in every plane.
            if spp.pixels != 1 {
                return Err(UnpackError::UnknownFormat(descriptor.symbolic()));
            }
            (spp.samples as usize, pixels)
        } else {
            (1, spp.samples_for(pixels).ok_or(invalid)?)
        };

        let bytes_per_plane = scheme
            .packed_len_for_samples(samples_per_plane)
            .ok_or(invalid)?;
        bytes_per_plane.checked_mul(planes).ok_or(invalid)?;

        Ok(Self {
            planes,
            samples_per_plane,
            bytes_per_plane,
        })
    }

    /// Raw bytes of the whole frame.
    pub fn frame_bytes(&self) -> usize {
        self.bytes_per_plane * self.planes
    }

    /// Samples of the whole frame.
    pub fn frame_samples(&self) -> usize {
        self.samples_per_plane * self.planes
    }
}

/// Unpacks a raw buffer holding exactly one `width` x `height` frame.
///
/// # Errors
///
/// - [`UnpackError::SizeMismatch`] if `raw` is not exactly the frame's size
/// - [`UnpackError::InvalidDimensions`] if the dimensions do not fit the format
/// - [`UnpackError::UnknownFormat`] if the descriptor has no packing scheme
///
/// # Examples
///
/// ```
/// use pfnc_unpack_codec::unpack_frame;
/// use pfnc_unpack_formats::FormatRegistry;
///
/// // 2x1 Mono12p frame is one 3-byte group.
/// let mono12p = FormatRegistry::standard().resolve_by_name("Mono12p").unwrap();
/// let frame = unpack_frame(mono12p, &[0x21, 0x43, 0x65], 2, 1).unwrap();
/// assert_eq!(frame.samples().as_u16(), Some(&[0x321, 0x654][..]));
/// ```
pub fn unpack_frame<'a>(
    descriptor: &PixelFormatDescriptor,
    raw: &'a [u8],
    width: usize,
    height: usize,
) -> UnpackResult<SampleSequence<'a>> {
    let geometry = FrameGeometry::new(descriptor, width, height)?;
    let expected = geometry.frame_bytes();
    if unlikely(raw.len() != expected) {
        return Err(UnpackError::SizeMismatch {
            actual: raw.len(),
            expected: ExpectedLength::Exactly(expected),
        });
    }

    if geometry.planes == 1 {
        let mut sequence = unpack(descriptor, raw)?;
        sequence.samples_mut().truncate(geometry.samples_per_plane);
        return Ok(sequence);
    }

    // Unpacked planar formats have no padding, the planes are already contiguous.
    let scheme = PackingScheme::for_descriptor(descriptor)
        .ok_or(UnpackError::UnknownFormat(descriptor.symbolic()))?;
    let unpack_plane: fn(&[u8], &mut [u16]) -> UnpackResult<()> = match scheme {
        PackingScheme::TenBitGroup => unpack_10bit_groups,
        PackingScheme::TwelveBitGroup => unpack_12bit_groups,
        PackingScheme::Passthrough(_) => return unpack(descriptor, raw),
    };
    if geometry.bytes_per_plane == 0 {
        return unpack(descriptor, raw);
    }

    // Every plane carries its own group padding, dropped before the next plane starts.
    let group_samples = geometry.bytes_per_plane / scheme.group_bytes() * scheme.samples_per_group();
    let mut plane_samples = vec![0u16; group_samples];
    let mut samples = Vec::with_capacity(geometry.frame_samples());
    for plane in raw.chunks_exact(geometry.bytes_per_plane) {
        unpack_plane(plane, &mut plane_samples)?;
        samples.extend_from_slice(&plane_samples[..geometry.samples_per_plane]);
    }
    Ok(SampleSequence::new(descriptor, Samples::Uint16(samples)))
}
