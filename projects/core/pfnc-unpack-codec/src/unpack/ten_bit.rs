//! Unpacking of the 10-bit group family (`...10p`, `...10Packed`).
//!
//! Each group of 4 bytes is read as a little-endian [`u32`] holding 3 samples, lowest bits
//! first. The top 2 bits are padding.
//!
//! ```text
//! |31 30|29          20|19          10|09          00|
//! | pad |   sample 2   |   sample 1   |   sample 0   |
//! ```
//!
//! In terms of the raw bytes `(b0, b1, b2, b3)`:
//!
//! - `s0 = b0 | (b1 & 0x03) << 8`
//! - `s1 = b1 >> 2 | (b2 & 0x0F) << 6`
//! - `s2 = b2 >> 4 | (b3 & 0x3F) << 4`

use crate::error::{ExpectedLength, UnpackError, UnpackResult};
use endian_writer::{EndianReader, LittleEndianReader};
use likely_stable::unlikely;
#[cfg(not(feature = "no-runtime-cpu-detection"))]
use multiversion::multiversion;

/// Bytes in one group.
pub const GROUP_BYTES: usize = 4;
/// Samples in one group.
pub const SAMPLES_PER_GROUP: usize = 3;

const SAMPLE_MASK: u32 = 0x3FF;

/// Unpacks one 4-byte group into its 3 samples.
#[inline(always)]
pub fn unpack_group(group: u32) -> [u16; SAMPLES_PER_GROUP] {
    [
        (group & SAMPLE_MASK) as u16,
        ((group >> 10) & SAMPLE_MASK) as u16,
        ((group >> 20) & SAMPLE_MASK) as u16,
    ]
}

/// Unpacks whole 10-bit groups from `input` into `output`.
///
/// # Parameters
///
/// - `input`: Packed bytes, a multiple of [`GROUP_BYTES`] long
/// - `output`: Receives exactly `input.len() / 4 * 3` samples
///
/// # Errors
///
/// - [`UnpackError::SizeMismatch`] if `input` is not made of whole groups
/// - [`UnpackError::OutputLength`] if `output` does not hold exactly the unpacked samples
pub fn unpack_10bit_groups(input: &[u8], output: &mut [u16]) -> UnpackResult<()> {
    if unlikely(!input.len().is_multiple_of(GROUP_BYTES)) {
        return Err(UnpackError::SizeMismatch {
            actual: input.len(),
            expected: ExpectedLength::MultipleOf(GROUP_BYTES),
        });
    }

    let num_groups = input.len() / GROUP_BYTES;
    let expected = num_groups * SAMPLES_PER_GROUP;
    if unlikely(output.len() != expected) {
        return Err(UnpackError::OutputLength {
            actual: output.len(),
            expected,
        });
    }

    // SAFETY: Lengths of both buffers were validated against num_groups above.
    unsafe { unpack_10bit_groups_ptr(input.as_ptr(), output.as_mut_ptr(), num_groups) };
    Ok(())
}

/// Raw pointer implementation of [`unpack_10bit_groups`].
///
/// # Safety
///
/// - `input_ptr` must be valid for reads of `num_groups * 4` bytes
/// - `output_ptr` must be valid for writes of `num_groups * 3` [`u16`] values
/// - The regions must not overlap
#[inline]
pub unsafe fn unpack_10bit_groups_ptr(input_ptr: *const u8, output_ptr: *mut u16, num_groups: usize) {
    #[cfg_attr(
        not(feature = "no-runtime-cpu-detection"),
        multiversion(targets(
            // x86-64-v3 without lahfsahf
            "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
            // x86-64-v2 without lahfsahf
            "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
        ))
    )]
    unsafe fn unpack(input_ptr: *const u8, output_ptr: *mut u16, num_groups: usize) {
        let mut reader = unsafe { LittleEndianReader::new(input_ptr) };
        for x in 0..num_groups {
            unsafe {
                let group = reader.read_u32_at((x * GROUP_BYTES) as isize);
                let samples = unpack_group(group);
                let out = output_ptr.add(x * SAMPLES_PER_GROUP);
                out.write_unaligned(samples[0]);
                out.add(1).write_unaligned(samples[1]);
                out.add(2).write_unaligned(samples[2]);
            }
        }
    }

    unsafe { unpack(input_ptr, output_ptr, num_groups) }
}
