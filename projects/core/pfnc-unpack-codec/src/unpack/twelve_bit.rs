//! Unpacking of the 12-bit group family (`...12p`, `...12Packed`).
//!
//! Each group of 3 bytes `(b0, b1, b2)` holds 2 samples, lowest bits first:
//!
//! ```text
//! |      b2      |         b1          |      b0      |
//! | s1 bits 11-4 | s1 3-0  | s0 11-8   | s0 bits 7-0  |
//! ```
//!
//! - `s0 = b0 | (b1 & 0x0F) << 8`
//! - `s1 = b1 >> 4 | b2 << 4`

use crate::error::{ExpectedLength, UnpackError, UnpackResult};
use likely_stable::unlikely;
#[cfg(not(feature = "no-runtime-cpu-detection"))]
use multiversion::multiversion;

/// Bytes in one group.
pub const GROUP_BYTES: usize = 3;
/// Samples in one group.
pub const SAMPLES_PER_GROUP: usize = 2;

/// Unpacks one 3-byte group into its 2 samples.
#[inline(always)]
pub fn unpack_group(b0: u8, b1: u8, b2: u8) -> [u16; SAMPLES_PER_GROUP] {
    let (b0, b1, b2) = (b0 as u16, b1 as u16, b2 as u16);
    [b0 | (b1 & 0x0F) << 8, b1 >> 4 | b2 << 4]
}

/// Unpacks whole 12-bit groups from `input` into `output`.
///
/// # Parameters
///
/// - `input`: Packed bytes, a multiple of [`GROUP_BYTES`] long
/// - `output`: Receives exactly `input.len() / 3 * 2` samples
///
/// # Errors
///
/// - [`UnpackError::SizeMismatch`] if `input` is not made of whole groups
/// - [`UnpackError::OutputLength`] if `output` does not hold exactly the unpacked samples
pub fn unpack_12bit_groups(input: &[u8], output: &mut [u16]) -> UnpackResult<()> {
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
    unsafe { unpack_12bit_groups_ptr(input.as_ptr(), output.as_mut_ptr(), num_groups) };
    Ok(())
}

/// Raw pointer implementation of [`unpack_12bit_groups`].
///
/// # Safety
///
/// - `input_ptr` must be valid for reads of `num_groups * 3` bytes
/// - `output_ptr` must be valid for writes of `num_groups * 2` [`u16`] values
/// - The regions must not overlap
#[inline]
pub unsafe fn unpack_12bit_groups_ptr(input_ptr: *const u8, output_ptr: *mut u16, num_groups: usize) {
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
        for x in 0..num_groups {
            unsafe {
                let group = input_ptr.add(x * GROUP_BYTES);
                let samples = unpack_group(group.read(), group.add(1).read(), group.add(2).read());
                let out = output_ptr.add(x * SAMPLES_PER_GROUP);
                out.write_unaligned(samples[0]);
                out.add(1).write_unaligned(samples[1]);
            }
        }
    }

    unsafe { unpack(input_ptr, output_ptr, num_groups) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case([0xFF, 0xFF, 0xFF], [0xFFF, 0xFFF])]
    #[case([0x21, 0x43, 0x65], [0x321, 0x654])]
    #[case([0xFF, 0x0F, 0x00], [0xFFF, 0x000])]
    #[case([0x00, 0xF0, 0xFF], [0x000, 0xFFF])]
    #[case([0x00, 0x00, 0x00], [0x000, 0x000])]
    fn unpacks_single_group(#[case] input: [u8; 3], #[case] expected: [u16; 2]) {
        let mut output = [0u16; 2];
        unpack_12bit_groups(&input, &mut output).unwrap();
        assert_eq!(output, expected);
    }

    #[test]
    fn samples_never_exceed_12_bits() {
        for seed in 0..=255u8 {
            let input = [seed, !seed, seed.rotate_left(3)];
            let mut output = [0u16; 2];
            unpack_12bit_groups(&input, &mut output).unwrap();
            assert!(output.iter().all(|&s| s <= 0xFFF));
        }
    }

    #[rstest]
    #[case(1)]
    #[case(4)]
    #[case(5)]
    fn rejects_partial_groups(#[case] len: usize) {
        let input = vec![0u8; len];
        let mut output = vec![0u16; 2];
        assert_eq!(
            unpack_12bit_groups(&input, &mut output),
            Err(UnpackError::SizeMismatch {
                actual: len,
                expected: ExpectedLength::MultipleOf(3)
            })
        );
    }

    #[test]
    fn rejects_wrong_output_length() {
        let mut output = [0u16; 3];
        assert_eq!(
            unpack_12bit_groups(&[0u8; 3], &mut output),
            Err(UnpackError::OutputLength {
                actual: 3,
                expected: 2
            })
        );
    }

    #[test]
    fn unpacks_many_groups() {
        let num_groups = 999;
        let mut input = Vec::with_capacity(num_groups * 3);
        for x in 0..num_groups as u16 {
            let (s0, s1) = (x & 0xFFF, (x * 3) & 0xFFF);
            input.push(s0 as u8);
            input.push((s0 >> 8) as u8 | ((s1 & 0x0F) << 4) as u8);
            input.push((s1 >> 4) as u8);
        }

        let mut output = vec![0u16; num_groups * 2];
        unpack_12bit_groups(&input, &mut output).unwrap();
        for (x, samples) in output.chunks_exact(2).enumerate() {
            let x = x as u16;
            assert_eq!(samples, [x & 0xFFF, (x * 3) & 0xFFF]);
        }
    }
}
