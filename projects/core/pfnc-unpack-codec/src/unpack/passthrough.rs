//! Reinterpretation of byte aligned samples.
//!
//! No bits move here. Byte sized samples are borrowed straight from the raw buffer,
//! wider samples are read as little-endian elements.

use crate::error::{ExpectedLength, UnpackError, UnpackResult};
use crate::samples::Samples;
use alloc::borrow::Cow;
use alloc::vec::Vec;
use likely_stable::unlikely;
use pfnc_unpack_formats::StorageKind;

/// Reinterprets `raw` as a sequence of `kind` elements.
///
/// # Errors
///
/// [`UnpackError::SizeMismatch`] if `raw` is not a whole number of elements.
pub fn reinterpret(kind: StorageKind, raw: &[u8]) -> UnpackResult<Samples<'_>> {
    let element_bytes = kind.size_bytes();
    if unlikely(!raw.len().is_multiple_of(element_bytes)) {
        return Err(UnpackError::SizeMismatch {
            actual: raw.len(),
            expected: ExpectedLength::MultipleOf(element_bytes),
        });
    }

    Ok(match kind {
        StorageKind::Uint8 => Samples::Uint8(Cow::Borrowed(raw)),
        StorageKind::Int8 => Samples::Int8(Cow::Borrowed(as_i8_slice(raw))),
        StorageKind::Uint16 => Samples::Uint16(read_u16_le(raw)),
        StorageKind::Uint32 => Samples::Uint32(read_u32_le(raw)),
        StorageKind::Float32 => Samples::Float32(read_f32_le(raw)),
    })
}

fn as_i8_slice(raw: &[u8]) -> &[i8] {
    // SAFETY: i8 and u8 have the same size and alignment, and every bit pattern is valid.
    unsafe { core::slice::from_raw_parts(raw.as_ptr() as *const i8, raw.len()) }
}

fn read_u16_le(raw: &[u8]) -> Vec<u16> {
    raw.chunks_exact(2)
        .map(|bytes| u16::from_le_bytes([bytes[0], bytes[1]]))
        .collect()
}

fn read_u32_le(raw: &[u8]) -> Vec<u32> {
    raw.chunks_exact(4)
        .map(|bytes| u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        .collect()
}

fn read_f32_le(raw: &[u8]) -> Vec<f32> {
    raw.chunks_exact(4)
        .map(|bytes| f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn u8_is_borrowed() {
        let raw = [1u8, 2, 3];
        let samples = reinterpret(StorageKind::Uint8, &raw).unwrap();
        assert!(matches!(&samples, Samples::Uint8(Cow::Borrowed(_))));
        assert_eq!(samples.as_u8(), Some(&raw[..]));
    }

    #[test]
    fn i8_is_borrowed_and_signed() {
        let raw = [0xFFu8, 0x80, 0x7F];
        let samples = reinterpret(StorageKind::Int8, &raw).unwrap();
        assert!(matches!(&samples, Samples::Int8(Cow::Borrowed(_))));
        assert_eq!(samples.as_i8(), Some(&[-1i8, -128, 127][..]));
    }

    #[test]
    fn u16_round_trips() {
        let values: Vec<u16> = (0..512u16).map(|x| x.wrapping_mul(0x9E37)).collect();
        let raw: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        let samples = reinterpret(StorageKind::Uint16, &raw).unwrap();
        assert_eq!(samples.as_u16(), Some(&values[..]));

        let mut written = vec![0u8; samples.byte_len()];
        samples.write_le_bytes(&mut written).unwrap();
        assert_eq!(written, raw);
    }

    #[test]
    fn u32_and_f32_are_little_endian() {
        let raw = [0x00, 0x00, 0x80, 0x3F, 0x01, 0x02, 0x03, 0x04];
        let ints = reinterpret(StorageKind::Uint32, &raw).unwrap();
        assert_eq!(ints.as_u32(), Some(&[0x3F80_0000u32, 0x0403_0201][..]));

        let floats = reinterpret(StorageKind::Float32, &raw[..4]).unwrap();
        assert_eq!(floats.as_f32(), Some(&[1.0f32][..]));
    }

    #[test]
    fn f32_is_read_element_wise() {
        let values = [1.0f32, -2.5, 0.0, f32::MAX, f32::MIN_POSITIVE];
        let raw: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        let samples = reinterpret(StorageKind::Float32, &raw).unwrap();
        assert_eq!(samples.as_f32(), Some(&values[..]));
        assert_eq!(samples.byte_len(), raw.len());
    }

    #[rstest]
    #[case(StorageKind::Uint16, 3, 2)]
    #[case(StorageKind::Uint32, 6, 4)]
    #[case(StorageKind::Float32, 1, 4)]
    fn rejects_partial_elements(#[case] kind: StorageKind, #[case] len: usize, #[case] element: usize) {
        let raw = vec![0u8; len];
        assert_eq!(
            reinterpret(kind, &raw),
            Err(UnpackError::SizeMismatch {
                actual: len,
                expected: ExpectedLength::MultipleOf(element)
            })
        );
    }

    #[test]
    fn empty_buffer_is_empty_sequence() {
        for kind in StorageKind::all_values() {
            let samples = reinterpret(*kind, &[]).unwrap();
            assert!(samples.is_empty());
            assert_eq!(samples.storage_kind(), *kind);
        }
    }
}
