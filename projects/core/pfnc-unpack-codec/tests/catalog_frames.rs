//! Unpacking frames of every catalog format.

use pfnc_unpack_codec::{
    unpack, unpack_frame, ExpectedLength, FrameGeometry, PackingScheme, UnpackError,
};
use pfnc_unpack_formats::{FormatRegistry, StorageKind};

const WIDTH: usize = 6;
const HEIGHT: usize = 4;

fn pattern(len: usize) -> Vec<u8> {
    // Keeps float exponents away from NaN.
    (0..len).map(|x| (x % 61) as u8).collect()
}

#[test]
fn every_format_unpacks_a_frame() {
    for descriptor in FormatRegistry::standard().iter() {
        let geometry = FrameGeometry::new(descriptor, WIDTH, HEIGHT).unwrap();
        let raw = pattern(geometry.frame_bytes());

        let frame = unpack_frame(descriptor, &raw, WIDTH, HEIGHT).unwrap();
        assert_eq!(frame.len(), geometry.frame_samples(), "{descriptor}");
        assert_eq!(frame.storage_kind(), descriptor.storage().unpacked(), "{descriptor}");
        assert_eq!(frame.symbolic(), descriptor.symbolic());
        assert_eq!(frame.is_signed(), descriptor.is_signed());
        assert_eq!(frame.component_count(), descriptor.component_count());
    }
}

#[test]
fn every_format_rejects_a_truncated_frame() {
    for descriptor in FormatRegistry::standard().iter() {
        let geometry = FrameGeometry::new(descriptor, WIDTH, HEIGHT).unwrap();
        let raw = pattern(geometry.frame_bytes() - 1);
        assert_eq!(
            unpack_frame(descriptor, &raw, WIDTH, HEIGHT),
            Err(UnpackError::SizeMismatch {
                actual: raw.len(),
                expected: ExpectedLength::Exactly(geometry.frame_bytes()),
            }),
            "{descriptor}"
        );
    }
}

#[test]
fn packed_samples_fit_their_bit_width() {
    let raw = vec![0xFFu8; 4 * 3 * 16];
    for descriptor in FormatRegistry::standard().iter().filter(|d| d.is_packed()) {
        let sequence = unpack(descriptor, &raw).unwrap();
        let max = (1u16 << descriptor.bits_per_component()) - 1;
        let samples = sequence.samples().as_u16().unwrap();
        assert!(samples.iter().all(|&s| s == max), "{descriptor}");
    }
}

#[test]
fn ten_bit_formats_reject_five_bytes() {
    for descriptor in FormatRegistry::standard().iter() {
        if PackingScheme::for_descriptor(descriptor) != Some(PackingScheme::TenBitGroup) {
            continue;
        }
        assert_eq!(
            unpack(descriptor, &[0u8; 5]),
            Err(UnpackError::SizeMismatch {
                actual: 5,
                expected: ExpectedLength::MultipleOf(4),
            }),
            "{descriptor}"
        );
    }
}

#[test]
fn unpacked_u16_round_trips() {
    let values: Vec<u16> = (0..1024u16).map(|x| x.rotate_left(5) ^ 0x5A5A).collect();
    let raw: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
    for descriptor in FormatRegistry::standard().formats_with_storage(StorageKind::Uint16) {
        if descriptor.is_packed() {
            continue;
        }
        let sequence = unpack(descriptor, &raw).unwrap();
        assert_eq!(sequence.samples().as_u16(), Some(&values[..]), "{descriptor}");

        let mut written = vec![0u8; sequence.byte_len()];
        sequence.write_le_bytes(&mut written).unwrap();
        assert_eq!(written, raw, "{descriptor}");
    }
}

#[test]
fn unpack_is_deterministic() {
    let raw = pattern(4 * 3 * 100);
    for descriptor in FormatRegistry::standard().iter() {
        let first = unpack(descriptor, &raw).unwrap();
        let second = unpack(descriptor, &raw).unwrap();
        assert_eq!(first, second, "{descriptor}");

        let mut first_bytes = vec![0u8; first.byte_len()];
        let mut second_bytes = vec![0u8; second.byte_len()];
        first.write_le_bytes(&mut first_bytes).unwrap();
        second.write_le_bytes(&mut second_bytes).unwrap();
        assert_eq!(first_bytes, second_bytes, "{descriptor}");
    }
}

#[test]
fn owned_sequence_outlives_buffer() {
    let descriptor = FormatRegistry::standard().resolve_by_name("Mono8").unwrap();
    let owned = {
        let raw = vec![1u8, 2, 3];
        unpack(descriptor, &raw).unwrap().into_owned()
    };
    assert_eq!(owned.samples().as_u8(), Some(&[1u8, 2, 3][..]));
}
