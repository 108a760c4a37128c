#![no_main]

// Unpacks arbitrary bytes with every catalog format and checks the output
// length and sample ranges against the packing scheme.

use libfuzzer_sys::{arbitrary, fuzz_target};
use pfnc_unpack_codec::{unpack, ExpectedLength, PackingScheme, UnpackError};
use pfnc_unpack_formats::FormatRegistry;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub format_index: u16,
    pub raw: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let registry = FormatRegistry::standard();
    let Some(descriptor) = registry.iter().nth(input.format_index as usize % registry.len()) else {
        return;
    };
    let scheme = PackingScheme::for_descriptor(descriptor).expect("catalog formats have a scheme");

    match unpack(descriptor, &input.raw) {
        Ok(sequence) => {
            assert_eq!(Some(sequence.len()), scheme.samples_in(input.raw.len()));
            assert_eq!(sequence.storage_kind(), descriptor.storage().unpacked());

            if scheme.is_packed() {
                let max = (1u16 << scheme.sample_bits()) - 1;
                let samples = sequence.samples().as_u16().expect("packed formats unpack to u16");
                assert!(samples.iter().all(|&s| s <= max));
            }

            let mut bytes = vec![0u8; sequence.byte_len()];
            sequence.write_le_bytes(&mut bytes).expect("exact output length");
            if !scheme.is_packed() && !scheme.unpacked_kind().is_float() {
                assert_eq!(bytes, input.raw);
            }
        }
        Err(error) => {
            assert_eq!(
                error,
                UnpackError::SizeMismatch {
                    actual: input.raw.len(),
                    expected: ExpectedLength::MultipleOf(scheme.group_bytes()),
                }
            );
            assert!(scheme.samples_in(input.raw.len()).is_none());
        }
    }
});
