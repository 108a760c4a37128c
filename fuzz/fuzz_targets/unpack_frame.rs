#![no_main]

// Unpacks a frame of arbitrary dimensions padded to its exact size, then checks
// that one byte more or less is rejected.

use libfuzzer_sys::{arbitrary, fuzz_target};
use pfnc_unpack_codec::{unpack_frame, FrameGeometry};
use pfnc_unpack_formats::FormatRegistry;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub format_index: u16,
    pub width: u8,
    pub height: u8,
    pub raw: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let registry = FormatRegistry::standard();
    let Some(descriptor) = registry.iter().nth(input.format_index as usize % registry.len()) else {
        return;
    };
    let (width, height) = (input.width as usize, input.height as usize);
    let Ok(geometry) = FrameGeometry::new(descriptor, width, height) else {
        // Only 4:1:1 with an odd pixel count is invalid at these sizes.
        assert!(descriptor.samples_per_pixel().pixels > 1);
        return;
    };

    let mut raw = input.raw;
    raw.resize(geometry.frame_bytes(), 0x5A);
    let frame = unpack_frame(descriptor, &raw, width, height).expect("exact frame size");
    assert_eq!(frame.len(), geometry.frame_samples());

    raw.push(0);
    assert!(unpack_frame(descriptor, &raw, width, height).is_err());
    raw.truncate(geometry.frame_bytes().saturating_sub(1));
    if geometry.frame_bytes() > 0 {
        assert!(unpack_frame(descriptor, &raw, width, height).is_err());
    }
});
