#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod frame;
pub mod samples;
pub mod scheme;
pub mod unpack;

#[cfg(test)]
pub mod test_prelude;

pub use error::{ExpectedLength, UnpackError, UnpackResult};
pub use frame::{unpack_frame, FrameGeometry};
pub use samples::{SampleSequence, Samples};
pub use scheme::PackingScheme;
pub use unpack::{unpack, unpack_10bit_groups, unpack_12bit_groups, unpack_by_name, unpack_with_scheme};
