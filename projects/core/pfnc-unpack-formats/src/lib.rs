#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod catalog;
pub mod code;
pub mod descriptor;
pub mod error;
pub mod families;
pub mod registry;

#[cfg(test)]
pub mod test_prelude;

pub use code::{
    component_class, effective_pixel_size_bits, is_custom, is_multiple_component,
    is_single_component, ComponentClass, PixelFormatCode,
};
pub use descriptor::{
    ChannelOrder, ComponentCount, ComponentLayout, DataBoundary, PixelFormatDescriptor,
    SamplesPerPixel, StorageKind,
};
pub use error::{FormatError, FormatResult};
pub use registry::FormatRegistry;
