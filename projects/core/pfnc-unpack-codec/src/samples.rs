//! Unpacked sample sequences handed back to the caller.

use crate::error::{UnpackError, UnpackResult};
use alloc::borrow::Cow;
use alloc::vec::Vec;
use pfnc_unpack_formats::{ComponentCount, PixelFormatDescriptor, StorageKind};

/// Unpacked samples, one variant per storage element type.
///
/// Byte sized samples borrow the raw buffer; wider ones are decoded from little-endian
/// bytes into an owned buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples<'a> {
    /// Signed 8-bit samples.
    Int8(Cow<'a, [i8]>),
    /// Unsigned 8-bit samples.
    Uint8(Cow<'a, [u8]>),
    /// Unsigned 16-bit samples.
    Uint16(Vec<u16>),
    /// Unsigned 32-bit samples.
    Uint32(Vec<u32>),
    /// 32-bit float samples.
    Float32(Vec<f32>),
}

impl<'a> Samples<'a> {
    /// Element type of the samples.
    pub fn storage_kind(&self) -> StorageKind {
        match self {
            Self::Int8(_) => StorageKind::Int8,
            Self::Uint8(_) => StorageKind::Uint8,
            Self::Uint16(_) => StorageKind::Uint16,
            Self::Uint32(_) => StorageKind::Uint32,
            Self::Float32(_) => StorageKind::Float32,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        match self {
            Self::Int8(samples) => samples.len(),
            Self::Uint8(samples) => samples.len(),
            Self::Uint16(samples) => samples.len(),
            Self::Uint32(samples) => samples.len(),
            Self::Float32(samples) => samples.len(),
        }
    }

    /// Whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the samples when written out as little-endian elements.
    pub fn byte_len(&self) -> usize {
        self.len() * self.storage_kind().size_bytes()
    }

    /// Signed 8-bit samples, if that is the element type.
    pub fn as_i8(&self) -> Option<&[i8]> {
        match self {
            Self::Int8(samples) => Some(samples),
            _ => None,
        }
    }

    /// Unsigned 8-bit samples, if that is the element type.
    pub fn as_u8(&self) -> Option<&[u8]> {
        match self {
            Self::Uint8(samples) => Some(samples),
            _ => None,
        }
    }

    /// Unsigned 16-bit samples, if that is the element type.
    pub fn as_u16(&self) -> Option<&[u16]> {
        match self {
            Self::Uint16(samples) => Some(samples),
            _ => None,
        }
    }

    /// Unsigned 32-bit samples, if that is the element type.
    pub fn as_u32(&self) -> Option<&[u32]> {
        match self {
            Self::Uint32(samples) => Some(samples),
            _ => None,
        }
    }

    /// 32-bit float samples, if that is the element type.
    pub fn as_f32(&self) -> Option<&[f32]> {
        match self {
            Self::Float32(samples) => Some(samples),
            _ => None,
        }
    }

    /// Detaches the samples from the raw buffer, copying borrowed bytes.
    pub fn into_owned(self) -> Samples<'static> {
        match self {
            Self::Int8(samples) => Samples::Int8(Cow::Owned(samples.into_owned())),
            Self::Uint8(samples) => Samples::Uint8(Cow::Owned(samples.into_owned())),
            Self::Uint16(samples) => Samples::Uint16(samples),
            Self::Uint32(samples) => Samples::Uint32(samples),
            Self::Float32(samples) => Samples::Float32(samples),
        }
    }

    /// Keeps the first `len` samples, dropping the rest. No effect if already shorter.
    pub fn truncate(&mut self, len: usize) {
        match self {
            Self::Int8(samples) => truncate_cow(samples, len),
            Self::Uint8(samples) => truncate_cow(samples, len),
            Self::Uint16(samples) => samples.truncate(len),
            Self::Uint32(samples) => samples.truncate(len),
            Self::Float32(samples) => samples.truncate(len),
        }
    }

    /// Serialises the samples as little-endian elements into `output`.
    ///
    /// # Errors
    ///
    /// [`UnpackError::OutputLength`] if `output` is not exactly [`byte_len`](Self::byte_len) bytes.
    pub fn write_le_bytes(&self, output: &mut [u8]) -> UnpackResult<()> {
        if output.len() != self.byte_len() {
            return Err(UnpackError::OutputLength {
                actual: output.len(),
                expected: self.byte_len(),
            });
        }

        match self {
            Self::Int8(samples) => {
                for (dst, src) in output.iter_mut().zip(samples.iter()) {
                    *dst = *src as u8;
                }
            }
            Self::Uint8(samples) => output.copy_from_slice(samples),
            Self::Uint16(samples) => {
                for (dst, src) in output.chunks_exact_mut(2).zip(samples) {
                    dst.copy_from_slice(&src.to_le_bytes());
                }
            }
            Self::Uint32(samples) => {
                for (dst, src) in output.chunks_exact_mut(4).zip(samples) {
                    dst.copy_from_slice(&src.to_le_bytes());
                }
            }
            Self::Float32(samples) => {
                for (dst, src) in output.chunks_exact_mut(4).zip(samples) {
                    dst.copy_from_slice(&src.to_bits().to_le_bytes());
                }
            }
        }
        Ok(())
    }
}

fn truncate_cow<T: Clone>(samples: &mut Cow<'_, [T]>, len: usize) {
    match samples {
        Cow::Borrowed(slice) => {
            let borrowed = *slice;
            if len < borrowed.len() {
                *slice = &borrowed[..len];
            }
        }
        Cow::Owned(vec) => vec.truncate(len),
    }
}

/// Unpacked samples tagged with the metadata a consumer needs to interpret them.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSequence<'a> {
    samples: Samples<'a>,
    symbolic: &'static str,
    component_count: ComponentCount,
    bits_per_component: u32,
    is_signed: bool,
}

impl<'a> SampleSequence<'a> {
    pub(crate) fn new(descriptor: &PixelFormatDescriptor, samples: Samples<'a>) -> Self {
        Self {
            samples,
            symbolic: descriptor.symbolic(),
            component_count: descriptor.component_count(),
            bits_per_component: descriptor.bits_per_component(),
            is_signed: descriptor.is_signed(),
        }
    }

    /// The unpacked samples.
    pub fn samples(&self) -> &Samples<'a> {
        &self.samples
    }

    pub(crate) fn samples_mut(&mut self) -> &mut Samples<'a> {
        &mut self.samples
    }

    /// Takes the unpacked samples, dropping the metadata.
    pub fn into_samples(self) -> Samples<'a> {
        self.samples
    }

    /// Name of the format the samples were unpacked from.
    pub fn symbolic(&self) -> &'static str {
        self.symbolic
    }

    /// Element type of the samples.
    pub fn storage_kind(&self) -> StorageKind {
        self.samples.storage_kind()
    }

    /// Whether samples are signed.
    pub fn is_signed(&self) -> bool {
        self.is_signed
    }

    /// Components per pixel of the source format.
    pub fn component_count(&self) -> ComponentCount {
        self.component_count
    }

    /// Significant bits of each sample.
    pub fn bits_per_component(&self) -> u32 {
        self.bits_per_component
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Size of the samples when written out as little-endian elements.
    pub fn byte_len(&self) -> usize {
        self.samples.byte_len()
    }

    /// Serialises the samples as little-endian elements into `output`.
    ///
    /// # Errors
    ///
    /// [`UnpackError::OutputLength`] if `output` is not exactly [`byte_len`](Self::byte_len) bytes.
    pub fn write_le_bytes(&self, output: &mut [u8]) -> UnpackResult<()> {
        self.samples.write_le_bytes(output)
    }

    /// Detaches the sequence from the raw buffer.
    pub fn into_owned(self) -> SampleSequence<'static> {
        SampleSequence {
            samples: self.samples.into_owned(),
            symbolic: self.symbolic,
            component_count: self.component_count,
            bits_per_component: self.bits_per_component,
            is_signed: self.is_signed,
        }
    }
}
