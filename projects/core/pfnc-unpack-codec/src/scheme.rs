//! Packing schemes: the small set of byte layouts all catalog formats reduce to.

use pfnc_unpack_formats::{PixelFormatDescriptor, StorageKind};

/// How samples of a pixel format are laid out in a raw buffer.
///
/// Every format in the catalog maps onto one of these; per-format behaviour is fully
/// described by the scheme plus the descriptor's metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackingScheme {
    /// Samples are stored byte aligned as elements of the given kind, little-endian.
    Passthrough(StorageKind),
    /// 4 bytes hold 3 LSB-first 10-bit samples, with 2 bits of padding on top.
    TenBitGroup,
    /// 3 bytes hold 2 LSB-first 12-bit samples.
    TwelveBitGroup,
}

impl PackingScheme {
    /// Selects the scheme for a descriptor.
    ///
    /// Returns [`None`] for packed formats with a bit width or storage pairing that has
    /// no known packing, e.g. a hand-built custom descriptor.
    pub const fn for_descriptor(descriptor: &PixelFormatDescriptor) -> Option<Self> {
        let storage = descriptor.storage();
        if !storage.is_packed() {
            return Some(Self::Passthrough(storage.unpacked()));
        }

        match (
            storage.unpacked(),
            storage.packed(),
            descriptor.bits_per_component(),
        ) {
            (StorageKind::Uint16, StorageKind::Uint8, 10) => Some(Self::TenBitGroup),
            (StorageKind::Uint16, StorageKind::Uint8, 12) => Some(Self::TwelveBitGroup),
            _ => None,
        }
    }

    /// Bytes in one packing group.
    pub const fn group_bytes(self) -> usize {
        match self {
            Self::Passthrough(kind) => kind.size_bytes(),
            Self::TenBitGroup => 4,
            Self::TwelveBitGroup => 3,
        }
    }

    /// Samples encoded by one packing group.
    pub const fn samples_per_group(self) -> usize {
        match self {
            Self::Passthrough(_) => 1,
            Self::TenBitGroup => 3,
            Self::TwelveBitGroup => 2,
        }
    }

    /// Significant bits of one sample.
    pub const fn sample_bits(self) -> u32 {
        match self {
            Self::Passthrough(kind) => kind.width_bits(),
            Self::TenBitGroup => 10,
            Self::TwelveBitGroup => 12,
        }
    }

    /// Element type the samples unpack into.
    pub const fn unpacked_kind(self) -> StorageKind {
        match self {
            Self::Passthrough(kind) => kind,
            Self::TenBitGroup | Self::TwelveBitGroup => StorageKind::Uint16,
        }
    }

    /// Whether bit manipulation is required.
    pub const fn is_packed(self) -> bool {
        !matches!(self, Self::Passthrough(_))
    }

    /// Raw bytes needed to hold `samples` samples, padding the last group.
    ///
    /// Returns [`None`] on overflow.
    pub const fn packed_len_for_samples(self, samples: usize) -> Option<usize> {
        samples
            .div_ceil(self.samples_per_group())
            .checked_mul(self.group_bytes())
    }

    /// Number of samples a raw buffer of `len` bytes unpacks to, if `len` is whole groups.
    pub const fn samples_in(self, len: usize) -> Option<usize> {
        if len % self.group_bytes() != 0 {
            return None;
        }
        Some(len / self.group_bytes() * self.samples_per_group())
    }
}
