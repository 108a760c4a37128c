//! Lookup of pixel formats by name and by numeric code.
//!
//! The registry is a set of `static` tables computed while compiling: the catalog itself
//! plus two index arrays sorted by code and by name. Lookups are binary searches, and
//! no state is ever mutated, so any number of threads may read concurrently.
//!
//! The same compile-time pass checks every catalog row. A duplicate name or code, a
//! malformed code, or inconsistent storage fails the build.

use crate::catalog::{CATALOG, CATALOG_LEN};
use crate::code::component_class;
use crate::descriptor::{ComponentLayout, PixelFormatDescriptor, StorageKind};
use crate::error::{FormatError, FormatResult};
use crate::families;
use core::cmp::Ordering;

/// Read-only registry of pixel format descriptors.
///
/// Obtain the built-in registry with [`FormatRegistry::standard`].
#[derive(Debug)]
pub struct FormatRegistry {
    formats: &'static [PixelFormatDescriptor],
    by_code: &'static [u16],
    by_name: &'static [u16],
}

const _: () = validate_catalog(CATALOG);

static BY_CODE: [u16; CATALOG_LEN] = sort_by_code(CATALOG);
static BY_NAME: [u16; CATALOG_LEN] = sort_by_name(CATALOG);

static STANDARD: FormatRegistry = FormatRegistry {
    formats: CATALOG,
    by_code: &BY_CODE,
    by_name: &BY_NAME,
};

impl FormatRegistry {
    /// The registry of every standard format in the catalog.
    pub fn standard() -> &'static FormatRegistry {
        &STANDARD
    }

    /// Finds a format by exact, case sensitive symbolic name.
    ///
    /// An unknown name is a normal outcome and yields [`None`].
    pub fn resolve_by_name(&self, symbolic: &str) -> Option<&'static PixelFormatDescriptor> {
        let formats = self.formats;
        self.by_name
            .binary_search_by(|&index| formats[index as usize].symbolic().cmp(symbolic))
            .ok()
            .map(|position| &formats[self.by_name[position] as usize])
    }

    /// Finds a format by numeric code.
    pub fn resolve_by_code(&self, code: u32) -> Option<&'static PixelFormatDescriptor> {
        let formats = self.formats;
        self.by_code
            .binary_search_by(|&index| formats[index as usize].code().cmp(&code))
            .ok()
            .map(|position| &formats[self.by_code[position] as usize])
    }

    /// Finds a format by name, reporting unknown names as an error.
    ///
    /// # Errors
    ///
    /// [`FormatError::UnknownFormat`] if the name is not in the catalog.
    pub fn lookup_name(&self, symbolic: &str) -> FormatResult<&'static PixelFormatDescriptor> {
        self.resolve_by_name(symbolic).ok_or(FormatError::UnknownFormat)
    }

    /// Finds a format by code, reporting failures as an error.
    ///
    /// # Errors
    ///
    /// - [`FormatError::MalformedCode`] if the code's component class is invalid
    /// - [`FormatError::UnknownCode`] if the code is well formed but not in the catalog
    pub fn lookup_code(&self, code: u32) -> FormatResult<&'static PixelFormatDescriptor> {
        if component_class(code).is_none() {
            return Err(FormatError::MalformedCode(code));
        }
        self.resolve_by_code(code).ok_or(FormatError::UnknownCode(code))
    }

    /// Bits per component of a named format, from the fixed 8/10/12/14/16-bit families.
    ///
    /// Returns [`None`] if the name belongs to none of those families, even if the
    /// catalog knows it (e.g. packed or float formats).
    pub fn bits_per_component(&self, symbolic: &str) -> Option<u32> {
        families::bits_per_component(symbolic)
    }

    /// All formats, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &'static PixelFormatDescriptor> + Clone {
        self.formats.iter()
    }

    /// Number of formats.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Whether the registry holds no formats.
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// All formats with the given component layout.
    pub fn formats_with_layout(
        &self,
        layout: ComponentLayout,
    ) -> impl Iterator<Item = &'static PixelFormatDescriptor> {
        self.formats.iter().filter(move |d| d.layout() == layout)
    }

    /// All formats whose unpacked samples are of the given storage kind.
    pub fn formats_with_storage(
        &self,
        kind: StorageKind,
    ) -> impl Iterator<Item = &'static PixelFormatDescriptor> {
        self.formats
            .iter()
            .filter(move |d| d.storage().unpacked() == kind)
    }
}

impl<'a> IntoIterator for &'a FormatRegistry {
    type Item = &'static PixelFormatDescriptor;
    type IntoIter = core::slice::Iter<'static, PixelFormatDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.formats.iter()
    }
}

/// Byte-wise ordering of two strings, same as [`str::cmp`].
const fn compare_str(left: &str, right: &str) -> Ordering {
    let left = left.as_bytes();
    let right = right.as_bytes();
    let mut x = 0;
    while x < left.len() && x < right.len() {
        if left[x] < right[x] {
            return Ordering::Less;
        }
        if left[x] > right[x] {
            return Ordering::Greater;
        }
        x += 1;
    }
    if left.len() < right.len() {
        Ordering::Less
    } else if left.len() > right.len() {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

const fn identity_indices<const N: usize>() -> [u16; N] {
    let mut indices = [0u16; N];
    let mut x = 0;
    while x < N {
        indices[x] = x as u16;
        x += 1;
    }
    indices
}

const fn sort_by_code<const N: usize>(formats: &[PixelFormatDescriptor]) -> [u16; N] {
    let mut indices = identity_indices::<N>();
    let mut x = 1;
    while x < N {
        let mut y = x;
        while y > 0 && formats[indices[y - 1] as usize].code() > formats[indices[y] as usize].code() {
            let swap = indices[y - 1];
            indices[y - 1] = indices[y];
            indices[y] = swap;
            y -= 1;
        }
        x += 1;
    }
    indices
}

const fn sort_by_name<const N: usize>(formats: &[PixelFormatDescriptor]) -> [u16; N] {
    let mut indices = identity_indices::<N>();
    let mut x = 1;
    while x < N {
        let mut y = x;
        while y > 0
            && matches!(
                compare_str(
                    formats[indices[y - 1] as usize].symbolic(),
                    formats[indices[y] as usize].symbolic()
                ),
                Ordering::Greater
            )
        {
            let swap = indices[y - 1];
            indices[y - 1] = indices[y];
            indices[y] = swap;
            y -= 1;
        }
        x += 1;
    }
    indices
}

/// Checks every catalog row and the uniqueness of names and codes.
///
/// Runs in constant evaluation; any violation aborts compilation.
const fn validate_catalog(formats: &[PixelFormatDescriptor]) {
    assert!(formats.len() <= u16::MAX as usize, "catalog too large to index");

    let mut x = 0;
    while x < formats.len() {
        match formats[x].validate() {
            Ok(()) => {}
            Err(FormatError::InvalidStorage { .. }) => {
                panic!("catalog entry has unpacked storage narrower than packed storage")
            }
            Err(FormatError::MalformedCode(_)) => panic!("catalog entry has a malformed code"),
            Err(_) => panic!("catalog entry has inconsistent components"),
        }

        let mut y = x + 1;
        while y < formats.len() {
            if formats[x].code() == formats[y].code() {
                panic!("duplicate pixel format code in catalog");
            }
            if matches!(
                compare_str(formats[x].symbolic(), formats[y].symbolic()),
                Ordering::Equal
            ) {
                panic!("duplicate pixel format name in catalog");
            }
            y += 1;
        }
        x += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case("Mono8", 0x0108_0001)]
    #[case("Mono10p", 0x010A_0046)]
    #[case("BayerRG12Packed", 0x010C_002B)]
    #[case("Coord3D_ABC32f_Planar", 0x0260_00C1)]
    #[case("YCbCr709_422_12p_CbYCrY", 0x0218_0092)]
    fn resolves_name_and_code(#[case] name: &str, #[case] code: u32) {
        let registry = FormatRegistry::standard();
        let by_name = registry.resolve_by_name(name).unwrap();
        let by_code = registry.resolve_by_code(code).unwrap();
        assert_eq!(by_name, by_code);
        assert_eq!(by_name.symbolic(), name);
        assert_eq!(by_code.code(), code);
    }

    #[rstest]
    #[case("NotAFormat")]
    #[case("mono8")]
    #[case("Mono8 ")]
    #[case("")]
    fn unknown_names_resolve_to_none(#[case] name: &str) {
        let registry = FormatRegistry::standard();
        assert!(registry.resolve_by_name(name).is_none());
        assert_eq!(registry.lookup_name(name), Err(FormatError::UnknownFormat));
    }

    #[test]
    fn lookup_code_distinguishes_malformed_and_unknown() {
        let registry = FormatRegistry::standard();
        assert_eq!(
            registry.lookup_code(0x0308_0001),
            Err(FormatError::MalformedCode(0x0308_0001))
        );
        assert_eq!(
            registry.lookup_code(0x0108_FFFF),
            Err(FormatError::UnknownCode(0x0108_FFFF))
        );
        assert_eq!(registry.lookup_code(0x0108_0001).map(|d| d.symbolic()), Ok("Mono8"));
    }

    #[test]
    fn indices_are_sorted() {
        let registry = FormatRegistry::standard();
        for pair in registry.by_code.windows(2) {
            assert!(CATALOG[pair[0] as usize].code() < CATALOG[pair[1] as usize].code());
        }
        for pair in registry.by_name.windows(2) {
            assert!(CATALOG[pair[0] as usize].symbolic() < CATALOG[pair[1] as usize].symbolic());
        }
    }

    #[rstest]
    #[case("a", "b", Ordering::Less)]
    #[case("b", "a", Ordering::Greater)]
    #[case("Mono1", "Mono10", Ordering::Less)]
    #[case("Mono8", "Mono8", Ordering::Equal)]
    #[case("B8", "BGR8", Ordering::Less)]
    #[case("", "a", Ordering::Less)]
    fn compare_str_matches_str_ord(#[case] left: &str, #[case] right: &str, #[case] expected: Ordering) {
        assert_eq!(compare_str(left, right), expected);
        assert_eq!(left.cmp(right), expected);
    }

    #[rstest]
    #[case("Mono8", Some(8))]
    #[case("Mono14", Some(14))]
    #[case("BayerGB16", Some(16))]
    #[case("Mono10p", None)]
    #[case("NotAFormat", None)]
    fn bits_per_component_uses_families(#[case] name: &str, #[case] expected: Option<u32>) {
        assert_eq!(FormatRegistry::standard().bits_per_component(name), expected);
    }

    #[test]
    fn storage_filter_matches_unpacked_kind() {
        let registry = FormatRegistry::standard();
        let mut signed = registry.formats_with_storage(StorageKind::Int8);
        assert_eq!(signed.next().map(|d| d.symbolic()), Some("Mono8s"));
        assert!(signed.next().is_none());
        assert_eq!(registry.formats_with_storage(StorageKind::Uint32).count(), 0);
    }
}
