//! Fixed partition of format names by bits per component.
//!
//! These lists predate the catalog and only cover the plain (unpacked, integer) formats.
//! Names missing from every list have no family, which is reported as [`None`].

/// Formats with 8 bits per component.
pub const COMPONENT_8BIT_FORMATS: &[&str] = &[
    "Mono8",
    "RGB8",
    "RGBa8",
    "BGR8",
    "BGRa8",
    "BayerGR8",
    "BayerGB8",
    "BayerRG8",
    "BayerBG8",
    "Confidence8",
];

/// Formats with 10 bits per component.
pub const COMPONENT_10BIT_FORMATS: &[&str] = &[
    "Mono10",
    "RGB10",
    "RGBa10",
    "BGR10",
    "BGRa10",
    "BayerGR10",
    "BayerGB10",
    "BayerRG10",
    "BayerBG10",
];

/// Formats with 12 bits per component.
pub const COMPONENT_12BIT_FORMATS: &[&str] = &[
    "Mono12",
    "RGB12",
    "RGBa12",
    "BGR12",
    "BGRa12",
    "BayerGR12",
    "BayerGB12",
    "BayerRG12",
    "BayerBG12",
];

/// Formats with 14 bits per component.
pub const COMPONENT_14BIT_FORMATS: &[&str] = &["Mono14", "RGB14", "RGBa14", "BGR14", "BGRa14"];

/// Formats with 16 bits per component.
pub const COMPONENT_16BIT_FORMATS: &[&str] = &[
    "Mono16",
    "RGB16",
    "RGBa16",
    "BayerGR16",
    "BayerRG16",
    "BayerGB16",
    "BayerBG16",
    "Coord3D_A16",
    "Coord3D_B16",
    "Coord3D_C16",
    "Coord3D_ABC16",
    "Coord3D_ABC16_Planar",
    "Coord3D_AC16",
    "Coord3D_AC16_Planar",
    "Confidence16",
];

/// Every family with its bit width, narrowest first.
pub const COMPONENT_FAMILIES: &[(u32, &[&str])] = &[
    (8, COMPONENT_8BIT_FORMATS),
    (10, COMPONENT_10BIT_FORMATS),
    (12, COMPONENT_12BIT_FORMATS),
    (14, COMPONENT_14BIT_FORMATS),
    (16, COMPONENT_16BIT_FORMATS),
];

/// Bits per component of `symbolic`, if it belongs to one of the families.
pub fn bits_per_component(symbolic: &str) -> Option<u32> {
    COMPONENT_FAMILIES
        .iter()
        .find(|(_, names)| names.contains(&symbolic))
        .map(|(bits, _)| *bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn families_are_disjoint() {
        for (x, (_, left)) in COMPONENT_FAMILIES.iter().enumerate() {
            for (_, right) in &COMPONENT_FAMILIES[x + 1..] {
                for name in left.iter() {
                    assert!(!right.contains(name), "{name} is in two families");
                }
            }
        }
    }

    #[test]
    fn family_members_agree_with_catalog() {
        let registry = FormatRegistry::standard();
        for (bits, names) in COMPONENT_FAMILIES {
            for name in names.iter() {
                let descriptor = registry.resolve_by_name(name).unwrap();
                assert_eq!(descriptor.bits_per_component(), *bits, "{name}");
            }
        }
    }

    #[rstest]
    #[case("Confidence8", Some(8))]
    #[case("BGRa10", Some(10))]
    #[case("BayerBG12", Some(12))]
    #[case("RGBa14", Some(14))]
    #[case("Coord3D_AC16_Planar", Some(16))]
    #[case("BGR16", None)]
    #[case("Mono12p", None)]
    #[case("Coord3D_A32f", None)]
    fn bits_per_component_by_name(#[case] name: &str, #[case] expected: Option<u32>) {
        assert_eq!(bits_per_component(name), expected);
    }
}
