use crate::error::CliError;
use pfnc_unpack_formats::{ComponentLayout, FormatError, FormatRegistry, PixelFormatDescriptor};

/// Resolves a format name in the standard registry, naming it in the error if unknown.
pub fn lookup_format(name: &str) -> Result<&'static PixelFormatDescriptor, CliError> {
    FormatRegistry::standard()
        .lookup_name(name)
        .map_err(|e| match e {
            FormatError::UnknownFormat => CliError::UnknownFormatName(name.to_owned()),
            e => e.into(),
        })
}

/// Parses a pixel format code given as `0x` prefixed hex or decimal.
pub fn parse_code(value: &str) -> Result<u32, String> {
    let trimmed = value.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|e| format!("Invalid pixel format code '{value}': {e}"))
}

/// Parses a component layout by its short name, e.g. `lmn444`.
pub fn parse_layout(value: &str) -> Result<ComponentLayout, String> {
    ComponentLayout::all_values()
        .iter()
        .copied()
        .find(|layout| layout.name().eq_ignore_ascii_case(value))
        .ok_or_else(|| {
            let valid: Vec<_> = ComponentLayout::all_values().iter().map(|l| l.name()).collect();
            format!("Unknown layout: {value}. Valid options: {}", valid.join(", "))
        })
}
