use crate::util::parse_layout;
use argh::FromArgs;
use pfnc_unpack_formats::{ComponentLayout, FormatRegistry, PixelFormatDescriptor};

#[derive(FromArgs, Debug)]
/// List the pixel formats of the catalog
#[argh(subcommand, name = "formats")]
pub struct FormatsCmd {
    /// only list formats with this layout (mono, lmn444, lmn422, lmn411, lmno4444, lm44, bayer)
    #[argh(option, from_str_fn(parse_layout))]
    pub layout: Option<ComponentLayout>,
}

pub fn handle_formats_command(cmd: FormatsCmd) -> Result<(), Box<dyn std::error::Error>> {
    let registry = FormatRegistry::standard();
    println!(
        "{:<28} {:<12} {:<9} {:<7} {:>4} {:<8} {:<8}",
        "Name", "Code", "Layout", "Comps", "Bits", "Storage", "Packed"
    );

    let mut count = 0;
    for descriptor in registry.iter() {
        if cmd.layout.is_some_and(|layout| descriptor.layout() != layout) {
            continue;
        }
        println!("{}", format_row(descriptor));
        count += 1;
    }

    println!("\n{count} of {} formats", registry.len());
    Ok(())
}

fn format_row(descriptor: &PixelFormatDescriptor) -> String {
    format!(
        "{:<28} {:#010x}   {:<9} {:<7} {:>4} {:<8} {:<8}",
        descriptor.symbolic(),
        descriptor.code(),
        descriptor.layout().name(),
        descriptor.component_count().to_string(),
        descriptor.bits_per_component(),
        descriptor.storage().unpacked().name(),
        if descriptor.is_packed() { "yes" } else { "no" },
    )
}
