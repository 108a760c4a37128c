use crate::error::CliError;
use crate::util::{lookup_format, parse_code};
use argh::FromArgs;
use pfnc_unpack_codec::{FrameGeometry, PackingScheme};
use pfnc_unpack_formats::{FormatRegistry, PixelFormatCode, PixelFormatDescriptor};

#[derive(FromArgs, Debug)]
/// Show a pixel format and the fields of its code
#[argh(subcommand, name = "inspect")]
pub struct InspectCmd {
    /// symbolic name, e.g. Mono10p
    #[argh(option)]
    pub name: Option<String>,

    /// numeric code, hex (0x...) or decimal
    #[argh(option, from_str_fn(parse_code))]
    pub code: Option<u32>,
}

pub fn handle_inspect_command(cmd: InspectCmd) -> Result<(), Box<dyn std::error::Error>> {
    let registry = FormatRegistry::standard();
    let descriptor = match (&cmd.name, cmd.code) {
        (Some(name), _) => lookup_format(name)?,
        (None, Some(code)) => {
            print_code_fields(PixelFormatCode::new(code));
            registry.lookup_code(code).map_err(CliError::from)?
        }
        (None, None) => return Err(CliError::MissingQuery.into()),
    };

    print_descriptor(descriptor);
    if cmd.name.is_some() {
        print_code_fields(descriptor.pfnc_code());
    }
    Ok(())
}

fn print_descriptor(descriptor: &PixelFormatDescriptor) {
    let storage = descriptor.storage();
    println!("Format:              {}", descriptor.symbolic());
    println!("Code:                {:#010x}", descriptor.code());
    println!("Layout:              {}", descriptor.layout());
    println!("Components:          {}", descriptor.component_count());
    let spp = descriptor.samples_per_pixel();
    println!("Samples per pixel:   {}/{}", spp.samples, spp.pixels);
    println!("Bits per component:  {}", descriptor.bits_per_component());
    println!("Logical bit depth:   {}", descriptor.logical_bit_depth());
    println!("Unpacked storage:    {}", storage.unpacked());
    println!("Packed storage:      {}", storage.packed());
    println!("Signed:              {}", descriptor.is_signed());
    println!("Planar:              {}", descriptor.is_planar());
    if let Some(order) = descriptor.channel_order() {
        println!("Channel order:       {order:?}");
    }

    match PackingScheme::for_descriptor(descriptor) {
        Some(scheme) if scheme.is_packed() => println!(
            "Packing:             {} samples of {} bits per {} bytes",
            scheme.samples_per_group(),
            scheme.sample_bits(),
            scheme.group_bytes()
        ),
        Some(_) => println!("Packing:             none"),
        None => println!("Packing:             unsupported"),
    }
    if let Ok(geometry) = FrameGeometry::new(descriptor, 640, 480) {
        println!("640x480 frame:       {} bytes", geometry.frame_bytes());
    }
}

fn print_code_fields(code: PixelFormatCode) {
    println!("Code fields:");
    println!("  custom:            {}", code.custom());
    match code.component_class() {
        Some(class) => println!("  component class:   {class:?}"),
        None => println!("  component class:   invalid ({:#04x})", code.component_class_raw()),
    }
    println!("  effective size:    {} bits", code.effective_size_bits());
    println!("  pixel id:          {:#06x}", code.pixel_id());
}
