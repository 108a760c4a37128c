#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Inspect PFNC pixel formats and unpack raw camera buffers
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Formats(commands::formats::FormatsCmd),
    Inspect(commands::inspect::InspectCmd),
    Unpack(commands::unpack::UnpackCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Formats(cmd) => {
            commands::formats::handle_formats_command(cmd)?;
        }
        Commands::Inspect(cmd) => {
            commands::inspect::handle_inspect_command(cmd)?;
        }
        Commands::Unpack(cmd) => {
            commands::unpack::handle_unpack_command(cmd)?;
        }
    }

    Ok(())
}
