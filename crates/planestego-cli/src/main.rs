use clap::Parser;

use planestego_core::CodecOptions;

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub type CliResult<T> = planestego_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = CodecOptions::default()
        .with_channel(args.channel)
        .with_pad(args.pad_byte);

    match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Unveil(unveil) => unveil.run(options),
        Commands::UnveilRaw(unveil_raw) => unveil_raw.run(options),
    }
}
