use clap::{Parser, Subcommand};
use planestego_core::Channel;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Color channel that carries the message: b, g or r
    #[arg(short, long, global = true, default_value = "r")]
    pub channel: Channel,

    /// Experimental: byte that pads the plane behind the message
    #[arg(long = "x-pad-byte", global = true, default_value = "0")]
    pub pad_byte: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
}
