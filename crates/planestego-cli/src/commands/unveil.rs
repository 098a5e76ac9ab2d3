use std::fs;
use std::path::PathBuf;

use clap::Args;
use planestego_core::{CodecOptions, PlaneStegoError};

use crate::CliResult;

/// Unveils a text message from an image or a directory of frames
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Image, or directory of frames, that contains the message
    #[arg(short = 'i', long = "in", value_name = "media source", required = true)]
    pub media: PathBuf,

    /// Write the message to this file instead of printing it
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,

    /// For frame directories: unveil the first frame only instead of all copies
    #[arg(long)]
    pub first_frame: bool,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let message = planestego_core::commands::unveil(&self.media, self.first_frame, options)?;

        match self.output_file {
            Some(file) => {
                fs::write(file, message).map_err(|source| PlaneStegoError::WriteError { source })
            }
            None => {
                println!("{message}");
                Ok(())
            }
        }
    }
}
