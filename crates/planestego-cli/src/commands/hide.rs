use std::path::PathBuf;

use clap::Args;
use dialoguer::Input;
use log::warn;
use planestego_core::{CodecOptions, PlaneStegoError};

use crate::CliResult;

/// Hides a text message in one color channel of an image or of every frame in a directory
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Image file, or directory of video frames, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media", required = true)]
    pub media: PathBuf,

    /// Final PNG image, or directory for the PNG frames
    #[arg(short = 'o', long = "out", value_name = "output", required = true)]
    pub write_to: PathBuf,

    /// A text message that will be hidden, asked for when omitted
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,

    /// Unveils the written output again and prints the message
    #[arg(long)]
    pub verify: bool,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let message = match self.message {
            Some(message) => message,
            None => ask_for_message()?,
        };

        let report =
            planestego_core::commands::hide(&self.media, &self.write_to, &message, options)?;
        if let Some(overflow) = report.overflow {
            warn!(
                "Message was cut to {} bytes, {} bytes did not fit",
                overflow.capacity,
                overflow.dropped()
            );
        }
        if report.skipped > 0 {
            warn!("{} frames could not be read and were left out", report.skipped);
        }

        if self.verify {
            let unveiled = planestego_core::commands::unveil(&self.write_to, true, options)?;
            println!("{unveiled}");
        }

        Ok(())
    }
}

fn ask_for_message() -> CliResult<String> {
    Input::<String>::new()
        .with_prompt("Your message")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| PlaneStegoError::ReadError {
            source: std::io::Error::new(std::io::ErrorKind::Other, e),
        })
}
