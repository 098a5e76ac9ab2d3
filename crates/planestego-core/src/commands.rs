use std::path::Path;

use crate::media::{CodecOptions, HideReport};
use crate::PlaneStegoError;

pub fn hide(
    media: &Path,
    write_to: &Path,
    message: &str,
    options: CodecOptions,
) -> Result<HideReport, PlaneStegoError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_media(media)
        .with_output(write_to)
        .with_message(message)
        .execute()
}

pub fn unveil(
    secret_media: &Path,
    first_frame_only: bool,
    options: CodecOptions,
) -> Result<String, PlaneStegoError> {
    crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_media(secret_media)
        .first_frame_only(first_frame_only)
        .execute()
}

/// unveil all raw data, no text interpretation is happening.
/// Just a binary dump of the channel plane without the trailing pad bytes.
pub fn unveil_raw(
    secret_media: &Path,
    destination_file: &Path,
    options: CodecOptions,
) -> Result<(), PlaneStegoError> {
    crate::api::unveil_raw::prepare()
        .with_options(options)
        .from_secret_media(secret_media)
        .into_raw_file(destination_file)
        .execute()
}
