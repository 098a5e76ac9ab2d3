use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use crate::media::{CodecOptions, Media};
use crate::PlaneStegoError;

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilRawApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image, or directory of frames, that contains the data to be unveiled
    pub fn from_secret_media(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// This is the raw file where all data will be saved to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Dumps the channel plane, trailing pad bytes stripped, of an image or the first video frame
    pub fn execute(self) -> Result<(), PlaneStegoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(PlaneStegoError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(PlaneStegoError::TargetNotSet);
        };

        let content = Media::from_path(&secret_media)?.unveil_raw(&self.options)?;
        let mut destination_file =
            File::create(destination_file).map_err(|source| PlaneStegoError::WriteError { source })?;

        destination_file
            .write_all(content.as_slice())
            .map_err(|source| PlaneStegoError::WriteError { source })
    }
}
