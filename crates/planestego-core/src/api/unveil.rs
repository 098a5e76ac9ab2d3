use std::path::{Path, PathBuf};

use crate::media::{CodecOptions, Media};
use crate::PlaneStegoError;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    first_frame_only: bool,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image, or directory of frames, that contains the text to be unveiled
    pub fn from_secret_media(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// For videos: unveil only the first readable frame instead of joining all of them
    pub fn first_frame_only(mut self, first_frame_only: bool) -> Self {
        self.first_frame_only = first_frame_only;
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<String, PlaneStegoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(PlaneStegoError::CarrierNotSet);
        };

        Media::from_path(&secret_media)?.unveil(&self.options, self.first_frame_only)
    }
}
