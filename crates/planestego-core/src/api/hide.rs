use std::path::{Path, PathBuf};

use crate::media::{CodecOptions, HideReport, Media};
use crate::PlaneStegoError;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    media: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// An image file or a directory of video frames
    pub fn with_media<A: AsRef<Path>>(mut self, media: A) -> Self {
        self.media = Some(media.as_ref().to_path_buf());
        self
    }

    /// A PNG file for images, a directory for videos
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<HideReport, PlaneStegoError> {
        let Some(message) = self.message else {
            return Err(PlaneStegoError::MissingMessage);
        };
        let Some(media) = self.media else {
            return Err(PlaneStegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(PlaneStegoError::TargetNotSet);
        };

        Media::from_path(&media)?.hide_and_save(message.as_bytes(), &self.options, &output)
    }
}
