use std::path::Path;

use log::{debug, info, warn};

use crate::codec::CapacityExceeded;
use crate::media::image::{is_image_extension, load_image, ImageCarrier};
use crate::media::video::{FrameSequence, FrameSequenceWriter, VideoCarrier};
use crate::media::{CodecOptions, FramePlane, Persist};
use crate::{PlaneStegoError, Result};

/// a media container for steganography
#[derive(Debug)]
pub enum Media {
    Image(FramePlane),
    Video(FrameSequence),
}

/// What happened while hiding
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct HideReport {
    /// frames written to the target, 1 for an image
    pub frames: usize,
    /// frames of the source that could not be read
    pub skipped: usize,
    /// set when the payload has been truncated
    pub overflow: Option<CapacityExceeded>,
}

impl Media {
    pub fn from_image(frame: FramePlane) -> Self {
        Self::Image(frame)
    }

    pub fn from_video(frames: FrameSequence) -> Self {
        Self::Video(frames)
    }

    /// a directory is a video made of frame images, a file has to be an image
    pub fn from_path(path: &Path) -> Result<Self> {
        if path.is_dir() {
            return Ok(Self::Video(FrameSequence::open(path)?));
        }
        if is_image_extension(path) {
            return Ok(Self::Image(load_image(path)?));
        }

        Err(PlaneStegoError::UnsupportedMedia)
    }

    /// hides `payload` and writes the result to `target`,
    /// a PNG file for images or a directory of PNG frames for videos.
    ///
    /// A video target must not hold frames yet. When a frame fails on the way,
    /// the frames written before it are removed again.
    pub fn hide_and_save(
        &self,
        payload: &[u8],
        opts: &CodecOptions,
        target: &Path,
    ) -> Result<HideReport> {
        match self {
            Media::Image(frame) => {
                let mut embedded = ImageCarrier::new(*opts).embed(frame, payload);
                embedded.frame.save_as(target)?;
                info!(
                    "Hidden {} bytes in the {} channel of {target:?}",
                    payload.len(),
                    opts.channel
                );

                Ok(HideReport {
                    frames: 1,
                    skipped: 0,
                    overflow: embedded.overflow,
                })
            }
            Media::Video(frames) => {
                if frames.is_empty() {
                    return Err(PlaneStegoError::NoFrames);
                }

                let mut writer = FrameSequenceWriter::create(target)?;
                let mut stream = VideoCarrier::new(*opts).encrypt_stream(frames.frames(), payload);
                let written = stream.by_ref().try_for_each(|frame| -> Result<()> {
                    let path = writer.write_frame(&frame?)?;
                    debug!("Written frame {path:?}");
                    Ok(())
                });
                if let Err(e) = written {
                    warn!(
                        "Hiding in {target:?} failed, removing the {} frames written so far",
                        writer.written()
                    );
                    writer.discard()?;
                    return Err(e);
                }
                info!(
                    "Hidden {} bytes in the {} channel of {} frames in {target:?}",
                    payload.len(),
                    opts.channel,
                    writer.written()
                );

                Ok(HideReport {
                    frames: writer.written(),
                    skipped: stream.skipped(),
                    overflow: stream.overflow(),
                })
            }
        }
    }

    /// unveils the hidden text; for videos all frames are joined unless `first_frame_only`
    pub fn unveil(&self, opts: &CodecOptions, first_frame_only: bool) -> Result<String> {
        match self {
            Media::Image(frame) => ImageCarrier::new(*opts).extract(frame),
            Media::Video(frames) => {
                let carrier = VideoCarrier::new(*opts);
                if first_frame_only {
                    return carrier.decrypt_first_frame(frames.frames());
                }

                let report = carrier.decrypt_stream_report(frames.frames())?;
                if report.frames == 0 {
                    return Err(PlaneStegoError::NoFrames);
                }
                Ok(report.text)
            }
        }
    }

    /// the channel plane bytes without pad and without any text interpretation
    pub fn unveil_raw(&self, opts: &CodecOptions) -> Result<Vec<u8>> {
        match self {
            Media::Image(frame) => Ok(ImageCarrier::new(*opts).extract_bytes(frame)),
            Media::Video(frames) => {
                VideoCarrier::new(*opts).extract_first_frame_bytes(frames.frames())
            }
        }
    }
}
