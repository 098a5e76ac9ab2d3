use log::{debug, warn};

use crate::codec::CapacityExceeded;
use crate::media::image::ImageCarrier;
use crate::media::{Channel, CodecOptions, FramePlane, SampleGrid};
use crate::{PlaneStegoError, Result};

/// Put between the texts unveiled from consecutive frames
pub const FRAME_SEPARATOR: char = ' ';

/// Hides text in every frame of a stream and unveils it frame by frame
///
/// Frame sources are iterators over `Result<FramePlane>`. An `Err` item is a
/// frame that could not be read; it is skipped, counted and logged, and never
/// ends the stream. Frames must all share the dimensions of the first readable
/// frame, otherwise the stream fails with [`PlaneStegoError::DimensionMismatch`].
///
/// Note that unveiling a whole stream does not give back the payload once:
/// every frame carries its own copy, so three frames hiding `"hi"` unveil as
/// `"hi hi hi"`. Use [`VideoCarrier::decrypt_first_frame`] for a single copy.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct VideoCarrier {
    image: ImageCarrier,
}

/// Outcome of unveiling a whole stream
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct StreamReport {
    /// per frame texts joined by [`FRAME_SEPARATOR`]
    pub text: String,
    /// frames that have been decoded
    pub frames: usize,
    /// frames that could not be read
    pub skipped: usize,
}

impl VideoCarrier {
    pub fn new(options: CodecOptions) -> Self {
        Self {
            image: ImageCarrier::new(options),
        }
    }

    pub fn channel(&self) -> Channel {
        self.image.channel()
    }

    /// lazily hides `payload` in each readable frame of `frames`
    pub fn encrypt_stream<I>(&self, frames: I, payload: &[u8]) -> EncryptStream<I::IntoIter>
    where
        I: IntoIterator<Item = Result<FramePlane>>,
    {
        EncryptStream {
            frames: frames.into_iter(),
            carrier: self.image,
            payload: payload.to_vec(),
            grid: None,
            overflow: None,
            read: 0,
            skipped: 0,
            failed: false,
        }
    }

    /// unveils every readable frame and joins the texts in frame order
    pub fn decrypt_stream<I>(&self, frames: I) -> Result<String>
    where
        I: IntoIterator<Item = Result<FramePlane>>,
    {
        self.decrypt_stream_report(frames).map(|report| report.text)
    }

    pub fn decrypt_stream_report<I>(&self, frames: I) -> Result<StreamReport>
    where
        I: IntoIterator<Item = Result<FramePlane>>,
    {
        let mut report = StreamReport::default();
        let mut dimensions = None;

        for (index, read) in frames.into_iter().enumerate() {
            let frame = match read {
                Ok(frame) => frame,
                Err(e) => {
                    warn!("Skipping frame #{index}, it could not be read: {e}");
                    report.skipped += 1;
                    continue;
                }
            };
            let expected = *dimensions.get_or_insert(frame.dimensions());
            if frame.dimensions() != expected {
                return Err(PlaneStegoError::DimensionMismatch {
                    expected,
                    actual: frame.dimensions(),
                });
            }

            report.text.push_str(&self.image.extract(&frame)?);
            report.text.push(FRAME_SEPARATOR);
            report.frames += 1;
            debug!("Unveiled frame #{index}");
        }

        let pad = self.image.codec().pad();
        let end = report
            .text
            .trim_end_matches(|c: char| c.is_whitespace() || (pad.is_ascii() && c == pad as char))
            .len();
        report.text.truncate(end);

        Ok(report)
    }

    /// unveils the first readable frame only, which is the payload as it was hidden
    pub fn decrypt_first_frame<I>(&self, frames: I) -> Result<String>
    where
        I: IntoIterator<Item = Result<FramePlane>>,
    {
        for (index, read) in frames.into_iter().enumerate() {
            match read {
                Ok(frame) => return self.image.extract(&frame),
                Err(e) => warn!("Skipping frame #{index}, it could not be read: {e}"),
            }
        }

        Err(PlaneStegoError::NoFrames)
    }

    /// raw bytes of the first readable frame, no text interpretation
    pub fn extract_first_frame_bytes<I>(&self, frames: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = Result<FramePlane>>,
    {
        for (index, read) in frames.into_iter().enumerate() {
            match read {
                Ok(frame) => return Ok(self.image.extract_bytes(&frame)),
                Err(e) => warn!("Skipping frame #{index}, it could not be read: {e}"),
            }
        }

        Err(PlaneStegoError::NoFrames)
    }
}

/// Single pass stream of frames carrying the payload, see [`VideoCarrier::encrypt_stream`]
///
/// The payload is rendered once, with the dimensions of the first readable
/// frame, and the same plane goes into every frame.
pub struct EncryptStream<I> {
    frames: I,
    carrier: ImageCarrier,
    payload: Vec<u8>,
    grid: Option<SampleGrid>,
    overflow: Option<CapacityExceeded>,
    read: usize,
    skipped: usize,
    failed: bool,
}

impl<I> EncryptStream<I> {
    /// frames that could not be read so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// set once the first frame has been seen and the payload did not fit
    pub fn overflow(&self) -> Option<CapacityExceeded> {
        self.overflow
    }
}

impl<I> Iterator for EncryptStream<I>
where
    I: Iterator<Item = Result<FramePlane>>,
{
    type Item = Result<FramePlane>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let read = self.frames.next()?;
            let index = self.read;
            self.read += 1;

            let frame = match read {
                Ok(frame) => frame,
                Err(e) => {
                    warn!("Skipping frame #{index}, it could not be read: {e}");
                    self.skipped += 1;
                    continue;
                }
            };

            let (height, width) = frame.dimensions();
            let (carrier, payload, overflow) = (&self.carrier, &self.payload, &mut self.overflow);
            let grid = &*self.grid.get_or_insert_with(|| {
                let encoded = carrier.codec().encode(payload, height, width);
                *overflow = encoded.overflow;
                encoded.grid
            });

            if frame.dimensions() != grid.dimensions() {
                self.failed = true;
                return Some(Err(PlaneStegoError::DimensionMismatch {
                    expected: grid.dimensions(),
                    actual: frame.dimensions(),
                }));
            }

            debug!("Hiding payload in frame #{index}");
            let result = self.carrier.embed_grid(&frame, grid);
            self.failed = result.is_err();
            return Some(result);
        }
    }
}
