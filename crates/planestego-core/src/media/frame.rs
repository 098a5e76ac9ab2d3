use crate::media::{Channel, SampleGrid};
use crate::{PlaneStegoError, Result};

/// Minimum number of interleaved channels a frame has to carry (blue, green, red).
pub const MIN_CHANNELS: usize = 3;

/// One image or video frame as interleaved 8-bit samples.
///
/// Layout is row-major, `channels` samples per pixel, in blue, green, red
/// order (plus any extra channels such as alpha after those).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FramePlane {
    height: usize,
    width: usize,
    channels: usize,
    data: Vec<u8>,
}

impl FramePlane {
    pub fn new(height: usize, width: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        let expected_len = height
            .checked_mul(width)
            .and_then(|pixels| pixels.checked_mul(channels));
        if channels < MIN_CHANNELS || expected_len != Some(data.len()) {
            return Err(PlaneStegoError::InvalidFrameLayout {
                height,
                width,
                channels,
                len: data.len(),
            });
        }

        Ok(Self {
            height,
            width,
            channels,
            data,
        })
    }

    /// builds a 3 channel frame, `f(row, col)` returns the `[b, g, r]` samples of each pixel
    pub fn from_fn<F>(height: usize, width: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> [u8; 3],
    {
        let mut data = Vec::with_capacity(height * width * MIN_CHANNELS);
        for row in 0..height {
            for col in 0..width {
                data.extend_from_slice(&f(row, col));
            }
        }

        Self {
            height,
            width,
            channels: MIN_CHANNELS,
            data,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// (height, width)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn pixel(&self, row: usize, col: usize) -> Option<&[u8]> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let start = (row * self.width + col) * self.channels;
        self.data.get(start..start + self.channels)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// copies the samples of one channel out into a grid of the same dimensions
    pub fn channel_plane(&self, channel: Channel) -> SampleGrid {
        let samples = self
            .data
            .iter()
            .skip(channel.index())
            .step_by(self.channels)
            .copied()
            .collect();

        SampleGrid::from_samples(self.height, self.width, samples)
            .unwrap_or_else(|| SampleGrid::filled(self.height, self.width, 0))
    }

    /// overwrites one channel with `grid`, all other channels stay untouched
    pub fn replace_channel_plane(&mut self, channel: Channel, grid: &SampleGrid) -> Result<()> {
        if grid.dimensions() != self.dimensions() {
            return Err(PlaneStegoError::DimensionMismatch {
                expected: self.dimensions(),
                actual: grid.dimensions(),
            });
        }

        self.write_channel(channel, grid.samples());

        Ok(())
    }

    /// overwrites one channel row-major with `samples`, surplus samples are ignored
    pub(crate) fn write_channel(&mut self, channel: Channel, samples: &[u8]) {
        self.data
            .iter_mut()
            .skip(channel.index())
            .step_by(self.channels)
            .zip(samples)
            .for_each(|(sample, value)| *sample = *value);
    }
}
