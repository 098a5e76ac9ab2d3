use crate::codec::{CapacityExceeded, PlaneCodec};
use crate::media::{Channel, CodecOptions, FramePlane, SampleGrid};
use crate::Result;

/// A frame with a hidden payload, plus the report of what did not fit
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Embedded {
    pub frame: FramePlane,
    pub overflow: Option<CapacityExceeded>,
}

/// Hides text in, and unveils it from, one channel plane of a single frame
///
/// ## Example of usage
/// ```rust
/// use planestego_core::media::image::ImageCarrier;
/// use planestego_core::media::{Channel, CodecOptions, FramePlane};
///
/// let frame = FramePlane::from_fn(4, 4, |row, col| [row as u8, col as u8, 0x7F]);
/// let carrier = ImageCarrier::new(CodecOptions::default().with_channel(Channel::Green));
///
/// let secret = carrier.embed(&frame, "Hello World!".as_bytes()).frame;
///
/// assert_eq!(carrier.extract(&secret).unwrap(), "Hello World!");
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ImageCarrier {
    channel: Channel,
    codec: PlaneCodec,
}

impl Default for ImageCarrier {
    fn default() -> Self {
        Self::new(CodecOptions::default())
    }
}

impl ImageCarrier {
    pub fn new(options: CodecOptions) -> Self {
        Self {
            channel: options.channel,
            codec: options.codec(),
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn codec(&self) -> &PlaneCodec {
        &self.codec
    }

    /// returns a copy of `source` whose selected channel carries `payload`
    pub fn embed(&self, source: &FramePlane, payload: &[u8]) -> Embedded {
        let (height, width) = source.dimensions();
        let encoded = self.codec.encode(payload, height, width);
        let mut frame = source.clone();
        frame.write_channel(self.channel, encoded.grid.samples());

        Embedded {
            frame,
            overflow: encoded.overflow,
        }
    }

    /// like [`Self::embed`] but with a plane that has been rendered before
    pub fn embed_grid(&self, source: &FramePlane, grid: &SampleGrid) -> Result<FramePlane> {
        let mut frame = source.clone();
        frame.replace_channel_plane(self.channel, grid)?;

        Ok(frame)
    }

    /// unveils the text from the selected channel, trailing pad bytes stripped
    pub fn extract(&self, frame: &FramePlane) -> Result<String> {
        self.codec.decode(&frame.channel_plane(self.channel))
    }

    /// unveils the selected channel as plain bytes, trailing pad bytes stripped
    pub fn extract_bytes(&self, frame: &FramePlane) -> Vec<u8> {
        self.codec
            .decode_bytes(&frame.channel_plane(self.channel))
            .to_vec()
    }
}
