use crate::codec::{PlaneCodec, DEFAULT_PAD};
use crate::media::Channel;

/// Codec configuration shared by the image and the video carrier
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CodecOptions {
    /// The color channel whose plane is overwritten with the payload.
    pub channel: Channel,

    /// Fills all cells behind the payload and is stripped from the end when unveiling.
    /// Both sides have to agree on it, a payload that itself ends with this byte loses that end.
    pub pad: u8,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            channel: Channel::Red,
            pad: DEFAULT_PAD,
        }
    }
}

impl CodecOptions {
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_pad(mut self, pad: u8) -> Self {
        self.pad = pad;
        self
    }

    pub fn codec(&self) -> PlaneCodec {
        PlaneCodec::new(self.pad)
    }
}
