//! Frame stream carrier and frame sequence I/O.
//!
//! A video is handled as an ordered stream of [`FramePlane`](crate::media::FramePlane)s.
//! Every frame gets the very same payload, there is no splitting across frames.

mod carrier;
mod frame_sequence;

pub use carrier::{EncryptStream, StreamReport, VideoCarrier, FRAME_SEPARATOR};
pub use frame_sequence::{FrameSequence, FrameSequenceWriter};
