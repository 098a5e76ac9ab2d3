mod channel;
pub mod codec_options;
mod frame;
mod grid;
pub mod image;
mod types;
pub mod video;

use std::path::Path;

pub use channel::Channel;
pub use codec_options::CodecOptions;
pub use frame::{FramePlane, MIN_CHANNELS};
pub use grid::SampleGrid;
pub use types::*;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
