//! # PlaneStego Core API
//!
//! Hides a text message in exactly one color channel of an image, or of every
//! frame of a video, by overwriting that channel's samples with the message
//! bytes. The other channels are left as they are.
//!
//! - [`PlaneCodec`][codec] maps bytes to a plane of samples and back
//! - [`ImageCarrier`][img] applies it to a single frame
//! - [`VideoCarrier`][vid] applies it to a stream of frames
//!
//! There is no encryption involved, and a lossy re-encoding of the carrier
//! (JPEG, video codecs) destroys the hidden message. Carriers are therefore
//! always written as PNG.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use planestego_core::media::{Channel, CodecOptions, FramePlane, Persist};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! FramePlane::from_fn(8, 8, |row, col| [row as u8, col as u8, 0])
//!     .save_as(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! planestego_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_media(&carrier)
//!     .with_options(CodecOptions::default().with_channel(Channel::Red))
//!     .with_output(temp_dir.path().join("image-with-a-message-inside.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = planestego_core::api::unveil::prepare()
//!     .from_secret_media(temp_dir.path().join("image-with-a-message-inside.png"))
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(message, "Hello, World!");
//! ```
//!
//! [codec]: ./codec/struct.PlaneCodec.html
//! [img]: ./media/image/struct.ImageCarrier.html
//! [vid]: ./media/video/struct.VideoCarrier.html

#![warn(clippy::redundant_else)]

pub mod api;
pub mod codec;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;

pub use crate::codec::{CapacityExceeded, PlaneCodec};
pub use crate::error::PlaneStegoError;
pub use crate::media::image::ImageCarrier;
pub use crate::media::video::VideoCarrier;
pub use crate::media::{Channel, CodecOptions, FramePlane, SampleGrid};
pub use crate::result::Result;
