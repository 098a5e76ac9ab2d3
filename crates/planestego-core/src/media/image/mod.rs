//! Still image carrier and the pixel I/O around it, based on the `image` crate.

mod carrier;

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::io::Reader;
use image::{ImageError, ImageFormat, RgbImage};
use log::error;

use crate::media::{FramePlane, Persist};
use crate::{PlaneStegoError, Result};

pub use carrier::{Embedded, ImageCarrier};

/// file extensions that are loaded as still images
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

pub(crate) fn is_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn is_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}

/// loads any image the `image` crate can decode as a blue, green, red frame,
/// the decoder follows the file content rather than its extension
pub fn load_image(path: &Path) -> Result<FramePlane> {
    let img = Reader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(ImageError::IoError)
        .and_then(|reader| reader.decode())
        .map_err(|e| {
            error!("Error loading image {path:?}: {e}");
            PlaneStegoError::InvalidImageMedia
        })?
        .to_rgb8();

    Ok(frame_from_rgb(&img))
}

/// stores a frame as PNG, `path` has to carry the `png` extension
pub fn save_image(path: &Path, frame: &FramePlane) -> Result<()> {
    if !is_png_extension(path) {
        error!("Refusing to write {path:?}, carriers are only written as png");
        return Err(PlaneStegoError::UnsupportedMedia);
    }
    let f = File::create(path).map_err(|e| {
        error!("Error creating file {path:?}: {e}");
        PlaneStegoError::WriteError { source: e }
    })?;
    let mut writer = BufWriter::new(f);
    save_to_writer(frame, &mut writer)?;
    writer
        .flush()
        .map_err(|source| PlaneStegoError::WriteError { source })
}

pub fn save_to_writer<W: Write + Seek>(frame: &FramePlane, mut writer: W) -> Result<()> {
    rgb_from_frame(frame)?
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|e| {
            error!("Error saving image: {e}");
            PlaneStegoError::ImageEncodingError
        })
}

impl Persist for FramePlane {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        save_image(file, self)
    }
}

pub(crate) fn frame_from_rgb(img: &RgbImage) -> FramePlane {
    let (width, height) = img.dimensions();
    FramePlane::from_fn(height as usize, width as usize, |row, col| {
        let [r, g, b] = img.get_pixel(col as u32, row as u32).0;
        [b, g, r]
    })
}

pub(crate) fn rgb_from_frame(frame: &FramePlane) -> Result<RgbImage> {
    let width = u32::try_from(frame.width()).map_err(|_| PlaneStegoError::ImageEncodingError)?;
    let height = u32::try_from(frame.height()).map_err(|_| PlaneStegoError::ImageEncodingError)?;
    let raw = frame
        .as_bytes()
        .chunks_exact(frame.channels())
        .flat_map(|px| [px[2], px[1], px[0]])
        .collect();

    RgbImage::from_raw(width, height, raw).ok_or(PlaneStegoError::ImageEncodingError)
}
