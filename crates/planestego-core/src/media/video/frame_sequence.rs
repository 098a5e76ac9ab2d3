use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::media::image::{is_image_extension, load_image, save_image};
use crate::media::FramePlane;
use crate::{PlaneStegoError, Result};

/// A video stored as a directory of still frames, ordered by file name
#[derive(Debug, Clone)]
pub struct FrameSequence {
    paths: Vec<PathBuf>,
}

impl FrameSequence {
    pub fn open(dir: &Path) -> Result<Self> {
        let mut paths = fs::read_dir(dir)
            .map_err(|source| PlaneStegoError::ReadError { source })?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|source| PlaneStegoError::ReadError { source })?;
        paths.retain(|p| p.is_file() && is_image_extension(p));
        paths.sort();
        debug!("Found {} frames in {dir:?}", paths.len());

        Ok(Self { paths })
    }

    /// number of frame files, some of them might still fail to load
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// loads the frames one by one, a frame that cannot be decoded is an `Err` item
    pub fn frames(&self) -> impl Iterator<Item = Result<FramePlane>> + '_ {
        self.paths.iter().map(|p| load_image(p))
    }
}

/// Writes frames as `frame_000000.png`, `frame_000001.png`, ... into a directory
#[derive(Debug)]
pub struct FrameSequenceWriter {
    dir: PathBuf,
    written: usize,
}

impl FrameSequenceWriter {
    /// creates the target directory if needed, a directory that holds frames already is refused
    pub fn create(dir: &Path) -> Result<Self> {
        if dir.is_dir() && !FrameSequence::open(dir)?.is_empty() {
            error!("Refusing to write frames into {dir:?}, it holds frames already");
            return Err(PlaneStegoError::TargetNotEmpty(dir.to_path_buf()));
        }
        fs::create_dir_all(dir).map_err(|source| PlaneStegoError::WriteError { source })?;

        Ok(Self {
            dir: dir.to_path_buf(),
            written: 0,
        })
    }

    pub fn write_frame(&mut self, frame: &FramePlane) -> Result<PathBuf> {
        let path = self.frame_path(self.written);
        save_image(&path, frame)?;
        self.written += 1;

        Ok(path)
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// removes all frames written so far, the directory itself is kept
    pub fn discard(self) -> Result<()> {
        for index in 0..self.written {
            fs::remove_file(self.frame_path(index))
                .map_err(|source| PlaneStegoError::WriteError { source })?;
        }
        debug!("Removed {} frames from {:?}", self.written, self.dir);

        Ok(())
    }

    fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("frame_{index:06}.png"))
    }
}
