/// A single 8-bit plane of `height` rows by `width` columns, stored row-major.
///
/// Produced by [`PlaneCodec::encode`](crate::codec::PlaneCodec::encode) and
/// by slicing one channel out of a [`FramePlane`](super::FramePlane).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SampleGrid {
    height: usize,
    width: usize,
    samples: Vec<u8>,
}

impl SampleGrid {
    /// a grid with every cell set to `fill`
    pub fn filled(height: usize, width: usize, fill: u8) -> Self {
        Self {
            height,
            width,
            samples: vec![fill; height * width],
        }
    }

    /// wraps row-major samples, `None` if the length does not match the shape
    pub fn from_samples(height: usize, width: usize, samples: Vec<u8>) -> Option<Self> {
        (samples.len() == height * width).then_some(Self {
            height,
            width,
            samples,
        })
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

    /// number of cells, which is the payload capacity in bytes
    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.samples.get(row * self.width + col).copied()
    }

    /// all cells in row-major order
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub(crate) fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_address_cells_row_major() {
        let grid = SampleGrid::from_samples(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();

        assert_eq!(grid.get(0, 2), Some(3));
        assert_eq!(grid.get(1, 0), Some(4));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn should_reject_samples_of_wrong_length() {
        assert!(SampleGrid::from_samples(2, 2, vec![0; 3]).is_none());
    }

    #[test]
    fn should_allow_zero_area() {
        let grid = SampleGrid::filled(0, 7, 0x20);
        assert_eq!(grid.capacity(), 0);
        assert!(grid.samples().is_empty());
    }
}
