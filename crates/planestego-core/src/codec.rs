//! Byte payload to sample plane mapping.
//!
//! A payload is written one byte per cell, row-major, starting at the top left
//! cell. Cells that are not covered by the payload keep the pad byte, and the
//! trailing run of pad bytes is dropped again when decoding:
//!
//! ```text
//!  payload "hi!" into a 2x3 plane, pad 0x00
//!
//!  | 'h' | 'i' | '!' |
//!  | 0x0 | 0x0 | 0x0 |
//! ```
//!
//! Payloads longer than the plane are cut at `height * width` bytes; the
//! overflow is reported as [`CapacityExceeded`] instead of an error.

use log::warn;

use crate::media::SampleGrid;
use crate::{PlaneStegoError, Result};

/// Pad byte used when nothing else is configured
pub const DEFAULT_PAD: u8 = 0x00;

/// Pad byte of the space padded variant
pub const SPACE_PAD: u8 = b' ';

/// The payload did not fit into the plane and has been truncated
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CapacityExceeded {
    /// cells available in the plane
    pub capacity: usize,
    /// bytes the caller asked to hide
    pub payload_len: usize,
}

impl CapacityExceeded {
    /// number of payload bytes that have been dropped
    pub fn dropped(&self) -> usize {
        self.payload_len - self.capacity
    }
}

/// A rendered plane together with its capacity report
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Encoded {
    pub grid: SampleGrid,
    pub overflow: Option<CapacityExceeded>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PlaneCodec {
    pad: u8,
}

impl Default for PlaneCodec {
    fn default() -> Self {
        Self::new(DEFAULT_PAD)
    }
}

impl PlaneCodec {
    pub fn new(pad: u8) -> Self {
        Self { pad }
    }

    pub fn pad(&self) -> u8 {
        self.pad
    }

    /// renders `payload` into a `height` x `width` grid
    pub fn encode(&self, payload: &[u8], height: usize, width: usize) -> Encoded {
        let mut grid = SampleGrid::filled(height, width, self.pad);
        let capacity = grid.capacity();
        let written = payload.len().min(capacity);

        grid.samples_mut()[..written].copy_from_slice(&payload[..written]);

        let overflow = (payload.len() > capacity).then(|| {
            let overflow = CapacityExceeded {
                capacity,
                payload_len: payload.len(),
            };
            warn!(
                "Payload of {} bytes exceeds the plane capacity of {} bytes ({height}x{width}), {} bytes dropped",
                overflow.payload_len,
                overflow.capacity,
                overflow.dropped()
            );
            overflow
        });

        Encoded { grid, overflow }
    }

    /// all cells row-major, without the trailing run of pad bytes
    pub fn decode_bytes<'g>(&self, grid: &'g SampleGrid) -> &'g [u8] {
        let samples = grid.samples();
        let end = samples
            .iter()
            .rposition(|b| *b != self.pad)
            .map_or(0, |last| last + 1);

        &samples[..end]
    }

    /// decodes the plane as UTF-8 text, invalid bytes are an [`PlaneStegoError::EncodingError`]
    pub fn decode(&self, grid: &SampleGrid) -> Result<String> {
        let bytes = self.decode_bytes(grid);
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| PlaneStegoError::EncodingError {
                offset: e.valid_up_to(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_an_exactly_fitting_payload() {
        let codec = PlaneCodec::default();
        let payload = "Hello World!";

        let encoded = codec.encode(payload.as_bytes(), 3, 4);

        assert_eq!(encoded.overflow, None);
        assert_eq!(encoded.grid.samples(), payload.as_bytes());
        assert_eq!(codec.decode(&encoded.grid).unwrap(), payload);
    }

    #[test]
    fn should_round_trip_a_payload_under_capacity() {
        let codec = PlaneCodec::default();

        let encoded = codec.encode("hi!".as_bytes(), 2, 3);

        assert_eq!(encoded.grid.samples(), &[b'h', b'i', b'!', 0, 0, 0]);
        assert_eq!(codec.decode(&encoded.grid).unwrap(), "hi!");
    }

    #[test]
    fn should_truncate_payloads_longer_than_the_plane() {
        let codec = PlaneCodec::default();
        let payload = b"abcdefghij";

        let encoded = codec.encode(payload, 2, 3);
        let expected = codec.encode(&payload[..6], 2, 3);

        assert_eq!(encoded.grid, expected.grid);
        assert_eq!(
            encoded.overflow,
            Some(CapacityExceeded {
                capacity: 6,
                payload_len: 10
            })
        );
        assert_eq!(encoded.overflow.unwrap().dropped(), 4);
        assert_eq!(codec.decode(&encoded.grid).unwrap(), "abcdef");
    }

    #[test]
    fn should_render_an_empty_payload_as_all_pad() {
        for pad in [DEFAULT_PAD, SPACE_PAD] {
            let codec = PlaneCodec::new(pad);

            let encoded = codec.encode(b"", 3, 3);

            assert!(encoded.grid.samples().iter().all(|b| *b == pad));
            assert_eq!(codec.decode(&encoded.grid).unwrap(), "");
        }
    }

    #[test]
    fn should_accept_zero_area_planes() {
        let codec = PlaneCodec::default();

        let encoded = codec.encode(b"data", 0, 10);

        assert_eq!(encoded.grid.capacity(), 0);
        assert_eq!(encoded.overflow.map(|o| o.dropped()), Some(4));
        assert_eq!(codec.decode(&encoded.grid).unwrap(), "");
    }

    #[test]
    fn should_keep_embedded_pad_bytes_but_strip_trailing_ones() {
        let codec = PlaneCodec::new(SPACE_PAD);

        let encoded = codec.encode(b"a b  ", 2, 4);

        assert_eq!(codec.decode(&encoded.grid).unwrap(), "a b");
    }

    #[test]
    fn should_keep_multi_byte_characters_intact() {
        let codec = PlaneCodec::default();
        let payload = "grüße, 你好";

        let encoded = codec.encode(payload.as_bytes(), 4, 4);

        assert_eq!(codec.decode(&encoded.grid).unwrap(), payload);
    }

    #[test]
    fn should_report_the_offset_of_invalid_utf8() {
        let codec = PlaneCodec::default();
        let grid = SampleGrid::from_samples(1, 4, vec![b'o', b'k', 0xFF, b'!']).unwrap();

        match codec.decode(&grid) {
            Err(PlaneStegoError::EncodingError { offset }) => assert_eq!(offset, 2),
            other => panic!("unexpected result {other:?}"),
        }
        assert_eq!(codec.decode_bytes(&grid), &[b'o', b'k', 0xFF, b'!']);
    }

    #[test]
    fn should_fail_on_a_character_cut_by_truncation() {
        let codec = PlaneCodec::default();

        // 'ü' is 2 bytes wide, only its first byte fits
        let encoded = codec.encode("aü".as_bytes(), 1, 2);

        match codec.decode(&encoded.grid) {
            Err(PlaneStegoError::EncodingError { offset }) => assert_eq!(offset, 1),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn should_decode_deterministically() {
        let codec = PlaneCodec::default();
        let encoded = codec.encode(b"same same", 3, 5);

        let first = codec.decode(&encoded.grid).unwrap();
        let second = codec.decode(&encoded.grid).unwrap();

        assert_eq!(first, second);
        assert_eq!(codec.decode_bytes(&encoded.grid), first.as_bytes());
    }
}
