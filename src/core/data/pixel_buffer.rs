use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn dimensions_to_buffer_size(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(BYTES_PER_PIXEL)
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    SizeOverflow { width: u32, height: u32 },
    AllocationFailed { bytes: usize },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeOverflow { width, height } => {
                write!(
                    f,
                    "pixel buffer for {}x{} pixels exceeds the addressable size",
                    width, height
                )
            }
            Self::AllocationFailed { bytes } => {
                write!(f, "failed to allocate {} bytes for pixel buffer", bytes)
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB bytes, pixel `(x, y)` at offset `(y * width + x) * 3`.
#[derive(Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Allocates a zeroed buffer, reporting allocation failure instead of
    /// aborting the process.
    pub fn try_new(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        let total_bytes = dimensions_to_buffer_size(width, height)
            .ok_or(PixelBufferError::SizeOverflow { width, height })?;

        let mut buffer = PixelBufferData::new();
        buffer
            .try_reserve_exact(total_bytes)
            .map_err(|_| PixelBufferError::AllocationFailed { bytes: total_bytes })?;
        buffer.resize(total_bytes, 0);

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn row_size(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if pixel.x >= self.width || pixel.y >= self.height {
            return None;
        }

        let index = (pixel.y as usize * self.width as usize + pixel.x as usize) * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_allocates_three_bytes_per_pixel() {
        let buffer = PixelBuffer::try_new(10, 5).unwrap();

        assert_eq!(buffer.buffer_size(), 150);
        assert_eq!(buffer.row_size(), 30);
        assert!(buffer.buffer().iter().all(|&byte| byte == 0));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_try_new_reports_size_overflow() {
        let result = PixelBuffer::try_new(u32::MAX, u32::MAX);

        assert_eq!(
            result.map(|buffer| buffer.buffer_size()),
            Err(PixelBufferError::SizeOverflow {
                width: u32::MAX,
                height: u32::MAX
            })
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_try_new_reports_allocation_failure() {
        // fits in usize but not in isize, so the allocator is never asked
        let result = PixelBuffer::try_new(u32::MAX, u32::MAX / 4);

        assert!(matches!(
            result,
            Err(PixelBufferError::AllocationFailed { .. })
        ));
    }

    #[test]
    fn test_pixel_reads_row_major_offsets() {
        let mut buffer = PixelBuffer::try_new(4, 3).unwrap();
        let offset = (2 * 4 + 1) * BYTES_PER_PIXEL;
        buffer.buffer_mut()[offset..offset + 3].copy_from_slice(&[1, 2, 3]);

        assert_eq!(
            buffer.pixel(Point { x: 1, y: 2 }),
            Some(Colour { r: 1, g: 2, b: 3 })
        );
        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }), Some(Colour::BLACK));
    }

    #[test]
    fn test_pixel_outside_bounds_is_none() {
        let buffer = PixelBuffer::try_new(4, 3).unwrap();

        assert_eq!(buffer.pixel(Point { x: 4, y: 0 }), None);
        assert_eq!(buffer.pixel(Point { x: 0, y: 3 }), None);
    }

    #[test]
    fn test_into_data_hands_over_bytes() {
        let buffer = PixelBuffer::try_new(2, 2).unwrap();

        assert_eq!(buffer.into_data().len(), 12);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            PixelBufferError::AllocationFailed { bytes: 12 }.to_string(),
            "failed to allocate 12 bytes for pixel buffer"
        );
    }
}
