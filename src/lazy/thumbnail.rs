//! Decoded image scaled down to a card's image area.
//!
//! Each terminal cell shows two vertical pixels with the upper half block
//! (`▀`): foreground is the top pixel, background the bottom one.

use image::imageops::FilterType;

use crate::api::FetchError;

/// Target size in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailSize {
    pub cols: u16,
    pub rows: u16,
}

impl ThumbnailSize {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    fn pixel_dimensions(&self) -> (u32, u32) {
        (u32::from(self.cols), u32::from(self.rows) * 2)
    }
}

/// Colours of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfBlock {
    pub top: [u8; 3],
    pub bottom: [u8; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    size: ThumbnailSize,
    cells: Vec<HalfBlock>,
}

impl Thumbnail {
    /// Decode `bytes` (png, jpeg or gif) and crop-to-fill `size`.
    pub fn decode(bytes: &[u8], size: ThumbnailSize) -> Result<Self, FetchError> {
        if size.cols == 0 || size.rows == 0 {
            return Err(FetchError::Image(format!(
                "thumbnail area {}x{} is empty",
                size.cols, size.rows
            )));
        }

        let (width, height) = size.pixel_dimensions();
        let pixels = image::load_from_memory(bytes)?
            .resize_to_fill(width, height, FilterType::Triangle)
            .to_rgb8();

        let mut cells = Vec::with_capacity(usize::from(size.cols) * usize::from(size.rows));
        for row in 0..u32::from(size.rows) {
            for col in 0..width {
                cells.push(HalfBlock {
                    top: pixels.get_pixel(col, row * 2).0,
                    bottom: pixels.get_pixel(col, row * 2 + 1).0,
                });
            }
        }

        Ok(Self { size, cells })
    }

    pub fn size(&self) -> ThumbnailSize {
        self.size
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<HalfBlock> {
        if col >= self.size.cols || row >= self.size.rows {
            return None;
        }
        let index = usize::from(row) * usize::from(self.size.cols) + usize::from(col);
        self.cells.get(index).copied()
    }
}
