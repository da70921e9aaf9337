// src/types.rs

use ndarray::Array2;

use crate::data_analysis::display_orientation::flip_rows;
use crate::data_analysis::intensity_scale::IntensityRange;
use crate::error::{ViewerError, ViewerResult};

/// A range image and its ground mask, as handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePair {
    pub range: Array2<f64>,
    pub mask: Array2<f64>,
}

impl FramePair {
    pub fn new(range: Array2<f64>, mask: Array2<f64>) -> Self {
        Self { range, mask }
    }

    /// Applies the display-only row reversal to both matrices together.
    pub fn oriented_for_display(self, flip: bool) -> Self {
        if flip {
            Self {
                range: flip_rows(&self.range),
                mask: flip_rows(&self.mask),
            }
        } else {
            self
        }
    }

    /// Fails when the range image and mask differ in dimensions.
    pub fn ensure_same_shape(&self, title: &str) -> ViewerResult<()> {
        if self.range.dim() != self.mask.dim() {
            return Err(ViewerError::ShapeMismatch {
                title: title.to_string(),
                range: self.range.dim(),
                mask: self.mask.dim(),
            });
        }
        Ok(())
    }

    /// (rows, cols) of the pair.
    pub fn dim(&self) -> (usize, usize) {
        self.range.dim()
    }
}

/// Everything needed to draw one test case.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedCase {
    pub title: String,
    pub frames: FramePair, // Display-oriented
    pub intensity: IntensityRange,
}

/// A rendered figure: packed RGB8 pixels, row-major, top row first.
#[derive(Clone)]
pub struct Figure {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl std::fmt::Debug for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Figure")
            .field("title", &self.title)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
