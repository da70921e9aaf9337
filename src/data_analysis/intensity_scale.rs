// src/data_analysis/intensity_scale.rs

use ndarray::Array2;

use crate::constants::{DEFAULT_INTENSITY_MAX, DEFAULT_INTENSITY_MIN};

/// Display value range of a range image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityRange {
    pub min: f64,
    pub max: f64,
}

impl IntensityRange {
    /// Fixed range used for the ground mask and as fallback.
    pub const UNIT: IntensityRange = IntensityRange {
        min: DEFAULT_INTENSITY_MIN,
        max: DEFAULT_INTENSITY_MAX,
    };

    /// Bounds from the returns of a range image.
    ///
    /// Zero cells mean "no return" and do not pull the lower bound down: `min`
    /// is the smallest strictly positive value and `max` the largest value.
    /// NaN cells are ignored. With no positive cell the range is `[0, 1]`.
    pub fn from_range_image(range: &Array2<f64>) -> Self {
        let (min_positive, max_value) = range.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min_p, max_v), &v| {
                let min_p = if v > 0.0 { min_p.min(v) } else { min_p };
                (min_p, max_v.max(v))
            },
        );

        if min_positive.is_finite() {
            IntensityRange {
                min: min_positive,
                max: max_value,
            }
        } else {
            Self::UNIT
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` inside the range, clamped to [0, 1].
    pub fn normalize(&self, value: f64) -> f64 {
        // A collapsed span maps everything to the bottom of the scale
        let span = self.span();
        if span.abs() < 1e-12 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// True when every mask cell is exactly 0 or 1.
pub fn mask_is_binary(mask: &Array2<f64>) -> bool {
    mask.iter().all(|&v| v == 0.0 || v == 1.0)
}
