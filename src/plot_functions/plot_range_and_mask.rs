// src/plot_functions/plot_range_and_mask.rs

use crate::constants::{
    COLOR_GROUND, COLOR_NON_GROUND, MASK_PANEL_TITLE, MASK_TICK_LABELS, RANGE_COLORBAR_LABEL,
    RANGE_PANEL_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL,
};
use crate::data_analysis::intensity_scale::IntensityRange;
use crate::error::ViewerResult;
use crate::plot_framework::{draw_figure, ColorScale, HeatmapPanel};
use crate::types::{Figure, FramePair};

/// Colour scale of the range image panel.
pub fn range_color_scale(intensity: IntensityRange) -> ColorScale {
    ColorScale::Continuous {
        range: intensity,
        label: RANGE_COLORBAR_LABEL,
    }
}

/// Fixed two-colour scale of the ground mask panel.
pub fn mask_color_scale() -> ColorScale {
    ColorScale::Binary {
        low: *COLOR_NON_GROUND,
        high: *COLOR_GROUND,
        labels: MASK_TICK_LABELS,
    }
}

/// Renders the range image (left) and ground mask (right) of one test case
/// into a single figure headed by `title`.
///
/// `frames` must already be in display orientation; the first row is drawn at the top.
pub fn plot_range_and_mask(
    title: &str,
    frames: &FramePair,
    intensity: IntensityRange,
) -> ViewerResult<Figure> {
    let panels = [
        HeatmapPanel {
            title: RANGE_PANEL_TITLE,
            values: &frames.range,
            scale: range_color_scale(intensity),
            x_label: X_AXIS_LABEL,
            y_label: Y_AXIS_LABEL,
        },
        HeatmapPanel {
            title: MASK_PANEL_TITLE,
            values: &frames.mask,
            scale: mask_color_scale(),
            x_label: X_AXIS_LABEL,
            y_label: Y_AXIS_LABEL,
        },
    ];

    let figure = draw_figure(title, &panels)?;
    tracing::debug!(
        title,
        width = figure.width,
        height = figure.height,
        "figure rendered"
    );
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot_framework::map_value_to_viridis;
    use ndarray::array;
    use plotters::style::RGBColor;

    fn pixel(figure: &Figure, x: u32, y: u32) -> RGBColor {
        let i = ((y * figure.width + x) * 3) as usize;
        RGBColor(figure.pixels[i], figure.pixels[i + 1], figure.pixels[i + 2])
    }

    #[test]
    fn test_first_row_drawn_at_top() {
        let frames = FramePair::new(
            array![[1.0, 2.0], [3.0, 4.0]],
            array![[0.0, 0.0], [1.0, 1.0]],
        );
        let intensity = IntensityRange { min: 1.0, max: 4.0 };
        let figure = plot_range_and_mask("orientation", &frames, intensity).unwrap();

        assert_eq!((figure.width, figure.height), (1100, 600));
        assert_eq!(figure.pixels.len(), 1100 * 600 * 3);

        // Mask panel: row 0 (non-ground) on top, row 1 (ground) below
        assert_eq!(pixel(&figure, 750, 120), *COLOR_NON_GROUND);
        assert_eq!(pixel(&figure, 750, 480), *COLOR_GROUND);

        // Mask colorbar: 0 at the bottom, 1 at the top
        assert_eq!(pixel(&figure, 974, 480), *COLOR_NON_GROUND);
        assert_eq!(pixel(&figure, 974, 150), *COLOR_GROUND);

        // Range panel: top-left cell is the minimum, bottom-right the maximum
        assert_eq!(pixel(&figure, 150, 120), map_value_to_viridis(0.0));
        assert_eq!(pixel(&figure, 370, 480), map_value_to_viridis(1.0));
    }

    #[test]
    fn test_mask_scale_labels() {
        match mask_color_scale() {
            ColorScale::Binary { labels, .. } => assert_eq!(labels, ["Non-ground", "Ground"]),
            other => panic!("unexpected scale {other:?}"),
        }
    }

    #[test]
    fn test_range_scale_carries_bounds() {
        let intensity = IntensityRange { min: 3.0, max: 7.0 };
        match range_color_scale(intensity) {
            ColorScale::Continuous { range, label } => {
                assert_eq!(range, intensity);
                assert_eq!(label, "Range");
            }
            other => panic!("unexpected scale {other:?}"),
        }
    }
}
