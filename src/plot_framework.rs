// src/plot_framework.rs

use ndarray::Array2;
use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Rectangle, Text};
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, RGBColor, TextStyle};

use crate::constants::{
    COLORBAR_GRADIENT_STEPS, COLORBAR_LABEL_AREA_PX, COLORBAR_MAX_LABELS, COLORBAR_TICK_GAP_PX,
    COLORBAR_TOP_MARGIN_PX,
    COLORBAR_WIDTH_FRACTION, FIGURE_HEIGHT, FIGURE_WIDTH, HEATMAP_MAX_X_LABELS,
    HEATMAP_MAX_Y_LABELS, HEATMAP_X_LABEL_AREA_PX, HEATMAP_Y_LABEL_AREA_PX,
};
use crate::data_analysis::intensity_scale::IntensityRange;
use crate::error::{ViewerError, ViewerResult};
use crate::font_config::{
    FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_COLORBAR_LABEL,
    FONT_TUPLE_MAIN_TITLE,
};
use crate::types::Figure;

/// How cell values become colours.
#[derive(Debug, Clone, Copy)]
pub enum ColorScale {
    /// Viridis over the given range; values outside are clamped.
    Continuous {
        range: IntensityRange,
        label: &'static str,
    },
    /// Two colours split at 0.5, for 0/1 label images.
    Binary {
        low: RGBColor,
        high: RGBColor,
        labels: [&'static str; 2],
    },
}

impl ColorScale {
    pub fn color_for(&self, value: f64) -> RGBColor {
        if !value.is_finite() {
            return WHITE;
        }
        match *self {
            ColorScale::Continuous { range, .. } => map_value_to_viridis(range.normalize(value)),
            ColorScale::Binary { low, high, .. } => {
                if value >= 0.5 {
                    high
                } else {
                    low
                }
            }
        }
    }
}

/// One heatmap panel with its colorbar.
pub struct HeatmapPanel<'a> {
    pub title: &'a str,
    pub values: &'a Array2<f64>,
    pub scale: ColorScale,
    pub x_label: &'a str,
    pub y_label: &'a str,
}

/// Maps a normalized value in [0, 1] onto the viridis colormap.
pub fn map_value_to_viridis(t: f64) -> RGBColor {
    if !t.is_finite() {
        return RGBColor(0, 0, 0);
    }
    let color = colorous::VIRIDIS.eval_continuous(t.clamp(0.0, 1.0));
    RGBColor(color.r, color.g, color.b)
}

/// Tick label for a matrix index axis. Non-integer key points get no label.
pub fn index_label(value: f64) -> String {
    if (value - value.round()).abs() < 1e-6 {
        // + 0.0 turns -0.0 into 0.0
        format!("{:.0}", value.round() + 0.0)
    } else {
        String::new()
    }
}

/// Colorbar tick text with precision following the bar's span.
pub fn format_colorbar_tick(value: f64, span: f64) -> String {
    if span >= 10.0 {
        format!("{:.0}", value)
    } else if span >= 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Y extent of the continuous colorbar. A collapsed range gets 0.5 of padding on
/// each side so the axis is still drawable.
pub fn colorbar_bounds(range: IntensityRange) -> (f64, f64) {
    let (min, max) = if range.min <= range.max {
        (range.min, range.max)
    } else {
        (range.max, range.min)
    };
    if (max - min).abs() < 1e-9 {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

/// Draws a matrix as a grid of cells, first row at the top.
fn draw_heatmap_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel: &HeatmapPanel,
) -> ViewerResult<()> {
    let (rows, cols) = panel.values.dim();
    if rows == 0 || cols == 0 {
        return Err(ViewerError::Render(format!(
            "'{}' has no cells to draw",
            panel.title
        )));
    }
    // Row r is drawn at y = top_row - r so that row 0 ends up on top
    let top_row = (rows - 1) as f64;

    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, FONT_TUPLE_CHART_TITLE)
        .margin(5)
        .x_label_area_size(HEATMAP_X_LABEL_AREA_PX)
        .y_label_area_size(HEATMAP_Y_LABEL_AREA_PX)
        .build_cartesian_2d(-0.5f64..cols as f64 - 0.5, -0.5f64..rows as f64 - 0.5)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(panel.x_label)
        .y_desc(panel.y_label)
        .x_labels(HEATMAP_MAX_X_LABELS)
        .y_labels(HEATMAP_MAX_Y_LABELS)
        .x_label_formatter(&|x| index_label(*x))
        .y_label_formatter(&|y| index_label(top_row - *y))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let scale = panel.scale;
    chart.draw_series(panel.values.indexed_iter().map(|((row, col), &value)| {
        let x = col as f64;
        let y = top_row - row as f64;
        Rectangle::new(
            [(x - 0.5, y + 0.5), (x + 0.5, y - 0.5)],
            scale.color_for(value).filled(),
        )
    }))?;

    Ok(())
}

fn draw_continuous_colorbar(
    area: &DrawingArea<BitMapBackend, Shift>,
    range: IntensityRange,
    label: &str,
) -> ViewerResult<()> {
    let (lo, hi) = colorbar_bounds(range);
    let span = hi - lo;

    let mut chart = ChartBuilder::on(area)
        .margin(5)
        .margin_top(COLORBAR_TOP_MARGIN_PX)
        .margin_bottom(HEATMAP_X_LABEL_AREA_PX + 5)
        .right_y_label_area_size(COLORBAR_LABEL_AREA_PX)
        .build_cartesian_2d(0f64..1f64, lo..hi)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_desc(label)
        .y_labels(COLORBAR_MAX_LABELS)
        .y_label_formatter(&|v| format_colorbar_tick(*v, span))
        .label_style(FONT_TUPLE_COLORBAR_LABEL)
        .draw()?;

    let step = span / COLORBAR_GRADIENT_STEPS as f64;
    chart.draw_series((0..COLORBAR_GRADIENT_STEPS).map(|i| {
        let y0 = lo + step * i as f64;
        let y1 = y0 + step;
        let color = map_value_to_viridis(range.normalize(0.5 * (y0 + y1)));
        Rectangle::new([(0.0, y0), (1.0, y1)], color.filled())
    }))?;
    chart.draw_series(std::iter::once(Rectangle::new(
        [(0.0, lo), (1.0, hi)],
        BLACK.stroke_width(1),
    )))?;

    Ok(())
}

fn draw_binary_colorbar(
    area: &DrawingArea<BitMapBackend, Shift>,
    low: RGBColor,
    high: RGBColor,
    labels: [&str; 2],
) -> ViewerResult<()> {
    let mut chart = ChartBuilder::on(area)
        .margin(5)
        .margin_top(COLORBAR_TOP_MARGIN_PX)
        .margin_bottom(HEATMAP_X_LABEL_AREA_PX + 5)
        .right_y_label_area_size(COLORBAR_LABEL_AREA_PX)
        .build_cartesian_2d(0f64..1f64, 0f64..1f64)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .disable_y_axis()
        .draw()?;

    chart.draw_series(
        [(0.0, 0.5, low), (0.5, 1.0, high)]
            .into_iter()
            .map(|(y0, y1, color)| Rectangle::new([(0.0, y0), (1.0, y1)], color.filled())),
    )?;
    chart.draw_series(std::iter::once(Rectangle::new(
        [(0.0, 0.0), (1.0, 1.0)],
        BLACK.stroke_width(1),
    )))?;

    // One tick label in the middle of each half, right of the bar.
    // backend_coord is absolute; Text on `area` is relative to its corner.
    let (area_x, area_y) = area.get_pixel_range();
    let label_style =
        TextStyle::from(FONT_TUPLE_COLORBAR_LABEL).pos(Pos::new(HPos::Left, VPos::Center));
    for (label, y) in labels.iter().zip([0.25, 0.75]) {
        let (bar_right, label_y) = chart.backend_coord(&(1.0, y));
        area.draw(&Text::new(
            label.to_string(),
            (
                bar_right - area_x.start + COLORBAR_TICK_GAP_PX,
                label_y - area_y.start,
            ),
            label_style.clone(),
        ))?;
    }

    Ok(())
}

/// Draws one panel: the heatmap on the left, its colorbar on the right.
pub fn draw_heatmap_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel: &HeatmapPanel,
) -> ViewerResult<()> {
    let (width, _) = area.dim_in_pixel();
    let bar_width = (width as f64 * COLORBAR_WIDTH_FRACTION) as u32;
    let (map_area, bar_area) = area.split_horizontally(width.saturating_sub(bar_width) as i32);

    draw_heatmap_chart(&map_area, panel)?;
    match panel.scale {
        ColorScale::Continuous { range, label } => {
            draw_continuous_colorbar(&bar_area, range, label)
        }
        ColorScale::Binary { low, high, labels } => {
            draw_binary_colorbar(&bar_area, low, high, labels)
        }
    }
}

/// Renders a titled figure with panels laid out left to right into an
/// in-memory RGB bitmap.
pub fn draw_figure(title: &str, panels: &[HeatmapPanel]) -> ViewerResult<Figure> {
    let mut pixels = vec![0u8; (FIGURE_WIDTH * FIGURE_HEIGHT * 3) as usize];
    {
        let root_area = BitMapBackend::with_buffer(&mut pixels, (FIGURE_WIDTH, FIGURE_HEIGHT))
            .into_drawing_area();
        root_area.fill(&WHITE)?;
        let body = root_area.titled(title, FONT_TUPLE_MAIN_TITLE)?;
        let panel_areas = body.margin(0, 5, 5, 5).split_evenly((1, panels.len().max(1)));

        for (area, panel) in panel_areas.iter().zip(panels.iter()) {
            draw_heatmap_panel(area, panel)?;
        }
        root_area.present()?;
    }

    Ok(Figure {
        title: title.to_string(),
        width: FIGURE_WIDTH,
        height: FIGURE_HEIGHT,
        pixels,
    })
}
