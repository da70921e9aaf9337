// src/constants.rs

use plotters::style::colors::full_palette::{GREEN, RED};
use plotters::style::RGBColor;

// Figure dimensions (11 x 6 inches at 100 dpi).
pub const FIGURE_WIDTH: u32 = 1100;
pub const FIGURE_HEIGHT: u32 = 600;

// Share of each panel's width given to its colorbar.
pub const COLORBAR_WIDTH_FRACTION: f64 = 0.28;

// Label areas around the heatmap, in pixels.
pub const HEATMAP_X_LABEL_AREA_PX: u32 = 45;
pub const HEATMAP_Y_LABEL_AREA_PX: u32 = 55;

// Colorbar layout. The top margin leaves room for the panel caption so the
// bar lines up with the heatmap beside it.
pub const COLORBAR_TOP_MARGIN_PX: u32 = 35;
pub const COLORBAR_LABEL_AREA_PX: u32 = 95;
pub const COLORBAR_TICK_GAP_PX: i32 = 6;

// Number of gradient steps drawn in the continuous colorbar.
pub const COLORBAR_GRADIENT_STEPS: usize = 128;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 18;
pub const FONT_SIZE_AXIS_LABEL: i32 = 13;
pub const FONT_SIZE_COLORBAR_LABEL: i32 = 13;

// Axis tick counts
pub const HEATMAP_MAX_X_LABELS: usize = 10;
pub const HEATMAP_MAX_Y_LABELS: usize = 8;
pub const COLORBAR_MAX_LABELS: usize = 6;

// Fallback display range when a range image has no positive return.
pub const DEFAULT_INTENSITY_MIN: f64 = 0.0;
pub const DEFAULT_INTENSITY_MAX: f64 = 1.0;

// --- Ground mask colours ---
pub const COLOR_NON_GROUND: &RGBColor = &RED;
pub const COLOR_GROUND: &RGBColor = &GREEN;

// --- Labels ---
pub const RANGE_PANEL_TITLE: &str = "Input LiDAR Range Image";
pub const MASK_PANEL_TITLE: &str = "Ground Segmentation";
pub const X_AXIS_LABEL: &str = "X (azimuth)";
pub const Y_AXIS_LABEL: &str = "Y (elevation)";
pub const RANGE_COLORBAR_LABEL: &str = "Range";
pub const MASK_TICK_LABELS: [&str; 2] = ["Non-ground", "Ground"];

pub const COMPLETION_MESSAGE: &str = "Visualization finished successfully.";

// src/constants.rs
