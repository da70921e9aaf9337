// src/driver.rs

use std::path::Path;

use tracing::{info, warn};

use crate::constants::COMPLETION_MESSAGE;
use crate::data_analysis::intensity_scale::{mask_is_binary, IntensityRange};
use crate::data_input::matrix_loader::load_matrix;
use crate::data_input::test_cases::TestCase;
use crate::error::ViewerResult;
use crate::types::{FramePair, PreparedCase};
use crate::viewer::FigureSink;

/// Loads, orients and scales one test case. Paths are resolved against `data_dir`.
pub fn prepare_case(case: &TestCase, data_dir: &Path) -> ViewerResult<PreparedCase> {
    let range = load_matrix(&data_dir.join(case.input_path))?;
    let mask = load_matrix(&data_dir.join(case.mask_path))?;

    let frames = FramePair::new(range, mask).oriented_for_display(case.flip_for_display);
    frames.ensure_same_shape(case.title)?;

    if !mask_is_binary(&frames.mask) {
        warn!(
            title = case.title,
            mask = case.mask_path,
            "mask contains values other than 0 and 1"
        );
    }

    let intensity = IntensityRange::from_range_image(&frames.range);
    let (rows, cols) = frames.dim();
    info!(
        title = case.title,
        rows,
        cols,
        flipped = case.flip_for_display,
        min = intensity.min,
        max = intensity.max,
        "test case loaded"
    );

    Ok(PreparedCase {
        title: case.title.to_string(),
        frames,
        intensity,
    })
}

/// Presents every test case in order, one at a time.
///
/// The first failure aborts the run; later cases are not attempted.
pub fn run<S: FigureSink>(cases: &[TestCase], data_dir: &Path, sink: &mut S) -> ViewerResult<()> {
    for case in cases {
        let prepared = prepare_case(case, data_dir)?;
        sink.present(&prepared)?;
    }
    println!("{COMPLETION_MESSAGE}");
    Ok(())
}
