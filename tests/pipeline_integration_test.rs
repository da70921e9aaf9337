// tests/pipeline_integration_test.rs

use std::fs;
use std::path::{Path, PathBuf};

use ground_mask_viewer::data_analysis::intensity_scale::IntensityRange;
use ground_mask_viewer::data_input::matrix_loader::load_matrix;
use ground_mask_viewer::data_input::test_cases::{TestCase, TEST_CASES};
use ground_mask_viewer::driver;
use ground_mask_viewer::error::{ViewerError, ViewerResult};
use ground_mask_viewer::types::PreparedCase;
use ground_mask_viewer::viewer::FigureSink;
use ndarray::array;

/// Records what would have been drawn instead of opening windows.
#[derive(Default)]
struct RecordingSink {
    presented: Vec<PreparedCase>,
}

impl FigureSink for RecordingSink {
    fn present(&mut self, case: &PreparedCase) -> ViewerResult<()> {
        self.presented.push(case.clone());
        Ok(())
    }
}

fn bundled_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn write_case_files(dir: &Path, input: &str, mask: &str) {
    fs::create_dir_all(dir.join("txt")).unwrap();
    fs::write(dir.join("txt/input_test1_slope.txt"), input).unwrap();
    fs::write(dir.join("txt/mask_test1_slope.txt"), mask).unwrap();
}

const SLOPE_CASE: TestCase = TestCase {
    title: "Test 1 – Simple street with slope",
    input_path: "txt/input_test1_slope.txt",
    mask_path: "txt/mask_test1_slope.txt",
    flip_for_display: false,
};

#[test]
fn test_unflipped_case_reaches_renderer_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    write_case_files(
        dir.path(),
        "5.0 0 6.5\n4.0 4.5 5.5\n2.0 2.5 3.0\n",
        "0 0 0\n1 0 1\n1 1 1\n",
    );

    let mut sink = RecordingSink::default();
    driver::run(&[SLOPE_CASE], dir.path(), &mut sink).unwrap();

    assert_eq!(sink.presented.len(), 1);
    let case = &sink.presented[0];
    assert_eq!(case.title, SLOPE_CASE.title);
    assert_eq!(
        case.frames.range,
        array![[5.0, 0.0, 6.5], [4.0, 4.5, 5.5], [2.0, 2.5, 3.0]]
    );
    assert_eq!(
        case.frames.mask,
        array![[0.0, 0.0, 0.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0]]
    );
    // The zero cell does not lower the bound
    assert_eq!(case.intensity, IntensityRange { min: 2.0, max: 6.5 });
}

#[test]
fn test_cases_presented_in_table_order() {
    let mut sink = RecordingSink::default();
    driver::run(&TEST_CASES, &bundled_data_dir(), &mut sink).unwrap();

    let titles: Vec<&str> = sink.presented.iter().map(|c| c.title.as_str()).collect();
    let expected: Vec<&str> = TEST_CASES.iter().map(|c| c.title).collect();
    assert_eq!(titles, expected);
}

#[test]
fn test_perspective_case_is_flipped_for_display() {
    let data_dir = bundled_data_dir();
    let perspective = &TEST_CASES[2];
    assert!(perspective.flip_for_display);

    let stored = load_matrix(&data_dir.join(perspective.input_path)).unwrap();
    let prepared = driver::prepare_case(perspective, &data_dir).unwrap();
    let rows = stored.nrows();
    for r in 0..rows {
        assert_eq!(prepared.frames.range.row(r), stored.row(rows - 1 - r));
    }
}

#[test]
fn test_bundled_masks_are_binary_and_match_shapes() {
    let data_dir = bundled_data_dir();
    for case in TEST_CASES.iter() {
        let range = load_matrix(&data_dir.join(case.input_path)).unwrap();
        let mask = load_matrix(&data_dir.join(case.mask_path)).unwrap();
        assert_eq!(range.dim(), mask.dim(), "shape mismatch in '{}'", case.title);
        assert!(
            mask.iter().all(|&v| v == 0.0 || v == 1.0),
            "non-binary mask in '{}'",
            case.title
        );
        assert!(range.iter().all(|&v| v >= 0.0), "negative range in '{}'", case.title);
    }
}

#[test]
fn test_missing_file_aborts_remaining_cases() {
    let dir = tempfile::tempdir().unwrap();
    write_case_files(dir.path(), "1 2\n3 4\n", "0 1\n1 0\n");

    let second = TestCase {
        title: "missing",
        input_path: "txt/input_test2_obstacle.txt",
        mask_path: "txt/mask_test2_obstacle.txt",
        flip_for_display: false,
    };

    let mut sink = RecordingSink::default();
    let result = driver::run(&[second, SLOPE_CASE], dir.path(), &mut sink);
    assert!(matches!(result, Err(ViewerError::FileNotFound(_))));
    assert!(sink.presented.is_empty());
}

#[test]
fn test_all_zero_range_uses_unit_scale() {
    let dir = tempfile::tempdir().unwrap();
    write_case_files(dir.path(), "0 0\n0 0\n", "0 0\n0 0\n");

    let prepared = driver::prepare_case(&SLOPE_CASE, dir.path()).unwrap();
    assert_eq!(prepared.intensity, IntensityRange { min: 0.0, max: 1.0 });
}

#[test]
fn test_malformed_matrix_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    write_case_files(dir.path(), "1 2\n3 four\n", "0 1\n1 0\n");

    let mut sink = RecordingSink::default();
    let result = driver::run(&[SLOPE_CASE], dir.path(), &mut sink);
    assert!(matches!(result, Err(ViewerError::Parse { line: 2, .. })));
}
