// src/data_input/test_cases.rs

/// One entry of the visualization table.
///
/// Paths are relative to the data directory handed to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    pub title: &'static str,
    pub input_path: &'static str, // Range image matrix
    pub mask_path: &'static str,  // Ground mask matrix (0/1)
    pub flip_for_display: bool,   // Reverse rows so ground is drawn at the bottom
}

/// The fixed list of test cases, shown in this order.
pub const TEST_CASES: [TestCase; 3] = [
    TestCase {
        title: "Test 1 – Simple street with slope",
        input_path: "txt/input_test1_slope.txt",
        mask_path: "txt/mask_test1_slope.txt",
        flip_for_display: false,
    },
    TestCase {
        title: "Test 2 – Simple street with obstacle",
        input_path: "txt/input_test2_obstacle.txt",
        mask_path: "txt/mask_test2_obstacle.txt",
        flip_for_display: false,
    },
    TestCase {
        title: "Test 3 – Simplified car perspective",
        input_path: "txt/input_perspective.txt",
        mask_path: "txt/mask_perspective.txt",
        flip_for_display: true,
    },
];
