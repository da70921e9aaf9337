// src/data_input/mod.rs

pub mod matrix_loader;
pub mod test_cases;

// src/data_input/mod.rs
