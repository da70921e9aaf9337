// src/data_analysis/mod.rs

pub mod display_orientation;
pub mod intensity_scale;

// src/data_analysis/mod.rs
