// src/plot_functions/mod.rs

pub mod plot_range_and_mask;

// src/plot_functions/mod.rs
