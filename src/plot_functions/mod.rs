// src/plot_functions/mod.rs

pub mod plot_rms_timing;
