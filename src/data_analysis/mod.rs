// src/data_analysis/mod.rs

pub mod row_mask;
pub mod step_series;
pub mod task_activity;
