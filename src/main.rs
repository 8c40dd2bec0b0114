// src/main.rs

use std::error::Error;
use std::path::Path;

use rms_timing_plot::constants::INPUT_FILE;
use rms_timing_plot::data_analysis::row_mask::valid_time1_mask;
use rms_timing_plot::data_analysis::task_activity::{analyze_task_activity, log_task_activity};
use rms_timing_plot::data_input::table_parser::parse_sample_table;
use rms_timing_plot::plot_functions::plot_rms_timing::{output_file_for, plot_rms_timing};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("rms_timing_plot {}", rms_timing_plot::crate_version());

    let input_path = Path::new(INPUT_FILE);
    let table = parse_sample_table(input_path)?;
    let mask = valid_time1_mask(&table);

    log_task_activity(&analyze_task_activity(&table, &mask)?);

    plot_rms_timing(&table, &mask, &output_file_for(input_path))?;
    Ok(())
}
