// src/constants.rs

use plotters::style::colors::full_palette::ORANGE;
use plotters::style::RGBColor;

// Input file written by the scheduling firmware test (captured console output).
pub const INPUT_FILE: &str = "timing_test";

// Output image is named after the input file stem.
pub const OUTPUT_FILE_SUFFIX: &str = "_RMS_stacked.png";

// Column names of the sample table.
pub const COLUMN_TIME: &str = "time";
pub const COLUMN_LEVEL: &str = "level";
pub const COLUMN_TIME1: &str = "time1";
pub const COLUMN_LEVEL1: &str = "level1";
pub const REQUIRED_COLUMNS: [&str; 4] = [COLUMN_TIME, COLUMN_LEVEL, COLUMN_TIME1, COLUMN_LEVEL1];

// `time1` value meaning "RMS_1 recorded nothing for this row".
pub const TIME1_SENTINEL: f64 = 0.0;

// Plot dimensions (10x6 inches at 100 dpi).
pub const PLOT_WIDTH: u32 = 1000;
pub const PLOT_HEIGHT: u32 = 600;

// Series labels and axis descriptions.
// The lower y description reads "RMS_O" while the legend reads "RMS_0"; both are kept as captured.
pub const LABEL_RMS_0: &str = "RMS_0";
pub const LABEL_RMS_1: &str = "RMS_1";
pub const Y_DESC_RMS_0: &str = "RMS_O";
pub const Y_DESC_RMS_1: &str = "RMS_1";
pub const X_DESC_TIME: &str = "Time";

// --- Plot Color Assignments ---
pub const COLOR_RMS_0: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
pub const COLOR_RMS_1: &RGBColor = &ORANGE;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Font sizes
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 14;

// Layout spacing (pixels)
pub const PLOT_MARGIN: i32 = 10;
pub const X_LABEL_AREA_SIZE: i32 = 45;
pub const Y_LABEL_AREA_SIZE: i32 = 60;

// Axis range used by an area that has nothing to draw.
pub const EMPTY_AXIS_RANGE: (f64, f64) = (0.0, 1.0);

// src/constants.rs
