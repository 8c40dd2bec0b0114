// src/data_analysis/row_mask.rs

use crate::constants::TIME1_SENTINEL;
use crate::data_input::sample_table::SampleTable;

/// One entry per row, true where `time1` holds a real sample (`time1 != 0`).
///
/// A NaN `time1` compares unequal to the sentinel and is therefore kept;
/// non-finite points are dropped later, at drawing time.
pub fn valid_time1_mask(table: &SampleTable) -> Vec<bool> {
    table.time1.iter().map(|&t| t != TIME1_SENTINEL).collect()
}
