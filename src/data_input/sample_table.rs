// src/data_input/sample_table.rs

use crate::error::MaskLengthError;

/// Timestamped signal levels of both scheduled tasks, one entry per CSV row.
///
/// Stored column-wise; all four vectors always have the same length.
/// `time1 == 0` marks a row where the secondary task recorded no sample.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SampleTable {
    pub time: Vec<f64>,   // RMS_0 timestamp (reference series).
    pub level: Vec<f64>,  // RMS_0 level at `time`.
    pub time1: Vec<f64>,  // RMS_1 timestamp, 0 = no sample.
    pub level1: Vec<f64>, // RMS_1 level at `time1`.
}

impl SampleTable {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn push_row(&mut self, time: f64, level: f64, time1: f64, level1: f64) {
        self.time.push(time);
        self.level.push(level);
        self.time1.push(time1);
        self.level1.push(level1);
    }

    /// `(time, level)` for every row; the reference series is never filtered.
    pub fn reference_points(&self) -> Vec<(f64, f64)> {
        self.time.iter().copied().zip(self.level.iter().copied()).collect()
    }

    /// `(time1, level1)` for the rows selected by `mask`.
    pub fn secondary_points(&self, mask: &[bool]) -> Result<Vec<(f64, f64)>, MaskLengthError> {
        if mask.len() != self.len() {
            return Err(MaskLengthError {
                mask_len: mask.len(),
                rows: self.len(),
            });
        }
        Ok(self
            .time1
            .iter()
            .zip(self.level1.iter())
            .zip(mask.iter())
            .filter(|&(_, &keep)| keep)
            .map(|((&t, &l), _)| (t, l))
            .collect())
    }
}
