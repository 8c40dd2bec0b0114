// src/data_analysis/task_activity.rs

use crate::constants::{LABEL_RMS_0, LABEL_RMS_1};
use crate::data_input::sample_table::SampleTable;
use crate::error::MaskLengthError;

/// One run of a task: raised at `start` (level != 0), lowered at `end` (level == 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activation {
    pub start: f64,
    pub end: f64,
}

impl Activation {
    pub fn busy_time(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySummary {
    pub activations: usize,
    pub min_busy: Option<f64>,
    pub max_busy: Option<f64>,
    pub mean_busy: Option<f64>,
    pub total_busy: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskActivityReport {
    pub rms_0: ActivitySummary,
    pub rms_1: ActivitySummary,
    /// RMS_1 runs interrupted by at least one RMS_0 start.
    pub preemptions: usize,
}

/// Pairs each start sample with the next end sample.
///
/// A second start before an end replaces the open one (the firmware overwrites
/// the start stamp when a run resumes). A trailing start without an end, an end
/// without a start, non-finite samples and intervals running backwards are dropped.
pub fn extract_activations(points: &[(f64, f64)]) -> Vec<Activation> {
    let mut activations = Vec::new();
    let mut open_start: Option<f64> = None;

    for &(time, level) in points {
        if !time.is_finite() || !level.is_finite() {
            continue;
        }
        if level != 0.0 {
            open_start = Some(time);
        } else if let Some(start) = open_start.take() {
            if time >= start {
                activations.push(Activation { start, end: time });
            }
        }
    }
    activations
}

pub fn summarize(activations: &[Activation]) -> ActivitySummary {
    let busy: Vec<f64> = activations.iter().map(Activation::busy_time).collect();
    let total_busy: f64 = busy.iter().sum();
    let (min_busy, max_busy, mean_busy) = if busy.is_empty() {
        (None, None, None)
    } else {
        (
            busy.iter().copied().reduce(f64::min),
            busy.iter().copied().reduce(f64::max),
            Some(total_busy / busy.len() as f64),
        )
    };
    ActivitySummary {
        activations: busy.len(),
        min_busy,
        max_busy,
        mean_busy,
        total_busy,
    }
}

/// Number of `low_priority` runs that strictly contain the start of some `high_priority` run.
pub fn count_preemptions(low_priority: &[Activation], high_priority: &[Activation]) -> usize {
    low_priority
        .iter()
        .filter(|low| {
            high_priority
                .iter()
                .any(|high| high.start > low.start && high.start < low.end)
        })
        .count()
}

/// Activation statistics for both tasks; RMS_1 only uses rows selected by `mask`.
pub fn analyze_task_activity(
    table: &SampleTable,
    mask: &[bool],
) -> Result<TaskActivityReport, MaskLengthError> {
    let rms_0_runs = extract_activations(&table.reference_points());
    let rms_1_runs = extract_activations(&table.secondary_points(mask)?);

    Ok(TaskActivityReport {
        rms_0: summarize(&rms_0_runs),
        rms_1: summarize(&rms_1_runs),
        preemptions: count_preemptions(&rms_1_runs, &rms_0_runs),
    })
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.1}"))
}

fn log_summary(label: &str, summary: &ActivitySummary) {
    log::info!(
        "  {}: {} activations, busy min {} / mean {} / max {}, total {:.1}",
        label,
        summary.activations,
        format_optional(summary.min_busy),
        format_optional(summary.mean_busy),
        format_optional(summary.max_busy),
        summary.total_busy
    );
}

pub fn log_task_activity(report: &TaskActivityReport) {
    log::info!("Task activity:");
    log_summary(LABEL_RMS_0, &report.rms_0);
    log_summary(LABEL_RMS_1, &report.rms_1);
    log::info!("  {} preempted by {}: {} times", LABEL_RMS_1, LABEL_RMS_0, report.preemptions);
}
