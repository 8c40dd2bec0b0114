// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, PathElement};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    EMPTY_AXIS_RANGE, FONT_SIZE_AXIS_LABEL, FONT_SIZE_LEGEND, LINE_WIDTH_LEGEND, PLOT_HEIGHT,
    PLOT_MARGIN, PLOT_WIDTH, X_LABEL_AREA_SIZE, Y_LABEL_AREA_SIZE,
};
use crate::data_analysis::step_series::finite_extent;

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Padded range over the finite values, or the empty-axis default when there are none.
pub fn padded_axis_range<I>(values: I) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (start, end) = match finite_extent(values) {
        Some((min, max)) => calculate_range(min, max),
        None => EMPTY_AXIS_RANGE,
    };
    start..end
}

/// One labelled line, drawn as one or more unconnected segments
/// (e.g. staircase vertices broken at missing samples).
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub segments: Vec<Vec<(f64, f64)>>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

impl PlotSeries {
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(Vec::is_empty)
    }

    /// Every vertex of every segment, in drawing order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.segments.iter().flatten().copied()
    }

    pub fn x_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points().map(|(x, _)| x)
    }

    pub fn y_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points().map(|(_, y)| y)
    }
}

/// One plot area of a stacked figure.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    /// Axis description under the x ticks; `None` leaves it blank.
    pub x_label: Option<String>,
    pub y_label: String,
    /// Areas sharing their x axis with the area below hide the tick labels.
    pub show_x_tick_labels: bool,
}

/// Two plot areas stacked vertically over one shared x range.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedPlotConfig {
    pub upper: PlotConfig,
    pub lower: PlotConfig,
}

/// Draws one chart: mesh, every series and a legend holding every labelled series.
fn draw_single_axis_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let x_label_area_size = if plot_config.show_x_tick_labels {
        X_LABEL_AREA_SIZE
    } else {
        0
    };
    let mut chart = ChartBuilder::on(area)
        .margin(PLOT_MARGIN)
        .x_label_area_size(x_label_area_size)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    let mut mesh = chart.configure_mesh();
    mesh.x_labels(10)
        .y_labels(6)
        .y_desc(plot_config.y_label.as_str())
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL));
    if let Some(x_label) = &plot_config.x_label {
        mesh.x_desc(x_label.as_str());
    }
    mesh.draw()?;

    let mut legend_series_count = 0;
    for s in &plot_config.series {
        let legend_color = s.color;
        let legend = move |(x, y): (i32, i32)| {
            PathElement::new(
                vec![(x, y), (x + 20, y)],
                legend_color.stroke_width(LINE_WIDTH_LEGEND),
            )
        };

        if s.is_empty() {
            // Legend-only entry: an invisible point keeps the label in the legend.
            if !s.label.is_empty() {
                chart
                    .draw_series(std::iter::once(Circle::new(
                        (plot_config.x_range.start, plot_config.y_range.start),
                        0,
                        s.color.filled(),
                    )))?
                    .label(s.label.as_str())
                    .legend(legend);
                legend_series_count += 1;
            }
            continue;
        }

        let mut labelled = s.label.is_empty();
        for segment in s.segments.iter().filter(|segment| !segment.is_empty()) {
            let series = chart.draw_series(LineSeries::new(
                segment.iter().copied(),
                s.color.stroke_width(s.stroke_width),
            ))?;
            // One legend entry per series, not per segment.
            if !labelled {
                series.label(s.label.as_str()).legend(legend);
                legend_series_count += 1;
                labelled = true;
            }
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    Ok(())
}

/// Draws both areas of `config` into `root_area`, upper half first.
pub fn draw_stacked_areas(
    root_area: &DrawingArea<BitMapBackend, Shift>,
    config: &StackedPlotConfig,
) -> Result<(), Box<dyn Error>> {
    root_area.fill(&WHITE)?;
    let margined_root_area = root_area.margin(PLOT_MARGIN, PLOT_MARGIN, PLOT_MARGIN, PLOT_MARGIN);
    let sub_plot_areas = margined_root_area.split_evenly((2, 1));

    draw_single_axis_chart(&sub_plot_areas[0], &config.upper)?;
    draw_single_axis_chart(&sub_plot_areas[1], &config.lower)?;
    Ok(())
}

/// Renders a two-row stacked figure into a PNG file.
pub fn draw_two_row_stacked_plot(
    output_file: &Path,
    config: &StackedPlotConfig,
) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_file, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    draw_stacked_areas(&root_area, config)?;
    root_area.present()?;
    log::info!("Stacked plot saved as '{}'.", output_file.display());
    Ok(())
}
