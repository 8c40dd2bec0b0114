// src/data_analysis/step_series.rs

/// Expands samples into the vertices of a "post" staircase, split into
/// separately drawn segments.
///
/// Each value is held from its own x up to the next sample's x, where the line
/// jumps vertically: `p0, (x1, y0), p1, (x2, y1), p2, ...`. A vertex with a
/// non-finite coordinate breaks the line, so a missing sample leaves a gap
/// instead of being bridged. A lone finite vertex still forms a segment.
pub fn step_post_segments(points: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
    let mut vertices = Vec::with_capacity(points.len() * 2);
    for (i, &(x, y)) in points.iter().enumerate() {
        if i > 0 {
            vertices.push((x, points[i - 1].1));
        }
        vertices.push((x, y));
    }

    let mut segments = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for (x, y) in vertices {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Min and max over the finite values yielded by `values`, or `None` if there are none.
pub fn finite_extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
