use tracing::trace;

use crate::core::{AffineTransform, AggregateColumns, ProjectedPoint};

/// Projects per-column aggregate buckets into a device-space point list.
///
/// Each column contributes one point when it holds a single sample
/// (`min_x == max_x`) and two corner points otherwise, ordered so the output
/// stays monotonically non-decreasing in x. The threshold sweep depends on
/// that ordering for its left-to-right crossing detection.
///
/// `out` is a caller-owned scratch buffer; it is cleared, not reallocated,
/// so a compositor can reuse it across frames.
pub fn project_columns_into(
    columns: AggregateColumns<'_>,
    transform: AffineTransform,
    out: &mut Vec<ProjectedPoint>,
) {
    out.clear();

    for i in 0..columns.len() {
        let (min_x, max_x, min_y, max_y) = columns.column(i);
        let index = columns.start_index() + i;

        let min_corner = ProjectedPoint::new(
            transform.apply_x(min_x),
            transform.apply_y(min_y),
            index,
        );
        let max_corner = ProjectedPoint::new(
            transform.apply_x(max_x),
            transform.apply_y(max_y),
            index,
        );

        if min_x < max_x {
            out.push(min_corner);
            out.push(max_corner);
        } else if min_x > max_x {
            out.push(max_corner);
            out.push(min_corner);
        } else {
            out.push(max_corner);
        }
    }

    trace!(
        columns = columns.len(),
        points = out.len(),
        "projected aggregate columns"
    );
}

/// Convenience wrapper allocating a fresh point list per call.
#[must_use]
pub fn project_columns(
    columns: AggregateColumns<'_>,
    transform: AffineTransform,
) -> Vec<ProjectedPoint> {
    let mut out = Vec::with_capacity(columns.len() * 2);
    project_columns_into(columns, transform, &mut out);
    out
}
