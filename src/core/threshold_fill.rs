use serde::{Deserialize, Serialize};

use crate::core::ProjectedPoint;

/// Which side of the threshold level gets filled.
///
/// `Above` fills where the polyline satisfies `y >= level`, `Below` where
/// `y <= level`. The comparison is purely numeric: callers working in screen
/// coordinates (where larger data values map to smaller device y) pick the
/// direction that matches their projection's orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillDirection {
    Above,
    Below,
}

impl FillDirection {
    /// Inclusive test for the filled side of the level.
    fn on_side(self, value: f64, level: f64) -> bool {
        match self {
            Self::Above => value >= level,
            Self::Below => value <= level,
        }
    }

    /// Inclusive test for the opposite side; both tests hold at `value == level`.
    fn off_side(self, value: f64, level: f64) -> bool {
        match self {
            Self::Above => value <= level,
            Self::Below => value >= level,
        }
    }
}

/// Vertex in device coordinates of a fill-region boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillVertex {
    pub x: f64,
    pub y: f64,
}

impl FillVertex {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One closed sub-path bounded by the polyline and the threshold line.
///
/// The vertex list is explicitly closed: the first vertex is repeated at the
/// end so consumers can render it without implicit closure rules. Each region
/// is filled with a single paint operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillRegion {
    pub vertices: Vec<FillVertex>,
}

impl FillRegion {
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }
}

/// Linear interpolation of the abscissa where the segment `(tx, ty) -> (x, y)`
/// crosses the level. Callers guarantee `ty != y`.
fn crossing_x(tx: f64, ty: f64, x: f64, y: f64, level: f64) -> f64 {
    tx + (x - tx) * (ty - level) / (ty - y)
}

/// Closes `vertices` by repeating the first vertex, then emits the region
/// unless it is degenerate (a coincident entry+exit at a single point, or a
/// zero-extent spike left over from a gap).
fn close_and_emit(mut vertices: Vec<FillVertex>, regions: &mut Vec<FillRegion>) {
    if let Some(first) = vertices.first().copied() {
        if vertices.last() != Some(&first) {
            vertices.push(first);
        }

        let degenerate = vertices.len() < 4 || vertices.iter().all(|v| *v == first);
        if !degenerate {
            regions.push(FillRegion { vertices });
        }
    }
}

/// Sweeps the polyline left to right and collects the closed regions where it
/// lies on the `direction` side of `level`.
///
/// The first `skip_prefix` points are the indicator's warm-up span and take no
/// part in the sweep. Crossing points are computed by linear interpolation, so
/// a crossing between two samples lands geometrically exactly on the level.
///
/// Non-finite points are sweep discontinuities: any open region is closed at
/// the last valid point and the sweep re-anchors at the next finite point,
/// never detecting a crossing across the gap.
#[must_use]
pub fn fill_threshold_regions(
    points: &[ProjectedPoint],
    level: f64,
    direction: FillDirection,
    skip_prefix: usize,
) -> Vec<FillRegion> {
    if !level.is_finite() || points.len().saturating_sub(skip_prefix) < 2 {
        return Vec::new();
    }

    let mut regions = Vec::new();
    let mut open: Option<Vec<FillVertex>> = None;
    // Set once a crossing is detected in the current sweep span; the anchored
    // continuation below only applies while the span has never crossed.
    let mut crossed = false;
    let mut anchor: Option<ProjectedPoint> = None;
    let mut prev: Option<(f64, f64)> = None;

    for point in &points[skip_prefix..] {
        if !point.is_finite() {
            if let Some(mut vertices) = open.take() {
                if let Some((tx, _)) = prev {
                    vertices.push(FillVertex::new(tx, level));
                }
                close_and_emit(vertices, &mut regions);
            }
            prev = None;
            anchor = None;
            crossed = false;
            continue;
        }

        let (x, y) = (point.x, point.y);
        if anchor.is_none() {
            anchor = Some(*point);
        }
        // The first point of a span forms a degenerate self-segment, which the
        // `ty != y` guard classifies as no-crossing.
        let (tx, ty) = prev.unwrap_or((x, y));

        if ty != y {
            if direction.off_side(ty, level) && direction.on_side(y, level) {
                // Entry crossing: begin a region on the level line.
                open = Some(vec![FillVertex::new(
                    crossing_x(tx, ty, x, y, level),
                    level,
                )]);
                crossed = true;
            } else if direction.on_side(ty, level) && direction.off_side(y, level) {
                // Exit crossing: land on the level line and close.
                if let Some(mut vertices) = open.take() {
                    vertices.push(FillVertex::new(crossing_x(tx, ty, x, y, level), level));
                    close_and_emit(vertices, &mut regions);
                }
                crossed = true;
            }
        }

        if direction.on_side(y, level) {
            if open.is_none() && !crossed {
                // The span started already on the fill side: anchor the region
                // at the first swept point's x, dropped to the level.
                if let Some(a) = anchor {
                    open = Some(vec![FillVertex::new(a.x, level)]);
                }
            }
            if let Some(vertices) = open.as_mut() {
                vertices.push(FillVertex::new(x, y));
            }
        }

        prev = Some((x, y));
    }

    // The polyline stayed on the fill side through the last sample.
    if let Some(mut vertices) = open.take() {
        if let Some((tx, _)) = prev {
            vertices.push(FillVertex::new(tx, level));
        }
        close_and_emit(vertices, &mut regions);
    }

    regions
}
