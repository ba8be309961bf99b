use crate::error::{IndicatorError, IndicatorResult};

/// Device-space point produced by the coordinate projector.
///
/// `source_index` points back at the aggregate record the point came from so
/// the host chart can attach markers or labels to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub source_index: usize,
}

impl ProjectedPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, source_index: usize) -> Self {
        Self { x, y, source_index }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Per-column min/max aggregate buckets, aligned by index.
///
/// Column `i` summarizes the samples rendered into pixel column `i`;
/// `start_index` offsets back into the source series.
#[derive(Debug, Clone, Copy)]
pub struct AggregateColumns<'a> {
    min_x: &'a [f64],
    max_x: &'a [f64],
    min_y: &'a [f64],
    max_y: &'a [f64],
    start_index: usize,
}

impl<'a> AggregateColumns<'a> {
    pub fn new(
        min_x: &'a [f64],
        max_x: &'a [f64],
        min_y: &'a [f64],
        max_y: &'a [f64],
        start_index: usize,
    ) -> IndicatorResult<Self> {
        let len = min_x.len();
        if max_x.len() != len || min_y.len() != len || max_y.len() != len {
            return Err(IndicatorError::InvalidData(format!(
                "aggregate arrays must be aligned: min_x={}, max_x={}, min_y={}, max_y={}",
                len,
                max_x.len(),
                min_y.len(),
                max_y.len()
            )));
        }

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
            start_index,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.min_x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min_x.is_empty()
    }

    #[must_use]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Returns `(min_x, max_x, min_y, max_y)` for column `i`.
    #[must_use]
    pub fn column(&self, i: usize) -> (f64, f64, f64, f64) {
        (self.min_x[i], self.max_x[i], self.min_y[i], self.max_y[i])
    }
}

/// Axis-aligned affine transform from data space into device space.
///
/// `x' = x * xx + dx`, `y' = y * yy + dy`. `yy` is typically negative for
/// screen coordinates (larger data values map to smaller device y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    xx: f64,
    yy: f64,
    dx: f64,
    dy: f64,
}

impl AffineTransform {
    pub fn new(xx: f64, yy: f64, dx: f64, dy: f64) -> IndicatorResult<Self> {
        if !(xx.is_finite() && yy.is_finite() && dx.is_finite() && dy.is_finite()) {
            return Err(IndicatorError::InvalidData(
                "transform coefficients must be finite".to_owned(),
            ));
        }

        Ok(Self { xx, yy, dx, dy })
    }

    #[must_use]
    pub fn apply_x(self, x: f64) -> f64 {
        x * self.xx + self.dx
    }

    #[must_use]
    pub fn apply_y(self, y: f64) -> f64 {
        y * self.yy + self.dy
    }
}
