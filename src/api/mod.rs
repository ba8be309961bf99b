use tracing::{debug, warn};

use crate::core::{
    AffineTransform, AggregateColumns, FillDirection, FillRegion, ProjectedPoint,
    draw_reference_line, fill_threshold_regions, project_columns_into, snap_to_pixel,
};
use crate::error::{IndicatorError, IndicatorResult};
use crate::render::DrawSurface;

/// Style/config for one oscillator series.
///
/// `strong_level` and `weak_level` are data-space thresholds (e.g. +100/-100
/// for CCI, -20/-80 for Williams %R); `period` is the indicator's look-back
/// length, whose first `period - 1` samples carry no valid value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorStyle {
    pub strong_level: f64,
    pub weak_level: f64,
    pub period: usize,
    pub line_width: f64,
}

impl OscillatorStyle {
    #[must_use]
    pub fn new(strong_level: f64, weak_level: f64) -> Self {
        Self {
            strong_level,
            weak_level,
            period: 1,
            line_width: 1.0,
        }
    }

    #[must_use]
    pub fn with_period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn validate(self) -> IndicatorResult<()> {
        if !self.strong_level.is_finite() || !self.weak_level.is_finite() {
            return Err(IndicatorError::InvalidStyle(
                "threshold levels must be finite".to_owned(),
            ));
        }
        if self.period == 0 {
            return Err(IndicatorError::InvalidStyle(
                "period must be >= 1".to_owned(),
            ));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(IndicatorError::InvalidStyle(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Warm-up samples skipped by the fill sweep.
    #[must_use]
    pub fn skip_prefix(self) -> usize {
        self.period.saturating_sub(1)
    }
}

/// Per-frame orchestrator for one oscillator series.
///
/// Owns the reusable projected-point buffer; the buffer is cleared (not
/// reallocated) at the start of each pass and no other component holds a
/// reference to it between frames.
#[derive(Debug)]
pub struct OscillatorCompositor {
    style: OscillatorStyle,
    buffer: Vec<ProjectedPoint>,
}

impl OscillatorCompositor {
    pub fn new(style: OscillatorStyle) -> IndicatorResult<Self> {
        style.validate()?;
        Ok(Self {
            style,
            buffer: Vec::new(),
        })
    }

    #[must_use]
    pub fn style(&self) -> OscillatorStyle {
        self.style
    }

    /// Runs one synchronous render pass.
    ///
    /// Draw order is load-bearing: reference lines sit beneath the fills and
    /// the fills sit beneath the stroke, so the polyline always renders on
    /// top of its own threshold shading. With fewer than two projected points
    /// only the dashed zero line is drawn.
    pub fn render_pass<S: DrawSurface>(
        &mut self,
        surface: &mut S,
        columns: AggregateColumns<'_>,
        transform: AffineTransform,
        rect_width: f64,
        device_pixel_ratio: f64,
    ) -> IndicatorResult<()> {
        let style = self.style;
        project_columns_into(columns, transform, &mut self.buffer);

        let mid_level = snap_to_pixel(transform.apply_y(0.0), style.line_width, device_pixel_ratio);

        if self.buffer.len() < 2 {
            warn!(
                points = self.buffer.len(),
                "skipping oscillator fill pass: not enough projected points"
            );
            return draw_reference_line(surface, rect_width, mid_level, true);
        }

        let strong_level = snap_to_pixel(
            transform.apply_y(style.strong_level),
            style.line_width,
            device_pixel_ratio,
        );
        let weak_level = snap_to_pixel(
            transform.apply_y(style.weak_level),
            style.line_width,
            device_pixel_ratio,
        );

        draw_reference_line(surface, rect_width, strong_level, false)?;
        draw_reference_line(surface, rect_width, weak_level, false)?;
        draw_reference_line(surface, rect_width, mid_level, true)?;

        let skip_prefix = style.skip_prefix();
        let weak_regions =
            fill_threshold_regions(&self.buffer, weak_level, FillDirection::Below, skip_prefix);
        let strong_regions =
            fill_threshold_regions(&self.buffer, strong_level, FillDirection::Above, skip_prefix);

        debug!(
            points = self.buffer.len(),
            weak_regions = weak_regions.len(),
            strong_regions = strong_regions.len(),
            "composited oscillator frame"
        );

        for region in &weak_regions {
            paint_region(surface, region)?;
        }
        for region in &strong_regions {
            paint_region(surface, region)?;
        }

        stroke_polyline(surface, &self.buffer)
    }
}

/// Paints one closed fill region with a single fill operation.
fn paint_region<S: DrawSurface>(surface: &mut S, region: &FillRegion) -> IndicatorResult<()> {
    let Some((first, rest)) = region.vertices.split_first() else {
        return Ok(());
    };

    surface.begin_path();
    surface.move_to(first.x, first.y);
    // The vertex list repeats the first vertex at the end; close_path supplies
    // that edge, so the duplicate is not re-emitted.
    let interior = if region.is_closed() {
        &rest[..rest.len() - 1]
    } else {
        rest
    };
    for vertex in interior {
        surface.line_to(vertex.x, vertex.y);
    }
    surface.close_path();
    surface.fill()
}

/// Strokes the full polyline, lifting the pen across non-finite points.
fn stroke_polyline<S: DrawSurface>(
    surface: &mut S,
    points: &[ProjectedPoint],
) -> IndicatorResult<()> {
    surface.begin_path();
    let mut pen_down = false;
    for point in points {
        if !point.is_finite() {
            pen_down = false;
            continue;
        }
        if pen_down {
            surface.line_to(point.x, point.y);
        } else {
            surface.move_to(point.x, point.y);
            pen_down = true;
        }
    }
    surface.stroke()
}
