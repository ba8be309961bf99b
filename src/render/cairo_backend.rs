use cairo::Context;

use crate::error::{IndicatorError, IndicatorResult};
use crate::render::{DashPattern, DrawSurface};

/// Cairo adapter for the drawing-surface seam.
///
/// Paint sources, stroke widths and clipping stay under the host's control;
/// this adapter only forwards the path vocabulary the compositor emits.
#[derive(Debug)]
pub struct CairoSurface<'a> {
    context: &'a Context,
}

impl<'a> CairoSurface<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self { context }
    }
}

fn map_backend_error(action: &str, err: cairo::Error) -> IndicatorError {
    IndicatorError::Backend(format!("{action}: {err}"))
}

impl DrawSurface for CairoSurface<'_> {
    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn fill(&mut self) -> IndicatorResult<()> {
        self.context
            .fill()
            .map_err(|err| map_backend_error("cairo fill failed", err))
    }

    fn stroke(&mut self) -> IndicatorResult<()> {
        self.context
            .stroke()
            .map_err(|err| map_backend_error("cairo stroke failed", err))
    }

    fn dash_pattern(&self) -> DashPattern {
        let (dashes, _offset) = self.context.dash();
        DashPattern::from_vec(dashes)
    }

    fn set_dash_pattern(&mut self, pattern: &[f64]) {
        self.context.set_dash(pattern, 0.0);
    }
}
