mod recording;

pub use recording::{PathCommand, RecordingSurface};

use smallvec::SmallVec;

use crate::error::IndicatorResult;

/// Dash pattern in device pixels; empty means solid.
pub type DashPattern = SmallVec<[f64; 2]>;

/// Path-construction capability of the host rendering backend.
///
/// The compositor produces nothing but this command vocabulary, so drawing
/// stays isolated from the geometry and orchestration logic. Path ops are
/// infallible; `fill` and `stroke` may surface backend errors.
pub trait DrawSurface {
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn fill(&mut self) -> IndicatorResult<()>;
    fn stroke(&mut self) -> IndicatorResult<()>;
    fn dash_pattern(&self) -> DashPattern;
    fn set_dash_pattern(&mut self, pattern: &[f64]);
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
