use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::IndicatorResult;
use crate::render::{DashPattern, DrawSurface};

/// One recorded drawing-surface call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Fill,
    Stroke,
    SetDash { pattern: Vec<f64> },
}

/// Drawing surface that records the emitted command stream.
///
/// Used by tests and headless consumers; command order is load-bearing for
/// the compositor (fills must land between reference lines and the stroke),
/// so the full stream is kept rather than just counts.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<PathCommand>,
    dash: DashPattern,
    pub fill_count: usize,
    pub stroke_count: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.dash.clear();
        self.fill_count = 0;
        self.stroke_count = 0;
    }
}

impl DrawSurface for RecordingSurface {
    fn begin_path(&mut self) {
        self.commands.push(PathCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.commands.push(PathCommand::ClosePath);
    }

    fn fill(&mut self) -> IndicatorResult<()> {
        self.commands.push(PathCommand::Fill);
        self.fill_count += 1;
        Ok(())
    }

    fn stroke(&mut self) -> IndicatorResult<()> {
        self.commands.push(PathCommand::Stroke);
        self.stroke_count += 1;
        Ok(())
    }

    fn dash_pattern(&self) -> DashPattern {
        self.dash.clone()
    }

    fn set_dash_pattern(&mut self, pattern: &[f64]) {
        self.dash = SmallVec::from_slice(pattern);
        self.commands.push(PathCommand::SetDash {
            pattern: pattern.to_vec(),
        });
    }
}
