//! oscillator-fill-rs: threshold-crossing region fills for oscillator-style
//! chart indicators (CCI, Williams %R).
//!
//! The crate takes over once per-column aggregate buckets and two threshold
//! levels are available, and hands off once fill/stroke path commands have
//! been emitted to an abstract drawing surface. Axis layout, label
//! formatting, data aggregation and styling stay in the host chart.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{OscillatorCompositor, OscillatorStyle};
pub use error::{IndicatorError, IndicatorResult};
