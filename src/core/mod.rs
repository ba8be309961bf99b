mod projection;
mod reference_line;
mod threshold_fill;
mod types;

pub use projection::{project_columns, project_columns_into};
pub use reference_line::{draw_reference_line, snap_to_pixel};
pub use threshold_fill::{FillDirection, FillRegion, FillVertex, fill_threshold_regions};
pub use types::{AffineTransform, AggregateColumns, ProjectedPoint};
