// File: crates/nanochart-core/src/lib.rs
// Summary: Core library entry point; range math, projection, label layout and the chart controller.

pub mod axis;
pub mod chart;
pub mod color;
pub mod error;
pub mod format;
pub mod geometry;
pub mod layout;
pub mod legend;
pub mod scale;
pub mod schedule;
pub mod series;
pub mod settings;
pub mod tooltip;
pub mod types;
pub mod view;

pub use axis::AxisTick;
pub use chart::{Chart, ChartLayout, GridLine, HoverState, LabelPlacement, Marker, SeriesGeometry, TextAnchor};
pub use color::Rgba;
pub use error::{ChartError, Result};
pub use format::format_number;
pub use geometry::{convert_to_path, to_coordinate, to_coordinates};
pub use layout::{fit_labels, reduce_collection, truncate_label, LabelBudget};
pub use legend::LegendEntry;
pub use scale::{calculate_range_projection, calculate_range_projection_with, extend_range, values_for_range, ProjectionMode};
pub use schedule::{Debounce, Throttle};
pub use series::{ChartData, Series};
pub use settings::Settings;
pub use tooltip::{place_tooltip, DefaultTooltip, TooltipRenderer, TooltipSample};
pub use types::{LabelCandidate, Range, RangesConstraint, Viewport, ViewportCoordinate};
pub use view::{resolve, RangesCache};
