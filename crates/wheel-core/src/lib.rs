pub mod config;
pub mod format;
pub mod geometry;
pub mod model;
pub mod parser;
pub mod spin;
pub mod status;

pub use config::{ConfigError, WheelConfig};
pub use format::{format_percent, segment_label, truncate_label};
pub use geometry::build_segments;
pub use model::*;
pub use parser::{default_text, parse_options};
pub use spin::{Frame, SpinAnimation, SpinPhase, SpinPlan, SpinState, current_index, rotation_at};
pub use status::{Status, can_spin, status_message};
