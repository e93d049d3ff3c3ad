pub mod paint;
pub mod record;
pub mod surface;
pub mod svg;
pub mod theme;
pub mod vello_surface;

pub use paint::{fit_surface, render_wheel};
pub use record::{DrawCall, RecordingSurface};
pub use surface::{DrawSurface, TextAlign, TextRun, wedge_path};
pub use svg::SvgSurface;
pub use theme::WheelTheme;
pub use vello_surface::VelloSurface;

// Re-export kurbo so backends outside this crate don't need a direct dependency
pub use kurbo;
