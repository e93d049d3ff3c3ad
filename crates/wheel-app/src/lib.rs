pub mod controller;
pub mod input;

pub use controller::{Controller, Controls};
pub use input::WheelEvent;
