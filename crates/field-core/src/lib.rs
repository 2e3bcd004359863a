pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod graph;
pub mod lifecycle;
pub mod parallax;
pub mod platform;
pub mod scheduler;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use graph::*;
pub use lifecycle::*;
pub use parallax::*;
pub use platform::*;
pub use scheduler::*;
