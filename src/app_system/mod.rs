//! System wiring: tracing, the validated rule set, and the sample run.

pub mod projection_system;
pub mod sample;
pub mod telemetry;

pub use projection_system::*;
pub use sample::*;
pub use telemetry::*;
