//! Order summaries, including the status label table.

pub mod dtos;
pub mod rules;
pub mod status;

pub use dtos::*;
pub use rules::*;
pub use status::*;
