//! Line-item summaries, flattened from the product snapshot.

pub mod dtos;
pub mod rules;

pub use dtos::*;
pub use rules::*;
