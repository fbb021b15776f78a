//! # Order Projection
//!
//! Projects an order graph into flat summaries through a small typed mapping engine.
//!
//! ## Ingredients
//!
//! - **Domain types** - Source entities with no mapping concerns → [`domain::Order`], [`domain::OrderItem`]
//! - **Summaries** - Serializable destination types → [`order_projection::OrderSummary`], [`order_item_projection::OrderItemSummary`]
//! - **Projections** - One explicit rule per type pair → [`order_projection::OrderSummaryRule`]
//! - **Engine** - Registration, validation and cycle-aware mapping → [`mapping_framework::Mapper`]
//! - **System** - Validated rules plus the sample run → [`app_system::ProjectionSystem`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use order_projection::app_system::{sample_order, ProjectionSystem};
//! use order_projection::config::MapperConfig;
//!
//! let system = ProjectionSystem::new(MapperConfig::default())?;
//! let summary = system.summarize(&sample_order())?;
//! assert_eq!(summary.total, summary.subtotal + summary.shipping_price);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod app_system;
pub mod config;
pub mod domain;
pub mod error;
pub mod mapping_framework;
pub mod order_item_projection;
pub mod order_projection;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod integration_tests;
