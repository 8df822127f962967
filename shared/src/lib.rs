//! Shared types and calculation engine for the Crop Profit Calculator
//!
//! This crate contains the crop and fertilizer models, the profit simulation
//! engine and the static crop catalog shared between the WASM bindings and
//! the offline ranking precompute.

pub mod catalog;
pub mod engine;
pub mod models;
pub mod types;
pub mod validation;

pub use catalog::*;
pub use engine::*;
pub use models::*;
pub use types::*;
pub use validation::*;
