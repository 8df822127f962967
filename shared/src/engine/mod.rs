//! Profit simulation engine

mod quality;
mod ranking;
mod simulator;

pub use quality::*;
pub use ranking::*;
pub use simulator::*;
