//! Domain models for the Crop Profit Calculator

mod crop;
mod fertilizer;
mod quality;
mod report;
mod scenario;

pub use crop::*;
pub use fertilizer::*;
pub use quality::*;
pub use report::*;
pub use scenario::*;
