pub mod engine;
pub mod outcome;

pub use engine::aggregate;
pub use outcome::{Figure, OverallStatus, UnitSummary};
