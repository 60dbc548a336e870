//! Growth module: per-cell target-area dynamics.

mod models;

pub use models::{AreaBasedGrowth, ConstantTargetArea, GrowthModel, GrowthState};
