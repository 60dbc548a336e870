//! Tissue Simulator X - 2D vertex-model tissue mechanics engine
//!
//! Represents an epithelial tissue as polygonal cells sharing vertices and
//! edges, and computes the mechanical force on every vertex as the
//! negative gradient of a per-cell energy combining area elasticity,
//! perimeter contractility, and edge line tension. Target areas are
//! time-varying, supplied by per-cell growth models.

pub mod config;
pub mod export;
pub mod geometry;
pub mod growth;
pub mod physics;

pub use config::ForceParameters;
pub use export::{ParameterBlock, ParameterReport};
pub use geometry::{
    CellElement, GeometryGradients, HoneycombGenerator, TissueMesh, Topology, VertexNode,
};
pub use growth::{AreaBasedGrowth, ConstantTargetArea, GrowthModel, GrowthState};
pub use physics::{FarhadifarForce, ForceError, ForceSink};
