//! Geometry module for the polygonal tissue mesh.
//!
//! Contains the vertex/cell mesh representation, the analytic area and
//! edge-length gradients the force engine consumes, and a honeycomb
//! generator for building test tissues.

mod gradients;
mod honeycomb;
mod mesh;

pub use gradients::GeometryGradients;
pub use honeycomb::HoneycombGenerator;
pub use mesh::{polygon_area, polygon_perimeter, CellElement, TissueMesh, Topology, VertexNode};
