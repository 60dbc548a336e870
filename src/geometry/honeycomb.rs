//! Honeycomb tissue generation.
//!
//! Builds a regular hexagonal tissue of `num_across` x `num_up` cells with
//! correctly shared vertices and counterclockwise loops, the standard
//! starting configuration for vertex-model simulations. An optional seeded
//! Gaussian perturbation produces irregular tissues without touching the
//! topology.

use std::collections::HashMap;

use glam::DVec2;
use rand::prelude::*;
use rand_distr::StandardNormal;

use super::mesh::{CellElement, TissueMesh};

/// Generator for hexagonal tissue meshes
#[derive(Debug, Clone)]
pub struct HoneycombGenerator {
    /// Number of cells per row
    pub num_across: usize,
    /// Number of rows
    pub num_up: usize,
    /// Hexagon edge length in tissue units
    pub edge_length: f64,
}

impl HoneycombGenerator {
    pub fn new(num_across: usize, num_up: usize) -> Self {
        Self {
            num_across,
            num_up,
            edge_length: 1.0,
        }
    }

    pub fn with_edge_length(mut self, edge_length: f64) -> Self {
        self.edge_length = edge_length;
        self
    }

    /// Area of a regular hexagon with this generator's edge length
    pub fn cell_area(&self) -> f64 {
        1.5 * 3.0_f64.sqrt() * self.edge_length * self.edge_length
    }

    /// Generate the regular honeycomb mesh
    ///
    /// Cells are created row by row; vertices on shared corners are
    /// deduplicated so that neighboring cells reference the same
    /// `VertexNode`. No growth models are attached.
    pub fn generate(&self) -> TissueMesh {
        let mut mesh = TissueMesh::new();
        let mut corner_index: HashMap<(i64, i64), usize> = HashMap::new();

        let r = self.edge_length;
        let row_width = 3.0_f64.sqrt() * r;
        // Corner coordinates computed by different hexagons agree only to
        // floating-point roundoff; snap to a grid far below the edge length
        // to merge them.
        let snap = r * 1e-9;

        for row in 0..self.num_up {
            for col in 0..self.num_across {
                let center_x =
                    col as f64 * row_width + if row % 2 == 1 { row_width / 2.0 } else { 0.0 };
                let center_y = row as f64 * 1.5 * r;

                let mut cell_loop = Vec::with_capacity(6);
                for k in 0..6 {
                    // Pointy-top hexagon, corners at -30, 30, .., 270
                    // degrees: increasing angle gives a counterclockwise
                    // loop.
                    let angle =
                        std::f64::consts::FRAC_PI_3 * k as f64 - std::f64::consts::FRAC_PI_6;
                    let corner = DVec2::new(
                        center_x + r * angle.cos(),
                        center_y + r * angle.sin(),
                    );
                    let key = (
                        (corner.x / snap).round() as i64,
                        (corner.y / snap).round() as i64,
                    );
                    let vertex_idx = *corner_index
                        .entry(key)
                        .or_insert_with(|| mesh.add_vertex(corner));
                    cell_loop.push(vertex_idx);
                }
                mesh.add_cell(CellElement::new(cell_loop));
            }
        }

        mesh
    }

    /// Generate and jitter vertex positions with seeded Gaussian noise
    ///
    /// `amplitude` should stay well below the edge length so loops remain
    /// simple polygons.
    pub fn generate_perturbed(&self, amplitude: f64, seed: u64) -> TissueMesh {
        let mut mesh = self.generate();
        let mut rng = StdRng::seed_from_u64(seed);
        for vertex_idx in 0..mesh.num_vertices() {
            let dx: f64 = rng.sample(StandardNormal);
            let dy: f64 = rng.sample(StandardNormal);
            mesh.translate_vertex(vertex_idx, amplitude * DVec2::new(dx, dy));
        }
        mesh
    }
}
