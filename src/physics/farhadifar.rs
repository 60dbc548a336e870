//! Farhadifar vertex-model force with growing target areas.
//!
//! The force on a vertex is the negative gradient of the tissue free
//! energy evaluated at that vertex's position. The free energy of each
//! cell has three terms: area elasticity about a time-varying target area,
//! perimeter contractility, and line tension along cell-cell and
//! cell-boundary edges:
//!
//! E = sum_c K/2 (A_c - A0_c)^2 + sum_c Gamma/2 P_c^2 + sum_<i,j> Lambda l_ij
//!
//! Evaluation runs in two phases. Phase 1 measures every cell once (area,
//! perimeter, target area) into a read-only table; phase 2 walks the
//! vertices and accumulates the three gradient terms from each incident
//! cell. Moving a vertex only changes the energy of the cells containing
//! it, so those are the only contributions that appear.
//!
//! Reference: Farhadifar et al., Curr Biol 2007

use glam::DVec2;
use thiserror::Error;

use crate::config::ForceParameters;
use crate::export::{ParameterBlock, ParameterReport};
use crate::geometry::{polygon_area, polygon_perimeter, GeometryGradients, Topology};
use crate::growth::GrowthState;

/// Fatal errors raised during force evaluation
///
/// Both kinds indicate invariant violations in inputs the engine does not
/// own; evaluation aborts without delivering a partial force table and the
/// caller must discard the sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForceError {
    /// A cell carries no growth model, so its target area cannot be
    /// resolved. This is a construction-time bug in tissue setup.
    #[error("cell {cell} has no growth model attached; its target area cannot be resolved")]
    MissingGrowthModel { cell: usize },

    /// An edge is contained in a number of cells other than 1 or 2,
    /// meaning the mesh is non-manifold or its adjacency is corrupted.
    #[error("edge ({vertex_a}, {vertex_b}) is shared by {shared_cells} cells; a well-formed mesh allows 1 or 2")]
    NonManifoldEdge {
        vertex_a: usize,
        vertex_b: usize,
        shared_cells: usize,
    },
}

/// Destination for computed vertex forces
pub trait ForceSink {
    /// Add a force contribution for the given vertex
    fn add_force_contribution(&mut self, vertex_idx: usize, force: DVec2);
}

impl ForceSink for Vec<DVec2> {
    fn add_force_contribution(&mut self, vertex_idx: usize, force: DVec2) {
        self[vertex_idx] += force;
    }
}

/// Per-cell geometry measured at the start of every evaluation
///
/// Never cached across calls: vertex positions move between integration
/// steps, and stale geometry would silently corrupt the forces.
#[derive(Debug, Clone, Copy)]
struct CellMeasurements {
    area: f64,
    perimeter: f64,
    target_area: f64,
}

/// Vertex-model force engine
///
/// Stateless between calls: [`FarhadifarForce::evaluate_forces`] is a pure
/// function of the current tissue geometry and target areas, re-run every
/// integration step.
#[derive(Debug, Clone, Default)]
pub struct FarhadifarForce {
    params: ForceParameters,
}

impl FarhadifarForce {
    pub fn new(params: ForceParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ForceParameters {
        &self.params
    }

    pub fn area_elasticity(&self) -> f64 {
        self.params.area_elasticity
    }

    pub fn set_area_elasticity(&mut self, area_elasticity: f64) {
        self.params.area_elasticity = area_elasticity;
    }

    pub fn perimeter_contractility(&self) -> f64 {
        self.params.perimeter_contractility
    }

    pub fn set_perimeter_contractility(&mut self, perimeter_contractility: f64) {
        self.params.perimeter_contractility = perimeter_contractility;
    }

    pub fn line_tension(&self) -> f64 {
        self.params.line_tension
    }

    pub fn set_line_tension(&mut self, line_tension: f64) {
        self.params.line_tension = line_tension;
    }

    /// Compute and deliver the force on every vertex of the tissue
    ///
    /// On error the evaluation aborts and whatever the sink received so far
    /// must be discarded; no partial force table is valid.
    pub fn evaluate_forces<T, S>(&self, tissue: &T, sink: &mut S) -> Result<(), ForceError>
    where
        T: Topology + GeometryGradients + GrowthState,
        S: ForceSink,
    {
        let measurements = self.measure_cells(tissue)?;

        for vertex_idx in 0..tissue.num_vertices() {
            let force = self.force_on_vertex(tissue, &measurements, vertex_idx)?;
            sink.add_force_contribution(vertex_idx, force);
        }

        Ok(())
    }

    /// Phase 1: measure area, perimeter and target area of every cell
    fn measure_cells<T>(&self, tissue: &T) -> Result<Vec<CellMeasurements>, ForceError>
    where
        T: Topology + GrowthState,
    {
        let mut measurements = Vec::with_capacity(tissue.num_cells());
        for cell_idx in 0..tissue.num_cells() {
            let points: Vec<DVec2> = tissue
                .cell_loop(cell_idx)
                .iter()
                .map(|&v| tissue.vertex_position(v))
                .collect();
            let model = tissue
                .growth_model(cell_idx)
                .ok_or(ForceError::MissingGrowthModel { cell: cell_idx })?;
            measurements.push(CellMeasurements {
                area: polygon_area(&points),
                perimeter: polygon_perimeter(&points),
                target_area: model.target_area(),
            });
        }
        Ok(measurements)
    }

    /// Effective line tension for one traversal of the directed edge
    /// (vertex_a, vertex_b)
    ///
    /// An internal edge is traversed once by each of its two cells, so each
    /// traversal carries half the coefficient; a boundary edge is traversed
    /// once and carries it in full.
    fn line_tension_for_edge<T: Topology>(
        &self,
        tissue: &T,
        vertex_a: usize,
        vertex_b: usize,
    ) -> Result<f64, ForceError> {
        let shared_cells = tissue
            .containing_cells(vertex_a)
            .intersection(tissue.containing_cells(vertex_b))
            .count();

        match shared_cells {
            1 => Ok(self.params.line_tension),
            2 => Ok(self.params.line_tension / 2.0),
            n => Err(ForceError::NonManifoldEdge {
                vertex_a,
                vertex_b,
                shared_cells: n,
            }),
        }
    }

    /// Phase 2: accumulate the three gradient terms at one vertex
    fn force_on_vertex<T>(
        &self,
        tissue: &T,
        measurements: &[CellMeasurements],
        vertex_idx: usize,
    ) -> Result<DVec2, ForceError>
    where
        T: Topology + GeometryGradients,
    {
        let mut area_elasticity_contribution = DVec2::ZERO;
        let mut perimeter_contractility_contribution = DVec2::ZERO;
        let mut line_tension_contribution = DVec2::ZERO;

        for &cell_idx in tissue.containing_cells(vertex_idx) {
            let cell_loop = tissue.cell_loop(cell_idx);
            let num_vertices = cell_loop.len();
            let local_idx = cell_loop
                .iter()
                .position(|&v| v == vertex_idx)
                .expect("vertex adjacency out of sync with cell loop");

            let previous_local_idx = (local_idx + num_vertices - 1) % num_vertices;
            let next_local_idx = (local_idx + 1) % num_vertices;
            let previous_vertex = cell_loop[previous_local_idx];
            let next_vertex = cell_loop[next_local_idx];

            let cell = &measurements[cell_idx];

            // Area elasticity: -K (A - A0) dA/dv
            let area_gradient = tissue.area_gradient(cell_idx, local_idx);
            area_elasticity_contribution -=
                self.params.area_elasticity * (cell.area - cell.target_area) * area_gradient;

            let previous_edge_tension =
                self.line_tension_for_edge(tissue, previous_vertex, vertex_idx)?;
            let next_edge_tension = self.line_tension_for_edge(tissue, vertex_idx, next_vertex)?;

            // The predecessor edge reaches this vertex from the other side:
            // its length gradient here is the negated next-edge gradient
            // taken at the predecessor's loop position.
            let previous_edge_gradient = -tissue.next_edge_gradient(cell_idx, previous_local_idx);
            let next_edge_gradient = tissue.next_edge_gradient(cell_idx, local_idx);

            line_tension_contribution -= previous_edge_tension * previous_edge_gradient
                + next_edge_tension * next_edge_gradient;

            // The perimeter gradient at a vertex is the sum of the two
            // adjacent edge-length gradients.
            let perimeter_gradient = previous_edge_gradient + next_edge_gradient;
            perimeter_contractility_contribution -=
                self.params.perimeter_contractility * cell.perimeter * perimeter_gradient;
        }

        Ok(area_elasticity_contribution
            + perimeter_contractility_contribution
            + line_tension_contribution)
    }

    /// Append this engine's coefficients to a configuration report
    pub fn append_parameters(&self, report: &mut ParameterReport) {
        let mut block = ParameterBlock::new("FarhadifarForce");
        block.push("AreaElasticityParameter", self.params.area_elasticity);
        block.push(
            "PerimeterContractilityParameter",
            self.params.perimeter_contractility,
        );
        block.push("LineTensionParameter", self.params.line_tension);
        report.push_block(block);
    }
}
