//! Polygonal tissue mesh representation.
//!
//! A tissue is a set of vertices in the plane plus polygonal cells, each
//! given as an ordered, counterclockwise loop of vertex indices. Vertices
//! know which cells contain them. An edge shared by two cells appears once
//! in each cell's loop, traversed in opposite directions; an edge on the
//! tissue boundary appears in exactly one loop.
//!
//! The mesh owns no force state and performs no topological rearrangement;
//! it answers the read-only queries the force engine consumes.

use std::collections::BTreeSet;

use glam::DVec2;

use crate::growth::{GrowthModel, GrowthState};

/// A vertex of the tissue mesh
#[derive(Debug, Clone, Default)]
pub struct VertexNode {
    /// Position in tissue units
    pub position: DVec2,
    /// Indices of the cells whose boundary loop contains this vertex
    pub containing_cells: BTreeSet<usize>,
}

impl VertexNode {
    pub fn new(position: DVec2) -> Self {
        Self {
            position,
            containing_cells: BTreeSet::new(),
        }
    }
}

/// A polygonal cell: an ordered, counterclockwise boundary loop
///
/// Consecutive loop entries (and last-to-first) form the cell's edges.
#[derive(Debug)]
pub struct CellElement {
    /// Boundary loop of vertex indices, counterclockwise
    pub vertices: Vec<usize>,
    /// Growth model supplying the cell's current target area
    pub growth_model: Option<Box<dyn GrowthModel>>,
}

impl CellElement {
    pub fn new(vertices: Vec<usize>) -> Self {
        Self {
            vertices,
            growth_model: None,
        }
    }

    pub fn with_growth(vertices: Vec<usize>, model: Box<dyn GrowthModel>) -> Self {
        Self {
            vertices,
            growth_model: Some(model),
        }
    }
}

/// Signed shoelace area of an ordered polygon (positive when counterclockwise)
pub fn polygon_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    let mut twice_area = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        twice_area += a.x * b.y - b.x * a.y;
    }
    twice_area / 2.0
}

/// Perimeter of an ordered polygon
pub fn polygon_perimeter(points: &[DVec2]) -> f64 {
    let n = points.len();
    let mut perimeter = 0.0;
    for i in 0..n {
        perimeter += points[i].distance(points[(i + 1) % n]);
    }
    perimeter
}

/// Read-only topology queries the force engine needs from a tissue
///
/// Implementors guarantee the mesh invariant: every adjacent vertex pair in
/// some loop appears in exactly one or two cell loops, and the
/// containing-cell sets stay consistent with the loops.
pub trait Topology {
    fn num_vertices(&self) -> usize;
    fn num_cells(&self) -> usize;
    /// Position of a vertex
    fn vertex_position(&self, vertex_idx: usize) -> DVec2;
    /// Ordered counterclockwise boundary loop of a cell
    fn cell_loop(&self, cell_idx: usize) -> &[usize];
    /// Indices of the cells whose loop contains the given vertex
    fn containing_cells(&self, vertex_idx: usize) -> &BTreeSet<usize>;
}

/// The tissue mesh: vertices plus polygonal cells
#[derive(Debug, Default)]
pub struct TissueMesh {
    vertices: Vec<VertexNode>,
    cells: Vec<CellElement>,
}

impl TissueMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, position: DVec2) -> usize {
        self.vertices.push(VertexNode::new(position));
        self.vertices.len() - 1
    }

    /// Add a cell and register it with every vertex on its loop
    pub fn add_cell(&mut self, cell: CellElement) -> usize {
        let cell_idx = self.cells.len();
        for &vertex_idx in &cell.vertices {
            self.vertices[vertex_idx].containing_cells.insert(cell_idx);
        }
        self.cells.push(cell);
        cell_idx
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn vertex(&self, vertex_idx: usize) -> &VertexNode {
        &self.vertices[vertex_idx]
    }

    pub fn cell(&self, cell_idx: usize) -> &CellElement {
        &self.cells[cell_idx]
    }

    pub fn set_vertex_position(&mut self, vertex_idx: usize, position: DVec2) {
        self.vertices[vertex_idx].position = position;
    }

    pub fn translate_vertex(&mut self, vertex_idx: usize, displacement: DVec2) {
        self.vertices[vertex_idx].position += displacement;
    }

    /// Attach or replace a cell's growth model
    pub fn set_growth_model(&mut self, cell_idx: usize, model: Box<dyn GrowthModel>) {
        self.cells[cell_idx].growth_model = Some(model);
    }

    /// Mutable access to a cell's growth model, for advancing it in time
    pub fn growth_model_mut(&mut self, cell_idx: usize) -> Option<&mut (dyn GrowthModel + '_)> {
        self.cells[cell_idx].growth_model.as_deref_mut()
    }

    /// Current area of a cell's polygon
    pub fn area_of_cell(&self, cell_idx: usize) -> f64 {
        polygon_area(&self.loop_points(cell_idx))
    }

    /// Current perimeter of a cell's polygon
    pub fn perimeter_of_cell(&self, cell_idx: usize) -> f64 {
        polygon_perimeter(&self.loop_points(cell_idx))
    }

    pub(crate) fn loop_points(&self, cell_idx: usize) -> Vec<DVec2> {
        self.cells[cell_idx]
            .vertices
            .iter()
            .map(|&v| self.vertices[v].position)
            .collect()
    }
}

impl Topology for TissueMesh {
    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn num_cells(&self) -> usize {
        self.cells.len()
    }

    fn vertex_position(&self, vertex_idx: usize) -> DVec2 {
        self.vertices[vertex_idx].position
    }

    fn cell_loop(&self, cell_idx: usize) -> &[usize] {
        &self.cells[cell_idx].vertices
    }

    fn containing_cells(&self, vertex_idx: usize) -> &BTreeSet<usize> {
        &self.vertices[vertex_idx].containing_cells
    }
}

impl GrowthState for TissueMesh {
    fn growth_model(&self, cell_idx: usize) -> Option<&dyn GrowthModel> {
        self.cells[cell_idx].growth_model.as_deref()
    }
}
