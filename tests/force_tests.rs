//! Validation tests for the vertex-model force engine.
//!
//! The checks pin down the defining properties of the Farhadifar force
//! law with growing target areas:
//! - the area term vanishes when a cell sits at its target area
//! - internal edges carry half the line-tension coefficient per traversal,
//!   boundary edges the full coefficient
//! - the force field is the gradient of a translation-invariant energy,
//!   so a closed tissue's forces sum to zero
//! - evaluation is local, deterministic and fails atomically on corrupt
//!   input

use glam::DVec2;
use tissue_simulator_x::{
    geometry::{CellElement, HoneycombGenerator, TissueMesh, Topology},
    growth::{AreaBasedGrowth, ConstantTargetArea},
    physics::{FarhadifarForce, ForceError},
};

/// One unit square cell with a constant target area
fn unit_square_tissue(target_area: f64) -> TissueMesh {
    let mut mesh = TissueMesh::new();
    let v = [
        mesh.add_vertex(DVec2::new(0.0, 0.0)),
        mesh.add_vertex(DVec2::new(1.0, 0.0)),
        mesh.add_vertex(DVec2::new(1.0, 1.0)),
        mesh.add_vertex(DVec2::new(0.0, 1.0)),
    ];
    mesh.add_cell(CellElement::with_growth(
        v.to_vec(),
        Box::new(ConstantTargetArea::new(target_area)),
    ));
    mesh
}

/// Two unit squares sharing the vertical edge (1, 2)
///
/// Vertex layout:
/// ```text
/// 3 --- 2 --- 5
/// |     |     |
/// 0 --- 1 --- 4
/// ```
fn two_square_tissue() -> TissueMesh {
    let mut mesh = TissueMesh::new();
    let v0 = mesh.add_vertex(DVec2::new(0.0, 0.0));
    let v1 = mesh.add_vertex(DVec2::new(1.0, 0.0));
    let v2 = mesh.add_vertex(DVec2::new(1.0, 1.0));
    let v3 = mesh.add_vertex(DVec2::new(0.0, 1.0));
    let v4 = mesh.add_vertex(DVec2::new(2.0, 0.0));
    let v5 = mesh.add_vertex(DVec2::new(2.0, 1.0));
    mesh.add_cell(CellElement::with_growth(
        vec![v0, v1, v2, v3],
        Box::new(ConstantTargetArea::new(1.0)),
    ));
    mesh.add_cell(CellElement::with_growth(
        vec![v1, v4, v5, v2],
        Box::new(ConstantTargetArea::new(1.0)),
    ));
    mesh
}

/// Honeycomb tissue with every cell at its resting hexagon area
fn honeycomb_tissue(num_across: usize, num_up: usize) -> TissueMesh {
    let generator = HoneycombGenerator::new(num_across, num_up).with_edge_length(0.62);
    let target = generator.cell_area();
    let mut mesh = generator.generate();
    for cell_idx in 0..mesh.num_cells() {
        mesh.set_growth_model(cell_idx, Box::new(ConstantTargetArea::new(target)));
    }
    mesh
}

fn evaluate(engine: &FarhadifarForce, mesh: &TissueMesh) -> Vec<DVec2> {
    let mut forces = vec![DVec2::ZERO; mesh.num_vertices()];
    engine
        .evaluate_forces(mesh, &mut forces)
        .expect("well-formed tissue should evaluate");
    forces
}

fn tension_only_engine() -> FarhadifarForce {
    let mut engine = FarhadifarForce::default();
    engine.set_area_elasticity(0.0);
    engine.set_perimeter_contractility(0.0);
    engine
}

// ============================================================================
// Area elasticity
// ============================================================================

#[test]
fn test_area_term_is_zero_at_target_area() {
    let mesh = unit_square_tissue(1.0);
    let mut engine = FarhadifarForce::default();
    engine.set_perimeter_contractility(0.0);
    engine.set_line_tension(0.0);

    for (vertex_idx, force) in evaluate(&engine, &mesh).into_iter().enumerate() {
        assert_eq!(
            force,
            DVec2::ZERO,
            "area term should vanish at target area, got {:?} at vertex {}",
            force,
            vertex_idx
        );
    }
}

#[test]
fn test_area_force_shrinks_oversized_cell() {
    // Unit square at area 1 with target 0.5: the area force must point
    // toward shrinking the polygon at every vertex.
    let mesh = unit_square_tissue(0.5);
    let mut engine = FarhadifarForce::default();
    engine.set_perimeter_contractility(0.0);
    engine.set_line_tension(0.0);

    let centroid = DVec2::new(0.5, 0.5);
    for (vertex_idx, force) in evaluate(&engine, &mesh).into_iter().enumerate() {
        let inward = centroid - mesh.vertex_position(vertex_idx);
        assert!(
            force.dot(inward) > 0.0,
            "force {:?} at vertex {} should point inward",
            force,
            vertex_idx
        );
    }
    // -(A - A0) * dA/dv at (0, 0) is exactly (0.25, 0.25)
    let forces = evaluate(&engine, &mesh);
    assert!((forces[0] - DVec2::new(0.25, 0.25)).length() < 1e-12);
}

#[test]
fn test_growing_target_area_relaxes_the_area_force() {
    // A growing target area closes the gap to the measured area, so the
    // area force magnitude shrinks between evaluations.
    let mut mesh = unit_square_tissue(0.0);
    mesh.set_growth_model(0, Box::new(AreaBasedGrowth::new(0.5, 0.1, 1.0)));
    let mut engine = FarhadifarForce::default();
    engine.set_perimeter_contractility(0.0);
    engine.set_line_tension(0.0);

    let before = evaluate(&engine, &mesh);
    mesh.growth_model_mut(0).unwrap().update(2.0);
    let after = evaluate(&engine, &mesh);

    for vertex_idx in 0..mesh.num_vertices() {
        assert!(
            after[vertex_idx].length() < before[vertex_idx].length(),
            "growth toward the measured area should weaken the force at vertex {}",
            vertex_idx
        );
    }
}

// ============================================================================
// Line tension
// ============================================================================

#[test]
fn test_boundary_edge_carries_full_tension() {
    let mesh = unit_square_tissue(1.0);
    let engine = tension_only_engine();

    // Both edges at vertex 0 are boundary edges; each pulls with the full
    // coefficient toward the opposite endpoint.
    let forces = evaluate(&engine, &mesh);
    assert!(
        (forces[0] - DVec2::new(0.12, 0.12)).length() < 1e-12,
        "expected full tension on both boundary edges, got {:?}",
        forces[0]
    );
}

#[test]
fn test_shared_edge_tension_halves_reconstruct_full_coefficient() {
    let mesh = two_square_tissue();
    let engine = tension_only_engine();
    let forces = evaluate(&engine, &mesh);

    // At the top of the shared edge (vertex 2) the two boundary edges pull
    // horizontally toward vertices 3 and 5 with 0.12 each and cancel. What
    // remains is the shared edge: traversed once per incident cell at
    // Lambda/2 = 0.06, the two traversals together pull with the full
    // 0.12 toward vertex 1 - exactly what a boundary edge would apply.
    assert!(
        (forces[2] - DVec2::new(0.0, -0.12)).length() < 1e-12,
        "shared edge should contribute 0.06 + 0.06 = 0.12, got {:?}",
        forces[2]
    );
    // Mirror image at the bottom of the shared edge.
    assert!((forces[1] - DVec2::new(0.0, 0.12)).length() < 1e-12);
}

// ============================================================================
// Whole-tissue properties
// ============================================================================

#[test]
fn test_closed_tissue_forces_sum_to_zero() {
    // The energy is translation invariant, so with no external forces the
    // computed forces must sum to the zero vector.
    let generator = HoneycombGenerator::new(4, 3).with_edge_length(0.62);
    let mut mesh = generator.generate_perturbed(0.05, 42);
    for cell_idx in 0..mesh.num_cells() {
        // Off-target on purpose: all three force terms are active.
        mesh.set_growth_model(
            cell_idx,
            Box::new(ConstantTargetArea::new(0.9 * generator.cell_area())),
        );
    }

    let engine = FarhadifarForce::default();
    let total: DVec2 = evaluate(&engine, &mesh).into_iter().sum();
    assert!(
        total.length() < 1e-9,
        "net force on a closed tissue should vanish, got {:?}",
        total
    );
}

#[test]
fn test_target_area_change_is_local_to_the_cell() {
    let mut mesh = honeycomb_tissue(3, 3);
    let engine = FarhadifarForce::default();
    let baseline = evaluate(&engine, &mesh);

    // Inflate the target of the middle cell only.
    let middle = 4;
    let old_target = mesh
        .cell(middle)
        .growth_model
        .as_ref()
        .unwrap()
        .target_area();
    mesh.set_growth_model(middle, Box::new(ConstantTargetArea::new(1.5 * old_target)));
    let modified = evaluate(&engine, &mesh);

    let middle_loop = mesh.cell_loop(middle).to_vec();
    for vertex_idx in 0..mesh.num_vertices() {
        let diff = modified[vertex_idx] - baseline[vertex_idx];
        if middle_loop.contains(&vertex_idx) {
            assert!(
                diff.length() > 1e-6,
                "vertex {} borders the modified cell and should feel it",
                vertex_idx
            );
        } else {
            assert_eq!(
                diff,
                DVec2::ZERO,
                "vertex {} does not border the modified cell",
                vertex_idx
            );
        }
    }
}

#[test]
fn test_evaluation_is_deterministic() {
    let generator = HoneycombGenerator::new(3, 3).with_edge_length(0.62);
    let mut mesh = generator.generate_perturbed(0.04, 11);
    for cell_idx in 0..mesh.num_cells() {
        mesh.set_growth_model(
            cell_idx,
            Box::new(ConstantTargetArea::new(generator.cell_area())),
        );
    }

    let engine = FarhadifarForce::default();
    let first = evaluate(&engine, &mesh);
    let second = evaluate(&engine, &mesh);
    assert_eq!(first, second);
}

// ============================================================================
// Failure injection
// ============================================================================

#[test]
fn test_cell_without_growth_model_aborts_evaluation() {
    let generator = HoneycombGenerator::new(2, 2).with_edge_length(0.62);
    let mut mesh = generator.generate();
    // Configure every cell but the last one.
    for cell_idx in 0..mesh.num_cells() - 1 {
        mesh.set_growth_model(
            cell_idx,
            Box::new(ConstantTargetArea::new(generator.cell_area())),
        );
    }

    let engine = FarhadifarForce::default();
    let mut forces = vec![DVec2::ZERO; mesh.num_vertices()];
    let err = engine.evaluate_forces(&mesh, &mut forces).unwrap_err();

    assert_eq!(err, ForceError::MissingGrowthModel { cell: 3 });
    assert!(
        forces.iter().all(|f| *f == DVec2::ZERO),
        "no forces may be delivered on a failed evaluation"
    );
}

#[test]
fn test_edge_shared_by_three_cells_is_non_manifold() {
    let mut mesh = TissueMesh::new();
    let v0 = mesh.add_vertex(DVec2::new(0.0, 0.0));
    let v1 = mesh.add_vertex(DVec2::new(1.0, 0.0));
    let above = mesh.add_vertex(DVec2::new(0.5, 1.0));
    let below = mesh.add_vertex(DVec2::new(0.5, -1.0));
    let far_above = mesh.add_vertex(DVec2::new(0.5, 2.0));

    // Three triangles all containing the edge (v0, v1).
    for apex_loop in [vec![v0, v1, above], vec![v1, v0, below], vec![v0, v1, far_above]] {
        mesh.add_cell(CellElement::with_growth(
            apex_loop,
            Box::new(ConstantTargetArea::new(0.5)),
        ));
    }

    let engine = FarhadifarForce::default();
    let mut forces = vec![DVec2::ZERO; mesh.num_vertices()];
    let err = engine.evaluate_forces(&mesh, &mut forces).unwrap_err();

    assert!(
        matches!(err, ForceError::NonManifoldEdge { shared_cells: 3, .. }),
        "expected a non-manifold edge error, got {:?}",
        err
    );
}
