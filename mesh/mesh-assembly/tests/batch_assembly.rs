//! Integration tests for batch assembly.
//!
//! Run with: cargo test -p mesh-assembly

use mesh_assembly::{
    AssemblyError, BatchParams, Shot, assemble_batch, check_overlaps, shots_from_coordinates,
};
use mesh_sphere::{
    MeshMethod, SpacingMethod, SphereMeshParams, generate_sphere_mesh, surface_point_count,
    validate_hex_mesh,
};
use mesh_types::MeshTopology;

// =============================================================================
// Helpers
// =============================================================================

fn structured_shots() -> Vec<Shot> {
    shots_from_coordinates(
        &[[0.0, 0.0, 2.0], [0.0, 2.0, 0.0], [2.0, 0.0, 0.0]],
        &[1.0, 1.0, 1.0],
    )
    .unwrap()
}

// =============================================================================
// Structured Batch
// =============================================================================

#[test]
fn structured_batch_matches_individual_meshes() {
    let shots = structured_shots();
    let params = BatchParams::new(0.5).with_spacing_method(SpacingMethod::Linear);
    let batch = assemble_batch(&shots, &params).unwrap();

    // each unit shot at l = 0.5 is the 189 element reference sphere
    assert_eq!(batch.element_count(), 3 * 189);
    assert_eq!(batch.node_count(), 3 * 232);

    for (k, record) in batch.shots.iter().enumerate() {
        let k = u32::try_from(k).unwrap();
        assert_eq!(record.node_ids, 232 * k + 1..=232 * (k + 1));
        assert_eq!(record.element_ids, 189 * k + 1..=189 * (k + 1));
    }
}

#[test]
fn offset_shot_keeps_geometry_and_shifted_connectivity() {
    let shots = structured_shots();
    let params = BatchParams::new(0.3).with_mesh_method(MeshMethod::NormalizedCubeAlt);
    let batch = assemble_batch(&shots, &params).unwrap();

    let single = generate_sphere_mesh(
        &SphereMeshParams::new()
            .with_mesh_method(MeshMethod::NormalizedCubeAlt)
            .with_radius(1.0)
            .with_element_length(0.3)
            .with_center(shots[2].center),
    )
    .unwrap();

    let record = &batch.shots[2];
    let node_offset = record.node_ids.start() - 1;
    let element_offset = record.element_ids.start() - 1;

    for element in single.mesh.elements() {
        let index = usize::try_from(element.id + element_offset - 1).unwrap();
        let merged = batch.mesh.element(index).unwrap();
        assert_eq!(merged.id, element.id + element_offset);
        assert_eq!(merged.corners, element.corners.map(|c| c + node_offset));
    }
    for node in single.mesh.nodes() {
        let merged = batch.mesh.node(node.id + node_offset).unwrap();
        assert!((merged.position - node.position).norm() < 1e-12);
    }
}

#[test]
fn surface_nodes_of_each_shot_are_last_in_its_range() {
    let shots = structured_shots();
    let batch = assemble_batch(&shots, &BatchParams::new(0.25)).unwrap();

    for record in &batch.shots {
        let surface = surface_point_count(record.config.edge_elements);
        let surface = u32::try_from(surface).unwrap();
        let first_surface = record.node_ids.end() - surface + 1;
        for id in first_surface..=*record.node_ids.end() {
            let node = batch.mesh.node(id).unwrap();
            assert!((node.distance_to(&record.shot.center) - record.shot.radius).abs() < 1e-9);
        }
    }
}

#[test]
fn merged_mesh_is_valid() {
    let batch = assemble_batch(&structured_shots(), &BatchParams::new(0.2)).unwrap();
    let report = validate_hex_mesh(&batch.mesh);
    assert!(report.is_valid(), "{report}");
}

// =============================================================================
// Offsets and Parallelism
// =============================================================================

#[test]
fn global_offset_shifts_every_id() {
    let shots = structured_shots();
    let base = assemble_batch(&shots, &BatchParams::new(0.4)).unwrap();
    let shifted = assemble_batch(&shots, &BatchParams::new(0.4).with_id_offset(500)).unwrap();

    for (a, b) in base.mesh.elements.iter().zip(&shifted.mesh.elements) {
        assert_eq!(a.id + 500, b.id);
        assert_eq!(a.corners.map(|c| c + 500), b.corners);
    }
    for (a, b) in base.mesh.nodes.iter().zip(&shifted.mesh.nodes) {
        assert_eq!(a.id + 500, b.id);
        assert_eq!(a.position, b.position);
    }
}

#[test]
fn offset_batch_validates_like_local_batch() {
    // eight unit shots on the corners of a cube, about 34k nodes each
    let shots: Vec<Shot> = (0..8u8)
        .map(|corner| {
            let [x, y, z] = [corner & 1, (corner >> 1) & 1, (corner >> 2) & 1].map(f64::from);
            Shot::from_coords(2.5 * x, 2.5 * y, 2.5 * z, 1.0)
        })
        .collect();

    let local = assemble_batch(&shots, &BatchParams::new(0.08)).unwrap();
    let offset = assemble_batch(&shots, &BatchParams::new(0.08).with_id_offset(1)).unwrap();
    assert!(offset.node_count() > 250_000);
    assert_eq!(offset.mesh.consecutive_node_start(), Some(2));

    let report = validate_hex_mesh(&offset.mesh);
    assert!(report.is_valid(), "{report}");
    assert_eq!(offset.mesh.cells().count(), offset.element_count());
    assert!((offset.mesh.total_volume() - local.mesh.total_volume()).abs() < 1e-9);
}

#[test]
fn parallel_and_serial_agree_for_mixed_radii() {
    let shots: Vec<Shot> = (0..12)
        .map(|i| {
            let t = f64::from(i);
            Shot::from_coords(4.0 * t, 0.0, 0.0, 0.5 + 0.1 * t)
        })
        .collect();

    let parallel = assemble_batch(&shots, &BatchParams::new(0.25)).unwrap();
    let serial = assemble_batch(&shots, &BatchParams::new(0.25).with_parallel(false)).unwrap();
    assert_eq!(parallel, serial);
    assert!(check_overlaps(&shots).is_valid());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn empty_batch_is_rejected() {
    assert_eq!(
        assemble_batch(&[], &BatchParams::new(0.1)),
        Err(AssemblyError::EmptyBatch)
    );
}

#[test]
fn invalid_element_length_reports_first_shot() {
    let err = assemble_batch(&structured_shots(), &BatchParams::new(0.0)).unwrap_err();
    assert!(matches!(err, AssemblyError::Shot { index: 0, .. }));
}

#[test]
fn overlapping_shots_still_mesh() {
    let shots = [
        Shot::from_coords(0.0, 0.0, 0.0, 1.0),
        Shot::from_coords(1.0, 0.0, 0.0, 1.0),
    ];
    assert!(!check_overlaps(&shots).is_valid());
    let batch = assemble_batch(&shots, &BatchParams::new(0.5)).unwrap();
    assert_eq!(batch.shot_count(), 2);
}
