use field_core::*;
use field_gpu::{line_vertices, point_instances, LineVertex, PointInstance};
use glam::Vec3;

fn two_particles() -> ParticleField {
    ParticleField::from_particles(vec![
        Particle {
            position: Vec3::new(0.0, 0.0, -100.0),
            color: [1.0, 0.0, 0.0],
            scale: 0.5,
        },
        Particle {
            position: Vec3::new(30.0, 0.0, -100.0),
            color: [0.0, 0.0, 1.0],
            scale: 2.0,
        },
    ])
}

#[test]
fn vertex_layouts_have_expected_strides() {
    assert_eq!(std::mem::size_of::<PointInstance>(), 32);
    assert_eq!(std::mem::size_of::<LineVertex>(), 28);
}

#[test]
fn one_instance_per_particle_in_order() {
    let field = two_particles();
    let instances = point_instances(&field);
    assert_eq!(instances.len(), 2);
    assert_eq!(instances[0].pos, [0.0, 0.0, -100.0]);
    assert_eq!(instances[1].scale, 2.0);
    assert_eq!(instances[1].color, [0.0, 0.0, 1.0]);
}

#[test]
fn line_vertices_carry_endpoint_colors_and_edge_alpha() {
    let field = two_particles();
    let graph = ProximityGraph::build(&field, 60.0, 200);
    let verts = line_vertices(&field, &graph);
    assert_eq!(verts.len(), 2);
    assert_eq!(verts[0].color, [1.0, 0.0, 0.0, 0.5]);
    assert_eq!(verts[1].color, [0.0, 0.0, 1.0, 0.5]);
    assert_eq!(verts[1].pos, [30.0, 0.0, -100.0]);
}

#[test]
fn no_edges_means_no_line_vertices() {
    let field = two_particles();
    let graph = ProximityGraph::build(&field, 10.0, 200);
    assert!(line_vertices(&field, &graph).is_empty());
}
