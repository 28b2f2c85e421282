// Host-side tests for the primitive meshes the renderer uploads.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;
mod meshes {
    include!("../src/render/meshes.rs");
}

use crate::core::Shape;
use glam::Vec3;
use meshes::{build_mesh, Vertex};

#[test]
fn triangle_counts_match_each_solid() {
    let expected = [
        (Shape::Cube, 12),
        (Shape::Tetrahedron, 4),
        (Shape::Octahedron, 8),
        (Shape::Icosahedron, 20),
        (Shape::Dodecahedron, 36),
        (Shape::Quad, 2),
    ];
    for (shape, tris) in expected {
        assert_eq!(build_mesh(shape).triangle_count(), tris, "{shape:?}");
    }
}

#[test]
fn normals_are_unit_length_and_point_outward() {
    for shape in Shape::ALL {
        let mesh = build_mesh(shape);
        for tri in mesh.vertices.chunks(3) {
            let n = Vec3::from(tri[0].normal);
            assert!((n.length() - 1.0).abs() < 1e-4, "{shape:?} normal {n:?}");
            let centroid = tri
                .iter()
                .map(|v| Vec3::from(v.position))
                .sum::<Vec3>()
                / 3.0;
            assert!(n.dot(centroid) >= -1e-5, "{shape:?} inward face");
        }
    }
}

#[test]
fn solids_fit_in_unit_sphere() {
    for shape in Shape::ALL {
        for v in build_mesh(shape).vertices {
            assert!(Vec3::from(v.position).length() <= 1.0 + 1e-4);
        }
    }
}

#[test]
fn vertex_layout_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<Vertex>(), 24);
    assert_eq!(Shape::ALL.iter().map(|s| s.index()).collect::<Vec<_>>(), [0, 1, 2, 3, 4, 5]);
}
