use crate::core::Shape;
use glam::Vec3;

/// Flat-shaded vertex: every triangle carries its own face normal.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Non-indexed triangle list for one primitive, unit-sized around the origin.
pub struct MeshData {
    pub vertices: Vec<Vertex>,
}

impl MeshData {
    fn from_triangles(tris: impl IntoIterator<Item = [Vec3; 3]>) -> Self {
        let mut vertices = Vec::new();
        for [a, b, c] in tris {
            let mut n = (b - a).cross(c - a).normalize_or_zero();
            let centroid = (a + b + c) / 3.0;
            // keep normals pointing away from the mesh center
            if n.dot(centroid) < 0.0 {
                n = -n;
            }
            for p in [a, b, c] {
                vertices.push(Vertex {
                    position: p.to_array(),
                    normal: n.to_array(),
                });
            }
        }
        Self { vertices }
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

pub fn build_mesh(shape: Shape) -> MeshData {
    match shape {
        Shape::Cube => cube(),
        Shape::Tetrahedron => tetrahedron(),
        Shape::Octahedron => octahedron(),
        Shape::Icosahedron => icosahedron(),
        Shape::Dodecahedron => dodecahedron(),
        Shape::Quad => quad(),
    }
}

fn cube() -> MeshData {
    let h = 0.5;
    let mut tris = Vec::with_capacity(12);
    for axis in 0..3 {
        for sign in [-1.0f32, 1.0] {
            let mut n = Vec3::ZERO;
            n[axis] = sign;
            let u = Vec3::new(n.y.abs() + n.z.abs(), n.x.abs(), 0.0).normalize() * h;
            let v = n.cross(u).normalize() * h;
            let c = n * h;
            let (p0, p1, p2, p3) = (c - u - v, c + u - v, c + u + v, c - u + v);
            tris.push([p0, p1, p2]);
            tris.push([p0, p2, p3]);
        }
    }
    MeshData::from_triangles(tris)
}

fn tetrahedron() -> MeshData {
    let v = [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
    ]
    .map(|p| p.normalize());
    MeshData::from_triangles([
        [v[0], v[1], v[2]],
        [v[0], v[3], v[1]],
        [v[0], v[2], v[3]],
        [v[1], v[3], v[2]],
    ])
}

fn octahedron() -> MeshData {
    let (px, nx) = (Vec3::X, -Vec3::X);
    let (py, ny) = (Vec3::Y, -Vec3::Y);
    let (pz, nz) = (Vec3::Z, -Vec3::Z);
    MeshData::from_triangles([
        [py, pz, px],
        [py, px, nz],
        [py, nz, nx],
        [py, nx, pz],
        [ny, px, pz],
        [ny, nz, px],
        [ny, nx, nz],
        [ny, pz, nx],
    ])
}

const ICOSA_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosa_vertices() -> [Vec3; 12] {
    let t = (1.0 + 5f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
    .map(|p| p.normalize())
}

fn icosahedron() -> MeshData {
    let v = icosa_vertices();
    MeshData::from_triangles(ICOSA_FACES.iter().map(|f| [v[f[0]], v[f[1]], v[f[2]]]))
}

/// Dual of the icosahedron: one pentagon per icosahedron vertex, built from
/// the centers of the five faces around it.
fn dodecahedron() -> MeshData {
    let v = icosa_vertices();
    let centers: Vec<Vec3> = ICOSA_FACES
        .iter()
        .map(|f| ((v[f[0]] + v[f[1]] + v[f[2]]) / 3.0).normalize())
        .collect();
    let mut tris = Vec::with_capacity(36);
    for (vi, axis) in v.iter().enumerate() {
        let mut ring: Vec<Vec3> = ICOSA_FACES
            .iter()
            .zip(&centers)
            .filter(|(f, _)| f.contains(&vi))
            .map(|(_, c)| *c)
            .collect();
        let u = (ring[0] - *axis * ring[0].dot(*axis)).normalize();
        let w = axis.cross(u);
        let angle = |p: &Vec3| {
            let d = *p - *axis * p.dot(*axis);
            d.dot(w).atan2(d.dot(u))
        };
        ring.sort_by(|a, b| angle(a).total_cmp(&angle(b)));
        for k in 1..ring.len() - 1 {
            tris.push([ring[0], ring[k], ring[k + 1]]);
        }
    }
    MeshData::from_triangles(tris)
}

fn quad() -> MeshData {
    let h = 0.5;
    let (a, b, c, d) = (
        Vec3::new(-h, -h, 0.0),
        Vec3::new(h, -h, 0.0),
        Vec3::new(h, h, 0.0),
        Vec3::new(-h, h, 0.0),
    );
    MeshData::from_triangles([[a, b, c], [a, c, d]])
}
