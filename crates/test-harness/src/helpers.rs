//! Helper functions: error type and mesh builders.

use mesh_extract::Triangle;
use quote_types::CostParameters;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("dispatch error: {message}")]
    DispatchError { message: String },

    #[error("unexpected response to {request}: {detail}")]
    UnexpectedResponse { request: String, detail: String },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("STL error: {reason}")]
    StlError { reason: String },

    #[error("no file named {name} in the current batch")]
    FileNotFound { name: String },
}

// ── Mesh Builders ───────────────────────────────────────────────────────────

/// Closed axis-aligned box from `min` to `max`, 12 triangles, outward winding.
pub fn box_triangles(min: [f32; 3], max: [f32; 3]) -> Vec<Triangle> {
    let corner = |i: usize| -> [f32; 3] {
        [
            if i & 1 == 0 { min[0] } else { max[0] },
            if i & 2 == 0 { min[1] } else { max[1] },
            if i & 4 == 0 { min[2] } else { max[2] },
        ]
    };
    // Corner index bits: 1 = +x, 2 = +y, 4 = +z.
    let quads: [[usize; 4]; 6] = [
        [0, 2, 3, 1], // bottom
        [4, 5, 7, 6], // top
        [0, 1, 5, 4], // front
        [2, 6, 7, 3], // back
        [0, 4, 6, 2], // left
        [1, 3, 7, 5], // right
    ];

    let mut tris = Vec::with_capacity(12);
    for q in quads {
        tris.push(Triangle::new(corner(q[0]), corner(q[1]), corner(q[2])));
        tris.push(Triangle::new(corner(q[0]), corner(q[2]), corner(q[3])));
    }
    tris
}

/// Cube with one corner at the origin.
pub fn cube_triangles(edge: f32) -> Vec<Triangle> {
    box_triangles([0.0; 3], [edge; 3])
}

/// Right-corner tetrahedron with legs of length `leg` along each axis.
///
/// Volume is `leg³ / 6`.
pub fn tetrahedron_triangles(leg: f32) -> Vec<Triangle> {
    let o = [0.0, 0.0, 0.0];
    let x = [leg, 0.0, 0.0];
    let y = [0.0, leg, 0.0];
    let z = [0.0, 0.0, leg];
    vec![
        Triangle::new(o, y, x),
        Triangle::new(o, x, z),
        Triangle::new(o, z, y),
        Triangle::new(x, y, z),
    ]
}

/// Shift every vertex by `offset`.
pub fn translate(triangles: &[Triangle], offset: [f32; 3]) -> Vec<Triangle> {
    triangles
        .iter()
        .map(|t| {
            let [a, b, c] = t.vertices.map(|v| {
                [v[0] + offset[0], v[1] + offset[1], v[2] + offset[2]]
            });
            Triangle::new(a, b, c)
        })
        .collect()
}

// ── Cost Parameters ─────────────────────────────────────────────────────────

/// All rates 1, no waste, given spacing.
pub fn unit_rates(boundary_spacing: f64) -> CostParameters {
    CostParameters {
        silicon_rate: 1.0,
        part_rate: 1.0,
        master_part: 1.0,
        boundary_spacing,
        part_waste_gate: 0.0,
    }
}
