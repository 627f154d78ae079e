//! Mesh math over a triangle list: bounding box, volume, surface area.
//!
//! All arithmetic runs in f64 on vertices widened from the file's f32.

use crate::triangle::Triangle;

/// Axis-aligned bounding box as `min`/`max` corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Aabb {
    /// Per-axis `max - min`.
    pub fn extents(&self) -> [f64; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }
}

/// Everything extraction reports about a solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub bounds: Aabb,
    pub volume: f64,
    pub surface_area: f64,
}

impl Measurements {
    pub fn is_finite(&self) -> bool {
        self.bounds.extents().iter().all(|e| e.is_finite())
            && self.volume.is_finite()
            && self.surface_area.is_finite()
    }
}

/// Measure a triangle list. Returns `None` when there are no triangles.
pub fn measure(triangles: &[Triangle]) -> Option<Measurements> {
    let bounds = bounding_box(triangles)?;
    Some(Measurements {
        bounds,
        volume: mesh_volume(triangles),
        surface_area: mesh_surface_area(triangles),
    })
}

/// Compute the axis-aligned bounding box over every vertex.
pub fn bounding_box(triangles: &[Triangle]) -> Option<Aabb> {
    if triangles.is_empty() {
        return None;
    }
    let mut min = [f64::MAX; 3];
    let mut max = [f64::MIN; 3];
    for tri in triangles {
        for p in tri.points() {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
    }
    Some(Aabb { min, max })
}

/// Compute the enclosed volume of a triangle mesh using the divergence theorem.
///
/// Sums the signed volumes of the tetrahedra formed by each triangle and the
/// origin, then takes the absolute value. Exact for a closed mesh; for open
/// or self-intersecting meshes the result is whatever the sum gives.
pub fn mesh_volume(triangles: &[Triangle]) -> f64 {
    let mut volume = 0.0f64;

    for tri in triangles {
        let [[x0, y0, z0], [x1, y1, z1], [x2, y2, z2]] = tri.points();
        volume += x0 * (y1 * z2 - y2 * z1) + x1 * (y2 * z0 - y0 * z2) + x2 * (y0 * z1 - y1 * z0);
    }

    (volume / 6.0).abs()
}

/// Compute the total surface area of a triangle mesh.
pub fn mesh_surface_area(triangles: &[Triangle]) -> f64 {
    let mut area = 0.0f64;

    for tri in triangles {
        let [p0, p1, p2] = tri.points();
        let (ax, ay, az) = (p1[0] - p0[0], p1[1] - p0[1], p1[2] - p0[2]);
        let (bx, by, bz) = (p2[0] - p0[0], p2[1] - p0[1], p2[2] - p0[2]);

        // Cross product magnitude / 2
        let cx = ay * bz - az * by;
        let cy = az * bx - ax * bz;
        let cz = ax * by - ay * bx;
        area += (cx * cx + cy * cy + cz * cz).sqrt() / 2.0;
    }

    area
}
