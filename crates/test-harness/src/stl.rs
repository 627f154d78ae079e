//! STL writers for triangle lists: binary and ASCII formats.

use mesh_extract::Triangle;

use crate::helpers::HarnessError;

/// Write triangles as a binary STL file.
///
/// Binary STL format:
/// - 80-byte header (arbitrary text)
/// - u32 triangle count (little-endian)
/// - For each triangle: 3×f32 normal + 3×(3×f32 vertex) + u16 attribute = 50 bytes
///
/// Normals are recomputed from the winding.
pub fn write_binary_stl(triangles: &[Triangle], name: &str) -> Vec<u8> {
    let file_size = 80 + 4 + triangles.len() * 50;
    let mut buf = Vec::with_capacity(file_size);

    // 80-byte header. Never starts with "solid" so readers cannot mistake it for text.
    let header = format!("binary STL: {}", name);
    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(80)]);
    buf.resize(80, 0u8);

    buf.extend_from_slice(&(triangles.len() as u32).to_le_bytes());

    for tri in triangles {
        for c in face_normal(tri) {
            buf.extend_from_slice(&c.to_le_bytes());
        }
        for v in &tri.vertices {
            for c in v {
                buf.extend_from_slice(&c.to_le_bytes());
            }
        }
        // Attribute byte count (unused)
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    buf
}

/// Write triangles as an ASCII STL string.
pub fn write_ascii_stl(triangles: &[Triangle], name: &str) -> String {
    let mut out = String::with_capacity(triangles.len() * 300);
    out.push_str(&format!("solid {}\n", name));

    for tri in triangles {
        let [nx, ny, nz] = face_normal(tri);
        out.push_str(&format!("  facet normal {} {} {}\n", nx, ny, nz));
        out.push_str("    outer loop\n");
        for v in &tri.vertices {
            out.push_str(&format!("      vertex {} {} {}\n", v[0], v[1], v[2]));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {}\n", name));
    out
}

/// Write a binary STL and cut it to `len` bytes, for truncation tests.
pub fn truncated_binary_stl(
    triangles: &[Triangle],
    len: usize,
) -> Result<Vec<u8>, HarnessError> {
    let mut bytes = write_binary_stl(triangles, "truncated");
    if len >= bytes.len() {
        return Err(HarnessError::StlError {
            reason: format!("cannot truncate {} bytes to {}", bytes.len(), len),
        });
    }
    bytes.truncate(len);
    Ok(bytes)
}

/// Unit normal from the winding, or +Z for a degenerate facet.
fn face_normal(tri: &Triangle) -> [f32; 3] {
    let [v0, v1, v2] = tri.vertices;
    let (ax, ay, az) = (v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]);
    let (bx, by, bz) = (v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]);
    let nx = ay * bz - az * by;
    let ny = az * bx - ax * bz;
    let nz = ax * by - ay * bx;
    let len = (nx * nx + ny * ny + nz * nz).sqrt();
    if len > 1e-12 {
        [nx / len, ny / len, nz / len]
    } else {
        [0.0, 0.0, 1.0]
    }
}
