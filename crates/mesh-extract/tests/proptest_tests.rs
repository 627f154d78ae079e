//! Property-based tests for STL decoding and mesh measurement.

use proptest::prelude::*;

use mesh_extract::{decode_stl, extract, ExtractConfig, ExtractError, Triangle};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Arbitrary vertex in a reasonable part-sized range.
fn arb_vertex() -> impl Strategy<Value = [f32; 3]> {
    (-500.0f32..500.0, -500.0f32..500.0, -500.0f32..500.0).prop_map(|(x, y, z)| [x, y, z])
}

fn arb_triangle() -> impl Strategy<Value = Triangle> {
    (arb_vertex(), arb_vertex(), arb_vertex()).prop_map(|(a, b, c)| Triangle::new(a, b, c))
}

/// Arbitrary positive box dimension (avoids degenerate zero-size).
fn arb_positive_dim() -> impl Strategy<Value = f32> {
    0.5f32..200.0
}

fn binary_stl(triangles: &[Triangle]) -> Vec<u8> {
    let mut buf = vec![0u8; 80];
    buf.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
    for tri in triangles {
        for c in tri.normal {
            buf.extend_from_slice(&c.to_le_bytes());
        }
        for v in tri.vertices {
            for c in v {
                buf.extend_from_slice(&c.to_le_bytes());
            }
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }
    buf
}

/// Closed box with outward winding.
fn box_triangles(min: [f32; 3], max: [f32; 3]) -> Vec<Triangle> {
    let v = |i: usize| -> [f32; 3] {
        [
            if i & 1 == 0 { min[0] } else { max[0] },
            if i & 2 == 0 { min[1] } else { max[1] },
            if i & 4 == 0 { min[2] } else { max[2] },
        ]
    };
    let quads: [[usize; 4]; 6] = [
        [0, 2, 3, 1], // z-
        [4, 5, 7, 6], // z+
        [0, 1, 5, 4], // y-
        [2, 6, 7, 3], // y+
        [0, 4, 6, 2], // x-
        [1, 3, 7, 5], // x+
    ];
    quads
        .iter()
        .flat_map(|q| {
            [
                Triangle::new(v(q[0]), v(q[1]), v(q[2])),
                Triangle::new(v(q[0]), v(q[2]), v(q[3])),
            ]
        })
        .collect()
}

// ---------------------------------------------------------------------------
// 1. Bounding box equals max - min computed independently from all vertices
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn bounding_box_matches_vertex_extremes(tris in prop::collection::vec(arb_triangle(), 1..40)) {
        let record = extract(&binary_stl(&tris), "soup.stl").unwrap();

        let mut expected = [0.0f64; 3];
        for (axis, out) in expected.iter_mut().enumerate() {
            let coords: Vec<f64> = tris
                .iter()
                .flat_map(|t| t.vertices.iter().map(move |v| v[axis] as f64))
                .collect();
            let lo = coords.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = coords.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            *out = hi - lo;
        }

        prop_assert_eq!(record.bounding_box.as_array(), expected);
    }
}

// ---------------------------------------------------------------------------
// 2. Volume and surface area are never negative
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn volume_and_area_non_negative(tris in prop::collection::vec(arb_triangle(), 1..40)) {
        let record = extract(&binary_stl(&tris), "soup.stl").unwrap();
        prop_assert!(record.volume >= 0.0);
        prop_assert!(record.surface_area >= 0.0);
        prop_assert!(record.volume.is_finite() && record.surface_area.is_finite());
    }
}

// ---------------------------------------------------------------------------
// 3. Closed boxes measure exactly as their dimensions predict
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn closed_box_volume_and_area(
        origin in arb_vertex(),
        w in arb_positive_dim(),
        d in arb_positive_dim(),
        h in arb_positive_dim(),
    ) {
        let max = [origin[0] + w, origin[1] + d, origin[2] + h];
        let record = extract(&binary_stl(&box_triangles(origin, max)), "box.stl").unwrap();

        // Use the f32-rounded extents actually stored in the file.
        let [a, b, c] = record.bounding_box.as_array();
        let volume = a * b * c;
        let area = 2.0 * (a * b + b * c + c * a);

        prop_assert!((record.volume - volume).abs() <= 1e-6 * volume.max(1.0),
            "volume {} != {}", record.volume, volume);
        prop_assert!((record.surface_area - area).abs() <= 1e-9 * area.max(1.0),
            "area {} != {}", record.surface_area, area);
    }
}

// ---------------------------------------------------------------------------
// 4. Decoding arbitrary bytes never panics
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..600)) {
        let _ = decode_stl(&bytes, &ExtractConfig::default());
    }
}

// ---------------------------------------------------------------------------
// 5. Binary decoding returns exactly the facets that were written
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn binary_decode_preserves_facets(tris in prop::collection::vec(arb_triangle(), 0..20)) {
        let decoded = decode_stl(&binary_stl(&tris), &ExtractConfig::binary_only()).unwrap();
        prop_assert_eq!(decoded, tris);
    }
}

// ---------------------------------------------------------------------------
// 6. Unrecognized suffix is rejected whatever the payload
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn unsupported_suffix_ignores_content(
        bytes in prop::collection::vec(any::<u8>(), 0..200),
        stem in "[a-z]{1,8}",
        ext in prop::sample::select(vec![".obj", ".step", ".3mf", ".stl.bak", ""]),
    ) {
        let name = format!("{}{}", stem, ext);
        let err = extract(&bytes, &name).unwrap_err();
        prop_assert_eq!(err, ExtractError::UnsupportedFormat { file_name: name.clone() });
    }
}
