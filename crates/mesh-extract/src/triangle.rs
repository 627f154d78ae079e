/// One STL facet as stored in the file: a normal and three vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub normal: [f32; 3],
    pub vertices: [[f32; 3]; 3],
}

impl Triangle {
    /// Build a facet with a zero normal. Measurement never reads the normal.
    pub fn new(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> Self {
        Self {
            normal: [0.0; 3],
            vertices: [v0, v1, v2],
        }
    }

    /// Vertices widened to f64.
    pub fn points(&self) -> [[f64; 3]; 3] {
        self.vertices
            .map(|v| [v[0] as f64, v[1] as f64, v[2] as f64])
    }

    pub fn is_finite(&self) -> bool {
        self.vertices.iter().flatten().all(|c| c.is_finite())
    }
}
