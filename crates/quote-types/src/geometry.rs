use serde::{Deserialize, Serialize};

/// Mesh file formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileType {
    #[serde(rename = "STL")]
    Stl,
}

impl FileType {
    /// The lower-case file suffix (including the dot) for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FileType::Stl => ".stl",
        }
    }
}

/// Axis-aligned extent of a solid, in the file's native length unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x_length: f64,
    pub y_width: f64,
    pub z_height: f64,
}

impl BoundingBox {
    pub fn new(x_length: f64, y_width: f64, z_height: f64) -> Self {
        Self {
            x_length,
            y_width,
            z_height,
        }
    }

    /// Lengths as `[x, y, z]`.
    pub fn as_array(&self) -> [f64; 3] {
        [self.x_length, self.y_width, self.z_height]
    }
}

/// Measured envelope of one uploaded solid.
///
/// Only produced for a non-empty solid. All numeric fields are finite,
/// and `volume` / `surface_area` are non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryRecord {
    pub file_type: FileType,
    /// Lower-cased name of the uploaded file.
    pub file_name: String,
    pub bounding_box: BoundingBox,
    /// Enclosed volume in native unit cubed.
    pub volume: f64,
    /// Total boundary area in native unit squared.
    pub surface_area: f64,
}
