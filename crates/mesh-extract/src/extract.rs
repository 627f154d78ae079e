use quote_types::{BoundingBox, FileType, GeometryRecord};
use tracing::{info, instrument, warn};

use crate::config::ExtractConfig;
use crate::decode::decode_stl;
use crate::errors::ExtractError;
use crate::measure::measure;
use crate::triangle::Triangle;

/// Map a lower-cased file name to a supported format by suffix alone.
pub fn file_type_for(lower_name: &str) -> Option<FileType> {
    if lower_name.ends_with(FileType::Stl.extension()) {
        Some(FileType::Stl)
    } else {
        None
    }
}

/// Extract a geometry record from one uploaded file with default settings.
pub fn extract(bytes: &[u8], file_name: &str) -> Result<GeometryRecord, ExtractError> {
    extract_with_config(bytes, file_name, &ExtractConfig::default())
}

/// Extract a geometry record from one uploaded file.
///
/// The file name is lower-cased and checked for the `.stl` suffix before the
/// bytes are looked at. Decoding problems and empty meshes are reported as
/// `InvalidGeometry`. Facets with non-finite coordinates are dropped before
/// measuring.
#[instrument(skip(bytes, config), fields(len = bytes.len()))]
pub fn extract_with_config(
    bytes: &[u8],
    file_name: &str,
    config: &ExtractConfig,
) -> Result<GeometryRecord, ExtractError> {
    let file_name = file_name.to_lowercase();

    let file_type = file_type_for(&file_name).ok_or_else(|| ExtractError::UnsupportedFormat {
        file_name: file_name.clone(),
    })?;

    let triangles =
        decode_stl(bytes, config).map_err(|e| ExtractError::invalid(&file_name, e.to_string()))?;

    let decoded = triangles.len();
    let triangles: Vec<Triangle> = triangles.into_iter().filter(Triangle::is_finite).collect();
    if triangles.len() < decoded {
        warn!(
            file_name = %file_name,
            dropped = decoded - triangles.len(),
            "dropped facets with non-finite coordinates"
        );
    }

    let m = measure(&triangles)
        .ok_or_else(|| ExtractError::invalid(&file_name, "mesh has no triangles"))?;
    if !m.is_finite() {
        return Err(ExtractError::invalid(&file_name, "measured values are not finite"));
    }

    let [x, y, z] = m.bounds.extents();
    info!(
        file_name = %file_name,
        triangles = triangles.len(),
        volume = m.volume,
        surface_area = m.surface_area,
        "geometry extracted"
    );

    Ok(GeometryRecord {
        file_type,
        file_name,
        bounding_box: BoundingBox::new(x, y, z),
        volume: m.volume,
        surface_area: m.surface_area,
    })
}
