//! Assertion helpers with diagnostic output.
//!
//! Each check returns `Err(HarnessError::AssertionFailed)` carrying the
//! caller's context string, expected and actual values, and the tolerance.

use quote_types::{BoundingBox, CostResult, GeometryRecord};

use crate::helpers::HarnessError;

/// Assert two floats agree within `tol`.
pub fn assert_close(actual: f64, expected: f64, tol: f64, ctx: &str) -> Result<(), HarnessError> {
    if (actual - expected).abs() <= tol {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected {:.6}, got {:.6} (tol={})",
                ctx, expected, actual, tol,
            ),
        })
    }
}

/// Assert the record's bounding box extents within tolerance.
pub fn assert_bounding_box(
    record: &GeometryRecord,
    expected: BoundingBox,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let actual = record.bounding_box.as_array();
    for (i, (a, e)) in actual.iter().zip(expected.as_array()).enumerate() {
        if (a - e).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] {} extent[{}]: expected {:.3}, got {:.3} (tol={})",
                    ctx, record.file_name, i, e, a, tol,
                ),
            });
        }
    }
    Ok(())
}

/// Assert volume and surface area of a record.
pub fn assert_measurements(
    record: &GeometryRecord,
    volume: f64,
    surface_area: f64,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    assert_close(record.volume, volume, tol, &format!("{} volume", ctx))?;
    assert_close(
        record.surface_area,
        surface_area,
        tol,
        &format!("{} surface_area", ctx),
    )
}

/// Assert every figure of a cost result against a reference.
///
/// The first mismatching key is reported by its JSON name.
pub fn assert_cost_result(
    actual: &CostResult,
    expected: &CostResult,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let pairs = [
        ("x_dimension", actual.x_dimension, expected.x_dimension),
        ("y_dimension", actual.y_dimension, expected.y_dimension),
        ("z_dimension", actual.z_dimension, expected.z_dimension),
        ("volume", actual.volume, expected.volume),
        ("new_X", actual.new_x, expected.new_x),
        ("new_Y", actual.new_y, expected.new_y),
        ("new_Z", actual.new_z, expected.new_z),
        ("volume_in_cc", actual.volume_in_cc, expected.volume_in_cc),
        ("weight", actual.weight, expected.weight),
        (
            "master_pattern_cost",
            actual.master_pattern_cost,
            expected.master_pattern_cost,
        ),
        ("mold_cost", actual.mold_cost, expected.mold_cost),
        (
            "development_cost",
            actual.development_cost,
            expected.development_cost,
        ),
        ("part_cost", actual.part_cost, expected.part_cost),
    ];
    for (key, a, e) in pairs {
        assert_close(a, e, tol, &format!("{} {}", ctx, key))?;
    }
    Ok(())
}

/// Assert the development cost decomposes into master pattern plus mold cost.
pub fn assert_development_split(result: &CostResult, ctx: &str) -> Result<(), HarnessError> {
    assert_close(
        result.development_cost,
        result.master_pattern_cost + result.mold_cost,
        1e-9,
        &format!("{} development split", ctx),
    )
}
