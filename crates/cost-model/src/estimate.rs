use tracing::{debug, info};

use crate::constants::{DENSITY_G_PER_CC, MM3_TO_CC};
use crate::types::*;

/// Padded mold block volume for a record.
///
/// Each bounding dimension grows by `boundary_spacing`; the block volume is
/// the product of the padded dimensions.
pub fn mold_block(record: &GeometryRecord, params: &CostParameters) -> MoldBlock {
    let [new_x, new_y, new_z] = padded_dimensions(record, params);
    let volume_mm3 = new_x * new_y * new_z;
    MoldBlock {
        volume_mm3,
        volume_cc: volume_mm3 * MM3_TO_CC,
    }
}

/// Compute the full cost chain for one geometry record.
///
/// Pure: the same record and parameters always give a bit-identical result.
pub fn estimate(record: &GeometryRecord, params: &CostParameters) -> CostResult {
    let bbox = &record.bounding_box;
    let [new_x, new_y, new_z] = padded_dimensions(record, params);

    let volume_in_cc = record.volume * MM3_TO_CC;
    let weight = volume_in_cc * DENSITY_G_PER_CC;
    let master_pattern_cost = volume_in_cc * params.master_part;

    let block = mold_block(record, params);
    let mold_cost = block.volume_cc * DENSITY_G_PER_CC * params.silicon_rate;

    let development_cost = master_pattern_cost + mold_cost;
    let part_cost = (weight + params.part_waste_gate) * params.part_rate;

    debug!(
        file_name = %record.file_name,
        mold_block_mm3 = block.volume_mm3,
        mold_block_cc = block.volume_cc,
        "mold block sized"
    );

    CostResult {
        x_dimension: bbox.x_length,
        y_dimension: bbox.y_width,
        z_dimension: bbox.z_height,
        volume: record.volume,
        new_x,
        new_y,
        new_z,
        volume_in_cc,
        weight,
        master_pattern_cost,
        mold_cost,
        development_cost,
        part_cost,
    }
}

/// Estimate costs for the current batch.
///
/// Always uses the first record; later records in the same upload are kept
/// but ignored here. Use [`estimate_at`] to pick a different one.
pub fn estimate_batch(
    batch: &GeometryBatch,
    params: &CostParameters,
) -> Result<CostResult, EstimateError> {
    estimate_at(batch, 0, params)
}

/// Estimate costs for the record at `index` in the batch.
pub fn estimate_at(
    batch: &GeometryBatch,
    index: usize,
    params: &CostParameters,
) -> Result<CostResult, EstimateError> {
    if batch.is_empty() {
        return Err(EstimateError::NoGeometryAvailable);
    }
    let record = batch.get(index).ok_or(EstimateError::RecordOutOfRange {
        index,
        len: batch.len(),
    })?;

    let result = estimate(record, params);
    info!(
        batch_id = %batch.batch_id,
        file_name = %record.file_name,
        development_cost = result.development_cost,
        part_cost = result.part_cost,
        "cost estimated"
    );
    Ok(result)
}

fn padded_dimensions(record: &GeometryRecord, params: &CostParameters) -> [f64; 3] {
    let bbox = &record.bounding_box;
    [
        bbox.x_length + params.boundary_spacing,
        bbox.y_width + params.boundary_spacing,
        bbox.z_height + params.boundary_spacing,
    ]
}
