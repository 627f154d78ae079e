use serde::{Deserialize, Serialize};

/// User-supplied rates for one cost calculation.
///
/// Every field is required; there are no defaults and no range checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostParameters {
    /// Silicone price per gram of mold block.
    pub silicon_rate: f64,
    /// Price per gram of cast part material.
    pub part_rate: f64,
    /// Master pattern price per cubic centimeter.
    pub master_part: f64,
    /// Clearance added to each bounding dimension of the mold block.
    pub boundary_spacing: f64,
    /// Extra material per part lost to gates and runners, in grams.
    pub part_waste_gate: f64,
}

/// Derived cost figures for one geometry record.
///
/// Full precision, no rounding. Field names serialize to the keys the
/// host UI reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostResult {
    pub x_dimension: f64,
    pub y_dimension: f64,
    pub z_dimension: f64,
    pub volume: f64,

    #[serde(rename = "new_X")]
    pub new_x: f64,
    #[serde(rename = "new_Y")]
    pub new_y: f64,
    #[serde(rename = "new_Z")]
    pub new_z: f64,

    pub volume_in_cc: f64,
    pub weight: f64,

    pub master_pattern_cost: f64,
    pub mold_cost: f64,
    pub development_cost: f64,
    pub part_cost: f64,
}

/// Intermediate mold block figures (padded box volume).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoldBlock {
    pub volume_mm3: f64,
    pub volume_cc: f64,
}
