//! Fixed domain constants of the cost chain. Not configurable.

/// Cubic millimeters to cubic centimeters (native mesh unit is millimeters).
pub const MM3_TO_CC: f64 = 0.001;

/// Material density in grams per cubic centimeter, used for both the cast
/// part weight and the silicone mold block.
pub const DENSITY_G_PER_CC: f64 = 1.1;
