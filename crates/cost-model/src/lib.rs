pub mod constants;
pub mod estimate;
pub mod types;

pub use constants::{DENSITY_G_PER_CC, MM3_TO_CC};
pub use estimate::{estimate, estimate_at, estimate_batch, mold_block};
pub use types::*;
