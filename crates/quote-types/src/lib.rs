pub mod batch;
pub mod cost;
pub mod geometry;

pub use batch::*;
pub use cost::*;
pub use geometry::*;
