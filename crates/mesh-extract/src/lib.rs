//! Mesh extraction: STL bytes in, measured geometry record out.
//!
//! # Key Components
//!
//! - [`decode`]: pure binary/ASCII STL decoding into a triangle list
//! - [`measure`]: bounding box, volume and surface area of a triangle list
//! - [`extract`]: the file-level entry point producing a [`GeometryRecord`]

pub mod config;
pub mod decode;
pub mod errors;
pub mod extract;
pub mod measure;
pub mod triangle;

pub use config::ExtractConfig;
pub use decode::{decode_ascii_stl, decode_binary_stl, decode_stl};
pub use errors::{DecodeError, ExtractError};
pub use extract::{extract, extract_with_config, file_type_for};
pub use measure::{bounding_box, measure, mesh_surface_area, mesh_volume, Aabb, Measurements};
pub use quote_types::GeometryRecord;
pub use triangle::Triangle;
