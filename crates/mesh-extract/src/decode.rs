//! STL decoding over an immutable byte slice.
//!
//! Binary STL layout:
//! - 80-byte header (arbitrary text, may itself start with `solid`)
//! - u32 triangle count (little-endian)
//! - For each triangle: 3×f32 normal + 3×(3×f32 vertex) + u16 attribute = 50 bytes
//!
//! Layout selection and the header guards live here; facet parsing is done
//! by `stl_io`.

use std::io::Cursor;

use tracing::debug;

use crate::config::ExtractConfig;
use crate::errors::DecodeError;
use crate::triangle::Triangle;

pub const HEADER_LEN: usize = 80;
pub const PREAMBLE_LEN: usize = HEADER_LEN + 4;
pub const FACET_LEN: usize = 50;

/// Decode an STL payload, picking the binary or ASCII layout.
///
/// A payload whose length matches its declared facet count exactly is
/// binary. Otherwise it is text only when it starts with `solid` and the
/// next line opens with `facet` or `endsolid`; binary files with a `solid`
/// header and trailing padding therefore still decode as binary.
pub fn decode_stl(bytes: &[u8], config: &ExtractConfig) -> Result<Vec<Triangle>, DecodeError> {
    if !binary_size_matches(bytes) && looks_like_ascii(bytes) {
        if !config.allow_ascii {
            return Err(DecodeError::AsciiDisabled);
        }
        debug!(len = bytes.len(), "decoding ASCII STL");
        return decode_ascii_stl(bytes, config);
    }
    debug!(len = bytes.len(), "decoding binary STL");
    decode_binary_stl(bytes, config)
}

/// Decode the binary layout. Bytes past the last declared facet are ignored.
pub fn decode_binary_stl(
    bytes: &[u8],
    config: &ExtractConfig,
) -> Result<Vec<Triangle>, DecodeError> {
    let count = declared_count(bytes).ok_or(DecodeError::Truncated {
        expected: PREAMBLE_LEN,
        actual: bytes.len(),
    })?;
    if count > config.max_triangles {
        return Err(DecodeError::TooManyTriangles {
            count,
            limit: config.max_triangles,
        });
    }

    // Saturates on 32-bit targets so an oversized header reads as truncation.
    let expected = binary_len(count).unwrap_or(usize::MAX);
    if bytes.len() < expected {
        return Err(DecodeError::Truncated {
            expected,
            actual: bytes.len(),
        });
    }

    let mut cursor = Cursor::new(bytes);
    let facets = stl_io::BinaryStlReader::create_triangle_iterator(&mut cursor)
        .map_err(|e| malformed("binary", e))?;
    collect_facets(facets, "binary", config)
}

/// Decode the text layout (`solid ... endsolid`).
///
/// The facet limit applies to the number of facets read.
pub fn decode_ascii_stl(
    bytes: &[u8],
    config: &ExtractConfig,
) -> Result<Vec<Triangle>, DecodeError> {
    let mut cursor = Cursor::new(bytes);
    let facets = stl_io::AsciiStlReader::create_triangle_iterator(&mut cursor)
        .map_err(|e| malformed("ASCII", e))?;
    collect_facets(facets, "ASCII", config)
}

fn collect_facets<I>(
    facets: I,
    layout: &'static str,
    config: &ExtractConfig,
) -> Result<Vec<Triangle>, DecodeError>
where
    I: Iterator<Item = std::io::Result<stl_io::Triangle>>,
{
    let limit = config.max_triangles as usize;
    let mut out = Vec::with_capacity(facets.size_hint().0.min(limit));
    for facet in facets {
        let facet = facet.map_err(|e| malformed(layout, e))?;
        if out.len() >= limit {
            return Err(DecodeError::TooManyTriangles {
                count: config.max_triangles.saturating_add(1),
                limit: config.max_triangles,
            });
        }
        out.push(Triangle {
            normal: <[f32; 3]>::from(facet.normal),
            vertices: facet.vertices.map(<[f32; 3]>::from),
        });
    }
    Ok(out)
}

fn malformed(layout: &'static str, e: std::io::Error) -> DecodeError {
    DecodeError::Malformed {
        layout,
        reason: e.to_string(),
    }
}

fn declared_count(bytes: &[u8]) -> Option<u32> {
    let raw = bytes.get(HEADER_LEN..PREAMBLE_LEN)?;
    Some(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

/// Exact binary file length for `count` facets, `None` on overflow.
fn binary_len(count: u32) -> Option<usize> {
    usize::try_from(count)
        .ok()?
        .checked_mul(FACET_LEN)?
        .checked_add(PREAMBLE_LEN)
}

fn binary_size_matches(bytes: &[u8]) -> bool {
    declared_count(bytes)
        .and_then(binary_len)
        .is_some_and(|expected| expected == bytes.len())
}

/// `solid` at the very start, and a first keyword on the following line
/// that only text STL uses there.
fn looks_like_ascii(bytes: &[u8]) -> bool {
    if !bytes.starts_with(b"solid") {
        return false;
    }
    let Some(newline) = bytes.iter().position(|&b| b == b'\n') else {
        return false;
    };
    let keyword = bytes[newline + 1..]
        .split(|b| b.is_ascii_whitespace())
        .find(|tok| !tok.is_empty());
    matches!(keyword, Some(b"facet") | Some(b"endsolid"))
}
