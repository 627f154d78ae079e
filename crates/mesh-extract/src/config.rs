//! Configuration for STL decoding.

/// Upper bound on the facet count of one payload.
pub const DEFAULT_MAX_TRIANGLES: u32 = 50_000_000;

/// Knobs controlling how lenient the decoder is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Accept the text (`solid ... endsolid`) variant of STL.
    pub allow_ascii: bool,
    /// Reject payloads with more facets than this (binary: the declared count).
    pub max_triangles: u32,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            allow_ascii: true,
            max_triangles: DEFAULT_MAX_TRIANGLES,
        }
    }
}

impl ExtractConfig {
    /// Binary layout only.
    pub fn binary_only() -> Self {
        Self {
            allow_ascii: false,
            ..Self::default()
        }
    }

    pub fn with_max_triangles(mut self, max_triangles: u32) -> Self {
        self.max_triangles = max_triangles;
        self
    }
}
