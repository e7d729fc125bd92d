//! Vertex deduplication
//!
//! Every parser funnels coordinates through a [`VertexPool`], which merges
//! coordinates that represent the same physical point into one stable index.
//! Index assignment is first-seen order, so re-parsing the same file yields
//! identical indices regardless of hash iteration order.

use std::collections::HashMap;

/// Deduplication tolerance for formats with floating-point noise from curve
/// discretization and CAD export rounding, in drawing units (mm).
pub const SNAP_EPSILON: f64 = 1e-6;

/// How coordinates are folded into a hash key
#[derive(Debug, Clone, Copy, PartialEq)]
enum Policy {
    /// Quantize each axis to the nearest multiple of epsilon. Keys are
    /// integer triples, which sidesteps float-equality pitfalls of keying
    /// a map on raw coordinates.
    Snap {
        /// Grid spacing per axis
        epsilon: f64,
    },
    /// Raw coordinates as the key, for formats whose export guarantees
    /// bit-identical shared vertices.
    Exact,
}

/// Coordinate-to-index map with insertion-ordered vertex storage
#[derive(Debug, Clone)]
pub struct VertexPool {
    policy: Policy,
    index: HashMap<[u64; 3], usize>,
    vertices: Vec<[f64; 3]>,
}

impl VertexPool {
    /// Pool that merges points within `epsilon` per axis
    pub fn with_tolerance(epsilon: f64) -> Self {
        Self {
            policy: Policy::Snap { epsilon },
            index: HashMap::new(),
            vertices: Vec::new(),
        }
    }

    /// Pool that merges only bit-identical points
    pub fn exact() -> Self {
        Self {
            policy: Policy::Exact,
            index: HashMap::new(),
            vertices: Vec::new(),
        }
    }

    /// Map a coordinate to its vertex index, allocating a new index for the
    /// first occurrence of a key. The stored coordinate is the first-seen
    /// raw value, not the snapped one.
    pub fn insert(&mut self, x: f64, y: f64, z: f64) -> usize {
        let key = self.key(x, y, z);
        if let Some(&existing) = self.index.get(&key) {
            return existing;
        }
        let allocated = self.vertices.len();
        self.index.insert(key, allocated);
        self.vertices.push([x, y, z]);
        allocated
    }

    /// Number of unique vertices seen so far
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if no vertex has been inserted yet
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consume the pool, yielding vertices in first-seen order
    pub fn into_vertices(self) -> Vec<[f64; 3]> {
        self.vertices
    }

    fn key(&self, x: f64, y: f64, z: f64) -> [u64; 3] {
        match self.policy {
            Policy::Snap { epsilon } => [
                quantize(x, epsilon),
                quantize(y, epsilon),
                quantize(z, epsilon),
            ],
            Policy::Exact => [bits(x), bits(y), bits(z)],
        }
    }
}

/// Grid cell index of a coordinate, reinterpreted as key material
fn quantize(value: f64, epsilon: f64) -> u64 {
    let cell = (value / epsilon).round() as i64;
    cell as u64
}

/// Bit pattern of a coordinate; -0.0 normalized so both spellings of zero
/// land on the same key
fn bits(value: f64) -> u64 {
    let normalized = if value == 0.0 { 0.0 } else { value };
    normalized.to_bits()
}
