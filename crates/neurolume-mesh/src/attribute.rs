//! Per-vertex / per-point attribute buffers.
//!
//! A buffer holds `count * item_size` floats in interleaved order
//! (`[x0, y0, z0, x1, y1, z1, ...]` for a 3-component attribute) and a
//! `needs_update` flag. Writers set the flag after a pass; the renderer
//! clears it once the data has been uploaded.

use serde::{Deserialize, Serialize};

/// Interleaved `f32` attribute storage with a re-upload flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeBuffer {
    /// Interleaved data.
    data: Vec<f32>,
    /// Components per item (3 for positions and RGB colors).
    item_size: usize,
    /// Set when the contents changed since the last upload.
    #[serde(skip)]
    needs_update: bool,
}

impl AttributeBuffer {
    /// Creates a buffer of `count` zeroed items.
    pub fn zeros(count: usize, item_size: usize) -> Self {
        Self {
            data: vec![0.0; count * item_size],
            item_size,
            needs_update: false,
        }
    }

    /// Creates a buffer of `count` items, each set to `item`.
    pub fn filled(count: usize, item: &[f32]) -> Self {
        let mut data = Vec::with_capacity(count * item.len());
        for _ in 0..count {
            data.extend_from_slice(item);
        }
        Self {
            data,
            item_size: item.len(),
            needs_update: false,
        }
    }

    /// Number of items (not floats).
    #[inline]
    pub fn count(&self) -> usize {
        if self.item_size == 0 {
            0
        } else {
            self.data.len() / self.item_size
        }
    }

    /// Components per item.
    #[inline]
    pub fn item_size(&self) -> usize {
        self.item_size
    }

    /// Returns true if the buffer holds no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the raw interleaved data.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Returns the raw interleaved data for in-place writes.
    ///
    /// Does not touch `needs_update`; call [`mark_needs_update`](Self::mark_needs_update)
    /// after the pass.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Returns item `i`.
    #[inline]
    pub fn get(&self, i: usize) -> &[f32] {
        let base = i * self.item_size;
        &self.data[base..base + self.item_size]
    }

    /// Returns the first three components of item `i`.
    #[inline]
    pub fn get_xyz(&self, i: usize) -> [f32; 3] {
        let base = i * self.item_size;
        [self.data[base], self.data[base + 1], self.data[base + 2]]
    }

    /// Writes the first three components of item `i`.
    #[inline]
    pub fn set_xyz(&mut self, i: usize, x: f32, y: f32, z: f32) {
        let base = i * self.item_size;
        self.data[base] = x;
        self.data[base + 1] = y;
        self.data[base + 2] = z;
    }

    /// Flags the buffer for re-upload.
    pub fn mark_needs_update(&mut self) {
        self.needs_update = true;
    }

    /// Returns true if the buffer changed since the last upload.
    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// Clears the flag and returns its previous value.
    pub fn take_needs_update(&mut self) -> bool {
        std::mem::replace(&mut self.needs_update, false)
    }
}
