//! Rendering buffer

/// Bytes per pixel: red, green, blue, alpha
pub const BPP: usize = 4;

/// Rendering Buffer
///
/// Data is stored as row-major order (C-format), four bytes per pixel
#[derive(Debug,Clone,PartialEq)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width, height, zero filled
    ///
    /// Returns None if the byte size does not fit in memory addressing
    pub fn new(width: usize, height: usize) -> Option<Self> {
        let len = width.checked_mul(height)?.checked_mul(BPP)?;
        if len > isize::MAX as usize {
            return None;
        }
        Some(RenderingBuffer { width, height, data: vec![0u8; len] })
    }
    /// Size of underlying Rendering Buffer in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

use std::ops::Index;
use std::ops::IndexMut;

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * BPP;
        &self.data[i..i + BPP]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * BPP;
        &mut self.data[i..i + BPP]
    }
}
