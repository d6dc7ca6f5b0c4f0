/// A fixed-size 2D float field stored as a flat row-major buffer.
///
/// Every simulation field (density, velocity components, height, wetness,
/// scratch buffers) is one of these. Dimensions never change after
/// construction and all fields of one simulation share them, so raw index
/// arithmetic stays valid across buffers.
///
/// Accessors debug-assert that `x < width` and `y < height`; in release
/// builds out-of-range coordinates are the caller's contract violation.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Zero-filled grid with the same dimensions as `other`.
    pub fn like(other: &Grid) -> Self {
        Self::new(other.width, other.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let i = self.idx(x, y);
        self.data[i] = value;
    }

    #[inline]
    pub fn add(&mut self, x: usize, y: usize, amount: f32) {
        let i = self.idx(x, y);
        self.data[i] += amount;
    }

    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    pub fn copy_from(&mut self, other: &Grid) {
        debug_assert!(self.width == other.width && self.height == other.height);
        self.data.copy_from_slice(&other.data);
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}
