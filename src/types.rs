// Core types shared by the rasterizer, the animation and the frame loop.

/// Pixel colors, packed as 0x00RRGGBB for minifb.
pub const RED: u32 = 0x00_FF_00_00;
pub const GREEN: u32 = 0x00_00_FF_00;
pub const BLUE: u32 = 0x00_00_00_FF;
pub const WHITE: u32 = 0x00_FF_FF_FF;

/// Row-major pixel grid, origin top-left.
/// `pixels.len() == width * height` holds after construction and after every resize.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    /// A black buffer of the given size. Either side may be zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u32; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn area(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Swap in a fresh black buffer for the new window size.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width * height, 0);
    }

    /// Half-open bounds: `0 <= x < width`, `0 <= y < height`.
    /// Coordinates are widened to `i64`, so callers can pass shape math that
    /// would overflow `i32` far off screen.
    #[inline]
    pub fn contains(&self, x: impl Into<i64>, y: impl Into<i64>) -> bool {
        let (x, y) = (x.into(), y.into());
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    /// Strict bounds: `0 < x < width`, `0 < y < height`.
    /// Only the circle center and triangle apex markers are guarded this way.
    #[inline]
    pub fn contains_interior(&self, x: impl Into<i64>, y: impl Into<i64>) -> bool {
        let (x, y) = (x.into(), y.into());
        x > 0 && y > 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    /// The one checked write every shape goes through.
    /// Returns false (and touches nothing) when (x,y) is off the buffer.
    #[inline]
    pub fn set_pixel(&mut self, x: impl Into<i64>, y: impl Into<i64>, color: u32) -> bool {
        let (x, y) = (x.into(), y.into());
        if !self.contains(x, y) {
            return false;
        }
        let idx = x as usize + y as usize * self.width;
        self.pixels[idx] = color;
        true
    }

    /// Checked write by linear index.
    #[inline]
    pub fn set_index(&mut self, idx: usize, color: u32) -> bool {
        match self.pixels.get_mut(idx) {
            Some(px) => {
                *px = color;
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn pixel(&self, x: impl Into<i64>, y: impl Into<i64>) -> Option<u32> {
        let (x, y) = (x.into(), y.into());
        if !self.contains(x, y) {
            return None;
        }
        Some(self.pixels[x as usize + y as usize * self.width])
    }

    /// Width and height clamped into `i32`, the coordinate type shapes are drawn with.
    pub fn dims_i32(&self) -> (i32, i32) {
        (
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        )
    }
}

/// Circle drawn each frame; radius grows by one per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircleSpec {
    pub center_x: i32,
    pub center_y: i32,
    pub radius: i32,
}

/// 45-45-90 triangle hanging off its apex; side grows by one per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriangleSpec {
    pub top_x: i32,
    pub top_y: i32,
    pub side_length: i32,
}
