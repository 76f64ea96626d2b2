// Core types shared by the demos, the rasterizer and the window glue.

use crate::error::Error;

/// The image we compute every frame and hand to the window.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    pub width: usize,      // window width in pixels
    pub height: usize,     // window height in pixels
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb; len = width * height
}

impl FrameBuffer {
    /// Black buffer of `width * height` pixels.
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::Dimensions(format!("{width}x{height} has no pixels")));
        }
        let len = width
            .checked_mul(height)
            .ok_or_else(|| Error::Dimensions(format!("{width}x{height} overflows")))?;
        Ok(Self { width, height, pixels: vec![0u32; len] })
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn coord_to_index(&self, x: usize, y: usize) -> usize {
        self.width * y + x
    }

    #[inline]
    pub fn index_to_coord(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// True when the signed pixel (x,y) lies inside the buffer.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
}

/// A point in window pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coord {
    pub x: f32,
    pub y: f32,
}

impl Coord {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle; origin is the top-left pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle of the given size centred on (cx, cy).
    pub fn centered_at(cx: i32, cy: i32, width: u32, height: u32) -> Self {
        Self::new(cx - (width / 2) as i32, cy - (height / 2) as i32, width, height)
    }

    /// Half-open containment: right and bottom edges are outside.
    pub fn contains(&self, p: Coord) -> bool {
        p.x >= self.x as f32
            && p.y >= self.y as f32
            && p.x < (self.x + self.width as i32) as f32
            && p.y < (self.y + self.height as i32) as f32
    }

    pub fn center(&self) -> Coord {
        Coord::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// Same size, moved so it stays fully inside a `w` x `h` window.
    /// A rectangle larger than the window sticks to the top-left corner.
    pub fn clamped_to(&self, w: usize, h: usize) -> Self {
        let max_x = (w as i32 - self.width as i32).max(0);
        let max_y = (h as i32 - self.height as i32).max(0);
        Self { x: self.x.clamp(0, max_x), y: self.y.clamp(0, max_y), ..*self }
    }
}

/// What the user is doing this frame. Polled once, then handed to the demo.
#[derive(Clone, Copy, Debug, Default)]
pub struct Input {
    pub mouse: Option<Coord>, // None when the window has no cursor info
    pub left_down: bool,      // left mouse button held
    pub reset: bool,          // R pressed this frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_len_is_width_times_height() {
        let fb = FrameBuffer::new(7, 3).unwrap();
        assert_eq!(fb.pixels.len(), 21);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(FrameBuffer::new(0, 10), Err(Error::Dimensions(_))));
        assert!(matches!(FrameBuffer::new(10, 0), Err(Error::Dimensions(_))));
    }

    #[test]
    fn test_index_coord_conversion() {
        let fb = FrameBuffer::new(10, 4).unwrap();
        assert_eq!(fb.coord_to_index(3, 2), 23);
        assert_eq!(fb.index_to_coord(23), (3, 2));
        assert_eq!(fb.index_to_coord(0), (0, 0));
        assert_eq!(fb.index_to_coord(39), (9, 3));
    }

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut fb = FrameBuffer::new(4, 4).unwrap();
        fb.clear(0x00123456);
        assert!(fb.pixels.iter().all(|&p| p == 0x00123456));
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains(Coord::new(10.0, 10.0)));
        assert!(r.contains(Coord::new(14.9, 14.9)));
        assert!(!r.contains(Coord::new(15.0, 12.0)));
        assert!(!r.contains(Coord::new(9.0, 12.0)));
    }

    #[test]
    fn test_rect_clamped_to_window() {
        let r = Rect::new(-5, 90, 20, 20).clamped_to(100, 100);
        assert_eq!((r.x, r.y), (0, 80));
        let big = Rect::new(3, 3, 200, 20).clamped_to(100, 100);
        assert_eq!(big.x, 0);
    }

    #[test]
    fn test_rect_center() {
        let r = Rect::centered_at(50, 40, 20, 10);
        assert_eq!((r.x, r.y), (40, 35));
        assert_eq!(r.center(), Coord::new(50.0, 40.0));
    }
}
