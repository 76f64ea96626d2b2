use super::Demo;
use crate::shade::shade_from_point;
use crate::types::{Coord, FrameBuffer, Input};

/// Every pixel is shaded by its distance to the cursor.
/// Visual: a black spot under the mouse fading to light gray at the far corner.
pub struct ShadeDemo {
    point: Coord, // last known cursor position
}

impl ShadeDemo {
    pub fn new(width: usize, height: usize) -> Self {
        Self { point: Coord::new((width / 2) as f32, (height / 2) as f32) }
    }
}

impl Demo for ShadeDemo {
    fn name(&self) -> &'static str {
        "shade"
    }

    fn update(&mut self, input: &Input) {
        if let Some(p) = input.mouse {
            self.point = p;
        }
    }

    fn render(&self, fb: &mut FrameBuffer) {
        shade_from_point(fb, self.point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::tests::at;

    #[test]
    fn test_starts_centered_until_mouse_moves() {
        let mut demo = ShadeDemo::new(20, 10);
        let mut fb = FrameBuffer::new(20, 10).unwrap();
        demo.render(&mut fb);
        assert_eq!(fb.pixels[fb.coord_to_index(10, 5)], 0);

        demo.update(&at(2.0, 8.0, false));
        demo.render(&mut fb);
        assert_eq!(fb.pixels[fb.coord_to_index(2, 8)], 0);
        assert_ne!(fb.pixels[fb.coord_to_index(10, 5)], 0);
    }

    #[test]
    fn test_keeps_last_point_when_cursor_lost() {
        let mut demo = ShadeDemo::new(20, 10);
        demo.update(&at(4.0, 4.0, false));
        demo.update(&Input::default());
        assert_eq!(demo.point, Coord::new(4.0, 4.0));
    }
}
