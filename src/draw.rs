// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the buffer each demo computes.
// 2) Filled/outlined rectangles and straight lines (the draggable boxes and their link).
// 3) A crosshair that follows your mouse.
// 4) A tiny 5x7 bitmap font to render HUD text on top of the image.

use crate::error::Error;
use crate::types::{Coord, FrameBuffer, Input, Rect};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a fixed-size window that refreshes at most `fps` times per second.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    /// Also pumps window events, so input queried afterwards is fresh.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current mouse position in window pixel coordinates (clamped to the window).
    pub fn mouse_pos(&self) -> Option<Coord> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| Coord::new(x.max(0.0).floor(), y.max(0.0).floor()))
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    // snapshot the current frame to PNG
    pub fn s_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }

    // toggle the coordinate/FPS overlay
    pub fn h_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::H, KeyRepeat::No)
    }

    // put every rectangle back where it started
    pub fn r_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::R, KeyRepeat::No)
    }

    /// Everything a demo needs to know about the user for this frame.
    pub fn poll_input(&self) -> Input {
        Input {
            mouse: self.mouse_pos(),
            left_down: self.left_mouse_down(),
            reset: self.r_pressed_once(),
        }
    }
}

/* ---------- Software drawing: pixels, rectangles, lines, crosshair ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if !fb.contains(x, y) {
        return;
    }
    let idx = fb.coord_to_index(x as usize, y as usize);
    fb.pixels[idx] = color;
}

/// Fill `rect` with `color`, clipped to the buffer.
/// Visual: a solid box; parts hanging off the window edge are simply not drawn.
pub fn draw_rect(fb: &mut FrameBuffer, rect: Rect, color: u32) {
    let x0 = (rect.x as i64).max(0);
    let y0 = (rect.y as i64).max(0);
    let x1 = (rect.x as i64 + rect.width as i64).min(fb.width as i64);
    let y1 = (rect.y as i64 + rect.height as i64).min(fb.height as i64);
    if x0 >= x1 || y0 >= y1 {
        return;
    }
    for y in y0..y1 {
        let row = fb.coord_to_index(0, y as usize);
        fb.pixels[row + x0 as usize..row + x1 as usize].fill(color);
    }
}

/// 1-pixel border around `rect`.
pub fn draw_rect_outline(fb: &mut FrameBuffer, rect: Rect, color: u32) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    let (w, h) = (rect.width as i32, rect.height as i32);
    draw_rect(fb, Rect::new(rect.x, rect.y, rect.width, 1), color);
    draw_rect(fb, Rect::new(rect.x, rect.y + h - 1, rect.width, 1), color);
    draw_rect(fb, Rect::new(rect.x, rect.y, 1, rect.height), color);
    draw_rect(fb, Rect::new(rect.x + w - 1, rect.y, 1, rect.height), color);
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Straight line from `p0` to `p1` by linear interpolation.
/// One sample per pixel along the longer axis; both endpoints are drawn.
pub fn draw_line(fb: &mut FrameBuffer, p0: Coord, p1: Coord, color: u32) {
    let (x0, y0) = (p0.x.round(), p0.y.round());
    let (x1, y1) = (p1.x.round(), p1.y.round());
    let steps = (x1 - x0).abs().max((y1 - y0).abs()) as i32;
    if steps == 0 {
        put_pixel(fb, x0 as i32, y0 as i32, color);
        return;
    }
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = lerp(x0, x1, t).round() as i32;
        let y = lerp(y0, y1, t).round() as i32;
        put_pixel(fb, x, y, color);
    }
}

/// Draw a small crosshair centered at (cx,cy).
/// Visual: a "+" shape (with a tiny gap at the center) follows your mouse.
pub fn draw_crosshair(fb: &mut FrameBuffer, cx: i32, cy: i32, size: i32, color: u32) {
    let p = |x: i32, y: i32| Coord::new(x as f32, y as f32);
    draw_line(fb, p(cx - size, cy), p(cx - 2, cy), color);
    draw_line(fb, p(cx + 2, cy), p(cx + size, cy), color);
    draw_line(fb, p(cx, cy - size), p(cx, cy - 2), color);
    draw_line(fb, p(cx, cy + 2), p(cx, cy + size), color);
    put_pixel(fb, cx, cy, color);
}

/* ---------- 5x7 bitmap font (ASCII subset we need for "X:000 Y:000 | FPS: 00.0") ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Uppercase letters we need: X Y F P S
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y), with a 1-pixel black shadow for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    let Some(rows) = glyph5x7(ch) else { return };
    for (offset, c) in [(1, 0x00000000), (0, color)] {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx + offset, y + ry as i32 + offset, c);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs; unknown characters leave a gap.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}
