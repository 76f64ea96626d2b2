use super::{Demo, GREEN, Pointer, PointerEvent, WHITE};
use crate::draw::{draw_rect, draw_rect_outline};
use crate::shade::shade_normalized;
use crate::types::{Coord, FrameBuffer, Input, Rect};

/// A rectangle the user can pick up with the left button and move around.
pub struct Draggable {
    pub rect: Rect,
    home: Rect,          // where `reset` puts it back
    grab: Option<Coord>, // cursor offset from the rect origin while held
}

impl Draggable {
    pub fn new(rect: Rect) -> Self {
        Self { rect, home: rect, grab: None }
    }

    /// Start a drag if `p` is on the rectangle.
    pub fn grab(&mut self, p: Coord) -> bool {
        if !self.rect.contains(p) {
            return false;
        }
        self.grab = Some(Coord::new(p.x - self.rect.x as f32, p.y - self.rect.y as f32));
        true
    }

    /// Follow the cursor while grabbed, staying fully inside a `w` x `h` window.
    pub fn drag_to(&mut self, p: Coord, w: usize, h: usize) {
        let Some(offset) = self.grab else { return };
        let moved = Rect {
            x: (p.x - offset.x).round() as i32,
            y: (p.y - offset.y).round() as i32,
            ..self.rect
        };
        self.rect = moved.clamped_to(w, h);
    }

    /// Drop the rectangle; true if it was being held.
    pub fn release(&mut self) -> bool {
        self.grab.take().is_some()
    }

    pub fn is_grabbed(&self) -> bool {
        self.grab.is_some()
    }

    pub fn reset(&mut self) {
        self.rect = self.home;
        self.grab = None;
    }
}

/// Default box size for a window: a sixth of each side, at least one pixel.
pub(super) fn block_size(width: usize, height: usize) -> (u32, u32) {
    (((width / 6).max(1)) as u32, ((height / 6).max(1)) as u32)
}

/// One green box over a distance field centred on the box itself.
/// Visual: dragging the box drags the dark halo with it; the far edge is always white.
pub struct DragDemo {
    width: usize,
    height: usize,
    pointer: Pointer,
    block: Draggable,
}

impl DragDemo {
    pub fn new(width: usize, height: usize) -> Self {
        let (bw, bh) = block_size(width, height);
        let rect = Rect::centered_at((width / 2) as i32, (height / 2) as i32, bw, bh);
        Self {
            width,
            height,
            pointer: Pointer::default(),
            block: Draggable::new(rect.clamped_to(width, height)),
        }
    }

    pub fn block(&self) -> Rect {
        self.block.rect
    }
}

impl Demo for DragDemo {
    fn name(&self) -> &'static str {
        "drag"
    }

    fn update(&mut self, input: &Input) {
        if input.reset {
            self.block.reset();
        }
        match self.pointer.next(input) {
            PointerEvent::Press(p) => {
                if self.block.grab(p) {
                    log::debug!("drag start at ({}, {})", p.x, p.y);
                }
            }
            PointerEvent::Drag(p) => self.block.drag_to(p, self.width, self.height),
            PointerEvent::Release => {
                if self.block.release() {
                    log::debug!("drag end at ({}, {})", self.block.rect.x, self.block.rect.y);
                }
            }
            PointerEvent::Idle => {}
        }
    }

    fn render(&self, fb: &mut FrameBuffer) {
        let rect = self.block();
        shade_normalized(fb, rect.center());
        draw_rect(fb, rect, GREEN);
        if self.block.is_grabbed() {
            draw_rect_outline(fb, rect, WHITE);
        }
    }
}
