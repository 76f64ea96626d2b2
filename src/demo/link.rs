use super::drag::block_size;
use super::{BLUE, Demo, Draggable, GREEN, Pointer, PointerEvent, WHITE};
use crate::draw::{draw_line, draw_rect, draw_rect_outline};
use crate::shade::shade_from_point;
use crate::types::{Coord, FrameBuffer, Input, Rect};

/// Two boxes tied together by a line between their centres.
/// Visual: drag either box and the line stretches to follow; the background tracks the cursor.
pub struct LinkDemo {
    width: usize,
    height: usize,
    pointer: Pointer,
    cursor: Coord,
    blocks: [Draggable; 2], // later entries are drawn on top
}

impl LinkDemo {
    pub fn new(width: usize, height: usize) -> Self {
        let (bw, bh) = block_size(width, height);
        let cy = (height / 2) as i32;
        let left = Rect::centered_at((width / 4) as i32, cy, bw, bh).clamped_to(width, height);
        let right = Rect::centered_at((width * 3 / 4) as i32, cy, bw, bh).clamped_to(width, height);
        Self {
            width,
            height,
            pointer: Pointer::default(),
            cursor: Coord::new((width / 2) as f32, cy as f32),
            blocks: [Draggable::new(left), Draggable::new(right)],
        }
    }

    pub fn blocks(&self) -> [Rect; 2] {
        [self.blocks[0].rect, self.blocks[1].rect]
    }
}

impl Demo for LinkDemo {
    fn name(&self) -> &'static str {
        "link"
    }

    fn update(&mut self, input: &Input) {
        if let Some(p) = input.mouse {
            self.cursor = p;
        }
        if input.reset {
            self.blocks.iter_mut().for_each(Draggable::reset);
        }
        match self.pointer.next(input) {
            // Topmost box wins when they overlap.
            PointerEvent::Press(p) => {
                if let Some(i) = (0..self.blocks.len()).rev().find(|&i| self.blocks[i].grab(p)) {
                    log::debug!("drag start on box {i}");
                }
            }
            PointerEvent::Drag(p) => {
                for block in &mut self.blocks {
                    block.drag_to(p, self.width, self.height);
                }
            }
            PointerEvent::Release => {
                for (i, block) in self.blocks.iter_mut().enumerate() {
                    if block.release() {
                        log::debug!("drag end on box {i}");
                    }
                }
            }
            PointerEvent::Idle => {}
        }
    }

    fn render(&self, fb: &mut FrameBuffer) {
        shade_from_point(fb, self.cursor);
        let [a, b] = self.blocks();
        draw_line(fb, a.center(), b.center(), WHITE);
        for (block, color) in self.blocks.iter().zip([GREEN, BLUE]) {
            draw_rect(fb, block.rect, color);
            if block.is_grabbed() {
                draw_rect_outline(fb, block.rect, WHITE);
            }
        }
    }
}
