// The three interactive demos and the mouse handling they share.

mod distance;
mod drag;
mod link;

pub use distance::ShadeDemo;
pub use drag::{DragDemo, Draggable};
pub use link::LinkDemo;

use crate::types::{Coord, FrameBuffer, Input};
use clap::ValueEnum;

pub const GREEN: u32 = 0x00_00_FF_00;
pub const BLUE: u32 = 0x00_33_99_FF;
pub const WHITE: u32 = 0x00_FF_FF_FF;

/// One interactive scene: consume this frame's input, then paint the whole buffer.
pub trait Demo {
    /// Short name, used for the window title and snapshot file names.
    fn name(&self) -> &'static str;

    fn update(&mut self, input: &Input);

    /// Must overwrite every pixel; the buffer is not cleared between frames.
    fn render(&self, fb: &mut FrameBuffer);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    /// Grayscale distance to the mouse cursor
    Shade,
    /// One draggable rectangle over a normalized distance field
    Drag,
    /// Two draggable rectangles joined by a line
    Link,
}

impl DemoKind {
    pub fn build(self, width: usize, height: usize) -> Box<dyn Demo> {
        match self {
            DemoKind::Shade => Box::new(ShadeDemo::new(width, height)),
            DemoKind::Drag => Box::new(DragDemo::new(width, height)),
            DemoKind::Link => Box::new(LinkDemo::new(width, height)),
        }
    }
}

/// What the left button did this frame, as seen by the drag logic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Press(Coord),
    Drag(Coord),
    Release,
    Idle,
}

/// Turns per-frame button state into press/drag/release edges.
#[derive(Default)]
pub struct Pointer {
    was_down: bool,
}

impl Pointer {
    pub fn next(&mut self, input: &Input) -> PointerEvent {
        let event = match (self.was_down, input.left_down, input.mouse) {
            (false, true, Some(p)) => PointerEvent::Press(p),
            (true, true, Some(p)) => PointerEvent::Drag(p),
            (true, false, _) => PointerEvent::Release,
            _ => PointerEvent::Idle,
        };
        self.was_down = input.left_down;
        event
    }
}
