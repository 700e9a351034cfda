use crate::{
    render::{Frame, Primitive, Vertex},
    state::{TColor, TCoord},
};

mod channel;
#[cfg(feature = "sdl")]
mod sdl;

pub use channel::ChannelWindow;
#[cfg(feature = "sdl")]
pub use sdl::SdlWindow;
pub type VoidWindow = ();

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;
/// width of every drawn line in pixels
pub const LINE_WIDTH: u32 = 2;

/// A surface the drawing is painted on.
///
/// Coordinates are in pixels with the origin at the center of the
/// surface and the y axis pointing up.
pub trait Window {
    fn clear(&mut self, _: TColor) {}
    fn strip(&mut self, _: &[Vertex]) {}
    fn quad(&mut self, _: [TCoord; 4], _: TColor) {}

    /// Make everything drawn since the last [`clear`](Window::clear) visible.
    fn present(&mut self) {}

    fn events(&mut self) -> Vec<WindowEvent> {
        Vec::new()
    }

    /// Paint a whole frame, replacing whatever was shown before.
    fn show(&mut self, frame: &Frame) {
        self.clear(frame.background);
        for prim in &frame.primitives {
            match prim {
                Primitive::Strip(vertices) => self.strip(vertices),
                Primitive::Quad(corners, col) => self.quad(*corners, *col),
            }
        }
        self.present();
    }
}

impl Window for Box<dyn Window> {
    fn clear(&mut self, col: TColor) {
        (**self).clear(col);
    }

    fn strip(&mut self, vertices: &[Vertex]) {
        (**self).strip(vertices);
    }

    fn quad(&mut self, corners: [TCoord; 4], col: TColor) {
        (**self).quad(corners, col);
    }

    fn present(&mut self) {
        (**self).present();
    }

    fn events(&mut self) -> Vec<WindowEvent> {
        (**self).events()
    }

    fn show(&mut self, frame: &Frame) {
        (**self).show(frame);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    WindowExited,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WindowCmd {
    Clear(TColor),
    Strip(Vec<Vertex>),
    Quad([TCoord; 4], TColor),
    Present,
}

impl Window for VoidWindow {}
