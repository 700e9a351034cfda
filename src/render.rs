use tracing::trace;

use crate::state::{Shape, TColor, TCoord, TurtleState};

/// A path vertex with the pen color it was reached with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: TCoord,
    pub color: TColor,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// connected line segments through all vertices
    Strip(Vec<Vertex>),
    /// filled quad given by its four corners
    Quad([TCoord; 4], TColor),
}

/// Everything needed to paint one screen refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub background: TColor,
    pub primitives: Vec<Primitive>,
}

impl Frame {
    pub fn strips(&self) -> impl Iterator<Item = &[Vertex]> {
        self.primitives.iter().filter_map(|prim| match prim {
            Primitive::Strip(vertices) => Some(vertices.as_slice()),
            Primitive::Quad(..) => None,
        })
    }

    pub fn quads(&self) -> impl Iterator<Item = ([TCoord; 4], TColor)> + '_ {
        self.primitives.iter().filter_map(|prim| match prim {
            Primitive::Quad(corners, col) => Some((*corners, *col)),
            Primitive::Strip(_) => None,
        })
    }
}

struct FrameBuilder {
    primitives: Vec<Primitive>,
    strip: Vec<Vertex>,
}

impl FrameBuilder {
    /// End the running strip. Strips with less than two vertices draw
    /// nothing and are dropped.
    fn break_strip(&mut self) {
        let strip = std::mem::take(&mut self.strip);
        if strip.len() > 1 {
            self.primitives.push(Primitive::Strip(strip));
        }
    }

    fn add(&mut self, state: &TurtleState) {
        match state.shape {
            Shape::Rect(rect) => {
                self.break_strip();
                self.primitives
                    .push(Primitive::Quad(rect.corners(), state.color));
            }
            Shape::Point(pos) if state.pen_down => self.strip.push(Vertex {
                pos,
                color: state.color,
            }),
            Shape::Point(_) => self.break_strip(),
        }
    }
}

/// Turn a history into drawable primitives.
///
/// Consecutive pen-down points form one strip, a pen-up state ends it.
/// Rectangles become quads of their own and also end the running strip,
/// so no line ever connects to a rectangle.
pub fn render(history: &[TurtleState], background: TColor) -> Frame {
    let mut builder = FrameBuilder {
        primitives: Vec::new(),
        strip: Vec::new(),
    };
    for state in history {
        builder.add(state);
    }
    builder.break_strip();
    trace!(
        states = history.len(),
        primitives = builder.primitives.len(),
        "frame rendered"
    );
    Frame {
        background,
        primitives: builder.primitives,
    }
}
