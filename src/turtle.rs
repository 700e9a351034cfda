use tracing::info;

use crate::{
    render::{self, Frame},
    state::{BLACK, Rect, TColor, TurtleState, rgb},
};

/// Result of [`Turtle::undo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undo {
    /// the last instruction was removed
    Undone,
    /// nothing was left to undo, the drawing has been reset
    Exhausted,
}

/// The turtle together with every state it has been in.
///
/// The current turtle is always the last entry of the history, which
/// is never empty. Every drawing operation appends exactly one state.
/// The background is scene data and not part of the history.
#[derive(Debug, Clone)]
pub struct Turtle {
    history: Vec<TurtleState>,
    background: TColor,
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new()
    }
}

impl Turtle {
    pub fn new() -> Self {
        Self {
            history: vec![TurtleState::default()],
            background: BLACK,
        }
    }

    pub fn current(&self) -> &TurtleState {
        // the history always keeps at least the initial state
        &self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[TurtleState] {
        &self.history
    }

    pub fn background(&self) -> TColor {
        self.background
    }

    /// Primitives for the current drawing, see [`render::render`].
    pub fn frame(&self) -> Frame {
        render::render(&self.history, self.background)
    }

    fn push(&mut self, state: TurtleState) {
        self.history.push(state);
    }

    fn advance(&mut self, dist: f64) {
        let curr = self.current();
        let (x, y) = curr.position();
        let (sin, cos) = curr.radians().sin_cos();
        let next = curr.moved_to((x + dist * cos, y + dist * sin));
        self.push(next);
    }

    pub fn forward(&mut self, dist: i32) {
        self.advance(dist as f64);
    }

    pub fn back(&mut self, dist: i32) {
        self.advance(-(dist as f64));
    }

    pub fn turn_left(&mut self, degrees: i32) {
        let curr = self.current();
        let next = curr.with_heading(curr.heading.saturating_add(degrees as i64));
        self.push(next);
    }

    pub fn turn_right(&mut self, degrees: i32) {
        let curr = self.current();
        let next = curr.with_heading(curr.heading.saturating_sub(degrees as i64));
        self.push(next);
    }

    pub fn pen_up(&mut self) {
        let next = self.current().with_pen(false);
        self.push(next);
    }

    pub fn pen_down(&mut self) {
        let next = self.current().with_pen(true);
        self.push(next);
    }

    pub fn pen_color(&mut self, red: i32, green: i32, blue: i32) {
        let next = self.current().with_color(rgb(red, green, blue));
        self.push(next);
    }

    /// Jump to an absolute position. Draws a line if the pen is down.
    pub fn move_to(&mut self, x: i32, y: i32) {
        let next = self.current().moved_to((x as f64, y as f64));
        self.push(next);
    }

    /// Face an absolute direction.
    pub fn heading(&mut self, degrees: i32) {
        let next = self.current().with_heading(degrees as i64);
        self.push(next);
    }

    /// Add a rectangle with its top-left corner at the current position.
    ///
    /// The turtle ends up on the top-left corner of the resulting box,
    /// which only differs from the current position for negative sizes.
    pub fn rectangle(&mut self, width: i32, height: i32) {
        let curr = self.current();
        let rect = Rect::spanned(curr.position(), width, height);
        let next = TurtleState::rect(rect, curr.heading, curr.pen_down, curr.color);
        self.push(next);
    }

    /// Change the background color. This is not recorded and can't be undone.
    pub fn set_background(&mut self, red: i32, green: i32, blue: i32) {
        self.background = rgb(red, green, blue);
    }

    /// Throw away the whole drawing and start again with a black background.
    pub fn reset(&mut self) {
        info!(states = self.history.len(), "drawing reset");
        *self = Self::new();
    }

    /// Remove the most recent state.
    ///
    /// Removing the last remaining state resets the turtle instead.
    pub fn undo(&mut self) -> Undo {
        self.history.pop();
        if self.history.is_empty() {
            self.reset();
            info!("no more undos available");
            Undo::Exhausted
        } else {
            Undo::Undone
        }
    }
}
