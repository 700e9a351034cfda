use std::fmt::Display;

/// a point in the turtle coordinate system (pixels, origin at the center)
pub type TCoord = (f64, f64);
/// a color with components in `0.0..=1.0`
pub type TColor = (f64, f64, f64);

pub const WHITE: TColor = (1.0, 1.0, 1.0);
pub const BLACK: TColor = (0.0, 0.0, 0.0);

/// Scale integer color components from `0..=255` down to `0.0..=1.0`.
///
/// Values outside of `0..=255` are passed through unchecked.
pub fn rgb(red: i32, green: i32, blue: i32) -> TColor {
    (
        red as f64 / 255.0,
        green as f64 / 255.0,
        blue as f64 / 255.0,
    )
}

/// What a single history entry stands for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// an ordinary turtle position, used as a path vertex
    Point(TCoord),
    /// a filled rectangle, never part of a path
    Rect(Rect),
}

/// An axis aligned box, stored by its top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub corner: TCoord,
    pub other: TCoord,
}

impl Rect {
    /// Box spanned from `at` by `width` to the side and `height` downwards.
    ///
    /// Negative sizes flip the box, so the stored corners always satisfy
    /// `left <= right` and `bottom <= top`.
    pub fn spanned(at: TCoord, width: i32, height: i32) -> Self {
        let (x, y) = at;
        let (w, h) = (width as f64, height as f64);
        let left = x.min(x + w);
        let right = x.max(x + w);
        let bottom = y.min(y - h);
        let top = y.max(y - h);
        Self {
            corner: (left, top),
            other: (right, bottom),
        }
    }

    pub fn left(&self) -> f64 {
        self.corner.0
    }

    pub fn right(&self) -> f64 {
        self.other.0
    }

    pub fn top(&self) -> f64 {
        self.corner.1
    }

    pub fn bottom(&self) -> f64 {
        self.other.1
    }

    /// corners in drawing order, starting bottom right and going counter-clockwise
    pub fn corners(&self) -> [TCoord; 4] {
        [
            (self.right(), self.bottom()),
            (self.right(), self.top()),
            (self.left(), self.top()),
            (self.left(), self.bottom()),
        ]
    }
}

/// A snapshot of the turtle at one point of the command stream.
///
/// States are never changed once created; every turtle operation builds
/// a new one from the current state. All fields are `Copy`, so a state
/// can't be changed through another reference either.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurtleState {
    pub shape: Shape,
    /// degrees, 0 is east, counter-clockwise, not normalized
    pub heading: i64,
    pub pen_down: bool,
    pub color: TColor,
}

impl Default for TurtleState {
    /// At the origin, heading east, pen down, white pen.
    fn default() -> Self {
        Self::point((0.0, 0.0), 0, true, WHITE)
    }
}

impl TurtleState {
    pub fn point(position: TCoord, heading: i64, pen_down: bool, color: TColor) -> Self {
        Self {
            shape: Shape::Point(position),
            heading,
            pen_down,
            color,
        }
    }

    pub fn rect(rect: Rect, heading: i64, pen_down: bool, color: TColor) -> Self {
        Self {
            shape: Shape::Rect(rect),
            heading,
            pen_down,
            color,
        }
    }

    /// Turtle position; the top-left corner for rectangles.
    pub fn position(&self) -> TCoord {
        match self.shape {
            Shape::Point(pos) => pos,
            Shape::Rect(rect) => rect.corner,
        }
    }

    pub fn other_corner(&self) -> Option<TCoord> {
        match self.shape {
            Shape::Point(_) => None,
            Shape::Rect(rect) => Some(rect.other),
        }
    }

    pub fn is_rect(&self) -> bool {
        matches!(self.shape, Shape::Rect(_))
    }

    /// heading in radians, reduced into `0..360` degrees first
    pub fn radians(&self) -> f64 {
        (self.heading.rem_euclid(360) as f64).to_radians()
    }

    /// Same pen and heading, moved to a plain point.
    pub fn moved_to(&self, position: TCoord) -> Self {
        Self::point(position, self.heading, self.pen_down, self.color)
    }

    pub fn with_heading(&self, heading: i64) -> Self {
        Self::point(self.position(), heading, self.pen_down, self.color)
    }

    pub fn with_pen(&self, pen_down: bool) -> Self {
        Self::point(self.position(), self.heading, pen_down, self.color)
    }

    pub fn with_color(&self, color: TColor) -> Self {
        Self::point(self.position(), self.heading, self.pen_down, color)
    }
}

impl Display for TurtleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (x, y) = self.position();
        let pen = if self.pen_down { "down" } else { "up" };
        let (r, g, b) = self.color;
        write!(
            f,
            "pos ({x:.1}, {y:.1}), head {}, pen {pen}, color ({}, {}, {})",
            self.heading,
            (r * 255.0).round() as i64,
            (g * 255.0).round() as i64,
            (b * 255.0).round() as i64,
        )?;
        if let Some((ox, oy)) = self.other_corner() {
            write!(f, ", rect to ({ox:.1}, {oy:.1})")?;
        }
        Ok(())
    }
}
