/// Axis-aligned box in pixel coordinates, `x0 <= x1` and `y0 <= y1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Centroid of the box.
    pub fn center(&self) -> (f64, f64) {
        (
            self.x0 + self.width() / 2.0,
            self.y0 + self.height() / 2.0,
        )
    }

    /// Every coordinate divided by `scale`.
    pub fn divided_by(&self, scale: f64) -> Rect {
        Rect {
            x0: self.x0 / scale,
            y0: self.y0 / scale,
            x1: self.x1 / scale,
            y1: self.y1 / scale,
        }
    }
}
