pub const DOT_SIZE: f64 = 10.0;
pub const CROSSHAIR_LENGTH: f64 = 28.0;
const SPEED_GAIN: f64 = 1.2;
const MAX_STRETCH: f64 = 2.2;
const HOVER_DOT_SCALE: f64 = 1.6;
const SCALE_EPSILON: f64 = 0.001;
const OFFSCREEN: (f64, f64) = (-100.0, -100.0);

/// Transform values for one cursor paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub x: f64,
    pub y: f64,
    /// Stretch applied to the crosshair arms.
    pub line_scale: f64,
    pub dot_scale: f64,
}

impl CursorFrame {
    pub fn container_transform(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.x, self.y)
    }
}

/// Crosshair cursor that stretches with pointer speed.
#[derive(Clone, Debug)]
pub struct CursorTracker {
    pointer: (f64, f64),
    previous: (f64, f64),
    hovering: bool,
    applied: Option<CursorFrame>,
}

impl Default for CursorTracker {
    fn default() -> Self {
        Self {
            pointer: OFFSCREEN,
            previous: OFFSCREEN,
            hovering: false,
            applied: None,
        }
    }
}

impl CursorTracker {
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Advance one frame. Returns `None` when the paint would be identical to
    /// the last one returned.
    pub fn frame(&mut self) -> Option<CursorFrame> {
        let dx = self.pointer.0 - self.previous.0;
        let dy = self.pointer.1 - self.previous.1;
        let speed = (dx * dx + dy * dy).sqrt();
        self.previous = self.pointer;

        let next = CursorFrame {
            x: self.pointer.0,
            y: self.pointer.1,
            line_scale: stretch_scale(speed),
            dot_scale: if self.hovering { HOVER_DOT_SCALE } else { 1.0 },
        };
        if let Some(last) = self.applied {
            let unchanged = last.x == next.x
                && last.y == next.y
                && (last.line_scale - next.line_scale).abs() <= SCALE_EPSILON
                && last.dot_scale == next.dot_scale;
            if unchanged {
                return None;
            }
        }
        self.applied = Some(next);
        Some(next)
    }
}

pub fn stretch_scale(speed: f64) -> f64 {
    (CROSSHAIR_LENGTH + speed * SPEED_GAIN).min(CROSSHAIR_LENGTH * MAX_STRETCH) / CROSSHAIR_LENGTH
}
