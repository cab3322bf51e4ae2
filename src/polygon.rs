use eframe::egui;

// ── Data Model ──────────────────────────────────────────────────────────────

/// Pixel radius within which a pointer-down grabs a corner handle.
pub const HANDLE_HIT_RADIUS: f32 = 80.0;

/// A coordinate pair scaled to [0,1], origin top-left, independent of the
/// actual pixel dimensions of the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormPoint {
    pub x: f32,
    pub y: f32,
}

impl NormPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Scale up to pixel space for the given canvas size.
    pub fn to_pixels(self, canvas: egui::Vec2) -> egui::Pos2 {
        egui::pos2(self.x * canvas.x, self.y * canvas.y)
    }
}

#[derive(Clone, Debug)]
pub struct Polygon {
    pub id: u32,
    pub points: Vec<NormPoint>,
}

impl Polygon {
    pub fn new(id: u32, points: Vec<NormPoint>) -> Self {
        Self { id, points }
    }

    /// The quad every scan preview starts from; corner detection is stubbed.
    pub fn default_quad(id: u32) -> Self {
        Self::new(
            id,
            vec![
                NormPoint::new(0.2, 0.2),
                NormPoint::new(0.8, 0.2),
                NormPoint::new(0.8, 0.8),
                NormPoint::new(0.2, 0.8),
            ],
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging { polygon: usize, point: usize },
}

// ── Corner Editor ───────────────────────────────────────────────────────────

/// Polygon store plus drag controller. All coordinates passed in are
/// canvas-local pixels; stored points stay normalized.
#[derive(Clone, Debug)]
pub struct CornerEditor {
    pub polygons: Vec<Polygon>,
    drag: DragState,
}

impl CornerEditor {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self {
            polygons,
            drag: DragState::Idle,
        }
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Hit-test the pointer against every corner of every polygon and grab
    /// the closest one within [`HANDLE_HIT_RADIUS`], if any. Strict `<`
    /// keeps the first-encountered corner on an exact distance tie.
    pub fn on_drag_start(&mut self, pointer: egui::Pos2, canvas: egui::Vec2) {
        self.drag = DragState::Idle;
        if canvas.x <= 0.0 || canvas.y <= 0.0 {
            return;
        }
        let mut best_d2 = HANDLE_HIT_RADIUS * HANDLE_HIT_RADIUS;
        for (pi, polygon) in self.polygons.iter().enumerate() {
            for (ci, corner) in polygon.points.iter().enumerate() {
                let d2 = (corner.to_pixels(canvas) - pointer).length_sq();
                if d2 < best_d2 {
                    best_d2 = d2;
                    self.drag = DragState::Dragging {
                        polygon: pi,
                        point: ci,
                    };
                }
            }
        }
    }

    /// Move the active corner by a pixel delta, clamped to the canvas, then
    /// renormalize. No-op without an active handle or with a degenerate
    /// canvas.
    pub fn on_drag(&mut self, delta: egui::Vec2, canvas: egui::Vec2) {
        let DragState::Dragging { polygon, point } = self.drag else {
            return;
        };
        if canvas.x <= 0.0 || canvas.y <= 0.0 {
            return;
        }
        let Some(poly) = self.polygons.get_mut(polygon) else {
            return;
        };
        let Some(corner) = poly.points.get(point).copied() else {
            return;
        };
        let px = (corner.x * canvas.x + delta.x).clamp(0.0, canvas.x);
        let py = (corner.y * canvas.y + delta.y).clamp(0.0, canvas.y);
        poly.points[point] = NormPoint::new(px / canvas.x, py / canvas.y);
    }

    pub fn on_drag_end(&mut self) {
        self.drag = DragState::Idle;
    }

    pub fn on_drag_cancel(&mut self) {
        self.drag = DragState::Idle;
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
