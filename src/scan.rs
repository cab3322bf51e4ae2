use eframe::egui;
use image::DynamicImage;
use log::warn;
use std::path::PathBuf;

use crate::polygon::{CornerEditor, DragState, Polygon};

// ── Scan Preview Screen ─────────────────────────────────────────────────────

const HANDLE_DRAW_RADIUS: f32 = 10.0;
const OVERLAY_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 200, 120);

pub struct ScanPreview {
    image_path: PathBuf,
    raw_image: Option<DynamicImage>,
    texture: Option<egui::TextureHandle>,
    editor: CornerEditor,
}

impl ScanPreview {
    pub fn new(image_path: PathBuf) -> Self {
        let raw_image = match image::open(&image_path) {
            Ok(img) => Some(img),
            Err(err) => {
                warn!("failed to decode {}: {err}", image_path.display());
                None
            }
        };
        Self {
            image_path,
            raw_image,
            texture: None,
            editor: CornerEditor::new(vec![Polygon::default_quad(0)]),
        }
    }

    fn ensure_texture(&mut self, ctx: &egui::Context) {
        if self.texture.is_some() {
            return;
        }
        if let Some(ref img) = self.raw_image {
            let rgba = img.to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            let pixels = rgba.as_flat_samples();
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice());
            self.texture =
                Some(ctx.load_texture("scan_image", color_image, egui::TextureOptions::LINEAR));
        }
    }

    /// Returns true when the user asked to go back to the chat.
    pub fn ui(&mut self, ctx: &egui::Context) -> bool {
        self.ensure_texture(ctx);
        let mut back = false;

        egui::TopBottomPanel::top("scan_toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("← Back").clicked() {
                    back = true;
                }
                ui.separator();
                ui.label("Scan preview");
                ui.label(
                    self.image_path
                        .file_name()
                        .unwrap_or_default()
                        .to_string_lossy()
                        .into_owned(),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            painter.rect_filled(canvas_rect, 0.0, egui::Color32::from_gray(40));
            if let Some(ref tex) = self.texture {
                painter.image(
                    tex.id(),
                    canvas_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }

            draw_overlay(&painter, canvas_rect, &self.editor);

            // The canvas rect of this draw pass is the coordinate space for
            // this frame's pointer events.
            let canvas = canvas_rect.size();
            if response.drag_started_by(egui::PointerButton::Primary) {
                if let Some(pos) = response.interact_pointer_pos() {
                    let local = (pos - canvas_rect.min).to_pos2();
                    self.editor.on_drag_start(local, canvas);
                }
            }
            if response.dragged_by(egui::PointerButton::Primary) {
                self.editor.on_drag(response.drag_delta(), canvas);
            }
            if response.drag_stopped_by(egui::PointerButton::Primary) {
                self.editor.on_drag_end();
            }
            if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.editor.on_drag_cancel();
            }
        });

        back
    }
}

// ── Overlay Rendering ───────────────────────────────────────────────────────

/// Map a polygon's normalized points onto the canvas rect.
fn screen_points(polygon: &Polygon, canvas_rect: egui::Rect) -> Vec<egui::Pos2> {
    polygon
        .points
        .iter()
        .map(|p| canvas_rect.min + p.to_pixels(canvas_rect.size()).to_vec2())
        .collect()
}

fn draw_overlay(painter: &egui::Painter, canvas_rect: egui::Rect, editor: &CornerEditor) {
    let stroke = egui::Stroke::new(3.0, OVERLAY_COLOR);
    for (pi, polygon) in editor.polygons.iter().enumerate() {
        if polygon.points.len() < 4 {
            continue;
        }
        let points = screen_points(polygon, canvas_rect);
        painter.add(egui::Shape::closed_line(points.clone(), stroke));
        for (ci, point) in points.into_iter().enumerate() {
            painter.circle_filled(point, HANDLE_DRAW_RADIUS, OVERLAY_COLOR);
            let active = DragState::Dragging {
                polygon: pi,
                point: ci,
            };
            if editor.drag_state() == active {
                painter.circle_stroke(
                    point,
                    HANDLE_DRAW_RADIUS + 4.0,
                    egui::Stroke::new(2.0, egui::Color32::WHITE),
                );
            }
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
