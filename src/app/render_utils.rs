use eframe::egui::{Color32, Painter, Pos2, Rect};

use crate::sankey::{NodeGeometry, Point, Rgb, Rgba, ViewScale};

pub(super) const BACKGROUND: Color32 = Color32::WHITE;
pub(super) const LABEL_COLOR: Color32 = Color32::BLACK;

pub(super) fn fill_color(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

pub(super) fn stroke_color(color: Rgba) -> Color32 {
    let alpha = (color.a * 255.0).round().clamp(0.0, 255.0) as u8;
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, alpha)
}

pub(super) fn draw_background(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, BACKGROUND);
}

pub(super) fn design_to_screen(rect: Rect, scale: ViewScale, point: Point) -> Pos2 {
    let scaled = scale.apply(point);
    Pos2::new(rect.left() + scaled.x as f32, rect.top() + scaled.y as f32)
}

/// Negative heights flip the rect instead of collapsing it.
pub(super) fn node_rect(rect: Rect, scale: ViewScale, node: &NodeGeometry) -> Rect {
    Rect::from_two_pos(
        design_to_screen(rect, scale, Point::new(node.x, node.y)),
        design_to_screen(rect, scale, Point::new(node.right(), node.bottom())),
    )
}
