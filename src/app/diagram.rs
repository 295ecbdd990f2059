use eframe::egui::epaint::CubicBezierShape;
use eframe::egui::{Align2, Color32, FontId, Painter, Rect, Sense, Stroke, Ui};

use crate::sankey::{FlowBand, Label, SankeyLayout, Size, ViewScale};

use super::render_utils::{
    LABEL_COLOR, design_to_screen, draw_background, fill_color, node_rect, stroke_color,
};

const LABEL_FONT_SIZE: f32 = 20.0;

/// Window size over design size. The panel only supplies the drawing origin,
/// so controls outside it never change the scale.
pub(super) fn diagram_scale(ui: &Ui, canvas: Size) -> ViewScale {
    #[allow(deprecated)]
    let window = ui.ctx().screen_rect();
    ViewScale::fit(
        canvas,
        Size::new(f64::from(window.width()), f64::from(window.height())),
    )
}

pub(super) fn draw_diagram(ui: &mut Ui, layout: &SankeyLayout) {
    let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
    let painter = ui.painter_at(rect);
    draw_background(&painter, rect);

    let scale = diagram_scale(ui, layout.canvas);
    let font = FontId::proportional(LABEL_FONT_SIZE * scale.y as f32);

    for ((node, band), label) in layout.nodes.iter().zip(&layout.bands).zip(&layout.labels) {
        painter.rect_filled(node_rect(rect, scale, node), 0.0, fill_color(node.color));
        draw_band(&painter, rect, scale, band);
        draw_label(&painter, rect, scale, label, &font);
    }

    let source = &layout.source;
    painter.rect_filled(node_rect(rect, scale, source), 0.0, fill_color(source.color));
    draw_label(&painter, rect, scale, &layout.source_label, &font);
}

fn draw_band(painter: &Painter, rect: Rect, scale: ViewScale, band: &FlowBand) {
    let width = scale.stroke(band.stroke_width).abs() as f32;
    if width <= 0.0 {
        return;
    }

    let points = [band.start, band.control1, band.control2, band.end]
        .map(|point| design_to_screen(rect, scale, point));
    painter.add(CubicBezierShape::from_points_stroke(
        points,
        false,
        Color32::TRANSPARENT,
        Stroke::new(width, stroke_color(band.color)),
    ));
}

fn draw_label(painter: &Painter, rect: Rect, scale: ViewScale, label: &Label, font: &FontId) {
    painter.text(
        design_to_screen(rect, scale, label.position),
        Align2::LEFT_BOTTOM,
        label.text.as_str(),
        font.clone(),
        LABEL_COLOR,
    );
}
