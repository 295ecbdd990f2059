use serde::Serialize;

use crate::util::format_value;

use super::color::{ColorPolicy, Rgb, Rgba};
use super::dataset::Dataset;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const REFERENCE: Self = Self::new(1000.0, 700.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NodeGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
}

impl NodeGeometry {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Cubic curve from the source's right edge into a category's left edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FlowBand {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
    pub stroke_width: f64,
    pub color: Rgba,
}

/// `position` is the left end of the text baseline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub position: Point,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SankeyLayout {
    pub canvas: Size,
    pub source: NodeGeometry,
    pub source_label: Label,
    pub nodes: Vec<NodeGeometry>,
    pub bands: Vec<FlowBand>,
    pub labels: Vec<Label>,
}

#[derive(Clone, Debug)]
pub struct LayoutConfig {
    pub canvas: Size,
    pub source_origin: Point,
    pub source_height: f64,
    pub node_width: f64,
    pub category_x: f64,
    pub category_top: f64,
    pub category_span: f64,
    pub node_gap: f64,
    pub label_char_width: f64,
    pub source_label_padding: f64,
    pub category_label_offset: f64,
    pub band_opacity: f64,
    pub source_color: Rgb,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas: Size::REFERENCE,
            source_origin: Point::new(250.0, 150.0),
            source_height: 350.0,
            node_width: 10.0,
            category_x: 700.0,
            category_top: 50.0,
            category_span: 600.0,
            node_gap: 10.0,
            label_char_width: 10.0,
            source_label_padding: 90.0,
            category_label_offset: 5.0,
            band_opacity: 0.5,
            source_color: Rgb::LIGHT_BLUE,
        }
    }
}

pub fn layout(
    dataset: &Dataset,
    config: &LayoutConfig,
    colors: &mut dyn ColorPolicy,
) -> SankeyLayout {
    let source = NodeGeometry {
        x: config.source_origin.x,
        y: config.source_origin.y,
        width: config.node_width,
        height: config.source_height,
        color: config.source_color,
    };

    let source_chars = dataset.source_label.chars().count() as f64;
    let source_label = Label {
        text: format!("{}: {}", dataset.source_label, format_value(dataset.total)),
        position: Point::new(
            source.x - source_chars * config.label_char_width - config.source_label_padding,
            source.center_y(),
        ),
    };

    let count = dataset.len();
    let mut nodes = Vec::with_capacity(count);
    let mut bands = Vec::with_capacity(count);
    let mut labels = Vec::with_capacity(count);

    // consumed height on the source's right edge
    let mut offset = 0.0;
    let mut cursor = config.category_top;

    for (index, entry) in dataset.entries.iter().enumerate() {
        let fraction = dataset.fraction(index);
        let share = fraction * source.height;

        let node = NodeGeometry {
            x: config.category_x,
            y: cursor,
            width: config.node_width,
            height: share,
            color: colors.color_for(index, &entry.category),
        };
        cursor += config.node_gap + config.category_span * fraction;

        let start = Point::new(source.right(), source.y + share / 2.0 + offset);
        let end = Point::new(node.x, node.center_y());
        let mid_x = (start.x + end.x) / 2.0;
        bands.push(FlowBand {
            start,
            control1: Point::new(mid_x, start.y),
            control2: Point::new(mid_x, end.y),
            end,
            stroke_width: share,
            color: node.color.with_alpha(config.band_opacity),
        });
        offset += share;

        labels.push(Label {
            text: format!("{}: {}", entry.category, format_value(entry.value)),
            position: Point::new(node.right() + config.category_label_offset, node.bottom()),
        });
        nodes.push(node);
    }

    tracing::debug!(
        title = %dataset.title,
        categories = count,
        consumed = offset,
        "laid out sankey diagram"
    );

    SankeyLayout {
        canvas: config.canvas,
        source,
        source_label,
        nodes,
        bands,
        labels,
    }
}
