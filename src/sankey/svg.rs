use std::fmt::Write as _;

use super::color::{Rgb, Rgba};
use super::layout::{FlowBand, Label, NodeGeometry, SankeyLayout, Size};
use super::scale::ViewScale;

const FONT_FAMILY: &str = "Tahoma, sans-serif";
const FONT_SIZE: f64 = 20.0;

pub fn render_svg(layout: &SankeyLayout, viewport: Size) -> String {
    let scale = ViewScale::fit(layout.canvas, viewport);
    let mut out = String::new();

    let _ = write!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img">"#,
        w = fmt(viewport.width),
        h = fmt(viewport.height),
    );
    let _ = write!(
        &mut out,
        r#"<g class="diagram" transform="scale({} {})" font-family="{FONT_FAMILY}" font-size="{}">"#,
        fmt(scale.x),
        fmt(scale.y),
        fmt(FONT_SIZE),
    );

    for ((node, band), label) in layout.nodes.iter().zip(&layout.bands).zip(&layout.labels) {
        write_rect(&mut out, node);
        write_band(&mut out, band);
        write_label(&mut out, label);
    }
    write_rect(&mut out, &layout.source);
    write_label(&mut out, &layout.source_label);

    out.push_str("</g></svg>");
    out
}

fn write_rect(out: &mut String, node: &NodeGeometry) {
    let _ = write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        fmt(node.x),
        fmt(node.y.min(node.bottom())),
        fmt(node.width),
        fmt(node.height.abs()),
        node.color.hex(),
    );
}

fn write_band(out: &mut String, band: &FlowBand) {
    let _ = write!(
        out,
        r#"<path d="M{},{} C{},{} {},{} {},{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
        fmt(band.start.x),
        fmt(band.start.y),
        fmt(band.control1.x),
        fmt(band.control1.y),
        fmt(band.control2.x),
        fmt(band.control2.y),
        fmt(band.end.x),
        fmt(band.end.y),
        stroke_color(band.color),
        fmt(band.color.a),
        fmt(band.stroke_width.abs()),
    );
}

fn write_label(out: &mut String, label: &Label) {
    let _ = write!(
        out,
        r#"<text x="{}" y="{}">{}</text>"#,
        fmt(label.position.x),
        fmt(label.position.y),
        escape_xml(&label.text),
    );
}

fn stroke_color(color: Rgba) -> String {
    let Rgb { r, g, b } = color.rgb();
    format!("rgb({r},{g},{b})")
}

/// Three decimals with trailing zeros trimmed; non-finite values collapse to 0.
fn fmt(value: f64) -> String {
    if !value.is_finite() || value.abs() < 0.0005 {
        return "0".to_owned();
    }

    let mut text = format!("{value:.3}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::super::color::Palette;
    use super::super::dataset::parse_dataset;
    use super::super::layout::{LayoutConfig, layout};
    use super::*;

    fn energy_layout() -> SankeyLayout {
        let dataset =
            parse_dataset("Energy Flow\nTotal Supply\nSolar 30\nWind 20\nGas 50\n").unwrap();
        let mut colors = Palette::new(vec![Rgb::new(10, 20, 30)]);
        layout(&dataset, &LayoutConfig::default(), &mut colors)
    }

    #[test]
    fn draws_one_path_per_band_and_source_last() {
        let svg = render_svg(&energy_layout(), Size::REFERENCE);

        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</g></svg>"));
        assert_eq!(svg.matches("<path ").count(), 3);
        assert_eq!(svg.matches("<rect ").count(), 4);
        assert_eq!(svg.matches("<text ").count(), 4);
        assert!(svg.contains(r#"transform="scale(1 1)""#));
        assert!(svg.contains(r#"stroke="rgb(10,20,30)" stroke-opacity="0.5" stroke-width="105""#));

        let source_rect = r##"<rect x="250" y="150" width="10" height="350" fill="#add8e6"/>"##;
        let source_at = svg.find(source_rect).unwrap();
        let last_path = svg.rfind("<path ").unwrap();
        assert!(source_at > last_path);
    }

    #[test]
    fn band_path_uses_cubic_command() {
        let svg = render_svg(&energy_layout(), Size::REFERENCE);
        assert!(svg.contains(r#"d="M260,202.5 C480,202.5 480,102.5 700,102.5""#));
    }

    #[test]
    fn doubled_viewport_only_changes_the_transform() {
        let layout = energy_layout();
        let base = render_svg(&layout, Size::REFERENCE);
        let doubled = render_svg(&layout, Size::new(2000.0, 1400.0));

        assert!(doubled.contains(r#"transform="scale(2 2)""#));
        let body = |svg: &str| svg[svg.find("<rect").unwrap()..].to_owned();
        assert_eq!(body(&base), body(&doubled));
    }

    #[test]
    fn labels_are_escaped() {
        let dataset = parse_dataset("t\nR&D <core>\nA \"quoted\" 1\n").unwrap();
        let layout = layout(&dataset, &LayoutConfig::default(), &mut Palette::new(Vec::new()));
        let svg = render_svg(&layout, Size::REFERENCE);
        assert!(svg.contains("R&amp;D &lt;core&gt;: 1"));
        assert!(svg.contains("A &quot;quoted&quot;: 1"));
    }

    #[test]
    fn negative_values_draw_flipped_geometry() {
        let dataset = parse_dataset("t\ns\nloss -10\ngain 20\n").unwrap();
        let layout = layout(&dataset, &LayoutConfig::default(), &mut Palette::new(Vec::new()));
        let svg = render_svg(&layout, Size::REFERENCE);

        assert!(!svg.contains("height=\"-"));
        assert!(!svg.contains("stroke-width=\"-"));
        assert!(svg.contains(r##"<rect x="700" y="-300" width="10" height="350" fill="#000000"/>"##));
        assert!(svg.contains(r#"stroke-width="350""#));
    }

    #[test]
    fn fmt_trims_trailing_zeros() {
        assert_eq!(fmt(102.5), "102.5");
        assert_eq!(fmt(350.0), "350");
        assert_eq!(fmt(0.0001), "0");
        assert_eq!(fmt(f64::NAN), "0");
        assert_eq!(fmt(-1.25), "-1.25");
    }
}
