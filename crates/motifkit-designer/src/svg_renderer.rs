//! SVG renderer for designer shapes
//! Renders layers of shapes as a standalone SVG document
//! Features:
//! - Native circle elements for circles
//! - Exact arcs for half circles and rings
//! - Cubic and quadratic curves for drops and petals
//! - One group per layer, children drawn in z-order

use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use crate::error::{RenderError, RenderResult};
use crate::layer::Layer;
use crate::outline::Bounds;
use crate::model::{
    Circle, Diamond, Drop, HalfCircle, Petal, Point, Polygon, Ring, Shape, Trapeze,
};

const STROKE_CLASS: &str = "motif-stroke";
const FILL_CLASS: &str = "motif-fill";

/// Stroke and fill applied to every shape of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub stroke_color: String,
    pub stroke_width: f64,
    pub fill_color: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke_color: "black".to_string(),
            stroke_width: 2.0,
            fill_color: "white".to_string(),
        }
    }
}

/// Formats a coordinate with at most three decimals and no trailing zeros.
fn num(value: f64) -> String {
    let mut s = format!("{:.3}", value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

fn xy(p: Point) -> String {
    format!("{} {}", num(p.x), num(p.y))
}

fn path_element(d: &str, classes: &str, extra: &str) -> String {
    format!("<path class=\"{}\" d=\"{}\"{}/>\n", classes, d.trim_end(), extra)
}

fn filled_classes() -> String {
    format!("{} {}", STROKE_CLASS, FILL_CLASS)
}

fn render_circle(circle: &Circle) -> String {
    format!(
        "<circle class=\"{}\" cx=\"{}\" cy=\"{}\" r=\"{}\"/>\n",
        filled_classes(),
        num(circle.center.x),
        num(circle.center.y),
        num(circle.radius.abs())
    )
}

fn render_half_circle(half: &HalfCircle) -> String {
    let r = num(half.radius.abs());
    let d = format!(
        "M {} A {} {} 0 0 1 {} L {} Z",
        xy(half.left_bottom),
        r,
        r,
        xy(half.right_bottom),
        xy(half.left_bottom)
    );
    path_element(&d, &filled_classes(), "")
}

/// Full circle as two half arcs starting at the top, so it can be combined
/// with another subpath in one `d` attribute.
fn circle_subpath(center: Point, radius: f64, sweep: u8) -> String {
    let r = num(radius);
    let top = Point::new(center.x, center.y - radius);
    let bottom = Point::new(center.x, center.y + radius);
    format!(
        "M {} A {} {} 0 1 {} {} A {} {} 0 1 {} {} Z ",
        xy(top),
        r,
        r,
        sweep,
        xy(bottom),
        r,
        r,
        sweep,
        xy(top)
    )
}

fn render_ring(ring: &Ring) -> String {
    let mut d = circle_subpath(ring.center, ring.outer_radius.abs(), 0);
    d.push_str(&circle_subpath(ring.center, ring.inner_radius.abs(), 1));
    path_element(&d, &filled_classes(), " fill-rule=\"evenodd\"")
}

fn render_polygon(polygon: &Polygon) -> String {
    let Some((first, rest)) = polygon.points.split_first() else {
        return String::new();
    };
    let mut d = format!("M {}", xy(*first));
    for p in rest {
        let _ = write!(d, " L {}", xy(*p));
    }
    if polygon.fill {
        path_element(&d, &filled_classes(), "")
    } else {
        path_element(&d, STROKE_CLASS, " fill=\"none\"")
    }
}

fn closed_polyline(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { "L" };
        let _ = write!(d, "{} {} ", cmd, xy(*p));
    }
    d.push('Z');
    d
}

fn render_trapeze(trapeze: &Trapeze) -> String {
    let d = closed_polyline(&[
        trapeze.left_top,
        trapeze.right_top,
        trapeze.right_bottom,
        trapeze.left_bottom,
    ]);
    path_element(&d, &filled_classes(), "")
}

fn render_diamond(diamond: &Diamond) -> String {
    let d = closed_polyline(&[
        diamond.center_top,
        diamond.right_center,
        diamond.center_bottom,
        diamond.left_center,
    ]);
    path_element(&d, &filled_classes(), "")
}

fn render_drop(drop: &Drop) -> String {
    let d = format!(
        "M {} C {}, {}, {} Z",
        xy(drop.center_top),
        xy(drop.left_bottom),
        xy(drop.right_bottom),
        xy(drop.center_top)
    );
    path_element(&d, &filled_classes(), "")
}

fn render_petal(petal: &Petal) -> String {
    let d = format!(
        "M {} Q {} {} Q {} {} Z",
        xy(petal.start),
        xy(petal.middle_left),
        xy(petal.end),
        xy(petal.middle_right),
        xy(petal.start)
    );
    path_element(&d, &filled_classes(), "")
}

/// Render one shape as SVG elements. Composites emit their children in order.
pub fn render_shape(shape: &Shape) -> String {
    match shape {
        Shape::Circle(s) => render_circle(s),
        Shape::HalfCircle(s) => render_half_circle(s),
        Shape::Ring(s) => render_ring(s),
        Shape::Polygon(s) => render_polygon(s),
        Shape::Trapeze(s) => render_trapeze(s),
        Shape::Diamond(s) => render_diamond(s),
        Shape::Drop(s) => render_drop(s),
        Shape::Petal(s) => render_petal(s),
        Shape::Composite(s) => s.iter().map(render_shape).collect(),
    }
}

/// Render a layer as an SVG group.
pub fn render_layer(layer: &Layer, index: usize) -> String {
    let id = layer
        .name
        .clone()
        .unwrap_or_else(|| format!("layer-{}", index));
    let mut group = format!("<g id=\"{}\">\n", escape_attr(&id));
    for shape in layer {
        group.push_str(&render_shape(shape));
    }
    group.push_str("</g>\n");
    group
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Characters that would end a CSS declaration or the `<style>` element.
const RESERVED_STYLE_CHARS: [char; 7] = [';', '{', '}', '<', '>', '"', '&'];

fn check_style(style: &RenderStyle) -> RenderResult<()> {
    for (field, value) in [
        ("stroke_color", &style.stroke_color),
        ("fill_color", &style.fill_color),
    ] {
        if value.trim().is_empty() || value.contains(RESERVED_STYLE_CHARS) {
            return Err(RenderError::InvalidStyle {
                field,
                value: value.clone(),
            });
        }
    }
    if !(style.stroke_width.is_finite() && style.stroke_width > 0.0) {
        return Err(RenderError::InvalidStyle {
            field: "stroke_width",
            value: style.stroke_width.to_string(),
        });
    }
    Ok(())
}

fn stylesheet(style: &RenderStyle) -> String {
    format!(
        "<style>\n  svg .{} {{ stroke: {}; stroke-width: {}; }}\n  svg .{} {{ fill: {}; }}\n</style>\n",
        STROKE_CLASS,
        style.stroke_color,
        num(style.stroke_width),
        FILL_CLASS,
        style.fill_color
    )
}

fn check_canvas(view: &Bounds) -> RenderResult<()> {
    let (width, height) = (view.width(), view.height());
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if valid(width) && valid(height) && view.min_x.is_finite() && view.min_y.is_finite() {
        Ok(())
    } else {
        Err(RenderError::InvalidCanvas { width, height })
    }
}

/// Render all layers into a standalone SVG document of the given size, with
/// the view starting at the origin.
pub fn render_document(
    layers: &[Layer],
    width: f64,
    height: f64,
    style: &RenderStyle,
) -> RenderResult<String> {
    render_document_in(layers, &Bounds::new(0.0, 0.0, width, height), style)
}

/// Render all layers into a standalone SVG document showing the `view`
/// rectangle of model space.
pub fn render_document_in(
    layers: &[Layer],
    view: &Bounds,
    style: &RenderStyle,
) -> RenderResult<String> {
    check_canvas(view)?;
    check_style(style)?;

    let shape_count: usize = layers.iter().map(Layer::len).sum();
    debug!(
        layers = layers.len(),
        shapes = shape_count,
        min_x = view.min_x,
        min_y = view.min_y,
        width = view.width(),
        height = view.height(),
        "rendering SVG document"
    );

    let (w, h) = (num(view.width()), num(view.height()));
    let mut doc = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\">\n",
        w,
        h,
        num(view.min_x),
        num(view.min_y),
        w,
        h
    );
    doc.push_str(&stylesheet(style));
    for (index, layer) in layers.iter().enumerate() {
        doc.push_str(&render_layer(layer, index));
    }
    doc.push_str("</svg>\n");
    Ok(doc)
}

/// Render all layers and write the document to `path`.
pub fn write_svg(
    path: &Path,
    layers: &[Layer],
    width: f64,
    height: f64,
    style: &RenderStyle,
) -> RenderResult<()> {
    write_svg_in(path, layers, &Bounds::new(0.0, 0.0, width, height), style)
}

/// Render the `view` rectangle of all layers and write it to `path`.
pub fn write_svg_in(
    path: &Path,
    layers: &[Layer],
    view: &Bounds,
    style: &RenderStyle,
) -> RenderResult<()> {
    let doc = render_document_in(layers, view, style)?;
    std::fs::write(path, doc)?;
    debug!(path = %path.display(), "wrote SVG document");
    Ok(())
}
