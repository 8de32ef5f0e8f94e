use std::fmt::Write;

use dioxus::prelude::*;

use crate::domain::format::{format_brl, format_percent_whole};
use crate::domain::ring::{polar_to_cartesian, RingLayout, Wedge};

pub const CHART_SIZE: f64 = 360.0;
/// Pixels per unit of ring radius.
const CHART_SCALE: f64 = 160.0;
const WEDGE_EDGE_COLOR: &str = "#ffffff";

fn to_svg(x: f64, y: f64) -> (f64, f64) {
    let center = CHART_SIZE / 2.0;
    (center + x * CHART_SCALE, center - y * CHART_SCALE)
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// SVG path of the band between `inner` and `outer` from `start` down to
/// `end` (degrees, clockwise). Spans of a full turn are split in two halves
/// because a single arc cannot start and end on the same point.
pub fn annulus_wedge_path(start: f64, end: f64, outer: f64, inner: f64) -> String {
    let span = start - end;
    if span >= 360.0 - 1e-9 {
        let middle = start - 180.0;
        return format!(
            "{} {}",
            annulus_wedge_path(start, middle, outer, inner),
            annulus_wedge_path(middle, end, outer, inner)
        );
    }

    let large_arc = if span > 180.0 { 1 } else { 0 };
    let p1 = polar_to_cartesian(start, outer);
    let p2 = polar_to_cartesian(end, outer);
    let p3 = polar_to_cartesian(end, inner);
    let p4 = polar_to_cartesian(start, inner);
    let (x1, y1) = to_svg(p1.x, p1.y);
    let (x2, y2) = to_svg(p2.x, p2.y);
    let (x3, y3) = to_svg(p3.x, p3.y);
    let (x4, y4) = to_svg(p4.x, p4.y);
    let ro = outer * CHART_SCALE;
    let ri = inner * CHART_SCALE;

    format!(
        "M{x1:.3},{y1:.3} A{ro:.3},{ro:.3} 0 {large_arc},1 {x2:.3},{y2:.3} \
         L{x3:.3},{y3:.3} A{ri:.3},{ri:.3} 0 {large_arc},0 {x4:.3},{y4:.3} Z"
    )
}

fn write_wedge(svg: &mut String, wedge: &Wedge, outer: f64, inner: f64) {
    let _ = write!(
        svg,
        r#"<path d="{}" fill="{}" stroke="{WEDGE_EDGE_COLOR}" stroke-width="2"><title>{}</title></path>"#,
        annulus_wedge_path(wedge.start_angle, wedge.end_angle, outer, inner),
        wedge.color,
        escape_xml(&format!(
            "{}: {} {}",
            wedge.category,
            format_brl(wedge.value),
            format_percent_whole(wedge.share)
        )),
    );
}

fn write_wedge_label(svg: &mut String, wedge: &Wedge) {
    let Some(label) = &wedge.label else {
        return;
    };
    let (x, y) = to_svg(label.position.x, label.position.y);
    let _ = write!(
        svg,
        r#"<text x="{x:.3}" y="{y:.3}" text-anchor="middle" font-size="11" fill="black"><tspan x="{x:.3}" dy="-0.2em">{}</tspan><tspan x="{x:.3}" dy="1.2em">{}</tspan></text>"#,
        escape_xml(&label.amount),
        escape_xml(&label.percent),
    );
}

/// Serialises a laid-out ring into standalone SVG markup.
pub fn render_ring_svg(layout: &RingLayout) -> String {
    let size = CHART_SIZE;
    let center = size / 2.0;
    let outer = layout.outer_radius;
    let inner = layout.inner_radius();

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    for wedge in &layout.wedges {
        write_wedge(&mut svg, wedge, outer, inner);
    }
    for wedge in &layout.wedges {
        write_wedge_label(&mut svg, wedge);
    }
    let _ = write!(
        svg,
        r#"<text x="{center}" y="{center}" text-anchor="middle" dominant-baseline="middle" font-size="18" font-weight="bold" fill="black">{}</text>"#,
        escape_xml(&layout.center_label),
    );
    svg.push_str("</svg>");
    svg
}

#[component]
pub fn RingChart(layout: RingLayout) -> Element {
    let svg = render_ring_svg(&layout);

    rsx! {
        div {
            style: "display: flex; justify-content: center; padding: 8px 0;",
            dangerous_inner_html: "{svg}",
        }
    }
}
