//! Predictive-performance donut chart.
//!
//! The chart is described as SVG markup and rasterised with resvg into a
//! transparent PNG. [`donut_geometry`] exposes the segments that the markup
//! is built from.

use std::f64::consts::PI;
use std::fmt::Write as _;
use std::sync::Arc;

use once_cell::sync::Lazy;
use resvg::usvg::{fontdb, Options, Tree};

use crate::core::error::ChartError;
use crate::core::format;

/// Edge length of the rendered PNG in pixels.
pub const DONUT_SIZE: u32 = 300;
/// Ring thickness as a fraction of the outer radius.
const RING_WIDTH_RATIO: f64 = 0.3;
/// First segment starts at 12 o'clock and segments advance counter-clockwise.
const START_ANGLE_DEG: f64 = 90.0;
const OUTER_MARGIN: f64 = 10.0;
const SCORE_COLOR: &str = "red";
const REMAINDER_COLOR: &str = "lightgray";
const EDGE_COLOR: &str = "white";
const EDGE_WIDTH: f64 = 1.5;
const LABEL_SIZE: f64 = 19.0;

static FONTS: Lazy<Arc<fontdb::Database>> = Lazy::new(|| {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    tracing::debug!(faces = db.len(), "loaded system fonts for chart labels");
    Arc::new(db)
});

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    /// Share of the ring in percent, as passed in.
    pub value: f64,
    /// Start angle in degrees, counter-clockwise from 3 o'clock.
    pub start_deg: f64,
    pub sweep_deg: f64,
    pub color: &'static str,
}

impl DonutSegment {
    fn is_full_ring(&self) -> bool {
        self.sweep_deg >= 360.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutGeometry {
    /// Drawn segments; zero and negative sweeps are left out.
    pub segments: Vec<DonutSegment>,
    pub label: String,
    pub center: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

/// Segments for `score` against `100 - score`. The score is not clamped.
pub fn donut_geometry(score: f64) -> DonutGeometry {
    let center = f64::from(DONUT_SIZE) / 2.0;
    let outer_radius = center - OUTER_MARGIN;
    let inner_radius = outer_radius * (1.0 - RING_WIDTH_RATIO);

    let mut segments = Vec::with_capacity(2);
    let mut start_deg = START_ANGLE_DEG;
    for (value, color) in [(score, SCORE_COLOR), (100.0 - score, REMAINDER_COLOR)] {
        let sweep_deg = value / 100.0 * 360.0;
        if sweep_deg > 0.0 {
            segments.push(DonutSegment {
                value,
                start_deg,
                sweep_deg,
                color,
            });
            start_deg += sweep_deg;
        }
    }

    DonutGeometry {
        segments,
        label: format::format_percent(score),
        center,
        outer_radius,
        inner_radius,
    }
}

/// SVG markup of the donut for `score`.
pub fn donut_svg(score: f64) -> String {
    let geometry = donut_geometry(score);
    let size = DONUT_SIZE;
    let mut svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{size}' height='{size}' viewBox='0 0 {size} {size}'>\n"
    );

    for segment in &geometry.segments {
        let (path, fill_rule) = if segment.is_full_ring() {
            (ring_path(&geometry), "evenodd")
        } else {
            (wedge_path(&geometry, segment), "nonzero")
        };
        let _ = writeln!(
            svg,
            "  <path d='{path}' fill='{}' fill-rule='{fill_rule}' stroke='{EDGE_COLOR}' stroke-width='{EDGE_WIDTH}'/>",
            segment.color
        );
    }

    let c = geometry.center;
    let baseline = c + LABEL_SIZE * 0.35;
    let _ = writeln!(
        svg,
        "  <text x='{c:.3}' y='{baseline:.3}' text-anchor='middle' font-family='sans-serif' font-size='{LABEL_SIZE}' font-weight='bold'>{}</text>",
        geometry.label
    );
    svg.push_str("</svg>");
    svg
}

/// PNG bytes of the donut for `score`.
pub fn render_donut(score: f64) -> Result<Vec<u8>, ChartError> {
    let png = rasterize_svg(&donut_svg(score))?;
    tracing::debug!(score, bytes = png.len(), "rendered donut chart");
    Ok(png)
}

fn rasterize_svg(svg: &str) -> Result<Vec<u8>, ChartError> {
    let mut options = Options::default();
    options.fontdb = FONTS.clone();
    let tree = Tree::from_str(svg, &options)?;

    let size = tree.size();
    let (width, height) = (size.width().ceil() as u32, size.height().ceil() as u32);
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(ChartError::Pixmap { width, height })?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|err| ChartError::Encode(err.to_string()))
}

fn point(geometry: &DonutGeometry, radius: f64, angle_deg: f64) -> (f64, f64) {
    let theta = angle_deg * PI / 180.0;
    (
        geometry.center + radius * theta.cos(),
        geometry.center - radius * theta.sin(),
    )
}

fn wedge_path(geometry: &DonutGeometry, segment: &DonutSegment) -> String {
    let end_deg = segment.start_deg + segment.sweep_deg;
    let large = u8::from(segment.sweep_deg > 180.0);
    let (ro, ri) = (geometry.outer_radius, geometry.inner_radius);
    let (ox0, oy0) = point(geometry, ro, segment.start_deg);
    let (ox1, oy1) = point(geometry, ro, end_deg);
    let (ix1, iy1) = point(geometry, ri, end_deg);
    let (ix0, iy0) = point(geometry, ri, segment.start_deg);

    // Screen y grows downwards, so counter-clockwise on screen is sweep-flag 0.
    format!(
        "M {ox0:.3} {oy0:.3} A {ro:.3} {ro:.3} 0 {large} 0 {ox1:.3} {oy1:.3} \
         L {ix1:.3} {iy1:.3} A {ri:.3} {ri:.3} 0 {large} 1 {ix0:.3} {iy0:.3} Z"
    )
}

fn ring_path(geometry: &DonutGeometry) -> String {
    let c = geometry.center;
    let mut d = String::new();
    for r in [geometry.outer_radius, geometry.inner_radius] {
        let _ = write!(
            d,
            "M {:.3} {c:.3} A {r:.3} {r:.3} 0 1 0 {:.3} {c:.3} A {r:.3} {r:.3} 0 1 0 {:.3} {c:.3} Z ",
            c + r,
            c - r,
            c + r
        );
    }
    d.trim_end().to_string()
}
