//! Per-chart-type geometry.
//!
//! Every layout is a pure function of `(chart, canvas, progress)` returning [`Mark`]s; nothing
//! is cached between calls. Shapes whose extent would be zero, or whose math would divide by a
//! zero max/total, are skipped instead of producing NaN coordinates.

pub(crate) mod bars;
pub(crate) mod circles;
pub(crate) mod donut;
pub(crate) mod legend;
pub(crate) mod rectangles;

use crate::chart::catalog::ChartKind;
use crate::chart::model::Chart;
use crate::foundation::core::{Canvas, Point, Rgba8};

pub const TOP_PADDING: f64 = 70.0;
pub const BOTTOM_PADDING: f64 = 120.0;
pub const SIDE_PADDING: f64 = 40.0;

/// End of the initial-fill phase for the two-phase layouts (rectangles, donut).
pub const PHASE1_END: f64 = 0.4;

/// Content rectangle shared by all chart types; the title sits above it, the legend below.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Envelope {
    pub fn for_canvas(canvas: Canvas) -> Self {
        Self {
            left: SIDE_PADDING,
            top: TOP_PADDING,
            width: canvas.width_f64() - SIDE_PADDING * 2.0,
            height: canvas.height_f64() - TOP_PADDING - BOTTOM_PADDING,
        }
    }

    /// True when the canvas is too small to hold any content.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Which corners of a [`Mark::Rect`] are rounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corners {
    All,
    Right,
    None,
}

/// One resolved shape, in canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum Mark {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
        corners: Corners,
        color: Rgba8,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Rgba8,
    },
    /// Stroked arc with round caps. Angles in radians, clockwise from +x in canvas space.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        sweep: f64,
        line_width: f64,
        color: Rgba8,
    },
}

/// Geometry for `chart` at `progress` (clamped to `[0, 1]`, NaN as 0).
pub fn layout_chart(chart: &Chart, canvas: Canvas, progress: f64) -> Vec<Mark> {
    let progress = unit(progress);
    match chart.kind {
        ChartKind::Bars => bars::layout_bars(chart, canvas, progress),
        ChartKind::Circles => circles::layout_circles(chart, canvas, progress),
        ChartKind::Rectangles => rectangles::layout_rectangles(chart, canvas, progress),
        ChartKind::Donut => donut::layout_donut(chart, canvas, progress),
    }
}

/// Split progress into (initial fill, overlay) sub-progress, each in `[0, 1]`.
pub(crate) fn phases(progress: f64) -> (f64, f64) {
    let fill = (progress / PHASE1_END).clamp(0.0, 1.0);
    let overlay = ((progress - PHASE1_END) / (1.0 - PHASE1_END)).clamp(0.0, 1.0);
    (fill, overlay)
}

pub(crate) fn unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/mod.rs"]
mod tests;
