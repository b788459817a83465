use std::f64::consts::{FRAC_PI_2, TAU};

use crate::animation::stagger::{OVERLAY_STAGGER, stagger};
use crate::chart::model::Chart;
use crate::foundation::core::Canvas;
use crate::layout::{Envelope, Mark, phases};

const RING_INSET: f64 = 10.0;
const LINE_WIDTH_RATIO: f64 = 0.35;

/// Ring chart with the same two-phase timing as the rectangles layout, in angular space.
///
/// Angles start at 12 o'clock and run clockwise.
pub(crate) fn layout_donut(chart: &Chart, canvas: Canvas, progress: f64) -> Vec<Mark> {
    let env = Envelope::for_canvas(canvas);
    let n = chart.terms.len();
    let total = chart.total();
    if n == 0 || env.is_empty() || total <= 0.0 {
        return Vec::new();
    }

    let outer = env.width.min(env.height) / 2.0 - RING_INSET;
    if outer <= 0.0 {
        return Vec::new();
    }
    let line_width = outer * LINE_WIDTH_RATIO;
    let radius = outer - line_width / 2.0;
    let center = env.center();
    let start = -FRAC_PI_2;
    let (fill, overlay) = phases(progress);

    let mut marks = Vec::with_capacity(n);
    if fill > 0.0 {
        marks.push(Mark::Arc {
            center,
            radius,
            start_angle: start,
            sweep: TAU * fill,
            line_width,
            color: chart.term_color(0),
        });
    }

    if overlay <= 0.0 || n < 2 {
        return marks;
    }

    let mut angle = start + chart.terms[0].magnitude() / total * TAU;
    for idx in 1..n {
        let segment = chart.terms[idx].magnitude() / total * TAU;
        let sweep = segment * stagger(overlay, idx - 1, n - 1, OVERLAY_STAGGER);
        if sweep > 0.0 {
            marks.push(Mark::Arc {
                center,
                radius,
                start_angle: angle,
                sweep,
                line_width,
                color: chart.term_color(idx),
            });
        }
        angle += segment;
    }
    marks
}

#[cfg(test)]
#[path = "../../tests/unit/layout/donut.rs"]
mod tests;
