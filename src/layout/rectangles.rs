use crate::animation::stagger::{OVERLAY_STAGGER, stagger};
use crate::chart::model::Chart;
use crate::foundation::core::Canvas;
use crate::layout::{Corners, Envelope, Mark, phases};

const BAR_HEIGHT_RATIO: f64 = 0.6;
const MAX_BAR_HEIGHT: f64 = 200.0;
const CORNER_RADIUS: f64 = 16.0;

/// Stacked horizontal bar, animated in two phases.
///
/// Phase 1 grows the first term across the full width. Phase 2 lays the remaining terms over
/// it as proportional segments, left to right from where the first term's share ends, each
/// with its own staggered sub-progress. The last segment has rounded right corners.
pub(crate) fn layout_rectangles(chart: &Chart, canvas: Canvas, progress: f64) -> Vec<Mark> {
    let env = Envelope::for_canvas(canvas);
    let n = chart.terms.len();
    let total = chart.total();
    if n == 0 || env.is_empty() || total <= 0.0 {
        return Vec::new();
    }

    let bar_height = (env.height * BAR_HEIGHT_RATIO).min(MAX_BAR_HEIGHT);
    let bar_y = env.top + (env.height - bar_height) / 2.0;
    let (fill, overlay) = phases(progress);

    let mut marks = Vec::with_capacity(n);
    let fill_width = env.width * fill;
    if fill_width > 0.0 {
        marks.push(Mark::Rect {
            x: env.left,
            y: bar_y,
            width: fill_width,
            height: bar_height,
            radius: CORNER_RADIUS,
            corners: Corners::All,
            color: chart.term_color(0),
        });
    }

    if overlay <= 0.0 || n < 2 {
        return marks;
    }

    let mut x = env.left + chart.terms[0].magnitude() / total * env.width;
    for idx in 1..n {
        let full = chart.terms[idx].magnitude() / total * env.width;
        let width = full * stagger(overlay, idx - 1, n - 1, OVERLAY_STAGGER);
        if width > 0.0 {
            let last = idx == n - 1;
            marks.push(Mark::Rect {
                x,
                y: bar_y,
                width,
                height: bar_height,
                radius: if last { CORNER_RADIUS } else { 0.0 },
                corners: if last { Corners::Right } else { Corners::None },
                color: chart.term_color(idx),
            });
        }
        x += full;
    }
    marks
}

#[cfg(test)]
#[path = "../../tests/unit/layout/rectangles.rs"]
mod tests;
