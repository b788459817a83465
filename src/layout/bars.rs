use crate::animation::stagger::{DEFAULT_STAGGER, stagger};
use crate::chart::model::Chart;
use crate::foundation::core::{Canvas, Rgba8};
use crate::layout::{Corners, Envelope, Mark};

pub(crate) const TRACK_COLOR: Rgba8 = Rgba8::rgb(0xe5, 0xe5, 0xe5);

const BAR_WIDTH_RATIO: f64 = 0.3;
const MAX_BAR_WIDTH: f64 = 20.0;

/// One full-height gray track per term, overlaid by a colored bar scaled by `value / max`.
pub(crate) fn layout_bars(chart: &Chart, canvas: Canvas, progress: f64) -> Vec<Mark> {
    let env = Envelope::for_canvas(canvas);
    let n = chart.terms.len();
    if n == 0 || env.is_empty() {
        return Vec::new();
    }

    let max = chart.max_value();
    let column = env.width / n as f64;
    let bar_width = (column * BAR_WIDTH_RATIO).min(MAX_BAR_WIDTH);
    let radius = bar_width / 2.0;

    let mut marks = Vec::with_capacity(n * 2);
    for (idx, term) in chart.terms.iter().enumerate() {
        let x = env.left + idx as f64 * column + (column - bar_width) / 2.0;
        marks.push(Mark::Rect {
            x,
            y: env.top,
            width: bar_width,
            height: env.height,
            radius,
            corners: Corners::All,
            color: TRACK_COLOR,
        });

        if max <= 0.0 {
            continue;
        }
        let item = stagger(progress, idx, n, DEFAULT_STAGGER);
        let height = term.magnitude() / max * env.height * item;
        if height <= 0.0 {
            continue;
        }
        marks.push(Mark::Rect {
            x,
            y: env.top + env.height - height,
            width: bar_width,
            height,
            radius,
            corners: Corners::All,
            color: chart.term_color(idx),
        });
    }
    marks
}

#[cfg(test)]
#[path = "../../tests/unit/layout/bars.rs"]
mod tests;
