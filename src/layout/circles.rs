use crate::animation::stagger::{DEFAULT_STAGGER, stagger};
use crate::chart::model::Chart;
use crate::foundation::core::{Canvas, Point};
use crate::layout::{Envelope, Mark};

const MIN_RADIUS_RATIO: f64 = 0.3;
const FILL_ALPHA: f64 = 0.7;

/// Translucent circles on a shared baseline, radius between a floor and a value-scaled max.
///
/// Marks are emitted largest value first so smaller circles stay visible on top.
pub(crate) fn layout_circles(chart: &Chart, canvas: Canvas, progress: f64) -> Vec<Mark> {
    let env = Envelope::for_canvas(canvas);
    let n = chart.terms.len();
    let max = chart.max_value();
    if n == 0 || env.is_empty() || max <= 0.0 {
        return Vec::new();
    }

    let spacing = env.width / (n + 1) as f64;
    let max_radius = (env.height / 2.0).min(spacing);
    let min_radius = max_radius * MIN_RADIUS_RATIO;
    let center_y = env.top + env.height / 2.0;

    let mut order: Vec<usize> = (0..n).collect();
    // Stable: equal values keep term order.
    order.sort_by(|&a, &b| {
        chart.terms[b]
            .magnitude()
            .total_cmp(&chart.terms[a].magnitude())
    });

    order
        .into_iter()
        .filter_map(|idx| {
            let full = min_radius + chart.terms[idx].magnitude() / max * (max_radius - min_radius);
            let radius = full * stagger(progress, idx, n, DEFAULT_STAGGER);
            if radius <= 0.0 {
                return None;
            }
            Some(Mark::Circle {
                center: Point::new(env.left + (idx + 1) as f64 * spacing, center_y),
                radius,
                color: chart.term_color(idx).with_alpha(FILL_ALPHA),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/circles.rs"]
mod tests;
