use crate::chart::catalog::ChartKind;
use crate::chart::model::{Chart, ValueType};
use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::layout::{Envelope, unit};

/// Progress at which the legend starts fading in.
pub const LEGEND_FADE_START: f64 = 0.7;
/// Characters per wrapped label line.
pub const LABEL_CHARS_PER_LINE: usize = 10;

pub const LEGEND_BOTTOM_OFFSET: f64 = 80.0;
pub const MARKER_RADIUS: f64 = 8.0;
const VALUE_OFFSET: f64 = 28.0;
const LABEL_OFFSET: f64 = 48.0;
const LABEL_LINE_HEIGHT: f64 = 16.0;

/// One positioned legend item.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub marker: Point,
    pub color: Rgba8,
    pub value_text: String,
    /// Baseline-centered anchor for `value_text`.
    pub value_anchor: Point,
    /// Wrapped label lines with their baseline-centered anchors.
    pub label_lines: Vec<(String, Point)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    /// Opacity for the whole legend.
    pub alpha: f64,
    pub entries: Vec<LegendEntry>,
}

/// Legend opacity: 0 up to [`LEGEND_FADE_START`], then linear to 1 at full progress.
pub fn legend_alpha(progress: f64) -> f64 {
    unit((unit(progress) - LEGEND_FADE_START) / (1.0 - LEGEND_FADE_START))
}

/// Share of `value` in `total` as a rounded whole percentage (0 when `total` is 0).
pub fn percent_of(value: f64, total: f64) -> i64 {
    if total <= 0.0 {
        return 0;
    }
    (value / total * 100.0).round() as i64
}

/// Split `text` into chunks of at most `max_chars` characters.
pub fn wrap_chars(text: &str, max_chars: usize) -> Vec<String> {
    if max_chars == 0 {
        return vec![text.to_owned()];
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(max_chars)
        .map(|c| c.iter().collect())
        .collect()
}

pub fn layout_legend(chart: &Chart, canvas: Canvas, progress: f64) -> LegendLayout {
    let alpha = legend_alpha(progress);
    let total = chart.total();
    let env = Envelope::for_canvas(canvas);
    let legend_y = canvas.height_f64() - LEGEND_BOTTOM_OFFSET;

    let Some(xs) = marker_xs(chart, &env, total) else {
        return LegendLayout {
            alpha,
            entries: Vec::new(),
        };
    };

    let entries = chart
        .terms
        .iter()
        .zip(xs)
        .enumerate()
        .map(|(idx, (term, x))| {
            let value_text = match chart.value_type {
                ValueType::Percent => format!("{}%", percent_of(term.magnitude(), total)),
                ValueType::Value => term.value.to_string(),
            };
            let label = if term.label.is_empty() {
                format!("Term {}", idx + 1)
            } else {
                term.label.clone()
            };
            let label_lines = wrap_chars(&label, LABEL_CHARS_PER_LINE)
                .into_iter()
                .enumerate()
                .map(|(line, text)| {
                    let y = legend_y + LABEL_OFFSET + line as f64 * LABEL_LINE_HEIGHT;
                    (text, Point::new(x, y))
                })
                .collect();
            LegendEntry {
                marker: Point::new(x, legend_y),
                color: chart.term_color(idx),
                value_text,
                value_anchor: Point::new(x, legend_y + VALUE_OFFSET),
                label_lines,
            }
        })
        .collect();

    LegendLayout { alpha, entries }
}

/// Horizontal marker centers matching each chart type's layout, or `None` when the chart's
/// positioning math has nothing to divide by.
fn marker_xs(chart: &Chart, env: &Envelope, total: f64) -> Option<Vec<f64>> {
    let n = chart.terms.len();
    if n == 0 {
        return None;
    }
    let xs = match chart.kind {
        ChartKind::Circles => {
            let spacing = env.width / (n + 1) as f64;
            (0..n)
                .map(|idx| env.left + (idx + 1) as f64 * spacing)
                .collect()
        }
        ChartKind::Rectangles => {
            if total <= 0.0 {
                return None;
            }
            let mut x = env.left;
            chart
                .terms
                .iter()
                .map(|term| {
                    let width = term.magnitude() / total * env.width;
                    let center = x + width / 2.0;
                    x += width;
                    center
                })
                .collect()
        }
        ChartKind::Bars | ChartKind::Donut => {
            let spacing = env.width / n as f64;
            (0..n)
                .map(|idx| env.left + idx as f64 * spacing + spacing / 2.0)
                .collect()
        }
    };
    Some(xs)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/legend.rs"]
mod tests;
