//! Full-frame painting: background, title, chart body, legend.

use kurbo::{Arc, Circle, RoundedRect, RoundedRectRadii, Shape};

use crate::chart::model::Chart;
use crate::foundation::core::{Point, Rect, Rgba8, Vec2};
use crate::foundation::error::ChartResult;
use crate::layout::legend::{LegendEntry, MARKER_RADIUS, layout_legend};
use crate::layout::{Corners, Mark, layout_chart};
use crate::render::surface::{Cap, Stroke, Surface, TextAlign, TextStyle};

/// Frames are always painted onto opaque white.
pub const BACKGROUND: Rgba8 = Rgba8::WHITE;
pub const TEXT_COLOR: Rgba8 = Rgba8::rgb(0x33, 0x33, 0x33);

pub const TITLE_ORIGIN: Point = Point::new(30.0, 40.0);
pub const TITLE_SIZE_PX: f32 = 24.0;
pub const VALUE_SIZE_PX: f32 = 16.0;
pub const LABEL_SIZE_PX: f32 = 14.0;

const PATH_TOLERANCE: f64 = 0.1;

/// Paint one complete frame of `chart` at `progress` onto `surface`.
///
/// The surface is cleared first and nothing is carried over between calls, so equal inputs on
/// equal surfaces paint equal frames.
#[tracing::instrument(level = "trace", skip(surface, chart), fields(kind = %chart.kind))]
pub fn paint_frame<S: Surface + ?Sized>(
    surface: &mut S,
    chart: &Chart,
    progress: f64,
) -> ChartResult<()> {
    let canvas = surface.canvas();
    surface.clear();
    surface.fill_rect(
        Rect::new(0.0, 0.0, canvas.width_f64(), canvas.height_f64()),
        BACKGROUND,
    );

    if !chart.title.is_empty() {
        let style = TextStyle {
            family: chart.style.font.clone(),
            size_px: TITLE_SIZE_PX,
            bold: true,
            align: TextAlign::Left,
        };
        surface.fill_text(&chart.title, TITLE_ORIGIN, &style, TEXT_COLOR)?;
    }

    for mark in layout_chart(chart, canvas, progress) {
        paint_mark(surface, &mark);
    }

    paint_legend(surface, chart, progress)
}

fn paint_mark<S: Surface + ?Sized>(surface: &mut S, mark: &Mark) {
    match *mark {
        Mark::Rect {
            x,
            y,
            width,
            height,
            radius,
            corners,
            color,
        } => {
            if width <= 0.0 || height <= 0.0 {
                return;
            }
            let rect = Rect::new(x, y, x + width, y + height);
            let radii = match corners {
                Corners::All => RoundedRectRadii::from_single_radius(radius),
                Corners::Right => RoundedRectRadii::new(0.0, radius, radius, 0.0),
                Corners::None => {
                    surface.fill_rect(rect, color);
                    return;
                }
            };
            if radius <= 0.0 {
                surface.fill_rect(rect, color);
                return;
            }
            let path = RoundedRect::from_rect(rect, radii).to_path(PATH_TOLERANCE);
            surface.fill_path(&path, color);
        }
        Mark::Circle {
            center,
            radius,
            color,
        } => {
            if radius <= 0.0 {
                return;
            }
            surface.fill_path(&Circle::new(center, radius).to_path(PATH_TOLERANCE), color);
        }
        Mark::Arc {
            center,
            radius,
            start_angle,
            sweep,
            line_width,
            color,
        } => {
            if radius <= 0.0 || line_width <= 0.0 || sweep <= 0.0 {
                return;
            }
            let arc = Arc::new(center, Vec2::new(radius, radius), start_angle, sweep, 0.0);
            let stroke = Stroke::new(line_width).with_caps(Cap::Round);
            surface.stroke_path(&arc.to_path(PATH_TOLERANCE), &stroke, color);
        }
    }
}

fn paint_legend<S: Surface + ?Sized>(
    surface: &mut S,
    chart: &Chart,
    progress: f64,
) -> ChartResult<()> {
    let legend = layout_legend(chart, surface.canvas(), progress);
    if legend.alpha <= 0.0 || legend.entries.is_empty() {
        return Ok(());
    }

    let faded = legend.alpha < 1.0;
    if faded {
        surface.push_alpha(legend.alpha as f32);
    }
    let result = paint_legend_entries(surface, chart, &legend.entries);
    if faded {
        surface.pop_alpha();
    }
    result
}

fn paint_legend_entries<S: Surface + ?Sized>(
    surface: &mut S,
    chart: &Chart,
    entries: &[LegendEntry],
) -> ChartResult<()> {
    let value_style = TextStyle {
        family: chart.style.font.clone(),
        size_px: VALUE_SIZE_PX,
        bold: true,
        align: TextAlign::Center,
    };
    let label_style = TextStyle {
        size_px: LABEL_SIZE_PX,
        bold: false,
        ..value_style.clone()
    };

    for entry in entries {
        let marker = Circle::new(entry.marker, MARKER_RADIUS).to_path(PATH_TOLERANCE);
        surface.fill_path(&marker, entry.color);
        surface.fill_text(&entry.value_text, entry.value_anchor, &value_style, TEXT_COLOR)?;
        for (line, anchor) in &entry.label_lines {
            surface.fill_text(line, *anchor, &label_style, TEXT_COLOR)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
