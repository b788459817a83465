use kurbo::StrokeOpts;

use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgba8};
use crate::foundation::error::{ChartError, ChartResult};
use crate::render::surface::{Capture, FrameRGBA, Stroke, Surface, TextAlign, TextStyle};
use crate::render::text::{TextBrushRgba8, TextLayoutEngine};

/// Flattening tolerance used when outlining strokes.
const STROKE_TOLERANCE: f64 = 0.1;

/// Raster surface backed by `vello_cpu`.
///
/// Drawing is recorded into the render context and only rasterized on [`Capture::capture`],
/// which renders into a pixmap cleared to transparent first.
pub struct CpuSurface {
    canvas: Canvas,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    text: TextLayoutEngine,
    alpha_depth: usize,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("canvas", &self.canvas)
            .field("text", &self.text)
            .field("alpha_depth", &self.alpha_depth)
            .finish()
    }
}

impl CpuSurface {
    pub fn new(canvas: Canvas) -> ChartResult<Self> {
        Self::with_text_engine(canvas, TextLayoutEngine::new())
    }

    pub fn with_text_engine(canvas: Canvas, text: TextLayoutEngine) -> ChartResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| ChartError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| ChartError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(ChartError::render("surface must be non-empty"));
        }
        Ok(Self {
            canvas,
            ctx: vello_cpu::RenderContext::new(width, height),
            pixmap: vello_cpu::Pixmap::new(width, height),
            text,
            alpha_depth: 0,
        })
    }

    pub fn text_engine(&self) -> &TextLayoutEngine {
        &self.text
    }

    pub fn text_engine_mut(&mut self) -> &mut TextLayoutEngine {
        &mut self.text
    }

    fn set_solid(&mut self, color: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, color.a));
    }
}

impl Surface for CpuSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn clear(&mut self) {
        self.ctx.reset();
        self.alpha_depth = 0;
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.set_solid(color);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        self.set_solid(color);
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Rgba8) {
        let outline = kurbo::stroke(
            path.elements().iter().copied(),
            stroke,
            &StrokeOpts::default(),
            STROKE_TOLERANCE,
        );
        self.fill_path(&outline, color);
    }

    fn fill_text(
        &mut self,
        text: &str,
        anchor: Point,
        style: &TextStyle,
        color: Rgba8,
    ) -> ChartResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let brush = TextBrushRgba8 {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        };
        let Some(shaped) =
            self.text
                .shape_line(text, &style.family, style.size_px, style.bold, brush)?
        else {
            tracing::debug!(text, "no fonts registered, skipping text");
            return Ok(());
        };

        let dx = match style.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => -f64::from(shaped.width) / 2.0,
        };
        let origin_x = anchor.x + dx;
        let origin_y = anchor.y - f64::from(shaped.baseline);

        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((origin_x, origin_y)));
        for line in shaped.layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                // Positioned glyphs carry run-absolute x and baseline y.
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&shaped.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }

    fn push_alpha(&mut self, alpha: f32) {
        self.ctx.push_opacity_layer(alpha.clamp(0.0, 1.0));
        self.alpha_depth += 1;
    }

    fn pop_alpha(&mut self) {
        if self.alpha_depth > 0 {
            self.ctx.pop_layer();
            self.alpha_depth -= 1;
        }
    }
}

impl Capture for CpuSurface {
    type Snapshot = FrameRGBA;

    fn capture(&mut self) -> ChartResult<Self::Snapshot> {
        while self.alpha_depth > 0 {
            self.pop_alpha();
        }
        self.pixmap.data_as_u8_slice_mut().fill(0);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);

        Ok(FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
