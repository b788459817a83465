use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgba8};
use crate::foundation::error::ChartResult;
use crate::render::surface::{Capture, Stroke, Surface, TextStyle};

/// One primitive received by a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillRect {
        rect: Rect,
        color: Rgba8,
    },
    FillPath {
        path: BezPath,
        color: Rgba8,
    },
    StrokePath {
        path: BezPath,
        stroke: Stroke,
        color: Rgba8,
    },
    FillText {
        text: String,
        anchor: Point,
        style: TextStyle,
        color: Rgba8,
    },
    PushAlpha(f32),
    PopAlpha,
}

/// Surface that keeps the primitives it is asked to draw instead of rasterizing them.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    canvas: Canvas,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text strings drawn so far, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Rgba8) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
            color,
        });
    }

    fn fill_text(
        &mut self,
        text: &str,
        anchor: Point,
        style: &TextStyle,
        color: Rgba8,
    ) -> ChartResult<()> {
        self.commands.push(DrawCommand::FillText {
            text: text.to_owned(),
            anchor,
            style: style.clone(),
            color,
        });
        Ok(())
    }

    fn push_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::PushAlpha(alpha));
    }

    fn pop_alpha(&mut self) {
        self.commands.push(DrawCommand::PopAlpha);
    }
}

impl Capture for RecordingSurface {
    type Snapshot = Vec<DrawCommand>;

    fn capture(&mut self) -> ChartResult<Self::Snapshot> {
        Ok(self.commands.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recording.rs"]
mod tests;
