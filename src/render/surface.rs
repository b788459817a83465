use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgba8};
use crate::foundation::error::ChartResult;

pub use kurbo::{Cap, Stroke};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// Anchor is the left end of the baseline.
    Left,
    /// Anchor is the middle of the baseline.
    Center,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub family: String,
    pub size_px: f32,
    pub bold: bool,
    pub align: TextAlign,
}

/// Immediate-mode 2D drawing capability used by the frame compositor.
///
/// Coordinates are canvas pixels, y down. Alpha pushed with [`Surface::push_alpha`] multiplies
/// everything drawn until the matching [`Surface::pop_alpha`].
pub trait Surface {
    fn canvas(&self) -> Canvas;
    /// Discard everything drawn so far.
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: Rgba8);
    fn fill_path(&mut self, path: &BezPath, color: Rgba8);
    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Rgba8);
    fn fill_text(
        &mut self,
        text: &str,
        anchor: Point,
        style: &TextStyle,
        color: Rgba8,
    ) -> ChartResult<()>;
    fn push_alpha(&mut self, alpha: f32);
    fn pop_alpha(&mut self);
}

/// A surface whose current contents can be copied out.
///
/// The snapshot owns its data; painting afterwards never changes an earlier snapshot.
pub trait Capture {
    type Snapshot: Clone;

    fn capture(&mut self) -> ChartResult<Self::Snapshot>;
}

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha copy of the pixel data.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if self.premultiplied {
            for px in out.chunks_exact_mut(4) {
                let a = u16::from(px[3]);
                if a == 0 || a == 255 {
                    continue;
                }
                for c in &mut px[..3] {
                    *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
                }
            }
        }
        out
    }

    /// Straight RGBA at pixel `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
