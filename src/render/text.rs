use std::path::Path;

use crate::foundation::error::{ChartError, ChartResult};

const REGULAR_WEIGHT: f32 = 400.0;
const BOLD_WEIGHT: f32 = 700.0;

/// Font file extensions picked up by [`TextLayoutEngine::register_font_dir`].
pub const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

#[derive(Clone)]
struct LoadedFont {
    family: String,
    weight: parley::style::FontWeight,
    data: vello_cpu::peniko::FontData,
}

/// Single-line layout ready to be drawn with the font it was shaped with.
pub(crate) struct ShapedLine {
    pub(crate) layout: parley::Layout<TextBrushRgba8>,
    pub(crate) font: vello_cpu::peniko::FontData,
    pub(crate) width: f32,
    pub(crate) baseline: f32,
}

impl std::fmt::Debug for ShapedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapedLine")
            .field("width", &self.width)
            .field("baseline", &self.baseline)
            .finish_non_exhaustive()
    }
}

/// Stateful helper for building Parley text layouts from registered font bytes.
///
/// Families are matched case-insensitively; an unknown family falls back to the first font that
/// was registered.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    fonts: Vec<LoadedFont>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextLayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextLayoutEngine")
            .field("families", &self.families())
            .finish()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            fonts: Vec::new(),
        }
    }

    pub fn has_fonts(&self) -> bool {
        !self.fonts.is_empty()
    }

    /// Family names in registration order.
    pub fn families(&self) -> Vec<&str> {
        self.fonts.iter().map(|f| f.family.as_str()).collect()
    }

    /// Register a font from raw bytes and return its family name.
    pub fn register_font(&mut self, bytes: Vec<u8>) -> ChartResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let (family_id, faces) = families
            .first()
            .ok_or_else(|| ChartError::validation("no font families registered from font bytes"))?;
        let family_id = *family_id;
        let weight = faces
            .first()
            .map(|f| f.weight())
            .unwrap_or(parley::style::FontWeight::NORMAL);

        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ChartError::validation("registered font family has no name"))?
            .to_string();

        let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
        tracing::debug!(family = %family, weight = weight.value(), "registered font");
        self.fonts.push(LoadedFont {
            family: family.clone(),
            weight,
            data,
        });
        Ok(family)
    }

    pub fn register_font_file(&mut self, path: &Path) -> ChartResult<String> {
        let bytes = std::fs::read(path).map_err(|e| {
            ChartError::configuration(format!("read font '{}': {e}", path.display()))
        })?;
        self.register_font(bytes)
            .map_err(|e| ChartError::configuration(format!("font '{}': {e}", path.display())))
    }

    /// Register every font file directly inside `dir`, in file-name order.
    ///
    /// Files that fail to parse are skipped with a warning.
    pub fn register_font_dir(&mut self, dir: &Path) -> ChartResult<usize> {
        let entries = std::fs::read_dir(dir).map_err(|e| {
            ChartError::configuration(format!("read font dir '{}': {e}", dir.display()))
        })?;
        let mut paths = entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| {
                p.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| FONT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            })
            .collect::<Vec<_>>();
        paths.sort();

        let mut n = 0usize;
        for p in paths {
            match self.register_font_file(&p) {
                Ok(_) => n += 1,
                Err(err) => tracing::warn!(path = %p.display(), %err, "skipping font"),
            }
        }
        Ok(n)
    }

    /// Face to draw `family` with: the registered face of that family whose weight is closest
    /// to the request, else the closest face of the first registered family.
    fn resolve(&self, family: &str, bold: bool) -> Option<&LoadedFont> {
        let target = if bold { BOLD_WEIGHT } else { REGULAR_WEIGHT };
        let distance = |f: &&LoadedFont| (f.weight.value() - target).abs();
        let matching = self
            .fonts
            .iter()
            .filter(|f| f.family.eq_ignore_ascii_case(family))
            .min_by(|a, b| distance(a).total_cmp(&distance(b)));
        matching.or_else(|| {
            let first = &self.fonts.first()?.family;
            self.fonts
                .iter()
                .filter(|f| &f.family == first)
                .min_by(|a, b| distance(a).total_cmp(&distance(b)))
        })
    }

    /// Shape `text` as one unbroken line. Returns `None` when no font is registered.
    pub(crate) fn shape_line(
        &mut self,
        text: &str,
        family: &str,
        size_px: f32,
        bold: bool,
        brush: TextBrushRgba8,
    ) -> ChartResult<Option<ShapedLine>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ChartError::validation("text size_px must be finite and > 0"));
        }
        let Some(font) = self.resolve(family, bold).cloned() else {
            return Ok(None);
        };

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(font.family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));
        // Ask for the exact weight of the resolved face so shaping and drawing use one font.
        builder.push_default(parley::style::StyleProperty::FontWeight(font.weight));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        let width = layout.width();
        let baseline = layout
            .lines()
            .next()
            .map(|l| l.metrics().baseline)
            .unwrap_or(size_px);

        Ok(Some(ShapedLine {
            layout,
            font: font.data,
            width,
            baseline,
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
