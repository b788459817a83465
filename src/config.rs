use std::path::PathBuf;

use crate::foundation::core::Canvas;
use crate::foundation::error::{ChartError, ChartResult};
use crate::gallery::store::DEFAULT_DB_FILE;
use crate::render::cpu::CpuSurface;
use crate::render::text::TextLayoutEngine;

pub const ENV_CANVAS_WIDTH: &str = "CHARTMOTION_CANVAS_WIDTH";
pub const ENV_CANVAS_HEIGHT: &str = "CHARTMOTION_CANVAS_HEIGHT";
pub const ENV_FONT_DIR: &str = "CHARTMOTION_FONT_DIR";
pub const ENV_DB: &str = "CHARTMOTION_DB";

const NO_FONTS_HINT: &str =
    "no fonts configured: pass --font <file> or set CHARTMOTION_FONT_DIR to a directory of .ttf/.otf files";

/// Process-level settings: canvas size, fonts, gallery location.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub canvas: Canvas,
    /// Individual font files, registered in order.
    pub font_files: Vec<PathBuf>,
    /// Directory scanned for `.ttf`/`.otf`/`.ttc` files after `font_files`.
    pub font_dir: Option<PathBuf>,
    pub gallery_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::DEFAULT,
            font_files: Vec::new(),
            font_dir: None,
            gallery_path: PathBuf::from(DEFAULT_DB_FILE),
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `CHARTMOTION_*` environment variables.
    pub fn from_env() -> ChartResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `CHARTMOTION_*` key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ChartResult<Self> {
        let mut cfg = Self::default();

        let width = parse_dim(ENV_CANVAS_WIDTH, lookup(ENV_CANVAS_WIDTH))?;
        let height = parse_dim(ENV_CANVAS_HEIGHT, lookup(ENV_CANVAS_HEIGHT))?;
        cfg.canvas = Canvas::new(
            width.unwrap_or(cfg.canvas.width),
            height.unwrap_or(cfg.canvas.height),
        )
        .map_err(|e| ChartError::configuration(e.to_string()))?;

        if let Some(dir) = lookup(ENV_FONT_DIR).filter(|s| !s.trim().is_empty()) {
            cfg.font_dir = Some(PathBuf::from(dir));
        }
        if let Some(db) = lookup(ENV_DB).filter(|s| !s.trim().is_empty()) {
            cfg.gallery_path = PathBuf::from(db);
        }
        Ok(cfg)
    }

    /// Text engine with every configured font registered.
    pub fn text_engine(&self) -> ChartResult<TextLayoutEngine> {
        let mut engine = TextLayoutEngine::new();
        for path in &self.font_files {
            engine.register_font_file(path)?;
        }
        if let Some(dir) = &self.font_dir {
            engine.register_font_dir(dir)?;
        }
        if !engine.has_fonts() {
            tracing::warn!("no fonts configured, text will not be rendered");
        }
        Ok(engine)
    }

    pub fn cpu_surface(&self) -> ChartResult<CpuSurface> {
        CpuSurface::with_text_engine(self.canvas, self.text_engine()?)
    }

    /// Like [`EngineConfig::cpu_surface`], but a configuration without any usable font is an
    /// error instead of a surface that drops every title and legend.
    pub fn cpu_surface_with_fonts(&self) -> ChartResult<CpuSurface> {
        let engine = self.text_engine()?;
        if !engine.has_fonts() {
            return Err(ChartError::configuration(NO_FONTS_HINT));
        }
        CpuSurface::with_text_engine(self.canvas, engine)
    }
}

fn parse_dim(key: &str, raw: Option<String>) -> ChartResult<Option<u32>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let v: u32 = raw
        .trim()
        .parse()
        .map_err(|_| ChartError::configuration(format!("{key}: expected a pixel count, got '{raw}'")))?;
    if v == 0 {
        return Err(ChartError::configuration(format!("{key} must be > 0")));
    }
    Ok(Some(v))
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
