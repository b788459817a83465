use std::path::Path;

use crate::chart::catalog::{ChartKind, color_at};
use crate::foundation::core::Rgba8;
use crate::foundation::error::{ChartError, ChartResult};

/// Fewest terms the editor keeps on a chart.
pub const MIN_TERMS: usize = 2;
/// Most terms the editor allows on a chart.
pub const MAX_TERMS: usize = 5;

/// One named, valued, colored slice of a chart.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Term {
    pub label: String,
    pub value: f64,
    /// Hex RGB color, e.g. `#8CB4FF`.
    pub color: String,
}

impl Term {
    /// Fresh term for slot `idx`: empty label, value 1, palette color.
    pub fn new(idx: usize) -> Self {
        Self {
            label: String::new(),
            value: 1.0,
            color: color_at(idx).to_owned(),
        }
    }

    /// Value used by geometry: negative and non-finite values count as zero.
    pub fn magnitude(&self) -> f64 {
        if self.value.is_finite() {
            self.value.max(0.0)
        } else {
            0.0
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartStyle {
    pub font: String,
    /// Reserved; geometry uses fixed text sizes.
    pub font_size: String,
    /// Reserved; frames always paint an opaque white background.
    pub background_color: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            font: "Arial".to_owned(),
            font_size: "45px".to_owned(),
            background_color: "transparent".to_owned(),
        }
    }
}

/// How legend numbers are printed. Never affects geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    #[default]
    Value,
    Percent,
}

/// Immutable chart definition. Edits produce a new value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub terms: Vec<Term>,
    pub style: ChartStyle,
    pub value_type: ValueType,
}

impl Default for Chart {
    fn default() -> Self {
        Self {
            title: "Elections Results".to_owned(),
            kind: ChartKind::Circles,
            terms: vec![Term::new(0), Term::new(1)],
            style: ChartStyle::default(),
            value_type: ValueType::Value,
        }
    }
}

impl Chart {
    pub fn from_json_str(s: &str) -> ChartResult<Self> {
        serde_json::from_str(s).map_err(|e| ChartError::serde(format!("chart json: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            ChartError::validation(format!("read chart '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ChartError::serde(e.to_string()))
    }

    /// Sum of term magnitudes.
    pub fn total(&self) -> f64 {
        self.terms.iter().map(Term::magnitude).sum()
    }

    /// Largest term magnitude (0 for an empty chart).
    pub fn max_value(&self) -> f64 {
        self.terms.iter().map(Term::magnitude).fold(0.0, f64::max)
    }

    /// Parsed color for term `idx`; unparsable colors fall back to the palette.
    pub fn term_color(&self, idx: usize) -> Rgba8 {
        let fallback = || Rgba8::from_hex(color_at(idx)).unwrap_or(Rgba8::WHITE);
        let Some(term) = self.terms.get(idx) else {
            return fallback();
        };
        match Rgba8::from_hex(&term.color) {
            Ok(c) => c,
            Err(err) => {
                tracing::warn!(idx, color = %term.color, %err, "unparsable term color, using palette");
                fallback()
            }
        }
    }

    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    pub fn with_kind(&self, kind: ChartKind) -> Self {
        Self {
            kind,
            ..self.clone()
        }
    }

    pub fn with_value_type(&self, value_type: ValueType) -> Self {
        Self {
            value_type,
            ..self.clone()
        }
    }

    pub fn with_font(&self, font: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.style.font = font.into();
        next
    }

    pub fn with_term_label(&self, idx: usize, label: impl Into<String>) -> Self {
        let label = label.into();
        self.map_term(idx, |t| t.label = label)
    }

    pub fn with_term_value(&self, idx: usize, value: f64) -> Self {
        self.map_term(idx, |t| t.value = value)
    }

    pub fn with_term_color(&self, idx: usize, color: impl Into<String>) -> Self {
        let color = color.into();
        self.map_term(idx, |t| t.color = color)
    }

    /// Append a default term; unchanged once the chart holds [`MAX_TERMS`].
    pub fn with_term_added(&self) -> Self {
        let mut next = self.clone();
        if next.terms.len() < MAX_TERMS {
            next.terms.push(Term::new(next.terms.len()));
        }
        next
    }

    /// Remove term `idx`; unchanged at [`MIN_TERMS`] or for an out-of-range index.
    pub fn with_term_removed(&self, idx: usize) -> Self {
        let mut next = self.clone();
        if next.terms.len() > MIN_TERMS && idx < next.terms.len() {
            next.terms.remove(idx);
        }
        next
    }

    fn map_term(&self, idx: usize, f: impl FnOnce(&mut Term)) -> Self {
        let mut next = self.clone();
        if let Some(term) = next.terms.get_mut(idx) {
            f(term);
        }
        next
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/model.rs"]
mod tests;
