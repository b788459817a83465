//! Static chart catalog: chart kinds, palette, and font list.

use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{ChartError, ChartResult};

/// The closed set of chart styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bars,
    Circles,
    Rectangles,
    Donut,
}

/// Display metadata for a [`ChartKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartKindInfo {
    pub kind: ChartKind,
    pub name: &'static str,
    pub icon: &'static str,
}

impl ChartKind {
    /// All kinds, in picker order.
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Circles,
        ChartKind::Donut,
        ChartKind::Rectangles,
        ChartKind::Bars,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bars => "bars",
            Self::Circles => "circles",
            Self::Rectangles => "rectangles",
            Self::Donut => "donut",
        }
    }

    pub fn info(self) -> ChartKindInfo {
        let (name, icon) = match self {
            Self::Circles => ("Circles", "circle-dot"),
            Self::Donut => ("Donut", "circle-dashed"),
            Self::Rectangles => ("Rectangles", "rectangle-horizontal"),
            Self::Bars => ("Bars", "chart-column"),
        };
        ChartKindInfo {
            kind: self,
            name,
            icon,
        }
    }

    pub fn is_valid(s: &str) -> bool {
        s.parse::<ChartKind>().is_ok()
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ChartError::configuration(format!("unknown chart type \"{s}\"")))
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default term colors, assigned by term index.
pub const PALETTE: [&str; 5] = ["#8CB4FF", "#688FD9", "#6180BC", "#5B719A", "#52617E"];

/// Font families offered by the editor.
pub const FONTS: [&str; 5] = ["Arial", "Space Grotesk", "Roboto", "Open Sans", "Lato"];

/// Palette color for term `idx`, wrapping around the palette.
pub fn color_at(idx: usize) -> &'static str {
    PALETTE[idx % PALETTE.len()]
}

#[cfg(test)]
#[path = "../../tests/unit/chart/catalog.rs"]
mod tests;
