use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::chart::model::Chart;
use crate::foundation::error::{ChartError, ChartResult};
use crate::foundation::fs::replace_file;

/// Default gallery file name, next to the working directory.
pub const DEFAULT_DB_FILE: &str = "chartDB.json";

const ID_PREFIX: &str = "chart_";

/// A chart persisted in the gallery.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedChart {
    pub id: String,
    #[serde(flatten)]
    pub chart: Chart,
    /// Opaque preview reference (data URL or file path); may be empty.
    #[serde(default)]
    pub thumbnail: String,
    /// Unix milliseconds.
    pub saved_at: u64,
}

/// Saved charts in a single JSON array file, newest first.
///
/// Every operation reads the file fresh; nothing is cached in memory.
#[derive(Clone, Debug)]
pub struct GalleryStore {
    path: PathBuf,
}

impl GalleryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All saved charts, newest first. A missing file is an empty gallery.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub fn list(&self) -> ChartResult<Vec<SavedChart>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(ChartError::storage(format!(
                    "read '{}': {e}",
                    self.path.display()
                )));
            }
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes).map_err(|e| {
            ChartError::serde(format!("gallery '{}': {e}", self.path.display()))
        })
    }

    pub fn get(&self, id: &str) -> ChartResult<Option<SavedChart>> {
        Ok(self.list()?.into_iter().find(|c| c.id == id))
    }

    /// Save a copy of `chart` at the front of the gallery.
    pub fn save(&self, chart: &Chart, thumbnail: impl Into<String>) -> ChartResult<SavedChart> {
        self.save_at(chart, thumbnail, unix_millis())
    }

    /// [`GalleryStore::save`] with an explicit timestamp.
    ///
    /// The id is `chart_<millis>`; if that id is taken the number is bumped until it is free.
    #[tracing::instrument(skip(self, chart, thumbnail), fields(path = %self.path.display()))]
    pub fn save_at(
        &self,
        chart: &Chart,
        thumbnail: impl Into<String>,
        now_ms: u64,
    ) -> ChartResult<SavedChart> {
        let mut charts = self.list()?;

        let mut stamp = now_ms;
        let id = loop {
            let id = format!("{ID_PREFIX}{stamp}");
            if !charts.iter().any(|c| c.id == id) {
                break id;
            }
            stamp += 1;
        };

        let saved = SavedChart {
            id,
            chart: chart.clone(),
            thumbnail: thumbnail.into(),
            saved_at: now_ms,
        };
        charts.insert(0, saved.clone());
        self.write_all(&charts)?;
        tracing::debug!(id = %saved.id, count = charts.len(), "saved chart");
        Ok(saved)
    }

    /// Remove the chart with `id`. Returns whether anything was removed.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub fn delete(&self, id: &str) -> ChartResult<bool> {
        let mut charts = self.list()?;
        let before = charts.len();
        charts.retain(|c| c.id != id);
        if charts.len() == before {
            return Ok(false);
        }
        self.write_all(&charts)?;
        Ok(true)
    }

    fn write_all(&self, charts: &[SavedChart]) -> ChartResult<()> {
        let json =
            serde_json::to_vec_pretty(charts).map_err(|e| ChartError::serde(e.to_string()))?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| {
                ChartError::storage(format!("create '{}': {e}", dir.display()))
            })?;
        }
        replace_file(&self.path, &json)
            .map_err(|e| ChartError::storage(format!("write '{}': {e}", self.path.display())))
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/store.rs"]
mod tests;
