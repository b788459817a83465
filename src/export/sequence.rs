use std::time::Duration;

use crate::animation::ease::ease_out;
use crate::chart::model::Chart;
use crate::foundation::error::{ChartError, ChartResult};
use crate::render::compositor::paint_frame;
use crate::export::encode::encode_png_data_url;
use crate::render::surface::{Capture, FrameRGBA, Surface};

/// Options for [`export_sequence`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceOpts {
    /// Number of progress steps; `frame_count + 1` frames are painted (both ends included).
    pub frame_count: u32,
    pub frame_delay: Duration,
    /// Extra copies of the final frame appended after the animation.
    pub hold_frames: u32,
}

impl Default for SequenceOpts {
    fn default() -> Self {
        Self {
            frame_count: 60,
            frame_delay: Duration::from_millis(33),
            hold_frames: 15,
        }
    }
}

impl SequenceOpts {
    /// Total number of frames an export produces.
    pub fn total_frames(&self) -> usize {
        self.frame_count as usize + 1 + self.hold_frames as usize
    }

    /// Eased progress of animation step `i`.
    pub fn progress_at(&self, i: u32) -> f64 {
        ease_out(f64::from(i.min(self.frame_count)) / f64::from(self.frame_count.max(1)))
    }
}

/// One captured frame and how long it stays on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceFrame<T> {
    pub progress: f64,
    pub delay: Duration,
    pub frame: T,
}

/// Paint and capture `chart` at evenly spaced eased progress values, then append the hold.
///
/// Purely step driven: no clock is read, so the same inputs always give the same sequence.
#[tracing::instrument(
    skip(surface, chart, opts),
    fields(kind = %chart.kind, frame_count = opts.frame_count, hold = opts.hold_frames)
)]
pub fn export_sequence<S>(
    surface: &mut S,
    chart: &Chart,
    opts: &SequenceOpts,
) -> ChartResult<Vec<SequenceFrame<S::Snapshot>>>
where
    S: Surface + Capture + ?Sized,
{
    if opts.frame_count == 0 {
        return Err(ChartError::validation("frame_count must be > 0"));
    }

    let mut out = Vec::with_capacity(opts.total_frames());
    for i in 0..=opts.frame_count {
        let progress = opts.progress_at(i);
        paint_frame(surface, chart, progress)?;
        let frame = surface.capture()?;
        tracing::debug!(i, progress, "captured frame");
        out.push(SequenceFrame {
            progress,
            delay: opts.frame_delay,
            frame,
        });
    }

    if let Some(last) = out.last().cloned() {
        out.extend(std::iter::repeat_n(last, opts.hold_frames as usize));
    }
    Ok(out)
}

/// Paint the settled frame of `chart` and return it as a PNG data URL for the gallery.
pub fn settled_thumbnail<S>(surface: &mut S, chart: &Chart) -> ChartResult<String>
where
    S: Surface + Capture<Snapshot = FrameRGBA> + ?Sized,
{
    paint_frame(surface, chart, 1.0)?;
    let frame = surface.capture()?;
    encode_png_data_url(&frame)
}

#[cfg(test)]
#[path = "../../tests/unit/export/sequence.rs"]
mod tests;
