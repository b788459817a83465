//! chartmotion renders small labeled datasets as animated 2D charts.
//!
//! A [`Chart`] plus a progress value in `[0, 1]` is painted onto any [`Surface`] by
//! [`paint_frame`]. Two callers drive it:
//!
//! - [`Animator`] maps clock time to eased progress, one frame callback per scheduler tick
//! - [`export_sequence`] steps progress deterministically for PNG/GIF export
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod chart;
pub(crate) mod config;
pub(crate) mod export;
pub(crate) mod gallery;
pub(crate) mod layout;
pub(crate) mod notify;
pub(crate) mod render;

pub use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{ChartError, ChartResult};

pub use crate::animation::clock::{
    Clock, FrameScheduler, FrameTicket, ManualClock, MonotonicClock, QueuedScheduler,
};
pub use crate::animation::driver::{Animator, AnimatorOpts};
pub use crate::animation::ease::ease_out;
pub use crate::animation::stagger::{DEFAULT_STAGGER, OVERLAY_STAGGER, stagger};
pub use crate::chart::catalog::{ChartKind, ChartKindInfo, FONTS, PALETTE, color_at};
pub use crate::chart::model::{Chart, ChartStyle, MAX_TERMS, MIN_TERMS, Term, ValueType};
pub use crate::config::EngineConfig;
pub use crate::export::encode::{
    PNG_DATA_URL_PREFIX, encode_gif, encode_png, encode_png_data_url, write_atomically,
};
pub use crate::export::sequence::{
    SequenceFrame, SequenceOpts, export_sequence, settled_thumbnail,
};
pub use crate::gallery::store::{DEFAULT_DB_FILE, GalleryStore, SavedChart};
pub use crate::layout::legend::{LegendEntry, LegendLayout, layout_legend};
pub use crate::layout::{Corners, Envelope, Mark, layout_chart};
pub use crate::notify::{MSG_CHART_DELETED, MSG_CHART_SAVED, MessageBus, Subscription};
pub use crate::render::compositor::paint_frame;
pub use crate::render::cpu::CpuSurface;
pub use crate::render::recording::{DrawCommand, RecordingSurface};
pub use crate::render::surface::{
    Cap, Capture, FrameRGBA, Stroke, Surface, TextAlign, TextStyle,
};
pub use crate::render::text::TextLayoutEngine;
