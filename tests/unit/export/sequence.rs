use super::*;
use crate::chart::catalog::ChartKind;
use crate::foundation::core::Canvas;
use crate::render::recording::{DrawCommand, RecordingSurface};

#[test]
fn default_opts_match_export_contract() {
    let opts = SequenceOpts::default();
    assert_eq!(opts.frame_count, 60);
    assert_eq!(opts.frame_delay, Duration::from_millis(33));
    assert_eq!(opts.hold_frames, 15);
    assert_eq!(opts.total_frames(), 76);
}

#[test]
fn default_export_has_61_frames_plus_15_hold() {
    let chart = Chart::default().with_kind(ChartKind::Bars);
    let mut surface = RecordingSurface::new(Canvas::DEFAULT);
    let frames = export_sequence(&mut surface, &chart, &SequenceOpts::default()).unwrap();

    assert_eq!(frames.len(), 76);
    assert_eq!(frames[0].progress, 0.0);
    assert_eq!(frames[60].progress, 1.0);
    for hold in &frames[61..] {
        assert_eq!(hold, &frames[60]);
    }
    assert!(frames.iter().all(|f| f.delay == Duration::from_millis(33)));
}

#[test]
fn progress_is_eased_and_monotonic() {
    let opts = SequenceOpts::default();
    assert!((opts.progress_at(30) - 0.875).abs() < 1e-12);
    for i in 1..=opts.frame_count {
        assert!(opts.progress_at(i) >= opts.progress_at(i - 1));
    }
}

#[test]
fn frames_match_single_paints() {
    let chart = Chart::default().with_kind(ChartKind::Donut);
    let opts = SequenceOpts {
        frame_count: 4,
        hold_frames: 0,
        ..SequenceOpts::default()
    };
    let mut surface = RecordingSurface::new(Canvas::DEFAULT);
    let frames = export_sequence(&mut surface, &chart, &opts).unwrap();
    assert_eq!(frames.len(), 5);

    for f in &frames {
        let mut fresh = RecordingSurface::new(Canvas::DEFAULT);
        paint_frame(&mut fresh, &chart, f.progress).unwrap();
        assert_eq!(f.frame, fresh.commands());
        assert_eq!(f.frame.first(), Some(&DrawCommand::Clear));
    }
}

#[test]
fn zero_frame_count_is_rejected() {
    let opts = SequenceOpts {
        frame_count: 0,
        ..SequenceOpts::default()
    };
    let mut surface = RecordingSurface::new(Canvas::DEFAULT);
    let err = export_sequence(&mut surface, &Chart::default(), &opts).unwrap_err();
    assert!(matches!(err, ChartError::Validation(_)));
}

#[test]
fn thumbnail_is_the_settled_frame_as_png() {
    use base64::Engine as _;

    use crate::export::encode::{PNG_DATA_URL_PREFIX, encode_png};
    use crate::render::cpu::CpuSurface;

    let chart = Chart::default().with_kind(ChartKind::Rectangles);
    let canvas = Canvas::new(120, 100).unwrap();
    let mut surface = CpuSurface::new(canvas).unwrap();
    let url = settled_thumbnail(&mut surface, &chart).unwrap();

    let png = base64::engine::general_purpose::STANDARD
        .decode(url.strip_prefix(PNG_DATA_URL_PREFIX).unwrap())
        .unwrap();
    let mut fresh = CpuSurface::new(canvas).unwrap();
    paint_frame(&mut fresh, &chart, 1.0).unwrap();
    assert_eq!(png, encode_png(&fresh.capture().unwrap()).unwrap());
}
