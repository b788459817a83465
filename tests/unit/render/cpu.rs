use super::*;

fn small() -> Canvas {
    Canvas::new(16, 8).unwrap()
}

#[test]
fn empty_capture_is_transparent() {
    let mut s = CpuSurface::new(small()).unwrap();
    s.clear();
    let frame = s.capture().unwrap();
    assert_eq!((frame.width, frame.height), (16, 8));
    assert_eq!(frame.data.len(), 16 * 8 * 4);
    assert!(frame.premultiplied);
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn full_rect_fills_every_pixel() {
    let mut s = CpuSurface::new(small()).unwrap();
    s.clear();
    s.fill_rect(Rect::new(0.0, 0.0, 16.0, 8.0), Rgba8::WHITE);
    let frame = s.capture().unwrap();
    assert!(frame.data.iter().all(|&b| b == 255));
}

#[test]
fn clear_discards_pending_draws() {
    let mut s = CpuSurface::new(small()).unwrap();
    s.fill_rect(Rect::new(0.0, 0.0, 16.0, 8.0), Rgba8::WHITE);
    s.clear();
    let frame = s.capture().unwrap();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn stroke_covers_the_line() {
    let mut s = CpuSurface::new(small()).unwrap();
    s.clear();
    let mut path = BezPath::new();
    path.move_to((2.0, 4.0));
    path.line_to((14.0, 4.0));
    s.stroke_path(&path, &Stroke::new(4.0), Rgba8::rgb(255, 0, 0));
    let frame = s.capture().unwrap();
    assert_eq!(frame.pixel(8, 4), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(8, 0).map(|p| p[3]), Some(0));
}

#[test]
fn text_without_fonts_is_skipped() {
    let mut s = CpuSurface::new(small()).unwrap();
    s.clear();
    let style = TextStyle {
        family: "Arial".to_owned(),
        size_px: 12.0,
        bold: true,
        align: TextAlign::Left,
    };
    s.fill_text("Hi", Point::new(1.0, 7.0), &style, Rgba8::rgb(0, 0, 0))
        .unwrap();
    let frame = s.capture().unwrap();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn unbalanced_alpha_pops_are_ignored() {
    let mut s = CpuSurface::new(small()).unwrap();
    s.clear();
    s.pop_alpha();
    s.push_alpha(0.5);
    s.fill_rect(Rect::new(0.0, 0.0, 16.0, 8.0), Rgba8::WHITE);
    let frame = s.capture().unwrap();
    let a = frame.pixel(3, 3).unwrap()[3];
    assert!((120..=135).contains(&a), "alpha {a}");
}
