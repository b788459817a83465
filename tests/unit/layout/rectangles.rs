use super::*;
use crate::chart::catalog::ChartKind;
use crate::chart::model::Term;

fn rects(values: &[f64]) -> Chart {
    Chart {
        kind: ChartKind::Rectangles,
        terms: values
            .iter()
            .enumerate()
            .map(|(i, v)| Term {
                value: *v,
                ..Term::new(i)
            })
            .collect(),
        ..Chart::default()
    }
}

fn spans(marks: &[Mark]) -> Vec<(f64, f64, Corners)> {
    marks
        .iter()
        .map(|m| match m {
            Mark::Rect {
                x, width, corners, ..
            } => (*x, *width, *corners),
            other => panic!("unexpected mark {other:?}"),
        })
        .collect()
}

#[test]
fn phase_one_fills_whole_width_with_first_term() {
    let chart = rects(&[1.0, 3.0]);
    let half = spans(&layout_rectangles(&chart, Canvas::DEFAULT, 0.2));
    assert_eq!(half, vec![(40.0, 260.0, Corners::All)]);

    let done = spans(&layout_rectangles(&chart, Canvas::DEFAULT, 0.4));
    assert_eq!(done, vec![(40.0, 520.0, Corners::All)]);
}

#[test]
fn settled_segments_tile_the_bar() {
    let chart = rects(&[1.0, 1.0, 2.0]);
    let s = spans(&layout_rectangles(&chart, Canvas::DEFAULT, 1.0));
    assert_eq!(s.len(), 3);
    assert_eq!(s[0], (40.0, 520.0, Corners::All));
    assert!((s[1].0 - 170.0).abs() < 1e-9);
    assert!((s[1].1 - 130.0).abs() < 1e-9);
    assert_eq!(s[1].2, Corners::None);
    assert!((s[2].0 - 300.0).abs() < 1e-9);
    assert!((s[2].1 - 260.0).abs() < 1e-9);
    assert_eq!(s[2].2, Corners::Right);
    assert!((s[2].0 + s[2].1 - 560.0).abs() < 1e-9);
}

#[test]
fn bar_is_vertically_centered_and_capped() {
    let marks = layout_rectangles(&rects(&[1.0, 1.0]), Canvas::DEFAULT, 1.0);
    let Mark::Rect { y, height, .. } = &marks[0] else {
        unreachable!()
    };
    // 310 * 0.6 = 186 < 200.
    assert!((*height - 186.0).abs() < 1e-9);
    assert!((*y - (70.0 + (310.0 - 186.0) / 2.0)).abs() < 1e-9);

    let tall = Canvas::new(600, 900).unwrap();
    let marks = layout_rectangles(&rects(&[1.0, 1.0]), tall, 1.0);
    let Mark::Rect { height, .. } = &marks[0] else {
        unreachable!()
    };
    assert_eq!(*height, 200.0);
}

#[test]
fn overlay_segments_stagger() {
    let chart = rects(&[1.0, 1.0, 1.0, 1.0]);
    let s = spans(&layout_rectangles(&chart, Canvas::DEFAULT, 0.5));
    // Only the earliest overlay segment has started.
    assert_eq!(s.len(), 2);
    assert_eq!(s[1].2, Corners::None);
}

#[test]
fn zero_total_draws_nothing() {
    assert!(layout_rectangles(&rects(&[0.0, 0.0]), Canvas::DEFAULT, 1.0).is_empty());
    assert!(layout_rectangles(&rects(&[]), Canvas::DEFAULT, 1.0).is_empty());
}

#[test]
fn zero_value_segment_is_skipped() {
    let s = spans(&layout_rectangles(&rects(&[2.0, 0.0, 2.0]), Canvas::DEFAULT, 1.0));
    assert_eq!(s.len(), 2);
    assert!((s[1].0 - 300.0).abs() < 1e-9);
    assert_eq!(s[1].2, Corners::Right);
}
