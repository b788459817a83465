use super::*;
use crate::chart::model::Term;

fn chart(kind: ChartKind, values: &[f64]) -> Chart {
    Chart {
        kind,
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

#[test]
fn alpha_ramps_over_final_thirty_percent() {
    assert_eq!(legend_alpha(0.0), 0.0);
    assert_eq!(legend_alpha(0.5), 0.0);
    assert_eq!(legend_alpha(0.7), 0.0);
    assert_eq!(legend_alpha(1.0), 1.0);
    assert!((legend_alpha(0.85) - 0.5).abs() < 1e-9);
    assert!((legend_alpha(0.79) - 0.3).abs() < 1e-9);
    assert_eq!(legend_alpha(3.0), 1.0);
    assert_eq!(legend_alpha(f64::NAN), 0.0);
}

#[test]
fn percent_labels() {
    let c = chart(ChartKind::Bars, &[10.0, 30.0]).with_value_type(ValueType::Percent);
    let legend = layout_legend(&c, Canvas::DEFAULT, 1.0);
    let texts: Vec<&str> = legend.entries.iter().map(|e| e.value_text.as_str()).collect();
    assert_eq!(texts, vec!["25%", "75%"]);
}

#[test]
fn percent_with_zero_total_is_zero() {
    let c = chart(ChartKind::Bars, &[0.0, 0.0]).with_value_type(ValueType::Percent);
    let legend = layout_legend(&c, Canvas::DEFAULT, 1.0);
    assert!(legend.entries.iter().all(|e| e.value_text == "0%"));
    assert_eq!(percent_of(1.0, 0.0), 0);
    assert_eq!(percent_of(1.0, 3.0), 33);
    assert_eq!(percent_of(1.0, 8.0), 13);
}

#[test]
fn raw_values_print_like_numbers() {
    let c = chart(ChartKind::Donut, &[10.0, 2.5]);
    let legend = layout_legend(&c, Canvas::DEFAULT, 1.0);
    assert_eq!(legend.entries[0].value_text, "10");
    assert_eq!(legend.entries[1].value_text, "2.5");
}

#[test]
fn empty_labels_get_term_numbers_and_long_labels_wrap() {
    let c = chart(ChartKind::Bars, &[1.0, 1.0]).with_term_label(1, "Independent Party");
    let legend = layout_legend(&c, Canvas::DEFAULT, 1.0);
    let first: Vec<&str> = legend.entries[0]
        .label_lines
        .iter()
        .map(|(t, _)| t.as_str())
        .collect();
    assert_eq!(first, vec!["Term 1"]);

    let second = &legend.entries[1].label_lines;
    assert_eq!(second[0].0, "Independen");
    assert_eq!(second[1].0, "t Party");
    assert_eq!(second[1].1.y - second[0].1.y, 16.0);
    assert_eq!(second[0].1.y, 420.0 + 48.0);
    assert_eq!(legend.entries[1].value_anchor.y, 420.0 + 28.0);
    assert_eq!(legend.entries[1].marker.y, 420.0);
}

#[test]
fn marker_positions_follow_chart_type() {
    let values = [1.0, 3.0];
    let xs = |kind| -> Vec<f64> {
        layout_legend(&chart(kind, &values), Canvas::DEFAULT, 1.0)
            .entries
            .iter()
            .map(|e| e.marker.x)
            .collect()
    };

    let circles = xs(ChartKind::Circles);
    assert!((circles[0] - (40.0 + 520.0 / 3.0)).abs() < 1e-9);
    assert!((circles[1] - (40.0 + 2.0 * 520.0 / 3.0)).abs() < 1e-9);

    assert_eq!(xs(ChartKind::Rectangles), vec![40.0 + 65.0, 40.0 + 130.0 + 195.0]);
    assert_eq!(xs(ChartKind::Bars), vec![170.0, 430.0]);
    assert_eq!(xs(ChartKind::Donut), vec![170.0, 430.0]);
}

#[test]
fn rectangles_legend_skipped_when_total_is_zero() {
    let legend = layout_legend(&chart(ChartKind::Rectangles, &[0.0, 0.0]), Canvas::DEFAULT, 1.0);
    assert!(legend.entries.is_empty());
    assert_eq!(legend.alpha, 1.0);
}

#[test]
fn empty_chart_has_no_entries() {
    let legend = layout_legend(&chart(ChartKind::Circles, &[]), Canvas::DEFAULT, 1.0);
    assert!(legend.entries.is_empty());
}

#[test]
fn wrap_handles_multibyte_and_empty() {
    assert_eq!(wrap_chars("", 10), Vec::<String>::new());
    assert_eq!(wrap_chars("ééééééééééé", 10), vec!["éééééééééé", "é"]);
    assert_eq!(wrap_chars("abc", 0), vec!["abc"]);
}
