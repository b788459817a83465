use super::*;

#[test]
fn default_chart_matches_editor_defaults() {
    let chart = Chart::default();
    assert_eq!(chart.title, "Elections Results");
    assert_eq!(chart.kind, ChartKind::Circles);
    assert_eq!(chart.terms.len(), 2);
    assert_eq!(chart.style.font, "Arial");
    assert_eq!(chart.style.font_size, "45px");
    assert_eq!(chart.value_type, ValueType::Value);
    assert_eq!(chart.terms[0].color, "#8CB4FF");
    assert_ne!(chart.terms[0].color, chart.terms[1].color);
}

#[test]
fn new_term_defaults() {
    let t = Term::new(3);
    assert_eq!(t.label, "");
    assert_eq!(t.value, 1.0);
    assert_eq!(t.color, "#5B719A");
}

#[test]
fn edits_copy_and_leave_original_untouched() {
    let base = Chart::default();
    let edited = base
        .with_title("Budget")
        .with_kind(ChartKind::Bars)
        .with_term_label(0, "Rent")
        .with_term_value(1, 42.0)
        .with_term_color(1, "#000000")
        .with_value_type(ValueType::Percent)
        .with_font("Lato");

    assert_eq!(base, Chart::default());
    assert_eq!(edited.title, "Budget");
    assert_eq!(edited.kind, ChartKind::Bars);
    assert_eq!(edited.terms[0].label, "Rent");
    assert_eq!(edited.terms[1].value, 42.0);
    assert_eq!(edited.terms[1].color, "#000000");
    assert_eq!(edited.value_type, ValueType::Percent);
    assert_eq!(edited.style.font, "Lato");
}

#[test]
fn out_of_range_term_edit_is_noop() {
    let base = Chart::default();
    assert_eq!(base.with_term_value(9, 5.0), base);
}

#[test]
fn term_count_stays_within_bounds() {
    let mut chart = Chart::default();
    for _ in 0..10 {
        chart = chart.with_term_added();
    }
    assert_eq!(chart.terms.len(), MAX_TERMS);
    assert_eq!(chart.terms[4].color, color_at(4));

    for _ in 0..10 {
        chart = chart.with_term_removed(0);
    }
    assert_eq!(chart.terms.len(), MIN_TERMS);
    assert_eq!(chart.with_term_removed(7).terms.len(), MIN_TERMS);
}

#[test]
fn magnitudes_clamp_negative_and_non_finite() {
    let chart = Chart::default()
        .with_term_value(0, -4.0)
        .with_term_value(1, f64::NAN);
    assert_eq!(chart.total(), 0.0);
    assert_eq!(chart.max_value(), 0.0);

    let chart = Chart::default()
        .with_term_value(0, 10.0)
        .with_term_value(1, 30.0);
    assert_eq!(chart.total(), 40.0);
    assert_eq!(chart.max_value(), 30.0);
}

#[test]
fn bad_term_color_falls_back_to_palette() {
    let chart = Chart::default().with_term_color(1, "not-a-color");
    assert_eq!(chart.term_color(1), Rgba8::from_hex("#688FD9").unwrap());
    assert_eq!(chart.term_color(0), Rgba8::from_hex("#8CB4FF").unwrap());
}

#[test]
fn json_uses_web_field_names() {
    let chart = Chart::default().with_value_type(ValueType::Percent);
    let v = serde_json::to_value(&chart).unwrap();
    assert_eq!(v["type"], "circles");
    assert_eq!(v["valueType"], "percent");
    assert_eq!(v["style"]["fontSize"], "45px");
    assert_eq!(v["style"]["backgroundColor"], "transparent");

    let back = Chart::from_json_str(&chart.to_json_pretty().unwrap()).unwrap();
    assert_eq!(back, chart);
}

#[test]
fn unknown_chart_type_is_rejected() {
    let json = r##"{"title":"x","type":"pie","terms":[],"style":{"font":"Arial","fontSize":"1px","backgroundColor":"white"},"valueType":"value"}"##;
    let err = Chart::from_json_str(json).unwrap_err();
    assert!(matches!(err, ChartError::Serde(_)));
}
