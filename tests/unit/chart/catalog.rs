use super::*;

#[test]
fn palette_wraps() {
    assert_eq!(color_at(0), "#8CB4FF");
    assert_eq!(color_at(5), color_at(0));
    assert_eq!(color_at(7), color_at(2));
    assert_ne!(color_at(0), color_at(1));
}

#[test]
fn every_kind_has_name_and_icon() {
    assert_eq!(ChartKind::ALL.len(), 4);
    for kind in ChartKind::ALL {
        let info = kind.info();
        assert_eq!(info.kind, kind);
        assert!(!info.name.is_empty());
        assert!(!info.icon.is_empty());
    }
    assert_eq!(ChartKind::Bars.info().icon, "chart-column");
}

#[test]
fn parses_known_kinds_and_rejects_others() {
    for kind in ChartKind::ALL {
        assert_eq!(kind.as_str().parse::<ChartKind>().unwrap(), kind);
        assert!(ChartKind::is_valid(kind.as_str()));
    }
    let err = "pie".parse::<ChartKind>().unwrap_err();
    assert!(matches!(err, ChartError::Configuration(_)));
    assert!(!ChartKind::is_valid("Bars"));
}

#[test]
fn serde_uses_lowercase_names() {
    let json = serde_json::to_string(&ChartKind::Rectangles).unwrap();
    assert_eq!(json, "\"rectangles\"");
    let kind: ChartKind = serde_json::from_str("\"donut\"").unwrap();
    assert_eq!(kind, ChartKind::Donut);
    assert!(serde_json::from_str::<ChartKind>("\"pie\"").is_err());
}

#[test]
fn fonts_list_is_fixed() {
    assert_eq!(FONTS[0], "Arial");
    assert_eq!(FONTS.len(), 5);
}
