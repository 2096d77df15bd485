// File: crates/grid-core/tests/style.rs
// Purpose: Attribute map ordering, override merging, value formatting and property lookup.

use grid_core::style::{declarations, kebab_case};
use grid_core::{AttrValue, StyleMap};

#[test]
fn later_entries_override_in_place() {
    let base = StyleMap::new().with("x", 1.0).with("y", 2.0).with("stroke", "#000");
    let over = StyleMap::new().with("stroke", "#FF0000").with("x", 5.0).with("opacity", 0.5);
    let merged = base.merged(&over);
    let keys: Vec<&str> = merged.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["x", "y", "stroke", "opacity"]);
    assert_eq!(merged.get("x"), Some(&AttrValue::Number(5.0)));
    assert_eq!(merged.get("stroke"), Some(&AttrValue::Text("#FF0000".into())));
    // the source maps are untouched
    assert_eq!(base.get("x"), Some(&AttrValue::Number(1.0)));
    assert_eq!(over.len(), 3);
}

#[test]
fn numbers_print_without_trailing_zeroes() {
    assert_eq!(AttrValue::from(1.0).to_string(), "1");
    assert_eq!(AttrValue::from(0.1).to_string(), "0.1");
    assert_eq!(AttrValue::from(-5).to_string(), "-5");
    assert_eq!(AttrValue::from("4 1").to_string(), "4 1");
    assert_eq!(AttrValue::from(true).to_string(), "true");
}

#[test]
fn numeric_text_values_convert() {
    assert_eq!(AttrValue::from(" 2.5 ").as_f64(), Some(2.5));
    assert_eq!(AttrValue::from("none").as_f64(), None);
    assert_eq!(AttrValue::from(3.0).as_f64(), Some(3.0));
    assert_eq!(AttrValue::from("1.5px").as_f64(), Some(1.5));
    assert_eq!(AttrValue::from(true).as_f64(), None);
}

#[test]
fn numeric_properties_follow_inline_precedence() {
    let map = StyleMap::new()
        .with("strokeWidth", 3.0)
        .with("opacity", "0.5")
        .with("style", "stroke-width:2px; stroke:#000");
    assert_eq!(map.number("stroke-width"), Some(2.0));
    assert_eq!(map.number("opacity"), Some(0.5));
    assert_eq!(map.number("stroke"), None);
    assert_eq!(map.number("fill"), None);
    assert_eq!(StyleMap::new().with("strokeWidth", 0.1).number("stroke-width"), Some(0.1));
}

#[test]
fn json_maps_keep_document_order() {
    let map: StyleMap =
        serde_json::from_str(r##"{"stroke":"#0000FF","stroke-width":0.1,"stroke-dasharray":"4 1"}"##).unwrap();
    let pairs: Vec<(String, String)> = map.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    assert_eq!(
        pairs,
        vec![
            ("stroke".to_string(), "#0000FF".to_string()),
            ("stroke-width".to_string(), "0.1".to_string()),
            ("stroke-dasharray".to_string(), "4 1".to_string()),
        ]
    );
    let back = serde_json::to_string(&map).unwrap();
    assert_eq!(back, r##"{"stroke":"#0000FF","stroke-width":0.1,"stroke-dasharray":"4 1"}"##);
}

#[test]
fn camel_case_names_become_kebab_case() {
    assert_eq!(kebab_case("strokeWidth"), "stroke-width");
    assert_eq!(kebab_case("strokeDashArray"), "stroke-dash-array");
    assert_eq!(kebab_case("stroke-width"), "stroke-width");
    assert_eq!(kebab_case("x1"), "x1");
}

#[test]
fn inline_style_declarations_win_over_attributes() {
    let map = StyleMap::new()
        .with("stroke", "#00FF00")
        .with("strokeWidth", 3.0)
        .with("style", "fill:none; stroke:#000000; stroke-width:2");
    assert_eq!(map.property("stroke").as_deref(), Some("#000000"));
    assert_eq!(map.property("stroke-width").as_deref(), Some("2"));
    assert_eq!(map.property("fill").as_deref(), Some("none"));
    assert_eq!(map.property("opacity"), None);

    let plain = StyleMap::new().with("strokeWidth", 3.0);
    assert_eq!(plain.property("stroke-width").as_deref(), Some("3"));
}

#[test]
fn declaration_lists_tolerate_stray_separators() {
    let d = declarations(" Fill : none ;; stroke:#000;  ");
    assert_eq!(d, vec![("fill".to_string(), "none".to_string()), ("stroke".to_string(), "#000".to_string())]);
}
