// Host-side tests for the theme logic.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod theme {
    include!("../src/core/theme.rs");
}

use theme::*;

#[test]
fn double_toggle_restores_either_starting_theme() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    for start in [Theme::Dark, Theme::Light] {
        assert_eq!(start.toggled().toggled(), start);
    }
}

#[test]
fn attribute_presence_encodes_light_only() {
    // Dark mode is the absence of the attribute.
    assert_eq!(Theme::Dark.attr_value(), None);
    assert_eq!(Theme::Light.attr_value(), Some("light"));

    assert_eq!(Theme::from_attr(None), Theme::Dark);
    assert_eq!(Theme::from_attr(Some("light")), Theme::Light);
    assert_eq!(Theme::from_attr(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_attr(Some("garbage")), Theme::Dark);
}

#[test]
fn attribute_round_trip_is_identity() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(Theme::from_attr(theme.attr_value()), theme);
    }
}

#[test]
fn saved_preference_defaults_to_dark() {
    assert_eq!(Theme::from_saved(None), Theme::Dark);
    assert_eq!(Theme::from_saved(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_saved(Some("light")), Theme::Light);
    assert_eq!(Theme::from_saved(Some("")), Theme::Dark);
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn star_color_is_white_on_dark_black_on_light() {
    assert_eq!(Theme::Dark.star_rgb(), (255, 255, 255));
    assert_eq!(Theme::Light.star_rgb(), (0, 0, 0));
}

#[test]
fn preference_string_round_trips_through_from_saved() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(Theme::from_saved(Some(theme.as_str())), theme);
    }
}
