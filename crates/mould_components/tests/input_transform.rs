use mould_components::input::{transform, InputTransform, StylePropertyGroups};
use mould_components::TransformConfig;
use mould_core::{Rgba, StyleValue, VisualStyle};
use mould_inspector::{
    BlurProps, BlurStyle, ContainerLayoutProps, FillProps, FilterEntry, FilterKind, FilterProps,
    Inspector, ParentContext, ShadowEntry,
};
use pretty_assertions::assert_eq;

fn filters(entries: impl IntoIterator<Item = (FilterKind, FilterEntry)>) -> FilterProps {
    entries.into_iter().collect()
}

#[test]
fn empty_input_omits_shadow_and_filters() {
    let style = transform(None, None);
    for key in ["shadow", "filter", "backdropFilter", "fill"] {
        assert!(!style.contains_key(key), "unexpected key {key}");
    }
    assert_eq!(style.get_str("color"), Some("rgba(0,0,0,1)"));
    assert_eq!(style.get_str("size"), Some("14px"));
}

#[test]
fn two_active_shadows_join_with_space_before_comma() {
    let groups = StylePropertyGroups::new().shadows(vec![
        ShadowEntry::new(1.0, 2.0, 3.0, Rgba::BLACK),
        ShadowEntry::new(4.0, 5.0, 6.0, Rgba::BLACK),
    ]);
    let style = transform(Some(&groups), None);
    assert_eq!(
        style.get_str("shadow"),
        Some("1px 2px 3px rgba(0,0,0,1) ,4px 5px 6px rgba(0,0,0,1)")
    );
}

#[test]
fn present_shadows_with_nothing_active_yield_empty_string() {
    let groups = StylePropertyGroups::new().shadows(vec![ShadowEntry::none()]);
    assert_eq!(transform(Some(&groups), None).get_str("shadow"), Some(""));
}

#[test]
fn background_blur_sets_backdrop_filter_only() {
    let groups =
        StylePropertyGroups::new().blur(BlurProps::new(5.0, "px", BlurStyle::Background));
    let style = transform(Some(&groups), None);
    assert_eq!(style.get_str("backdropFilter"), Some("blur(5px)"));
    assert!(!style.contains_key("filter"));
}

#[test]
fn layer_blur_precedes_filters() {
    let groups = StylePropertyGroups::new()
        .blur(BlurProps::new(5.0, "px", BlurStyle::Normal))
        .filters(filters([(FilterKind::Grayscale, FilterEntry::new(50.0, "%"))]));
    let style = transform(Some(&groups), None);
    assert_eq!(style.get_str("filter"), Some("blur(5px) grayscale(50%)"));
    assert!(!style.contains_key("backdropFilter"));
}

#[test]
fn empty_filters_group_still_writes_filter() {
    let groups = StylePropertyGroups::new().filters(FilterProps::new());
    assert_eq!(transform(Some(&groups), None).get_str("filter"), Some(""));
}

#[test]
fn filters_follow_stored_order() {
    let forward = StylePropertyGroups::new().filters(filters([
        (FilterKind::Contrast, FilterEntry::new(90.0, "%")),
        (FilterKind::Sepia, FilterEntry::new(10.0, "%")),
    ]));
    let backward = StylePropertyGroups::new().filters(filters([
        (FilterKind::Sepia, FilterEntry::new(10.0, "%")),
        (FilterKind::Contrast, FilterEntry::new(90.0, "%")),
    ]));
    assert_eq!(
        transform(Some(&forward), None).get_str("filter"),
        Some("contrast(90%) sepia(10%)")
    );
    assert_eq!(
        transform(Some(&backward), None).get_str("filter"),
        Some("sepia(10%) contrast(90%)")
    );
}

#[test]
fn transform_is_idempotent() {
    let groups = StylePropertyGroups::new()
        .fill(FillProps::new(Rgba::new(10, 20, 30, 0.4)))
        .shadows(vec![ShadowEntry::new(0.0, 2.0, 4.0, Rgba::BLACK)])
        .filters(filters([(FilterKind::HueRotate, FilterEntry::new(30.0, "deg"))]));
    let parent = ParentContext::stack();
    let first = transform(Some(&groups), Some(&parent));
    let second = transform(Some(&groups), Some(&parent));
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

/// Emits a `fill` from the parent, colliding with the fill step
struct TintingParent;

impl Inspector for TintingParent {
    fn props_from_parent(
        &self,
        _parent: Option<&ParentContext>,
        _container: &ContainerLayoutProps,
    ) -> VisualStyle {
        VisualStyle::new()
            .with("fill", "inherit")
            .with("size", "inherit")
    }
}

#[test]
fn parent_context_wins_over_every_earlier_step() {
    let groups = StylePropertyGroups::new().fill(FillProps::new(Rgba::WHITE));
    let style = InputTransform::new()
        .with_inspector(TintingParent)
        .transform(Some(&groups), None);
    assert_eq!(style.get_str("fill"), Some("inherit"));
    assert_eq!(style.get_str("size"), Some("inherit"));
    // Overwritten keys stay where they were first written
    assert_eq!(style.keys().next(), Some("fill"));
}

#[test]
fn stack_parent_resolves_flex_keys_last() {
    let groups = StylePropertyGroups::new().container_layout(ContainerLayoutProps {
        flex_grow: Some(1.0),
        ..Default::default()
    });
    let style = transform(Some(&groups), Some(&ParentContext::stack()));
    assert_eq!(style.get("flexGrow"), Some(&StyleValue::Number(1.0)));
    assert_eq!(style.get("flexShrink"), Some(&StyleValue::Number(1.0)));
    assert_eq!(style.keys().last(), Some("flexShrink"));
}

#[test]
fn missing_filter_amount_degrades_instead_of_failing() {
    let groups: StylePropertyGroups = serde_json::from_str(
        r#"{"filtersProps": {"Grayscale": {"active": true, "unit": "%"}}}"#,
    )
    .unwrap();
    let style = transform(Some(&groups), None);
    assert_eq!(style.get_str("filter"), Some("grayscale(undefined%)"));

    let err = groups.validate().unwrap_err();
    assert_eq!(err.path, "filtersProps.Grayscale.amount");
}

#[test]
fn saved_props_transform_end_to_end() {
    let groups: StylePropertyGroups = serde_json::from_str(
        r#"{
            "layoutProps": {"width": {"value": 240, "unit": "px"}, "height": {"value": 32, "unit": "px"}},
            "InputProps": {"value": "", "placeholder": "Email", "color": {"r": 17, "g": 24, "b": 39, "a": 1}, "size": 13},
            "fillProps": {"active": true, "color": {"r": 255, "g": 255, "b": 255, "a": 1}},
            "borderProps": {"active": true, "width": 1, "style": "solid", "color": {"r": 209, "g": 213, "b": 219, "a": 1}, "radius": 6},
            "shadowsProps": [{"active": true, "x": 0, "y": 1, "blur": 2, "color": {"r": 0, "g": 0, "b": 0, "a": 0.05}}],
            "blurProps": {"active": false, "blurAmount": 4, "unit": "px", "blurStyle": "Background"},
            "filtersProps": {}
        }"#,
    )
    .unwrap();
    assert!(groups.validate().is_ok());

    let style = transform(Some(&groups), Some(&ParentContext::frame()));
    let json = serde_json::to_value(&style).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "fill": "rgba(255,255,255,1)",
            "borderWidth": "1px",
            "borderStyle": "solid",
            "borderColor": "rgba(209,213,219,1)",
            "borderRadius": "6px",
            "width": "240px",
            "height": "32px",
            "value": "",
            "placeholder": "Email",
            "color": "rgba(17,24,39,1)",
            "size": "13px",
            "shadow": "0px 1px 2px rgba(0,0,0,0.05)",
            "filter": "",
            "position": "absolute",
            "left": "0px",
            "top": "0px"
        })
    );
}

#[test]
fn config_defaults_feed_the_transform() {
    let config = TransformConfig::from_toml_str(
        r#"
        [input]
        placeholder = "Search"
        size = 12
        "#,
    )
    .unwrap();
    let style = InputTransform::from_config(&config).transform(None, None);
    assert_eq!(style.get_str("placeholder"), Some("Search"));
    assert_eq!(style.get_str("size"), Some("12px"));
}

/// Writes colors in upper case
struct UpperColors;

impl Inspector for UpperColors {
    fn color(&self, color: &Rgba) -> String {
        color.to_string().to_uppercase()
    }
}

#[test]
fn one_color_formatter_serves_fill_input_and_shadows() {
    let groups = StylePropertyGroups::new()
        .fill(FillProps::new(Rgba::WHITE))
        .shadows(vec![ShadowEntry::new(1.0, 2.0, 3.0, Rgba::BLACK)]);
    let style = InputTransform::new()
        .with_inspector(UpperColors)
        .transform(Some(&groups), None);
    assert_eq!(style.get_str("fill"), Some("RGBA(255,255,255,1)"));
    assert_eq!(style.get_str("color"), Some("RGBA(0,0,0,1)"));
    assert_eq!(style.get_str("shadow"), Some("1px 2px 3px RGBA(0,0,0,1)"));
}

#[test]
fn missing_shadow_offset_degrades_instead_of_failing() {
    let groups: StylePropertyGroups = serde_json::from_str(
        r#"{"shadowsProps": [{"active": true, "y": 1, "blur": 2, "color": {"r": 0, "g": 0, "b": 0, "a": 0.5}}]}"#,
    )
    .unwrap();
    let style = transform(Some(&groups), None);
    assert_eq!(style.get_str("shadow"), Some("undefinedpx 1px 2px rgba(0,0,0,0.5)"));

    let err = groups.validate().unwrap_err();
    assert_eq!(err.path, "shadowsProps.0.x");
    assert_eq!(err.to_string(), "invalid `shadowsProps.0.x`: is missing");
}
