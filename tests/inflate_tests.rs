mod common;

use common::fixtures::*;
use common::{TestResult, inflate, inflate_with, init_logger, provider_with};
use std::collections::HashMap;
use trellis::{
    Inflater, InflaterConfig, LayoutConfig, LayoutError, LayoutTree, PipelineError,
    ResourceResolver,
};
use trellis_layout::Rect;
use trellis_traits::{MapLocalizer, RecordingViewFactory};
use trellis_types::{Color, FontSpec};

#[test]
fn test_centered_box_gets_its_frame_and_background() -> TestResult {
    let inflation = inflate(CENTERED, 320.0, 480.0)?;

    assert_eq!(inflation.root_frame(0), Rect::new(0.0, 0.0, 320.0, 480.0));
    assert_eq!(inflation.frame_of("box"), Rect::new(110.0, 190.0, 100.0, 100.0));

    let node = inflation.tree.find_in_tree(inflation.id("box")).unwrap();
    assert!(inflation.inflated.view(node).is_some());

    let views = inflation.factory.views();
    let recorded = views.iter().find(|v| v.borrow().tag == "View").unwrap().borrow();
    assert_eq!(recorded.frame, Rect::new(110.0, 190.0, 100.0, 100.0));
    assert_eq!(recorded.background, Some(Color::new(1.0, 0.0, 0.0, 1.0)));
    assert!(!recorded.hidden);
    Ok(())
}

#[test]
fn test_forward_references_share_one_id() -> TestResult {
    let inflation = inflate(FORWARD_REFERENCES, 320.0, 480.0)?;

    let first = inflation.frame_of("first");
    assert_eq!(first, Rect::new(135.0, 0.0, 50.0, 20.0));
    assert_eq!(inflation.frame_of("second"), Rect::new(0.0, 20.0, 50.0, 20.0));
    assert_eq!(inflation.frame_of("third"), Rect::new(185.0, 0.0, 30.0, 20.0));

    // `second` registered `first` while anchoring to it.
    assert_eq!(inflation.id("second").get(), 1);
    assert_eq!(inflation.id("first").get(), 2);
    assert_eq!(inflation.id("third").get(), 3);
    Ok(())
}

#[test]
fn test_form_nests_linear_and_relative_boxes() -> TestResult {
    let inflation = inflate(FORM, 320.0, 480.0)?;

    assert_eq!(inflation.frame_of("form"), Rect::new(0.0, 0.0, 320.0, 480.0));
    assert_eq!(inflation.frame_of("title"), Rect::new(10.0, 10.0, 70.0, 24.0));
    assert_eq!(inflation.frame_of("row"), Rect::new(10.0, 40.0, 300.0, 40.0));
    assert_eq!(inflation.frame_of("user"), Rect::new(0.0, 0.0, 180.0, 40.0));
    assert_eq!(inflation.frame_of("gap"), Rect::new(180.0, 0.0, 30.0, 40.0));
    assert_eq!(inflation.frame_of("pass"), Rect::new(210.0, 0.0, 90.0, 40.0));
    assert_eq!(inflation.frame_of("footer"), Rect::new(10.0, 80.0, 300.0, 390.0));
    assert_eq!(inflation.frame_of("submit"), Rect::new(110.0, 180.0, 80.0, 30.0));
    assert_eq!(inflation.frame_of("cancel"), Rect::new(110.0, 215.0, 80.0, 30.0));
    // Stretched from the cancel button to the footer's right edge.
    assert_eq!(inflation.frame_of("divider"), Rect::new(190.0, 215.0, 110.0, 1.0));
    Ok(())
}

#[test]
fn test_text_is_pushed_to_host_views() -> TestResult {
    let inflation = inflate(FORM, 320.0, 480.0)?;

    let views = inflation.factory.views();
    let label = views.iter().find(|v| v.borrow().tag == "Label").unwrap().borrow();
    assert_eq!(label.text.as_deref(), Some("Sign in"));
    assert_eq!(label.font, Some(FontSpec::new("System", 20.0)));

    let titles: Vec<String> = views
        .iter()
        .filter(|v| v.borrow().tag == "Button")
        .filter_map(|v| v.borrow().text.clone())
        .collect();
    assert_eq!(titles, vec!["Go".to_string(), "Cancel".to_string()]);
    Ok(())
}

#[test]
fn test_stack_gives_the_body_what_is_left() -> TestResult {
    let inflation = inflate(STACK, 320.0, 480.0)?;

    assert_eq!(inflation.frame_of("header"), Rect::new(0.0, 0.0, 320.0, 44.0));
    assert_eq!(inflation.frame_of("body"), Rect::new(0.0, 44.0, 320.0, 386.0));
    assert_eq!(inflation.frame_of("footer"), Rect::new(0.0, 430.0, 320.0, 50.0));

    let hidden = inflation.frame_of("hidden");
    assert_eq!((hidden.width, hidden.height), (0.0, 0.0));

    let hidden_views: Vec<_> = inflation
        .factory
        .views()
        .into_iter()
        .filter(|v| v.borrow().hidden)
        .collect();
    assert_eq!(hidden_views.len(), 1);
    Ok(())
}

#[test]
fn test_named_colors_come_from_the_color_table() -> TestResult {
    let provider = provider_with(&[("colors.json", r##"{"brand": "#00FF00"}"##)]);
    let inflater = Inflater::new(ResourceResolver::new(provider));
    let markup = r#"<xml>
        <View id="@+id/tile" width="10" height="10" background_color="@color/brand"/>
        <View id="@+id/missing" width="10" height="10" background_color="@color/nope"/>
    </xml>"#;

    let inflation = inflate_with(inflater, markup, 100.0, 100.0)?;

    let views = inflation.factory.views();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].borrow().background, Some(Color::new(0.0, 1.0, 0.0, 1.0)));
    assert_eq!(views[1].borrow().background, None);
    Ok(())
}

#[test]
fn test_string_references_are_localized() -> TestResult {
    let strings = HashMap::from([("greeting".to_string(), "Hello".to_string())]);
    let resolver =
        ResourceResolver::new(provider_with(&[])).with_localizer(MapLocalizer::new(strings));
    let markup = r#"<xml>
        <Label width="wrap_content" height="wrap_content" text="@string/greeting"/>
        <Label width="wrap_content" height="wrap_content" text="two\nlines"/>
    </xml>"#;

    let inflation = inflate_with(Inflater::new(resolver), markup, 200.0, 200.0)?;

    let views = inflation.factory.views();
    assert_eq!(views[0].borrow().text.as_deref(), Some("Hello"));
    assert_eq!(views[1].borrow().text.as_deref(), Some("two\nlines"));
    Ok(())
}

#[test]
fn test_image_leaf_takes_its_natural_size() -> TestResult {
    let markup = r#"<ImageView id="@+id/logo" width="wrap_content" height="wrap_content"
        image="logo.png" image_width="64" image_height="32"/>"#;

    let inflation = inflate(markup, 320.0, 480.0)?;

    assert_eq!(inflation.frame_of("logo"), Rect::new(0.0, 0.0, 64.0, 32.0));
    let views = inflation.factory.views();
    assert_eq!(views[0].borrow().image.as_deref(), Some("logo.png"));
    Ok(())
}

#[test]
fn test_ids_are_stable_across_inflations() -> TestResult {
    init_logger();
    let mut inflater = Inflater::new(ResourceResolver::new(provider_with(&[])));
    let mut first_tree = LayoutTree::new();
    let first_viewport = first_tree.add_viewport(320.0, 480.0)?;
    let mut second_tree = LayoutTree::new();
    let second_viewport = second_tree.add_viewport(320.0, 480.0)?;

    inflater.inflate_str(FORWARD_REFERENCES, &mut first_tree, first_viewport, None)?;
    let first_id = inflater.resolver().ids().get("first");
    inflater.inflate_str(FORWARD_REFERENCES, &mut second_tree, second_viewport, None)?;

    assert_eq!(inflater.resolver().ids().get("first"), first_id);
    assert_eq!(inflater.resolver().ids().len(), 3);
    let id = first_id.unwrap();
    assert_eq!(
        first_tree.get(first_tree.find_in_tree(id).unwrap())?.frame(),
        second_tree.get(second_tree.find_in_tree(id).unwrap())?.frame()
    );
    Ok(())
}

#[test]
fn test_strict_anchors_reject_cycles() -> TestResult {
    init_logger();
    let config = InflaterConfig {
        layout: LayoutConfig {
            strict_anchors: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut inflater = Inflater::with_config(ResourceResolver::new(provider_with(&[])), config);
    let markup = r#"<RelativeLayout width="100" height="100">
        <View id="@+id/a" width="10" height="10" below="@+id/b"/>
        <View id="@+id/b" width="10" height="10" below="@id/a"/>
    </RelativeLayout>"#;

    let mut tree = LayoutTree::new();
    let viewport = tree.add_viewport(100.0, 100.0)?;
    let result = inflater.inflate_str(markup, &mut tree, viewport, None);

    assert!(matches!(
        result,
        Err(PipelineError::Layout(LayoutError::CyclicAnchors { .. }))
    ));
    Ok(())
}

#[test]
fn test_lenient_anchors_still_lay_out_cycles() -> TestResult {
    let markup = r#"<RelativeLayout width="100" height="100">
        <View id="@+id/a" width="10" height="10" below="@+id/b"/>
        <View id="@+id/b" width="10" height="10" below="@id/a"/>
    </RelativeLayout>"#;

    let inflation = inflate(markup, 100.0, 100.0)?;

    let a = inflation.frame_of("a");
    let b = inflation.frame_of("b");
    assert!(a.y == 0.0 || b.y == 0.0);
    Ok(())
}

#[test]
fn test_malformed_markup_is_a_parse_error() {
    init_logger();
    let result = inflate("<xml><View></xml>", 100.0, 100.0);
    assert!(matches!(result, Err(PipelineError::Parse(_))));
}

#[tokio::test]
async fn test_inflate_resource_calls_completion() -> TestResult {
    init_logger();
    let provider = provider_with(&[("screen.xml", CENTERED)]);
    let mut inflater = Inflater::new(ResourceResolver::new(provider));
    let mut tree = LayoutTree::new();
    let viewport = tree.add_viewport(320.0, 480.0)?;
    let factory = RecordingViewFactory::new();

    let mut completed = None;
    let inflated = inflater
        .inflate_resource("screen", &mut tree, viewport, Some(&factory), |tree, roots| {
            completed = Some((tree.len(), roots.to_vec()));
        })
        .await?;

    let (nodes, roots) = completed.expect("completion was called");
    assert_eq!(nodes, 3);
    assert_eq!(roots, inflated.roots);
    assert_eq!(factory.views().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_missing_resource_skips_completion() -> TestResult {
    init_logger();
    let mut inflater = Inflater::new(ResourceResolver::new(provider_with(&[])));
    let mut tree = LayoutTree::new();
    let viewport = tree.add_viewport(320.0, 480.0)?;

    let mut called = false;
    let result = inflater
        .inflate_resource("nowhere", &mut tree, viewport, None, |_, _| called = true)
        .await;

    assert!(matches!(result, Err(PipelineError::Resource(_))));
    assert!(!called);
    assert_eq!(tree.len(), 1);
    Ok(())
}
