//! Integration tests for the LayoutBuilder API
//!
//! These tests verify that the public API works end to end.

use spanfit::{
    LayoutBuilder, PlacementError, SpanfitError,
    config::AppConfig,
    layout::projector::PointRole,
};

const SUSPENDED: &str = r#"
    [platforms]
    left_diameter = 1500
    right_diameter = 1500

    [span]
    axes = 12000

    [element]
    kind = "suspended_bar"
    width = 1240
    sub_offset = 20

    [constraints]
    margin_min = 150
    margin_max = 200
    target_gap = 600
"#;

#[test]
fn test_builder_api_exists() {
    let _builder = LayoutBuilder::default();
}

#[test]
fn test_parse_plan_render() {
    let builder = LayoutBuilder::default();
    let mut session = builder.new_session();

    let input = builder.parse(SUSPENDED).expect("Failed to parse layout");
    let plan = builder.plan(&input, &mut session).expect("Failed to plan");

    assert_eq!(plan.solution().count(), 6);
    assert_eq!(session.last_count(), Some(6));

    let first = &plan.projection().placements()[0];
    assert_eq!(first.point(PointRole::LeftHanger), Some(150.0));

    let svg = builder.render_svg(&plan).expect("Failed to render");
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("class=\"hang\""));
}

#[test]
fn test_summary_uses_configured_precision() {
    let config: AppConfig = toml::from_str("[solver]\ndisplay_precision = 2").unwrap();
    let builder = LayoutBuilder::new(config);
    let mut session = builder.new_session();

    let input = builder.parse(SUSPENDED).unwrap();
    let plan = builder.plan(&input, &mut session).unwrap();
    let summary = builder.summarize(&plan);

    assert_eq!(summary.get("Margin"), Some("150.00 mm"));
}

#[test]
fn test_nothing_fits_renders_empty_plan() {
    let source = SUSPENDED.replace("axes = 12000", "axes = 1600");
    let builder = LayoutBuilder::default();
    let mut session = builder.new_session();

    let input = builder.parse(&source).unwrap();
    let plan = builder.plan(&input, &mut session).expect("Empty plan, not an error");

    assert!(plan.is_empty());
    assert_eq!(session.last_count(), None);
    let svg = builder.render_svg(&plan).unwrap();
    assert!(svg.contains("No feasible placement"));
}

#[test]
fn test_invalid_footprint_is_an_error() {
    let source = SUSPENDED.replace("width = 1240", "width = 40");
    let builder = LayoutBuilder::default();
    let input = builder.parse(&source).unwrap();

    let err = builder.plan(&input, &mut builder.new_session()).unwrap_err();
    assert!(matches!(
        err,
        SpanfitError::Placement(PlacementError::InvalidFootprint { .. })
    ));
}

#[test]
fn test_rejected_request_with_reject_policy() {
    let config: AppConfig = toml::from_str("[solver]\nfallback = \"reject\"").unwrap();
    let builder = LayoutBuilder::new(config);
    let source = format!("count = 9\n{SUSPENDED}");
    let input = builder.parse(&source).unwrap();

    let err = builder.plan(&input, &mut builder.new_session()).unwrap_err();
    assert!(matches!(
        err,
        SpanfitError::Placement(PlacementError::RequestedCountInfeasible { requested: 9 })
    ));
}

#[test]
fn test_session_is_reused_across_plans() {
    let builder = LayoutBuilder::default();
    let mut session = builder.new_session();

    let input = builder.parse(&format!("count = 4\n{SUSPENDED}")).unwrap();
    builder.plan(&input, &mut session).unwrap();
    assert_eq!(session.last_count(), Some(4));

    let input = builder.parse(SUSPENDED).unwrap();
    builder.plan(&input, &mut session).unwrap();
    assert_eq!(session.last_count(), Some(6));
}

#[test]
fn test_parse_invalid_returns_error() {
    let builder = LayoutBuilder::default();
    let result = builder.parse("this is not a layout");
    assert!(matches!(result, Err(SpanfitError::Input { .. })));
}
