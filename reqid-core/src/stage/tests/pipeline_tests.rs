use crate::request::{Component, NormalizedRequest};
use crate::stage::{NamedStage, Stage, StagePipeline};
use pretty_assertions::assert_eq;

#[test]
fn empty_pipeline_leaves_request_untouched() {
    let req = NormalizedRequest::new("POST", "/x").with_query("a", "1");

    let out = StagePipeline::run(&[], req.clone());

    assert_eq!(out, req);
}

#[test]
fn stages_run_in_order() {
    // Arrange
    let stages = vec![
        Stage::enable(Component::Header),
        Stage::Named(NamedStage::NormalizeAcceptEncoding),
        Stage::accept_list(Component::Header, ["Accept-Encoding"]),
    ];
    let req = NormalizedRequest::new("GET", "/")
        .with_header("accept-encoding", "gzip, br")
        .with_header("host", "h");

    // Act
    let out = StagePipeline::run(&stages, req);

    // Assert
    assert!(out.is_included(Component::Header));
    assert_eq!(out.header_values("Accept-Encoding"), &["gzip".to_string()]);
    assert!(out.header_values("Host").is_empty());
}

#[test]
fn exclusion_short_circuits_later_stages() {
    // Arrange
    let stages = vec![
        Stage::method_restrict(["GET"]),
        Stage::enable(Component::Query),
    ];
    let req = NormalizedRequest::new("POST", "/").with_query("a", "1");

    // Act
    let out = StagePipeline::run(&stages, req);

    // Assert
    assert!(out.is_excluded());
    assert!(!out.is_included(Component::Query));
}

#[test]
fn later_gate_can_still_exclude() {
    let stages = vec![
        Stage::method_restrict(["GET"]),
        Stage::enable(Component::Query),
        Stage::path_except(["/private*"]),
    ];

    let out = StagePipeline::run(&stages, NormalizedRequest::new("GET", "/private/x"));

    assert!(out.is_excluded());
    assert!(out.is_included(Component::Query));
}
