use crate::request::{Component, NormalizedRequest};
use crate::stage::{FilterPolicy, NamedStage, Stage};
use pretty_assertions::assert_eq;

fn keys(req: &NormalizedRequest, component: Component) -> Vec<String> {
    req.component(component).keys().cloned().collect()
}

//-----------------------------------------------------------------------------
// Method / path gates
//-----------------------------------------------------------------------------
#[test]
fn method_restrict_excludes_unlisted_method() {
    let stage = Stage::method_restrict(["GET", "HEAD", "OPTIONS"]);

    assert!(stage.apply(NormalizedRequest::new("POST", "/")).is_excluded());
    assert!(!stage.apply(NormalizedRequest::new("GET", "/")).is_excluded());
    assert!(!stage.apply(NormalizedRequest::new("", "/")).is_excluded());
}

#[test]
fn method_restrict_is_case_sensitive() {
    let stage = Stage::method_restrict(["GET"]);

    assert!(stage.apply(NormalizedRequest::new("get", "/")).is_excluded());
}

#[test]
fn empty_method_restrict_excludes_everything() {
    let stage = Stage::method_restrict(Vec::<String>::new());

    assert!(stage.apply(NormalizedRequest::new("GET", "/")).is_excluded());
}

#[test]
fn path_restrict_excludes_non_matching_path() {
    let stage = Stage::path_restrict(["/api/*", "/"]);

    assert!(!stage.apply(NormalizedRequest::new("GET", "/api/users")).is_excluded());
    assert!(!stage.apply(NormalizedRequest::new("GET", "/")).is_excluded());
    assert!(stage.apply(NormalizedRequest::new("GET", "/admin")).is_excluded());
}

#[test]
fn path_except_excludes_matching_path() {
    let stage = Stage::path_except(["/health", "/metrics*"]);

    assert!(stage.apply(NormalizedRequest::new("GET", "/metrics/live")).is_excluded());
    assert!(stage.apply(NormalizedRequest::new("GET", "/health")).is_excluded());
    assert!(!stage.apply(NormalizedRequest::new("GET", "/healthz")).is_excluded());
    assert!(!stage.apply(NormalizedRequest::new("GET", "/api/users")).is_excluded());
}

//-----------------------------------------------------------------------------
// Component filters
//-----------------------------------------------------------------------------
#[test]
fn query_accept_keeps_only_matching_keys() {
    // Arrange
    let req = NormalizedRequest::new("GET", "/")
        .with_query("id", "1")
        .with_query("utm_source", "x");
    let stage = Stage::accept_list(Component::Query, ["id"]);

    // Act
    let out = stage.apply(req);

    // Assert
    assert!(out.is_included(Component::Query));
    assert_eq!(keys(&out, Component::Query), vec!["id"]);
}

#[test]
fn query_drop_removes_matching_keys() {
    // Arrange
    let req = NormalizedRequest::new("GET", "/")
        .with_query("id", "1")
        .with_query("utm_source", "x")
        .with_query("utm_medium", "y");
    let stage = Stage::drop_list(Component::Query, ["utm_*"]);

    // Act
    let out = stage.apply(req);

    // Assert
    assert!(out.is_included(Component::Query));
    assert_eq!(keys(&out, Component::Query), vec!["id"]);
}

#[test]
fn header_accept_matches_canonical_names_whatever_the_pattern_case() {
    // Arrange
    let req = NormalizedRequest::new("GET", "/")
        .with_header("HOST", "example.com")
        .with_header("user-agent", "curl")
        .with_header("x-api-key", "k");
    let stage = Stage::accept_list(Component::Header, ["host", "X-API-*"]);

    // Act
    let out = stage.apply(req);

    // Assert
    assert_eq!(keys(&out, Component::Header), vec!["Host", "X-Api-Key"]);
}

#[test]
fn header_drop_matches_canonical_names() {
    let req = NormalizedRequest::new("GET", "/")
        .with_header("cookie", "a=1")
        .with_header("host", "h");
    let stage = Stage::drop_list(Component::Header, ["COOKIE"]);

    assert_eq!(keys(&stage.apply(req), Component::Header), vec!["Host"]);
}

#[test]
fn cookie_accept_and_drop() {
    // Arrange
    let req = NormalizedRequest::new("GET", "/")
        .with_cookie("session", "s")
        .with_cookie("_ga", "g")
        .with_cookie("_gid", "h");

    // Act
    let accepted = Stage::accept_list(Component::Cookie, ["session"]).apply(req.clone());
    let dropped = Stage::drop_list(Component::Cookie, ["_g*"]).apply(req);

    // Assert
    assert_eq!(keys(&accepted, Component::Cookie), vec!["session"]);
    assert_eq!(keys(&dropped, Component::Cookie), vec!["session"]);
}

#[test]
fn enable_includes_without_filtering() {
    let req = NormalizedRequest::new("GET", "/").with_cookie("a", "1");

    let out = Stage::enable(Component::Cookie).apply(req);

    assert!(out.is_included(Component::Cookie));
    assert!(!out.is_included(Component::Header));
    assert_eq!(keys(&out, Component::Cookie), vec!["a"]);
}

#[test]
fn accept_after_drop_composes() {
    // Arrange
    let req = NormalizedRequest::new("GET", "/")
        .with_query("id", "1")
        .with_query("idx", "2")
        .with_query("page", "3");
    let drop = Stage::drop_list(Component::Query, ["idx"]);
    let accept = Stage::accept_list(Component::Query, ["id*"]);

    // Act
    let out = accept.apply(drop.apply(req));

    // Assert
    assert_eq!(keys(&out, Component::Query), vec!["id"]);
}

//-----------------------------------------------------------------------------
// Construction / serde
//-----------------------------------------------------------------------------
#[test]
fn canonicalize_is_idempotent_and_header_only() {
    // Arrange
    let header = Stage::Filter {
        component: Component::Header,
        policy: FilterPolicy::Accept(["accept-encoding"].into_iter().collect()),
    };
    let query = Stage::Filter {
        component: Component::Query,
        policy: FilterPolicy::Accept(["Q"].into_iter().collect()),
    };

    // Act
    let once = header.canonicalize();
    let twice = once.clone().canonicalize();

    // Assert
    assert_eq!(once, twice);
    assert_eq!(
        once,
        Stage::Filter {
            component: Component::Header,
            policy: FilterPolicy::Accept(["Accept-Encoding"].into_iter().collect()),
        }
    );
    assert_eq!(query.clone().canonicalize(), query);
}

#[test]
fn stages_deserialize_from_tagged_values() {
    // Arrange
    let json = r#"[
        {"method_restrict": ["GET"]},
        {"path_except": ["/health"]},
        {"filter": {"component": "query", "policy": {"drop": ["utm_*"]}}},
        {"filter": {"component": "cookie", "policy": "enable"}},
        {"named": "normalize-accept-encoding"}
    ]"#;

    // Act
    let stages: Vec<Stage> = serde_json::from_str(json).unwrap();

    // Assert
    assert_eq!(
        stages,
        vec![
            Stage::method_restrict(["GET"]),
            Stage::path_except(["/health"]),
            Stage::drop_list(Component::Query, ["utm_*"]),
            Stage::enable(Component::Cookie),
            Stage::Named(NamedStage::NormalizeAcceptEncoding),
        ]
    );
}

#[test]
fn unknown_named_stage_fails_to_deserialize() {
    let result: Result<Stage, _> = serde_json::from_str(r#"{"named": "gzip-everything"}"#);

    assert!(result.is_err());
}

#[test]
fn stage_display() {
    assert_eq!(
        Stage::method_restrict(["GET", "HEAD"]).to_string(),
        r#"method_restrict ["GET", "HEAD"]"#
    );
    assert_eq!(
        Stage::accept_list(Component::Header, ["host"]).to_string(),
        r#"header accept ["Host"]"#
    );
    assert_eq!(Stage::enable(Component::Query).to_string(), "query enable");
    assert_eq!(
        Stage::Named(NamedStage::DropTrackingQuery).to_string(),
        "named drop-tracking-query"
    );
}
