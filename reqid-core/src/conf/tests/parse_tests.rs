use crate::conf::{ComponentConfig, GeneratorConfig};
use pretty_assertions::assert_eq;

#[test]
fn parse_full_hcl_config() {
    // Arrange
    let src = r#"
method_restrict = ["GET", "HEAD", "OPTIONS"]
path_except     = ["/health", "/metrics*"]

header = {
  enabled = true
  accept  = ["Host", "Origin", "Authorization", "Accept-Encoding"]
}

query = {
  enabled = true
  drop    = ["utm_*", "gclid", "fbclid"]
}

named_stages = ["normalize-accept-encoding"]
"#;

    // Act
    let cfg: GeneratorConfig = hcl::from_str(src).unwrap();

    // Assert
    assert_eq!(
        cfg,
        GeneratorConfig {
            path_except: Some(["/health", "/metrics*"].into_iter().collect()),
            ..GeneratorConfig::default()
        }
    );
    assert_eq!(cfg.cookie, ComponentConfig::default());
}

#[test]
fn parse_empty_hcl_config() {
    let cfg: GeneratorConfig = hcl::from_str("").unwrap();

    assert_eq!(cfg, GeneratorConfig::empty());
}

#[test]
fn parse_rejects_unknown_fields() {
    let result: Result<GeneratorConfig, _> = hcl::from_str(r#"hash = "md5""#);

    assert!(result.is_err());
}

#[test]
fn parse_rejects_unknown_component_fields() {
    let result: Result<GeneratorConfig, _> = hcl::from_str(
        r#"
cookie = {
  enabled = true
  allow   = ["session"]
}
"#,
    );

    assert!(result.is_err());
}
