//! Command implementations

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use mould_components::{InputTransform, StylePropertyGroups, TransformConfig};
use mould_core::VisualStyle;
use mould_inspector::ParentContext;

/// Read a file, or stdin when the path is `-`
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        return Ok(content);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Load the transform config, falling back to built-in defaults
pub fn load_config(path: Option<&Path>) -> Result<TransformConfig> {
    match path {
        Some(path) => TransformConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(TransformConfig::default()),
    }
}

pub fn parse_groups(props: &str) -> Result<StylePropertyGroups> {
    serde_json::from_str(props).context("Failed to parse style-property groups")
}

pub fn parse_parent(parent: &str) -> Result<ParentContext> {
    serde_json::from_str(parent).context("Failed to parse parent context")
}

/// Run the input transform on JSON props
pub fn transform_json(
    props: &str,
    parent: Option<&str>,
    config: &TransformConfig,
) -> Result<VisualStyle> {
    let groups = parse_groups(props)?;
    let parent = parent.map(parse_parent).transpose()?;
    let style = InputTransform::from_config(config).transform(Some(&groups), parent.as_ref());
    tracing::info!(keys = style.len(), "transformed input props");
    Ok(style)
}

pub fn render(style: &VisualStyle, compact: bool) -> Result<String> {
    let text = if compact {
        serde_json::to_string(style)
    } else {
        serde_json::to_string_pretty(style)
    };
    text.context("Failed to serialize visual style")
}

/// Validate JSON props; `Ok(None)` when every group is valid
pub fn check_json(props: &str) -> Result<Option<String>> {
    let groups = parse_groups(props)?;
    Ok(groups.validate().err().map(|err| err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn transforms_with_parent() {
        let style = transform_json(
            r#"{"fillProps":{"active":true,"color":{"r":0,"g":0,"b":255,"a":1}}}"#,
            Some(r#"{"component":"Stack"}"#),
            &TransformConfig::default(),
        )
        .unwrap();
        assert_eq!(style.get_str("fill"), Some("rgba(0,0,255,1)"));
        assert!(style.contains_key("flexGrow"));
    }

    #[test]
    fn compact_render() {
        let style = transform_json("{}", None, &TransformConfig::default()).unwrap();
        assert_eq!(
            render(&style, true).unwrap(),
            r#"{"width":"auto","height":"auto","value":"","placeholder":"","color":"rgba(0,0,0,1)","size":"14px"}"#
        );
    }

    #[test]
    fn malformed_props_are_errors() {
        let err = transform_json("[1, 2]", None, &TransformConfig::default()).unwrap_err();
        assert!(err.to_string().contains("style-property groups"));
    }

    #[test]
    fn check_reports_first_violation() {
        let report = check_json(r#"{"borderProps":{"active":true,"width":-2,"color":{"r":0,"g":0,"b":0}}}"#)
            .unwrap();
        assert_eq!(
            report.as_deref(),
            Some("invalid `borderProps.width`: must not be negative")
        );
        assert_eq!(check_json("{}").unwrap(), None);
    }
}
