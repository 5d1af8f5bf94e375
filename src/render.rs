//! Serialization of [`ServiceConfig`] documents.

use crate::model::ServiceConfig;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("yaml serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders the document in the format Loki reads from its config file.
pub fn render_yaml(cfg: &ServiceConfig) -> Result<String, RenderError> {
    Ok(serde_yaml::to_string(cfg)?)
}

pub fn render_json(cfg: &ServiceConfig) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(cfg)?)
}

/// Converts the document into an order-preserving JSON value.
pub fn to_value(cfg: &ServiceConfig) -> Result<serde_json::Value, RenderError> {
    Ok(serde_json::to_value(cfg)?)
}

/// Reads back a previously rendered YAML document.
pub fn parse_yaml(input: &str) -> Result<ServiceConfig, RenderError> {
    Ok(serde_yaml::from_str(input)?)
}
