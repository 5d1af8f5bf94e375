pub mod builder;
pub mod config;
pub mod logging;
pub mod model;
pub mod paths;
pub mod render;
pub mod testutil;

pub use builder::ConfigBuilder;
pub use config::BuilderConfig;
pub use logging::{LogConfig, init_logging};
pub use model::ServiceConfig;
pub use render::{RenderError, parse_yaml, render_json, render_yaml, to_value};
