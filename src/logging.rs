use anyhow::Result;
use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INITED: OnceCell<()> = OnceCell::new();

#[derive(Clone, Debug)]
pub struct LogConfig {
    /// e.g. "loki-config" or caller crate name
    pub service_name: String,
    /// Emit flattened JSON lines instead of pretty output.
    pub json: bool,
}

impl LogConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            json: cfg!(feature = "json"),
        }
    }
}

/// Installs the global subscriber. Later calls, including concurrent ones,
/// are no-ops.
pub fn init_logging(cfg: LogConfig) -> Result<()> {
    INITED.get_or_try_init(|| -> Result<()> {
        let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

        if cfg.json {
            let layer_json = fmt::layer()
                .json()
                .flatten_event(true)
                .with_target(true)
                .with_current_span(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer_json)
                .try_init()?;
        } else {
            let layer_stdout = fmt::layer()
                .with_target(true)
                .pretty()
                .with_ansi(atty::is(atty::Stream::Stdout));
            tracing_subscriber::registry()
                .with(filter)
                .with(layer_stdout)
                .try_init()?;
        }

        tracing::info!(service = %cfg.service_name, json = cfg.json, "logging initialised");
        Ok(())
    })?;

    Ok(())
}
