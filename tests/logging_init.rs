use loki_config::{LogConfig, init_logging};

#[test]
fn init_is_idempotent() -> anyhow::Result<()> {
    init_logging(LogConfig::new("loki-config-test"))?;
    init_logging(LogConfig::new("loki-config-test"))?;

    tracing::info!("logging still works after repeated init");
    Ok(())
}
