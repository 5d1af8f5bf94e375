use crate::config::BuilderConfig;
use crate::model::{
    CommonConfig, CommonFilesystem, CommonStorage, DirectoryConfig, IndexConfig, IngesterConfig,
    KvStore, PeriodConfig, RingConfig, RulerConfig, SchemaConfig, ServerConfig, ServiceConfig,
    StorageConfig, TlsConfig, WalConfig,
};
use crate::paths::{
    BOLTDB_DIR, CERT_FILE, CHUNKS_DIR, HTTP_LISTEN_ADDRESS, HTTP_LISTEN_PORT, INDEX_PERIOD,
    INDEX_PREFIX, KEY_FILE, LOKI_DIR, RULES_DIR, SCHEMA_FROM, SCHEMA_VERSION, WAL_DIR,
};
use crate::render::{self, RenderError};

const TARGET: &str = "all";
const AUTH_ENABLED: bool = false;
const REPLICATION_FACTOR: u32 = 1;
const KVSTORE: &str = "inmemory";
const OBJECT_STORE: &str = "filesystem";
const INDEX_STORE: &str = "boltdb";

/// Builds the minimal configuration Loki needs to start: storage paths,
/// schema, ring and server settings.
///
/// Every call to [`ConfigBuilder::build`] produces a fresh document; each
/// section can also be built on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBuilder {
    cfg: BuilderConfig,
}

impl ConfigBuilder {
    pub fn new(cfg: BuilderConfig) -> Self {
        Self { cfg }
    }

    pub fn from_parts<A, M, E>(
        instance_addr: A,
        alertmanager_url: M,
        external_url: E,
        http_tls: bool,
    ) -> Self
    where
        A: Into<String>,
        M: Into<String>,
        E: Into<String>,
    {
        Self::new(
            BuilderConfig::new(instance_addr, alertmanager_url, external_url)
                .with_http_tls(http_tls),
        )
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.cfg
    }

    pub fn build(&self) -> ServiceConfig {
        tracing::debug!(
            instance_addr = %self.cfg.instance_addr,
            http_tls = self.cfg.http_tls,
            "building loki config"
        );

        ServiceConfig {
            target: TARGET.to_string(),
            auth_enabled: AUTH_ENABLED,
            common: self.common(),
            ingester: self.ingester(),
            ruler: self.ruler(),
            schema_config: self.schema_config(),
            server: self.server(),
            storage_config: self.storage_config(),
        }
    }

    /// Builds the document and renders it as YAML, ready for [`crate::paths::LOKI_CONFIG`].
    pub fn render_yaml(&self) -> Result<String, RenderError> {
        render::render_yaml(&self.build())
    }

    pub fn common(&self) -> CommonConfig {
        CommonConfig {
            path_prefix: LOKI_DIR.to_string(),
            replication_factor: REPLICATION_FACTOR,
            ring: RingConfig {
                instance_addr: self.cfg.instance_addr.clone(),
                kvstore: KvStore {
                    store: KVSTORE.to_string(),
                },
            },
            storage: CommonStorage {
                filesystem: CommonFilesystem {
                    chunks_directory: CHUNKS_DIR.to_string(),
                    rules_directory: RULES_DIR.to_string(),
                },
            },
        }
    }

    pub fn ingester(&self) -> IngesterConfig {
        IngesterConfig {
            wal: WalConfig {
                dir: WAL_DIR.to_string(),
                enabled: true,
                flush_on_shutdown: true,
            },
        }
    }

    pub fn ruler(&self) -> RulerConfig {
        RulerConfig {
            alertmanager_url: self.cfg.alertmanager_url.clone(),
            external_url: self.cfg.external_url.clone(),
        }
    }

    pub fn schema_config(&self) -> SchemaConfig {
        SchemaConfig {
            configs: vec![PeriodConfig {
                from: SCHEMA_FROM.to_string(),
                index: IndexConfig {
                    period: INDEX_PERIOD.to_string(),
                    prefix: INDEX_PREFIX.to_string(),
                },
                object_store: OBJECT_STORE.to_string(),
                schema: SCHEMA_VERSION.to_string(),
                store: INDEX_STORE.to_string(),
            }],
        }
    }

    pub fn server(&self) -> ServerConfig {
        let http_tls_config = self.cfg.http_tls.then(|| TlsConfig {
            cert_file: CERT_FILE.to_string(),
            key_file: KEY_FILE.to_string(),
        });

        ServerConfig {
            http_listen_address: HTTP_LISTEN_ADDRESS.to_string(),
            http_listen_port: HTTP_LISTEN_PORT,
            http_tls_config,
        }
    }

    pub fn storage_config(&self) -> StorageConfig {
        StorageConfig {
            boltdb: DirectoryConfig {
                directory: BOLTDB_DIR.to_string(),
            },
            filesystem: DirectoryConfig {
                directory: CHUNKS_DIR.to_string(),
            },
        }
    }
}

impl From<BuilderConfig> for ConfigBuilder {
    fn from(cfg: BuilderConfig) -> Self {
        Self::new(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(http_tls: bool) -> ConfigBuilder {
        ConfigBuilder::from_parts(
            "10.0.0.5",
            "http://am:9093",
            "http://loki.example.com",
            http_tls,
        )
    }

    #[test]
    fn constants_at_top_level() {
        let cfg = builder(false).build();
        assert_eq!(cfg.target, "all");
        assert!(!cfg.auth_enabled);
    }

    #[test]
    fn ingester_wal_under_chunks_dir() {
        let wal = builder(false).ingester().wal;
        assert_eq!(wal.dir, "/loki/chunks/wal");
        assert!(wal.enabled);
        assert!(wal.flush_on_shutdown);
    }

    #[test]
    fn common_section_uses_fixed_paths() {
        let common = builder(false).common();
        assert_eq!(common.path_prefix, "/loki");
        assert_eq!(common.replication_factor, 1);
        assert_eq!(common.ring.instance_addr, "10.0.0.5");
        assert_eq!(common.ring.kvstore.store, "inmemory");
        assert_eq!(common.storage.filesystem.chunks_directory, "/loki/chunks");
        assert_eq!(common.storage.filesystem.rules_directory, "/loki/rules");
    }

    #[test]
    fn storage_section_uses_fixed_paths() {
        let storage = builder(true).storage_config();
        assert_eq!(storage.boltdb.directory, "/loki/boltdb-shipper-active");
        assert_eq!(storage.filesystem.directory, "/loki/chunks");
    }

    #[test]
    fn tls_config_only_when_enabled() {
        assert!(builder(false).server().http_tls_config.is_none());

        let tls = builder(true)
            .server()
            .http_tls_config
            .expect("tls enabled");
        assert_eq!(tls.cert_file, "/etc/loki/certs/loki.cert.pem");
        assert_eq!(tls.key_file, "/etc/loki/certs/loki.key.pem");
    }

    #[test]
    fn from_parts_matches_builder_config() {
        let b = builder(true);
        let expected =
            BuilderConfig::new("10.0.0.5", "http://am:9093", "http://loki.example.com")
                .with_http_tls(true);

        assert_eq!(b.config(), &expected);
        assert_eq!(ConfigBuilder::from(expected), b);
    }

    #[test]
    fn builder_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigBuilder>();
    }
}
