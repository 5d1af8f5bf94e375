use serde::{Deserialize, Serialize};

/// Complete Loki configuration document.
///
/// Field order is the key order of the rendered file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub target: String,
    pub auth_enabled: bool,
    pub common: CommonConfig,
    pub ingester: IngesterConfig,
    pub ruler: RulerConfig,
    pub schema_config: SchemaConfig,
    pub server: ServerConfig,
    pub storage_config: StorageConfig,
}

impl ServiceConfig {
    pub const TOP_LEVEL_KEYS: [&'static str; 8] = [
        "target",
        "auth_enabled",
        "common",
        "ingester",
        "ruler",
        "schema_config",
        "server",
        "storage_config",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonConfig {
    pub path_prefix: String,
    pub replication_factor: u32,
    pub ring: RingConfig,
    pub storage: CommonStorage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingConfig {
    pub instance_addr: String,
    pub kvstore: KvStore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvStore {
    pub store: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonStorage {
    pub filesystem: CommonFilesystem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonFilesystem {
    pub chunks_directory: String,
    pub rules_directory: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngesterConfig {
    pub wal: WalConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalConfig {
    pub dir: String,
    pub enabled: bool,
    pub flush_on_shutdown: bool,
}

/// Alerting endpoints, copied verbatim from the builder input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulerConfig {
    pub alertmanager_url: String,
    pub external_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    pub configs: Vec<PeriodConfig>,
}

/// One schema period, active from `from` onward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodConfig {
    pub from: String,
    pub index: IndexConfig,
    pub object_store: String,
    pub schema: String,
    pub store: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    pub period: String,
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub http_listen_address: String,
    pub http_listen_port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_tls_config: Option<TlsConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsConfig {
    pub cert_file: String,
    pub key_file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub boltdb: DirectoryConfig,
    pub filesystem: DirectoryConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub directory: String,
}
