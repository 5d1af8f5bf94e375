//! Fixed locations inside the Loki workload container.
//!
//! These must match what the Loki image expects on disk; none of them are
//! derived from caller input.

pub const HTTP_LISTEN_PORT: u16 = 3100;
pub const HTTP_LISTEN_ADDRESS: &str = "0.0.0.0";

pub const LOKI_CONFIG_DIR: &str = "/etc/loki";
pub const LOKI_CONFIG: &str = "/etc/loki/loki-local-config.yaml";
pub const LOKI_CERTS_DIR: &str = "/etc/loki/certs";

pub const CERT_FILE: &str = "/etc/loki/certs/loki.cert.pem";
pub const KEY_FILE: &str = "/etc/loki/certs/loki.key.pem";

pub const LOKI_DIR: &str = "/loki";
pub const CHUNKS_DIR: &str = "/loki/chunks";
pub const WAL_DIR: &str = "/loki/chunks/wal";
pub const BOLTDB_DIR: &str = "/loki/boltdb-shipper-active";
pub const RULES_DIR: &str = "/loki/rules";

// Schema entry active since the first deployment; changing any of these
// orphans existing index tables.
pub const SCHEMA_FROM: &str = "2020-10-24";
pub const SCHEMA_VERSION: &str = "v11";
pub const INDEX_PERIOD: &str = "24h";
pub const INDEX_PREFIX: &str = "index_";

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn is_child_of(child: &str, parent: &str) -> bool {
        Path::new(child).parent() == Some(Path::new(parent))
    }

    #[test]
    fn config_and_cert_paths_live_under_config_dir() {
        assert!(is_child_of(LOKI_CONFIG, LOKI_CONFIG_DIR));
        assert!(is_child_of(LOKI_CERTS_DIR, LOKI_CONFIG_DIR));
        assert!(is_child_of(CERT_FILE, LOKI_CERTS_DIR));
        assert!(is_child_of(KEY_FILE, LOKI_CERTS_DIR));
    }

    #[test]
    fn data_dirs_live_under_loki_dir() {
        for dir in [CHUNKS_DIR, BOLTDB_DIR, RULES_DIR] {
            assert!(is_child_of(dir, LOKI_DIR), "{dir} is not under {LOKI_DIR}");
        }
        assert_eq!(WAL_DIR, Path::new(CHUNKS_DIR).join("wal").to_str().unwrap());
    }
}
