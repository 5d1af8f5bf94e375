use serde::{Deserialize, Serialize};

/// Runtime-known inputs for a Loki configuration document.
///
/// Values are taken as-is; nothing here is trimmed, normalised or validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Address this instance advertises on the ring.
    pub instance_addr: String,
    pub alertmanager_url: String,
    /// URL the ruler puts in alert links.
    pub external_url: String,
    /// Serve HTTP over TLS using the certificate pair under `/etc/loki/certs`.
    #[serde(default)]
    pub http_tls: bool,
}

impl BuilderConfig {
    pub fn new<A, M, E>(instance_addr: A, alertmanager_url: M, external_url: E) -> Self
    where
        A: Into<String>,
        M: Into<String>,
        E: Into<String>,
    {
        Self {
            instance_addr: instance_addr.into(),
            alertmanager_url: alertmanager_url.into(),
            external_url: external_url.into(),
            http_tls: false,
        }
    }

    pub fn with_instance_addr<T>(mut self, instance_addr: T) -> Self
    where
        T: Into<String>,
    {
        self.instance_addr = instance_addr.into();
        self
    }

    pub fn with_alertmanager_url<T>(mut self, url: T) -> Self
    where
        T: Into<String>,
    {
        self.alertmanager_url = url.into();
        self
    }

    pub fn with_external_url<T>(mut self, url: T) -> Self
    where
        T: Into<String>,
    {
        self.external_url = url.into();
        self
    }

    pub fn with_http_tls(mut self, http_tls: bool) -> Self {
        self.http_tls = http_tls;
        self
    }
}
